// internal modules
use crate::error::{Error, Result};
use crate::tally::Tally;

// labeltools modules
use labeltools_utils::{dispatch_label_view, Label, LabelArray, LabelView};

// external crates
use log::{debug, trace};
use ndarray::{Array, ArrayBase, Axis, Data, Dimension, Zip};
use rayon::prelude::*;

// standard library
use std::ops::RangeInclusive;

/// Volume ranks accepted by [downsample_labels()]
pub const SUPPORTED_RANKS: RangeInclusive<usize> = 1..=3;

/// Downsample a label volume by majority vote over blocks of side `factor`
///
/// Every axis of the output is the matching input axis divided by `factor`,
/// and the element type is unchanged. Each output label is the most frequent
/// label of its block, with ties going to the numerically smallest label.
///
/// If `suppress_zero` is set, `0` is excluded from the vote in any block that
/// contains a nonzero label, even when zero is the most frequent. A block of
/// only zeros still produces `0`.
///
/// The volume is never modified and may be any strided view. Blocks are
/// reduced in parallel on the rayon global pool.
///
/// ```rust
/// # use labeltools_downsample::downsample_labels;
/// # use ndarray::array;
/// let labels = array![
///     [0_u32, 0, 1, 1, 2, 2, 3, 3],
///     [0, 0, 1, 0, 2, 0, 3, 0],
///     [0, 0, 0, 0, 2, 2, 3, 3],
///     [0, 0, 8, 9, 8, 9, 8, 9],
/// ];
///
/// let reduced = downsample_labels(&labels, 2, false).unwrap();
/// assert_eq!(reduced, array![[0, 1, 2, 3], [0, 0, 2, 3]]);
///
/// let reduced = downsample_labels(&labels, 2, true).unwrap();
/// assert_eq!(reduced, array![[0, 1, 2, 3], [0, 8, 2, 3]]);
/// ```
///
/// ## Errors
///
/// Checked in this order before any work is done:
///
/// - [UnsupportedRank](Error::UnsupportedRank) outside of [SUPPORTED_RANKS]
/// - [EmptyAxis](Error::EmptyAxis) for any zero-length axis
/// - [InvalidFactor](Error::InvalidFactor) for a factor of zero
/// - [IndivisibleAxis](Error::IndivisibleAxis) if an axis is not a multiple
///   of `factor`
pub fn downsample_labels<T, S, D>(
    volume: &ArrayBase<S, D>,
    factor: usize,
    suppress_zero: bool,
) -> Result<Array<T, D>>
where
    T: Label,
    S: Data<Elem = T>,
    D: Dimension,
{
    check_shape(volume.shape(), factor)?;

    debug!(
        "Downsampling {:?} {} volume by {factor} (suppress_zero: {suppress_zero})",
        volume.shape(),
        T::DTYPE
    );

    if factor == 1 {
        trace!("Factor of 1, copying the volume");
        return Ok(volume.to_owned());
    }

    // block chunking needs non-negative strides, so reversed axes are read
    // forwards and the output is flipped back afterwards
    let mut view = volume.view();
    let reversed: Vec<Axis> = (0..view.ndim())
        .map(Axis)
        .filter(|&axis| view.stride_of(axis) < 0)
        .collect();
    reversed.iter().for_each(|&axis| view.invert_axis(axis));

    let mut reduced_dim = volume.raw_dim();
    reduced_dim.slice_mut().iter_mut().for_each(|n| *n /= factor);

    let mut block_dim = volume.raw_dim();
    block_dim.slice_mut().fill(factor);

    let block_len = factor.pow(volume.ndim() as u32);
    let mut reduced = Array::<T, D>::default(reduced_dim);

    Zip::from(&mut reduced)
        .and(view.exact_chunks(block_dim))
        .into_par_iter()
        .for_each_init(
            || Tally::with_capacity(block_len),
            |tally, (label, block)| *label = tally.majority(&block, suppress_zero),
        );

    if reversed.is_empty() {
        return Ok(reduced);
    }

    trace!("Restoring {} reversed axes", reversed.len());
    reversed.iter().for_each(|&axis| reduced.invert_axis(axis));
    Ok(reduced.as_standard_layout().into_owned())
}

/// Downsample a runtime-typed label volume
///
/// Same rules as [downsample_labels()], returning a [LabelArray] of the same
/// width as the input.
///
/// ```rust
/// # use labeltools_downsample::downsample_labels_dyn;
/// # use labeltools_utils::{Dtype, LabelView};
/// # use ndarray::ArrayD;
/// let volume = ArrayD::<u16>::from_elem(vec![4, 4, 4], 9);
/// let reduced = downsample_labels_dyn(&LabelView::from(volume.view()), 4, false).unwrap();
///
/// assert_eq!(reduced.dtype(), Dtype::U16);
/// assert_eq!(reduced.shape(), &[1, 1, 1]);
/// ```
pub fn downsample_labels_dyn(
    volume: &LabelView<'_>,
    factor: usize,
    suppress_zero: bool,
) -> Result<LabelArray> {
    dispatch_label_view!(volume, v => {
        downsample_labels(v, factor, suppress_zero).map(LabelArray::from)
    })
}

fn check_shape(shape: &[usize], factor: usize) -> Result<()> {
    if !SUPPORTED_RANKS.contains(&shape.len()) {
        return Err(Error::UnsupportedRank { ndim: shape.len() });
    }

    if let Some(axis) = shape.iter().position(|&n| n == 0) {
        return Err(Error::EmptyAxis {
            axis,
            shape: shape.to_vec(),
        });
    }

    if factor == 0 {
        return Err(Error::InvalidFactor { factor });
    }

    match shape.iter().position(|&n| n % factor != 0) {
        Some(axis) => Err(Error::IndivisibleAxis {
            axis,
            length: shape[axis],
            factor,
        }),
        None => Ok(()),
    }
}
