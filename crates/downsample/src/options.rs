// internal modules
use crate::downsample::{downsample_labels, downsample_labels_dyn};
use crate::error::Result;

// labeltools modules
use labeltools_utils::{Label, LabelArray, LabelView};

// external crates
use ndarray::{Array, ArrayBase, Data, Dimension};
use serde::{Deserialize, Serialize};

/// Downsampling settings, for pipelines that configure the step up front
///
/// Missing fields take their default values when deserialised.
///
/// ```rust
/// # use labeltools_downsample::DownsampleOptions;
/// # use ndarray::Array3;
/// let options = DownsampleOptions::new(4).with_suppress_zero(true);
///
/// let volume = Array3::<u64>::zeros((8, 8, 8));
/// let reduced = options.apply(&volume).unwrap();
/// assert_eq!(reduced.shape(), &[2, 2, 2]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DownsampleOptions {
    /// Side length of the blocks reduced to a single label
    pub factor: usize,
    /// Exclude zero from the vote in blocks with any nonzero label
    pub suppress_zero: bool,
}

impl Default for DownsampleOptions {
    fn default() -> Self {
        Self {
            factor: 2,
            suppress_zero: false,
        }
    }
}

impl DownsampleOptions {
    /// Blocks of side `factor`, with zero taking part in the vote
    pub fn new(factor: usize) -> Self {
        Self {
            factor,
            ..Default::default()
        }
    }

    /// Set whether zero is excluded from mixed blocks
    pub fn with_suppress_zero(mut self, suppress_zero: bool) -> Self {
        self.suppress_zero = suppress_zero;
        self
    }

    /// See [downsample_labels()]
    pub fn apply<T, S, D>(&self, volume: &ArrayBase<S, D>) -> Result<Array<T, D>>
    where
        T: Label,
        S: Data<Elem = T>,
        D: Dimension,
    {
        downsample_labels(volume, self.factor, self.suppress_zero)
    }

    /// See [downsample_labels_dyn()]
    pub fn apply_dyn(&self, volume: &LabelView<'_>) -> Result<LabelArray> {
        downsample_labels_dyn(volume, self.factor, self.suppress_zero)
    }
}
