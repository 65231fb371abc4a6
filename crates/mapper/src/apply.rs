//! Applying a [LabelMapper] to label arrays
//!
//! Every element is resolved independently, so each mode is a single
//! data-parallel pass over the input. Modes that write into storage owned by
//! the caller (`apply_into`, `apply_inplace`) first run a read-only
//! validation pass whenever a failure is possible. A failed call therefore
//! never leaves the caller's array half written.

// internal modules
use crate::error::{Error, Result};
use crate::mapper::LabelMapper;
use crate::miss::{Failures, Miss};

// labeltools modules
use labeltools_utils::Label;

// external crates
use log::debug;
use ndarray::{Array, ArrayBase, Data, DataMut, Dimension, Zip};

/// Policy for labels that have no entry in the mapping
///
/// The `apply*` methods on [LabelMapper] are thin wrappers choosing one of
/// these, and [apply_with()](LabelMapper::apply_with) takes one directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Unmapped<C> {
    /// Fail with [UnmappedValue](Error::UnmappedValue)
    #[default]
    Reject,
    /// Copy the original value to the output unchanged
    Preserve,
    /// Write this label instead
    Replace(C),
}

impl<C> Unmapped<C> {
    /// Reject or preserve, from the common `allow_unmapped` flag
    pub fn from_allow_unmapped(allow_unmapped: bool) -> Self {
        match allow_unmapped {
            true => Unmapped::Preserve,
            false => Unmapped::Reject,
        }
    }
}

impl<D: Label, C: Label> LabelMapper<D, C> {
    /// Remap every element into a new array of the codomain type
    ///
    /// The output has the shape of `src` and element type `C`. Elements found
    /// in the domain are replaced by their codomain label. Elements that are
    /// not:
    ///
    /// - fail the call with [UnmappedValue](Error::UnmappedValue) if
    ///   `allow_unmapped` is `false`, reporting the smallest such label
    /// - are copied through with their numeric value unchanged if `true`
    ///
    /// A preserved label too large for `C` fails with
    /// [UnrepresentableValue](Error::UnrepresentableValue) rather than being
    /// truncated.
    ///
    /// `src` may be of any unsigned width, rank, and memory layout, and is
    /// never modified.
    ///
    /// ```rust
    /// # use labeltools_mapper::LabelMapper;
    /// # use ndarray::array;
    /// let domain: Vec<u32> = (0..10).collect();
    /// let codomain: Vec<u16> = (100..110).collect();
    /// let mapper = LabelMapper::new(&domain, &codomain).unwrap();
    ///
    /// let labels = array![[5_u8, 0], [9, 127]];
    ///
    /// // 127 is not in the mapping
    /// assert!(mapper.apply(&labels, false).is_err());
    ///
    /// // Unless unmapped labels are allowed through
    /// let remapped = mapper.apply(&labels, true).unwrap();
    /// assert_eq!(remapped, array![[105_u16, 100], [109, 127]]);
    /// ```
    pub fn apply<I, S, Dm>(
        &self,
        src: &ArrayBase<S, Dm>,
        allow_unmapped: bool,
    ) -> Result<Array<C, Dm>>
    where
        I: Label,
        S: Data<Elem = I>,
        Dm: Dimension,
    {
        self.apply_with(src, Unmapped::from_allow_unmapped(allow_unmapped))
    }

    /// Remap every element, writing `default` for anything unmapped
    ///
    /// Identical to [apply()](LabelMapper::apply) with unmapped labels
    /// allowed, except that they are replaced by `default` instead of being
    /// passed through. The default is checked against the codomain width
    /// before any work is done, and fails with
    /// [DefaultOutOfRange](Error::DefaultOutOfRange) if it does not fit.
    ///
    /// ```rust
    /// # use labeltools_mapper::LabelMapper;
    /// # use ndarray::array;
    /// let mapper = LabelMapper::<u64, u8>::new(&[1, 2], &[10, 20]).unwrap();
    ///
    /// let remapped = mapper.apply_with_default(&array![1_u64, 2, 3], 99).unwrap();
    /// assert_eq!(remapped, array![10_u8, 20, 99]);
    ///
    /// // 300 does not fit the u8 codomain
    /// assert!(mapper.apply_with_default(&array![1_u64], 300).is_err());
    /// ```
    pub fn apply_with_default<I, S, Dm>(
        &self,
        src: &ArrayBase<S, Dm>,
        default: u64,
    ) -> Result<Array<C, Dm>>
    where
        I: Label,
        S: Data<Elem = I>,
        Dm: Dimension,
    {
        let replacement = C::from_u64(default).ok_or(Error::DefaultOutOfRange {
            value: default,
            dtype: C::DTYPE,
        })?;
        self.apply_with(src, Unmapped::Replace(replacement))
    }

    /// Remap every element with an explicit [Unmapped] policy
    pub fn apply_with<I, S, Dm>(
        &self,
        src: &ArrayBase<S, Dm>,
        policy: Unmapped<C>,
    ) -> Result<Array<C, Dm>>
    where
        I: Label,
        S: Data<Elem = I>,
        Dm: Dimension,
    {
        debug!(
            "Remapping {:?} {} array to {} ({policy:?})",
            src.shape(),
            I::DTYPE,
            C::DTYPE
        );

        let failures = Failures::default();
        let output = Zip::from(src).par_map_collect(|&value| {
            self.resolve(value, policy).unwrap_or_else(|miss| {
                failures.record(miss);
                C::default()
            })
        });

        failures.into_result(|value| Error::UnrepresentableValue {
            value,
            dtype: C::DTYPE,
        })?;
        Ok(output)
    }

    /// Remap every element of `src` into an existing array
    ///
    /// Same rules as [apply()](LabelMapper::apply), but the result is written
    /// into `dst`, which must have exactly the shape of `src`
    /// ([MismatchedShape](Error::MismatchedShape) otherwise). On any error
    /// `dst` is left untouched.
    pub fn apply_into<I, S, So, Dm>(
        &self,
        src: &ArrayBase<S, Dm>,
        dst: &mut ArrayBase<So, Dm>,
        allow_unmapped: bool,
    ) -> Result<()>
    where
        I: Label,
        S: Data<Elem = I>,
        So: DataMut<Elem = C>,
        Dm: Dimension,
    {
        if src.shape() != dst.shape() {
            return Err(Error::MismatchedShape {
                expected: src.shape().to_vec(),
                found: dst.shape().to_vec(),
            });
        }

        debug!(
            "Remapping {:?} {} array into existing {} array",
            src.shape(),
            I::DTYPE,
            C::DTYPE
        );

        // a preserved label can only overflow if the input is wider
        let policy = Unmapped::from_allow_unmapped(allow_unmapped);
        if policy == Unmapped::Reject || I::DTYPE > C::DTYPE {
            self.validate(src, policy)?;
        }

        Zip::from(dst).and(src).par_for_each(|out, &value| {
            if let Ok(label) = self.resolve(value, policy) {
                *out = label;
            }
        });

        Ok(())
    }

    /// Remap every element of `array` in place
    ///
    /// The element width of `array` is fixed, so every codomain label written
    /// must fit in it. Unmapped labels follow the same `allow_unmapped` rule as
    /// [apply()](LabelMapper::apply), and are left unchanged when allowed.
    ///
    /// The call is atomic. If unmapped labels are rejected, or the mapping
    /// holds codomain labels too large for `array`, the whole array is checked
    /// before anything is written, and the call fails with
    /// [UnmappedValue](Error::UnmappedValue) or
    /// [CodomainOutOfRange](Error::CodomainOutOfRange) without modifying it.
    ///
    /// ```rust
    /// # use labeltools_mapper::LabelMapper;
    /// # use ndarray::array;
    /// let mapper = LabelMapper::<u8, u16>::new(&[1, 2], &[100, 1000]).unwrap();
    ///
    /// let mut labels = array![1_u16, 2, 1000];
    /// mapper.apply_inplace(&mut labels, true).unwrap();
    /// assert_eq!(labels, array![100, 1000, 1000]);
    ///
    /// // 1000 can not be written into a u8 array
    /// let mut narrow = array![1_u8, 2];
    /// assert!(mapper.apply_inplace(&mut narrow, true).is_err());
    /// assert_eq!(narrow, array![1, 2]);
    /// ```
    pub fn apply_inplace<I, S, Dm>(
        &self,
        array: &mut ArrayBase<S, Dm>,
        allow_unmapped: bool,
    ) -> Result<()>
    where
        I: Label,
        S: DataMut<Elem = I>,
        Dm: Dimension,
    {
        debug!("Remapping {:?} {} array in place", array.shape(), I::DTYPE);

        let reject = !allow_unmapped;
        let may_overflow = self
            .codomain_max()
            .is_some_and(|max| !I::DTYPE.can_hold(max.to_u64()));

        if reject || may_overflow {
            let failures = Failures::default();
            Zip::from(&*array).par_for_each(|&value| match self.map_value(value) {
                Some(label) if I::from_u64(label.to_u64()).is_none() => {
                    failures.record(Miss::Overflow(label.to_u64()))
                }
                None if reject => failures.record(Miss::Unmapped(value.to_u64())),
                _ => (),
            });
            failures.into_result(|value| Error::CodomainOutOfRange {
                value,
                dtype: I::DTYPE,
            })?;
        }

        Zip::from(array).par_for_each(|value| {
            if let Some(label) = self.map_value(*value).and_then(|l| I::from_u64(l.to_u64())) {
                *value = label;
            }
        });

        Ok(())
    }

    /// Resolve a single element under the given policy
    #[inline]
    fn resolve<I: Label>(&self, value: I, policy: Unmapped<C>) -> core::result::Result<C, Miss> {
        if let Some(label) = self.map_value(value) {
            return Ok(label);
        }

        match policy {
            Unmapped::Reject => Err(Miss::Unmapped(value.to_u64())),
            Unmapped::Preserve => {
                C::from_u64(value.to_u64()).ok_or(Miss::Overflow(value.to_u64()))
            }
            Unmapped::Replace(label) => Ok(label),
        }
    }

    /// Read-only pass reporting any element that would fail to resolve
    fn validate<I, S, Dm>(&self, src: &ArrayBase<S, Dm>, policy: Unmapped<C>) -> Result<()>
    where
        I: Label,
        S: Data<Elem = I>,
        Dm: Dimension,
    {
        let failures = Failures::default();
        Zip::from(src).par_for_each(|&value| {
            if let Err(miss) = self.resolve(value, policy) {
                failures.record(miss);
            }
        });

        failures.into_result(|value| Error::UnrepresentableValue {
            value,
            dtype: C::DTYPE,
        })
    }
}
