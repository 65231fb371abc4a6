// internal modules
use crate::array::{LabelArray, LabelView, LabelViewMut};
use crate::dtype::Dtype;
use crate::error::{Error, Result};

// external crates
use ndarray::{ArrayD, ArrayViewD, ArrayViewMutD};

// standard library
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Element type of a label array
///
/// Implemented for the unsigned integer primitives `u8`, `u16`, `u32`, and
/// `u64`. Conversions go through `u64` so that any two widths can be compared
/// without truncation: widening is always lossless, and narrowing is checked.
///
/// ```rust
/// # use labeltools_utils::{Dtype, Label};
/// assert_eq!(<u16 as Label>::DTYPE, Dtype::U16);
///
/// // Widening is lossless
/// assert_eq!(200_u8.to_u64(), 200);
///
/// // Narrowing is checked, never truncated
/// assert_eq!(<u8 as Label>::from_u64(200), Some(200_u8));
/// assert_eq!(<u8 as Label>::from_u64(1000), None);
/// ```
pub trait Label:
    Copy + Default + Eq + Ord + Hash + Debug + Display + Send + Sync + 'static
{
    /// Runtime tag for the element width
    const DTYPE: Dtype;

    /// Lossless widening to `u64`
    fn to_u64(self) -> u64;

    /// Checked narrowing from `u64`, `None` if the value does not fit
    fn from_u64(value: u64) -> Option<Self>;

    /// True for the background label
    #[inline]
    fn is_zero(self) -> bool {
        self == Self::default()
    }

    /// Wrap a typed array in the dynamic [LabelArray]
    fn into_label_array(array: ArrayD<Self>) -> LabelArray;

    /// Unwrap a dynamic [LabelArray], failing if the width is wrong
    fn from_label_array(array: LabelArray) -> Result<ArrayD<Self>>;

    /// Wrap a typed view in the dynamic [LabelView]
    fn into_label_view(view: ArrayViewD<'_, Self>) -> LabelView<'_>;

    /// Wrap a typed mutable view in the dynamic [LabelViewMut]
    fn into_label_view_mut(view: ArrayViewMutD<'_, Self>) -> LabelViewMut<'_>;
}

macro_rules! impl_label {
    ($t:ty, $variant:ident) => {
        impl Label for $t {
            const DTYPE: Dtype = Dtype::$variant;

            #[inline]
            fn to_u64(self) -> u64 {
                u64::from(self)
            }

            #[inline]
            fn from_u64(value: u64) -> Option<Self> {
                <$t>::try_from(value).ok()
            }

            fn into_label_array(array: ArrayD<Self>) -> LabelArray {
                LabelArray::$variant(array)
            }

            fn from_label_array(array: LabelArray) -> Result<ArrayD<Self>> {
                match array {
                    LabelArray::$variant(array) => Ok(array),
                    other => Err(Error::DtypeMismatch {
                        expected: Dtype::$variant,
                        found: other.dtype(),
                    }),
                }
            }

            fn into_label_view(view: ArrayViewD<'_, Self>) -> LabelView<'_> {
                LabelView::$variant(view)
            }

            fn into_label_view_mut(view: ArrayViewMutD<'_, Self>) -> LabelViewMut<'_> {
                LabelViewMut::$variant(view)
            }
        }
    };
}

impl_label!(u8, U8);
impl_label!(u16, U16);
impl_label!(u32, U32);
impl_label!(u64, U64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrowing_is_checked() {
        assert_eq!(<u8 as Label>::from_u64(255), Some(255));
        assert_eq!(<u8 as Label>::from_u64(256), None);
        assert_eq!(<u16 as Label>::from_u64(65_536), None);
        assert_eq!(<u32 as Label>::from_u64(u64::from(u32::MAX) + 1), None);
        assert_eq!(<u64 as Label>::from_u64(u64::MAX), Some(u64::MAX));
    }

    #[test]
    fn dtype_tags() {
        assert_eq!(<u8 as Label>::DTYPE, Dtype::U8);
        assert_eq!(<u16 as Label>::DTYPE, Dtype::U16);
        assert_eq!(<u32 as Label>::DTYPE, Dtype::U32);
        assert_eq!(<u64 as Label>::DTYPE, Dtype::U64);
    }

    #[test]
    fn zero_is_background() {
        assert!(0_u32.is_zero());
        assert!(!7_u32.is_zero());
    }
}
