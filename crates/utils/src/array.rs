//! Runtime-typed wrappers around label arrays
//!
//! The toolkit is generic over [Label] at compile time, but callers reading
//! volumes from storage usually only learn the element width at runtime. These
//! wrappers carry that width alongside the data.

// internal modules
use crate::dtype::Dtype;
use crate::error::Result;
use crate::label::Label;
use crate::{dispatch_label_array, dispatch_label_view, dispatch_label_view_mut};

// external crates
use ndarray::{ArrayD, ArrayViewD, ArrayViewMutD};

/// Owned label array of any supported width
///
/// ```rust
/// # use labeltools_utils::{Dtype, LabelArray};
/// # use ndarray::ArrayD;
/// let labels = LabelArray::from(ArrayD::<u32>::zeros(vec![4, 4, 4]));
/// assert_eq!(labels.dtype(), Dtype::U32);
/// assert_eq!(labels.shape(), &[4, 4, 4]);
///
/// // Recover the typed array
/// let typed = labels.into_typed::<u32>().unwrap();
/// assert_eq!(typed.len(), 64);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum LabelArray {
    /// 8-bit labels
    U8(ArrayD<u8>),
    /// 16-bit labels
    U16(ArrayD<u16>),
    /// 32-bit labels
    U32(ArrayD<u32>),
    /// 64-bit labels
    U64(ArrayD<u64>),
}

/// Borrowed, read-only label view of any supported width
///
/// The view keeps the strides of whatever it was taken from, so slices and
/// transposed views of larger volumes are wrapped without copying.
#[derive(Debug, Clone)]
pub enum LabelView<'a> {
    /// 8-bit labels
    U8(ArrayViewD<'a, u8>),
    /// 16-bit labels
    U16(ArrayViewD<'a, u16>),
    /// 32-bit labels
    U32(ArrayViewD<'a, u32>),
    /// 64-bit labels
    U64(ArrayViewD<'a, u64>),
}

/// Borrowed, mutable label view of any supported width
#[derive(Debug)]
pub enum LabelViewMut<'a> {
    /// 8-bit labels
    U8(ArrayViewMutD<'a, u8>),
    /// 16-bit labels
    U16(ArrayViewMutD<'a, u16>),
    /// 32-bit labels
    U32(ArrayViewMutD<'a, u32>),
    /// 64-bit labels
    U64(ArrayViewMutD<'a, u64>),
}

impl LabelArray {
    /// Element width of the array
    pub fn dtype(&self) -> Dtype {
        match self {
            LabelArray::U8(_) => Dtype::U8,
            LabelArray::U16(_) => Dtype::U16,
            LabelArray::U32(_) => Dtype::U32,
            LabelArray::U64(_) => Dtype::U64,
        }
    }

    /// Length of every axis
    pub fn shape(&self) -> &[usize] {
        dispatch_label_array!(self, a => a.shape())
    }

    /// Number of axes
    pub fn ndim(&self) -> usize {
        dispatch_label_array!(self, a => a.ndim())
    }

    /// Total number of elements
    pub fn len(&self) -> usize {
        dispatch_label_array!(self, a => a.len())
    }

    /// True if any axis has zero length
    pub fn is_empty(&self) -> bool {
        dispatch_label_array!(self, a => a.is_empty())
    }

    /// Borrow as a read-only [LabelView]
    pub fn view(&self) -> LabelView<'_> {
        dispatch_label_array!(self, a => a.view().into())
    }

    /// Borrow as a mutable [LabelViewMut]
    pub fn view_mut(&mut self) -> LabelViewMut<'_> {
        dispatch_label_array!(self, a => a.view_mut().into())
    }

    /// Unwrap into the typed array
    ///
    /// Fails with [DtypeMismatch](crate::Error::DtypeMismatch) if `T` is not
    /// the width held by the array. Nothing is converted.
    pub fn into_typed<T: Label>(self) -> Result<ArrayD<T>> {
        T::from_label_array(self)
    }
}

impl LabelView<'_> {
    /// Element width of the view
    pub fn dtype(&self) -> Dtype {
        match self {
            LabelView::U8(_) => Dtype::U8,
            LabelView::U16(_) => Dtype::U16,
            LabelView::U32(_) => Dtype::U32,
            LabelView::U64(_) => Dtype::U64,
        }
    }

    /// Length of every axis
    pub fn shape(&self) -> &[usize] {
        dispatch_label_view!(self, v => v.shape())
    }

    /// Number of axes
    pub fn ndim(&self) -> usize {
        dispatch_label_view!(self, v => v.ndim())
    }

    /// Total number of elements
    pub fn len(&self) -> usize {
        dispatch_label_view!(self, v => v.len())
    }

    /// True if any axis has zero length
    pub fn is_empty(&self) -> bool {
        dispatch_label_view!(self, v => v.is_empty())
    }

    /// Copy into a new standard layout [LabelArray]
    pub fn to_label_array(&self) -> LabelArray {
        dispatch_label_view!(self, v => v.to_owned().into())
    }
}

impl LabelViewMut<'_> {
    /// Element width of the view
    pub fn dtype(&self) -> Dtype {
        match self {
            LabelViewMut::U8(_) => Dtype::U8,
            LabelViewMut::U16(_) => Dtype::U16,
            LabelViewMut::U32(_) => Dtype::U32,
            LabelViewMut::U64(_) => Dtype::U64,
        }
    }

    /// Length of every axis
    pub fn shape(&self) -> &[usize] {
        dispatch_label_view_mut!(self, v => v.shape())
    }

    /// Number of axes
    pub fn ndim(&self) -> usize {
        dispatch_label_view_mut!(self, v => v.ndim())
    }

    /// Total number of elements
    pub fn len(&self) -> usize {
        dispatch_label_view_mut!(self, v => v.len())
    }

    /// True if any axis has zero length
    pub fn is_empty(&self) -> bool {
        dispatch_label_view_mut!(self, v => v.is_empty())
    }

    /// Reborrow as a read-only [LabelView]
    pub fn view(&self) -> LabelView<'_> {
        dispatch_label_view_mut!(self, v => v.view().into())
    }
}

impl<T: Label> From<ArrayD<T>> for LabelArray {
    fn from(array: ArrayD<T>) -> Self {
        T::into_label_array(array)
    }
}

impl<'a, T: Label> From<ArrayViewD<'a, T>> for LabelView<'a> {
    fn from(view: ArrayViewD<'a, T>) -> Self {
        T::into_label_view(view)
    }
}

impl<'a, T: Label> From<ArrayViewMutD<'a, T>> for LabelViewMut<'a> {
    fn from(view: ArrayViewMutD<'a, T>) -> Self {
        T::into_label_view_mut(view)
    }
}
