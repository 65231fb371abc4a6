//! Runtime-typed label mapping
//!
//! [DynLabelMapper] wraps one explicit [LabelMapper] instantiation per
//! domain/codomain width pair. The pair is chosen once at construction from
//! the widths of the provided lists, and the input width is chosen per call
//! from the array, so every lookup runs on concrete integer types.

// internal modules
use crate::error::{Error, Result};
use crate::mapper::LabelMapper;

// labeltools modules
use labeltools_utils::{
    dispatch_label_view, dispatch_label_view_mut, Dtype, Label, LabelArray, LabelView,
    LabelViewMut,
};

// external crates
use log::debug;
use ndarray::ArrayViewD;

/// A [LabelMapper] whose native widths are only known at runtime
///
/// ```rust
/// # use labeltools_mapper::DynLabelMapper;
/// # use labeltools_utils::{Dtype, LabelView};
/// # use ndarray::{arr1, ArrayD};
/// let domain = arr1(&[1_u64, 2, 3]).into_dyn();
/// let codomain = arr1(&[10_u32, 20, 30]).into_dyn();
///
/// let mapper = DynLabelMapper::new(
///     &LabelView::from(domain.view()),
///     &LabelView::from(codomain.view()),
/// )
/// .unwrap();
/// assert_eq!(mapper.codomain_dtype(), Dtype::U32);
///
/// let labels = ArrayD::<u8>::from_elem(vec![2, 2], 3);
/// let remapped = mapper.apply(&LabelView::from(labels.view()), false).unwrap();
///
/// assert_eq!(remapped.dtype(), Dtype::U32);
/// assert!(remapped.into_typed::<u32>().unwrap().iter().all(|&v| v == 30));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum DynLabelMapper {
    U8U8(LabelMapper<u8, u8>),
    U8U16(LabelMapper<u8, u16>),
    U8U32(LabelMapper<u8, u32>),
    U8U64(LabelMapper<u8, u64>),
    U16U8(LabelMapper<u16, u8>),
    U16U16(LabelMapper<u16, u16>),
    U16U32(LabelMapper<u16, u32>),
    U16U64(LabelMapper<u16, u64>),
    U32U8(LabelMapper<u32, u8>),
    U32U16(LabelMapper<u32, u16>),
    U32U32(LabelMapper<u32, u32>),
    U32U64(LabelMapper<u32, u64>),
    U64U8(LabelMapper<u64, u8>),
    U64U16(LabelMapper<u64, u16>),
    U64U32(LabelMapper<u64, u32>),
    U64U64(LabelMapper<u64, u64>),
}

/// Run an expression against the typed mapper inside a [DynLabelMapper]
macro_rules! dispatch_mapper {
    ($mapper:expr, $inner:ident => $body:expr) => {
        match $mapper {
            DynLabelMapper::U8U8($inner) => $body,
            DynLabelMapper::U8U16($inner) => $body,
            DynLabelMapper::U8U32($inner) => $body,
            DynLabelMapper::U8U64($inner) => $body,
            DynLabelMapper::U16U8($inner) => $body,
            DynLabelMapper::U16U16($inner) => $body,
            DynLabelMapper::U16U32($inner) => $body,
            DynLabelMapper::U16U64($inner) => $body,
            DynLabelMapper::U32U8($inner) => $body,
            DynLabelMapper::U32U16($inner) => $body,
            DynLabelMapper::U32U32($inner) => $body,
            DynLabelMapper::U32U64($inner) => $body,
            DynLabelMapper::U64U8($inner) => $body,
            DynLabelMapper::U64U16($inner) => $body,
            DynLabelMapper::U64U32($inner) => $body,
            DynLabelMapper::U64U64($inner) => $body,
        }
    };
}

macro_rules! impl_from_mapper {
    ($($variant:ident($d:ty, $c:ty)),* $(,)?) => {
        $(
            impl From<LabelMapper<$d, $c>> for DynLabelMapper {
                fn from(mapper: LabelMapper<$d, $c>) -> Self {
                    DynLabelMapper::$variant(mapper)
                }
            }
        )*
    };
}

impl_from_mapper!(
    U8U8(u8, u8),
    U8U16(u8, u16),
    U8U32(u8, u32),
    U8U64(u8, u64),
    U16U8(u16, u8),
    U16U16(u16, u16),
    U16U32(u16, u32),
    U16U64(u16, u64),
    U32U8(u32, u8),
    U32U16(u32, u16),
    U32U32(u32, u32),
    U32U64(u32, u64),
    U64U8(u64, u8),
    U64U16(u64, u16),
    U64U32(u64, u32),
    U64U64(u64, u64),
);

impl DynLabelMapper {
    /// Build from 1D domain and codomain lists of any width
    ///
    /// The widths of the two lists become the native widths of the mapping.
    /// Fails with [NotOneDimensional](Error::NotOneDimensional) for any other
    /// rank, or [MismatchedLengths](Error::MismatchedLengths) if the lists
    /// differ in length.
    pub fn new(domain: &LabelView<'_>, codomain: &LabelView<'_>) -> Result<Self> {
        for ndim in [domain.ndim(), codomain.ndim()] {
            if ndim != 1 {
                return Err(Error::NotOneDimensional { ndim });
            }
        }

        debug!(
            "Building dynamic {}->{} label mapping",
            domain.dtype(),
            codomain.dtype()
        );

        dispatch_label_view!(domain, d => dispatch_label_view!(codomain, c => {
            LabelMapper::new(&to_vec(d), &to_vec(c)).map(DynLabelMapper::from)
        }))
    }

    /// Number of distinct domain labels
    pub fn len(&self) -> usize {
        dispatch_mapper!(self, m => m.len())
    }

    /// True if the mapping has no entries
    pub fn is_empty(&self) -> bool {
        dispatch_mapper!(self, m => m.is_empty())
    }

    /// Native width of the domain
    pub fn domain_dtype(&self) -> Dtype {
        dispatch_mapper!(self, m => m.domain_dtype())
    }

    /// Native width of the codomain, and of every array produced by `apply`
    pub fn codomain_dtype(&self) -> Dtype {
        dispatch_mapper!(self, m => m.codomain_dtype())
    }

    /// See [LabelMapper::apply()]
    pub fn apply(&self, src: &LabelView<'_>, allow_unmapped: bool) -> Result<LabelArray> {
        dispatch_mapper!(self, m => dispatch_label_view!(src, v => {
            m.apply(v, allow_unmapped).map(LabelArray::from)
        }))
    }

    /// See [LabelMapper::apply_with_default()]
    pub fn apply_with_default(&self, src: &LabelView<'_>, default: u64) -> Result<LabelArray> {
        dispatch_mapper!(self, m => dispatch_label_view!(src, v => {
            m.apply_with_default(v, default).map(LabelArray::from)
        }))
    }

    /// See [LabelMapper::apply_inplace()]
    pub fn apply_inplace(&self, array: &mut LabelViewMut<'_>, allow_unmapped: bool) -> Result<()> {
        dispatch_mapper!(self, m => dispatch_label_view_mut!(array, v => {
            m.apply_inplace(v, allow_unmapped)
        }))
    }
}

/// Sequence order of a 1D list, whatever its strides
fn to_vec<T: Label>(list: &ArrayViewD<'_, T>) -> Vec<T> {
    list.iter().copied().collect()
}
