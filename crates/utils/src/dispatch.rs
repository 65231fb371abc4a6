//! Macros selecting the typed instantiation for a dynamic array
//!
//! Each arm binds the inner typed array to the same identifier and evaluates
//! the same expression, so the body is compiled once per element width.

/// Run an expression against the typed view inside a [LabelView](crate::LabelView)
///
/// ```rust
/// # use labeltools_utils::{dispatch_label_view, LabelView};
/// # use ndarray::ArrayD;
/// let data = ArrayD::<u16>::from_elem(vec![2, 3], 7);
/// let view = LabelView::from(data.view());
///
/// let total: u64 = dispatch_label_view!(view, v => v.iter().map(|&x| u64::from(x)).sum());
/// assert_eq!(total, 42);
/// ```
#[macro_export]
macro_rules! dispatch_label_view {
    ($view:expr, $inner:ident => $body:expr) => {
        match $view {
            $crate::LabelView::U8($inner) => $body,
            $crate::LabelView::U16($inner) => $body,
            $crate::LabelView::U32($inner) => $body,
            $crate::LabelView::U64($inner) => $body,
        }
    };
}

/// Run an expression against the typed view inside a [LabelViewMut](crate::LabelViewMut)
#[macro_export]
macro_rules! dispatch_label_view_mut {
    ($view:expr, $inner:ident => $body:expr) => {
        match $view {
            $crate::LabelViewMut::U8($inner) => $body,
            $crate::LabelViewMut::U16($inner) => $body,
            $crate::LabelViewMut::U32($inner) => $body,
            $crate::LabelViewMut::U64($inner) => $body,
        }
    };
}

/// Run an expression against the typed array inside a [LabelArray](crate::LabelArray)
#[macro_export]
macro_rules! dispatch_label_array {
    ($array:expr, $inner:ident => $body:expr) => {
        match $array {
            $crate::LabelArray::U8($inner) => $body,
            $crate::LabelArray::U16($inner) => $body,
            $crate::LabelArray::U32($inner) => $body,
            $crate::LabelArray::U64($inner) => $body,
        }
    };
}
