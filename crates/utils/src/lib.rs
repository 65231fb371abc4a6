//! Common label types and array wrappers shared by the labeltools crates
//!
//! These are left public for convenience.
//!
//! Every transformation in the toolkit is written once, generically over the
//! [Label] trait, and instantiated for each unsigned width. The [Dtype] enum
//! and the dynamic wrappers ([LabelArray], [LabelView], [LabelViewMut]) carry
//! the element width at runtime for callers that only learn it from their
//! data, and the [dispatch_label_view!] macros select the matching
//! instantiation.
#![doc = include_str!("../readme.md")]

// Modules
mod array;
mod dispatch;
mod dtype;
mod error;
mod label;

// Flatten
pub use array::{LabelArray, LabelView, LabelViewMut};
pub use dtype::Dtype;
pub use error::{Error, Result};
pub use label::Label;
