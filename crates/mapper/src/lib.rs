//! Relabelling of dense label arrays through a finite mapping
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod apply;
mod dynamic;
mod error;
mod mapper;
mod miss;

#[doc(inline)]
pub use mapper::LabelMapper;

#[doc(inline)]
pub use apply::Unmapped;

#[doc(inline)]
pub use dynamic::DynLabelMapper;

#[doc(inline)]
pub use error::{Error, Result};
