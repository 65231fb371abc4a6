//! Vertex deduplication for meshes built from label volumes
#![doc = include_str!("../readme.md")]

mod coordinate;
mod duplicates;

#[doc(inline)]
pub use coordinate::Coordinate;

#[doc(inline)]
pub use duplicates::remap_duplicates;
