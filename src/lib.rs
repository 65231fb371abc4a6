//! `labeltools` is a modular toolkit of fast transformations for dense label
//! volumes
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use labeltools_utils as utils;

#[cfg(feature = "downsample")]
#[cfg_attr(docsrs, doc(cfg(feature = "downsample")))]
#[doc(inline)]
pub use labeltools_downsample as downsample;

#[cfg(feature = "mapper")]
#[cfg_attr(docsrs, doc(cfg(feature = "mapper")))]
#[doc(inline)]
pub use labeltools_mapper as mapper;

#[cfg(feature = "vertices")]
#[cfg_attr(docsrs, doc(cfg(feature = "vertices")))]
#[doc(inline)]
pub use labeltools_vertices as vertices;
