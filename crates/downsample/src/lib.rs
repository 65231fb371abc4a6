//! Block downsampling of label volumes by majority vote
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod downsample;
mod error;
mod options;
mod tally;

#[doc(inline)]
pub use downsample::{downsample_labels, downsample_labels_dyn, SUPPORTED_RANKS};

#[doc(inline)]
pub use options::DownsampleOptions;

#[doc(inline)]
pub use error::{Error, Result};
