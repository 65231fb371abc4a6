//! Result and Error types for labeltools-downsample

/// Type alias for Result<T, downsample::Error>
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `labeltools-downsample` crate
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("volumes of rank {ndim} are not supported (expected 1 to 3 dimensions)")]
    UnsupportedRank { ndim: usize },

    #[error("zero-size axis {axis} in shape {shape:?}")]
    EmptyAxis { axis: usize, shape: Vec<usize> },

    #[error("downsampling factor must be at least 1 (found {factor})")]
    InvalidFactor { factor: usize },

    #[error("axis {axis} of length {length} is not divisible by the factor {factor}")]
    IndivisibleAxis {
        axis: usize,
        length: usize,
        factor: usize,
    },
}

impl Error {
    /// True if the volume shape and factor are incompatible
    ///
    /// Covers every error except an unsupported rank.
    pub fn is_invalid_shape(&self) -> bool {
        !matches!(self, Error::UnsupportedRank { .. })
    }
}
