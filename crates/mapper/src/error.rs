//! Result and Error types for labeltools-mapper

use labeltools_utils::Dtype;

/// Type alias for Result<T, mapper::Error>
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `labeltools-mapper` crate
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("domain and codomain lengths differ (domain {domain:?}, codomain {codomain:?})")]
    MismatchedLengths { domain: usize, codomain: usize },

    #[error("domain and codomain should be 1D arrays (found {ndim:?} dimensions)")]
    NotOneDimensional { ndim: usize },

    #[error("default label {value} does not fit the {dtype} codomain")]
    DefaultOutOfRange { value: u64, dtype: Dtype },

    #[error("mapped label {value} does not fit the {dtype} array modified in place")]
    CodomainOutOfRange { value: u64, dtype: Dtype },

    #[error("unmapped label {value} can not be preserved in the {dtype} output")]
    UnrepresentableValue { value: u64, dtype: Dtype },

    #[error("label not found in mapping: {0}")]
    UnmappedValue(u64),

    #[error("output shape {found:?} does not match input shape {expected:?}")]
    MismatchedShape {
        expected: Vec<usize>,
        found: Vec<usize>,
    },
}

impl Error {
    /// True for errors caused by how the mapping or call was set up
    ///
    /// These are the construction and width problems, as opposed to an
    /// unmapped label found in the data or a shape mismatch.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Error::MismatchedLengths { .. }
                | Error::NotOneDimensional { .. }
                | Error::DefaultOutOfRange { .. }
                | Error::CodomainOutOfRange { .. }
                | Error::UnrepresentableValue { .. }
        )
    }
}
