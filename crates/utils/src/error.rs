//! Result and Error types for the utils module

use crate::Dtype;

/// Type alias for `Result<T, utils::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// The error type for `labeltools_utils`
pub enum Error {
    /// Dynamic array holds a different element width than was requested
    DtypeMismatch { expected: Dtype, found: Dtype },

    /// Value can not be represented by the element width
    ValueOutOfRange { value: u64, dtype: Dtype },
}

// error boilerplate
impl core::fmt::Display for Error {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
        write!(fmt, "{self:?}")
    }
}

// implement standard error trait to use with ? operator
impl std::error::Error for Error {}
