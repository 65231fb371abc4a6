use crate::error::{Error, Result};

// external crates
use serde::{Deserialize, Serialize};

/// Element width of a label array
///
/// Only the unsigned integer widths are supported, since labels are segment
/// IDs and never negative.
///
/// ```rust
/// # use labeltools_utils::Dtype;
/// assert_eq!(Dtype::U16.bits(), 16);
/// assert_eq!(Dtype::U16.max_value(), 65_535);
/// assert_eq!(Dtype::U8.to_string(), "u8");
///
/// // Widths are ordered by size
/// assert!(Dtype::U8 < Dtype::U64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dtype {
    /// 8-bit unsigned
    U8,
    /// 16-bit unsigned
    U16,
    /// 32-bit unsigned
    U32,
    /// 64-bit unsigned
    U64,
}

impl Dtype {
    /// Every supported width, narrowest first
    pub const ALL: [Dtype; 4] = [Dtype::U8, Dtype::U16, Dtype::U32, Dtype::U64];

    /// Number of bits per element
    pub fn bits(&self) -> u32 {
        match self {
            Dtype::U8 => 8,
            Dtype::U16 => 16,
            Dtype::U32 => 32,
            Dtype::U64 => 64,
        }
    }

    /// Largest representable value, widened to `u64`
    pub fn max_value(&self) -> u64 {
        match self {
            Dtype::U8 => u8::MAX as u64,
            Dtype::U16 => u16::MAX as u64,
            Dtype::U32 => u32::MAX as u64,
            Dtype::U64 => u64::MAX,
        }
    }

    /// True if `value` fits in this width without truncation
    ///
    /// ```rust
    /// # use labeltools_utils::Dtype;
    /// assert!(Dtype::U8.can_hold(255));
    /// assert!(!Dtype::U8.can_hold(256));
    /// assert!(Dtype::U64.can_hold(u64::MAX));
    /// ```
    pub fn can_hold(&self, value: u64) -> bool {
        value <= self.max_value()
    }

    /// Checked form of [can_hold()](Dtype::can_hold)
    ///
    /// ```rust
    /// # use labeltools_utils::{Dtype, Error};
    /// assert_eq!(Dtype::U16.check(1000), Ok(1000));
    /// assert_eq!(
    ///     Dtype::U8.check(1000),
    ///     Err(Error::ValueOutOfRange { value: 1000, dtype: Dtype::U8 })
    /// );
    /// ```
    pub fn check(&self, value: u64) -> Result<u64> {
        if self.can_hold(value) {
            Ok(value)
        } else {
            Err(Error::ValueOutOfRange {
                value,
                dtype: *self,
            })
        }
    }
}

impl std::fmt::Display for Dtype {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            Dtype::U8 => "u8",
            Dtype::U16 => "u16",
            Dtype::U32 => "u32",
            Dtype::U64 => "u64",
        };
        write!(f, "{name}")
    }
}
