//! Failure collection shared between worker threads
//!
//! Elements are resolved in parallel with no ordering, so the smallest
//! offending label is reported. This keeps error messages identical from run
//! to run regardless of scheduling.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use crate::error::{Error, Result};

/// Why a single element could not be resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Miss {
    /// No mapping entry and unmapped labels are rejected
    Unmapped(u64),
    /// The resolved label does not fit the output width
    Overflow(u64),
}

/// Smallest label recorded by any thread
#[derive(Debug)]
struct Smallest {
    seen: AtomicBool,
    value: AtomicU64,
}

impl Default for Smallest {
    fn default() -> Self {
        Self {
            seen: AtomicBool::new(false),
            value: AtomicU64::new(u64::MAX),
        }
    }
}

impl Smallest {
    #[inline]
    fn record(&self, value: u64) {
        self.value.fetch_min(value, Ordering::Relaxed);
        self.seen.store(true, Ordering::Relaxed);
    }

    fn get(&self) -> Option<u64> {
        self.seen
            .load(Ordering::Relaxed)
            .then(|| self.value.load(Ordering::Relaxed))
    }
}

#[derive(Debug, Default)]
pub(crate) struct Failures {
    unmapped: Smallest,
    overflow: Smallest,
}

impl Failures {
    #[inline]
    pub(crate) fn record(&self, miss: Miss) {
        match miss {
            Miss::Unmapped(value) => self.unmapped.record(value),
            Miss::Overflow(value) => self.overflow.record(value),
        }
    }

    /// Unmapped labels take precedence over overflows
    pub(crate) fn into_result(self, overflow: impl FnOnce(u64) -> Error) -> Result<()> {
        if let Some(value) = self.unmapped.get() {
            return Err(Error::UnmappedValue(value));
        }
        if let Some(value) = self.overflow.get() {
            return Err(overflow(value));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labeltools_utils::Dtype;

    #[test]
    fn reports_smallest() {
        let failures = Failures::default();
        failures.record(Miss::Unmapped(40));
        failures.record(Miss::Unmapped(7));
        failures.record(Miss::Unmapped(12));
        assert_eq!(
            failures.into_result(Error::UnmappedValue),
            Err(Error::UnmappedValue(7))
        );
    }

    #[test]
    fn max_value_is_still_reported() {
        let failures = Failures::default();
        failures.record(Miss::Overflow(u64::MAX));
        assert_eq!(
            failures.into_result(|value| Error::CodomainOutOfRange {
                value,
                dtype: Dtype::U32
            }),
            Err(Error::CodomainOutOfRange {
                value: u64::MAX,
                dtype: Dtype::U32
            })
        );
    }

    #[test]
    fn unmapped_takes_precedence() {
        let failures = Failures::default();
        failures.record(Miss::Overflow(3));
        failures.record(Miss::Unmapped(300));
        assert_eq!(
            failures.into_result(|value| Error::UnrepresentableValue {
                value,
                dtype: Dtype::U8
            }),
            Err(Error::UnmappedValue(300))
        );
    }

    #[test]
    fn clean_run_is_ok() {
        assert_eq!(Failures::default().into_result(Error::UnmappedValue), Ok(()));
    }
}
