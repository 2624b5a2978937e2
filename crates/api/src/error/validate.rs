//! Validation utilities for caller-supplied buffers

use super::types::{Error, Result};

/// Fail fast unless `actual` equals `expected`
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Fail fast unless `actual` is one of the accepted sizes
///
/// The error reports the first accepted size as the expected one.
pub fn length_one_of(context: &'static str, actual: usize, accepted: &[usize]) -> Result<()> {
    if accepted.contains(&actual) {
        return Ok(());
    }
    Err(Error::InvalidLength {
        context,
        expected: accepted.first().copied().unwrap_or(0),
        actual,
    })
}
