//! Validation utilities for ternary primitives

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that a length is a non-zero multiple of `unit`
///
/// On failure `expected` reports the nearest multiple at or above `actual`.
#[inline(always)]
pub fn multiple_of(context: &'static str, actual: usize, unit: usize) -> Result<()> {
    if unit == 0 || actual == 0 || actual % unit != 0 {
        let expected = if unit == 0 {
            0
        } else {
            actual.div_ceil(unit).max(1) * unit
        };
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that every value is a balanced trit
#[inline]
pub fn trits(context: &'static str, values: &[i8]) -> Result<()> {
    match values.iter().position(|&t| !tcrypt_api::is_trit(t)) {
        None => Ok(()),
        Some(position) => Err(Error::Encoding {
            context,
            position,
            details: "trit values must be -1, 0 or 1",
        }),
    }
}
