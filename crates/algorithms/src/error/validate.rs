//! Validation utilities for cipher primitives

use super::{Error, Result};

/// Validate a key length against the set of accepted sizes
#[inline(always)]
pub fn key_length(context: &'static str, actual: usize, expected: &'static [usize]) -> Result<()> {
    if !expected.contains(&actual) {
        return Err(Error::InvalidKeyLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a nonce length
#[inline(always)]
pub fn nonce_length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidNonceLength {
            context,
            expected,
            actual,
        });
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
