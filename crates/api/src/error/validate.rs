//! Validation utilities shared by every operation

use super::{Error, Result};

/// Validate the length of a key buffer
pub fn key_length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidKeyLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate the length of a ciphertext buffer
pub fn ciphertext_length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidCiphertextLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate the length of any other fixed-width buffer
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
