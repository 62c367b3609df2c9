//! PasswordHash value object.

use super::errors::ValidationError;
use std::fmt;

/// An already-hashed password.
///
/// The value is opaque: only its length is checked. Hashing happens outside
/// this crate. `Debug` is redacted so hashes never end up in logs.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Maximum number of characters after trimming.
    pub const MAX_LENGTH: usize = 255;

    /// Create a new PasswordHash, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyPasswordHash` or
    /// `ValidationError::PasswordHashTooLong`.
    pub fn new(hash: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = hash.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyPasswordHash);
        }

        let length = trimmed.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(ValidationError::PasswordHashTooLong {
                length,
                max: Self::MAX_LENGTH,
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Get the hash as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(<redacted>)")
    }
}
