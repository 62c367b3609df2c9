//! Domain validation errors.

use thiserror::Error;

/// Errors that can occur during domain value object validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The name is empty after trimming.
    #[error("Name cannot be empty")]
    EmptyName,

    /// The name exceeds the maximum length.
    #[error("Name is too long ({length} characters, max {max})")]
    NameTooLong { length: usize, max: usize },

    /// The provided email address is invalid.
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// The password hash is empty after trimming.
    #[error("Password hash cannot be empty")]
    EmptyPasswordHash,

    /// The password hash exceeds the maximum length.
    #[error("Password hash is too long ({length} characters, max {max})")]
    PasswordHashTooLong { length: usize, max: usize },

    /// An entity id was negative.
    #[error("Entity id cannot be negative: {0}")]
    NegativeId(i64),

    /// The status is not one of the allowed resume statuses.
    #[error("Invalid resume status: {0}")]
    InvalidStatus(String),
}
