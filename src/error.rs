//! Error types for the resume core.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Domain validation errors live in [`crate::domain::errors`].

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors reported by repository implementations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// A lock guarding in-memory state was poisoned by a panicking writer
    #[error("Repository lock poisoned during {0}")]
    LockPoisoned(&'static str),

    /// The storage backend failed
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors surfaced by the application services.
///
/// "Not found" is not an error: services return `None` for it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Input rejected while building a command or query
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Persistence failed
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Convenience type alias for Results with RepositoryError
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CoreError
pub type CoreResult<T> = Result<T, CoreError>;
