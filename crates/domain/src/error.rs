//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or construction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The timezone identifier is not a known IANA timezone.
    #[error("unknown timezone: {0}")]
    UnknownTimezone(String),

    /// An identifier is invalid or empty.
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
