//! Application error types

use thiserror::Error;

use meridian_domain::DomainError;

use crate::ports::BoardError;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// A board storage operation failed.
    #[error("board error: {0}")]
    Board(#[from] BoardError),

    /// The requested clock was not found on the board.
    #[error("not found: {0}")]
    NotFound(String),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
