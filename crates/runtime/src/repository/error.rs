//! Error types raised by repository implementations.

use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("map repository lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no saved map named {0:?}")]
    NotFound(String),

    #[error("invalid map name {0:?}")]
    InvalidName(String),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
