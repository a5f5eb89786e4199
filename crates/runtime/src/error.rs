//! Unified error type surfaced by the runtime API.
//!
//! Wraps failures from the core, the repository and texture resolution so
//! hosts can bubble them up with consistent context.
use hexmap_core::{EditorError, ErrorSeverity, MapError};
use thiserror::Error;

pub use crate::repository::RepositoryError;
pub use crate::textures::TextureError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Map(#[from] MapError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Texture(#[from] TextureError),

    #[error("handler `{handler}` failed: {reason}")]
    Handler {
        handler: &'static str,
        reason: String,
    },
}

impl RuntimeError {
    pub fn handler(handler: &'static str, reason: impl Into<String>) -> Self {
        Self::Handler {
            handler,
            reason: reason.into(),
        }
    }

    /// The wrapped core error, if this failure came from the editor core.
    pub fn as_map_error(&self) -> Option<&MapError> {
        match self {
            Self::Map(err) => Some(err),
            _ => None,
        }
    }
}

impl EditorError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Map(err) => err.severity(),
            Self::Repository(RepositoryError::NotFound(_) | RepositoryError::InvalidName(_)) => {
                ErrorSeverity::Validation
            }
            Self::Repository(_) | Self::Texture(_) | Self::Handler { .. } => {
                ErrorSeverity::Internal
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Map(err) => err.error_code(),
            Self::Repository(RepositoryError::NotFound(_)) => "MAP_NOT_FOUND",
            Self::Repository(RepositoryError::InvalidName(_)) => "INVALID_MAP_NAME",
            Self::Repository(_) => "REPOSITORY",
            Self::Texture(TextureError::Timeout { .. }) => "TEXTURE_TIMEOUT",
            Self::Texture(_) => "TEXTURE",
            Self::Handler { .. } => "HANDLER",
        }
    }
}
