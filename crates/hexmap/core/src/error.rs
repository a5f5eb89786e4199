//! Error infrastructure for hexmap-core.
//!
//! Every failure the core can surface is a [`MapError`]. None of them are
//! fatal: callers receive a tagged result and the map state they hold is
//! left exactly as it was before the failing call.
//!
//! Cursor clamping at the grid edge is defined behavior, not an error.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Input was rejected; the user can retry with different input.
    ///
    /// Examples: a save file naming an unknown terrain, invalid JSON
    Validation,

    /// Unexpected inconsistency that indicates a bug in a caller.
    ///
    /// Examples: a NaN pixel position reaching the geometry layer
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Tag identifying which kind of failure occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    InvalidCoordinate,
    UnknownTerrain,
    MalformedRecord,
    ParseFailure,
    EncodeFailure,
}

/// Common interface over error types raised by the editor crates.
pub trait EditorError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Static identifier of the error variant, for logs and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Failures raised by geometry conversions and map import.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum MapError {
    /// A pixel position could not be converted to a cell.
    #[error("pixel ({x}, {y}) does not map to a hex cell")]
    InvalidCoordinate { x: f64, y: f64 },

    /// An imported record named a terrain outside the closed set.
    #[error("record {index}: unknown terrain {terrain:?}")]
    UnknownTerrain { index: usize, terrain: String },

    /// An imported record is missing a field, has a mistyped field, or
    /// addresses a cell outside the grid.
    #[error("record {index}: {reason}")]
    MalformedRecord { index: usize, reason: String },

    /// Load input is not valid JSON.
    #[error("map file is not valid JSON: {0}")]
    ParseFailure(String),

    /// The tile list could not be written as JSON.
    #[error("map could not be encoded: {0}")]
    EncodeFailure(String),
}

impl MapError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidCoordinate { .. } => ErrorKind::InvalidCoordinate,
            Self::UnknownTerrain { .. } => ErrorKind::UnknownTerrain,
            Self::MalformedRecord { .. } => ErrorKind::MalformedRecord,
            Self::ParseFailure(_) => ErrorKind::ParseFailure,
            Self::EncodeFailure(_) => ErrorKind::EncodeFailure,
        }
    }

    pub(crate) fn malformed(index: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            index,
            reason: reason.into(),
        }
    }
}

impl EditorError for MapError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidCoordinate { .. } | Self::EncodeFailure(_) => ErrorSeverity::Internal,
            Self::UnknownTerrain { .. } | Self::MalformedRecord { .. } | Self::ParseFailure(_) => {
                ErrorSeverity::Validation
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCoordinate { .. } => "INVALID_COORDINATE",
            Self::UnknownTerrain { .. } => "UNKNOWN_TERRAIN",
            Self::MalformedRecord { .. } => "MALFORMED_RECORD",
            Self::ParseFailure(_) => "PARSE_FAILURE",
            Self::EncodeFailure(_) => "ENCODE_FAILURE",
        }
    }
}
