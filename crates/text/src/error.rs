//! Error types for the text crate.

use thiserror::Error;

/// Result type alias for text operations.
pub type Result<T> = std::result::Result<T, TextError>;

/// Errors raised while encoding values into query strings.
#[derive(Debug, Error)]
pub enum TextError {
    /// Value could not be represented as JSON
    #[error("Value cannot be encoded as JSON: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Query parameters were not a JSON object
    #[error("Query parameters must be a JSON object, got {kind}")]
    NotAnObject {
        /// JSON kind that was supplied instead
        kind: &'static str,
    },
}

/// Error code for integration with gn-core error handling.
/// Range: 12xxx for text errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextErrorCode {
    /// Serialisation failure
    Serialize = 12001,
    /// Non-object query parameters
    NotAnObject = 12002,
}

impl TextError {
    /// Returns the error code for this error.
    pub fn code(&self) -> TextErrorCode {
        match self {
            TextError::Serialize(_) => TextErrorCode::Serialize,
            TextError::NotAnObject { .. } => TextErrorCode::NotAnObject,
        }
    }
}
