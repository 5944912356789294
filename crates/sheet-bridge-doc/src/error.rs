//! Document model error types

use thiserror::Error;

/// Result type for document model operations
pub type DocumentResult<T> = std::result::Result<T, DocumentError>;

/// Errors that can occur while reading or writing document snapshots
#[derive(Debug, Error)]
pub enum DocumentError {
    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Integer code outside an enum's range
    #[error("Invalid {kind} code: {code}")]
    InvalidCode { kind: &'static str, code: u8 },
}
