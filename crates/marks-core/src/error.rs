//! Payload error handling
//!
//! Building a bookmark never fails. Errors only arise while turning bytes
//! into JSON records at the payload boundary.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while decoding a bookmark payload
#[derive(Error, Debug)]
pub enum PayloadError {
    /// Input is not valid JSON
    #[error("Invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to read a payload file
    #[error("Failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// JSON is valid but is neither a record, a list, nor an envelope
    #[error("Unexpected payload shape: expected an object or array, found {found}")]
    UnexpectedShape { found: &'static str },
}

impl PayloadError {
    /// Whether the error is caused by the payload contents rather than by I/O
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            PayloadError::Json(_) | PayloadError::UnexpectedShape { .. }
        )
    }
}

/// Result type for payload operations
pub type PayloadResult<T> = Result<T, PayloadError>;
