//! Document error types.

use thiserror::Error;

/// Errors that can occur while reading a menu document or configuration
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The text was not valid JSON for the expected shape
    #[error("Document parsing failed: {0}")]
    Parse(#[from] serde_json::Error),

    /// The source could not be read
    #[error("Document could not be read: {0}")]
    Io(#[from] std::io::Error),
}
