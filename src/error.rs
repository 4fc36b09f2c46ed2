//! Error types for sedoc library.

use std::io;
use thiserror::Error;

/// Result type alias for sedoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the fallible edges of the library.
///
/// Parsing, rendering and document construction are total; errors only come
/// from reading inputs, decoding upstream JSON, or serializing payloads.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Upstream input did not have a recognizable shape.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error during rendering (payload, Markdown, text, HTML).
    #[error("Rendering error: {0}")]
    Render(String),
}
