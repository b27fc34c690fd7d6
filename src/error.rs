//! Error types for docoutline library.

use std::io;
use thiserror::Error;

/// Result type alias for docoutline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reading word dumps or producing outlines.
///
/// Outline inference itself never fails: degenerate input yields an empty
/// result. Errors come from the word source or from serialization.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The word dump is not valid JSON or does not match the expected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input was readable but unusable.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Page number is out of range.
    #[error("Page {0} is out of range (document has {1} pages)")]
    PageOutOfRange(usize, usize),

    /// Error during rendering.
    #[error("Rendering error: {0}")]
    Render(String),
}
