//! Error types for the retx-core library.

use thiserror::Error;

/// Main error type for the retx library.
#[derive(Error, Debug)]
pub enum RetxError {
    /// CSV generation error.
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),

    /// Processing request could not be built.
    #[error("request error: {0}")]
    Request(#[from] RequestError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to returns CSV generation.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// No products were supplied.
    #[error("no products to generate CSV from")]
    EmptyInput,

    /// The CSV writer failed.
    #[error("failed to write CSV: {0}")]
    Write(String),
}

impl From<csv::Error> for GenerationError {
    fn from(err: csv::Error) -> Self {
        GenerationError::Write(err.to_string())
    }
}

/// Errors related to building a processing request.
#[derive(Error, Debug)]
pub enum RequestError {
    /// A field required by the processing service is blank.
    #[error("missing required field: {0}")]
    MissingField(String),
}

/// Result type for the retx library.
pub type Result<T> = std::result::Result<T, RetxError>;
