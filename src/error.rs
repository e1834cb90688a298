//! Error taxonomy for the resume pipeline.
//!
//! The extraction engine itself never errors for data-shape reasons; a field
//! that cannot be extracted is simply absent from the record. These variants
//! cover the layers around it: input validation, the PDF text source, and
//! the output sinks.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// The checked entry point was handed blank input.
    #[error("input text is empty")]
    EmptyInput,

    /// The PDF yielded too little text to be worth extracting from.
    #[error("little or no text extracted from {path} ({len} chars)")]
    InsufficientText { path: PathBuf, len: usize },

    /// pdf-extract could not decode the file.
    #[error("failed to read PDF {path}: {message}")]
    Pdf { path: PathBuf, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV output error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Excel output error: {0}")]
    Xlsx(String),
}

pub type Result<T> = std::result::Result<T, ExtractError>;
