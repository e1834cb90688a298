//! PDF text source: the collaborator that turns a file into plain text.

use std::path::Path;

use tracing::debug;

use crate::error::{ExtractError, Result};

/// Documents yielding less text than this are treated as unusable, typically
/// scanned images with no text layer.
pub const MIN_TEXT_LEN: usize = 50;

/// Extracts the full plain text of a PDF, or an error when the file cannot
/// be decoded or contains too little text to extract from.
pub fn extract_text(path: &Path) -> Result<String> {
    let text = pdf_extract::extract_text(path).map_err(|e| ExtractError::Pdf {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let len = text.trim().len();
    debug!(path = %path.display(), chars = len, "extracted text from PDF");
    if len < MIN_TEXT_LEN {
        return Err(ExtractError::InsufficientText {
            path: path.to_path_buf(),
            len,
        });
    }
    Ok(text)
}
