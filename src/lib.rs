//! Heuristic information extraction from resume text.
//!
//! The engine in [`extract`] turns the plain text of one resume into an
//! [`ExtractionRecord`] using section location, regex patterns, and keyword
//! scoring; [`pdf`] supplies the text and [`output`] writes the collected
//! records to CSV, Excel, or JSON.

pub mod error;
pub mod extract;
pub mod output;
pub mod pdf;
pub mod record;
pub mod vocab;

pub use error::{ExtractError, Result};
pub use extract::{extract_information, extract_information_checked};
pub use record::{ExtractionRecord, ResumeRow, COLUMN_ORDER};
