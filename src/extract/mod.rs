//! The heuristic extraction engine.
//!
//! `extract_information` is a pure function of the input text plus the
//! static vocabularies in [`crate::vocab`]: no I/O, no shared state, safe to
//! call concurrently from a worker per document. Field extractors never
//! fail; a field with no match is simply absent from the record.

pub mod contact;
pub mod fields;
pub mod name;
pub mod section;

use crate::error::{ExtractError, Result};
use crate::record::ExtractionRecord;

/// Runs all nine field extractors over the document and assembles the
/// record. Every extractor runs unconditionally; none depends on another's
/// result.
pub fn extract_information(text: &str) -> ExtractionRecord {
    ExtractionRecord {
        name: name::extract_name(text),
        email: contact::extract_email(text),
        phone: contact::extract_phone(text),
        skills: fields::extract_skills(text),
        work_experience: fields::extract_experience(text),
        education: fields::extract_education(text),
        projects: fields::extract_projects(text),
        hobbies: fields::extract_hobbies(text),
        qualities: fields::extract_qualities(text),
    }
}

/// Input-validating wrapper for callers that want blank input rejected
/// instead of an all-absent record.
pub fn extract_information_checked(text: &str) -> Result<ExtractionRecord> {
    if text.trim().is_empty() {
        return Err(ExtractError::EmptyInput);
    }
    Ok(extract_information(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Jane Doe
jane.doe@company.org
(555) 123-4567

TECHNICAL SKILLS
Python, Rust, SQL

EDUCATION
B.Sc Computer Science, State University

WORK EXPERIENCE
Software Engineer, Acme Corp, 2019-2023

HOBBIES
Landscape photography and hiking";

    #[test]
    fn extraction_is_idempotent() {
        assert_eq!(extract_information(SAMPLE), extract_information(SAMPLE));
    }

    #[test]
    fn all_extractors_run_independently() {
        // A document with only an email still produces a record where the
        // other eight fields degraded to absent rather than failing.
        let record = extract_information("reach me: someone@company.org");
        assert_eq!(record.email.as_deref(), Some("someone@company.org"));
        assert_eq!(record.name, None);
        assert_eq!(record.phone, None);
        assert_eq!(record.education, None);
    }

    #[test]
    fn empty_input_never_panics() {
        let record = extract_information("");
        assert_eq!(record, ExtractionRecord::default());
    }

    #[test]
    fn checked_entry_rejects_blank_input() {
        assert!(matches!(
            extract_information_checked("   \n  "),
            Err(ExtractError::EmptyInput),
        ));
        assert!(extract_information_checked(SAMPLE).is_ok());
    }
}
