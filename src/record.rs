//! The extraction record: one field-keyed result per resume.

use serde::Serialize;

/// Column order the sinks must honor; the caller-supplied source column
/// always goes last, after these.
pub const COLUMN_ORDER: [&str; 9] = [
    "Name",
    "Email",
    "Phone",
    "Skills",
    "Work Experience",
    "Education",
    "Projects",
    "Hobbies",
    "Qualities",
];

/// Structured fields extracted from one resume.
///
/// `None` means the extractor found no match at all; `Some("")` means the
/// field's section was found but yielded nothing usable. Records are created
/// fresh per document and never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ExtractionRecord {
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "Email")]
    pub email: Option<String>,
    #[serde(rename = "Phone")]
    pub phone: Option<String>,
    #[serde(rename = "Skills")]
    pub skills: Option<String>,
    #[serde(rename = "Work Experience")]
    pub work_experience: Option<String>,
    #[serde(rename = "Education")]
    pub education: Option<String>,
    #[serde(rename = "Projects")]
    pub projects: Option<String>,
    #[serde(rename = "Hobbies")]
    pub hobbies: Option<String>,
    #[serde(rename = "Qualities")]
    pub qualities: Option<String>,
}

impl ExtractionRecord {
    /// Field value by column name, in the `COLUMN_ORDER` naming.
    pub fn get(&self, column: &str) -> Option<&str> {
        let field = match column {
            "Name" => &self.name,
            "Email" => &self.email,
            "Phone" => &self.phone,
            "Skills" => &self.skills,
            "Work Experience" => &self.work_experience,
            "Education" => &self.education,
            "Projects" => &self.projects,
            "Hobbies" => &self.hobbies,
            "Qualities" => &self.qualities,
            _ => &None,
        };
        field.as_deref()
    }

    /// True when a field was extracted with non-empty content.
    pub fn has(&self, column: &str) -> bool {
        self.get(column).is_some_and(|v| !v.is_empty())
    }

    /// Number of columns with non-empty content, for completion statistics.
    pub fn completed_fields(&self) -> usize {
        COLUMN_ORDER.iter().filter(|c| self.has(c)).count()
    }
}

/// One output row: a record plus the source file it came from. The source
/// column name itself is chosen by the sink caller, not fixed here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeRow {
    pub source: String,
    pub record: ExtractionRecord,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_distinguishes_absent_from_empty() {
        let record = ExtractionRecord {
            name: Some("Jane Doe".into()),
            skills: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(record.get("Name"), Some("Jane Doe"));
        assert_eq!(record.get("Skills"), Some(""));
        assert_eq!(record.get("Email"), None);
        assert!(record.has("Name"));
        assert!(!record.has("Skills"));
        assert!(!record.has("Email"));
        assert_eq!(record.completed_fields(), 1);
    }

    #[test]
    fn serializes_with_display_column_names() {
        let record = ExtractionRecord {
            work_experience: Some("Acme Corp".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["Work Experience"], "Acme Corp");
        assert!(json["Name"].is_null());
    }
}
