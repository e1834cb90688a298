//! Education, skills, projects, work experience, hobbies, and qualities.
//!
//! The first four share one shape: section-scoped extraction when a header
//! is present, whole-document keyword matching as the fallback. Hobbies and
//! qualities work over the whole document only.

use std::collections::HashSet;

use super::section;
use crate::vocab::{
    Section, EDUCATION_KEYWORDS, EXPERIENCE_KEYWORDS, HOBBY_KEYWORDS, PROJECT_KEYWORDS,
    QUALITY_INTENSIFIER_RES, QUALITY_KEYWORDS, SKILL_KEYWORDS,
};

const EDUCATION_LINE_CAP: usize = 5;
const PROJECT_FALLBACK_CAP: usize = 5;
const EXPERIENCE_FALLBACK_CAP: usize = 10;
const HOBBY_CAP: usize = 5;

/// Freeform skill entries harvested from a section must be this long.
const SKILL_ENTRY_LEN: std::ops::RangeInclusive<usize> = 3..=29;

pub fn extract_education(text: &str) -> Option<String> {
    scoped_or_keyword_lines(
        text,
        Section::Education,
        Some(EDUCATION_LINE_CAP),
        EDUCATION_KEYWORDS,
        EDUCATION_LINE_CAP,
    )
}

pub fn extract_projects(text: &str) -> Option<String> {
    scoped_or_keyword_lines(text, Section::Projects, None, PROJECT_KEYWORDS, PROJECT_FALLBACK_CAP)
}

pub fn extract_experience(text: &str) -> Option<String> {
    scoped_or_keyword_lines(
        text,
        Section::Experience,
        None,
        EXPERIENCE_KEYWORDS,
        EXPERIENCE_FALLBACK_CAP,
    )
}

/// Section lines when a header was found (`Some`, possibly empty), otherwise
/// whole-document lines matching any of `keywords`, capped.
fn scoped_or_keyword_lines(
    text: &str,
    section: Section,
    section_cap: Option<usize>,
    keywords: &[&str],
    fallback_cap: usize,
) -> Option<String> {
    if let Some(span) = section::locate(text, section) {
        let cap = section_cap.unwrap_or(usize::MAX);
        let lines: Vec<&str> = content_lines(span, section).into_iter().take(cap).collect();
        return Some(lines.join("\n"));
    }

    let mut hits: Vec<&str> = Vec::new();
    for line in text.lines() {
        let lower = line.to_ascii_lowercase();
        if keywords.iter().any(|k| lower.contains(k)) {
            hits.push(line.trim());
            if hits.len() == fallback_cap {
                break;
            }
        }
    }
    if hits.is_empty() {
        None
    } else {
        Some(hits.join("\n"))
    }
}

/// Trimmed, non-empty lines of a section span, minus lines that merely
/// repeat one of the section's own header keywords.
fn content_lines<'a>(span: &'a str, section: Section) -> Vec<&'a str> {
    span.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .filter(|l| {
            let bare = l.trim_end_matches(':').trim().to_ascii_uppercase();
            !section.headers().contains(&bare.as_str())
        })
        .collect()
}

/// Known skill phrases matched case-insensitively, merged with short
/// freeform entries harvested from the skills section when one exists.
/// Output is deduplicated, alphabetically sorted, and comma-joined.
pub fn extract_skills(text: &str) -> Option<String> {
    let span = section::locate(text, Section::Skills);
    let haystack = span.unwrap_or(text);
    let hay_lower = haystack.to_ascii_lowercase();

    let mut seen: HashSet<String> = HashSet::new();
    let mut out: Vec<String> = Vec::new();
    for keyword in SKILL_KEYWORDS {
        if hay_lower.contains(&keyword.to_ascii_lowercase()) && seen.insert(keyword.to_ascii_lowercase()) {
            out.push((*keyword).to_string());
        }
    }

    if let Some(span) = span {
        for entry in span.split(['\n', ';', ',', '|', '\u{2022}']) {
            let entry = entry.trim().trim_start_matches(['-', '*', '\u{2022}', ' ']).trim();
            if !SKILL_ENTRY_LEN.contains(&entry.len()) {
                continue;
            }
            let bare = entry.trim_end_matches(':').to_ascii_uppercase();
            if Section::Skills.headers().contains(&bare.as_str()) {
                continue;
            }
            if seen.insert(entry.to_ascii_lowercase()) {
                out.push(entry.to_string());
            }
        }
    }

    if out.is_empty() && span.is_none() {
        return None;
    }
    out.sort_by_key(|s| s.to_ascii_lowercase());
    Some(out.join(", "))
}

/// Lines anywhere in the document mentioning a hobby keyword, deduplicated
/// in discovery order, capped at five.
pub fn extract_hobbies(text: &str) -> Option<String> {
    let lower = text.to_ascii_lowercase();
    let mut seen: HashSet<String> = HashSet::new();
    let mut out: Vec<String> = Vec::new();

    'keywords: for keyword in HOBBY_KEYWORDS {
        if !lower.contains(keyword) {
            continue;
        }
        for line in text.lines() {
            let trimmed = line.trim();
            if trimmed.len() <= 5 || !trimmed.to_ascii_lowercase().contains(keyword) {
                continue;
            }
            let bare = trimmed.trim_end_matches(':').trim().to_ascii_uppercase();
            if bare == "HOBBIES" || bare == "INTERESTS" {
                continue;
            }
            if seen.insert(trimmed.to_ascii_lowercase()) {
                out.push(trimmed.to_string());
            }
            if out.len() == HOBBY_CAP {
                break 'keywords;
            }
        }
    }

    if out.is_empty() {
        None
    } else {
        Some(out.join(", "))
    }
}

/// Quality keywords present anywhere in the document plus phrases captured
/// by the intensifier patterns, title-cased, deduplicated, sorted.
pub fn extract_qualities(text: &str) -> Option<String> {
    let lower = text.to_ascii_lowercase();
    let mut seen: HashSet<String> = HashSet::new();
    let mut out: Vec<String> = Vec::new();

    for keyword in QUALITY_KEYWORDS {
        if lower.contains(keyword) {
            let phrase = title_case_phrase(keyword);
            if seen.insert(phrase.to_ascii_lowercase()) {
                out.push(phrase);
            }
        }
    }

    for pattern in QUALITY_INTENSIFIER_RES.iter() {
        for caps in pattern.captures_iter(text) {
            let captured = caps[1].trim();
            if captured.len() > 3 {
                let phrase = title_case_phrase(captured);
                if seen.insert(phrase.to_ascii_lowercase()) {
                    out.push(phrase);
                }
            }
        }
    }

    if out.is_empty() {
        return None;
    }
    out.sort();
    Some(out.join(", "))
}

fn title_case_phrase(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(super::name::title_case_word)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn education_prefers_section_and_caps_lines() {
        let text = "EDUCATION\nB.Sc Computer Science\nState University\n2015-2019\nDean's list\nHonors thesis\nExtra line beyond cap";
        let education = extract_education(text).unwrap();
        let lines: Vec<&str> = education.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "B.Sc Computer Science");
        assert!(!education.contains("Extra line"));
    }

    #[test]
    fn education_falls_back_to_keyword_lines() {
        let text = "Jane Doe\nGraduated with a bachelor degree\nUnrelated line";
        assert_eq!(
            extract_education(text).as_deref(),
            Some("Graduated with a bachelor degree"),
        );
    }

    #[test]
    fn education_absent_without_section_or_keywords() {
        assert_eq!(extract_education("nothing relevant here"), None);
    }

    #[test]
    fn empty_section_yields_empty_string_not_absent() {
        assert_eq!(extract_education("EDUCATION").as_deref(), Some(""));
    }

    #[test]
    fn experience_fallback_caps_at_ten() {
        let text = (0..15)
            .map(|i| format!("worked on item {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        let experience = extract_experience(&text).unwrap();
        assert_eq!(experience.lines().count(), 10);
    }

    #[test]
    fn projects_section_is_uncapped() {
        let lines: Vec<String> = (0..8).map(|i| format!("Tool number {i}")).collect();
        let text = format!("PROJECTS\n{}", lines.join("\n"));
        let projects = extract_projects(&text).unwrap();
        assert_eq!(projects.lines().count(), 8);
    }

    #[test]
    fn skills_dedup_is_case_insensitive() {
        let text = "SKILLS\nPython\npython scripting";
        let skills = extract_skills(text).unwrap();
        assert_eq!(skills.matches("Python").count(), 1);
    }

    #[test]
    fn skills_merge_keywords_and_freeform_entries() {
        let text = "TECHNICAL SKILLS\nPython, Rust; Advanced Origami | SQL";
        let skills = extract_skills(text).unwrap();
        assert_eq!(skills, "Advanced Origami, Python, Rust, SQL");
    }

    #[test]
    fn skills_whole_document_without_section() {
        let text = "I have shipped Python services on AWS for years";
        assert_eq!(extract_skills(text).as_deref(), Some("AWS, Python"));
    }

    #[test]
    fn skills_freeform_length_bounds() {
        let long_entry = "x".repeat(30);
        let text = format!("SKILLS\nab, {long_entry}, Juggling");
        assert_eq!(extract_skills(&text).as_deref(), Some("Juggling"));
    }

    #[test]
    fn hobbies_collects_keyword_lines_and_skips_bare_header() {
        let text = "HOBBIES\nLandscape photography on weekends\nreading science fiction";
        let hobbies = extract_hobbies(text).unwrap();
        assert!(hobbies.contains("Landscape photography on weekends"));
        assert!(hobbies.contains("reading science fiction"));
        assert!(!hobbies.contains("HOBBIES"));
    }

    #[test]
    fn hobbies_absent_without_keywords() {
        assert_eq!(extract_hobbies("strictly business content"), None);
    }

    #[test]
    fn qualities_include_intensifier_phrases() {
        let text = "A dedicated developer with excellent problem solving and strong communication";
        let qualities = extract_qualities(text).unwrap();
        assert!(qualities.contains("Dedicated"));
        assert!(qualities.contains("Problem Solving"));
        assert!(qualities.contains("Communication"));
    }

    #[test]
    fn qualities_are_sorted_and_deduplicated() {
        let text = "Motivated and motivated, strong leadership, leadership";
        let qualities = extract_qualities(text).unwrap();
        assert_eq!(qualities, "Leadership, Motivated");
    }
}
