//! Static vocabularies and compiled patterns used by the extraction engine.
//!
//! Everything here is read-only configuration, initialized once and shared
//! across concurrent extraction calls. Keyword tables are plain `&str` slices;
//! patterns that are reused on every document are compiled lazily into
//! `static` regexes.

use once_cell::sync::Lazy;
use regex::Regex;

/// A resume section we know how to locate by header keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Education,
    Skills,
    Experience,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Education,
        Section::Skills,
        Section::Experience,
        Section::Projects,
        Section::Contact,
    ];

    /// Header keywords recognized as this section's title, in priority order.
    /// The section locator returns on the first keyword in this list that
    /// occurs anywhere in the document.
    pub fn headers(self) -> &'static [&'static str] {
        match self {
            Section::Education => &[
                "EDUCATION",
                "ACADEMIC BACKGROUND",
                "ACADEMIC QUALIFICATIONS",
                "QUALIFICATIONS",
                "ACADEMICS",
            ],
            Section::Skills => &[
                "TECHNICAL SKILLS",
                "SKILLS",
                "CORE COMPETENCIES",
                "COMPETENCIES",
                "TECHNOLOGIES",
            ],
            Section::Experience => &[
                "WORK EXPERIENCE",
                "PROFESSIONAL EXPERIENCE",
                "EMPLOYMENT HISTORY",
                "EXPERIENCE",
                "WORK HISTORY",
            ],
            Section::Projects => &[
                "PROJECTS",
                "PERSONAL PROJECTS",
                "ACADEMIC PROJECTS",
                "KEY PROJECTS",
            ],
            Section::Contact => &[
                "CONTACT INFORMATION",
                "CONTACT",
                "PERSONAL DETAILS",
                "PERSONAL INFORMATION",
            ],
        }
    }
}

/// Tokens that mark a line as an explicit name indicator ("Name: Jane Doe").
pub const NAME_INDICATORS: &[&str] = &["FULL NAME", "NAME", "CANDIDATE", "APPLICANT"];

/// Words that disqualify a line (or token) from being part of a person's name.
pub const NAME_EXCLUSIONS: &[&str] = &[
    "RESUME",
    "CURRICULUM",
    "VITAE",
    "EMAIL",
    "PHONE",
    "MOBILE",
    "ADDRESS",
    "OBJECTIVE",
    "SUMMARY",
    "PROFILE",
    "EDUCATION",
    "EXPERIENCE",
    "SKILLS",
    "PROJECTS",
    "CONTACT",
    "LINKEDIN",
    "GITHUB",
    "PORTFOLIO",
    "WEBSITE",
    "STREET",
    "AVENUE",
    "UNIVERSITY",
    "COLLEGE",
    "ENGINEER",
    "DEVELOPER",
    "MANAGER",
    "ANALYST",
    "CONSULTANT",
    "REFERENCES",
];

/// Honorific prefixes dropped from short name candidates.
pub const NAME_PREFIXES: &[&str] = &["MR", "MRS", "MS", "DR", "PROF", "MISS"];

/// Generational / credential suffixes dropped from short name candidates.
pub const NAME_SUFFIXES: &[&str] = &["JR", "SR", "II", "III", "IV", "PHD", "MD", "MBA"];

/// Skill phrases matched case-insensitively against section text or the
/// whole document. Multi-word phrases are intentional; matching is plain
/// substring search, not word-bounded.
pub const SKILL_KEYWORDS: &[&str] = &[
    "Python",
    "Java",
    "C++",
    "C#",
    "JavaScript",
    "TypeScript",
    "Rust",
    "Go",
    "Ruby",
    "PHP",
    "Swift",
    "Kotlin",
    "HTML",
    "CSS",
    "SQL",
    "NoSQL",
    "React",
    "Angular",
    "Vue",
    "Node.js",
    "Django",
    "Flask",
    "Spring",
    "Docker",
    "Kubernetes",
    "AWS",
    "Azure",
    "GCP",
    "Git",
    "Linux",
    "Excel",
    "Tableau",
    "Power BI",
    "Machine Learning",
    "Deep Learning",
    "Data Analysis",
    "Data Science",
    "Project Management",
    "Agile",
    "Scrum",
    "Communication",
    "Leadership",
    "Teamwork",
];

/// Fallback line keywords for education when no section header is present.
pub const EDUCATION_KEYWORDS: &[&str] = &[
    "bachelor",
    "master",
    "phd",
    "b.sc",
    "m.sc",
    "b.tech",
    "m.tech",
    "degree",
    "diploma",
    "university",
    "college",
    "institute",
    "gpa",
];

/// Fallback line keywords for projects when no section header is present.
pub const PROJECT_KEYWORDS: &[&str] = &[
    "project",
    "built",
    "created",
    "designed",
    "implemented",
    "developed",
];

/// Fallback line keywords for work experience when no section header is present.
pub const EXPERIENCE_KEYWORDS: &[&str] = &[
    "worked",
    "managed",
    "led",
    "developed",
    "responsible for",
    "intern",
    "engineer at",
    "company",
    "ltd",
    "inc.",
];

/// Hobby indicator keywords searched over the lower-cased document.
pub const HOBBY_KEYWORDS: &[&str] = &[
    "reading",
    "traveling",
    "travelling",
    "photography",
    "music",
    "sports",
    "hiking",
    "gaming",
    "cooking",
    "chess",
    "painting",
    "cycling",
    "swimming",
    "blogging",
    "volunteering",
    "gardening",
    "dancing",
];

/// Personal quality keywords collected from anywhere in the document.
pub const QUALITY_KEYWORDS: &[&str] = &[
    "dedicated",
    "motivated",
    "hardworking",
    "hard-working",
    "team player",
    "leadership",
    "creative",
    "analytical",
    "detail-oriented",
    "adaptable",
    "reliable",
    "punctual",
    "organized",
    "proactive",
    "self-starter",
    "problem solver",
];

/// Standard email shape: local part, `@`, domain, 2+ letter TLD.
pub static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}").unwrap());

/// US-style phone: optional `+1`/`1` country code, optional parenthesized
/// area code, separator-tolerant exchange and line number.
pub static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\+?1)?[\s.\-]?\(?(\d{3})\)?[\s.\-]?(\d{3})[\s.\-]?(\d{4})").unwrap());

/// Ordered name-shape patterns, tried per line until one matches. Anchored so
/// a line that is exactly a name wins; Title Case before all-caps so mixed
/// documents prefer the conventional form.
pub static NAME_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // Title Case pair / triple, allowing hyphenated and apostrophe'd parts
        r"^([A-Z][a-z]+(?:[-'][A-Z][a-z]+)?)\s+([A-Z][a-z]+(?:[-'][A-Z][a-z]+)?)\s+([A-Z][a-z]+(?:[-'][A-Z][a-z]+)?)$",
        r"^([A-Z][a-z]+(?:[-'][A-Z][a-z]+)?)\s+([A-Z]\.?\s+)?([A-Z][a-z]+(?:[-'][A-Z][a-z]+)?)$",
        // All-caps pair / triple
        r"^([A-Z]{2,}(?:[-'][A-Z]+)?)\s+([A-Z]{2,}(?:[-'][A-Z]+)?)\s+([A-Z]{2,}(?:[-'][A-Z]+)?)$",
        r"^([A-Z]{2,}(?:[-'][A-Z]+)?)\s+([A-Z]{2,}(?:[-'][A-Z]+)?)$",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Letters-only token shape: single letter, or 2+ characters with alphabetic
/// first and last and internal hyphens/apostrophes/periods allowed.
pub static NAME_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z](?:[A-Za-z.'\-]*[A-Za-z])?$").unwrap());

/// Intensifier patterns harvesting quality phrases ("excellent problem solving").
pub static QUALITY_INTENSIFIER_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    ["excellent", "strong", "proven", "outstanding"]
        .iter()
        .map(|word| Regex::new(&format!(r"(?i)\b{word}\s+(\w+(?:\s+\w+)?)")).unwrap())
        .collect()
});
