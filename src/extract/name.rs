//! Name extraction: candidate generation, cleaning, and scoring.
//!
//! Three strategies run in order, first success wins: explicit indicator
//! lines ("Name: Jane Doe"), name-shape patterns over the top of the
//! document, and a loose capitalized-word fallback. Strategies two and
//! three pool their candidates and the highest-scoring one is returned,
//! with ties broken by discovery order.

use crate::vocab::{
    NAME_EXCLUSIONS, NAME_INDICATORS, NAME_PATTERNS, NAME_PREFIXES, NAME_SUFFIXES,
    NAME_TOKEN_RE, PHONE_RE,
};

const INDICATOR_SCAN_LINES: usize = 15;
const PATTERN_SCAN_LINES: usize = 20;
const FALLBACK_SCAN_LINES: usize = 15;

/// A provisional name awaiting selection. The stored text is the cleaned
/// form; the score is computed from the raw capture so casing information
/// is still visible to the scorer.
#[derive(Debug)]
struct NameCandidate {
    text: String,
    score: f64,
}

pub fn extract_name(text: &str) -> Option<String> {
    let lines: Vec<&str> = text.lines().collect();

    if let Some(name) = indicator_name(&lines) {
        return Some(name);
    }

    let mut pool: Vec<NameCandidate> = Vec::new();
    for (idx, raw) in lines.iter().take(PATTERN_SCAN_LINES).enumerate() {
        let line = raw.trim();
        if line.len() < 3 || line_disqualified(line) {
            continue;
        }
        // First matching pattern per line contributes one candidate; the
        // scan itself keeps going so later lines can compete.
        if let Some(m) = NAME_PATTERNS.iter().find_map(|p| p.find(line)) {
            push_candidate(&mut pool, m.as_str(), idx);
        }
    }

    if pool.is_empty() {
        for (idx, raw) in lines.iter().take(FALLBACK_SCAN_LINES).enumerate() {
            let words: Vec<&str> = raw
                .split_whitespace()
                .filter(|w| starts_capitalized(w) && is_valid_token(w.trim_end_matches(trailing_punct)))
                .collect();
            if (2..=4).contains(&words.len()) {
                push_candidate(&mut pool, &words.join(" "), idx);
            }
        }
    }

    // Strictly-greater comparison keeps the first-seen candidate on ties.
    pool.into_iter()
        .reduce(|best, c| if c.score > best.score { c } else { best })
        .map(|c| c.text)
}

/// Clean `raw`, and add it to the pool when at least two tokens survive.
fn push_candidate(pool: &mut Vec<NameCandidate>, raw: &str, line_index: usize) {
    let cleaned = clean_candidate(raw);
    if cleaned.split(' ').filter(|t| !t.is_empty()).count() >= 2 {
        pool.push(NameCandidate {
            text: cleaned,
            score: score_name_candidate(raw, line_index),
        });
    }
}

/// Strategy 1: lines like "Name: Jane Doe" or an indicator line followed by
/// the name on the next line.
fn indicator_name(lines: &[&str]) -> Option<String> {
    for (idx, raw) in lines.iter().take(INDICATOR_SCAN_LINES).enumerate() {
        let upper = raw.to_ascii_uppercase();
        if !NAME_INDICATORS.iter().any(|t| upper.contains(t)) {
            continue;
        }
        let candidate = match raw.split_once(':') {
            Some((_, rest)) => rest.trim().to_string(),
            None => match lines.get(idx + 1) {
                Some(next) => next.trim().to_string(),
                None => continue,
            },
        };
        let cleaned = clean_candidate(&candidate);
        if cleaned.split(' ').filter(|t| !t.is_empty()).count() >= 2 {
            return Some(cleaned);
        }
    }
    None
}

/// A line is out of the running when it carries section vocabulary, contact
/// details, or too much non-letter noise.
fn line_disqualified(line: &str) -> bool {
    let upper = line.to_ascii_uppercase();
    if NAME_EXCLUSIONS.iter().any(|t| upper.contains(t)) {
        return true;
    }
    if line.contains('@') || PHONE_RE.is_match(line) {
        return true;
    }
    let non_alpha = line.chars().filter(|c| !c.is_alphabetic()).count();
    non_alpha as f64 > line.chars().count() as f64 * 0.3
}

fn trailing_punct(c: char) -> bool {
    !c.is_alphanumeric()
}

fn starts_capitalized(word: &str) -> bool {
    word.chars().next().is_some_and(|c| c.is_uppercase())
}

/// Token validity: letters-only shape with internal `-'.`, length 2..=25,
/// not an excluded word, no domain suffix, no digits.
pub fn is_valid_token(token: &str) -> bool {
    if !NAME_TOKEN_RE.is_match(token) {
        return false;
    }
    if !(2..=25).contains(&token.len()) {
        return false;
    }
    let upper = token.to_ascii_uppercase();
    if NAME_EXCLUSIONS.contains(&upper.as_str()) {
        return false;
    }
    let lower = token.to_ascii_lowercase();
    if [".com", ".org", ".net", ".edu"].iter().any(|s| lower.contains(s)) {
        return false;
    }
    !token.chars().any(|c| c.is_ascii_digit())
}

/// Strip, validate, and title-case the tokens of a raw candidate.
///
/// Honorific prefixes and suffixes ("Dr", "Jr", "PhD") survive only when
/// the candidate has more than two tokens, so "Dr Smith" reduces to nothing
/// usable while "Dr John Smith" keeps its title.
pub fn clean_candidate(candidate: &str) -> String {
    let tokens: Vec<&str> = candidate.split_whitespace().collect();
    let total = tokens.len();
    let mut kept: Vec<String> = Vec::new();
    for raw in tokens {
        let token = raw.trim_end_matches(trailing_punct);
        if token.is_empty() {
            continue;
        }
        let upper = token.to_ascii_uppercase();
        if NAME_PREFIXES.contains(&upper.as_str()) || NAME_SUFFIXES.contains(&upper.as_str()) {
            if total > 2 {
                kept.push(title_case_word(token));
            }
            continue;
        }
        if is_valid_token(token) {
            kept.push(title_case_word(token));
        }
    }
    kept.join(" ")
}

/// Score a raw candidate: earlier lines, two tokens, and conventional
/// capitalization all earn bonuses.
pub fn score_name_candidate(candidate: &str, line_index: usize) -> f64 {
    let mut score = match line_index {
        0..=2 => 3.0,
        3..=5 => 2.0,
        6..=9 => 1.0,
        _ => 0.0,
    };

    let tokens: Vec<&str> = candidate.split_whitespace().collect();
    score += match tokens.len() {
        2 => 2.0,
        3 => 1.5,
        4 => 0.5,
        _ => 0.0,
    };

    if !tokens.is_empty() {
        if tokens.iter().all(|t| is_title_cased(t)) {
            score += 1.0;
        } else if tokens.iter().all(|t| is_all_caps(t)) {
            score += 0.5;
        }

        let avg = tokens.iter().map(|t| t.chars().count()).sum::<usize>() as f64
            / tokens.len() as f64;
        if (3.0..=8.0).contains(&avg) {
            score += 0.5;
        }
    }

    score
}

fn is_title_cased(token: &str) -> bool {
    let mut chars = token.chars();
    chars.next().is_some_and(|c| c.is_uppercase()) && chars.all(|c| !c.is_uppercase())
}

fn is_all_caps(token: &str) -> bool {
    token.chars().any(|c| c.is_alphabetic())
        && token.chars().filter(|c| c.is_alphabetic()).all(|c| c.is_uppercase())
}

/// "JOHN" -> "John", "SMITH-JONES" -> "Smith-Jones".
pub(crate) fn title_case_word(word: &str) -> String {
    word.split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}
