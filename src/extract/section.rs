//! Section locator: finds the span of text belonging to a named section.

use crate::vocab::Section;

/// Offsets further than this into the remaining text count as the start of
/// the next section; anything closer is assumed to be part of the header
/// line itself.
const BOUNDARY_SLACK: usize = 50;

/// Maximum section length when no other section header follows.
const MAX_SECTION_LEN: usize = 1000;

/// Returns the substring most likely belonging to `section`, or `None` if
/// none of its header keywords appear in the text.
///
/// Header keywords are tried in priority order and the first keyword found
/// anywhere in the document wins, even if a lower-priority keyword occurs
/// earlier. Matching is case-insensitive with no word-boundary enforcement,
/// so "SKILLS" matches inside "TECHNICAL SKILLS"; that is intentional and
/// relied on by existing outputs.
pub fn locate(text: &str, section: Section) -> Option<&str> {
    // ASCII uppercasing preserves byte offsets, so positions found in the
    // uppercased copy are valid indices into the original text.
    let upper = text.to_ascii_uppercase();
    let start = section
        .headers()
        .iter()
        .find_map(|keyword| upper.find(keyword))?;

    let remaining = &upper[start..];
    let mut boundary: Option<usize> = None;
    for other in Section::ALL.iter().filter(|s| **s != section) {
        for keyword in other.headers() {
            if let Some(pos) = remaining.find(keyword) {
                if pos > BOUNDARY_SLACK {
                    boundary = Some(boundary.map_or(pos, |b| b.min(pos)));
                }
            }
        }
    }

    let len = boundary.unwrap_or_else(|| remaining.len().min(MAX_SECTION_LEN));
    let end = floor_char_boundary(text, start + len);
    Some(&text[start..end])
}

/// Largest char boundary at or below `index`. The uppercased search can hand
/// back a cap offset that lands mid-character in non-ASCII text.
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    let mut i = index;
    while !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}
