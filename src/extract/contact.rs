//! Email and phone extraction over the whole document.

use crate::vocab::{EMAIL_RE, PHONE_RE};

/// Domain used by template resumes; real addresses are preferred over it.
const PLACEHOLDER_DOMAIN: &str = "email.com";

/// First email address in the document whose domain is not the template
/// placeholder, falling back to the first raw match when every address is a
/// placeholder.
pub fn extract_email(text: &str) -> Option<String> {
    let matches: Vec<&str> = EMAIL_RE.find_iter(text).map(|m| m.as_str()).collect();
    let first = *matches.first()?;
    matches
        .iter()
        .find(|m| {
            m.split_once('@')
                .is_some_and(|(_, domain)| !domain.eq_ignore_ascii_case(PLACEHOLDER_DOMAIN))
        })
        .map(|m| (*m).to_string())
        .or_else(|| Some(first.to_string()))
}

/// First phone number in the document, normalized to `(AAA) EEE-LLLL` with
/// the country code, when present, prefixed exactly as captured.
pub fn extract_phone(text: &str) -> Option<String> {
    let caps = PHONE_RE.captures(text)?;
    let country = caps.get(1).map_or("", |m| m.as_str());
    Some(format!("{}({}) {}-{}", country, &caps[2], &caps[3], &caps[4]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_prefers_non_placeholder_domain() {
        let text = "contact: jane@email.com or jane.doe@company.org";
        assert_eq!(extract_email(text).as_deref(), Some("jane.doe@company.org"));
    }

    #[test]
    fn email_falls_back_to_placeholder_when_alone() {
        assert_eq!(
            extract_email("reach me at jane@email.com today").as_deref(),
            Some("jane@email.com"),
        );
    }

    #[test]
    fn email_absent_without_match() {
        assert_eq!(extract_email("no contact details here"), None);
    }

    #[test]
    fn phone_prefixes_captured_country_code() {
        assert_eq!(
            extract_phone("Call 1-555-123-4567").as_deref(),
            Some("1(555) 123-4567"),
        );
        assert_eq!(
            extract_phone("Call +1 (555) 123-4567").as_deref(),
            Some("+1(555) 123-4567"),
        );
    }

    #[test]
    fn phone_normalizes_plain_format() {
        assert_eq!(
            extract_phone("(555) 123-4567").as_deref(),
            Some("(555) 123-4567"),
        );
        assert_eq!(
            extract_phone("555.123.4567").as_deref(),
            Some("(555) 123-4567"),
        );
    }

    #[test]
    fn phone_takes_first_in_document_order() {
        let text = "home (555) 111-2222, office (555) 333-4444";
        assert_eq!(extract_phone(text).as_deref(), Some("(555) 111-2222"));
    }

    #[test]
    fn phone_absent_without_match() {
        assert_eq!(extract_phone("no digits to speak of"), None);
    }
}
