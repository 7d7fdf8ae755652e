use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Value used for any field the page text does not yield.
pub const UNKNOWN: &str = "Unknown";

const NAME_MARKER: &str = "We hereby confirm that";
const ID_MARKER: &str = "ID:";

static ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"ID:\s*(\d+)").unwrap());

/// Identifier and name parsed from one page of certificate text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CertificateFields {
    pub id: String,
    pub name: String,
}

impl CertificateFields {
    pub fn parse(text: &str) -> Self {
        CertificateFields {
            id: extract_id(text),
            name: extract_name(text),
        }
    }
}

/// Digits following the first `ID:` marker that is followed by digits.
pub fn extract_id(text: &str) -> String {
    ID_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// Text between "We hereby confirm that" and the first `ID:`, trimmed.
///
/// Falls back to [`UNKNOWN`] when either marker is missing or the first `ID:`
/// does not come after the confirmation phrase.
pub fn extract_name(text: &str) -> String {
    let Some(start) = text.find(NAME_MARKER).map(|pos| pos + NAME_MARKER.len()) else {
        return UNKNOWN.to_string();
    };
    match text.find(ID_MARKER) {
        Some(end) if end >= start => text[start..end].trim().to_string(),
        _ => UNKNOWN.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_certificate_line() {
        let fields = CertificateFields::parse("We hereby confirm that Jane Doe ID: 7");
        assert_eq!(fields.id, "7");
        assert_eq!(fields.name, "Jane Doe");
    }

    #[test]
    fn test_id_digit_run() {
        assert_eq!(extract_id("Participant ID: 42 completed"), "42");
        assert_eq!(extract_id("ID:1105210003"), "1105210003");
        assert_eq!(extract_id("ID:\n  99"), "99");
    }

    #[test]
    fn test_id_skips_marker_without_digits() {
        assert_eq!(extract_id("ID: pending, final ID: 12"), "12");
    }

    #[test]
    fn test_id_missing() {
        assert_eq!(extract_id("no identifier here"), UNKNOWN);
        assert_eq!(extract_id("ID: none"), UNKNOWN);
        assert_eq!(extract_id(""), UNKNOWN);
    }

    #[test]
    fn test_name_spans_lines() {
        let text = "Certificate of Completion\nWe hereby confirm that\n  John Q. Public\nID: 31\n";
        assert_eq!(extract_name(text), "John Q. Public");
    }

    #[test]
    fn test_name_missing_markers() {
        assert_eq!(extract_name("Jane Doe ID: 7"), UNKNOWN);
        assert_eq!(extract_name("We hereby confirm that Jane Doe"), UNKNOWN);
        assert_eq!(extract_name(""), UNKNOWN);
    }

    #[test]
    fn test_name_with_id_before_phrase() {
        let text = "ID: 7\nWe hereby confirm that Jane Doe";
        assert_eq!(extract_name(text), UNKNOWN);
        assert_eq!(extract_id(text), "7");
    }

    #[test]
    fn test_name_empty_between_markers() {
        assert_eq!(extract_name("We hereby confirm that   ID: 3"), "");
    }

    #[test]
    fn test_no_markers() {
        let fields = CertificateFields::parse("Lorem ipsum dolor sit amet");
        assert_eq!(fields.id, UNKNOWN);
        assert_eq!(fields.name, UNKNOWN);
    }
}
