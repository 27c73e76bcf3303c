use once_cell::sync::Lazy;
use regex::Regex;

static NEGATIVE_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)negative:?\s*(.*)").expect("negative marker regex is valid"));

/// Pull the text following a "negative:" marker out of a prompt.
///
/// The marker is matched case-insensitively and the capture runs to the end
/// of that line, trimmed. The caller keeps forwarding the original prompt in
/// full; the marker is never stripped from it.
pub fn extract_negative(prompt: &str) -> Option<String> {
    NEGATIVE_MARKER
        .captures(prompt)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_text_after_marker() {
        assert_eq!(
            extract_negative("A cat. Negative: blurry, low quality"),
            Some("blurry, low quality".to_string())
        );
    }

    #[test]
    fn test_marker_is_case_insensitive() {
        assert_eq!(
            extract_negative("a city at night NEGATIVE: rain"),
            Some("rain".to_string())
        );
        assert_eq!(
            extract_negative("a city at night negative: rain"),
            Some("rain".to_string())
        );
    }

    #[test]
    fn test_colon_is_optional() {
        assert_eq!(
            extract_negative("portrait, negative watermark"),
            Some("watermark".to_string())
        );
    }

    #[test]
    fn test_capture_is_trimmed() {
        assert_eq!(
            extract_negative("Negative:    extra limbs   "),
            Some("extra limbs".to_string())
        );
    }

    #[test]
    fn test_capture_stops_at_end_of_line() {
        assert_eq!(
            extract_negative("a forest\nnegative: fog\nwide angle"),
            Some("fog".to_string())
        );
    }

    #[test]
    fn test_no_marker_yields_none() {
        assert_eq!(extract_negative("A plain prompt with no marker"), None);
    }

    #[test]
    fn test_bare_marker_yields_empty_capture() {
        // The marker alone still matches; the capture is just empty.
        assert_eq!(extract_negative("Negative:"), Some(String::new()));
    }
}
