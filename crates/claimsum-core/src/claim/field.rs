//! Scalar field extraction: ordered regex patterns with candidate cleaning.

use regex::{Regex, RegexBuilder};
use tracing::warn;

use super::rules::VALUE_STOPLIST;
use super::rules::patterns::{LABEL_BREAK, WS_RUN};

/// Compile one profile pattern with the options field matching uses
/// everywhere: case-insensitive, and `.` matching newlines so multi-line
/// values (addresses, descriptions) can be captured.
pub fn compile_pattern(pattern: &str) -> Option<Regex> {
    match RegexBuilder::new(pattern)
        .case_insensitive(true)
        .dot_matches_new_line(true)
        .build()
    {
        Ok(re) => Some(re),
        Err(e) => {
            warn!("skipping invalid pattern {:?}: {}", pattern, e);
            None
        }
    }
}

/// Extract a field value using an ordered list of compiled patterns.
///
/// The first pattern that matches claims the attempt; later patterns are
/// never consulted, even when every candidate of the match is rejected.
/// For a match with capture groups, participating groups are cleaned in
/// order and the first survivor is returned. A match without capture
/// groups returns its whole text, whitespace-collapsed, with no quality
/// checks. Empty string means no pattern matched or no candidate survived.
pub fn extract_field(text: &str, patterns: &[Regex]) -> String {
    for re in patterns {
        let Some(caps) = re.captures(text) else {
            continue;
        };

        if re.captures_len() > 1 {
            for group in caps.iter().skip(1).flatten() {
                if let Some(value) = clean_candidate(group.as_str()) {
                    return value;
                }
            }
            return String::new();
        }

        // No capture groups: the whole match is the value.
        return WS_RUN.replace_all(caps[0].trim(), " ").into_owned();
    }
    String::new()
}

/// Run one captured candidate through the cleaning and rejection pipeline.
/// `None` means the candidate is noise and the next one should be tried.
fn clean_candidate(raw: &str) -> Option<String> {
    let mut value = WS_RUN.replace_all(raw.trim(), " ").into_owned();

    // Greedy captures often swallow the label of the following form field;
    // cut at the first label word.
    if let Some(m) = LABEL_BREAK.find(&value) {
        value.truncate(m.start());
        value = value.trim().to_string();
    }

    let lower = value.to_lowercase();
    if VALUE_STOPLIST.contains(&lower.as_str()) || value.trim().chars().count() < 3 {
        return None;
    }
    if lower == "na" {
        return Some("NA".to_string());
    }
    if value.chars().count() < 5
        && !value.chars().any(|c| c.is_ascii_digit())
        && !value.chars().any(char::is_alphabetic)
    {
        return None;
    }

    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn compile(patterns: &[&str]) -> Vec<Regex> {
        patterns.iter().filter_map(|p| compile_pattern(p)).collect()
    }

    #[test]
    fn test_first_matching_pattern_wins() {
        let patterns = compile(&[
            r"Policy\s*No\.?\s*[:\-]?\s*([A-Z0-9/-]{5,})",
            r"Certificate\s*No\.?\s*[:\-]?\s*([A-Z0-9/-]{5,})",
        ]);
        let text = "Policy No: POL/2024/001\nCertificate No: CERT-99";

        assert_eq!(extract_field(text, &patterns), "POL/2024/001");
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let patterns = compile(&[r"policy\s*number\s*[:\-]?\s*([A-Z0-9/-]{5,})"]);
        let text = "POLICY NUMBER: ABC/12345";

        assert_eq!(extract_field(text, &patterns), "ABC/12345");
    }

    #[test]
    fn test_multiline_capture_is_collapsed() {
        let patterns = compile(&[r"Address\s*:\s*(.+?)(?:\n\n|$)"]);
        let text = "Address: 14 MG Road,\n   Pune 411001";

        assert_eq!(extract_field(text, &patterns), "14 MG Road, Pune 411001");
    }

    #[test]
    fn test_value_truncated_at_next_label() {
        let patterns = compile(&[r"Insured\s*:\s*(.+)"]);
        let text = "Insured: Ravi Kumar Gender: Male";

        assert_eq!(extract_field(text, &patterns), "Ravi Kumar");
    }

    #[test]
    fn test_label_cut_is_case_sensitive() {
        let patterns = compile(&[r"Place\s*:\s*([^\n]+)"]);
        // "gender" lower-cased is not a label word, so the value survives.
        let text = "Place: new gender clinic road";

        assert_eq!(extract_field(text, &patterns), "new gender clinic road");
    }

    #[test]
    fn test_stoplist_value_yields_empty() {
        let patterns = compile(&[r"Garage Name\s*:\s*([^\n]+)"]);
        let text = "Garage Name: Not Mentioned";

        assert_eq!(extract_field(text, &patterns), "");
    }

    #[test]
    fn test_rejected_match_consumes_the_attempt() {
        // The first pattern matches but its only candidate is noise; the
        // second pattern is never consulted.
        let patterns = compile(&[
            r"Name\s*:\s*([^\n]+)",
            r"Insured\s+(\w+ \w+)",
        ]);
        let text = "Name: nil\nInsured Ravi Kumar";

        assert_eq!(extract_field(text, &patterns), "");
    }

    #[test]
    fn test_short_value_rejected_falls_to_next_group() {
        let patterns = compile(&[r"Claimant\s*:\s*(\w+)\s*\((.+?)\)"]);
        let text = "Claimant: of (Sunita Devi)";

        assert_eq!(extract_field(text, &patterns), "Sunita Devi");
    }

    #[test]
    fn test_no_group_pattern_returns_whole_match() {
        let patterns = compile(&[r"MH\s*\d{2}\s*[A-Z]{1,2}\s*\d{4}"]);
        let text = "Vehicle MH  12\nAB 4321 owned by";

        assert_eq!(extract_field(text, &patterns), "MH 12 AB 4321");
    }

    #[test]
    fn test_no_pattern_matches() {
        let patterns = compile(&[r"Engine\s*No\.?\s*:\s*(\w+)"]);

        assert_eq!(extract_field("nothing relevant here", &patterns), "");
    }

    #[test]
    fn test_invalid_pattern_is_skipped_at_compile() {
        let patterns = compile(&[r"(unclosed", r"Claim\s*No\s*:\s*(\w+)"]);
        assert_eq!(patterns.len(), 1);

        assert_eq!(extract_field("Claim No: C123", &patterns), "C123");
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let patterns = compile(&[r"Amount\s*:\s*([\d,]+)"]);
        let text = "Amount: 12,500 and again Amount: 99";

        let first = extract_field(text, &patterns);
        let second = extract_field(text, &patterns);
        assert_eq!(first, "12,500");
        assert_eq!(first, second);
    }
}
