//! Per-document summary extraction.
//!
//! A [`SummaryExtractor`] compiles one profile's field patterns up front
//! and turns each document's text into a field/value map. Values get a
//! light cleanup pass after extraction: hyphenated line-break repair,
//! trailing boilerplate removal and currency prefixing for the known
//! monetary fields.

use std::collections::HashMap;

use regex::Regex;
use tracing::debug;

use super::field::{compile_pattern, extract_field};
use super::rules::amounts::group_digits;
use super::rules::patterns::{BARE_AMOUNT, GROUPED_AMOUNT, HYPHEN_BREAK, TRAILING_NOISE};
use super::rules::MONEY_FIELDS;
use crate::models::ExtractionProfile;

/// Compiled form of one profile, reusable across the documents of a session.
pub struct SummaryExtractor {
    fields: Vec<CompiledField>,
}

struct CompiledField {
    name: String,
    money: bool,
    patterns: Vec<Regex>,
}

impl SummaryExtractor {
    /// Compile the profile's patterns. Invalid patterns are logged and
    /// dropped; the field keeps its remaining alternatives.
    pub fn new(profile: &ExtractionProfile) -> Self {
        let fields = profile
            .fields
            .iter()
            .map(|(name, patterns)| CompiledField {
                money: MONEY_FIELDS.contains(&name.to_lowercase().as_str()),
                patterns: patterns.iter().filter_map(|p| compile_pattern(p)).collect(),
                name: name.clone(),
            })
            .collect();
        Self { fields }
    }

    /// Extract every configured field from one document's text.
    ///
    /// Fields whose patterns find nothing are absent from the map. A value
    /// that only turns empty during post-extraction cleanup is still
    /// stored, shadowing later documents in the merge.
    pub fn extract(&self, text: &str) -> HashMap<String, String> {
        let mut summary = HashMap::new();

        for field in &self.fields {
            let value = extract_field(text, &field.patterns);
            if value.trim().is_empty() {
                continue;
            }
            let mut value = clean_value(&value);
            if field.money {
                value = prefix_currency(&value);
            }
            debug!("extracted {}: {:?}", field.name, value);
            summary.insert(field.name.clone(), value);
        }

        summary
    }
}

/// One-shot convenience over [`SummaryExtractor`].
pub fn extract_summary(text: &str, profile: &ExtractionProfile) -> HashMap<String, String> {
    SummaryExtractor::new(profile).extract(text)
}

/// Repair hyphenated line-break artifacts ("col- lision") and strip
/// trailing boilerplate that greedy captures drag in.
fn clean_value(value: &str) -> String {
    let repaired = HYPHEN_BREAK.replace_all(value, "${1}${2}");
    TRAILING_NOISE.replace(&repaired, "").trim().to_string()
}

/// Prefix monetary values with "Rs. ". Comma-grouped amounts are kept
/// verbatim; bare numbers are grouped with the decimals dropped. Anything
/// else (already prefixed, ranges, words) passes through untouched.
fn prefix_currency(value: &str) -> String {
    if GROUPED_AMOUNT.is_match(value) {
        format!("Rs. {}", value)
    } else if BARE_AMOUNT.is_match(value) {
        let integer = value.split('.').next().unwrap_or(value);
        format!("Rs. {}", group_digits(integer))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn profile(json: &str) -> ExtractionProfile {
        ExtractionProfile::from_json(json).unwrap()
    }

    #[test]
    fn test_extracts_configured_fields() {
        let profile = profile(
            r#"{
                "fields": {
                    "Policy Number": ["Policy\\s*No\\.?\\s*[:\\-]?\\s*([A-Z0-9/\\-]{5,})"],
                    "Insured Name": ["Name\\s*of\\s*Insured\\s*[:\\-]?\\s*([^\\n]+)"]
                },
                "summary_sections": []
            }"#,
        );
        let text = "Policy No: VEH/2024/00123\nName of Insured: Rajesh Sharma\n";
        let summary = extract_summary(text, &profile);

        assert_eq!(summary.get("Policy Number").unwrap(), "VEH/2024/00123");
        assert_eq!(summary.get("Insured Name").unwrap(), "Rajesh Sharma");
    }

    #[test]
    fn test_unmatched_fields_absent() {
        let profile = profile(
            r#"{
                "fields": {"Engine Number": ["Engine\\s*No\\.?\\s*[:\\-]?\\s*([A-Z0-9]{6,})"]},
                "summary_sections": []
            }"#,
        );
        let summary = extract_summary("no engines here", &profile);
        assert!(summary.is_empty());
    }

    #[test]
    fn test_bare_amount_gets_currency_prefix() {
        let profile = profile(
            r#"{
                "fields": {"Claim Amount": ["Claim\\s*Amount\\s*[:\\-]?\\s*([\\d,]+(?:\\.\\d{1,2})?)"]},
                "summary_sections": []
            }"#,
        );
        let summary = extract_summary("Claim Amount: 12345", &profile);
        assert_eq!(summary.get("Claim Amount").unwrap(), "Rs. 12,345");
    }

    #[test]
    fn test_grouped_amount_kept_verbatim() {
        let profile = profile(
            r#"{
                "fields": {"Sum Insured": ["Sum\\s*Insured\\s*[:\\-]?\\s*([\\d,]+(?:\\.\\d{1,2})?)"]},
                "summary_sections": []
            }"#,
        );
        let summary = extract_summary("Sum Insured: 12,345.00", &profile);
        assert_eq!(summary.get("Sum Insured").unwrap(), "Rs. 12,345.00");
    }

    #[test]
    fn test_bare_decimal_truncated_and_grouped() {
        let profile = profile(
            r#"{
                "fields": {"Total Repair Cost": ["Total\\s*Repair\\s*Cost\\s*[:\\-]?\\s*([\\d.]+)"]},
                "summary_sections": []
            }"#,
        );
        let summary = extract_summary("Total Repair Cost: 45000.75", &profile);
        assert_eq!(summary.get("Total Repair Cost").unwrap(), "Rs. 45,000");
    }

    #[test]
    fn test_prefixed_amount_not_double_prefixed() {
        let profile = profile(
            r#"{
                "fields": {"Claim Amount": ["Claim\\s*Amount\\s*[:\\-]?\\s*((?:Rs\\.\\s*)?[\\d,]+)"]},
                "summary_sections": []
            }"#,
        );
        let summary = extract_summary("Claim Amount: Rs. 5,000", &profile);
        assert_eq!(summary.get("Claim Amount").unwrap(), "Rs. 5,000");
    }

    #[test]
    fn test_hyphenated_line_break_repaired() {
        let profile = profile(
            r#"{
                "fields": {"Accident Description": ["Description\\s*[:\\-]?\\s*(.+?)(?:\\n\\s*\\n|$)"]},
                "summary_sections": []
            }"#,
        );
        // Existing in-word hyphens stay; only "col- lision" style breaks fuse.
        let summary = extract_summary("Description: Rear-end col-\nlision at toll", &profile);
        assert_eq!(
            summary.get("Accident Description").unwrap(),
            "Rear-end collision at toll"
        );
    }

    #[test]
    fn test_trailing_boilerplate_stripped() {
        let profile = profile(
            r#"{
                "fields": {"Claimant Name": ["Nominee\\s*Name\\s*[:\\-]?\\s*([^\\n]+)"]},
                "summary_sections": []
            }"#,
        );
        let summary = extract_summary(
            "Nominee Name: Sunita Devi By submitting this form I declare",
            &profile,
        );
        assert_eq!(summary.get("Claimant Name").unwrap(), "Sunita Devi");
    }

    #[test]
    fn test_value_emptied_by_cleanup_still_stored() {
        let profile = profile(
            r#"{
                "fields": {"Insured Name": ["Insured\\s*[:\\-]\\s*([^\\n]+)"]},
                "summary_sections": []
            }"#,
        );
        // The captured word survives extraction but is boilerplate; the
        // emptied value still lands in the map and wins later merges.
        let summary = extract_summary("Insured: Nationality", &profile);
        assert_eq!(summary.get("Insured Name").unwrap(), "");
    }

    #[test]
    fn test_invalid_pattern_skipped_not_fatal() {
        let profile = profile(
            r#"{
                "fields": {"Policy Number": ["(unclosed", "Policy\\s*No\\s*[:\\-]?\\s*([A-Z0-9/]{5,})"]},
                "summary_sections": []
            }"#,
        );
        let summary = extract_summary("Policy No: AB/12345", &profile);
        assert_eq!(summary.get("Policy Number").unwrap(), "AB/12345");
    }
}
