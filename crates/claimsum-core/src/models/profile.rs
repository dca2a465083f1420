//! Extraction profiles: per-document-type field patterns and report layout.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::error::ProfileError;
use crate::models::embedded;

/// Insurance document families shipped with built-in profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Motor/vehicle insurance claims.
    Vehicle,
    /// Health insurance claims (hospitalization, pharmacy bills).
    Health,
    /// Life insurance claims.
    Life,
}

impl DocumentKind {
    /// File stem of the profile JSON for this document kind.
    pub fn file_stem(&self) -> &'static str {
        match self {
            DocumentKind::Vehicle => "vehicle_insurance",
            DocumentKind::Health => "health_insurance",
            DocumentKind::Life => "life_insurance",
        }
    }

    /// Human-readable name.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Vehicle => "Vehicle Insurance",
            DocumentKind::Health => "Health Insurance",
            DocumentKind::Life => "Life Insurance",
        }
    }

    /// The profile embedded in the binary for this document kind.
    pub fn builtin_profile(&self) -> ExtractionProfile {
        let json = match self {
            DocumentKind::Vehicle => embedded::VEHICLE_PROFILE,
            DocumentKind::Health => embedded::HEALTH_PROFILE,
            DocumentKind::Life => embedded::LIFE_PROFILE,
        };
        // Embedded profiles are checked by tests; a parse failure here is a
        // packaging bug, not a runtime condition.
        serde_json::from_str(json).unwrap_or_default()
    }

    /// All kinds, in display order.
    pub fn all() -> &'static [DocumentKind] {
        &[DocumentKind::Vehicle, DocumentKind::Health, DocumentKind::Life]
    }
}

/// Per-document-type extraction configuration.
///
/// `fields` maps a logical field name to an ordered list of regex patterns;
/// earlier patterns take precedence. `summary_sections` groups fields into
/// the sections of the rendered report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionProfile {
    /// Field name -> ordered regex patterns.
    pub fields: HashMap<String, Vec<String>>,

    /// Report sections, rendered in order.
    pub summary_sections: Vec<SummarySection>,
}

/// One section of the rendered report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarySection {
    /// Section heading, e.g. "Policy Details".
    pub section_title: String,

    /// Field names rendered under this heading, in order.
    #[serde(default)]
    pub fields: Vec<String>,
}

impl ExtractionProfile {
    /// Load a profile from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ProfileError> {
        if !path.exists() {
            return Err(ProfileError::NotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a profile from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ProfileError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Save the profile to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), ProfileError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// A profile with no fields extracts nothing but still lets the
    /// pipeline run end to end.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Check the profile for consistency issues and return them.
    ///
    /// Section entries that reference no configured field are tolerated at
    /// render time (the field is simply absent), but usually indicate a typo.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        for (name, patterns) in &self.fields {
            if patterns.is_empty() {
                issues.push(format!("Field '{}' has no patterns", name));
            }
            for pattern in patterns {
                if let Err(e) = regex::Regex::new(pattern) {
                    issues.push(format!("Field '{}' has an invalid pattern: {}", name, e));
                }
            }
        }

        for section in &self.summary_sections {
            if section.section_title.trim().is_empty() {
                issues.push("Section with empty title".to_string());
            }
            for field in &section.fields {
                if !self.fields.contains_key(field) {
                    issues.push(format!(
                        "Section '{}' references unknown field '{}'",
                        section.section_title, field
                    ));
                }
            }
        }

        issues.sort();
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_profile_json() {
        let json = r#"{
            "fields": {
                "Policy Number": ["Policy\\s*No\\.?\\s*[:\\-]?\\s*([A-Z0-9/-]+)"]
            },
            "summary_sections": [
                { "section_title": "Policy Details", "fields": ["Policy Number"] }
            ]
        }"#;

        let profile = ExtractionProfile::from_json(json).unwrap();
        assert_eq!(profile.fields.len(), 1);
        assert_eq!(profile.summary_sections.len(), 1);
        assert_eq!(profile.summary_sections[0].section_title, "Policy Details");
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let json = r#"{ "fields": { "Name": ["Name:\\s*(\\w+)"] } }"#;
        let profile = ExtractionProfile::from_json(json).unwrap();
        assert!(profile.summary_sections.is_empty());
        assert!(!profile.is_empty());
    }

    #[test]
    fn test_validate_reports_unknown_section_field() {
        let json = r#"{
            "fields": { "Name": ["Name:\\s*(\\w+)"] },
            "summary_sections": [
                { "section_title": "Details", "fields": ["Name", "Missing Field"] }
            ]
        }"#;
        let profile = ExtractionProfile::from_json(json).unwrap();
        let issues = profile.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].contains("Missing Field"));
    }

    #[test]
    fn test_validate_reports_bad_regex() {
        let json = r#"{ "fields": { "Name": ["(unclosed"] } }"#;
        let profile = ExtractionProfile::from_json(json).unwrap();
        let issues = profile.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].contains("invalid pattern"));
    }

    #[test]
    fn test_builtin_profiles_parse() {
        for kind in DocumentKind::all() {
            let profile = kind.builtin_profile();
            assert!(!profile.is_empty(), "{} profile is empty", kind.label());
            assert!(
                !profile.summary_sections.is_empty(),
                "{} profile has no sections",
                kind.label()
            );
            assert_eq!(profile.validate(), Vec::<String>::new());
        }
    }

    #[test]
    fn test_from_file_missing_path() {
        let err = ExtractionProfile::from_file(Path::new("/nonexistent/profile.json"));
        assert!(matches!(err, Err(ProfileError::NotFound(_))));
    }
}
