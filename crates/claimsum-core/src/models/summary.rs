//! Combined summary accumulated across the documents of one session.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Field values merged across all documents of a session.
///
/// Upload order decides precedence: once a field holds a non-blank value,
/// later documents cannot overwrite it. Keys are sorted so serialized
/// output is stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinedSummary {
    #[serde(flatten)]
    values: BTreeMap<String, String>,
}

impl CombinedSummary {
    /// Create an empty summary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one document's extracted fields.
    ///
    /// A field is written only when it is not present yet or its current
    /// value is blank; blank incoming values are stored too so the field
    /// set is recorded even when extraction produced nothing usable.
    pub fn merge(&mut self, fields: HashMap<String, String>) {
        for (name, value) in fields {
            match self.values.get(&name) {
                Some(current) if !current.trim().is_empty() => {}
                _ => {
                    self.values.insert(name, value);
                }
            }
        }
    }

    /// Set a field unconditionally. Used for questionnaire answers, which
    /// outrank anything extracted from the documents.
    pub fn set(&mut self, field: &str, value: &str) {
        self.values.insert(field.to_string(), value.to_string());
    }

    /// Look up a field value.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    /// Iterate fields in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.values.iter()
    }

    /// Number of stored fields, blank values included.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// True when every stored value is blank.
    pub fn has_no_content(&self) -> bool {
        self.values.values().all(|v| v.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fields(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_first_document_wins() {
        let mut combined = CombinedSummary::new();
        combined.merge(fields(&[("Policy Number", "POL-123")]));
        combined.merge(fields(&[("Policy Number", "POL-999")]));

        assert_eq!(combined.get("Policy Number"), Some("POL-123"));
    }

    #[test]
    fn test_blank_value_is_replaceable() {
        let mut combined = CombinedSummary::new();
        combined.merge(fields(&[("Insured Name", "  ")]));
        combined.merge(fields(&[("Insured Name", "Ravi Kumar")]));

        assert_eq!(combined.get("Insured Name"), Some("Ravi Kumar"));
    }

    #[test]
    fn test_blank_value_is_still_recorded() {
        let mut combined = CombinedSummary::new();
        combined.merge(fields(&[("Garage Name", "")]));

        assert_eq!(combined.len(), 1);
        assert_eq!(combined.get("Garage Name"), Some(""));
        assert!(combined.has_no_content());
    }

    #[test]
    fn test_set_overwrites() {
        let mut combined = CombinedSummary::new();
        combined.merge(fields(&[("FIR Status", "unknown")]));
        combined.set("FIR Status", "Yes");

        assert_eq!(combined.get("FIR Status"), Some("Yes"));
    }

    #[test]
    fn test_iteration_is_sorted() {
        let mut combined = CombinedSummary::new();
        combined.merge(fields(&[("Zone", "B"), ("Area", "A")]));

        let keys: Vec<&String> = combined.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["Area", "Zone"]);
    }
}
