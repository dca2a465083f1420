//! Section-grouped report rendering.
//!
//! Field names carry section qualifiers so different people's details can
//! coexist in one flat map ("Claimant Name", "Driver Name"). Inside a
//! section those qualifiers are redundant, so each (section, field) pair
//! runs through an ordered rule table that shortens the display label.
//! The first matching rule wins; questionnaire fields are skipped here
//! because the preamble already carries them.

use super::rawblock::format_raw_block;
use super::rules::{QUESTIONNAIRE_FIELDS, RAW_BLOCK_MARKERS};
use crate::models::{CombinedSummary, SummarySection};

/// One label-shortening rule, keyed on the lower-cased section title.
enum LabelRule {
    /// Strip a leading qualifier from the field name.
    Prefix {
        section: &'static str,
        prefix: &'static str,
    },
    /// Strip a leading qualifier unless the field also mentions `keep`,
    /// in which case the full name stays.
    PrefixUnless {
        section: &'static str,
        prefix: &'static str,
        keep: &'static str,
    },
    /// Remove parenthesized markers from the field name. `contains` holds
    /// the lower-cased needles that arm the rule, `remove` the exact
    /// substrings taken out.
    Markers {
        section: &'static str,
        contains: &'static [&'static str],
        remove: &'static [&'static str],
    },
    /// Replace an exact field name with a fixed label.
    Exact {
        section: &'static str,
        field: &'static str,
        label: &'static str,
    },
}

const LABEL_RULES: &[LabelRule] = &[
    LabelRule::Prefix {
        section: "life assured details",
        prefix: "Insured ",
    },
    LabelRule::Prefix {
        section: "bank & payout details",
        prefix: "Claimant ",
    },
    LabelRule::Markers {
        section: "claim submission details",
        contains: &[" (official)", " (official use)"],
        remove: &[" (Official)", " (Official Use)"],
    },
    LabelRule::Markers {
        section: "death certificate details",
        contains: &[" (death certificate)"],
        remove: &["(Death Certificate)"],
    },
    LabelRule::Markers {
        section: "kyc details",
        contains: &[" (kyc)"],
        remove: &["(KYC)"],
    },
    LabelRule::Exact {
        section: "policy details",
        field: "policy number",
        label: "Policy No.",
    },
    LabelRule::Prefix {
        section: "claimant details",
        prefix: "Claimant ",
    },
    LabelRule::PrefixUnless {
        section: "driver details",
        prefix: "Driver ",
        keep: "driving",
    },
    LabelRule::Prefix {
        section: "garage details",
        prefix: "Garage ",
    },
    LabelRule::Prefix {
        section: "other insurance details",
        prefix: "Other Insurance - ",
    },
    LabelRule::Prefix {
        section: "interest holder details",
        prefix: "Interest Holder - ",
    },
    LabelRule::Markers {
        section: "discharge voucher",
        contains: &["(discharge voucher)"],
        remove: &["(Discharge Voucher)"],
    },
    LabelRule::Markers {
        section: "satisfaction note",
        contains: &["(satisfaction note)"],
        remove: &["(Satisfaction Note)"],
    },
    LabelRule::Markers {
        section: "kyc information",
        contains: &["(kyc)"],
        remove: &["(KYC)"],
    },
    LabelRule::Prefix {
        section: "primary insured details",
        prefix: "Primary Insured ",
    },
    LabelRule::Prefix {
        section: "insured person hospitalized details",
        prefix: "Insured Person Hospitalized ",
    },
];

/// Outcome of the shortening chain for one field.
enum Label {
    Text(String),
    Skip,
}

fn trim_label(label: &str) -> String {
    label.trim_matches([' ', ':', '-']).to_string()
}

fn shorten_label(heading: &str, field: &str) -> Label {
    let section = heading.to_lowercase();
    let field_lower = field.to_lowercase();

    for rule in LABEL_RULES {
        match rule {
            LabelRule::Prefix { section: s, prefix } => {
                if section == *s && field_lower.starts_with(&prefix.to_lowercase()) {
                    return Label::Text(trim_label(&field[prefix.len()..]));
                }
            }
            LabelRule::PrefixUnless {
                section: s,
                prefix,
                keep,
            } => {
                if section == *s && field_lower.starts_with(&prefix.to_lowercase()) {
                    if field_lower.contains(keep) {
                        return Label::Text(field.to_string());
                    }
                    return Label::Text(trim_label(&field[prefix.len()..]));
                }
            }
            LabelRule::Markers {
                section: s,
                contains,
                remove,
            } => {
                if section == *s && contains.iter().any(|c| field_lower.contains(c)) {
                    let mut label = field.to_string();
                    for marker in *remove {
                        label = label.replace(marker, "");
                    }
                    return Label::Text(trim_label(&label));
                }
            }
            LabelRule::Exact {
                section: s,
                field: f,
                label,
            } => {
                if section == *s && field_lower == *f {
                    return Label::Text((*label).to_string());
                }
            }
        }
    }

    // Any heading doubles as a generic qualifier once its "Details"
    // suffix is dropped: "Vehicle Details" strips a "Vehicle " prefix.
    let stem = section.replace(" details", "");
    let stem = stem.trim();
    if !heading.is_empty() && field_lower.starts_with(&format!("{} ", stem)) {
        return Label::Text(trim_label(&field[stem.len()..]));
    }

    if QUESTIONNAIRE_FIELDS.contains(&field) {
        return Label::Skip;
    }

    Label::Text(field.to_string())
}

fn is_raw_block_field(field: &str) -> bool {
    RAW_BLOCK_MARKERS.iter().any(|marker| field.contains(marker))
}

/// Render the combined summary into sectioned report text.
///
/// Sections keep their configured order and field order; fields with
/// blank values and sections left without content are omitted.
pub fn render_report(summary: &CombinedSummary, sections: &[SummarySection]) -> String {
    let mut report = String::new();

    for section in sections {
        let mut lines: Vec<String> = Vec::new();

        for field in &section.fields {
            let Some(value) = summary.get(field) else {
                continue;
            };
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            let label = match shorten_label(&section.section_title, field) {
                Label::Skip => continue,
                Label::Text(label) => label,
            };
            if is_raw_block_field(field) {
                lines.push(format!("### {}\n{}", label, format_raw_block(value)));
            } else {
                lines.push(format!("- {}: {}", label, value));
            }
        }

        if !lines.is_empty() {
            report.push_str(&format!(
                "\n### {}\n{}\n",
                section.section_title,
                lines.join("\n")
            ));
        }
    }

    report
}
