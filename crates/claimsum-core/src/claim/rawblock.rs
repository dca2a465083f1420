//! Raw tabular block formatting.
//!
//! Claim documents embed free-form tables: itemized hospital bills, motor
//! repair estimates, pharmacy invoices. Their text comes out of the PDF
//! layer with broken line wraps and collapsed columns. Formatting runs in
//! three stages: wrapped lines are stitched back together, OCR artifacts
//! are normalized, then a cascade of row recognizers is tried in priority
//! order. The first recognizer whose pattern matches at all claims the
//! block exclusively; rows with non-numeric amounts are dropped without
//! handing the block to a later recognizer.

use regex::{Captures, Regex};
use rust_decimal::Decimal;
use tracing::debug;

use super::rules::amounts::{format_grouped, parse_row_amount};
use super::rules::patterns::{
    BILL_ITEMS, DESC_AMOUNT_LINES, ESTIMATE_LINES, MEDICATION_LINES, MOTOR_REPAIR_ITEMS, MULTI_WS,
    PHARMACY_ROWS, QUOTE_WRAP, REPAIR_TOTAL_LINE,
};

/// One parsed table row. Recognizers fill the columns their pattern
/// captures and leave the rest empty.
#[derive(Debug, Default)]
struct Row {
    serial: String,
    description: String,
    quantity: String,
    amount: String,
}

/// Output shape of a recognizer's rows and total line.
#[derive(Debug, Clone, Copy)]
enum RowStyle {
    /// `- {desc}: Rs. {amount}` rows, `- Total: Rs. {sum}` footer.
    DashedRupee,
    /// `{n}. {desc} - Qty: {q}, Cost: Rs. {amount}` rows with a blank
    /// line before the `Total Repair Cost: Rs. {sum}` footer.
    RepairNumbered,
    /// `{n}. {desc} - Rs. {amount}` rows, `Total: Rs. {sum}` footer.
    PharmacyNumbered,
    /// `• {desc} - ₹{amount}` rows, `Total: ₹{sum}` footer.
    BulletMedication,
}

impl RowStyle {
    fn format_row(self, row: &Row, amount: Decimal) -> String {
        let amount = format_grouped(amount);
        match self {
            RowStyle::DashedRupee => format!("- {}: Rs. {}\n", row.description, amount),
            RowStyle::RepairNumbered => format!(
                "{}. {} - Qty: {}, Cost: Rs. {}\n",
                row.serial, row.description, row.quantity, amount
            ),
            RowStyle::PharmacyNumbered => {
                format!("{}. {} - Rs. {}\n", row.serial, row.description, amount)
            }
            RowStyle::BulletMedication => format!("• {} - ₹{}\n", row.description, amount),
        }
    }

    fn format_total(self, total: Decimal) -> String {
        let total = format_grouped(total);
        match self {
            RowStyle::DashedRupee => format!("- Total: Rs. {}", total),
            RowStyle::RepairNumbered => format!("\nTotal Repair Cost: Rs. {}", total),
            RowStyle::PharmacyNumbered => format!("Total: Rs. {}", total),
            RowStyle::BulletMedication => format!("Total: ₹{}", total),
        }
    }
}

/// One entry of the recognizer cascade.
struct Recognizer {
    name: &'static str,
    pattern: &'static Regex,
    row: fn(&Captures) -> Row,
    style: RowStyle,
    /// Strip pre-printed grand totals from the working text before
    /// matching. The strip persists for later recognizers.
    strip_printed_total: bool,
}

impl Recognizer {
    /// Format every row this recognizer's pattern finds. `None` means the
    /// pattern did not match and the cascade moves on; `Some` ends the
    /// cascade even when every matched row was skipped as non-numeric.
    fn apply(&self, text: &str) -> Option<String> {
        let mut formatted = String::new();
        let mut total = Decimal::ZERO;
        let mut matched = false;

        for caps in self.pattern.captures_iter(text) {
            matched = true;
            let row = (self.row)(&caps);
            let Some(amount) = parse_row_amount(&row.amount) else {
                continue;
            };
            formatted.push_str(&self.style.format_row(&row, amount));
            total += amount;
        }

        if !matched {
            return None;
        }
        debug!("raw block matched {} recognizer", self.name);
        if total > Decimal::ZERO {
            formatted.push_str(&self.style.format_total(total));
        }
        Some(formatted)
    }
}

fn bill_row(caps: &Captures) -> Row {
    Row {
        serial: caps[1].to_string(),
        description: caps[2].trim().to_string(),
        amount: caps[3].to_string(),
        ..Row::default()
    }
}

fn estimate_row(caps: &Captures) -> Row {
    Row {
        description: caps[1].trim().to_string(),
        amount: caps[3].to_string(),
        ..Row::default()
    }
}

fn repair_row(caps: &Captures) -> Row {
    Row {
        serial: caps[1].to_string(),
        description: caps[2].trim().to_string(),
        quantity: caps[3].to_string(),
        amount: caps[4].to_string(),
    }
}

fn pharmacy_row(caps: &Captures) -> Row {
    Row {
        serial: caps[1].to_string(),
        description: format!("{} {}", &caps[2], caps[3].trim()),
        amount: caps[4].to_string(),
        ..Row::default()
    }
}

fn desc_amount_row(caps: &Captures) -> Row {
    Row {
        description: caps[1].trim().to_string(),
        amount: caps[2].to_string(),
        ..Row::default()
    }
}

fn medication_row(caps: &Captures) -> Row {
    Row {
        description: format!("{} {}", &caps[1], caps[2].trim()),
        amount: caps[3].to_string(),
        ..Row::default()
    }
}

fn recognizers() -> [Recognizer; 6] {
    [
        Recognizer {
            name: "bill items",
            pattern: &BILL_ITEMS,
            row: bill_row,
            style: RowStyle::DashedRupee,
            strip_printed_total: false,
        },
        Recognizer {
            name: "estimate lines",
            pattern: &ESTIMATE_LINES,
            row: estimate_row,
            style: RowStyle::DashedRupee,
            strip_printed_total: false,
        },
        Recognizer {
            name: "motor repair items",
            pattern: &MOTOR_REPAIR_ITEMS,
            row: repair_row,
            style: RowStyle::RepairNumbered,
            strip_printed_total: true,
        },
        Recognizer {
            name: "pharmacy rows",
            pattern: &PHARMACY_ROWS,
            row: pharmacy_row,
            style: RowStyle::PharmacyNumbered,
            strip_printed_total: false,
        },
        Recognizer {
            name: "description amounts",
            pattern: &DESC_AMOUNT_LINES,
            row: desc_amount_row,
            style: RowStyle::DashedRupee,
            strip_printed_total: false,
        },
        Recognizer {
            name: "medication lines",
            pattern: &MEDICATION_LINES,
            row: medication_row,
            style: RowStyle::BulletMedication,
            strip_printed_total: false,
        },
    ]
}

/// Stitch wrapped physical lines back into logical rows.
///
/// A line is merged into the previous one when that line ended mid-phrase
/// (trailing `(`, `,`, `:` or `-`) or is still shorter than three words.
fn reconstruct_lines(raw: &str) -> String {
    let mut fixed: Vec<String> = Vec::new();
    let mut buffer = String::new();

    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if buffer.is_empty() {
            buffer = line.to_string();
        } else if ends_mid_phrase(&buffer) || buffer.split_whitespace().count() < 3 {
            buffer.push(' ');
            buffer.push_str(line);
        } else {
            fixed.push(std::mem::take(&mut buffer));
            buffer = line.to_string();
        }
    }
    if !buffer.is_empty() {
        fixed.push(buffer);
    }
    fixed.join("\n")
}

fn ends_mid_phrase(buffer: &str) -> bool {
    matches!(buffer.chars().last(), Some('(' | ',' | ':' | '-'))
}

/// Scrub common PDF text artifacts: the split "Replacement", quote pairs
/// broken across lines, runs of whitespace. Single newlines survive.
fn normalize(text: &str) -> String {
    let text = text.replace("Replace- ment", "Replacement");
    let text = QUOTE_WRAP.replace_all(&text, " ");
    MULTI_WS.replace_all(&text, " ").trim().to_string()
}

/// Format a raw tabular block into report lines.
///
/// Returns an empty string for empty input. Blocks no recognizer claims
/// collapse to a single `- ` prefixed line.
pub fn format_raw_block(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let mut text = normalize(&reconstruct_lines(raw));

    for recognizer in recognizers() {
        if recognizer.strip_printed_total {
            text = REPAIR_TOTAL_LINE.replace_all(&text, "").into_owned();
        }
        if let Some(formatted) = recognizer.apply(&text) {
            return formatted;
        }
    }

    let flat = text.replace('\n', " ").replace('\r', " ");
    let flat = flat.trim();
    if flat.is_empty() {
        String::new()
    } else {
        format!("- {}", flat)
    }
}
