//! Common regex patterns for claim document extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Candidate value cleaning
    pub static ref WS_RUN: Regex = Regex::new(
        r"\s+"
    ).unwrap();

    // Label words of neighbouring form fields; greedy captures are cut at
    // the first one (case-sensitive, the labels are printed capitalized).
    pub static ref LABEL_BREAK: Regex = Regex::new(
        r"\b(Branch|Date|Note|Code|Signature|Time|No\.|Number|Claim|Policy|Name|Gender|Age|Address|Email|Mobile|Contact|Phone|Relationship|Occupation)\b"
    ).unwrap();

    // Post-extraction cleanup
    pub static ref HYPHEN_BREAK: Regex = Regex::new(
        r"(\w)-\s+(\w)"
    ).unwrap();

    pub static ref TRAILING_NOISE: Regex = Regex::new(
        r"(?i)\b(Nationality|Claimant|SPAARC.*|By submitting.*|NEFT mandate.*|insurance claim.*)$"
    ).unwrap();

    // Monetary value shapes
    pub static ref GROUPED_AMOUNT: Regex = Regex::new(
        r"^\d{1,3}(,\d{3})*(\.\d{1,2})?$"
    ).unwrap();

    pub static ref BARE_AMOUNT: Regex = Regex::new(
        r"^\d+(\.\d+)?$"
    ).unwrap();

    // Raw block line reconstruction
    pub static ref QUOTE_WRAP: Regex = Regex::new(
        r#""\s*\n\s*""#
    ).unwrap();

    pub static ref MULTI_WS: Regex = Regex::new(
        r"\s{2,}"
    ).unwrap();

    // Raw block recognizers, in cascade priority order.
    // Hospital bill rows: serial, quoted description, amount.
    pub static ref BILL_ITEMS: Regex = Regex::new(
        r#"(?is)(\d+)\s*.*?\s*"([^"]*?)".*?([\d,]+(?:\.\d{1,2})?)\b"#
    ).unwrap();

    // Estimate rows: description, 2+ spaces, optional currency, amount.
    pub static ref ESTIMATE_LINES: Regex = Regex::new(
        r"(?i)([A-Za-z0-9(),\s\-/\\.&]+?)\s{2,}(Rs\.?\s*|₹?)\s*(\d{1,3}(?:,\d{3})*(?:\.\d{1,2})?)\b"
    ).unwrap();

    // A pre-printed grand total would be double counted by the motor
    // repair recognizer; it is stripped from the working text first.
    pub static ref REPAIR_TOTAL_LINE: Regex = Regex::new(
        r"(?i)Total Repair Cost[:\s₹Rs\.]*[\d,]+"
    ).unwrap();

    // Motor repair rows: serial, description, quantity, amount.
    pub static ref MOTOR_REPAIR_ITEMS: Regex = Regex::new(
        r"(\d+)\s+([A-Za-z0-9(),\s\-/\\.&]+?)\s+(\d+)\s+([\d,]+)"
    ).unwrap();

    // Pharmacy table rows: serial, dose form, name, qty, rate, amount.
    pub static ref PHARMACY_ROWS: Regex = Regex::new(
        r"(\d+)\s+(Tab\.|Cap\.|Syp\.|Inj\.|Oint\.|Cream\.)\s+([A-Za-z0-9\s\-\.]+?)\s+\d+\s+\d+\s+([\d,]+(?:\.\d{1,2})?)"
    ).unwrap();

    // "Description: Rs 123" rows.
    pub static ref DESC_AMOUNT_LINES: Regex = Regex::new(
        r"([A-Za-z0-9\s,()/\-]+?)\s*:\s*Rs\.?\s*([\d,]+(?:\.\d{1,2})?)"
    ).unwrap();

    // "Tab. Name: Rs 123" medication rows.
    pub static ref MEDICATION_LINES: Regex = Regex::new(
        r"(Tab\.|Cap\.|Syp\.|Inj\.|Oint\.|Cream\.)\s+([A-Za-z0-9\s\-\.]+):\s*Rs\.?\s*([\d,]+(?:\.\d{1,2})?)"
    ).unwrap();
}
