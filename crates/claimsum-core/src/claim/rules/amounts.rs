//! Amount parsing and formatting for claim summaries.
//!
//! Amounts in Indian claim documents come grouped ("12,500", "1,23,450" is
//! not produced by the recognizers' patterns) or bare ("12500.50"). Report
//! output uses western grouping with no decimal places.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Parse a recognizer row amount.
///
/// Thousands separators are removed first; the remainder must be digits
/// with at most one decimal point. `None` marks a non-numeric row, which
/// is skipped without disqualifying its recognizer.
pub fn parse_row_amount(s: &str) -> Option<Decimal> {
    let cleaned = s.replace(',', "");
    if cleaned.is_empty() {
        return None;
    }
    if !cleaned.replace('.', "").chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    if !cleaned.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    Decimal::from_str(&cleaned).ok()
}

/// Format an amount with comma thousands separators and no decimal places,
/// rounding halves to even.
pub fn format_grouped(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven);
    group_digits(&rounded.to_string())
}

/// Insert comma separators into a plain digit string.
pub fn group_digits(digits: &str) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let mut formatted = String::new();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(*c);
    }

    formatted
}
