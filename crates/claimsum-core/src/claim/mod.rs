//! Claim summarization: field extraction, raw tabular blocks, section reports.

mod field;
mod rawblock;
mod report;
mod session;
mod summary;

pub mod rules;

pub use field::{compile_pattern, extract_field};
pub use rawblock::format_raw_block;
pub use report::render_report;
pub use session::{DocumentRecord, Questionnaire, SummarySession, DEFAULT_MAX_TEXT_LEN};
pub use summary::{extract_summary, SummaryExtractor};
