//! Data models: extraction profiles and session summaries.

pub mod embedded;
pub mod profile;
pub mod summary;

pub use profile::{DocumentKind, ExtractionProfile, SummarySection};
pub use summary::CombinedSummary;
