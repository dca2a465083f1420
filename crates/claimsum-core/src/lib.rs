//! Core library for insurance claim document summarization.
//!
//! This crate provides:
//! - Document text extraction (PDF, DOCX, plain text, pluggable OCR for images)
//! - Profile-driven regex field extraction with candidate cleaning
//! - Tabular raw-block formatting (hospital bills, repair estimates, pharmacy tables)
//! - Section-grouped report building with first-document-wins merging

pub mod error;
pub mod models;
pub mod document;
pub mod claim;
pub mod render;

pub use error::{ClaimsumError, DocumentError, ProfileError, RenderError, Result};
pub use models::{CombinedSummary, DocumentKind, ExtractionProfile, SummarySection};
pub use document::{extract_text, DocumentFormat, OcrBackend};
pub use claim::{
    extract_field, extract_summary, format_raw_block, render_report, DocumentRecord,
    Questionnaire, SummaryExtractor, SummarySession,
};
pub use render::{RenderFormat, RendererRegistry, SummaryRenderer};
