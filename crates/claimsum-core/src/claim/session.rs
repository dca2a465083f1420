//! Summary sessions: one claim's documents from upload to finished report.
//!
//! A session pins the document kind and profile, feeds each document
//! through text extraction and field extraction, merges the results in
//! upload order and renders the preamble plus sectioned report. Failures
//! on individual documents are recorded and never abort the session.

use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use super::report::render_report;
use super::summary::SummaryExtractor;
use crate::document::{extract_text, OcrBackend};
use crate::error::DocumentError;
use crate::models::{CombinedSummary, DocumentKind, ExtractionProfile};

/// Byte bound on per-document text fed to the regex pass. Larger inputs
/// are truncated at the nearest character boundary below the bound.
pub const DEFAULT_MAX_TEXT_LEN: usize = 1024 * 1024;

/// Intake answers gathered alongside the uploaded documents.
///
/// Two questions apply to every claim (policy assignment, KYC); FIR applies
/// to vehicle claims and the network-hospital/cashless pair to health
/// claims. Answers override anything extracted from the documents.
#[derive(Debug, Clone, Copy)]
pub struct Questionnaire {
    pub policy_assigned: bool,
    pub kyc_verified: bool,
    pub fir_filed: bool,
    pub network_hospital: bool,
    pub cashless: bool,
}

impl Default for Questionnaire {
    fn default() -> Self {
        Self {
            policy_assigned: false,
            kyc_verified: true,
            fir_filed: false,
            network_hospital: false,
            cashless: false,
        }
    }
}

fn yes_no(answer: bool) -> &'static str {
    if answer {
        "Yes"
    } else {
        "No"
    }
}

/// Outcome of one ingested document.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentRecord {
    /// File path or caller-supplied label.
    pub source: String,
    /// Characters of text fed to extraction, after truncation.
    pub chars: usize,
    /// Fields this document produced a value for, before merging.
    pub fields_extracted: usize,
    /// Extraction failure, when the document yielded no text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// The per-claim summarization pipeline.
pub struct SummarySession {
    kind: DocumentKind,
    profile: ExtractionProfile,
    extractor: SummaryExtractor,
    questionnaire: Questionnaire,
    max_text_len: usize,
    combined: CombinedSummary,
    records: Vec<DocumentRecord>,
}

impl SummarySession {
    pub fn new(kind: DocumentKind, profile: ExtractionProfile) -> Self {
        let extractor = SummaryExtractor::new(&profile);
        Self {
            kind,
            profile,
            extractor,
            questionnaire: Questionnaire::default(),
            max_text_len: DEFAULT_MAX_TEXT_LEN,
            combined: CombinedSummary::new(),
            records: Vec::new(),
        }
    }

    /// Set the intake answers for this claim.
    pub fn with_questionnaire(mut self, questionnaire: Questionnaire) -> Self {
        self.questionnaire = questionnaire;
        self
    }

    /// Override the per-document text bound.
    pub fn with_max_text_len(mut self, max_text_len: usize) -> Self {
        self.max_text_len = max_text_len;
        self
    }

    /// Extract text from a file and ingest it.
    ///
    /// On failure the document is recorded with its error and the session
    /// stays usable; the error is returned so callers can report it.
    pub fn ingest_file(
        &mut self,
        path: &Path,
        ocr: Option<&dyn OcrBackend>,
    ) -> Result<(), DocumentError> {
        match extract_text(path, ocr) {
            Ok(text) => {
                self.ingest_text(&path.display().to_string(), &text);
                Ok(())
            }
            Err(e) => {
                warn!("skipping {}: {}", path.display(), e);
                self.records.push(DocumentRecord {
                    source: path.display().to_string(),
                    chars: 0,
                    fields_extracted: 0,
                    error: Some(e.to_string()),
                });
                Err(e)
            }
        }
    }

    /// Ingest already-extracted text under a display label.
    pub fn ingest_text(&mut self, source: &str, text: &str) {
        let text = self.bounded(text);
        let fields = self.extractor.extract(text);
        info!("{}: {} field(s) extracted", source, fields.len());
        self.records.push(DocumentRecord {
            source: source.to_string(),
            chars: text.chars().count(),
            fields_extracted: fields.len(),
            error: None,
        });
        self.combined.merge(fields);
    }

    fn bounded<'a>(&self, text: &'a str) -> &'a str {
        if text.len() <= self.max_text_len {
            return text;
        }
        let mut end = self.max_text_len;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        warn!("document text truncated from {} to {} bytes", text.len(), end);
        &text[..end]
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn profile(&self) -> &ExtractionProfile {
        &self.profile
    }

    /// Per-document outcomes, in ingestion order.
    pub fn records(&self) -> &[DocumentRecord] {
        &self.records
    }

    /// True when at least one document yielded a non-blank field value.
    pub fn has_extracted_content(&self) -> bool {
        !self.combined.has_no_content()
    }

    /// The merged field map with questionnaire answers applied.
    pub fn combined(&self) -> CombinedSummary {
        let mut combined = self.combined.clone();
        self.apply_questionnaire(&mut combined);
        combined
    }

    /// Render the full report: questionnaire preamble, blank line, then
    /// the sectioned summary.
    pub fn report(&self) -> String {
        let combined = self.combined();
        let mut out = self.preamble(&combined);
        out.push('\n');
        out.push_str(&render_report(&combined, &self.profile.summary_sections));
        out
    }

    fn apply_questionnaire(&self, combined: &mut CombinedSummary) {
        let q = &self.questionnaire;
        match self.kind {
            DocumentKind::Vehicle => {
                combined.set("FIR Status", yes_no(q.fir_filed));
            }
            DocumentKind::Health => {
                combined.set("Hospital Type Network", yes_no(q.network_hospital));
                if q.network_hospital {
                    combined.set("Cashless Facility Availed", yes_no(q.cashless));
                } else {
                    combined.set("Claim Type", "Reimbursement Claim");
                }
            }
            DocumentKind::Life => {}
        }
    }

    fn preamble(&self, combined: &CombinedSummary) -> String {
        let q = &self.questionnaire;
        let mut out = format!(
            "Could you please confirm whether the policy has been assigned?: {}\n",
            yes_no(q.policy_assigned)
        );
        out.push_str(&format!(
            "Could you please let us know whether the KYC verification has been completed?: {}\n",
            yes_no(q.kyc_verified)
        ));
        if let Some(status) = combined.get("FIR Status") {
            out.push_str(&format!("FIR/Affidavit Status: {}\n", status));
        }
        if self.kind == DocumentKind::Health {
            if let Some(v) = combined.get("Hospital Type Network") {
                out.push_str(&format!("Is the hospital type network?: {}\n", v));
            }
            if let Some(v) = combined.get("Cashless Facility Availed") {
                out.push_str(&format!("Do you wish to avail the cashless facility?: {}\n", v));
            }
            if let Some(v) = combined.get("Claim Type") {
                out.push_str(&format!("Claim Type: {}\n", v));
            }
        }
        out
    }
}
