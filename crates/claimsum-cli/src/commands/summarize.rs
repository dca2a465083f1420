//! Summarize command - merge claim documents into one report.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{debug, warn};

use claimsum_core::{
    CombinedSummary, DocumentKind, DocumentRecord, Questionnaire, RenderFormat, RendererRegistry,
    SummarySession,
};

use super::profile::resolve_profile;

/// Arguments for the summarize command.
#[derive(Args)]
pub struct SummarizeArgs {
    /// Input documents (PDF, DOCX, image, or plain text)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Claim document type
    #[arg(short = 't', long, value_enum, default_value = "vehicle")]
    doc_type: DocType,

    /// Extraction profile file (overrides profile lookup)
    #[arg(short, long)]
    profile: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Show per-document extraction statistics
    #[arg(long)]
    show_files: bool,

    /// Has the policy been assigned?
    #[arg(long, value_enum, default_value = "no")]
    policy_assigned: Answer,

    /// Has KYC verification been completed?
    #[arg(long, value_enum, default_value = "yes")]
    kyc_verified: Answer,

    /// Has an FIR been filed? (vehicle claims)
    #[arg(long, value_enum, default_value = "no")]
    fir_filed: Answer,

    /// Is the hospital a network hospital? (health claims)
    #[arg(long, value_enum, default_value = "no")]
    network_hospital: Answer,

    /// Avail the cashless facility? (health claims)
    #[arg(long, value_enum, default_value = "no")]
    cashless: Answer,
}

/// Claim document families with built-in profiles.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum DocType {
    /// Motor/vehicle insurance claim
    Vehicle,
    /// Health insurance claim
    Health,
    /// Life insurance claim
    Life,
}

impl From<DocType> for DocumentKind {
    fn from(doc_type: DocType) -> Self {
        match doc_type {
            DocType::Vehicle => DocumentKind::Vehicle,
            DocType::Health => DocumentKind::Health,
            DocType::Life => DocumentKind::Life,
        }
    }
}

/// Yes/no questionnaire answer.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    fn as_bool(self) -> bool {
        matches!(self, Answer::Yes)
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Sectioned text report
    Text,
    /// JSON with per-file records and merged fields
    Json,
    /// CSV of field/value pairs
    Csv,
    /// PDF document (requires a registered renderer)
    Pdf,
    /// DOCX document (requires a registered renderer)
    Docx,
    /// PPTX presentation (requires a registered renderer)
    Pptx,
}

/// Shape of the `--format json` output.
#[derive(Serialize)]
struct JsonReport<'a> {
    document_type: &'static str,
    generated_at: String,
    files: &'a [DocumentRecord],
    fields: CombinedSummary,
}

enum Rendered {
    Text(String),
    Binary(Vec<u8>),
}

pub fn run(args: SummarizeArgs) -> anyhow::Result<()> {
    let kind = DocumentKind::from(args.doc_type);
    let (profile, source) = resolve_profile(kind, args.profile.as_deref());
    debug!("Using {} profile from {}", kind.label(), source);

    if profile.is_empty() {
        warn!("Profile has no field patterns; nothing will be extracted");
    }

    let questionnaire = Questionnaire {
        policy_assigned: args.policy_assigned.as_bool(),
        kyc_verified: args.kyc_verified.as_bool(),
        fir_filed: args.fir_filed.as_bool(),
        network_hospital: args.network_hospital.as_bool(),
        cashless: args.cashless.as_bool(),
    };

    let mut session = SummarySession::new(kind, profile).with_questionnaire(questionnaire);

    let pb = ProgressBar::new(args.files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    for path in &args.files {
        if let Err(e) = session.ingest_file(path, None) {
            eprintln!("{} {}: {}", style("✗").red(), path.display(), e);
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    let failed = session.records().iter().filter(|r| r.error.is_some()).count();
    if failed > 0 {
        eprintln!(
            "{} {} of {} documents could not be read",
            style("⚠").yellow(),
            failed,
            session.records().len()
        );
    }

    if args.show_files {
        print_file_stats(session.records());
    }

    if !session.has_extracted_content() {
        println!(
            "{} No relevant information could be extracted from the given documents.",
            style("⚠").yellow()
        );
        return Ok(());
    }

    let rendered = match args.format {
        OutputFormat::Text => Rendered::Text(session.report()),
        OutputFormat::Json => Rendered::Text(format_json(&session)?),
        OutputFormat::Csv => Rendered::Text(format_csv(&session)?),
        OutputFormat::Pdf => Rendered::Binary(render_binary(&session, RenderFormat::Pdf)?),
        OutputFormat::Docx => Rendered::Binary(render_binary(&session, RenderFormat::Docx)?),
        OutputFormat::Pptx => Rendered::Binary(render_binary(&session, RenderFormat::Pptx)?),
    };

    match (&args.output, rendered) {
        (Some(path), Rendered::Text(content)) => {
            fs::write(path, content)?;
            println!("{} Report written to {}", style("✓").green(), path.display());
        }
        (Some(path), Rendered::Binary(bytes)) => {
            fs::write(path, bytes)?;
            println!("{} Report written to {}", style("✓").green(), path.display());
        }
        (None, Rendered::Text(content)) => println!("{}", content),
        (None, Rendered::Binary(bytes)) => std::io::stdout().write_all(&bytes)?,
    }

    Ok(())
}

fn format_json(session: &SummarySession) -> anyhow::Result<String> {
    let report = JsonReport {
        document_type: session.kind().label(),
        generated_at: chrono::Utc::now().to_rfc3339(),
        files: session.records(),
        fields: session.combined(),
    };

    Ok(serde_json::to_string_pretty(&report)?)
}

fn format_csv(session: &SummarySession) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(["field", "value"])?;

    let combined = session.combined();
    for (field, value) in combined.iter() {
        if value.trim().is_empty() {
            continue;
        }
        wtr.write_record([field.as_str(), value.as_str()])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

/// Binary formats need a renderer registered by the embedding host; the
/// standalone CLI ships none.
fn render_binary(session: &SummarySession, format: RenderFormat) -> anyhow::Result<Vec<u8>> {
    let registry = RendererRegistry::new();

    registry.render(format, &session.report()).map_err(|e| {
        anyhow::anyhow!("{}. Formats available without a renderer: text, json, csv.", e)
    })
}

fn print_file_stats(records: &[DocumentRecord]) {
    println!("{}", style("Documents:").bold());
    for record in records {
        match &record.error {
            Some(err) => println!("  {} {}: {}", style("✗").red(), record.source, err),
            None => println!(
                "  {} {}: {} chars, {} fields",
                style("✓").green(),
                record.source,
                record.chars,
                record.fields_extracted
            ),
        }
    }
    println!();
}
