//! Extract command - dump raw text from a single document.

use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use claimsum_core::{extract_text, DocumentFormat};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input document (PDF, DOCX, image, or plain text)
    #[arg(required = true)]
    input: PathBuf,

    /// Maximum characters to print (0 = unlimited)
    #[arg(long, default_value = "1500")]
    max_chars: usize,
}

pub fn run(args: ExtractArgs) -> anyhow::Result<()> {
    let format = DocumentFormat::from_path(&args.input)
        .ok_or_else(|| anyhow::anyhow!("Unsupported file type: {}", args.input.display()))?;

    info!("Detected format: {:?}", format);

    let text = extract_text(&args.input, None)?;
    let total = text.chars().count();

    if args.max_chars > 0 && total > args.max_chars {
        let truncated: String = text.chars().take(args.max_chars).collect();
        println!("{}...", truncated);
        eprintln!(
            "{} Output truncated to {} of {} characters",
            style("ℹ").blue(),
            args.max_chars,
            total
        );
    } else {
        println!("{}", text);
    }

    Ok(())
}
