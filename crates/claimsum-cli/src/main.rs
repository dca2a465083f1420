//! CLI application for insurance claim document summarization.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{extract, profile, summarize};

/// Claim summarizer - merge insurance claim documents into one report
#[derive(Parser)]
#[command(name = "claimsum")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize one or more claim documents into a single report
    Summarize(summarize::SummarizeArgs),

    /// Extract raw text from a single document
    Extract(extract::ExtractArgs),

    /// Manage extraction profiles
    Profile(profile::ProfileArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    // Execute command
    match cli.command {
        Commands::Summarize(args) => summarize::run(args),
        Commands::Extract(args) => extract::run(args),
        Commands::Profile(args) => profile::run(args),
    }
}
