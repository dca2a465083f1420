//! Profile command - manage extraction profiles.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use console::style;
use tracing::warn;

use claimsum_core::{DocumentKind, ExtractionProfile};

use super::summarize::DocType;

/// Arguments for the profile command.
#[derive(Args)]
pub struct ProfileArgs {
    #[command(subcommand)]
    command: ProfileCommand,
}

#[derive(Subcommand)]
enum ProfileCommand {
    /// Show the active profile for a document type
    Show {
        /// Claim document type
        #[arg(short = 't', long, value_enum, default_value = "vehicle")]
        doc_type: DocType,

        /// Profile file to show instead of the active one
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Check a profile file for consistency issues
    Validate {
        /// Profile file to check
        file: PathBuf,
    },

    /// Write a built-in profile to disk for customization
    Init(InitArgs),

    /// Show where profiles are looked up
    Path {
        /// Claim document type
        #[arg(short = 't', long, value_enum, default_value = "vehicle")]
        doc_type: DocType,
    },
}

#[derive(Args)]
struct InitArgs {
    /// Claim document type
    #[arg(short = 't', long, value_enum, default_value = "vehicle")]
    doc_type: DocType,

    /// Output path (default: the user profile directory)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Overwrite existing file
    #[arg(long)]
    force: bool,
}

pub fn run(args: ProfileArgs) -> anyhow::Result<()> {
    match args.command {
        ProfileCommand::Show { doc_type, file } => show_profile(doc_type.into(), file.as_deref()),
        ProfileCommand::Validate { file } => validate_profile(&file),
        ProfileCommand::Init(init_args) => init_profile(init_args),
        ProfileCommand::Path { doc_type } => show_path(doc_type.into()),
    }
}

/// Per-user profile location, e.g. `~/.config/claimsum/vehicle_insurance.json`.
pub fn user_profile_path(kind: DocumentKind) -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("claimsum")
        .join(format!("{}.json", kind.file_stem()))
}

/// Locate the profile for a document kind.
///
/// Lookup order: the explicit path, `configs/` in the working directory,
/// the user profile directory, then the profile built into the binary. A
/// file that exists but cannot be parsed ends the lookup with an empty
/// profile so a broken override never silently falls back to other rules.
pub fn resolve_profile(
    kind: DocumentKind,
    explicit: Option<&Path>,
) -> (ExtractionProfile, String) {
    if let Some(path) = explicit {
        return load_or_empty(path);
    }

    let local = Path::new("configs").join(format!("{}.json", kind.file_stem()));
    if local.exists() {
        return load_or_empty(&local);
    }

    let user = user_profile_path(kind);
    if user.exists() {
        return load_or_empty(&user);
    }

    (kind.builtin_profile(), "built-in".to_string())
}

fn load_or_empty(path: &Path) -> (ExtractionProfile, String) {
    match ExtractionProfile::from_file(path) {
        Ok(profile) => (profile, path.display().to_string()),
        Err(e) => {
            warn!("Failed to load profile from {}: {}", path.display(), e);
            (
                ExtractionProfile::default(),
                format!("{} (unreadable)", path.display()),
            )
        }
    }
}

fn show_profile(kind: DocumentKind, file: Option<&Path>) -> anyhow::Result<()> {
    let (profile, source) = match file {
        Some(path) => (
            ExtractionProfile::from_file(path)?,
            path.display().to_string(),
        ),
        None => resolve_profile(kind, None),
    };

    eprintln!("{} Profile source: {}", style("ℹ").blue(), source);
    println!("{}", serde_json::to_string_pretty(&profile)?);

    Ok(())
}

fn validate_profile(path: &Path) -> anyhow::Result<()> {
    let profile = ExtractionProfile::from_file(path)?;
    let issues = profile.validate();

    if issues.is_empty() {
        println!("{} {} is valid", style("✓").green(), path.display());
        return Ok(());
    }

    eprintln!("{}", style("Validation issues:").yellow());
    for issue in &issues {
        eprintln!("  - {}", issue);
    }

    anyhow::bail!("{} issue(s) found in {}", issues.len(), path.display());
}

fn init_profile(args: InitArgs) -> anyhow::Result<()> {
    let kind = DocumentKind::from(args.doc_type);
    let output_path = args.output.unwrap_or_else(|| user_profile_path(kind));

    if output_path.exists() && !args.force {
        anyhow::bail!(
            "Profile already exists at {}. Use --force to overwrite.",
            output_path.display()
        );
    }

    // Create parent directory if needed
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let profile = kind.builtin_profile();
    profile.save(&output_path)?;

    println!(
        "{} Created {} profile at {}",
        style("✓").green(),
        kind.label(),
        output_path.display()
    );

    Ok(())
}

fn show_path(kind: DocumentKind) -> anyhow::Result<()> {
    let local = Path::new("configs").join(format!("{}.json", kind.file_stem()));
    let user = user_profile_path(kind);

    println!("Profile lookup order for {}:", kind.label());
    println!("  1. --profile <file>");
    println!("  2. {}{}", local.display(), status_suffix(&local));
    println!("  3. {}{}", user.display(), status_suffix(&user));
    println!("  4. built-in");

    Ok(())
}

fn status_suffix(path: &Path) -> String {
    if path.exists() {
        format!(" {}", style("(exists)").green())
    } else {
        String::new()
    }
}
