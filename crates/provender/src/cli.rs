//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};

/// Provender - reproducible, integrity-checked vendoring of release artifacts
#[derive(Parser, Debug)]
#[command(name = "provender")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Filter and sort semantic versions
    Versions(VersionsArgs),

    /// Sync a release's assets into a local directory
    Sync(SyncArgs),
}

// Versions command

#[derive(Args, Debug)]
pub struct VersionsArgs {
    /// Version to consider; whitespace-separated tokens are split
    /// (repeatable)
    #[arg(long = "version", value_name = "VERSION", value_delimiter = ',')]
    pub versions: Vec<String>,

    /// Constraint term, e.g. '>=v1.0.0,<v2.0.0' (repeatable; all terms
    /// must hold)
    #[arg(short = 'c', long = "constraint", value_name = "CONSTRAINT", value_delimiter = ',')]
    pub constraints: Vec<String>,

    /// Include prerelease versions
    #[arg(long)]
    pub prerelease: bool,

    /// Include only prereleases carrying this identifier (repeatable)
    #[arg(long = "prerelease-identifier", value_name = "IDENTIFIER", value_delimiter = ',')]
    pub prerelease_identifiers: Vec<String>,
}

// Sync command

#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Repository slug, owner/repo
    #[arg(long, value_name = "SLUG")]
    pub slug: String,

    /// Release tag
    #[arg(long, value_name = "TAG")]
    pub tag: String,

    /// Destination directory
    #[arg(long, value_name = "DIR")]
    pub dst: Utf8PathBuf,

    /// Release API base URL
    #[arg(long, value_name = "URL", default_value = provender_sync::GITHUB_API_URL)]
    pub api_url: String,

    /// Root directory for the private staging directory
    #[arg(long, value_name = "DIR")]
    pub staging_root: Option<Utf8PathBuf>,

    /// Skip checksum validation of downloaded assets
    #[arg(long)]
    pub disable_checksum_validation: bool,
}
