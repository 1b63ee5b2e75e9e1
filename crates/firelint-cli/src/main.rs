//! firelint CLI tool.
//!
//! Usage:
//! ```bash
//! firelint rules firestore.rules
//! firelint indexes firestore.indexes.json
//! firelint schema users.schema.json
//! firelint project ./my-firebase-project
//! firelint report ./my-firebase-project --output report.md
//! firelint list-checks
//! ```
//!
//! The process exit code encodes the worst finding category:
//! 0 success, 1 security, 2 naming, 3 structure, 4 index.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

/// Static validator for Firestore security rules, indexes, and schemas
#[derive(Parser)]
#[command(name = "firelint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a security rules file
    Rules {
        /// Path to the rules file
        path: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Validate a composite indexes file
    Indexes {
        /// Path to the indexes JSON file
        path: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Validate a collection schema file
    Schema {
        /// Path to the schema JSON file
        path: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Validate every recognized artifact in a project directory
    Project {
        /// Project directory (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Validate a project and write a Markdown report
    Report {
        /// Project directory (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output path for the report
        #[arg(short, long, default_value = "validation_report.md")]
        output: PathBuf,
    },

    /// List available checks
    ListChecks,
}

/// Output format for validation results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let exit_code = match cli.command {
        Commands::Rules { path, format } => commands::check::rules(&path, format)?,
        Commands::Indexes { path, format } => commands::check::indexes(&path, format)?,
        Commands::Schema { path, format } => commands::check::schema(&path, format)?,
        Commands::Project { path } => commands::project::run(&path)?,
        Commands::Report { path, output } => commands::report::run(&path, &output)?,
        Commands::ListChecks => {
            commands::list_checks::run();
            0
        }
    };

    std::process::exit(exit_code);
}
