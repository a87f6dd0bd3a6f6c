//! consider-lint CLI tool.
//!
//! Usage:
//! ```bash
//! consider-lint check [OPTIONS] [PATHS]...
//! consider-lint list-phrases
//! consider-lint init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod settings_resolver;

/// Finds discouraged phrases in Go identifiers, comments and file names
#[derive(Parser)]
#[command(name = "consider-lint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to settings file
    #[arg(short, long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lint Go sources for discouraged phrases
    Check {
        /// Files or directories to analyze (default: current directory)
        #[arg(default_value = ".")]
        paths: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Do not print the references block after the issues
        #[arg(long)]
        no_references: bool,

        /// Exclude patterns (can be specified multiple times)
        #[arg(short, long)]
        exclude: Vec<String>,

        /// Also lint files below `vendor` directories
        #[arg(long)]
        include_vendor: bool,
    },

    /// List the effective phrase table
    ListPhrases,

    /// Write the built-in settings to a project settings file
    Init {
        /// Overwrite existing settings file
        #[arg(long)]
        force: bool,
    },
}

/// Output format for lint results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One `file:line:column: message` line per issue.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// Diagnostics with source snippets.
    Pretty,
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
        .with_writer(std::io::stderr)
        .init();

    let cwd = std::env::current_dir()?;
    let source = settings_resolver::resolve(&cwd, cli.settings.as_deref());

    match cli.command {
        Commands::Check {
            paths,
            format,
            no_references,
            exclude,
            include_vendor,
        } => {
            let options = commands::check::CheckOptions {
                format,
                print_references: !no_references,
                exclude,
                include_vendor,
            };
            commands::check::run(&paths, &options, &source)
        }
        Commands::ListPhrases => commands::list_phrases::run(&source),
        Commands::Init { force } => commands::init::run(&cwd, force),
    }
}
