//! Check command implementation.

use anyhow::{Context, Result};
use consider_lint::{Analyzer, GoParser};
use std::path::PathBuf;

use crate::settings_resolver::SettingsSource;
use crate::OutputFormat;

/// Options of the check command.
pub struct CheckOptions {
    /// Output format.
    pub format: OutputFormat,
    /// Print the references block after the issues.
    pub print_references: bool,
    /// Exclude glob patterns.
    pub exclude: Vec<String>,
    /// Lint vendored code too.
    pub include_vendor: bool,
}

/// Runs the check command.
pub fn run(paths: &[PathBuf], options: &CheckOptions, source: &SettingsSource) -> Result<()> {
    let settings = source.load()?;

    let analyzer = Analyzer::builder()
        .paths(paths.iter().cloned())
        .settings(settings)
        .parser(GoParser::new())
        .excludes(options.exclude.iter().cloned())
        .skip_vendor(!options.include_vendor)
        .build()
        .context("Failed to build analyzer")?;

    tracing::info!(
        "Analyzing {:?} with {} phrases",
        analyzer.paths(),
        analyzer.settings().phrases.len()
    );

    let result = analyzer.analyze().context("Analysis failed")?;

    super::output::print(&result, options.format, options.print_references)?;

    if result.has_issues() {
        tracing::error!("{} issues were found", result.issues.len());
        std::process::exit(1);
    }

    Ok(())
}
