//! Init command implementation.

use anyhow::{bail, Context, Result};
use consider_lint::BUILTIN_SETTINGS;
use std::path::{Path, PathBuf};

use crate::settings_resolver::IMPLICIT_SETTINGS_FILE as SETTINGS_FILE;

/// Runs the init command.
pub fn run(project_dir: &Path, force: bool) -> Result<()> {
    let path = write_settings(project_dir, force)?;

    println!("Created {}", path.display());
    println!("\nNext steps:");
    println!("  1. Edit {SETTINGS_FILE} to adapt the phrase table");
    println!("  2. Run: consider-lint check");

    Ok(())
}

fn write_settings(project_dir: &Path, force: bool) -> Result<PathBuf> {
    let path = project_dir.join(SETTINGS_FILE);

    if path.exists() && !force {
        bail!(
            "Settings file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    std::fs::write(&path, BUILTIN_SETTINGS)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(path)
}
