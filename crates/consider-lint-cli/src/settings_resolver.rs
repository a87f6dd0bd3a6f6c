//! Locating and loading the settings for a run.
//!
//! An explicit `--settings` file wins. Otherwise `.consider-lint.toml` in the
//! working directory is used when present, and the built-in phrase table
//! when not. A settings file replaces the built-in table; it is not merged
//! into it.

use anyhow::{Context, Result};
use consider_lint::Settings;
use std::path::{Path, PathBuf};

/// Settings file picked up from the working directory, as written by `init`.
pub const IMPLICIT_SETTINGS_FILE: &str = ".consider-lint.toml";

/// Where the settings of a run come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsSource {
    /// Given with `--settings`; must exist.
    Explicit(PathBuf),
    /// Found in the working directory.
    Implicit(PathBuf),
    /// No file; the built-in phrase table.
    Builtin,
}

impl SettingsSource {
    /// Returns the settings file, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Implicit(p) => Some(p),
            Self::Builtin => None,
        }
    }

    /// Reads and validates the settings.
    ///
    /// A file that exists but does not parse is an error, never a silent
    /// fallback to the built-in table.
    pub fn load(&self) -> Result<Settings> {
        let settings = match self.path() {
            Some(path) => Settings::from_file(path)
                .with_context(|| format!("Failed to load settings: {}", path.display()))?,
            None => Settings::builtin().context("Failed to load built-in settings")?,
        };
        tracing::debug!(
            "Loaded {} phrases from {}",
            settings.phrases.len(),
            self.path()
                .map_or_else(|| "built-in settings".to_owned(), |p| p.display().to_string())
        );
        Ok(settings)
    }
}

/// Picks the settings source for a run in `work_dir`.
#[must_use]
pub fn resolve(work_dir: &Path, explicit: Option<&Path>) -> SettingsSource {
    if let Some(path) = explicit {
        return SettingsSource::Explicit(path.to_path_buf());
    }

    let implicit = work_dir.join(IMPLICIT_SETTINGS_FILE);
    if implicit.is_file() {
        return SettingsSource::Implicit(implicit);
    }

    SettingsSource::Builtin
}
