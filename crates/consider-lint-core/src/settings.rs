//! Phrase table and settings for consider-lint.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Source of the built-in settings.
pub const BUILTIN_SETTINGS: &str = include_str!("default_settings.toml");

/// Top-level settings: the phrase table plus reference and formatting options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Short reference keys mapped to their long form (usually a URL).
    #[serde(default)]
    pub references: BTreeMap<String, String>,

    /// Message formatting options.
    #[serde(default)]
    pub formatting: Formatting,

    /// Phrase rules, in the order their issues are reported.
    #[serde(default)]
    pub phrases: Vec<PhraseRule>,
}

impl Settings {
    /// Creates empty settings without any phrase.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the built-in settings shipped with consider-lint.
    ///
    /// They are reasonable for common use, yet they may change between
    /// versions: code that passes today may be flagged after an upgrade.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded settings do not parse, which is a
    /// packaging defect.
    pub fn builtin() -> Result<Self, SettingsError> {
        Self::parse(BUILTIN_SETTINGS)
    }

    /// Loads settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path).map_err(|e| SettingsError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses settings from a TOML string and validates them.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or a phrase has no synonyms.
    pub fn parse(content: &str) -> Result<Self, SettingsError> {
        let settings: Self = toml::from_str(content).map_err(|e| SettingsError::Parse {
            message: e.to_string(),
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Checks that every phrase rule has at least one synonym.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::EmptySynonyms`] for the first offending rule.
    pub fn validate(&self) -> Result<(), SettingsError> {
        match self.phrases.iter().position(|p| p.synonyms.is_empty()) {
            Some(index) => Err(SettingsError::EmptySynonyms { index }),
            None => Ok(()),
        }
    }

    /// Adds a phrase rule.
    #[must_use]
    pub fn with_phrase(mut self, phrase: PhraseRule) -> Self {
        self.phrases.push(phrase);
        self
    }

    /// Adds a reference mapping.
    #[must_use]
    pub fn with_reference(mut self, short: impl Into<String>, long: impl Into<String>) -> Self {
        self.references.insert(short.into(), long.into());
        self
    }

    /// Sets whether resolved references are appended to messages.
    #[must_use]
    pub fn with_references_in_messages(mut self, enabled: bool) -> Self {
        self.formatting.with_references = Some(enabled);
        self
    }

    /// Resolves a short reference key to its long form.
    ///
    /// Unknown keys, and keys mapped to an empty string, resolve to the key
    /// itself.
    #[must_use]
    pub fn resolve<'a>(&'a self, short: &'a str) -> &'a str {
        match self.references.get(short) {
            Some(long) if !long.is_empty() => long,
            _ => short,
        }
    }

    /// Serializes the settings back to TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String, SettingsError> {
        toml::to_string_pretty(self).map_err(|e| SettingsError::Serialize {
            message: e.to_string(),
        })
    }
}

/// Message formatting options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Formatting {
    /// Whether resolved references are embedded in messages. Unset means no.
    #[serde(default, alias = "withReferences", skip_serializing_if = "Option::is_none")]
    pub with_references: Option<bool>,

    /// Custom message template; see [`crate::format`] for the syntax.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

impl Formatting {
    /// Returns true if references are to be printed.
    #[must_use]
    pub fn prints_references(&self) -> bool {
        self.with_references.unwrap_or(false)
    }
}

/// A group of synonymous phrases with shared alternatives and references.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseRule {
    /// Expressions to detect; each may span several words.
    pub synonyms: Vec<String>,

    /// Suggested replacements, possibly none.
    #[serde(default)]
    pub alternatives: Vec<String>,

    /// Reference keys explaining why the phrase is flagged.
    #[serde(default)]
    pub references: Vec<String>,
}

impl PhraseRule {
    /// Creates a rule detecting the given synonyms.
    #[must_use]
    pub fn new<I, S>(synonyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            synonyms: synonyms.into_iter().map(Into::into).collect(),
            alternatives: Vec::new(),
            references: Vec::new(),
        }
    }

    /// Sets the suggested alternatives.
    #[must_use]
    pub fn alternatives<I, S>(mut self, alternatives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.alternatives = alternatives.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the reference keys.
    #[must_use]
    pub fn references<I, S>(mut self, references: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.references = references.into_iter().map(Into::into).collect();
        self
    }
}

/// Settings errors.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// IO error reading a settings file.
    #[error("Failed to read settings file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in a settings file.
    #[error("Failed to parse settings: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// A phrase rule without any synonym.
    #[error("Phrase at index {index} has no synonyms")]
    EmptySynonyms {
        /// Index of the rule in the phrase list.
        index: usize,
    },

    /// Settings could not be written as TOML.
    #[error("Failed to serialize settings: {message}")]
    Serialize {
        /// Serializer error message.
        message: String,
    },
}
