//! Core types for issues, reporters and results.

use miette::{Diagnostic, SourceSpan};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::context::NamingContext;

/// Source code location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// File path as given to the analyzer.
    pub file: PathBuf,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed, in bytes).
    pub column: usize,
    /// Byte offset in file (for miette integration).
    pub offset: usize,
    /// Length of the span in bytes.
    pub length: usize,
}

impl Location {
    /// Creates a new location with explicit values.
    #[must_use]
    pub fn new(file: PathBuf, line: usize, column: usize) -> Self {
        Self {
            file,
            line,
            column,
            offset: 0,
            length: 0,
        }
    }

    /// Sets the byte offset and length for this location.
    #[must_use]
    pub fn with_span(mut self, offset: usize, length: usize) -> Self {
        self.offset = offset;
        self.length = length;
        self
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file.display(), self.line, self.column)
    }
}

/// A discouraged phrase found in a name, comment or file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Where the phrase was found.
    pub location: Location,
    /// The kind of name the phrase was found in.
    pub context: NamingContext,
    /// The matched synonym.
    pub found: String,
    /// Fully rendered message.
    pub message: String,
    /// References of the matched phrase, resolved to their long form.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub references: Vec<String>,
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}

/// Receives issues as the linter finds them.
///
/// Issues arrive in traversal order; reporters decide how to collect, sort
/// or print them. Any `FnMut(Issue)` closure is a reporter.
pub trait Reporter {
    /// Called once for each detected issue.
    fn report(&mut self, issue: Issue);
}

impl<F: FnMut(Issue)> Reporter for F {
    fn report(&mut self, issue: Issue) {
        self(issue);
    }
}

/// Renders an [`Issue`] as a miette diagnostic with a source snippet.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(consider_lint::phrase))]
pub struct IssueDiagnostic {
    message: String,
    #[help]
    help: Option<String>,
    #[label("{label_message}")]
    span: SourceSpan,
    label_message: String,
}

impl From<&Issue> for IssueDiagnostic {
    fn from(issue: &Issue) -> Self {
        let help = if issue.references.is_empty() {
            None
        } else {
            Some(format!("see {}", issue.references.join(", ")))
        };
        Self {
            message: issue.message.clone(),
            help,
            span: SourceSpan::from((issue.location.offset, issue.location.length)),
            label_message: format!("{} contains '{}'", issue.context, issue.found),
        }
    }
}

/// Result of running an analysis over several files.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LintResult {
    /// All issues found, file by file in traversal order.
    pub issues: Vec<Issue>,
    /// Number of files checked.
    pub files_checked: usize,
    /// Files that could not be parsed and were skipped.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parse_failures: Vec<PathBuf>,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if any issue was found.
    #[must_use]
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    /// Returns the distinct references of all issues, sorted.
    #[must_use]
    pub fn references(&self) -> Vec<&str> {
        self.issues
            .iter()
            .flat_map(|issue| issue.references.iter().map(String::as_str))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
