//! Front-end trait turning source text into a [`syntax::File`](crate::syntax::File).
//!
//! `SourceParser` is the extension point for languages. The engine only sees
//! the syntax model; each front-end crate (see `consider-lint-go`) owns its
//! grammar and the mapping onto that model.

use std::path::Path;

use crate::syntax::File;

/// Trait for language-specific parsing.
pub trait SourceParser: Send + Sync {
    /// Language identifier (e.g., `"go"`).
    fn language_id(&self) -> &'static str;

    /// File extensions this parser handles (e.g., `&[".go"]`).
    fn extensions(&self) -> &'static [&'static str];

    /// Parses source code into a syntax tree.
    ///
    /// `path` provides the file name recorded in the tree.
    ///
    /// # Errors
    ///
    /// Returns an error if the source does not parse cleanly.
    fn parse(&self, path: &Path, source: &str) -> Result<File, ParseError>;

    /// Returns true if this parser handles the file's extension.
    fn handles(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| {
                self.extensions()
                    .iter()
                    .any(|known| known.strip_prefix('.') == Some(ext))
            })
    }
}

/// Errors produced by a [`SourceParser`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The source contains a syntax error.
    #[error("syntax error at {line}:{column}")]
    Syntax {
        /// Line of the first error (1-indexed).
        line: usize,
        /// Column of the first error (1-indexed).
        column: usize,
    },

    /// The grammar could not be loaded or run.
    #[error("parser unavailable: {message}")]
    Language {
        /// Underlying error message.
        message: String,
    },
}

/// Returns the base name of `path`, used as the file name in syntax trees.
#[must_use]
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
