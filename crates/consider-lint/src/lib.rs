//! # consider-lint
//!
//! Flags discouraged words and phrases in Go identifiers, comments and file
//! names, and suggests alternatives.
//!
//! This is the facade crate: it re-exports the engine from
//! `consider-lint-core` and wires in the Go front-end.
//!
//! ## Programmatic Usage
//!
//! ```rust,ignore
//! use consider_lint::Settings;
//!
//! let result = consider_lint::analyzer()
//!     .path("./cmd")
//!     .settings(Settings::builtin()?)
//!     .build()?
//!     .analyze()?;
//!
//! for issue in &result.issues {
//!     println!("{issue}");
//! }
//! ```
//!
//! ## Single Sources
//!
//! ```
//! use consider_lint::{PhraseRule, Settings};
//! use std::path::Path;
//!
//! let settings = Settings::new().with_phrase(PhraseRule::new(["abcd"]));
//! let issues = consider_lint::lint_go_source(
//!     Path::new("safe.go"),
//!     "package p\n\nfunc abcdFunc() {}\n",
//!     &settings,
//! )?;
//!
//! assert_eq!(issues.len(), 1);
//! assert_eq!(
//!     issues[0].message,
//!     "Function name contains 'abcd', consider rephrasing to something else"
//! );
//! # Ok::<(), consider_lint::ParseError>(())
//! ```

#![forbid(unsafe_code)]

use std::path::Path;

// Re-export core types and traits
pub use consider_lint_core::*;

pub use consider_lint_go::GoParser;

/// Returns an analyzer builder using the Go front-end.
#[must_use]
pub fn analyzer() -> AnalyzerBuilder {
    Analyzer::builder().parser(GoParser::new())
}

/// Parses and lints one Go source, returning issues in traversal order.
///
/// # Errors
///
/// Returns an error if the source does not parse cleanly.
pub fn lint_go_source(
    path: &Path,
    source: &str,
    settings: &Settings,
) -> Result<Vec<Issue>, ParseError> {
    let file = GoParser::new().parse(path, source)?;
    Ok(Linter::new(settings).lint(&file, path))
}
