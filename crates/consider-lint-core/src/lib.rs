//! # consider-lint-core
//!
//! Core engine for detecting discouraged phrases in source code names.
//!
//! The engine is language-agnostic. A front-end turns source text into the
//! [`syntax`] model; the [`Linter`] walks that model, normalizes every name
//! with [`text::wordify`] and reports each configured phrase it finds.
//!
//! - [`Settings`] holds the phrase table, references and formatting options
//! - [`Formatter`] renders issue messages from a template
//! - [`Linter`] traverses one file and reports [`Issue`]s to a [`Reporter`]
//! - [`Analyzer`] discovers files, parses them with a [`SourceParser`] and
//!   collects a [`LintResult`]
//!
//! ## Example
//!
//! ```ignore
//! use consider_lint_core::{Analyzer, Settings};
//!
//! let result = Analyzer::builder()
//!     .path("./cmd")
//!     .settings(Settings::builtin()?)
//!     .parser(GoParser::new())
//!     .build()?
//!     .analyze()?;
//!
//! for issue in &result.issues {
//!     println!("{issue}");
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod context;
pub mod format;
mod linter;
mod parser;
mod settings;
pub mod syntax;
pub mod text;
mod types;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError, VENDOR_PATTERN};
pub use context::NamingContext;
pub use format::{FormatModel, Formatter, TemplateError, DEFAULT_TEMPLATE};
pub use linter::{Linter, Suppression};
pub use parser::{file_name, ParseError, SourceParser};
pub use settings::{Formatting, PhraseRule, Settings, SettingsError, BUILTIN_SETTINGS};
pub use types::{Issue, IssueDiagnostic, LintResult, Location, Reporter};
