//! # consider-lint-go
//!
//! Tree-sitter based Go front-end for consider-lint.
//!
//! [`GoParser`] implements [`consider_lint_core::SourceParser`]: it parses Go
//! source with `tree-sitter-go`, rejects files containing syntax errors, and
//! maps the concrete tree onto the engine's syntax model, comment groups
//! included.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod comments;
mod go;

pub use go::GoParser;
