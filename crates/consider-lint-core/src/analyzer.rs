//! Analyzer orchestrating file discovery, parsing and linting.

use crate::linter::Linter;
use crate::parser::{ParseError, SourceParser};
use crate::settings::{Settings, SettingsError};
use crate::types::{Issue, LintResult};

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Exclude pattern for vendored dependencies.
pub const VENDOR_PATTERN: &str = "**/vendor/**";

/// Errors that can occur during analysis.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// IO error reading files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory walk error.
    #[error("Failed to walk directory: {0}")]
    Walk(#[from] ignore::Error),

    /// Error parsing a source file.
    #[error("Parse error in {path}: {source}")]
    Parse {
        /// Path to the file that failed to parse.
        path: PathBuf,
        /// Parser error.
        source: ParseError,
    },

    /// Glob pattern error.
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    /// Settings error.
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),

    /// No parser was configured.
    #[error("No source parser configured")]
    MissingParser,
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    paths: Vec<PathBuf>,
    settings: Option<Settings>,
    parser: Option<Box<dyn SourceParser>>,
    exclude_patterns: Vec<String>,
    respect_gitignore: bool,
    skip_vendor: bool,
    fail_on_parse_error: bool,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            respect_gitignore: true,
            skip_vendor: true,
            ..Self::default()
        }
    }

    /// Adds a file or directory to analyze.
    #[must_use]
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.paths.push(path.into());
        self
    }

    /// Adds multiple files or directories to analyze.
    #[must_use]
    pub fn paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.paths.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Sets the phrase settings. Defaults to the built-in settings.
    #[must_use]
    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Sets the language front-end.
    #[must_use]
    pub fn parser<P: SourceParser + 'static>(mut self, parser: P) -> Self {
        self.parser = Some(Box::new(parser));
        self
    }

    /// Adds an exclude glob pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Adds multiple exclude glob patterns.
    #[must_use]
    pub fn excludes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Sets whether `.gitignore` files are honored (default: true).
    #[must_use]
    pub fn respect_gitignore(mut self, respect: bool) -> Self {
        self.respect_gitignore = respect;
        self
    }

    /// Sets whether `vendor` directories are skipped (default: true).
    ///
    /// Applies in addition to any exclude pattern.
    #[must_use]
    pub fn skip_vendor(mut self, skip: bool) -> Self {
        self.skip_vendor = skip;
        self
    }

    /// Sets whether to fail on parse errors (default: false).
    #[must_use]
    pub fn fail_on_parse_error(mut self, fail: bool) -> Self {
        self.fail_on_parse_error = fail;
        self
    }

    /// Builds the analyzer.
    ///
    /// # Errors
    ///
    /// Returns an error if no parser was set, an exclude pattern is invalid
    /// or the built-in settings cannot be loaded.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let parser = self.parser.ok_or(AnalyzerError::MissingParser)?;

        let settings = match self.settings {
            Some(settings) => settings,
            None => Settings::builtin()?,
        };

        let paths = if self.paths.is_empty() {
            vec![PathBuf::from(".")]
        } else {
            self.paths
        };

        let mut exclude_patterns = self.exclude_patterns;
        if self.skip_vendor && !exclude_patterns.iter().any(|p| p == VENDOR_PATTERN) {
            exclude_patterns.push(VENDOR_PATTERN.to_string());
        }
        for pattern in &exclude_patterns {
            glob::Pattern::new(pattern)?;
        }

        Ok(Analyzer {
            paths,
            settings,
            parser,
            exclude_patterns,
            respect_gitignore: self.respect_gitignore,
            fail_on_parse_error: self.fail_on_parse_error,
        })
    }
}

/// The main analyzer that orchestrates lint execution.
///
/// Use [`Analyzer::builder()`] to construct an instance.
pub struct Analyzer {
    paths: Vec<PathBuf>,
    settings: Settings,
    parser: Box<dyn SourceParser>,
    exclude_patterns: Vec<String>,
    respect_gitignore: bool,
    fail_on_parse_error: bool,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the paths being analyzed.
    #[must_use]
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Returns the settings in use.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Analyzes all files and returns the results.
    ///
    /// Files are processed in sorted path order; issues within a file keep
    /// traversal order.
    ///
    /// # Errors
    ///
    /// Returns an error if file discovery or reading fails, or if a file
    /// fails to parse while `fail_on_parse_error` is set.
    pub fn analyze(&self) -> Result<LintResult, AnalyzerError> {
        info!("Starting analysis of {:?}", self.paths);

        let linter = Linter::new(&self.settings);
        let mut result = LintResult::new();
        let files = self.discover_files()?;

        info!("Found {} files to analyze", files.len());

        for file_path in &files {
            match self.analyze_file(&linter, file_path) {
                Ok(issues) => {
                    result.issues.extend(issues);
                    result.files_checked += 1;
                }
                Err(AnalyzerError::Parse { path, source }) => {
                    warn!("Failed to parse {}: {}", path.display(), source);
                    if self.fail_on_parse_error {
                        return Err(AnalyzerError::Parse { path, source });
                    }
                    result.parse_failures.push(path);
                }
                Err(e) => return Err(e),
            }
        }

        info!(
            "Analysis complete: {} issues in {} files",
            result.issues.len(),
            result.files_checked
        );

        Ok(result)
    }

    /// Analyzes a single file and returns its issues.
    fn analyze_file(&self, linter: &Linter<'_>, path: &Path) -> Result<Vec<Issue>, AnalyzerError> {
        debug!("Analyzing: {}", path.display());

        let content = std::fs::read_to_string(path)?;
        let file = self
            .parser
            .parse(path, &content)
            .map_err(|source| AnalyzerError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(linter.lint(&file, path))
    }

    /// Discovers all source files handled by the parser.
    fn discover_files(&self) -> Result<Vec<PathBuf>, AnalyzerError> {
        let mut files = Vec::new();

        for root in &self.paths {
            if root.is_file() {
                if !self.should_exclude(root) {
                    files.push(root.clone());
                }
                continue;
            }

            let mut builder = ignore::WalkBuilder::new(root);
            builder
                .git_ignore(self.respect_gitignore)
                .git_global(self.respect_gitignore)
                .git_exclude(self.respect_gitignore)
                .require_git(false);

            for entry in builder.build() {
                let entry = entry?;
                let path = entry.path();

                if !path.is_file() || !self.parser.handles(path) {
                    continue;
                }

                if self.should_exclude(path) {
                    debug!("Excluding: {}", path.display());
                    continue;
                }

                files.push(path.to_path_buf());
            }
        }

        files.sort();
        files.dedup();
        Ok(files)
    }

    /// Checks if a path should be excluded.
    fn should_exclude(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        for pattern in &self.exclude_patterns {
            if let Ok(glob_pattern) = glob::Pattern::new(pattern) {
                if glob_pattern.matches(&path_str) {
                    return true;
                }
            }

            // Also check as substring for patterns like "**/vendor/**"
            let normalized_pattern = pattern.replace("**", "");
            if normalized_pattern.len() > 1 && path_str.contains(&normalized_pattern) {
                return true;
            }
        }

        false
    }
}
