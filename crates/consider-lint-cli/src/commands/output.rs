//! Shared output formatting for lint results.

use anyhow::Result;
use consider_lint::{Issue, IssueDiagnostic, LintResult};
use miette::{NamedSource, Report};
use std::io::Write;

use crate::OutputFormat;

/// Print lint results in the specified format.
pub fn print(result: &LintResult, format: OutputFormat, print_references: bool) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Text => write_text(&mut out, result, print_references)?,
        OutputFormat::Json => write_json(&mut out, result)?,
        OutputFormat::Pretty => write_pretty(&mut out, result, print_references)?,
    }
    out.flush()?;
    Ok(())
}

/// Writes one `file:line:column: message` line per issue.
///
/// Files that failed to parse come first, reported at `1:1`. The distinct
/// references of all issues follow the issues unless disabled.
pub fn write_text(out: &mut impl Write, result: &LintResult, print_references: bool) -> Result<()> {
    write_parse_failures(out, result)?;
    for issue in &result.issues {
        writeln!(out, "{issue}")?;
    }
    if print_references {
        write_references(out, result)?;
    }
    Ok(())
}

fn write_json(out: &mut impl Write, result: &LintResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    writeln!(out, "{json}")?;
    Ok(())
}

fn write_pretty(out: &mut impl Write, result: &LintResult, print_references: bool) -> Result<()> {
    write_parse_failures(out, result)?;
    for issue in &result.issues {
        match render_diagnostic(issue) {
            Some(report) => writeln!(out, "{report:?}")?,
            None => writeln!(out, "{issue}")?,
        }
    }
    if print_references {
        write_references(out, result)?;
    }
    writeln!(
        out,
        "Found {} issue(s) in {} file(s)",
        result.issues.len(),
        result.files_checked
    )?;
    Ok(())
}

/// Attaches the file content to the issue; `None` if the file is gone.
fn render_diagnostic(issue: &Issue) -> Option<Report> {
    let path = &issue.location.file;
    let content = std::fs::read_to_string(path).ok()?;
    let source = NamedSource::new(path.display().to_string(), content);
    Some(Report::new(IssueDiagnostic::from(issue)).with_source_code(source))
}

fn write_parse_failures(out: &mut impl Write, result: &LintResult) -> Result<()> {
    for path in &result.parse_failures {
        writeln!(out, "{}:1:1: failed to parse file", path.display())?;
    }
    Ok(())
}

fn write_references(out: &mut impl Write, result: &LintResult) -> Result<()> {
    let references = result.references();
    if references.is_empty() {
        return Ok(());
    }
    writeln!(out, "References:")?;
    for reference in references {
        writeln!(out, "{reference}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use consider_lint::{Location, NamingContext};
    use std::path::PathBuf;

    fn sample_result() -> LintResult {
        let mut result = LintResult::new();
        result.files_checked = 2;
        result.parse_failures.push(PathBuf::from("broken.go"));
        for (line, refs) in [(3, vec!["https://b"]), (7, vec!["https://a", "https://b"])] {
            result.issues.push(Issue {
                location: Location::new(PathBuf::from("main.go"), line, 6),
                context: NamingContext::TypeName,
                found: "abcd".to_owned(),
                message: "Type name contains 'abcd', consider rephrasing to something else"
                    .to_owned(),
                references: refs.into_iter().map(String::from).collect(),
            });
        }
        result
    }

    fn text(result: &LintResult, print_references: bool) -> String {
        let mut buf = Vec::new();
        write_text(&mut buf, result, print_references).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn text_lists_failures_issues_and_references() {
        assert_eq!(
            text(&sample_result(), true),
            "broken.go:1:1: failed to parse file\n\
             main.go:3:6: Type name contains 'abcd', consider rephrasing to something else\n\
             main.go:7:6: Type name contains 'abcd', consider rephrasing to something else\n\
             References:\n\
             https://a\n\
             https://b\n"
        );
    }

    #[test]
    fn text_without_references() {
        let output = text(&sample_result(), false);
        assert!(!output.contains("References:"));
        assert_eq!(output.lines().count(), 3);
    }

    #[test]
    fn text_of_clean_result_is_empty() {
        assert_eq!(text(&LintResult::new(), true), "");
    }

    #[test]
    fn json_contains_issues() {
        let mut buf = Vec::new();
        write_json(&mut buf, &sample_result()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["files_checked"], 2);
        assert_eq!(value["issues"].as_array().map(Vec::len), Some(2));
        assert_eq!(value["issues"][0]["found"], "abcd");
    }

    #[test]
    fn pretty_falls_back_to_text_line_without_source() {
        let mut buf = Vec::new();
        write_pretty(&mut buf, &sample_result(), false).unwrap();
        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("main.go:3:6: Type name contains 'abcd'"));
        assert!(output.ends_with("Found 2 issue(s) in 2 file(s)\n"));
    }
}
