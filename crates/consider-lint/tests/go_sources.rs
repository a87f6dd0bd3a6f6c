//! Integration test: Go sources end-to-end through the Go front-end.
//!
//! Fixture files live under `tests/fixtures/`; every fixture is linted with
//! a single phrase `abcd` without alternatives.

use consider_lint::{Issue, PhraseRule, Settings};
use std::path::{Path, PathBuf};

fn fixture_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn abcd_settings() -> Settings {
    Settings::new().with_phrase(PhraseRule::new(["abcd"]))
}

fn lint_fixture(name: &str) -> Vec<Issue> {
    let path = fixture_root().join(name);
    let source = std::fs::read_to_string(&path).expect("fixture should exist");
    consider_lint::lint_go_source(&path, &source, &abcd_settings()).expect("fixture should parse")
}

/// Issues as `(line, column, context)` triples.
fn positions(issues: &[Issue]) -> Vec<(usize, usize, String)> {
    issues
        .iter()
        .map(|i| (i.location.line, i.location.column, i.context.to_string()))
        .collect()
}

fn expected(entries: &[(usize, usize, &str)]) -> Vec<(usize, usize, String)> {
    entries
        .iter()
        .map(|&(line, column, context)| (line, column, context.to_owned()))
        .collect()
}

// ── Declarations ──

#[test]
fn issue_free_source() {
    assert!(lint_fixture("clean.go").is_empty());
}

#[test]
fn issues_in_types() {
    let issues = lint_fixture("types.go");
    assert_eq!(
        positions(&issues),
        expected(&[
            (3, 6, "Type name"),
            (4, 2, "Member name"),
            (7, 6, "Type name"),
            (8, 32, "Parameter name"),
            (9, 52, "Result name"),
            (11, 6, "Type name"),
            (12, 2, "Method name"),
            (13, 16, "Parameter name"),
            (14, 36, "Result name"),
        ])
    );
    assert!(issues
        .iter()
        .all(|i| i.message.ends_with("contains 'abcd', consider rephrasing to something else")));
}

#[test]
fn issues_in_functions() {
    assert_eq!(
        positions(&lint_fixture("functions.go")),
        expected(&[
            (5, 7, "Function receiver"),
            (8, 36, "Function name"),
            (11, 50, "Parameter name"),
            (12, 18, "Parameter name"),
            (18, 52, "Result name"),
            (19, 21, "Result name"),
        ])
    );
}

#[test]
fn issues_in_type_parameters() {
    assert_eq!(
        positions(&lint_fixture("type_parameters.go")),
        expected(&[
            (3, 18, "Type parameter name"),
            (7, 44, "Method name"),
            (11, 16, "Type parameter name"),
        ])
    );
}

#[test]
fn issues_in_imports_and_values() {
    assert_eq!(
        positions(&lint_fixture("values.go")),
        expected(&[
            (4, 2, "Package alias"),
            (7, 7, "Value name"),
            (10, 11, "Value name"),
        ])
    );
}

// ── Statements ──

#[test]
fn only_defining_occurrences_are_reported() {
    assert_eq!(
        positions(&lint_fixture("suppression.go")),
        expected(&[
            (4, 2, "Identifier"),
            (6, 6, "Value name"),
            (7, 2, "Identifier"),
            (9, 6, "Identifier"),
        ])
    );
}

// ── Comments and file names ──

#[test]
fn issues_in_comments() {
    assert_eq!(
        positions(&lint_fixture("comments.go")),
        expected(&[
            (1, 1, "Comment"),
            (4, 1, "Comment"),
            (7, 2, "Comment"),
            (8, 9, "Comment"),
        ])
    );
}

#[test]
fn issue_in_file_name() {
    let issues = consider_lint::lint_go_source(
        Path::new("testdata/issueInAbcdFilename.go"),
        "package testdata\n",
        &abcd_settings(),
    )
    .unwrap();
    assert_eq!(positions(&issues), expected(&[(1, 1, "File name")]));
}

#[test]
fn issue_in_package_name() {
    let issues = consider_lint::lint_go_source(
        Path::new("abcd/doc.go"),
        "package abcd\n",
        &abcd_settings(),
    )
    .unwrap();
    assert_eq!(positions(&issues), expected(&[(1, 9, "Package name")]));
}

#[test]
fn unparsable_source_is_an_error() {
    let result = consider_lint::lint_go_source(
        Path::new("broken.go"),
        "package p\n\nfunc abcd( {\n",
        &abcd_settings(),
    );
    assert!(matches!(
        result,
        Err(consider_lint::ParseError::Syntax { .. })
    ));
}

// ── Messages ──

#[test]
fn builtin_message_lists_alternatives() {
    let issues = consider_lint::lint_go_source(
        Path::new("main.go"),
        "package main\n\nfunc masterNode() {}\n",
        &Settings::builtin().unwrap(),
    )
    .unwrap();
    assert_eq!(issues.len(), 1);
    insta::assert_snapshot!(
        issues[0].message,
        @"Function name contains 'master', consider rephrasing to one of [primary, leader, main]"
    );
    assert_eq!(issues[0].references.len(), 2);
}

#[test]
fn references_in_messages_when_enabled() {
    let settings = Settings::new()
        .with_reference("k1", "https://example")
        .with_phrase(
            PhraseRule::new(["abc"])
                .alternatives(["def", "ghi"])
                .references(["k1"]),
        )
        .with_references_in_messages(true);
    let issues = consider_lint::lint_go_source(
        Path::new("explicit.go"),
        "package explicit\n\n// AbcFunc is flagged.\nfunc AbcFunc() {}\n",
        &settings,
    )
    .unwrap();
    let messages: Vec<&str> = issues.iter().map(|i| i.message.as_str()).collect();
    insta::assert_snapshot!(messages.join("\n"), @r"
    Comment contains 'abc', consider rephrasing to one of [def, ghi] (see https://example)
    Function name contains 'abc', consider rephrasing to one of [def, ghi] (see https://example)
    ");
}

// ── Analyzer ──

#[test]
fn analyzer_walks_fixture_directory() {
    let result = consider_lint::analyzer()
        .path(fixture_root())
        .settings(abcd_settings())
        .build()
        .unwrap()
        .analyze()
        .unwrap();

    assert_eq!(result.files_checked, 7);
    assert!(result.parse_failures.is_empty());
    assert_eq!(result.issues.len(), 29);
    assert!(result.issues[0].location.file.ends_with("comments.go"));
    assert!(result.issues[28].location.file.ends_with("values.go"));
}

#[test]
fn analyzer_records_broken_files() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("broken.go"), "package p\n\nfunc {\n").unwrap();
    std::fs::write(dir.path().join("fine.go"), "package p\n\nvar abcdValue = 1\n").unwrap();

    let result = consider_lint::analyzer()
        .path(dir.path())
        .settings(abcd_settings())
        .build()
        .unwrap()
        .analyze()
        .unwrap();

    assert_eq!(result.files_checked, 1);
    assert_eq!(result.parse_failures.len(), 1);
    assert_eq!(result.issues.len(), 1);
    assert_eq!(result.issues[0].context.to_string(), "Value name");
}
