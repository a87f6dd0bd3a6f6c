//! Comment grouping.
//!
//! Go attaches meaning to comment groups rather than single comments:
//! adjacent comments without code or a blank line between them form one
//! group, and a comment that trails code on the same line only absorbs
//! further comments on that very line.

use consider_lint_core::syntax::{CommentGroup, Pos};
use tree_sitter::Node;

use crate::go::{pos, text};

/// A group under construction.
struct Pending<'s> {
    start: Pos,
    start_byte: usize,
    end_byte: usize,
    trailing: bool,
    comments: Vec<&'s str>,
}

impl Pending<'_> {
    fn finish(self) -> CommentGroup {
        CommentGroup {
            text: group_text(&self.comments),
            pos: self.start,
            length: self.end_byte - self.start_byte,
        }
    }
}

/// Collects all comments below `root` into groups, in source order.
pub(crate) fn collect(root: Node<'_>, src: &[u8]) -> Vec<CommentGroup> {
    let mut nodes = Vec::new();
    find_comments(root, &mut nodes);

    let mut groups = Vec::new();
    let mut pending: Option<Pending<'_>> = None;

    for node in nodes {
        let start_byte = node.start_byte();
        let joins = pending
            .as_ref()
            .is_some_and(|group| joins_group(group, start_byte, src));

        match pending.as_mut() {
            Some(group) if joins => {
                group.end_byte = node.end_byte();
                group.comments.push(text(&node, src));
            }
            _ => {
                if let Some(done) = pending.take() {
                    groups.push(done.finish());
                }
                pending = Some(Pending {
                    start: pos(&node),
                    start_byte,
                    end_byte: node.end_byte(),
                    trailing: follows_code(start_byte, src),
                    comments: vec![text(&node, src)],
                });
            }
        }
    }

    if let Some(done) = pending {
        groups.push(done.finish());
    }
    groups
}

fn find_comments<'t>(node: Node<'t>, out: &mut Vec<Node<'t>>) {
    if node.kind() == "comment" {
        out.push(node);
        return;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        find_comments(child, out);
    }
}

/// A comment joins the group if only whitespace separates them, with no
/// line break after a trailing group and no blank line otherwise.
fn joins_group(group: &Pending<'_>, start_byte: usize, src: &[u8]) -> bool {
    let Some(gap) = src.get(group.end_byte..start_byte) else {
        return false;
    };
    if !gap.iter().all(u8::is_ascii_whitespace) {
        return false;
    }
    let newlines = gap.iter().filter(|&&b| b == b'\n').count();
    let allowed = if group.trailing { 0 } else { 1 };
    newlines <= allowed
}

/// Returns true if code precedes `start_byte` on its line.
fn follows_code(start_byte: usize, src: &[u8]) -> bool {
    let before = &src[..start_byte.min(src.len())];
    let line_start = before
        .iter()
        .rposition(|&b| b == b'\n')
        .map_or(0, |i| i + 1);
    !before[line_start..].iter().all(u8::is_ascii_whitespace)
}

/// Builds the marker-free text of a group.
///
/// Line comments lose `//` and one following space; compiler directives such
/// as `//go:generate` are dropped. Block comments lose `/*` and `*/`. Lines
/// are right-trimmed, leading and trailing blank lines removed, and runs of
/// blank lines collapsed to one.
pub(crate) fn group_text(comments: &[&str]) -> String {
    let mut lines: Vec<&str> = Vec::new();

    for comment in comments {
        let body = if let Some(rest) = comment.strip_prefix("//") {
            match rest.strip_prefix(' ') {
                Some(stripped) => stripped,
                None if is_directive(rest) => continue,
                None => rest,
            }
        } else if let Some(rest) = comment.strip_prefix("/*") {
            rest.strip_suffix("*/").unwrap_or(rest)
        } else {
            comment
        };
        lines.extend(body.split('\n').map(str::trim_end));
    }

    let mut out: Vec<&str> = Vec::with_capacity(lines.len());
    for line in lines {
        let blank = line.is_empty();
        if blank && out.last().map_or(true, |last| last.is_empty()) {
            continue;
        }
        out.push(line);
    }
    while out.last().is_some_and(|last| last.is_empty()) {
        out.pop();
    }
    out.join("\n")
}

/// Matches `//line `, `//extern `, `//export ` and `//[a-z0-9]+:[a-z0-9]`.
fn is_directive(rest: &str) -> bool {
    if ["line ", "extern ", "export "]
        .iter()
        .any(|prefix| rest.starts_with(prefix))
    {
        return true;
    }

    let Some(colon) = rest.find(':') else {
        return false;
    };
    let is_word = |b: u8| b.is_ascii_lowercase() || b.is_ascii_digit();
    let (name, after) = rest.split_at(colon);
    !name.is_empty()
        && name.bytes().all(is_word)
        && after.as_bytes().get(1).is_some_and(|&b| is_word(b))
}
