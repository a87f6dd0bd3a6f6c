//! Message formatting for detected phrases.
//!
//! Messages are rendered from a template. Tags are written in braces:
//!
//! | tag | renders |
//! |---|---|
//! | `{context}` | naming context, e.g. `Type name` |
//! | `{found}` | the matched synonym |
//! | `{alternatives\|join:", "}` | alternatives joined by the separator |
//! | `{references\|join:", "}` | resolved references joined by the separator |
//! | `{short_references\|join:", "}` | reference keys joined by the separator |
//! | `{print_references}` | `true` or `false` |
//! | `{#if FIELD}...{#else}...{/if}` | conditional; lists are true when non-empty |
//!
//! `{{` and `}}` produce literal braces. A broken template never aborts a run:
//! every message rendered through it describes the template error instead.

use crate::context::NamingContext;
use crate::settings::Formatting;

/// The template used when the settings do not provide one.
pub const DEFAULT_TEMPLATE: &str = concat!(
    "{context} contains '{found}', consider rephrasing to ",
    "{#if alternatives}one of [{alternatives|join:\", \"}]{#else}something else{/if}",
    "{#if print_references}{#if references} (see {references|join:\", \"}){/if}{/if}",
);

/// Values available to a template.
#[derive(Debug, Clone)]
pub struct FormatModel<'a> {
    /// Where the phrase was found.
    pub context: NamingContext,
    /// The matched synonym.
    pub found: &'a str,
    /// Suggested replacements.
    pub alternatives: &'a [String],
    /// Reference keys as configured on the phrase.
    pub short_references: &'a [String],
    /// References resolved to their long form.
    pub references: &'a [String],
    /// Whether references shall be part of the message.
    pub print_references: bool,
}

/// Renders messages from a compiled template.
#[derive(Debug, Clone)]
pub struct Formatter {
    template: Result<Vec<Node>, TemplateError>,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    /// Creates a formatter using [`DEFAULT_TEMPLATE`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            template: parse(DEFAULT_TEMPLATE),
        }
    }

    /// Compiles a custom template.
    ///
    /// # Errors
    ///
    /// Returns the first error found in the template.
    pub fn compile(template: &str) -> Result<Self, TemplateError> {
        parse(template).map(|nodes| Self {
            template: Ok(nodes),
        })
    }

    /// Creates a formatter from settings, keeping a broken custom template.
    ///
    /// A template that fails to compile is reported once here; afterwards each
    /// message rendered through it describes the failure.
    #[must_use]
    pub fn from_formatting(formatting: &Formatting) -> Self {
        let Some(template) = formatting.template.as_deref() else {
            return Self::new();
        };
        let template = parse(template);
        if let Err(e) = &template {
            tracing::warn!("Invalid message template: {e}");
        }
        Self { template }
    }

    /// Returns the compile error of the template, if any.
    #[must_use]
    pub fn error(&self) -> Option<&TemplateError> {
        self.template.as_ref().err()
    }

    /// Renders a message for the given model.
    #[must_use]
    pub fn format(&self, model: &FormatModel<'_>) -> String {
        match &self.template {
            Ok(nodes) => {
                let mut out = String::new();
                render(nodes, model, &mut out);
                out
            }
            Err(e) => format!("failed to format message: {e}"),
        }
    }
}

/// Errors in a message template.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    /// A tag opened with `{` is never closed.
    #[error("unclosed tag starting at offset {offset}")]
    UnclosedTag {
        /// Byte offset of the opening brace.
        offset: usize,
    },

    /// A single `}` outside of any tag.
    #[error("unmatched '}}' at offset {offset}")]
    StrayBrace {
        /// Byte offset of the brace.
        offset: usize,
    },

    /// A tag names a field that does not exist.
    #[error("unknown field '{name}'")]
    UnknownField {
        /// The field name as written.
        name: String,
    },

    /// A filter other than `join` was used.
    #[error("unknown filter '{filter}'")]
    UnknownFilter {
        /// The filter as written.
        filter: String,
    },

    /// The `join` separator is not a quoted string.
    #[error("join separator must be a quoted string in '{tag}'")]
    InvalidSeparator {
        /// The offending tag content.
        tag: String,
    },

    /// A list field rendered without `join`.
    #[error("field '{name}' is a list and needs '|join:\"...\"'")]
    ListWithoutJoin {
        /// The list field.
        name: String,
    },

    /// `join` applied to a field that is not a list.
    #[error("field '{name}' is not a list and cannot be joined")]
    JoinOnScalar {
        /// The scalar field.
        name: String,
    },

    /// `{#else}` or `{/if}` without a matching `{#if}`.
    #[error("unexpected '{{{tag}}}' at offset {offset}")]
    UnexpectedTag {
        /// The tag as written.
        tag: String,
        /// Byte offset of the tag.
        offset: usize,
    },

    /// An `{#if}` block without `{/if}`.
    #[error("'{{#if}}' at offset {offset} is never closed")]
    UnclosedBlock {
        /// Byte offset of the opening tag.
        offset: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Context,
    Found,
    Alternatives,
    References,
    ShortReferences,
    PrintReferences,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    Scalar,
    List,
    Flag,
}

impl Field {
    fn from_name(name: &str) -> Result<Self, TemplateError> {
        match name {
            "context" => Ok(Self::Context),
            "found" => Ok(Self::Found),
            "alternatives" => Ok(Self::Alternatives),
            "references" => Ok(Self::References),
            "short_references" => Ok(Self::ShortReferences),
            "print_references" => Ok(Self::PrintReferences),
            _ => Err(TemplateError::UnknownField {
                name: name.to_owned(),
            }),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Context => "context",
            Self::Found => "found",
            Self::Alternatives => "alternatives",
            Self::References => "references",
            Self::ShortReferences => "short_references",
            Self::PrintReferences => "print_references",
        }
    }

    fn kind(self) -> FieldKind {
        match self {
            Self::Context | Self::Found => FieldKind::Scalar,
            Self::Alternatives | Self::References | Self::ShortReferences => FieldKind::List,
            Self::PrintReferences => FieldKind::Flag,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    Text(String),
    Value(Field),
    Join {
        field: Field,
        separator: String,
    },
    If {
        field: Field,
        then: Vec<Node>,
        otherwise: Vec<Node>,
    },
}

/// How a sequence of nodes ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum End {
    Eof,
    Else(usize),
    EndIf(usize),
}

enum Tag {
    Value(Field),
    Join { field: Field, separator: String },
    If(Field),
    Else,
    EndIf,
}

fn parse(template: &str) -> Result<Vec<Node>, TemplateError> {
    let mut parser = Parser {
        src: template,
        pos: 0,
    };
    match parser.parse_nodes()? {
        (nodes, End::Eof) => Ok(nodes),
        (_, End::Else(offset)) => Err(TemplateError::UnexpectedTag {
            tag: "#else".to_owned(),
            offset,
        }),
        (_, End::EndIf(offset)) => Err(TemplateError::UnexpectedTag {
            tag: "/if".to_owned(),
            offset,
        }),
    }
}

struct Parser<'t> {
    src: &'t str,
    pos: usize,
}

impl Parser<'_> {
    fn next_char(&mut self) -> Option<char> {
        let c = self.src[self.pos..].chars().next()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.src[self.pos..].starts_with(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn parse_nodes(&mut self) -> Result<(Vec<Node>, End), TemplateError> {
        let mut nodes = Vec::new();
        let mut text = String::new();

        loop {
            let start = self.pos;
            let Some(c) = self.next_char() else {
                flush(&mut text, &mut nodes);
                return Ok((nodes, End::Eof));
            };

            match c {
                '{' if self.eat('{') => text.push('{'),
                '}' if self.eat('}') => text.push('}'),
                '}' => return Err(TemplateError::StrayBrace { offset: start }),
                '{' => {
                    flush(&mut text, &mut nodes);
                    match self.read_tag(start)? {
                        Tag::Value(field) => nodes.push(Node::Value(field)),
                        Tag::Join { field, separator } => {
                            nodes.push(Node::Join { field, separator });
                        }
                        Tag::If(field) => nodes.push(self.parse_if(field, start)?),
                        Tag::Else => return Ok((nodes, End::Else(start))),
                        Tag::EndIf => return Ok((nodes, End::EndIf(start))),
                    }
                }
                c => text.push(c),
            }
        }
    }

    fn parse_if(&mut self, field: Field, offset: usize) -> Result<Node, TemplateError> {
        let (then, end) = self.parse_nodes()?;
        let otherwise = match end {
            End::EndIf(_) => Vec::new(),
            End::Else(_) => match self.parse_nodes()? {
                (otherwise, End::EndIf(_)) => otherwise,
                (_, End::Else(offset)) => {
                    return Err(TemplateError::UnexpectedTag {
                        tag: "#else".to_owned(),
                        offset,
                    })
                }
                (_, End::Eof) => return Err(TemplateError::UnclosedBlock { offset }),
            },
            End::Eof => return Err(TemplateError::UnclosedBlock { offset }),
        };
        Ok(Node::If {
            field,
            then,
            otherwise,
        })
    }

    /// Reads the content of a tag whose `{` is at `start`.
    fn read_tag(&mut self, start: usize) -> Result<Tag, TemplateError> {
        let mut content = String::new();
        let mut in_quote = false;

        loop {
            match self.next_char() {
                None => return Err(TemplateError::UnclosedTag { offset: start }),
                Some('}') if !in_quote => break,
                Some('\\') if in_quote => {
                    content.push('\\');
                    match self.next_char() {
                        Some(c) => content.push(c),
                        None => return Err(TemplateError::UnclosedTag { offset: start }),
                    }
                }
                Some(c) => {
                    if c == '"' {
                        in_quote = !in_quote;
                    }
                    content.push(c);
                }
            }
        }

        parse_tag(content.trim())
    }
}

fn flush(text: &mut String, nodes: &mut Vec<Node>) {
    if !text.is_empty() {
        nodes.push(Node::Text(std::mem::take(text)));
    }
}

fn parse_tag(content: &str) -> Result<Tag, TemplateError> {
    if content == "#else" {
        return Ok(Tag::Else);
    }
    if content == "/if" {
        return Ok(Tag::EndIf);
    }
    if let Some(rest) = content.strip_prefix("#if") {
        return Field::from_name(rest.trim()).map(Tag::If);
    }

    if let Some((name, filter)) = content.split_once('|') {
        let field = Field::from_name(name.trim())?;
        let filter = filter.trim();
        let Some(separator) = filter.strip_prefix("join:") else {
            return Err(TemplateError::UnknownFilter {
                filter: filter.to_owned(),
            });
        };
        if field.kind() != FieldKind::List {
            return Err(TemplateError::JoinOnScalar {
                name: field.name().to_owned(),
            });
        }
        let separator = unquote(separator.trim()).ok_or_else(|| TemplateError::InvalidSeparator {
            tag: content.to_owned(),
        })?;
        return Ok(Tag::Join { field, separator });
    }

    let field = Field::from_name(content)?;
    if field.kind() == FieldKind::List {
        return Err(TemplateError::ListWithoutJoin {
            name: field.name().to_owned(),
        });
    }
    Ok(Tag::Value(field))
}

/// Strips surrounding double quotes and resolves `\"` and `\\` escapes.
fn unquote(s: &str) -> Option<String> {
    let inner = s.strip_prefix('"')?.strip_suffix('"')?;
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            out.push(chars.next()?);
        } else {
            out.push(c);
        }
    }
    Some(out)
}

fn render(nodes: &[Node], model: &FormatModel<'_>, out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Value(field) => match field {
                Field::Context => out.push_str(model.context.label()),
                Field::Found => out.push_str(model.found),
                Field::PrintReferences => {
                    out.push_str(if model.print_references { "true" } else { "false" });
                }
                // rejected by the parser
                Field::Alternatives | Field::References | Field::ShortReferences => {}
            },
            Node::Join { field, separator } => {
                out.push_str(&list(*field, model).join(separator));
            }
            Node::If {
                field,
                then,
                otherwise,
            } => {
                if is_set(*field, model) {
                    render(then, model, out);
                } else {
                    render(otherwise, model, out);
                }
            }
        }
    }
}

fn list<'a>(field: Field, model: &FormatModel<'a>) -> &'a [String] {
    match field {
        Field::Alternatives => model.alternatives,
        Field::References => model.references,
        Field::ShortReferences => model.short_references,
        Field::Context | Field::Found | Field::PrintReferences => &[],
    }
}

fn is_set(field: Field, model: &FormatModel<'_>) -> bool {
    match field {
        Field::Context => true,
        Field::Found => !model.found.is_empty(),
        Field::PrintReferences => model.print_references,
        Field::Alternatives | Field::References | Field::ShortReferences => {
            !list(field, model).is_empty()
        }
    }
}
