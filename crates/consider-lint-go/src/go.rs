//! Go front-end using Tree-sitter.
//!
//! Maps a `tree-sitter-go` concrete syntax tree onto the engine's syntax
//! model. Only name-bearing structure is kept; every expression form other
//! than identifiers and function literals becomes a positioned leaf.

use std::path::Path;

use consider_lint_core::syntax::{
    AssignOp, Block, Decl, Expr, Field, File, FuncDecl, FuncType, Ident, Pos, Spec, Stmt,
    TypeExpr, TypeSpec,
};
use consider_lint_core::{file_name, ParseError, SourceParser};
use tree_sitter::{Language, Node, Parser};

use crate::comments;

/// Parses Go source files.
pub struct GoParser {
    language: Language,
}

impl GoParser {
    /// Creates a new Go parser.
    #[must_use]
    pub fn new() -> Self {
        Self {
            language: tree_sitter_go::LANGUAGE.into(),
        }
    }
}

impl Default for GoParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceParser for GoParser {
    fn language_id(&self) -> &'static str {
        "go"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &[".go"]
    }

    fn parse(&self, path: &Path, source: &str) -> Result<File, ParseError> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| ParseError::Language {
                message: e.to_string(),
            })?;

        let src = source.as_bytes();
        let tree = parser.parse(src, None).ok_or_else(|| ParseError::Language {
            message: "parser produced no tree".to_owned(),
        })?;
        let root = tree.root_node();

        if root.has_error() {
            let at = first_error(root).unwrap_or(root);
            let point = at.start_position();
            tracing::debug!(
                "Rejecting {}: syntax error at {}:{}",
                path.display(),
                point.row + 1,
                point.column + 1
            );
            return Err(ParseError::Syntax {
                line: point.row + 1,
                column: point.column + 1,
            });
        }

        let mut file = Mapper { src }.file(root);
        file.name = file_name(path);
        file.comments = comments::collect(root, src);
        Ok(file)
    }
}

pub(crate) fn text<'a>(node: &Node<'_>, src: &'a [u8]) -> &'a str {
    node.utf8_text(src).unwrap_or("")
}

pub(crate) fn pos(node: &Node<'_>) -> Pos {
    let point = node.start_position();
    Pos::new(node.start_byte(), point.row + 1, point.column + 1)
}

fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
    children
        .into_iter()
        .filter(Node::has_error)
        .find_map(first_error)
}

fn named_children<'t>(node: &Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    let children = node
        .named_children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .collect();
    children
}

/// Named children that are not attached to a field.
fn unfielded_children<'t>(node: &Node<'t>) -> Vec<Node<'t>> {
    let mut out = Vec::new();
    let mut cursor = node.walk();
    if !cursor.goto_first_child() {
        return out;
    }
    loop {
        let child = cursor.node();
        if child.is_named() && child.kind() != "comment" && cursor.field_name().is_none() {
            out.push(child);
        }
        if !cursor.goto_next_sibling() {
            return out;
        }
    }
}

fn field_children<'t>(node: &Node<'t>, field: &str) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    // Separators such as `,` share the field with the names they separate.
    let children = node
        .children_by_field_name(field, &mut cursor)
        .filter(Node::is_named)
        .collect();
    children
}

fn has_token(node: &Node<'_>, token: &str) -> bool {
    let mut cursor = node.walk();
    let found = node
        .children(&mut cursor)
        .any(|child| !child.is_named() && child.kind() == token);
    found
}

/// Builds syntax model nodes from one source buffer.
struct Mapper<'s> {
    src: &'s [u8],
}

impl Mapper<'_> {
    fn ident(&self, node: &Node<'_>) -> Ident {
        Ident::new(text(node, self.src), pos(node))
    }

    fn idents(&self, nodes: &[Node<'_>]) -> Vec<Ident> {
        nodes.iter().map(|node| self.ident(node)).collect()
    }

    fn file(&self, root: Node<'_>) -> File {
        let mut file = File {
            name: String::new(),
            package_pos: Pos::start(),
            package: None,
            comments: Vec::new(),
            decls: Vec::new(),
        };

        for node in named_children(&root) {
            match node.kind() {
                "package_clause" => {
                    file.package_pos = pos(&node);
                    file.package = named_children(&node)
                        .into_iter()
                        .find(|child| child.kind() == "package_identifier")
                        .map(|child| self.ident(&child));
                }
                _ => {
                    if let Some(decl) = self.decl(&node) {
                        file.decls.push(decl);
                    }
                }
            }
        }

        file
    }

    // ── Declarations ──

    fn decl(&self, node: &Node<'_>) -> Option<Decl> {
        let decl = match node.kind() {
            "import_declaration" => Decl::Gen(
                spec_nodes(node, "import_spec")
                    .iter()
                    .map(|spec| self.import_spec(spec))
                    .collect(),
            ),
            "const_declaration" => Decl::Gen(self.value_specs(node, "const_spec")),
            "var_declaration" => Decl::Gen(self.value_specs(node, "var_spec")),
            "type_declaration" => Decl::Gen(
                named_children(node)
                    .iter()
                    .filter(|spec| matches!(spec.kind(), "type_spec" | "type_alias"))
                    .map(|spec| Spec::Type(self.type_spec(spec)))
                    .collect(),
            ),
            "function_declaration" | "method_declaration" => Decl::Func(self.func_decl(node)),
            _ => return None,
        };
        Some(decl)
    }

    fn import_spec(&self, node: &Node<'_>) -> Spec {
        let path = node
            .child_by_field_name("path")
            .map(|p| text(&p, self.src).trim_matches(|c| c == '"' || c == '`').to_owned())
            .unwrap_or_default();
        Spec::Import {
            alias: node.child_by_field_name("name").map(|n| self.ident(&n)),
            path,
        }
    }

    fn value_specs(&self, node: &Node<'_>, kind: &str) -> Vec<Spec> {
        spec_nodes(node, kind)
            .iter()
            .map(|spec| Spec::Value(self.idents(&field_children(spec, "name"))))
            .collect()
    }

    fn type_spec(&self, node: &Node<'_>) -> TypeSpec {
        TypeSpec {
            name: node
                .child_by_field_name("name")
                .map_or_else(|| Ident::new("", pos(node)), |n| self.ident(&n)),
            type_params: node
                .child_by_field_name("type_parameters")
                .map(|list| self.type_params(&list))
                .unwrap_or_default(),
            ty: node
                .child_by_field_name("type")
                .map_or(TypeExpr::Other, |ty| self.type_expr(&ty)),
        }
    }

    fn func_decl(&self, node: &Node<'_>) -> FuncDecl {
        FuncDecl {
            recv: node
                .child_by_field_name("receiver")
                .map(|list| self.fields(&list))
                .unwrap_or_default(),
            name: node
                .child_by_field_name("name")
                .map_or_else(|| Ident::new("", pos(node)), |n| self.ident(&n)),
            ty: self.func_type(node),
            body: node.child_by_field_name("body").map(|b| self.block(&b)),
        }
    }

    // ── Types ──

    fn type_expr(&self, node: &Node<'_>) -> TypeExpr {
        match node.kind() {
            "struct_type" => {
                let mut fields = Vec::new();
                for list in named_children(node) {
                    for decl in named_children(&list) {
                        if decl.kind() == "field_declaration" {
                            fields.push(self.field(&decl));
                        }
                    }
                }
                TypeExpr::Struct(fields)
            }
            "interface_type" => TypeExpr::Interface(
                named_children(node)
                    .iter()
                    .filter(|elem| matches!(elem.kind(), "method_elem" | "method_spec"))
                    .map(|method| {
                        let names = method
                            .child_by_field_name("name")
                            .map(|n| vec![self.ident(&n)])
                            .unwrap_or_default();
                        Field::new(names, TypeExpr::Func(self.func_type(method)))
                    })
                    .collect(),
            ),
            "function_type" => TypeExpr::Func(self.func_type(node)),
            "parenthesized_type" | "type_constraint" | "type_elem" => {
                match named_children(node).as_slice() {
                    [inner] => self.type_expr(inner),
                    _ => TypeExpr::Other,
                }
            }
            _ => TypeExpr::Other,
        }
    }

    fn field(&self, node: &Node<'_>) -> Field {
        Field::new(
            self.idents(&field_children(node, "name")),
            node.child_by_field_name("type")
                .map_or(TypeExpr::Other, |ty| self.type_expr(&ty)),
        )
    }

    /// Signature of a function declaration, literal, type or method element.
    fn func_type(&self, node: &Node<'_>) -> FuncType {
        let results = match node.child_by_field_name("result") {
            Some(list) if list.kind() == "parameter_list" => self.fields(&list),
            Some(ty) => vec![Field::new(Vec::new(), self.type_expr(&ty))],
            None => Vec::new(),
        };
        FuncType {
            type_params: node
                .child_by_field_name("type_parameters")
                .map(|list| self.type_params(&list))
                .unwrap_or_default(),
            params: node
                .child_by_field_name("parameters")
                .map(|list| self.fields(&list))
                .unwrap_or_default(),
            results,
        }
    }

    fn fields(&self, list: &Node<'_>) -> Vec<Field> {
        named_children(list)
            .iter()
            .filter(|param| {
                matches!(
                    param.kind(),
                    "parameter_declaration" | "variadic_parameter_declaration"
                )
            })
            .map(|param| self.field(param))
            .collect()
    }

    fn type_params(&self, list: &Node<'_>) -> Vec<Field> {
        named_children(list)
            .iter()
            .filter(|param| {
                matches!(
                    param.kind(),
                    "type_parameter_declaration" | "parameter_declaration"
                )
            })
            .map(|param| self.field(param))
            .collect()
    }

    // ── Statements ──

    fn block(&self, node: &Node<'_>) -> Block {
        Block::new(self.stmts(&named_children(node)))
    }

    fn stmts(&self, nodes: &[Node<'_>]) -> Vec<Stmt> {
        let mut out = Vec::new();
        for node in nodes {
            if node.kind() == "statement_list" {
                out.extend(self.stmts(&named_children(node)));
            } else if let Some(stmt) = self.stmt(node) {
                out.push(stmt);
            }
        }
        out
    }

    fn opt_stmt(&self, node: &Node<'_>, field: &str) -> Option<Box<Stmt>> {
        node.child_by_field_name(field)
            .and_then(|child| self.stmt(&child))
            .map(Box::new)
    }

    fn stmt(&self, node: &Node<'_>) -> Option<Stmt> {
        let stmt = match node.kind() {
            "const_declaration" | "var_declaration" | "type_declaration" => {
                Stmt::Decl(self.decl(node)?)
            }
            "expression_statement" => Stmt::Expr(self.expr(named_children(node).first()?)),
            "send_statement" => Stmt::Send,
            "inc_statement" | "dec_statement" => Stmt::IncDec,
            "assignment_statement" => self.assign(node, AssignOp::Assign),
            "short_var_declaration" => self.assign(node, AssignOp::Define),
            "receive_statement" => self.receive(node),
            "labeled_statement" => {
                let label = node.child_by_field_name("label")?;
                let inner = unfielded_children(node)
                    .first()
                    .and_then(|inner| self.stmt(inner))
                    .unwrap_or(Stmt::Empty);
                Stmt::Labeled {
                    label: self.ident(&label),
                    stmt: Box::new(inner),
                }
            }
            "fallthrough_statement" | "break_statement" | "continue_statement"
            | "goto_statement" => Stmt::Branch,
            "return_statement" => Stmt::Return,
            "go_statement" => Stmt::Go,
            "defer_statement" => Stmt::Defer,
            "block" => Stmt::Block(self.block(node)),
            "if_statement" => Stmt::If {
                init: self.opt_stmt(node, "initializer"),
                body: node
                    .child_by_field_name("consequence")
                    .map(|b| self.block(&b))
                    .unwrap_or_default(),
                els: self.opt_stmt(node, "alternative"),
            },
            "for_statement" => self.for_stmt(node),
            "expression_switch_statement" => Stmt::Switch {
                init: self.opt_stmt(node, "initializer"),
                tag: node.child_by_field_name("value").map(|v| self.expr(&v)),
                body: Block::new(self.case_clauses(node, |m, case| {
                    m.exprs_of(case, "value")
                })),
            },
            "type_switch_statement" => {
                let x = Expr::TypeAssert(
                    node.child_by_field_name("value")
                        .map_or_else(|| pos(node), |v| pos(&v)),
                );
                let assign = match node.child_by_field_name("alias") {
                    Some(alias) => Stmt::Assign {
                        lhs: self.exprs(&alias),
                        op: AssignOp::Define,
                        rhs: vec![x],
                    },
                    None => Stmt::Expr(x),
                };
                Stmt::TypeSwitch {
                    init: self.opt_stmt(node, "initializer"),
                    assign: Box::new(assign),
                    body: Block::new(self.case_clauses(node, |m, case| {
                        field_children(case, "type")
                            .iter()
                            .map(|ty| m.case_type(ty))
                            .collect()
                    })),
                }
            }
            "select_statement" => Stmt::Select {
                body: Block::new(
                    named_children(node)
                        .iter()
                        .filter(|case| {
                            matches!(case.kind(), "communication_case" | "default_case")
                        })
                        .map(|case| Stmt::CommClause {
                            comm: self.opt_stmt(case, "communication"),
                            body: self.stmts(&unfielded_children(case)),
                        })
                        .collect(),
                ),
            },
            "empty_statement" => Stmt::Empty,
            _ => return None,
        };
        Some(stmt)
    }

    fn assign(&self, node: &Node<'_>, op: AssignOp) -> Stmt {
        Stmt::Assign {
            lhs: self.exprs_of(node, "left"),
            op,
            rhs: self.exprs_of(node, "right"),
        }
    }

    /// `v := <-ch` defines, `v = <-ch` assigns, a bare `<-ch` is an expression.
    fn receive(&self, node: &Node<'_>) -> Stmt {
        let right = node
            .child_by_field_name("right")
            .map_or_else(|| Expr::Unary(pos(node)), |r| self.expr(&r));
        match node.child_by_field_name("left") {
            Some(left) => Stmt::Assign {
                lhs: self.exprs(&left),
                op: if has_token(node, ":=") {
                    AssignOp::Define
                } else {
                    AssignOp::Assign
                },
                rhs: vec![right],
            },
            None => Stmt::Expr(right),
        }
    }

    fn for_stmt(&self, node: &Node<'_>) -> Stmt {
        let body = node
            .child_by_field_name("body")
            .map(|b| self.block(&b))
            .unwrap_or_default();
        let header = unfielded_children(node).into_iter().next();

        match header {
            Some(clause) if clause.kind() == "range_clause" => {
                let mut left = self.exprs_of(&clause, "left").into_iter();
                Stmt::Range {
                    key: left.next(),
                    value: left.next(),
                    x: clause
                        .child_by_field_name("right")
                        .map_or_else(|| Expr::Type(pos(&clause)), |r| self.expr(&r)),
                    body,
                }
            }
            Some(clause) if clause.kind() == "for_clause" => Stmt::For {
                init: self.opt_stmt(&clause, "initializer"),
                cond: clause.child_by_field_name("condition").map(|c| self.expr(&c)),
                post: self.opt_stmt(&clause, "update"),
                body,
            },
            cond => Stmt::For {
                init: None,
                cond: cond.map(|c| self.expr(&c)),
                post: None,
                body,
            },
        }
    }

    /// Case clauses of a switch; `list` maps a clause to its case list.
    fn case_clauses<F>(&self, node: &Node<'_>, list: F) -> Vec<Stmt>
    where
        F: Fn(&Self, &Node<'_>) -> Vec<Expr>,
    {
        named_children(node)
            .iter()
            .filter(|case| {
                matches!(
                    case.kind(),
                    "expression_case" | "type_case" | "default_case"
                )
            })
            .map(|case| Stmt::CaseClause {
                list: list(self, case),
                body: self.stmts(&unfielded_children(case)),
            })
            .collect()
    }

    // ── Expressions ──

    fn exprs_of(&self, node: &Node<'_>, field: &str) -> Vec<Expr> {
        node.child_by_field_name(field)
            .map(|list| self.exprs(&list))
            .unwrap_or_default()
    }

    fn exprs(&self, node: &Node<'_>) -> Vec<Expr> {
        if node.kind() == "expression_list" {
            named_children(node).iter().map(|e| self.expr(e)).collect()
        } else {
            vec![self.expr(node)]
        }
    }

    fn expr(&self, node: &Node<'_>) -> Expr {
        let at = pos(node);
        match node.kind() {
            "identifier" | "true" | "false" | "nil" | "iota" => Expr::Ident(self.ident(node)),
            "func_literal" => Expr::FuncLit {
                ty: self.func_type(node),
                body: node
                    .child_by_field_name("body")
                    .map(|b| self.block(&b))
                    .unwrap_or_default(),
            },
            "parenthesized_expression" => Expr::Paren(at),
            "call_expression" | "type_conversion_expression" => Expr::Call(at),
            "selector_expression" => Expr::Selector(at),
            "index_expression" | "type_instantiation_expression" => Expr::Index(at),
            "slice_expression" => Expr::Slice(at),
            "type_assertion_expression" => Expr::TypeAssert(at),
            "unary_expression" => {
                let star = node
                    .child_by_field_name("operator")
                    .is_some_and(|op| text(&op, self.src) == "*");
                if star {
                    Expr::Star(at)
                } else {
                    Expr::Unary(at)
                }
            }
            "binary_expression" => Expr::Binary(at),
            "composite_literal" => Expr::CompositeLit(at),
            "keyed_element" => Expr::KeyValue(at),
            "variadic_argument" => Expr::Ellipsis(at),
            "int_literal" | "float_literal" | "imaginary_literal" | "rune_literal"
            | "interpreted_string_literal" | "raw_string_literal" => Expr::BasicLit(at),
            _ => Expr::Type(at),
        }
    }

    /// A type in a type switch case; plain type names are identifiers.
    fn case_type(&self, node: &Node<'_>) -> Expr {
        match node.kind() {
            "type_identifier" => Expr::Ident(self.ident(node)),
            _ => self.expr(node),
        }
    }
}

/// Specs of a declaration, looking through a parenthesized spec list.
fn spec_nodes<'t>(node: &Node<'t>, kind: &str) -> Vec<Node<'t>> {
    let mut out = Vec::new();
    for child in named_children(node) {
        if child.kind() == kind {
            out.push(child);
        } else if child.kind().ends_with("_list") {
            out.extend(
                named_children(&child)
                    .into_iter()
                    .filter(|spec| spec.kind() == kind),
            );
        }
    }
    out
}
