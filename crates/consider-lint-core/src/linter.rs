//! Name traversal and phrase matching.
//!
//! The [`Linter`] walks a [`syntax::File`], attaches a [`NamingContext`] to
//! every string that holds a human-chosen name, and reports each configured
//! phrase found in it.
//!
//! # Suppression
//!
//! Not every occurrence of an identifier is a name choice. Re-assigning an
//! existing variable or reading it on the right-hand side of an assignment
//! would flag the same name again and again. Each traversal step therefore
//! receives a [`Suppression`] value:
//!
//! - declarations and function literals always start with [`Suppression::Emit`],
//! - the left side of `:=` is checked with [`Suppression::Emit`],
//! - the left side of any other assignment and every right side are checked
//!   with [`Suppression::Suppress`].
//!
//! The value is passed down by copy, so a nested scope can never leak its
//! state back to the caller.

use std::path::Path;

use crate::context::NamingContext;
use crate::format::{FormatModel, Formatter};
use crate::settings::{PhraseRule, Settings};
use crate::syntax::{
    AssignOp, Block, CommentGroup, Decl, Expr, Field, File, FuncDecl, FuncType, Ident, Pos, Spec,
    Stmt, TypeExpr, TypeSpec,
};
use crate::types::{Issue, Location, Reporter};

/// Whether matches found in the current scope are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suppression {
    /// Matches are reported.
    Emit,
    /// Matches are traversed but not reported.
    Suppress,
}

impl Suppression {
    fn is_suppressed(self) -> bool {
        self == Self::Suppress
    }
}

/// Checks syntax trees against a phrase table.
///
/// A linter holds only read-only state and can be shared between threads;
/// every call to [`Linter::check_file`] runs its own traversal.
#[derive(Debug, Clone)]
pub struct Linter<'s> {
    settings: &'s Settings,
    formatter: Formatter,
}

impl<'s> Linter<'s> {
    /// Creates a linter for the given settings.
    #[must_use]
    pub fn new(settings: &'s Settings) -> Self {
        Self {
            settings,
            formatter: Formatter::from_formatting(&settings.formatting),
        }
    }

    /// Returns the settings this linter checks against.
    #[must_use]
    pub fn settings(&self) -> &'s Settings {
        self.settings
    }

    /// Checks one file, forwarding every issue to `reporter` in traversal order.
    ///
    /// `path` is recorded in issue locations; the file name check uses the
    /// base name carried by the syntax tree.
    pub fn check_file<R: Reporter + ?Sized>(&self, file: &File, path: &Path, reporter: &mut R) {
        let mut walk = FileWalk {
            linter: self,
            path,
            reporter,
        };
        walk.check_file(file);
    }

    /// Checks one file and collects the issues.
    #[must_use]
    pub fn lint(&self, file: &File, path: &Path) -> Vec<Issue> {
        let mut issues = Vec::new();
        self.check_file(file, path, &mut |issue: Issue| issues.push(issue));
        issues
    }
}

/// Traversal state of a single file.
struct FileWalk<'l, 's, 'r, R: Reporter + ?Sized> {
    linter: &'l Linter<'s>,
    path: &'r Path,
    reporter: &'r mut R,
}

impl<R: Reporter + ?Sized> FileWalk<'_, '_, '_, R> {
    fn check_file(&mut self, file: &File) {
        let scope = Suppression::Emit;
        self.check_generic(
            &file.name,
            NamingContext::FileName,
            file.package_pos,
            0,
            scope,
        );
        if let Some(package) = &file.package {
            self.check_ident(package, NamingContext::PackageName, scope);
        }
        for group in &file.comments {
            self.check_comment_group(group, scope);
        }
        for decl in &file.decls {
            self.check_decl(decl);
        }
    }

    fn check_comment_group(&mut self, group: &CommentGroup, scope: Suppression) {
        self.check_generic(
            &group.text,
            NamingContext::Comment,
            group.pos,
            group.length,
            scope,
        );
    }

    /// Declarations are always checked fresh, whatever the enclosing scope.
    fn check_decl(&mut self, decl: &Decl) {
        let scope = Suppression::Emit;
        match decl {
            Decl::Gen(specs) => {
                for spec in specs {
                    self.check_spec(spec, scope);
                }
            }
            Decl::Func(func) => self.check_func_decl(func, scope),
        }
    }

    fn check_spec(&mut self, spec: &Spec, scope: Suppression) {
        match spec {
            Spec::Import { alias, .. } => {
                if let Some(alias) = alias {
                    self.check_ident(alias, NamingContext::PackageAlias, scope);
                }
            }
            Spec::Value(names) => self.check_idents(names, NamingContext::ValueName, scope),
            Spec::Type(type_spec) => self.check_type_spec(type_spec, scope),
        }
    }

    fn check_type_spec(&mut self, spec: &TypeSpec, scope: Suppression) {
        self.check_ident(&spec.name, NamingContext::TypeName, scope);
        self.check_fields(&spec.type_params, NamingContext::TypeParameterName, scope);
        self.check_type_expr(&spec.ty, scope);
    }

    fn check_type_expr(&mut self, ty: &TypeExpr, scope: Suppression) {
        match ty {
            TypeExpr::Struct(fields) => self.check_fields(fields, NamingContext::MemberName, scope),
            TypeExpr::Func(func) => self.check_func_type(func, scope),
            TypeExpr::Interface(methods) => {
                self.check_fields(methods, NamingContext::MethodName, scope);
            }
            TypeExpr::Other => {}
        }
    }

    fn check_func_type(&mut self, func: &FuncType, scope: Suppression) {
        self.check_fields(&func.type_params, NamingContext::TypeParameterName, scope);
        self.check_fields(&func.params, NamingContext::ParameterName, scope);
        self.check_fields(&func.results, NamingContext::ResultName, scope);
    }

    fn check_fields(&mut self, fields: &[Field], context: NamingContext, scope: Suppression) {
        for field in fields {
            self.check_idents(&field.names, context, scope);
            self.check_type_expr(&field.ty, scope);
        }
    }

    fn check_func_decl(&mut self, func: &FuncDecl, scope: Suppression) {
        self.check_ident(&func.name, NamingContext::FunctionName, scope);
        self.check_fields(&func.recv, NamingContext::FunctionReceiver, scope);
        self.check_func_type(&func.ty, scope);
        if let Some(body) = &func.body {
            self.check_block(body, scope);
        }
    }

    fn check_block(&mut self, block: &Block, scope: Suppression) {
        self.check_stmts(&block.stmts, scope);
    }

    fn check_stmts(&mut self, stmts: &[Stmt], scope: Suppression) {
        for stmt in stmts {
            self.check_stmt(stmt, scope);
        }
    }

    fn check_opt_stmt(&mut self, stmt: Option<&Stmt>, scope: Suppression) {
        if let Some(stmt) = stmt {
            self.check_stmt(stmt, scope);
        }
    }

    fn check_stmt(&mut self, stmt: &Stmt, scope: Suppression) {
        match stmt {
            Stmt::Decl(decl) => self.check_decl(decl),
            Stmt::Labeled { label, stmt } => {
                self.check_ident(label, NamingContext::Label, scope);
                self.check_stmt(stmt, scope);
            }
            Stmt::Expr(expr) => self.check_expr(expr, scope),
            Stmt::Assign { lhs, op, rhs } => {
                let lhs_scope = match op {
                    AssignOp::Define => Suppression::Emit,
                    AssignOp::Assign => Suppression::Suppress,
                };
                self.check_exprs(lhs, lhs_scope);
                self.check_exprs(rhs, Suppression::Suppress);
            }
            Stmt::Block(block) => self.check_block(block, scope),
            Stmt::If { init, body, els } => {
                self.check_opt_stmt(init.as_deref(), scope);
                self.check_block(body, scope);
                self.check_opt_stmt(els.as_deref(), scope);
            }
            Stmt::CaseClause { list, body } => {
                self.check_exprs(list, scope);
                self.check_stmts(body, scope);
            }
            Stmt::Switch { init, tag, body } => {
                self.check_opt_stmt(init.as_deref(), scope);
                if let Some(tag) = tag {
                    self.check_expr(tag, scope);
                }
                self.check_block(body, scope);
            }
            Stmt::TypeSwitch { init, assign, body } => {
                self.check_opt_stmt(init.as_deref(), scope);
                self.check_stmt(assign, scope);
                self.check_block(body, scope);
            }
            Stmt::CommClause { comm, body } => {
                self.check_opt_stmt(comm.as_deref(), scope);
                self.check_stmts(body, scope);
            }
            Stmt::Select { body } => self.check_block(body, scope),
            Stmt::For {
                init,
                cond,
                post,
                body,
            } => {
                self.check_opt_stmt(init.as_deref(), scope);
                if let Some(cond) = cond {
                    self.check_expr(cond, scope);
                }
                self.check_opt_stmt(post.as_deref(), scope);
                self.check_block(body, scope);
            }
            Stmt::Range {
                key,
                value,
                x,
                body,
            } => {
                for expr in [key.as_ref(), value.as_ref(), Some(x)].into_iter().flatten() {
                    self.check_expr(expr, scope);
                }
                self.check_block(body, scope);
            }
            Stmt::Send
            | Stmt::IncDec
            | Stmt::Go
            | Stmt::Defer
            | Stmt::Return
            | Stmt::Branch
            | Stmt::Empty => {}
        }
    }

    fn check_exprs(&mut self, exprs: &[Expr], scope: Suppression) {
        for expr in exprs {
            self.check_expr(expr, scope);
        }
    }

    fn check_expr(&mut self, expr: &Expr, scope: Suppression) {
        match expr {
            Expr::Ident(ident) => self.check_ident(ident, NamingContext::Identifier, scope),
            Expr::FuncLit { ty, body } => {
                let scope = Suppression::Emit;
                self.check_func_type(ty, scope);
                self.check_block(body, scope);
            }
            Expr::Ellipsis(_)
            | Expr::BasicLit(_)
            | Expr::CompositeLit(_)
            | Expr::Paren(_)
            | Expr::Selector(_)
            | Expr::Index(_)
            | Expr::Slice(_)
            | Expr::TypeAssert(_)
            | Expr::Call(_)
            | Expr::Star(_)
            | Expr::Unary(_)
            | Expr::Binary(_)
            | Expr::KeyValue(_)
            | Expr::Type(_) => {}
        }
    }

    fn check_idents(&mut self, idents: &[Ident], context: NamingContext, scope: Suppression) {
        for ident in idents {
            self.check_ident(ident, context, scope);
        }
    }

    fn check_ident(&mut self, ident: &Ident, context: NamingContext, scope: Suppression) {
        self.check_generic(&ident.name, context, ident.pos, ident.name.len(), scope);
    }

    fn check_generic(
        &mut self,
        text: &str,
        context: NamingContext,
        pos: Pos,
        length: usize,
        scope: Suppression,
    ) {
        let worded = crate::text::wordify(text);
        if worded.is_empty() {
            return;
        }

        for phrase in &self.linter.settings.phrases {
            for synonym in &phrase.synonyms {
                if !worded.contains(&format!(" {synonym} ")) {
                    continue;
                }
                if scope.is_suppressed() {
                    tracing::trace!(
                        "Suppressed '{synonym}' in {context} at {}:{}",
                        pos.line,
                        pos.column
                    );
                    continue;
                }
                let issue = self.make_issue(context, pos, length, synonym, phrase);
                self.reporter.report(issue);
            }
        }
    }

    fn make_issue(
        &self,
        context: NamingContext,
        pos: Pos,
        length: usize,
        synonym: &str,
        phrase: &PhraseRule,
    ) -> Issue {
        let settings = self.linter.settings;
        let references: Vec<String> = phrase
            .references
            .iter()
            .map(|short| settings.resolve(short).to_owned())
            .collect();

        let message = self.linter.formatter.format(&FormatModel {
            context,
            found: synonym,
            alternatives: &phrase.alternatives,
            short_references: &phrase.references,
            references: &references,
            print_references: settings.formatting.prints_references(),
        });

        Issue {
            location: Location::new(self.path.to_path_buf(), pos.line, pos.column)
                .with_span(pos.offset, length),
            context,
            found: synonym.to_owned(),
            message,
            references,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{AssignOp, Block, Expr, Field, FuncType, Ident, Pos, Stmt, TypeExpr};

    fn abcd_settings() -> Settings {
        Settings::new().with_phrase(PhraseRule::new(["abcd"]))
    }

    fn pos(line: usize, column: usize) -> Pos {
        Pos::new(0, line, column)
    }

    fn ident(name: &str, line: usize, column: usize) -> Ident {
        Ident::new(name, pos(line, column))
    }

    fn file(decls: Vec<Decl>) -> File {
        File {
            name: "safe.go".to_owned(),
            package_pos: pos(1, 1),
            package: Some(ident("testdata", 1, 9)),
            comments: Vec::new(),
            decls,
        }
    }

    fn func(name: &str, stmts: Vec<Stmt>) -> Decl {
        Decl::Func(FuncDecl {
            recv: Vec::new(),
            name: ident(name, 2, 6),
            ty: FuncType::default(),
            body: Some(Block::new(stmts)),
        })
    }

    fn lint_with(settings: &Settings, file: &File) -> Vec<Issue> {
        Linter::new(settings).lint(file, Path::new("testdata/safe.go"))
    }

    fn lint(file: &File) -> Vec<Issue> {
        lint_with(&abcd_settings(), file)
    }

    fn contexts(issues: &[Issue]) -> Vec<NamingContext> {
        issues.iter().map(|i| i.context).collect()
    }

    #[test]
    fn struct_type_reports_type_and_member() {
        let f = file(vec![Decl::Gen(vec![Spec::Type(TypeSpec {
            name: ident("AbcdThing", 3, 6),
            type_params: Vec::new(),
            ty: TypeExpr::Struct(vec![Field::new(
                vec![ident("MemberNamedAbcd", 4, 2)],
                TypeExpr::Other,
            )]),
        })])]);

        let issues = lint(&f);
        assert_eq!(
            contexts(&issues),
            vec![NamingContext::TypeName, NamingContext::MemberName]
        );
        assert_eq!((issues[0].location.line, issues[0].location.column), (3, 6));
        assert_eq!((issues[1].location.line, issues[1].location.column), (4, 2));
        assert!(issues
            .iter()
            .all(|i| i.message.ends_with("consider rephrasing to something else")));
        assert_eq!(issues[1].location.length, "MemberNamedAbcd".len());
    }

    #[test]
    fn file_package_and_comments_come_first() {
        let mut f = file(vec![func("abcdFunc", Vec::new())]);
        f.name = "abcdFile.go".to_owned();
        f.package = Some(ident("abcd", 1, 9));
        f.comments.push(CommentGroup {
            text: "about abcd".to_owned(),
            pos: pos(2, 1),
            length: 13,
        });

        let issues = lint(&f);
        assert_eq!(
            contexts(&issues),
            vec![
                NamingContext::FileName,
                NamingContext::PackageName,
                NamingContext::Comment,
                NamingContext::FunctionName,
            ]
        );
        assert_eq!(issues[0].location.line, 1);
    }

    #[test]
    fn defining_assignment_reports_but_reassignment_does_not() {
        let f = file(vec![func(
            "safe",
            vec![
                Stmt::Assign {
                    lhs: vec![Expr::ident("abcdVar", pos(3, 2))],
                    op: AssignOp::Define,
                    rhs: vec![Expr::BasicLit(pos(3, 13))],
                },
                Stmt::Assign {
                    lhs: vec![Expr::ident("abcdVar", pos(4, 2))],
                    op: AssignOp::Assign,
                    rhs: vec![Expr::BasicLit(pos(4, 12))],
                },
            ],
        )]);

        let issues = lint(&f);
        assert_eq!(contexts(&issues), vec![NamingContext::Identifier]);
        assert_eq!(issues[0].location.line, 3);
    }

    #[test]
    fn right_hand_side_identifiers_are_suppressed() {
        let f = file(vec![func(
            "safe",
            vec![Stmt::Assign {
                lhs: vec![Expr::ident("safeVar", pos(3, 2))],
                op: AssignOp::Define,
                rhs: vec![Expr::ident("abcdOther", pos(3, 13))],
            }],
        )]);

        assert!(lint(&f).is_empty());
    }

    #[test]
    fn function_literal_reopens_reporting_on_right_hand_side() {
        let literal = Expr::FuncLit {
            ty: FuncType {
                type_params: Vec::new(),
                params: vec![Field::new(vec![ident("abcdParam", 3, 17)], TypeExpr::Other)],
                results: Vec::new(),
            },
            body: Block::new(vec![
                Stmt::Assign {
                    lhs: vec![Expr::ident("abcdInner", pos(4, 3))],
                    op: AssignOp::Define,
                    rhs: vec![Expr::ident("abcdParam", pos(4, 16))],
                },
                Stmt::Expr(Expr::ident("abcdUse", pos(5, 3))),
            ]),
        };
        let f = file(vec![func(
            "safe",
            vec![
                Stmt::Assign {
                    lhs: vec![Expr::ident("abcdTarget", pos(3, 2))],
                    op: AssignOp::Assign,
                    rhs: vec![literal],
                },
                Stmt::Expr(Expr::ident("abcdAfter", pos(7, 2))),
            ],
        )]);

        let issues = lint(&f);
        assert_eq!(
            contexts(&issues),
            vec![
                NamingContext::ParameterName,
                NamingContext::Identifier,
                NamingContext::Identifier,
                NamingContext::Identifier,
            ]
        );
        let lines: Vec<usize> = issues.iter().map(|i| i.location.line).collect();
        assert_eq!(lines, vec![3, 4, 5, 7]);
    }

    #[test]
    fn nested_declaration_inside_suppressed_literal_is_checked() {
        // A type declared inside a closure on the right side of `=`.
        let literal = Expr::FuncLit {
            ty: FuncType::default(),
            body: Block::new(vec![Stmt::Decl(Decl::Gen(vec![Spec::Value(vec![ident(
                "abcdLocal",
                4,
                7,
            )])]))]),
        };
        let f = file(vec![func(
            "safe",
            vec![Stmt::Assign {
                lhs: vec![Expr::ident("x", pos(3, 2))],
                op: AssignOp::Assign,
                rhs: vec![literal],
            }],
        )]);

        assert_eq!(contexts(&lint(&f)), vec![NamingContext::ValueName]);
    }

    #[test]
    fn leaf_expressions_are_not_descended() {
        let f = file(vec![func(
            "safe",
            vec![
                Stmt::Expr(Expr::Call(pos(3, 2))),
                Stmt::Expr(Expr::Selector(pos(4, 2))),
                Stmt::Send,
                Stmt::Go,
                Stmt::Defer,
                Stmt::Return,
            ],
        )]);

        assert!(lint(&f).is_empty());
    }

    #[test]
    fn compound_statements_are_traversed() {
        let define = |name: &str, line: usize| Stmt::Assign {
            lhs: vec![Expr::ident(name, pos(line, 2))],
            op: AssignOp::Define,
            rhs: vec![Expr::BasicLit(pos(line, 20))],
        };
        let f = file(vec![func(
            "safe",
            vec![
                Stmt::Labeled {
                    label: ident("abcdLabel", 3, 1),
                    stmt: Box::new(Stmt::For {
                        init: Some(Box::new(define("abcdIndex", 3))),
                        cond: None,
                        post: Some(Box::new(Stmt::IncDec)),
                        body: Block::new(vec![Stmt::If {
                            init: Some(Box::new(define("abcdInit", 4))),
                            body: Block::new(vec![define("abcdThen", 5)]),
                            els: Some(Box::new(Stmt::Block(Block::new(vec![define(
                                "abcdElse", 6,
                            )])))),
                        }]),
                    }),
                },
                Stmt::Range {
                    key: Some(Expr::ident("abcdKey", pos(8, 6))),
                    value: Some(Expr::ident("safeValue", pos(8, 15))),
                    x: Expr::Call(pos(8, 30)),
                    body: Block::new(vec![Stmt::Select {
                        body: Block::new(vec![Stmt::CommClause {
                            comm: Some(Box::new(define("abcdReceived", 9))),
                            body: vec![define("abcdComm", 10)],
                        }]),
                    }]),
                },
                Stmt::TypeSwitch {
                    init: None,
                    assign: Box::new(define("abcdTyped", 12)),
                    body: Block::new(vec![Stmt::CaseClause {
                        list: vec![Expr::Type(pos(13, 7))],
                        body: vec![define("abcdCase", 14)],
                    }]),
                },
            ],
        )]);

        let issues = lint(&f);
        let found: Vec<(NamingContext, usize)> = issues
            .iter()
            .map(|i| (i.context, i.location.line))
            .collect();
        assert_eq!(
            found,
            vec![
                (NamingContext::Label, 3),
                (NamingContext::Identifier, 3),
                (NamingContext::Identifier, 4),
                (NamingContext::Identifier, 5),
                (NamingContext::Identifier, 6),
                (NamingContext::Identifier, 8),
                (NamingContext::Identifier, 9),
                (NamingContext::Identifier, 10),
                (NamingContext::Identifier, 12),
                (NamingContext::Identifier, 14),
            ]
        );
    }

    #[test]
    fn function_declaration_parts_in_order() {
        let f = file(vec![Decl::Func(FuncDecl {
            recv: vec![Field::new(vec![ident("abcdRecv", 5, 7)], TypeExpr::Other)],
            name: ident("abcdName", 5, 30),
            ty: FuncType {
                type_params: vec![Field::new(vec![ident("abcdT", 5, 39)], TypeExpr::Other)],
                params: vec![Field::new(vec![ident("abcdParam", 5, 50)], TypeExpr::Other)],
                results: vec![Field::new(vec![ident("abcdResult", 5, 70)], TypeExpr::Other)],
            },
            body: None,
        })]);

        assert_eq!(
            contexts(&lint(&f)),
            vec![
                NamingContext::FunctionName,
                NamingContext::FunctionReceiver,
                NamingContext::TypeParameterName,
                NamingContext::ParameterName,
                NamingContext::ResultName,
            ]
        );
    }

    #[test]
    fn interface_methods_and_signatures() {
        let method = |name: &str, param: &str, result: &str, line: usize| {
            Field::new(
                vec![ident(name, line, 2)],
                TypeExpr::Func(FuncType {
                    type_params: Vec::new(),
                    params: vec![Field::new(vec![ident(param, line, 20)], TypeExpr::Other)],
                    results: vec![Field::new(vec![ident(result, line, 40)], TypeExpr::Other)],
                }),
            )
        };
        let f = file(vec![Decl::Gen(vec![Spec::Type(TypeSpec {
            name: ident("SafeInterface", 3, 6),
            type_params: vec![Field::new(
                vec![ident("abcd", 3, 20)],
                TypeExpr::Interface(vec![method("abcdConstraint", "p", "r", 3)]),
            )],
            ty: TypeExpr::Interface(vec![
                method("AbcdFunc", "safeParam", "safeResult", 4),
                method("SafeFuncParam", "abcdParam", "safeResult", 5),
                method("SafeFuncResult", "safeParam", "abcdResult", 6),
            ]),
        })])]);

        assert_eq!(
            contexts(&lint(&f)),
            vec![
                NamingContext::TypeParameterName,
                NamingContext::MethodName,
                NamingContext::MethodName,
                NamingContext::ParameterName,
                NamingContext::ResultName,
            ]
        );
    }

    #[test]
    fn imports_and_values() {
        let f = file(vec![
            Decl::Gen(vec![
                Spec::Import {
                    alias: Some(ident("abcdFmt", 3, 8)),
                    path: "fmt".to_owned(),
                },
                Spec::Import {
                    alias: None,
                    path: "abcd/safe".to_owned(),
                },
            ]),
            Decl::Gen(vec![Spec::Value(vec![
                ident("safeValue", 5, 5),
                ident("abcdValue", 5, 16),
            ])]),
        ]);

        let issues = lint(&f);
        assert_eq!(
            contexts(&issues),
            vec![NamingContext::PackageAlias, NamingContext::ValueName]
        );
        assert_eq!(issues[1].location.column, 16);
    }

    #[test]
    fn multiple_rules_report_in_rule_then_synonym_order() {
        let settings = Settings::new()
            .with_phrase(PhraseRule::new(["beta", "alpha"]))
            .with_phrase(PhraseRule::new(["gamma"]));
        let mut f = file(Vec::new());
        f.comments.push(CommentGroup {
            text: "gamma alpha beta".to_owned(),
            pos: pos(2, 1),
            length: 19,
        });

        let found: Vec<String> = lint_with(&settings, &f)
            .into_iter()
            .map(|i| i.found)
            .collect();
        assert_eq!(found, vec!["beta", "alpha", "gamma"]);
    }

    #[test]
    fn multi_word_synonym_matches_across_lines() {
        let settings =
            Settings::new().with_phrase(PhraseRule::new(["a long phrase that may go across multiple lines"]));
        let mut f = file(Vec::new());
        f.comments.push(CommentGroup {
            text: "This is a long phrase that\nmay go across multiple lines.".to_owned(),
            pos: pos(2, 1),
            length: 60,
        });
        f.comments.push(CommentGroup {
            text: "a long phrase that may go across lines".to_owned(),
            pos: pos(5, 1),
            length: 41,
        });

        let issues = lint_with(&settings, &f);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].location.line, 2);
    }

    #[test]
    fn partial_words_do_not_match() {
        let f = file(vec![Decl::Gen(vec![Spec::Value(vec![ident(
            "abcdefValue",
            3,
            5,
        )])])]);
        assert!(lint(&f).is_empty());
    }

    #[test]
    fn references_resolve_in_messages() {
        let settings = Settings::new()
            .with_reference("k1", "https://example")
            .with_phrase(
                PhraseRule::new(["abcd"])
                    .alternatives(["def", "ghi"])
                    .references(["k1", "unknown"]),
            )
            .with_references_in_messages(true);
        let f = file(vec![func("abcdFunc", Vec::new())]);

        let issues = lint_with(&settings, &f);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].references, vec!["https://example", "unknown"]);
        assert_eq!(
            issues[0].message,
            "Function name contains 'abcd', consider rephrasing to one of [def, ghi] (see https://example, unknown)"
        );
    }

    #[test]
    fn broken_template_does_not_stop_traversal() {
        let mut settings = abcd_settings();
        settings.formatting.template = Some("{#if found}".to_owned());
        let f = file(vec![
            func("abcdOne", Vec::new()),
            func("abcdTwo", Vec::new()),
        ]);

        let issues = lint_with(&settings, &f);
        assert_eq!(issues.len(), 2);
        assert!(issues
            .iter()
            .all(|i| i.message.starts_with("failed to format message:")));
    }

    #[test]
    fn reporter_closure_receives_issues_in_order() {
        let settings = abcd_settings();
        let linter = Linter::new(&settings);
        let f = file(vec![func("abcdOne", Vec::new()), func("abcdTwo", Vec::new())]);

        let mut lines = Vec::new();
        linter.check_file(&f, Path::new("x.go"), &mut |issue: Issue| {
            lines.push(issue.message);
        });
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn linter_is_shareable_between_threads() {
        fn assert_sync<T: Send + Sync>() {}
        assert_sync::<Linter<'static>>();
    }
}
