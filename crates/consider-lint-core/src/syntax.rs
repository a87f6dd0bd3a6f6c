//! Syntax tree consumed by the [`Linter`](crate::Linter).
//!
//! The tree models one Go-shaped source file as a closed set of variants.
//! Front-ends (see `consider-lint-go`) build it from source text; only the
//! structure needed to reach name-bearing positions is kept. Expression forms
//! that cannot bind a name are leaves carrying just their position.

/// Position of a node in its source file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pos {
    /// Byte offset from the start of the file.
    pub offset: usize,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed, in bytes).
    pub column: usize,
}

impl Pos {
    /// Creates a position.
    #[must_use]
    pub fn new(offset: usize, line: usize, column: usize) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }

    /// Position of the first byte of a file.
    #[must_use]
    pub fn start() -> Self {
        Self::new(0, 1, 1)
    }
}

/// An identifier at a source position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    /// The identifier text.
    pub name: String,
    /// Position of its first byte.
    pub pos: Pos,
}

impl Ident {
    /// Creates an identifier.
    #[must_use]
    pub fn new(name: impl Into<String>, pos: Pos) -> Self {
        Self {
            name: name.into(),
            pos,
        }
    }
}

/// A group of adjacent comments with their marker-free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentGroup {
    /// Text without comment markers, lines joined by `\n`.
    pub text: String,
    /// Position of the first comment of the group.
    pub pos: Pos,
    /// Byte length of the group in the source.
    pub length: usize,
}

/// One parsed source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    /// Base name of the file, e.g. `main.go`.
    pub name: String,
    /// Anchor for file-level issues (the package clause).
    pub package_pos: Pos,
    /// The package name, if the file declares one.
    pub package: Option<Ident>,
    /// All comment groups in source order.
    pub comments: Vec<CommentGroup>,
    /// Top-level declarations in source order.
    pub decls: Vec<Decl>,
}

/// A declaration, top-level or inside a function body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decl {
    /// `import`, `const`, `var` or `type` declaration with its specs.
    Gen(Vec<Spec>),
    /// Function or method declaration.
    Func(FuncDecl),
}

/// A single spec of a grouped declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Spec {
    /// An import, optionally aliased.
    Import {
        /// Local alias, if given.
        alias: Option<Ident>,
        /// The imported path, without quotes.
        path: String,
    },
    /// Names bound by a `const` or `var` spec.
    Value(Vec<Ident>),
    /// A type declaration or alias.
    Type(TypeSpec),
}

/// A declared type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSpec {
    /// The declared name.
    pub name: Ident,
    /// Generic type parameters.
    pub type_params: Vec<Field>,
    /// The type's shape.
    pub ty: TypeExpr,
}

/// The shape of a type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// `struct { ... }` with its fields.
    Struct(Vec<Field>),
    /// `func(...) ...` signature.
    Func(FuncType),
    /// `interface { ... }` with its methods and embedded elements.
    Interface(Vec<Field>),
    /// Any other type form; it carries no declared name.
    Other,
}

/// A field, parameter, result, receiver, method or type parameter.
///
/// Unnamed entries (embedded fields, anonymous parameters) have no names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Declared names.
    pub names: Vec<Ident>,
    /// The field's type, or the method signature for interface methods.
    pub ty: TypeExpr,
}

impl Field {
    /// Creates a field.
    #[must_use]
    pub fn new(names: Vec<Ident>, ty: TypeExpr) -> Self {
        Self { names, ty }
    }
}

/// A function signature.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FuncType {
    /// Generic type parameters.
    pub type_params: Vec<Field>,
    /// Parameters.
    pub params: Vec<Field>,
    /// Results.
    pub results: Vec<Field>,
}

/// A function or method declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncDecl {
    /// Method receiver, empty for plain functions.
    pub recv: Vec<Field>,
    /// Function name.
    pub name: Ident,
    /// Signature.
    pub ty: FuncType,
    /// Body; absent for external declarations.
    pub body: Option<Block>,
}

/// A braced statement list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    /// Statements in source order.
    pub stmts: Vec<Stmt>,
}

impl Block {
    /// Creates a block.
    #[must_use]
    pub fn new(stmts: Vec<Stmt>) -> Self {
        Self { stmts }
    }
}

/// Assignment operator class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOp {
    /// `:=`, introducing new bindings.
    Define,
    /// `=`, `+=` and friends, changing existing bindings.
    Assign,
}

/// A statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// Declaration inside a body.
    Decl(Decl),
    /// `label: stmt`.
    Labeled {
        /// The label.
        label: Ident,
        /// The labeled statement.
        stmt: Box<Stmt>,
    },
    /// Expression used as statement.
    Expr(Expr),
    /// `ch <- value`.
    Send,
    /// `x++` / `x--`.
    IncDec,
    /// Assignment or short variable declaration.
    Assign {
        /// Left-hand side.
        lhs: Vec<Expr>,
        /// Operator class.
        op: AssignOp,
        /// Right-hand side.
        rhs: Vec<Expr>,
    },
    /// `go f()`.
    Go,
    /// `defer f()`.
    Defer,
    /// `return ...`.
    Return,
    /// `break`, `continue`, `goto`, `fallthrough`.
    Branch,
    /// Nested block.
    Block(Block),
    /// `if init; cond { body } else ...`; the condition only uses names.
    If {
        /// Init statement.
        init: Option<Box<Stmt>>,
        /// Then branch.
        body: Block,
        /// `else` block or `else if` statement.
        els: Option<Box<Stmt>>,
    },
    /// `case list: body` of a switch, or `default:` with an empty list.
    CaseClause {
        /// Case expressions or types.
        list: Vec<Expr>,
        /// Clause body.
        body: Vec<Stmt>,
    },
    /// Expression switch.
    Switch {
        /// Init statement.
        init: Option<Box<Stmt>>,
        /// Switch tag.
        tag: Option<Expr>,
        /// Block of case clauses.
        body: Block,
    },
    /// Type switch.
    TypeSwitch {
        /// Init statement.
        init: Option<Box<Stmt>>,
        /// `x := y.(type)` or `y.(type)`.
        assign: Box<Stmt>,
        /// Block of case clauses.
        body: Block,
    },
    /// `case comm: body` of a select, or `default:` without comm.
    CommClause {
        /// Send or receive statement.
        comm: Option<Box<Stmt>>,
        /// Clause body.
        body: Vec<Stmt>,
    },
    /// Select statement.
    Select {
        /// Block of comm clauses.
        body: Block,
    },
    /// Three-clause or condition-only `for`.
    For {
        /// Init statement.
        init: Option<Box<Stmt>>,
        /// Condition.
        cond: Option<Expr>,
        /// Post statement.
        post: Option<Box<Stmt>>,
        /// Loop body.
        body: Block,
    },
    /// `for key, value := range x`.
    Range {
        /// Key expression.
        key: Option<Expr>,
        /// Value expression.
        value: Option<Expr>,
        /// Ranged-over expression.
        x: Expr,
        /// Loop body.
        body: Block,
    },
    /// Empty statement.
    Empty,
}

/// An expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Bare identifier.
    Ident(Ident),
    /// Anonymous function.
    FuncLit {
        /// Signature.
        ty: FuncType,
        /// Body.
        body: Block,
    },
    /// `...` in parameter or array length position.
    Ellipsis(Pos),
    /// Literal number, string, rune.
    BasicLit(Pos),
    /// `T{...}`.
    CompositeLit(Pos),
    /// `(x)`.
    Paren(Pos),
    /// `x.sel`.
    Selector(Pos),
    /// `x[i]`.
    Index(Pos),
    /// `x[lo:hi]`.
    Slice(Pos),
    /// `x.(T)`.
    TypeAssert(Pos),
    /// `f(args)`.
    Call(Pos),
    /// `*x`.
    Star(Pos),
    /// `op x`.
    Unary(Pos),
    /// `x op y`.
    Binary(Pos),
    /// `key: value` in composite literals.
    KeyValue(Pos),
    /// Type used in expression position, e.g. in a type switch case.
    Type(Pos),
}

impl Expr {
    /// Creates an identifier expression.
    #[must_use]
    pub fn ident(name: impl Into<String>, pos: Pos) -> Self {
        Self::Ident(Ident::new(name, pos))
    }
}
