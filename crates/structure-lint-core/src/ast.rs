//! Closed tagged-union view of a module's top-level statements.
//!
//! The pipeline inspects a deliberately small slice of the syntax tree:
//! export statements and the shape of their declarations. Everything else
//! collapses to [`StatementKind::Other`]. Fields the parser could not
//! recover are explicit `Option`s; an absent name or initializer means the
//! statement contributes nothing to export collection, never a crash.

/// Position of a statement within its file (1-indexed line and column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Span of the start of a module.
    #[must_use]
    pub fn module_start() -> Self {
        Self::new(1, 1)
    }
}

/// A parsed module: the ordered list of top-level statements.
#[derive(Debug, Clone, Default)]
pub struct ModuleAst {
    /// Top-level statements in source order.
    pub statements: Vec<Statement>,
}

impl ModuleAst {
    /// Creates a module from its statements.
    #[must_use]
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }
}

/// One top-level statement.
#[derive(Debug, Clone)]
pub struct Statement {
    /// Where the statement starts.
    pub span: Span,
    /// What the statement is.
    pub kind: StatementKind,
}

impl Statement {
    /// Creates a statement.
    #[must_use]
    pub fn new(span: Span, kind: StatementKind) -> Self {
        Self { span, kind }
    }
}

/// Discriminated statement kind.
#[derive(Debug, Clone)]
pub enum StatementKind {
    /// `export default ...`
    ExportDefault,
    /// `export * from '...'`
    ExportAll,
    /// `export const/function/class ...`, `export { ... }`,
    /// `export type ...`
    ExportNamed(NamedExport),
    /// Anything the pipeline does not inspect.
    Other,
}

/// A named export statement.
#[derive(Debug, Clone, Default)]
pub struct NamedExport {
    /// True for `export type ...` / `export type { ... }`.
    pub is_type_only: bool,
    /// Module specifier of `export { X } from 'mod'`, when present.
    pub source: Option<String>,
    /// The exported declaration, when the export carries one.
    pub declaration: Option<Declaration>,
    /// Exported names of a bare `export { X, Y as Z }` clause.
    pub specifiers: Vec<String>,
}

/// An exported declaration.
#[derive(Debug, Clone)]
pub enum Declaration {
    /// `const`/`let`/`var` with one or more declarators.
    Variable(Vec<Declarator>),
    /// Function declaration; name absent for anonymous forms.
    Function(Option<String>),
    /// Class declaration; name absent for anonymous forms.
    Class(Option<String>),
}

/// One declarator of a variable declaration.
#[derive(Debug, Clone)]
pub struct Declarator {
    /// Bound identifier; absent for destructuring patterns.
    pub name: Option<String>,
    /// Shape of the initializer expression.
    pub init: Initializer,
}

/// Initializer shape, as far as the pipeline cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Initializer {
    /// `() => ...`
    ArrowFunction,
    /// `function () {}` expression.
    FunctionExpression,
    /// `class {}` expression.
    ClassExpression,
    /// A bare identifier or member expression (a re-exported value).
    Identifier,
    /// Any other expression (literal, call, object, ...).
    Other,
    /// No initializer at all.
    None,
}

impl Initializer {
    /// Human-readable label used in arrow-function diagnostics.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::ArrowFunction => "arrow function",
            Self::FunctionExpression => "function expression",
            Self::ClassExpression => "class",
            Self::Identifier => "re-exported variable",
            Self::Other | Self::None => "variable",
        }
    }
}
