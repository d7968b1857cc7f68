//! AST node definitions for the floatlet front end.
//!
//! Nodes are immutable once built: every struct fixes its attributes at
//! construction and exposes read-only accessors. [`ExprAst`] is the closed
//! sum over all node variants; its [`AstType`] discriminant lets external
//! code (backend, tests) narrow a node to its concrete variant without
//! dynamic type inspection. The lexer and parser never branch on the
//! discriminant for behavior.
//!
//! Ownership is a strict forest: a [`FunctionAst`] exclusively owns its
//! prototype and body subtree, and the [`AbstractSyntaxTree`] exclusively
//! owns its top-level function list. No node is referenced from two places.

/// Runtime discriminant identifying an [`ExprAst`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AstType {
    FloatLiteral,
    Prototype,
    Function,
    ConstantDeclaration,
}

/// A float literal expression.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatLiteralExpr {
    value: f32,
}

impl FloatLiteralExpr {
    pub fn new(value: f32) -> Self {
        Self { value }
    }

    pub fn value(&self) -> f32 {
        self.value
    }
}

/// A function signature: name plus ordered parameter names.
///
/// An empty name denotes an anonymous function. Argument lists are modeled
/// but currently always empty; no grammar production fills them yet.
#[derive(Debug, Clone, PartialEq)]
pub struct PrototypeAst {
    name: String,
    args: Vec<String>,
}

impl PrototypeAst {
    pub fn new(name: String, args: Vec<String>) -> Self {
        Self { name, args }
    }

    /// Builds the prototype of an anonymous zero-argument function.
    pub fn anonymous() -> Self {
        Self::new(String::new(), Vec::new())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

/// A function: exactly one prototype and one body expression.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionAst {
    prototype: PrototypeAst,
    body: Box<ExprAst>,
}

impl FunctionAst {
    pub fn new(prototype: PrototypeAst, body: ExprAst) -> Self {
        Self {
            prototype,
            body: Box::new(body),
        }
    }

    pub fn prototype(&self) -> &PrototypeAst {
        &self.prototype
    }

    pub fn body(&self) -> &ExprAst {
        &self.body
    }
}

/// A `let` constant declaration: a name bound to a float literal.
///
/// Only float literals are legal initializers in this grammar version. The
/// name is exposed opaquely; uniqueness across declarations is enforced by
/// the backend's symbol table, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantDeclarationExpr {
    name: String,
    rhs: FloatLiteralExpr,
}

impl ConstantDeclarationExpr {
    pub fn new(name: String, rhs: FloatLiteralExpr) -> Self {
        Self { name, rhs }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rhs(&self) -> &FloatLiteralExpr {
        &self.rhs
    }
}

/// Any expression node.
///
/// Adding a variant here is a compile-time-checked operation: every `match`
/// over `ExprAst` is exhaustive.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprAst {
    FloatLiteral(FloatLiteralExpr),
    Prototype(PrototypeAst),
    Function(FunctionAst),
    ConstantDeclaration(ConstantDeclarationExpr),
}

impl ExprAst {
    /// Returns the discriminant of this node, fixed at construction.
    pub fn ast_type(&self) -> AstType {
        match self {
            ExprAst::FloatLiteral(_) => AstType::FloatLiteral,
            ExprAst::Prototype(_) => AstType::Prototype,
            ExprAst::Function(_) => AstType::Function,
            ExprAst::ConstantDeclaration(_) => AstType::ConstantDeclaration,
        }
    }
}

/// The tree handed to the backend: top-level functions in insertion order.
///
/// Created empty, populated incrementally by the parser (one append per
/// successfully parsed top-level expression), then traversed read-only. The
/// tree performs no validation of the nodes it receives; validation is the
/// parser's responsibility as producer. An arbitrary number of top-level
/// nodes is accepted here even though the current backend rejects more than
/// one; that limitation stays at the backend boundary.
#[derive(Debug, Default)]
pub struct AbstractSyntaxTree {
    top_level: Vec<FunctionAst>,
}

impl AbstractSyntaxTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        AbstractSyntaxTree::default()
    }

    /// Returns the top-level functions, first expression first.
    pub fn top_level(&self) -> &[FunctionAst] {
        &self.top_level
    }

    /// Appends a top-level function at the back.
    pub fn push_top_level(&mut self, function: FunctionAst) {
        self.top_level.push(function);
    }
}
