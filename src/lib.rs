//! # Introduction
//!
//! `floatlet` is the front end of a minimal expression-oriented language:
//! floating-point literals and `let` constant bindings. It turns source text
//! into a validated, typed abstract syntax tree ready for a code generation
//! backend.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → TokenQueue → Parser → AbstractSyntaxTree → (backend)
//! ```
//!
//! 1. [`lexer`] — scans the character stream into a [`token::TokenQueue`].
//! 2. [`parser`] — recursive descent over the queue with one token of
//!    lookahead, appending an anonymous function wrapper per top-level
//!    expression.
//! 3. [`ast`] — the node model: closed enums with a runtime discriminant
//!    ([`ast::AstType`]) so backends and tests can narrow a node to its
//!    concrete variant without dynamic type inspection.
//!
//! The backend itself (code generation, JIT execution) and the command-line
//! entry point are external collaborators: they consume the finished
//! [`ast::AbstractSyntaxTree`] through its read accessors and are not part
//! of this crate.
//!
//! ## Language surface
//!
//! ```text
//! top        ::= primary
//! primary    ::= floatlit | letdecl
//! floatlit   ::= FLOAT_LITERAL
//! letdecl    ::= "let" IDENTIFIER "=" floatlit
//! ```
//!
//! Every top-level expression is wrapped in an anonymous zero-argument
//! function so that bare expressions and declarations present the same
//! "callable returning a value" shape to the backend.

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod token;
