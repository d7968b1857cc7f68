//! Recursive descent parser for the floatlet language.
//!
//! Consumes a [`TokenQueue`] from the front with one token of lookahead and
//! appends an anonymous function wrapper per top-level expression to the
//! [`AbstractSyntaxTree`].
//!
//! # Grammar
//!
//! ```text
//! top        ::= primary
//! primary    ::= floatlit | letdecl
//! floatlit   ::= FLOAT_LITERAL
//! letdecl    ::= "let" IDENTIFIER "=" floatlit
//! ```
//!
//! # Error protocol
//!
//! Every production signals failure through its return channel
//! ([`ParseResult`]) and logs a diagnostic; there is no panic-based control
//! flow and no recovery. A failed multi-step production does not roll back
//! tokens already consumed by its earlier steps: the queue is left partially
//! drained, which is acceptable for a single-shot batch parse where the
//! first error is fatal for the whole input.

use crate::ast::{
    AbstractSyntaxTree, ConstantDeclarationExpr, ExprAst, FloatLiteralExpr, FunctionAst,
    PrototypeAst,
};
use crate::token::{TokenKind, TokenQueue};
use std::fmt;
use tracing::error;

/// Parser error type.
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parse error: {}", self.message)
    }
}

impl std::error::Error for ParseError {}

pub type ParseResult<T> = Result<T, ParseError>;

/// Recursive descent parser over a token queue.
///
/// Borrows the queue and the tree for the duration of one batch pass; the
/// only parser state is the queue's head.
pub struct Parser<'a> {
    tokens: &'a mut TokenQueue,
    ast: &'a mut AbstractSyntaxTree,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a mut TokenQueue, ast: &'a mut AbstractSyntaxTree) -> Self {
        Self { tokens, ast }
    }

    /// Parse top-level expressions until the queue is empty, appending each
    /// to the tree. Returns the number of top-level expressions processed.
    ///
    /// The first parse error is fatal: the loop logs it and stops, leaving
    /// the queue partially drained.
    // TODO stop counting an iteration whose production failed; the return
    // value currently tracks attempts, not nodes appended to the tree.
    pub fn parse(&mut self) -> usize {
        let mut count = 0;

        while !self.tokens.is_empty() {
            let produced = self.parse_top_level_expr();
            count += 1;

            match produced {
                Ok(function) => self.ast.push_top_level(function),
                Err(err) => {
                    error!("{}", err);
                    break;
                }
            }
        }

        count
    }

    /// Parse one primary expression and wrap it in an anonymous zero-argument
    /// function, so every top-level construct presents the same "callable
    /// returning a value" shape to the backend.
    pub fn parse_top_level_expr(&mut self) -> ParseResult<FunctionAst> {
        let body = self.parse_primary_expr()?;
        Ok(FunctionAst::new(PrototypeAst::anonymous(), body))
    }

    /// Dispatch on the kind of the front token without consuming it.
    ///
    /// On an unexpected token the queue is left untouched; recovery is the
    /// caller's responsibility.
    pub fn parse_primary_expr(&mut self) -> ParseResult<ExprAst> {
        match self.tokens.front().map(|token| token.kind()) {
            Some(TokenKind::LiteralFloat) => self
                .parse_float_literal_expr()
                .map(ExprAst::FloatLiteral),
            Some(TokenKind::KeywordLet) => self
                .parse_constant_declaration_expr()
                .map(ExprAst::ConstantDeclaration),
            Some(_) => {
                let found = self
                    .tokens
                    .front()
                    .map(|token| token.to_string())
                    .unwrap_or_default();
                self.error(format!("expected a primary expression, found {}", found))
            }
            None => self.error("expected a primary expression, found end of input"),
        }
    }

    /// floatlit ::= FLOAT_LITERAL
    ///
    /// Consumes exactly one token on success and none on failure.
    pub fn parse_float_literal_expr(&mut self) -> ParseResult<FloatLiteralExpr> {
        let value = match self.tokens.front().and_then(|token| token.float_value()) {
            Some(value) => value,
            None => return self.error("expected a float literal"),
        };

        self.tokens.pop();
        Ok(FloatLiteralExpr::new(value))
    }

    /// letdecl ::= "let" IDENTIFIER "=" floatlit
    ///
    /// A fixed consume sequence: each step that succeeds consumes its token,
    /// and a failing step aborts the production without rolling the earlier
    /// consumption back.
    pub fn parse_constant_declaration_expr(&mut self) -> ParseResult<ConstantDeclarationExpr> {
        if !self.tokens.pop_expected(TokenKind::KeywordLet) {
            return self.error("expected 'let' at the start of a constant declaration");
        }

        let name = match self
            .tokens
            .front()
            .and_then(|token| token.identifier())
            .map(str::to_string)
        {
            Some(name) => name,
            None => return self.error("expected an identifier after 'let'"),
        };
        self.tokens.pop();

        if !self.tokens.pop_expected(TokenKind::OperatorAssign) {
            return self.error(format!("expected '=' after 'let {}'", name));
        }

        let rhs = self.parse_float_literal_expr()?;

        Ok(ConstantDeclarationExpr::new(name, rhs))
    }

    /// Log a diagnostic and build the error result for a failed production.
    fn error<T>(&self, message: impl Into<String>) -> ParseResult<T> {
        let err = ParseError::new(message);
        error!("{}", err);
        Err(err)
    }
}
