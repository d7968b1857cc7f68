//! Token definitions and the token queue shared between lexer and parser.
//!
//! A [`Token`] is an immutable tagged value: the enum variant is the tag and
//! its payload is guaranteed to match it by construction. Payload accessors
//! are fallible ([`Option`]) rather than panicking so that callers decide how
//! to handle a mismatch.

use std::collections::VecDeque;
use std::fmt;

/// Discriminant for [`Token`] variants.
///
/// Used by [`TokenQueue::pop_expected`] and by the parser's dispatch, which
/// inspects the front token's kind without consuming it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Sentinel for an uninitialized token slot.
    None,
    /// Floating-point literal.
    LiteralFloat,
    /// The `let` keyword.
    KeywordLet,
    /// Identifier (constant name).
    Identifier,
    /// The `=` assignment operator.
    OperatorAssign,
    /// Unrecognized character reported by the lexer.
    LexerError,
}

/// A lexical token: tag plus optional payload.
///
/// Tokens are value types; they own their payload and hold no references to
/// other tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Sentinel for an uninitialized token slot.
    None,
    /// Float literal carrying its IEEE-754 single-precision value.
    LiteralFloat(f32),
    /// The `let` keyword.
    KeywordLet,
    /// Identifier carrying the exact scanned text.
    Identifier(String),
    /// The `=` assignment operator.
    OperatorAssign,
    /// Unrecognized character, carried for diagnostics.
    LexerError(char),
}

impl Token {
    /// Returns the discriminant of this token.
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::None => TokenKind::None,
            Token::LiteralFloat(_) => TokenKind::LiteralFloat,
            Token::KeywordLet => TokenKind::KeywordLet,
            Token::Identifier(_) => TokenKind::Identifier,
            Token::OperatorAssign => TokenKind::OperatorAssign,
            Token::LexerError(_) => TokenKind::LexerError,
        }
    }

    /// Returns the float payload, or `None` if this is not a float literal.
    pub fn float_value(&self) -> Option<f32> {
        match self {
            Token::LiteralFloat(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the identifier text, or `None` if this is not an identifier.
    pub fn identifier(&self) -> Option<&str> {
        match self {
            Token::Identifier(name) => Some(name),
            _ => None,
        }
    }

    /// Returns the offending character, or `None` if this is not a lexer
    /// error token.
    pub fn error_char(&self) -> Option<char> {
        match self {
            Token::LexerError(ch) => Some(*ch),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::None => write!(f, "uninitialized token"),
            Token::LiteralFloat(value) => write!(f, "float literal {}", value),
            Token::KeywordLet => write!(f, "'let'"),
            Token::Identifier(name) => write!(f, "identifier '{}'", name),
            Token::OperatorAssign => write!(f, "'='"),
            Token::LexerError(ch) => write!(f, "unrecognized character {:?}", ch),
        }
    }
}

/// FIFO buffer of tokens: filled once by [`crate::lexer::Lexer::tokenize`],
/// drained from the front by the parser.
///
/// Pushes always append at the tail and pops always remove from the head;
/// there is no re-fill after draining begins within one lexing/parsing pass.
#[derive(Debug, Default)]
pub struct TokenQueue {
    tokens: VecDeque<Token>,
}

impl TokenQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        TokenQueue::default()
    }

    /// Returns true when the queue holds no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns the number of tokens currently queued.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns the token at `pos` counted from the head.
    ///
    /// # Panics
    ///
    /// Panics when `pos` is out of range; an out-of-range access is a
    /// programmer error, not a recoverable condition.
    pub fn at(&self, pos: usize) -> &Token {
        &self.tokens[pos]
    }

    /// Returns the token at the head, if any.
    pub fn front(&self) -> Option<&Token> {
        self.tokens.front()
    }

    /// Returns the token at the tail, if any.
    pub fn back(&self) -> Option<&Token> {
        self.tokens.back()
    }

    /// Appends a token at the tail. Always succeeds.
    pub fn push(&mut self, token: Token) {
        self.tokens.push_back(token);
    }

    /// Removes the head token. Returns true iff a token was removed.
    pub fn pop(&mut self) -> bool {
        self.tokens.pop_front().is_some()
    }

    /// Removes the head token only when its kind matches `expected`.
    ///
    /// On a mismatch (or an empty queue) the queue is left untouched and
    /// false is returned.
    pub fn pop_expected(&mut self, expected: TokenKind) -> bool {
        match self.tokens.front() {
            Some(token) if token.kind() == expected => {
                self.tokens.pop_front();
                true
            }
            _ => false,
        }
    }
}
