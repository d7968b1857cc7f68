//! Lexer (tokenizer) for floatlet source text.
//!
//! Converts a character stream into a [`TokenQueue`] consumed by the parser.
//! Scanning is single pass with one character of lookahead and greedy
//! maximal munch per token class:
//! - identifiers/keywords: `[A-Za-z_][A-Za-z0-9_]*`, only `let` is reserved
//! - float literals: `[0-9.]+`, converted leniently (see [`Lexer`])
//! - `=` assignment operator
//!
//! Unrecognized characters are not fatal: each one becomes a
//! [`Token::LexerError`] plus a diagnostic, and scanning resumes at the next
//! character.

use crate::token::{Token, TokenQueue};
use tracing::error;

/// Lexer for floatlet source text.
///
/// Holds a character cursor plus line/column counters used only for
/// diagnostics; tokens themselves carry no location.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Create a new lexer over the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenize the entire input, appending every recognized token to `out`
    /// in order. Returns the number of tokens produced.
    pub fn tokenize(&mut self, out: &mut TokenQueue) -> usize {
        let mut count = 0;
        while self.tokenize_one(out) {
            count += 1;
        }
        count
    }

    /// Produce at most one token and append it to `out`.
    ///
    /// Returns false only at clean end of input; an unrecognized character
    /// still produces a token (a [`Token::LexerError`]) and returns true.
    pub fn tokenize_one(&mut self, out: &mut TokenQueue) -> bool {
        self.skip_whitespace();

        let ch = match self.peek() {
            Some(ch) => ch,
            None => return false,
        };

        let token = if ch.is_ascii_alphabetic() || ch == '_' {
            self.identifier_or_keyword()
        } else if ch.is_ascii_digit() || ch == '.' {
            self.float_literal()
        } else if ch == '=' {
            self.advance();
            Token::OperatorAssign
        } else {
            // The only class that both emits a token and signals an error.
            self.advance();
            error!(
                line = self.line,
                column = self.column,
                "unrecognized character {:?}",
                ch
            );
            Token::LexerError(ch)
        };

        out.push(token);
        true
    }

    /// Scan an identifier, classifying it as `let` or a plain identifier.
    ///
    /// Keyword recognition happens only after the full maximal identifier has
    /// been scanned; all other alphabetic sequences are identifiers
    /// regardless of case.
    fn identifier_or_keyword(&mut self) -> Token {
        let mut text = String::new();

        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        if text == "let" {
            Token::KeywordLet
        } else {
            Token::Identifier(text)
        }
    }

    /// Scan a float literal: accumulate `[0-9.]+` and convert leniently.
    ///
    /// The scan does not validate decimal-point count or position; the
    /// conversion parses the longest valid prefix and ignores the rest, the
    /// way `strtof` treats trailing garbage.
    fn float_literal(&mut self) -> Token {
        let mut text = String::new();

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() || ch == '.' {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        Token::LiteralFloat(parse_float_lenient(&text))
    }

    fn skip_whitespace(&mut self) {
        while let Some(' ' | '\t' | '\r' | '\n') = self.peek() {
            self.advance();
        }
    }

    /// Peek at the current character without consuming it.
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Advance to the next character.
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }
}

/// Convert text matching `[0-9.]+` to an `f32` with `strtof` semantics:
/// parse the longest prefix holding at most one decimal point, and fall back
/// to 0.0 when that prefix is not a number (e.g. a lone `.`).
fn parse_float_lenient(text: &str) -> f32 {
    let mut seen_dot = false;
    let mut end = 0;

    for (i, ch) in text.char_indices() {
        if ch == '.' {
            if seen_dot {
                break;
            }
            seen_dot = true;
        }
        end = i + ch.len_utf8();
    }

    text[..end].parse().unwrap_or(0.0)
}
