//! Tokens produced by the scanner.

use quill_ast::TokenKind;
use std::fmt;

/// The decoded payload of a token.
///
/// Only Number tokens carry a value today; the tagged form keeps the
/// kind/payload association explicit and leaves room for other literal
/// kinds later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Literal {
    /// No decoded value. Every kind except Number.
    #[default]
    None,
    /// A decoded base-10 integer.
    Int(i64),
}

impl Literal {
    pub fn is_none(&self) -> bool {
        matches!(self, Literal::None)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::None => Ok(()),
            Literal::Int(value) => write!(f, "{value}"),
        }
    }
}

/// A scanned token. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The exact source substring this token was derived from.
    pub lexeme: String,
    /// The decoded value, present only for Number tokens.
    pub literal: Literal,
    /// Zero-based count of newline characters strictly before the
    /// token's first character.
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: String, line: usize) -> Self {
        Self {
            kind,
            lexeme,
            literal: Literal::None,
            line,
        }
    }

    pub fn with_literal(mut self, literal: Literal) -> Self {
        self.literal = literal;
        self
    }

    /// Whether this token carries a decoded value.
    pub fn has_literal(&self) -> bool {
        !self.literal.is_none()
    }
}
