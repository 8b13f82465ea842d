//! quill_diagnostics: the error taxonomy shared across the toolchain.
//!
//! Each stage has its own error type: [`ScanError`] for the scanner,
//! [`ParseError`] for the parser, [`RuntimeError`] for the interpreter.
//! All lines reported here are zero-based, matching the token model.

use quill_ast::TokenKind;
use std::num::ParseIntError;
use thiserror::Error;

/// A failure during scanning. The scan aborts at the first error; the
/// tokens produced before it are still returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// A `:` that is not followed by `=`. Quill has no other use for `:`.
    #[error("`:` must be followed by `=` (line {line})")]
    IncompleteDeclaration { line: usize },

    /// A code point outside every lexical class.
    #[error("unrecognized character `{ch}` (line {line})")]
    UnrecognizedCharacter { ch: char, line: usize },

    /// A digit run that failed integer decoding. Defensive for ASCII
    /// input, but reachable with non-ASCII numerics or an out-of-range
    /// value.
    #[error("failed to convert `{lexeme}` to an integer (line {line})")]
    IntConversion {
        lexeme: String,
        line: usize,
        source: ParseIntError,
    },
}

impl ScanError {
    /// The zero-based line the scan failed on.
    pub fn line(&self) -> usize {
        match self {
            ScanError::IncompleteDeclaration { line }
            | ScanError::UnrecognizedCharacter { line, .. }
            | ScanError::IntConversion { line, .. } => *line,
        }
    }
}

/// A failure during parsing. The parser stops at the first error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The token stream did not match the grammar. `found` is
    /// [`TokenKind::EndOfFile`] when the stream ended early.
    #[error("expected {expected}, found {found} (line {line})")]
    UnexpectedToken {
        expected: &'static str,
        found: TokenKind,
        line: usize,
    },

    /// Parenthesized expressions nested past the recursion limit.
    #[error("expression nesting exceeds depth limit {limit} (line {line})")]
    NestingTooDeep { limit: usize, line: usize },
}

/// A failure while executing a program.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("undefined variable `{name}` (line {line})")]
    UndefinedVariable { name: String, line: usize },

    #[error("undefined function `{name}` (line {line})")]
    UndefinedFunction { name: String, line: usize },

    #[error("integer overflow in `+` (line {line})")]
    IntegerOverflow { line: usize },

    #[error("call depth exceeds limit {limit} (line {line})")]
    CallDepthExceeded { limit: usize, line: usize },

    /// The print sink failed. Runtime output goes through an injected
    /// writer, so this surfaces broken pipes instead of panicking.
    #[error("failed to write program output")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_error_display() {
        let err = ScanError::UnrecognizedCharacter { ch: '#', line: 3 };
        assert_eq!(err.to_string(), "unrecognized character `#` (line 3)");
        assert_eq!(err.line(), 3);

        let err = ScanError::IncompleteDeclaration { line: 0 };
        assert_eq!(err.to_string(), "`:` must be followed by `=` (line 0)");
    }

    #[test]
    fn int_conversion_preserves_cause() {
        let source = "99999999999999999999".parse::<i64>().unwrap_err();
        let err = ScanError::IntConversion {
            lexeme: "99999999999999999999".to_string(),
            line: 1,
            source,
        };
        assert!(err.to_string().contains("99999999999999999999"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn parse_error_reports_end_of_file() {
        let err = ParseError::UnexpectedToken {
            expected: "an expression",
            found: TokenKind::EndOfFile,
            line: 2,
        };
        assert_eq!(
            err.to_string(),
            "expected an expression, found EndOfFile (line 2)"
        );
    }
}
