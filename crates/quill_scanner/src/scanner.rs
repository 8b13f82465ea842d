//! The quill scanner.
//!
//! A single forward cursor over pre-decoded code points, with at most one
//! code point of lookahead. Letter and digit runs use maximal munch, so a
//! keyword is only ever recognized as a complete letter run. Scanning is
//! a pure function of its input: the first error aborts the scan, and the
//! tokens produced before it are returned alongside the error.

use crate::token::{Literal, Token};
use quill_ast::TokenKind;
use quill_diagnostics::ScanError;

/// What a scan call produces: the tokens accumulated up to the point the
/// scan stopped, plus the error that stopped it early, if any.
///
/// No terminator token is appended; on success `tokens` covers exactly
/// the non-whitespace input, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    pub tokens: Vec<Token>,
    pub error: Option<ScanError>,
}

impl ScanResult {
    /// Whether the whole input was scanned.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Collapse into a `Result`, dropping the partial tokens on error.
    pub fn into_result(self) -> Result<Vec<Token>, ScanError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.tokens),
        }
    }
}

/// Scan a pre-decoded sequence of code points.
pub fn scan(input: &[char]) -> ScanResult {
    Scanner::new(input).run()
}

/// Scan a string slice. Convenience for tests and tooling; the driver
/// decodes bytes itself and calls [`scan`].
pub fn scan_text(text: &str) -> ScanResult {
    let input: Vec<char> = text.chars().collect();
    scan(&input)
}

/// The identifier letter class: alphabetic code points that are not
/// also numeric. Letter-numbers such as `Ⅻ` scan as numbers instead.
fn is_letter(ch: char) -> bool {
    ch.is_alphabetic() && !ch.is_numeric()
}

struct Scanner<'a> {
    input: &'a [char],
    /// Cursor into `input`.
    pos: usize,
    /// Newlines consumed so far; the line of the next token.
    line: usize,
    tokens: Vec<Token>,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a [char]) -> Self {
        Self {
            input,
            pos: 0,
            line: 0,
            tokens: Vec::new(),
        }
    }

    fn run(mut self) -> ScanResult {
        while !self.is_eof() {
            if let Err(error) = self.consume_next() {
                return ScanResult {
                    tokens: self.tokens,
                    error: Some(error),
                };
            }
        }
        ScanResult {
            tokens: self.tokens,
            error: None,
        }
    }

    // ========================================================================
    // Cursor primitives
    // ========================================================================

    #[inline]
    fn current_char(&self) -> Option<char> {
        self.input.get(self.pos).copied()
    }

    #[inline]
    fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn text_from(&self, start: usize) -> String {
        self.input[start..self.pos].iter().collect()
    }

    // ========================================================================
    // Core scanning
    // ========================================================================

    /// Consume one token, one newline, or one whitespace code point.
    fn consume_next(&mut self) -> Result<(), ScanError> {
        let ch = match self.current_char() {
            Some(ch) => ch,
            None => return Ok(()),
        };

        match ch {
            '(' => self.scan_single(TokenKind::ParenOpen, ch),
            ')' => self.scan_single(TokenKind::ParenClose, ch),
            '{' => self.scan_single(TokenKind::BraceOpen, ch),
            '}' => self.scan_single(TokenKind::BraceClose, ch),
            '+' => self.scan_single(TokenKind::Plus, ch),
            ':' => self.scan_declaration()?,
            '\n' => {
                self.line += 1;
                self.pos += 1;
            }
            ch if is_letter(ch) => self.scan_identifier_or_keyword(),
            ch if ch.is_numeric() => self.scan_number()?,
            ch if ch.is_whitespace() => self.pos += 1,
            ch => {
                return Err(ScanError::UnrecognizedCharacter {
                    ch,
                    line: self.line,
                })
            }
        }
        Ok(())
    }

    fn scan_single(&mut self, kind: TokenKind, ch: char) {
        self.pos += 1;
        self.push_token(kind, ch.to_string());
    }

    /// `:` is only valid as the start of `:=`.
    fn scan_declaration(&mut self) -> Result<(), ScanError> {
        self.pos += 1;
        match self.current_char() {
            Some('=') => {
                self.pos += 1;
                self.push_token(TokenKind::Declaration, ":=".to_string());
                Ok(())
            }
            _ => Err(ScanError::IncompleteDeclaration { line: self.line }),
        }
    }

    /// Maximal munch over letter code points, then keyword lookup.
    fn scan_identifier_or_keyword(&mut self) {
        let start = self.pos;
        while matches!(self.current_char(), Some(ch) if is_letter(ch)) {
            self.pos += 1;
        }
        let lexeme = self.text_from(start);
        let kind = TokenKind::from_keyword(&lexeme).unwrap_or(TokenKind::Identifier);
        self.push_token(kind, lexeme);
    }

    /// Maximal munch over numeric code points, decoded as base-10 i64.
    ///
    /// The run is classified by `char::is_numeric`, which is wider than
    /// ASCII `0-9`, so decoding can fail (non-ASCII numerals, overflow).
    /// That failure is an error result, never a panic.
    fn scan_number(&mut self) -> Result<(), ScanError> {
        let start = self.pos;
        while matches!(self.current_char(), Some(ch) if ch.is_numeric()) {
            self.pos += 1;
        }
        let lexeme = self.text_from(start);
        let value: i64 = lexeme.parse().map_err(|source| ScanError::IntConversion {
            lexeme: lexeme.clone(),
            line: self.line,
            source,
        })?;
        self.tokens.push(
            Token::new(TokenKind::Number, lexeme, self.line).with_literal(Literal::Int(value)),
        );
        Ok(())
    }

    fn push_token(&mut self, kind: TokenKind, lexeme: String) {
        self.tokens.push(Token::new(kind, lexeme, self.line));
    }
}
