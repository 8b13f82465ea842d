//! The quill parser implementation.
//!
//! A recursive descent parser over the scanner's token sequence. One
//! token of lookahead disambiguates every statement form; the first
//! error aborts the parse. Trees are allocated in a caller-owned arena
//! and identifier names are interned into a caller-owned interner, so
//! the returned [`Program`] borrows only the arena.

use bumpalo::collections::Vec as BumpVec;
use bumpalo::Bump;
use lasso::{Rodeo, Spur};
use quill_ast::{Block, Expr, Program, Stmt, TokenKind};
use quill_diagnostics::ParseError;
use quill_scanner::{Literal, Token};

/// Maximum nesting depth, shared by parenthesized expressions and
/// function bodies, to prevent stack overflow on deeply nested input.
pub const MAX_NESTING_DEPTH: usize = 200;

/// Parse a token sequence into a [`Program`].
pub fn parse<'a>(
    arena: &'a Bump,
    interner: &mut Rodeo,
    tokens: &[Token],
) -> Result<Program<'a>, ParseError> {
    let program = Parser::new(arena, interner, tokens).parse_program()?;
    tracing::debug!(statements = program.statements.len(), "parsed program");
    Ok(program)
}

/// The parser. Construct with [`Parser::new`], consume with
/// [`Parser::parse_program`].
pub struct Parser<'a, 't> {
    arena: &'a Bump,
    interner: &'t mut Rodeo,
    tokens: &'t [Token],
    pos: usize,
    /// Tracks `(` and `{` recursion to prevent stack overflow on deeply
    /// nested input.
    nesting_depth: usize,
}

impl<'a, 't> Parser<'a, 't> {
    pub fn new(arena: &'a Bump, interner: &'t mut Rodeo, tokens: &'t [Token]) -> Self {
        Self {
            arena,
            interner,
            tokens,
            pos: 0,
            nesting_depth: 0,
        }
    }

    pub fn parse_program(mut self) -> Result<Program<'a>, ParseError> {
        let statements = self.parse_statement_list(None)?;
        Ok(Program { statements })
    }

    // ========================================================================
    // Token cursor
    // ========================================================================

    /// The kind at the cursor. The sequence has no terminator token, so
    /// past-the-end reads report [`TokenKind::EndOfFile`].
    fn peek_kind(&self) -> TokenKind {
        self.tokens
            .get(self.pos)
            .map_or(TokenKind::EndOfFile, |token| token.kind)
    }

    /// The line at the cursor, or of the last token once the input ends.
    fn current_line(&self) -> usize {
        match self.tokens.get(self.pos) {
            Some(token) => token.line,
            None => self.tokens.last().map_or(0, |token| token.line),
        }
    }

    /// Consume the current token if it has the expected kind.
    fn expect(&mut self, kind: TokenKind, expected: &'static str) -> Result<&'t Token, ParseError> {
        match self.tokens.get(self.pos) {
            Some(token) if token.kind == kind => {
                self.pos += 1;
                Ok(token)
            }
            _ => Err(self.unexpected(expected)),
        }
    }

    fn unexpected(&self, expected: &'static str) -> ParseError {
        ParseError::UnexpectedToken {
            expected,
            found: self.peek_kind(),
            line: self.current_line(),
        }
    }

    fn intern(&mut self, token: &Token) -> Spur {
        self.interner.get_or_intern(&token.lexeme)
    }

    // ========================================================================
    // Statements
    // ========================================================================

    /// Statements until `terminator` (or end of input for the top level).
    /// The terminator itself is left for the caller to consume.
    fn parse_statement_list(
        &mut self,
        terminator: Option<TokenKind>,
    ) -> Result<Block<'a>, ParseError> {
        let mut statements = BumpVec::new_in(self.arena);
        loop {
            let kind = self.peek_kind();
            if kind == TokenKind::EndOfFile || Some(kind) == terminator {
                break;
            }
            statements.push(self.parse_statement()?);
        }
        Ok(statements.into_bump_slice())
    }

    fn parse_statement(&mut self) -> Result<Stmt<'a>, ParseError> {
        match self.peek_kind() {
            TokenKind::Identifier => self.parse_declaration_or_call(),
            TokenKind::Print => self.parse_print(),
            TokenKind::Function => self.parse_function(),
            _ => Err(self.unexpected("a statement")),
        }
    }

    /// `name := expr` or `name()`, disambiguated by the token after the
    /// identifier.
    fn parse_declaration_or_call(&mut self) -> Result<Stmt<'a>, ParseError> {
        let token = self.expect(TokenKind::Identifier, "an identifier")?;
        let line = token.line;
        let name = self.intern(token);
        match self.peek_kind() {
            TokenKind::Declaration => {
                self.expect(TokenKind::Declaration, "`:=`")?;
                let value = self.parse_expression()?;
                Ok(Stmt::Declaration { name, value, line })
            }
            TokenKind::ParenOpen => {
                self.expect(TokenKind::ParenOpen, "`(`")?;
                self.expect(TokenKind::ParenClose, "`)`")?;
                Ok(Stmt::Call { name, line })
            }
            _ => Err(self.unexpected("`:=` or `(` after an identifier")),
        }
    }

    fn parse_print(&mut self) -> Result<Stmt<'a>, ParseError> {
        let keyword = self.expect(TokenKind::Print, "`print`")?;
        let line = keyword.line;
        self.expect(TokenKind::ParenOpen, "`(`")?;
        let value = self.parse_expression()?;
        self.expect(TokenKind::ParenClose, "`)`")?;
        Ok(Stmt::Print { value, line })
    }

    fn parse_function(&mut self) -> Result<Stmt<'a>, ParseError> {
        let keyword = self.expect(TokenKind::Function, "`fn`")?;
        let line = keyword.line;
        let name_token = self.expect(TokenKind::Identifier, "a function name")?;
        let name = self.intern(name_token);
        self.expect(TokenKind::ParenOpen, "`(`")?;
        self.expect(TokenKind::ParenClose, "`)`")?;
        let brace = self.expect(TokenKind::BraceOpen, "`{`")?;
        // Bodies recurse through parse_statement_list, so they count
        // against the same depth limit as parenthesized expressions.
        self.nesting_depth += 1;
        if self.nesting_depth > MAX_NESTING_DEPTH {
            self.nesting_depth -= 1;
            return Err(ParseError::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
                line: brace.line,
            });
        }
        let body = self.parse_statement_list(Some(TokenKind::BraceClose))?;
        self.expect(TokenKind::BraceClose, "`}`")?;
        self.nesting_depth -= 1;
        Ok(Stmt::Function { name, body, line })
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    /// A left-associative `+` chain.
    fn parse_expression(&mut self) -> Result<Expr<'a>, ParseError> {
        let mut lhs = self.parse_operand()?;
        while self.peek_kind() == TokenKind::Plus {
            let plus = self.expect(TokenKind::Plus, "`+`")?;
            let line = plus.line;
            let rhs = self.parse_operand()?;
            lhs = Expr::Add {
                lhs: self.arena.alloc(lhs),
                rhs: self.arena.alloc(rhs),
                line,
            };
        }
        Ok(lhs)
    }

    fn parse_operand(&mut self) -> Result<Expr<'a>, ParseError> {
        match self.peek_kind() {
            TokenKind::Number => {
                let token = self.expect(TokenKind::Number, "a number")?;
                match token.literal {
                    Literal::Int(value) => Ok(Expr::Number { value }),
                    // A Number token always carries a decoded value when it
                    // comes from the scanner; a hand-built stream may not.
                    Literal::None => Err(ParseError::UnexpectedToken {
                        expected: "a number with a decoded value",
                        found: TokenKind::Number,
                        line: token.line,
                    }),
                }
            }
            TokenKind::Identifier => {
                let token = self.expect(TokenKind::Identifier, "an identifier")?;
                let line = token.line;
                let name = self.intern(token);
                Ok(Expr::Variable { name, line })
            }
            TokenKind::ParenOpen => self.parse_parenthesized(),
            _ => Err(self.unexpected("an expression")),
        }
    }

    fn parse_parenthesized(&mut self) -> Result<Expr<'a>, ParseError> {
        let open = self.expect(TokenKind::ParenOpen, "`(`")?;
        self.nesting_depth += 1;
        if self.nesting_depth > MAX_NESTING_DEPTH {
            self.nesting_depth -= 1;
            return Err(ParseError::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
                line: open.line,
            });
        }
        let expr = self.parse_expression()?;
        self.expect(TokenKind::ParenClose, "`)`")?;
        self.nesting_depth -= 1;
        Ok(expr)
    }
}
