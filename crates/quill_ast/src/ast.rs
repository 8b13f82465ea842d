//! Syntax tree types.
//!
//! Nodes are arena-allocated: statement lists and nested expressions are
//! slices and references into a `bumpalo::Bump` owned by whoever drives
//! the parser, and identifier names are `lasso` interner keys. Nothing
//! here owns heap memory, so whole trees are `Copy`.

use lasso::Spur;

/// A statement list allocated in the parse arena.
pub type Block<'a> = &'a [Stmt<'a>];

/// The root of a parsed source file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Program<'a> {
    pub statements: Block<'a>,
}

impl<'a> Program<'a> {
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

/// A statement. `line` is the zero-based line of the statement's first
/// token, carried for runtime diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stmt<'a> {
    /// `name := value`
    Declaration {
        name: Spur,
        value: Expr<'a>,
        line: usize,
    },
    /// `print(value)`
    Print { value: Expr<'a>, line: usize },
    /// `fn name() { body }`
    Function {
        name: Spur,
        body: Block<'a>,
        line: usize,
    },
    /// `name()`
    Call { name: Spur, line: usize },
}

/// An expression over integers: literals, variable reads, and `+` chains.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Expr<'a> {
    Number {
        value: i64,
    },
    Variable {
        name: Spur,
        line: usize,
    },
    Add {
        lhs: &'a Expr<'a>,
        rhs: &'a Expr<'a>,
        line: usize,
    },
}
