//! quill_ast: token kinds and syntax tree definitions for the quill language.
//!
//! `TokenKind` is the shared vocabulary between the scanner and the parser;
//! the tree types are what the parser produces and the interpreter walks.

pub mod ast;
pub mod token_kind;

// Re-export key types
pub use ast::{Block, Expr, Program, Stmt};
pub use token_kind::TokenKind;
