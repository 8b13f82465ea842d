//! quill_parser: recursive descent parser for quill.
//!
//! Parses the scanner's token sequence into an arena-allocated AST.
//! The sequence carries no terminator token, so every lookahead is
//! bounds-checked; reads past the end report `TokenKind::EndOfFile`.

mod parser;

pub use parser::{parse, Parser, MAX_NESTING_DEPTH};
