//! quill_scanner: the lexer for quill source code.
//!
//! Converts a pre-decoded sequence of Unicode code points into tokens:
//! - structural characters `(` `)` `{` `}` `+` and the `:=` operator
//! - keywords `fn` and `print`, identifiers, integer literals
//! - zero-based line tracking for diagnostics
//!
//! The entry points are [`scan`] over code points and [`scan_text`] over
//! a string slice; both return a [`ScanResult`] carrying the tokens
//! scanned so far and the first error, if any.

mod scanner;
mod token;

pub use scanner::{scan, scan_text, ScanResult};
pub use token::{Literal, Token};
