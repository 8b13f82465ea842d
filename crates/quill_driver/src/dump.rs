//! The `debug_scanner` report: a fixed-width table of every token the
//! scanner produced.

use quill_ast::TokenKind;
use quill_scanner::{Literal, Token};

/// Render the token table, one row per token.
///
/// The value column shows the parsed literal when the token has one,
/// the lexeme for identifiers, and stays empty for everything else.
pub fn render(tokens: &[Token]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "\nSuccessfully scanned {} tokens!\n\n",
        tokens.len()
    ));
    for (index, token) in tokens.iter().enumerate() {
        render_row(&mut out, index, token);
    }
    out.push('\n');
    out
}

fn render_row(out: &mut String, index: usize, token: &Token) {
    let kind = token.kind.name();
    match token.literal {
        Literal::Int(value) => {
            out.push_str(&format!("\t{index:>5} | {kind:<12} | {value}\n"));
        }
        Literal::None if token.kind == TokenKind::Identifier => {
            out.push_str(&format!("\t{index:>5} | {kind:<12} | {}\n", token.lexeme));
        }
        Literal::None => {
            out.push_str(&format!("\t{index:>5} | {kind:<12} |\n"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_scanner::scan_text;

    fn dump(source: &str) -> String {
        let result = scan_text(source);
        assert!(result.is_ok(), "scan failed: {:?}", result.error);
        render(&result.tokens)
    }

    #[test]
    fn renders_an_empty_token_list() {
        assert_eq!(render(&[]), "\nSuccessfully scanned 0 tokens!\n\n\n");
    }

    #[test]
    fn renders_a_declaration() {
        let expected = "\nSuccessfully scanned 5 tokens!\n\n\
                        \t    0 | Identifier   | x\n\
                        \t    1 | Declaration  |\n\
                        \t    2 | Number       | 1\n\
                        \t    3 | Plus         |\n\
                        \t    4 | Number       | 2\n\n";
        assert_eq!(dump("x := 1 + 2"), expected);
    }

    #[test]
    fn number_rows_show_the_parsed_value() {
        let rendered = dump("007");
        assert!(rendered.contains("| Number       | 7\n"));
        assert!(!rendered.contains("007"));
    }

    #[test]
    fn keyword_rows_have_an_empty_value_column() {
        let rendered = dump("fn f() {}");
        assert!(rendered.contains("| Function     |\n"));
        assert!(rendered.contains("| Identifier   | f\n"));
        assert!(rendered.contains("| BraceOpen    |\n"));
    }
}
