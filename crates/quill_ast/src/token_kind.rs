//! TokenKind enum - every lexical token kind in the quill language.

/// The kind of a lexical token.
///
/// The set is closed: quill has five structural characters, one
/// two-character operator, two keywords, identifiers, and integer
/// literals. `EndOfFile` is part of the vocabulary for consumers that
/// look past the end of a token sequence; the scanner itself never
/// produces one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    // Punctuation
    ParenOpen,
    ParenClose,
    BraceOpen,
    BraceClose,
    Plus,
    Declaration,

    // Keywords
    Function,
    Print,

    // Carry source text or a decoded value
    Identifier,
    Number,

    EndOfFile,
}

impl TokenKind {
    /// The canonical name of this kind, as shown in diagnostics and the
    /// token dump.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::ParenOpen => "ParenOpen",
            TokenKind::ParenClose => "ParenClose",
            TokenKind::BraceOpen => "BraceOpen",
            TokenKind::BraceClose => "BraceClose",
            TokenKind::Plus => "Plus",
            TokenKind::Declaration => "Declaration",
            TokenKind::Function => "Function",
            TokenKind::Print => "Print",
            TokenKind::Identifier => "Identifier",
            TokenKind::Number => "Number",
            TokenKind::EndOfFile => "EndOfFile",
        }
    }

    /// Look up a reserved word. Lookup is exact: any other letter run,
    /// including one with a keyword prefix such as `fnx`, is an identifier.
    pub fn from_keyword(text: &str) -> Option<TokenKind> {
        match text {
            "fn" => Some(TokenKind::Function),
            "print" => Some(TokenKind::Print),
            _ => None,
        }
    }

    /// The source text of a keyword kind.
    pub fn keyword_text(self) -> Option<&'static str> {
        match self {
            TokenKind::Function => Some("fn"),
            TokenKind::Print => Some("print"),
            _ => None,
        }
    }

    /// The fixed source text of a punctuation kind.
    pub fn punctuation_text(self) -> Option<&'static str> {
        match self {
            TokenKind::ParenOpen => Some("("),
            TokenKind::ParenClose => Some(")"),
            TokenKind::BraceOpen => Some("{"),
            TokenKind::BraceClose => Some("}"),
            TokenKind::Plus => Some("+"),
            TokenKind::Declaration => Some(":="),
            _ => None,
        }
    }

    /// Whether this kind represents a keyword.
    #[inline]
    pub fn is_keyword(self) -> bool {
        self.keyword_text().is_some()
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_lookup_is_exact() {
        assert_eq!(TokenKind::from_keyword("fn"), Some(TokenKind::Function));
        assert_eq!(TokenKind::from_keyword("print"), Some(TokenKind::Print));
        assert_eq!(TokenKind::from_keyword("fnx"), None);
        assert_eq!(TokenKind::from_keyword("Fn"), None);
        assert_eq!(TokenKind::from_keyword(""), None);
    }

    #[test]
    fn keyword_text_round_trips() {
        for kind in [TokenKind::Function, TokenKind::Print] {
            let text = kind.keyword_text().unwrap();
            assert_eq!(TokenKind::from_keyword(text), Some(kind));
        }
        assert_eq!(TokenKind::Identifier.keyword_text(), None);
    }

    #[test]
    fn punctuation_text_covers_structural_kinds() {
        assert_eq!(TokenKind::ParenOpen.punctuation_text(), Some("("));
        assert_eq!(TokenKind::Declaration.punctuation_text(), Some(":="));
        assert_eq!(TokenKind::Number.punctuation_text(), None);
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(TokenKind::Declaration.to_string(), "Declaration");
        assert_eq!(TokenKind::EndOfFile.to_string(), "EndOfFile");
    }
}
