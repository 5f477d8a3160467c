use std::fmt;

/// A lexical token of the rule language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// End of input, including input that ends inside a string or comment.
    Eof,
    /// `:`
    Delimiter,
    /// `;`
    End,
    /// `(`
    Open,
    /// `)`
    Close,
    /// `,`
    Comma,
    /// The `contains` keyword.
    Contains,
    /// A double-quoted string, quotes removed, contents verbatim.
    Str(String),
    /// An unrecognised lexeme, kept for error reporting.
    Bad(String),
}

impl Token {
    #[must_use]
    pub fn is_eof(&self) -> bool {
        matches!(self, Token::Eof)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Eof => write!(f, "end of input"),
            Token::Delimiter => write!(f, ":"),
            Token::End => write!(f, ";"),
            Token::Open => write!(f, "("),
            Token::Close => write!(f, ")"),
            Token::Comma => write!(f, ","),
            Token::Contains => write!(f, "contains"),
            Token::Str(s) => write!(f, "\"{s}\""),
            Token::Bad(s) => write!(f, "{s}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_renders_lexemes() {
        let cases = [
            (Token::Eof, "end of input"),
            (Token::Delimiter, ":"),
            (Token::End, ";"),
            (Token::Open, "("),
            (Token::Close, ")"),
            (Token::Comma, ","),
            (Token::Contains, "contains"),
            (Token::Str("hi there".into()), "\"hi there\""),
            (Token::Bad("when".into()), "when"),
        ];
        for (token, expected) in cases {
            assert_eq!(token.to_string(), expected);
        }
    }
}
