use winnow::combinator::{alt, eof, opt, preceded};
use winnow::error::ModalResult;
use winnow::prelude::*;
use winnow::token::{any, take_till, take_while};

use super::token::Token;

// -- Whitespace & comments --------------------------------------------------

/// Skip whitespace and `//` line comments. Returns `false` if the input ends
/// inside a comment.
fn trivia(input: &mut &str) -> ModalResult<bool> {
    loop {
        take_while(0.., |c: char| c.is_whitespace()).parse_next(input)?;
        if opt("//").parse_next(input)?.is_none() {
            return Ok(true);
        }
        take_till(0.., '\n').parse_next(input)?;
        if opt('\n').parse_next(input)?.is_none() {
            return Ok(false);
        }
    }
}

// -- Lexemes ----------------------------------------------------------------

fn string_literal(input: &mut &str) -> ModalResult<Token> {
    preceded('"', (take_till(0.., '"'), opt('"')))
        .map(|(text, close): (&str, Option<char>)| match close {
            Some(_) => Token::Str(text.to_owned()),
            None => Token::Eof,
        })
        .parse_next(input)
}

// Stops before the first non-alphanumeric character, leaving it unread.
fn word(input: &mut &str) -> ModalResult<Token> {
    take_while(1.., |c: char| c.is_alphanumeric())
        .map(|w: &str| {
            if w == "contains" {
                Token::Contains
            } else {
                Token::Bad(w.to_owned())
            }
        })
        .parse_next(input)
}

fn lexeme(input: &mut &str) -> ModalResult<Token> {
    if !trivia(input)? {
        return Ok(Token::Eof);
    }
    alt((
        eof.value(Token::Eof),
        ':'.value(Token::Delimiter),
        ';'.value(Token::End),
        '('.value(Token::Open),
        ')'.value(Token::Close),
        ','.value(Token::Comma),
        string_literal,
        word,
        any.map(|c: char| Token::Bad(c.to_string())),
    ))
    .parse_next(input)
}

// -- Tokenizer --------------------------------------------------------------

/// Splits rule-language text into [`Token`]s, one at a time.
///
/// Never fails: unterminated strings and comments end the stream with
/// [`Token::Eof`], which then repeats forever.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    input: &'a str,
    finished: bool,
}

impl<'a> Tokenizer<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            finished: false,
        }
    }

    /// Read the next token.
    pub fn next_token(&mut self) -> Token {
        if self.finished {
            return Token::Eof;
        }
        let token = lexeme.parse_next(&mut self.input).unwrap_or(Token::Eof);
        if token.is_eof() {
            self.finished = true;
        }
        token
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        match self.next_token() {
            Token::Eof => None,
            token => Some(token),
        }
    }
}
