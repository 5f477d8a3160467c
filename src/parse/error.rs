use thiserror::Error;

use super::token::Token;

/// Errors produced when reading rule-language input.
///
/// The reader does not recover: the first error ends the stream. Every
/// variant that stems from an unexpected token carries that token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("expected rule name, found {found}")]
    ExpectedName { found: Token },

    #[error("expected ':', found {found}")]
    ExpectedDelimiter { found: Token },

    #[error("expected search term name, found {found}")]
    ExpectedTerm { found: Token },

    #[error("expected filter action name, found {found}")]
    ExpectedAction { found: Token },

    #[error("unknown search term \"{name}\"")]
    UnknownTerm { name: String },

    #[error("unknown filter action \"{name}\"")]
    UnknownAction { name: String },

    #[error("expected ';', found {found}")]
    ExpectedEnd { found: Token },

    #[error("expected '(', found {found}")]
    ExpectedOpen { found: Token },

    #[error("expected string argument, found {found}")]
    ExpectedArgument { found: Token },

    #[error("expected ',' or ')', found {found}")]
    ExpectedCommaOrClose { found: Token },

    #[error("expected 'contains', found {found}")]
    ExpectedContains { found: Token },

    #[error("empty argument list")]
    EmptyGroup,

    #[error("invalid arguments for \"{factory}\": {message}")]
    InvalidArguments { factory: String, message: String },
}
