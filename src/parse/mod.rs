mod error;
mod lexer;
mod reader;
mod token;

pub use error::SyntaxError;
pub use lexer::Tokenizer;
pub use reader::RuleReader;
pub use token::Token;

use crate::{Registry, Rule};

/// Read every rule in `input`.
///
/// # Errors
///
/// Returns the first [`SyntaxError`]; no rules are returned in that case.
pub fn parse_rules<T: ?Sized>(
    input: &str,
    registry: &Registry<T>,
) -> Result<Vec<Rule<T>>, SyntaxError> {
    RuleReader::new(input, registry).collect()
}

/// Read every rule in the file at `path`.
///
/// # Errors
///
/// Returns [`Error`](crate::Error) on I/O failure or the first syntax error.
pub fn parse_file<T: ?Sized>(
    path: impl AsRef<std::path::Path>,
    registry: &Registry<T>,
) -> Result<Vec<Rule<T>>, crate::Error> {
    let input = std::fs::read_to_string(path)?;
    let rules = parse_rules(&input, registry)?;
    Ok(rules)
}
