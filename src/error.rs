use thiserror::Error;

use crate::parse::SyntaxError;
use crate::FilterError;

/// Unified error type covering rule syntax, filter editing, and I/O.
///
/// Returned by convenience functions like [`parse_file()`](crate::parse::parse_file).
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Filter(#[from] FilterError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
