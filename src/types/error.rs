use thiserror::Error;

/// Errors produced by index-based access to a [`FilterExpr`](super::FilterExpr).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("clause index {index} out of range for filter of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}
