//! Error types for the table store and the statement parser.

use thiserror::Error;

/// Errors returned by [`Table`](crate::Table) mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TableError {
    /// Every slot of every page is taken.
    #[error("table full: {max_rows} rows")]
    Full { max_rows: usize },
}

/// Why an `insert` line could not be turned into a row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("missing field: {0}")]
    MissingField(&'static str),

    #[error("invalid id: {0:?}")]
    InvalidId(String),
}
