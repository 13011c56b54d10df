//! Error types for text and table operations.

use thiserror::Error;

/// Errors that can occur while tokenizing or reducing a table.
///
/// Every variant converts into [`maybe_core::Error`], so these travel inside
/// containers like any other failure; recover them with
/// `Error::downcast_ref::<TextError>()`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TextError {
    /// A cell could not be parsed into the requested kind.
    ///
    /// `row` is the table row after comment and blank lines are dropped.
    #[error("table row {row}, column {column}: cannot parse {token:?}: {message}")]
    Parse {
        row: usize,
        column: usize,
        token: String,
        message: String,
    },

    /// Rows have different lengths where a rectangular table is required.
    #[error("row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A column index past the end of a row.
    #[error("row {row} has no column {column} (width {width})")]
    ColumnOutOfRange {
        row: usize,
        column: usize,
        width: usize,
    },

    /// A row sum left the range of `i64`.
    #[error("sum of row {row} overflows")]
    Overflow { row: usize },

    /// A value failed the non-negative check.
    #[error("{0} is negative")]
    Negative(i64),

    /// The table configuration is unusable.
    #[error("invalid table config: {0}")]
    Config(String),
}

impl From<TextError> for maybe_core::Error {
    fn from(error: TextError) -> Self {
        maybe_core::Error::new(error)
    }
}
