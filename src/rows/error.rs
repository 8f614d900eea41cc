//! # Row Contract Errors
//!
//! Rows are read-only once built, and the compact variants never produce a
//! slice view. Both restrictions surface as `RowError` so callers can match on
//! them; neither is transient, and nothing here is retried.

use std::fmt;

use super::row::RowKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowError {
    /// `set_value` on a finalized row. Raised by every variant, every call.
    MutationNotSupported { column: usize },
    /// `value_list` on a key or pair row, which hold no backing slice.
    MaterializationNotSupported { kind: RowKind },
    /// `RowBuilder::set` past the values pushed so far.
    ColumnIndexOutOfBounds { index: usize, column_count: usize },
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowError::MutationNotSupported { column } => {
                write!(f, "cannot set column {}: rows are immutable once built", column)
            }
            RowError::MaterializationNotSupported { kind } => {
                write!(f, "{} row has no backing value list", kind)
            }
            RowError::ColumnIndexOutOfBounds {
                index,
                column_count,
            } => write!(
                f,
                "column index {} out of bounds for row of {} columns",
                index, column_count
            ),
        }
    }
}

impl std::error::Error for RowError {}
