//! # RowFactory - Arity Dispatch
//!
//! `RowFactory` picks the row representation from the number of values:
//!
//! ```text
//! create(v)            -> Key
//! create_pair(v1, v2)  -> Pair
//! create_row(values)   -> len 1: Key, len 2: Pair, otherwise: Simple
//! ```
//!
//! The factory is a zero-sized value with no state. Any copy of it is as good
//! as any other, so there is no shared instance to initialize or tear down.

use smallvec::SmallVec;
use tracing::trace;

use super::row::Row;
use crate::config::INLINE_ROW_COLUMNS;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowFactory;

impl RowFactory {
    pub const fn new() -> Self {
        RowFactory
    }

    #[inline]
    pub fn create<V>(&self, value: V) -> Row<V> {
        Row::key(value)
    }

    #[inline]
    pub fn create_pair<V>(&self, v1: V, v2: V) -> Row<V> {
        Row::pair(v1, v2)
    }

    /// Builds the row for `values`, choosing the variant from its length.
    ///
    /// `memory` is the caller's size estimate for resource accounting. It is
    /// reported on the trace event and has no effect on the variant.
    pub fn create_row<V>(&self, values: Vec<V>, memory: usize) -> Row<V> {
        let row = dispatch(SmallVec::from_vec(values));
        trace!(
            columns = row.column_count(),
            kind = %row.kind(),
            memory,
            "created row"
        );
        row
    }
}

/// Arity dispatch shared by `RowFactory::create_row` and `RowBuilder::build`.
///
/// A spilled vector with more than two values becomes the simple row's
/// backing slice without copying.
pub(crate) fn dispatch<V>(mut values: SmallVec<[V; INLINE_ROW_COLUMNS]>) -> Row<V> {
    match values.len() {
        1 => Row::key(values.swap_remove(0)),
        2 => {
            let v2 = values.swap_remove(1);
            let v1 = values.swap_remove(0);
            Row::pair(v1, v2)
        }
        _ => Row::simple(values.into_vec()),
    }
}
