//! # RowBuilder - Mutable Row Assembly
//!
//! Rows are immutable, so any column-by-column assembly happens here first.
//! The builder keeps up to `INLINE_ROW_COLUMNS` values on the stack, which
//! means a one- or two-column key goes from builder to row without a heap
//! allocation.
//!
//! ## Usage
//!
//! ```ignore
//! let mut builder = RowBuilder::new();
//! builder.push(Value::Int(7)).push(Value::from("alice"));
//! let row = builder.build(); // Pair row
//!
//! // The builder is empty again and keeps its capacity for reuse
//! builder.push(Value::Int(8));
//! let key = builder.build(); // Key row
//! ```

use smallvec::SmallVec;
use tracing::trace;

use super::error::RowError;
use super::factory;
use super::row::Row;
use crate::config::INLINE_ROW_COLUMNS;

#[derive(Debug, Clone)]
pub struct RowBuilder<V> {
    values: SmallVec<[V; INLINE_ROW_COLUMNS]>,
}

impl<V> RowBuilder<V> {
    pub fn new() -> Self {
        Self {
            values: SmallVec::new(),
        }
    }

    pub fn with_capacity(columns: usize) -> Self {
        Self {
            values: SmallVec::with_capacity(columns),
        }
    }

    pub fn push(&mut self, value: V) -> &mut Self {
        self.values.push(value);
        self
    }

    /// Replaces the value at `idx`. Only columns already pushed can be set.
    pub fn set(&mut self, idx: usize, value: V) -> Result<(), RowError> {
        let column_count = self.values.len();
        match self.values.get_mut(idx) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(RowError::ColumnIndexOutOfBounds {
                index: idx,
                column_count,
            }),
        }
    }

    pub fn get(&self, idx: usize) -> Option<&V> {
        self.values.get(idx)
    }

    pub fn column_count(&self) -> usize {
        self.values.len()
    }

    /// Columns the builder holds before it has to grow.
    pub fn capacity(&self) -> usize {
        self.values.capacity()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Drops all values, keeping the allocated capacity.
    pub fn reset(&mut self) {
        self.values.clear();
    }

    /// Finalizes the pushed values into a row and leaves the builder empty.
    ///
    /// Values are drained, so the builder keeps its capacity like `reset`.
    /// A simple row gets a backing slice sized to its column count.
    pub fn build(&mut self) -> Row<V> {
        let row = factory::dispatch(self.values.drain(..).collect());
        trace!(
            columns = row.column_count(),
            kind = %row.kind(),
            capacity = self.values.capacity(),
            "built row"
        );
        row
    }
}

impl<V> Default for RowBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Extend<V> for RowBuilder<V> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        self.values.extend(iter);
    }
}

impl<V> FromIterator<V> for RowBuilder<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<V> FromIterator<V> for Row<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        iter.into_iter().collect::<RowBuilder<V>>().build()
    }
}
