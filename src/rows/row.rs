//! # Row - Immutable Arity-Specialized Tuple
//!
//! `Row<V>` is one of three representations chosen by the factory from the
//! number of values:
//!
//! | Kind | Arity | Storage |
//! |------|-------|---------|
//! | **Key** | 1 | value inline |
//! | **Pair** | 2 | both values inline |
//! | **Simple** | any | `Box<[V]>` |
//!
//! Key and pair rows exist so single-column lookups and two-column composite
//! keys never pay for a slice allocation. They never build one on demand
//! either: `value_list` fails on them, and arity-agnostic callers use `iter`.
//!
//! The representation is private, so an owned row is as read-only as a
//! borrowed one.

use std::fmt;
use std::iter::FusedIterator;
use std::mem::size_of;
use std::ops::Index;

use super::error::RowError;
use crate::types::HeapSize;

/// Which representation a row was built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowKind {
    Key,
    Pair,
    Simple,
}

impl RowKind {
    pub fn name(&self) -> &'static str {
        match self {
            RowKind::Key => "key",
            RowKind::Pair => "pair",
            RowKind::Simple => "simple",
        }
    }
}

impl fmt::Display for RowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone)]
enum Repr<V> {
    Key(V),
    Pair(V, V),
    Simple(Box<[V]>),
}

/// Immutable, fixed-arity tuple of values used as an index key or storage row.
#[derive(Debug, Clone)]
pub struct Row<V> {
    repr: Repr<V>,
}

impl<V> Row<V> {
    pub(crate) fn key(value: V) -> Self {
        Self {
            repr: Repr::Key(value),
        }
    }

    pub(crate) fn pair(v1: V, v2: V) -> Self {
        Self {
            repr: Repr::Pair(v1, v2),
        }
    }

    /// Builds a slice-backed row for any arity, including 1 and 2.
    ///
    /// Use this instead of the factory when the caller needs `value_list` to
    /// succeed regardless of how many columns the row has.
    pub fn simple(values: Vec<V>) -> Self {
        Self {
            repr: Repr::Simple(values.into_boxed_slice()),
        }
    }

    pub fn kind(&self) -> RowKind {
        match self.repr {
            Repr::Key(_) => RowKind::Key,
            Repr::Pair(_, _) => RowKind::Pair,
            Repr::Simple(_) => RowKind::Simple,
        }
    }

    #[inline]
    pub fn column_count(&self) -> usize {
        match &self.repr {
            Repr::Key(_) => 1,
            Repr::Pair(_, _) => 2,
            Repr::Simple(values) => values.len(),
        }
    }

    /// Returns the value at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.column_count()`.
    #[inline]
    pub fn value(&self, idx: usize) -> &V {
        match self.get(idx) {
            Some(value) => value,
            None => panic!(
                "column index {} out of range for {} row of {} columns",
                idx,
                self.kind(),
                self.column_count()
            ),
        }
    }

    #[inline]
    pub fn get(&self, idx: usize) -> Option<&V> {
        match (&self.repr, idx) {
            (Repr::Key(v), 0) => Some(v),
            (Repr::Pair(v1, _), 0) => Some(v1),
            (Repr::Pair(_, v2), 1) => Some(v2),
            (Repr::Simple(values), i) => values.get(i),
            _ => None,
        }
    }

    /// Always fails: rows are immutable once built. Build a new row through
    /// `RowBuilder` instead.
    pub fn set_value(&self, idx: usize, _value: V) -> Result<(), RowError> {
        Err(RowError::MutationNotSupported { column: idx })
    }

    /// Returns the backing slice of a simple row.
    ///
    /// Key and pair rows have no backing slice and always fail with
    /// `MaterializationNotSupported`.
    pub fn value_list(&self) -> Result<&[V], RowError> {
        match &self.repr {
            Repr::Simple(values) => Ok(&values[..]),
            _ => Err(RowError::MaterializationNotSupported { kind: self.kind() }),
        }
    }

    pub fn iter(&self) -> RowIter<'_, V> {
        RowIter {
            row: self,
            front: 0,
            back: self.column_count(),
        }
    }

    /// Estimated bytes held by this row: the row itself, the backing slice of
    /// a simple row, and the heap owned by each value.
    pub fn memory(&self) -> usize
    where
        V: HeapSize,
    {
        let values_heap: usize = self.iter().map(HeapSize::heap_size).sum();
        let slice = match &self.repr {
            Repr::Simple(values) => values.len() * size_of::<V>(),
            _ => 0,
        };
        size_of::<Self>() + slice + values_heap
    }
}

impl<V> Index<usize> for Row<V> {
    type Output = V;

    #[inline]
    fn index(&self, idx: usize) -> &V {
        self.value(idx)
    }
}

impl<V: PartialEq> PartialEq for Row<V> {
    fn eq(&self, other: &Self) -> bool {
        self.column_count() == other.column_count() && self.iter().eq(other.iter())
    }
}

impl<V: Eq> Eq for Row<V> {}

impl<V: fmt::Display> fmt::Display for Row<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", value)?;
        }
        f.write_str(")")
    }
}

impl<'a, V> IntoIterator for &'a Row<V> {
    type Item = &'a V;
    type IntoIter = RowIter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over a row's values. Works on every variant and never
/// allocates.
#[derive(Debug, Clone)]
pub struct RowIter<'a, V> {
    row: &'a Row<V>,
    front: usize,
    back: usize,
}

impl<'a, V> Iterator for RowIter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        if self.front >= self.back {
            return None;
        }
        let value = self.row.get(self.front)?;
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<V> DoubleEndedIterator for RowIter<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.row.get(self.back)
    }
}

impl<V> ExactSizeIterator for RowIter<'_, V> {}

impl<V> FusedIterator for RowIter<'_, V> {}
