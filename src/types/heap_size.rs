//! # Heap Size Accounting
//!
//! `HeapSize` reports the heap bytes a value owns beyond its inline size.
//! Row memory estimates add this to the inline row size, and the result is
//! what callers pass as the `memory` hint to `RowFactory::create_row`.
//!
//! Shared handles (`Arc<T>`) report zero: the allocation belongs to whoever
//! created it, and counting it once per handle would charge the same bytes
//! many times over.

use std::mem::size_of;
use std::sync::Arc;

/// Heap bytes owned by a value, excluding its inline `size_of`.
pub trait HeapSize {
    fn heap_size(&self) -> usize;
}

macro_rules! inline_only {
    ($($ty:ty),* $(,)?) => {
        $(
            impl HeapSize for $ty {
                #[inline]
                fn heap_size(&self) -> usize {
                    0
                }
            }
        )*
    };
}

inline_only!(bool, i8, i16, i32, i64, u8, u16, u32, u64, usize, f32, f64, [u8; 16]);

impl HeapSize for String {
    fn heap_size(&self) -> usize {
        self.capacity()
    }
}

impl HeapSize for Box<str> {
    fn heap_size(&self) -> usize {
        self.len()
    }
}

impl<T: HeapSize> HeapSize for Vec<T> {
    fn heap_size(&self) -> usize {
        self.capacity() * size_of::<T>() + self.iter().map(HeapSize::heap_size).sum::<usize>()
    }
}

impl<T: HeapSize> HeapSize for Option<T> {
    fn heap_size(&self) -> usize {
        self.as_ref().map_or(0, HeapSize::heap_size)
    }
}

impl<T: ?Sized> HeapSize for Arc<T> {
    fn heap_size(&self) -> usize {
        0
    }
}
