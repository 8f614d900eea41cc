//! # Value Types for Index Rows
//!
//! Rows are generic over the value type they hold. This module provides the
//! engine's owned value and the heap accounting trait that row memory
//! estimates are built on.
//!
//! ## Key Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | `Value` | Owned SQL datum stored in index rows |
//! | `HeapSize` | Heap bytes owned by a value, for memory estimates |
//!
//! ## Usage
//!
//! ```ignore
//! use turdb_rows::types::{HeapSize, Value};
//!
//! let val = Value::Text("alice".to_string());
//! assert_eq!(val.heap_size(), 5);
//! ```

mod heap_size;
mod value;

pub use heap_size::HeapSize;
pub use value::Value;
