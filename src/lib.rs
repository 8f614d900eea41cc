//! # turdb-rows - Arity-Specialized Index Rows
//!
//! Immutable rows for TurDB's index keys and storage rows. Given a set of
//! column values, the factory builds the cheapest representation for that
//! arity:
//!
//! - **Zero slice allocation for 1- and 2-column keys**: primary-key lookups
//!   and two-column composite keys hold their values inline
//! - **One contract for every arity**: callers read rows without knowing
//!   which variant they got
//! - **Immutable once built**: no mutable access path exists on a finished row
//!
//! ## Quick Start
//!
//! ```
//! use turdb_rows::rows::{RowFactory, RowKind};
//! use turdb_rows::types::Value;
//!
//! let factory = RowFactory::new();
//!
//! let key = factory.create(Value::Int(42));
//! assert_eq!(key.kind(), RowKind::Key);
//! assert!(key.value_list().is_err());
//!
//! let row = factory.create_row(vec![Value::Int(1), Value::from("a"), Value::Null], 0);
//! assert_eq!(row.column_count(), 3);
//! assert_eq!(row.value_list().unwrap()[1], Value::from("a"));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │  Index / storage engine (callers)   │
//! ├─────────────────────────────────────┤
//! │  RowFactory        │  RowBuilder    │
//! ├─────────────────────────────────────┤
//! │  Row<V>: Key │ Pair │ Simple        │
//! ├─────────────────────────────────────┤
//! │  Value, HeapSize                    │
//! └─────────────────────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`rows`]: `Row`, `RowFactory`, `RowBuilder`, `RowError`
//! - [`types`]: engine `Value` and `HeapSize` accounting
//! - [`config`]: row layout constants

pub mod config;
pub mod rows;
pub mod types;

pub use rows::{Row, RowBuilder, RowError, RowFactory, RowKind};
pub use types::Value;

/// Row type index structures store.
pub type IndexRow = Row<Value>;
