//! # Arity-Specialized Index Rows
//!
//! This module builds the immutable tuples index structures use as keys and
//! storage rows. The factory looks at how many values a row has and picks the
//! cheapest representation for it:
//!
//! ```text
//!            values
//!              │
//!       ┌──────┴───────┐
//!       │  RowFactory  │  dispatch on arity
//!       └──────┬───────┘
//!     ┌─────────┼─────────────┐
//!     │ 1       │ 2           │ 0, 3+
//! ┌───┴───┐ ┌───┴────┐ ┌──────┴───────────┐
//! │  Key  │ │  Pair  │ │ Simple(Box<[V]>) │
//! └───────┘ └────────┘ └──────────────────┘
//! ```
//!
//! All three answer the same read contract: `column_count`, `value`, `get`,
//! `iter`. Only simple rows answer `value_list`; the compact variants refuse
//! rather than allocate a slice per call.
//!
//! ## Mutation
//!
//! A finalized row has no mutable access path. `Row::set_value` exists for
//! callers written against a mutable-row interface and always returns
//! `RowError::MutationNotSupported`. Assemble values in a `RowBuilder` and
//! call `build` instead.
//!
//! ## Module Structure
//!
//! - `row`: `Row`, `RowKind`, `RowIter`
//! - `factory`: `RowFactory` arity dispatch
//! - `builder`: `RowBuilder` for column-by-column assembly
//! - `error`: `RowError`

pub mod builder;
pub mod error;
pub mod factory;
pub mod row;


pub use builder::RowBuilder;
pub use error::RowError;
pub use factory::RowFactory;
pub use row::{Row, RowIter, RowKind};
