//! # Row Layout Constants
//!
//! This module centralizes the configuration constants for index rows.
//! Constants that other types depend on are checked at compile time.
//!
//! ## Dependency Graph
//!
//! ```text
//! INLINE_ROW_COLUMNS (2)
//!       │
//!       └─> RowBuilder stack capacity (SmallVec<[V; INLINE_ROW_COLUMNS]>)
//!             Key and pair rows are the only variants without a backing
//!             slice. A builder that holds up to this many values never
//!             touches the heap before handing them to the factory.
//! ```
//!
//! ## Critical Invariants
//!
//! 1. `INLINE_ROW_COLUMNS == 2` (key and pair rows, nothing wider)
//!
//! ## Usage
//!
//! ```ignore
//! use crate::config::INLINE_ROW_COLUMNS;
//! ```

// ============================================================================
// ROW LAYOUT CONSTANTS
// ============================================================================

/// Largest arity stored inline without a backing slice.
/// One-column rows are primary-key lookups, two-column rows are the common
/// composite key. Everything wider shares the slice-backed representation.
pub const INLINE_ROW_COLUMNS: usize = 2;

const _: () = assert!(
    INLINE_ROW_COLUMNS == 2,
    "INLINE_ROW_COLUMNS must match the key and pair row variants"
);
