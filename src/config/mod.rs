//! # Configuration Module
//!
//! Compile-time configuration for row layout. Values that other types rely on
//! are checked with compile-time assertions.
//!
//! ## Module Organization
//!
//! - [`constants`]: Numeric configuration values with dependency documentation

pub mod constants;
pub use constants::*;
