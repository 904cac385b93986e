//! Core types for fanout.
//!
//! This crate provides the pieces shared by the scanning and distribution
//! crates: the name-based exclusion filter and the scan error type.

mod error;
mod filter;

pub use error::ScanError;
pub use filter::{DEFAULT_EXCLUDES, ExcludeSet};
