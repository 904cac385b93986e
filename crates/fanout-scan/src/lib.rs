//! Directory scanning for fanout.
//!
//! This crate enumerates the two sides of a distribution run: the files to
//! hand out and the folders to hand them to.
//!
//! # Overview
//!
//! - [`SourceScanner`] walks the source tree once and returns every regular
//!   file, in lexical depth-first order.
//! - [`TargetScanner`] walks a target tree once and returns the directories
//!   nested at least two levels below the root, in the same order.
//!
//! Both scanners share one traversal: serial, children sorted by name, with
//! excluded entries either pruned (directories) or omitted (files). A
//! traversal error aborts the scan that hit it.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use fanout_scan::{ExcludeSet, SourceScanner};
//!
//! let scanner = SourceScanner::new(ExcludeSet::new());
//! let files = scanner.scan(Path::new("/srv/inbox")).unwrap();
//! println!("{} files found", files.len());
//! ```

mod source;
mod target;
mod walk;

pub use source::SourceScanner;
pub use target::TargetScanner;

// Re-export core types for convenience
pub use fanout_core::{ExcludeSet, ScanError};
