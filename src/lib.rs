//! # SortCopy - Parallel File Sorting by Extension
//!
//! SortCopy copies every file under a source directory tree into
//! subdirectories named after each file's lower-cased extension, using a
//! fixed-size worker pool for I/O parallelism. Files without an extension
//! land in an `unknown` bucket.
//!
//! It also ships a small factorize utility that computes the full divisor
//! set for a batch of integers, sequentially and on a CPU-parallel pool,
//! and reports the naive speedup between the two.
//!
//! ## Features
//!
//! - **Bounded Worker Pool**: fixed number of concurrent copy workers
//! - **Failure Containment**: one bad file never aborts its siblings
//! - **Metadata Preservation**: permissions and timestamps survive the copy
//! - **Complete Accounting**: one outcome per discovered file, failures listed
//! - **Dual Scheduling**: sequential and parallel factorize with identical results
//!
//! ## Quick Start
//!
//! ```no_run
//! use sortcopy::core::sort_tree;
//! use std::path::Path;
//!
//! let report = sort_tree(Path::new("/source"), Path::new("/sorted")).unwrap();
//! println!("Sorted {} of {} files", report.succeeded, report.total);
//! ```
//!
//! ## Advanced Usage
//!
//! ```no_run
//! use sortcopy::config::SortConfig;
//! use sortcopy::core::SortEngine;
//! use std::path::PathBuf;
//!
//! let config = SortConfig {
//!     source: PathBuf::from("/source"),
//!     destination: PathBuf::from("/sorted"),
//!     workers: 4,
//!     ..Default::default()
//! };
//!
//! let report = SortEngine::new(config).execute().unwrap();
//! report.print_summary();
//! ```
//!
//! ## Factorize
//!
//! ```no_run
//! use sortcopy::factorize::BatchExecutor;
//!
//! let report = BatchExecutor::default().compare(&[6, 7, 28]).unwrap();
//! report.print_summary();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod error;
pub mod factorize;
pub mod fs;

// Re-export commonly used types
pub use config::{FactorizeConfig, SortConfig};
pub use core::{SortEngine, SortReport};
pub use error::{Result, SortCopyError};
pub use factorize::{BatchExecutor, ExecutionMode};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    //! Convenient re-exports for common usage
    //!
    //! ```no_run
    //! use sortcopy::prelude::*;
    //! ```

    pub use crate::config::{FactorizeConfig, SortConfig};
    pub use crate::core::{sort_tree, CopyOutcome, CopyTask, SortEngine, SortReport, WorkerPool};
    pub use crate::error::{Result, SortCopyError};
    pub use crate::factorize::{divisors, BatchExecutor, DivisorResult, ExecutionMode};
    pub use crate::fs::{bucket_for, FileEntry, ScanConfig, Scanner};
}
