//! Data collection: scan files and collect statistics.
//!
//! This module handles the second stage of the pipeline - reading the files
//! the source stage selected and accumulating per-category totals. It
//! provides:
//!
//! - **Scanning**: Byte-level line reader that separates empty and actual lines
//! - **Statistics**: Core data structures (`LineStats`, `CategoryStats`, ...)
//! - **Counting**: High-level API (`count_paths`)
//!
//! ## Example
//!
//! ```rust,ignore
//! use cntrlib::data::{count_paths, CountOptions};
//!
//! let result = count_paths(&["src", "include"], &CountOptions::new());
//! for entry in result.totals.non_empty() {
//!     println!("{}: {} files", entry.category.description, entry.stats.file_count);
//! }
//! ```

pub mod counter;
pub mod scanner;
pub mod stats;

pub use counter::{
    count_paths, count_paths_with_progress, CountOptions, CountResult, SkippedEntry,
};
pub use scanner::{scan_file, scan_reader, scan_str, Scanner};
pub use stats::{CategoryEntry, CategoryStats, CategoryTotals, LineStats};
