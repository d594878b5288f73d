//! # cntrlib
//!
//! Per-category source statistics for directory trees.
//!
//! ## Overview
//!
//! The library walks one or more directory trees, sorts every regular file
//! into source categories by its suffix, and accumulates per category:
//!
//! - **Files**: How many files matched
//! - **Size**: Their total size in bytes
//! - **Lines**: Total, actual (non-empty) and empty lines
//! - **Comments**: Reserved column, always zero
//!
//! The built-in categories cover C and C++ projects: C sources, C++ sources,
//! headers, `CMakeLists.txt`, `Makefile` and `Kconfig`.
//!
//! ## Features
//!
//! - **Exact suffix matching**: `foo.cpp.bak` is not a C++ file
//! - **Base-name exclusions**: `build` prunes every entry named `build`
//! - **Non-fatal errors**: Unreadable roots, directories and files are
//!   reported and skipped
//! - **Pure data**: Returns structured results, no printing
//!
//! ## Example
//!
//! ```rust
//! use cntrlib::{count_paths, CountOptions, ExcludeFilter, StatsTable};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::write(dir.path().join("main.c"), "int main(void)\n{\n\n    return 0;\n}\n").unwrap();
//! fs::write(dir.path().join("CMakeLists.txt"), "project(demo C)\n").unwrap();
//! fs::write(dir.path().join("README.md"), "# demo\n").unwrap();
//!
//! let result = count_paths(&[dir.path()], &CountOptions::new());
//! assert_eq!(result.totals.by_id("c").unwrap().actual_lines, 4);
//!
//! let table = StatsTable::from_totals(&result.totals);
//! assert_eq!(table.rows.len(), 2);
//! assert_eq!(table.rows[0].label, "C source");
//!
//! // Prune by base name
//! let options = CountOptions::new().exclude(ExcludeFilter::new().exclude("build"));
//! let result = count_paths(&[dir.path()], &options);
//! ```

pub mod data;
pub mod error;
pub mod output;
pub mod source;

pub use data::{
    count_paths, count_paths_with_progress, scan_file, scan_reader, scan_str, CategoryEntry,
    CategoryStats, CategoryTotals, CountOptions, CountResult, LineStats, SkippedEntry,
};
pub use error::CntrError;
pub use output::{format_size, HumanSize, SizeUnit, StatsTable, TableRow};
pub use source::{Category, CategoryTable, ExcludeFilter, TreeWalker, WalkVisitor};

/// Result type for cntrlib operations
pub type Result<T> = std::result::Result<T, CntrError>;
