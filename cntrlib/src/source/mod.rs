//! Source discovery: find and classify files to analyze.
//!
//! This module handles the first stage of the pipeline - deciding which
//! files get counted and under which category. It provides:
//!
//! - **Categories**: The suffix table and path classification
//! - **Exclusions**: Base-name pruning of directory entries
//! - **Walking**: Depth-first traversal of search roots
//!
//! ## Example
//!
//! ```rust,ignore
//! use cntrlib::source::{CategoryTable, ExcludeFilter, TreeWalker};
//!
//! let table = CategoryTable::builtin();
//! let hits = table.classify(Path::new("src/main.c"));
//!
//! let exclude = ExcludeFilter::new().exclude("build");
//! TreeWalker::new(&exclude).walk_all(&["src"], &mut visitor);
//! ```

pub mod category;
pub mod filter;
pub mod walker;

pub use category::{Category, CategoryTable};
pub use filter::ExcludeFilter;
pub use walker::{TreeWalker, WalkVisitor};
