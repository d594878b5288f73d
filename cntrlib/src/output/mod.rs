//! Output formatting: present data as tables.
//!
//! This module handles the last stage of the pipeline - turning run totals
//! into display-ready strings. It provides:
//!
//! - **StatsTable**: Table-ready data structure with headers and rows
//! - **HumanSize**: 1024-based byte size formatting (`1.5K`, `3.0M`)
//!
//! ## Example
//!
//! ```rust,ignore
//! use cntrlib::output::StatsTable;
//!
//! let table = StatsTable::from_totals(&result.totals);
//! // table.headers: ["Description", "No. of files", "Size", ...]
//! // table.rows: [TableRow { label: "C source", values: ["1", "0.1K", ...] }]
//! ```

pub mod size;
pub mod table;

pub use size::{format_size, HumanSize, SizeUnit};
pub use table::{StatsTable, TableRow, HEADERS};
