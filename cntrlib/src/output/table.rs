//! Table-ready data structures for category statistics.
//!
//! `StatsTable` is a presentation-ready structure that can be consumed by a
//! renderer or serialized to JSON directly. It only formats data into
//! strings; all counting happens in the data stage.

use serde::{Deserialize, Serialize};

use crate::data::stats::{CategoryStats, CategoryTotals};

use super::size::format_size;

/// Column headers, in display order.
pub const HEADERS: [&str; 6] = [
    "Description",
    "No. of files",
    "Size",
    "Lines",
    "Empty lines",
    "Comment lines",
];

/// A single table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Category description
    pub label: String,
    /// Values for the remaining columns, ready for display
    pub values: Vec<String>,
}

/// Table-ready category statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsTable {
    /// Column headers: [Description, No. of files, Size, Lines, Empty lines, Comment lines]
    pub headers: Vec<String>,
    /// One row per category that received at least one file
    pub rows: Vec<TableRow>,
}

impl StatsTable {
    /// Build the table from run totals.
    ///
    /// Categories without files are left out; the rest keep table order.
    /// The "Lines" column holds actual (non-empty) lines.
    pub fn from_totals(totals: &CategoryTotals) -> Self {
        let rows = totals
            .non_empty()
            .map(|entry| TableRow {
                label: entry.category.description.clone(),
                values: format_stats(&entry.stats),
            })
            .collect();

        StatsTable {
            headers: HEADERS.iter().map(|h| h.to_string()).collect(),
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn format_stats(stats: &CategoryStats) -> Vec<String> {
    vec![
        stats.file_count.to_string(),
        format_size(stats.total_size),
        stats.actual_lines.to_string(),
        stats.empty_lines.to_string(),
        stats.comment_lines.to_string(),
    ]
}
