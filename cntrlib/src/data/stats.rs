//! Core data structures for per-category statistics.
//!
//! Counting happens at two levels:
//!
//! - **LineStats**: what one file contributes (bytes and lines)
//! - **CategoryStats**: running totals for one category, including how many
//!   files were merged into it
//!
//! `CategoryTotals` holds one `CategoryStats` per category of a table and is
//! the only thing mutated during a walk. Every level keeps
//! `actual_lines + empty_lines == total_lines`.
//!
//! `comment_lines` is carried through every level but nothing increments it;
//! lines are only ever classified as empty or actual.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};

use crate::source::category::{Category, CategoryTable};

/// Byte and line counts for a single file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineStats {
    /// Bytes read, line terminators included
    pub total_size: u64,
    /// Every line, including a final line without terminator
    pub total_lines: u64,
    /// Lines with at least one non-whitespace byte
    pub actual_lines: u64,
    /// Whitespace-only and zero-length lines
    pub empty_lines: u64,
    /// Reserved, always zero
    pub comment_lines: u64,
}

impl LineStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one line of `len` bytes.
    pub fn push_line(&mut self, len: u64, empty: bool) {
        self.total_lines += 1;
        self.total_size += len;
        if empty {
            self.empty_lines += 1;
        } else {
            self.actual_lines += 1;
        }
    }
}

impl Add for LineStats {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            total_size: self.total_size + other.total_size,
            total_lines: self.total_lines + other.total_lines,
            actual_lines: self.actual_lines + other.actual_lines,
            empty_lines: self.empty_lines + other.empty_lines,
            comment_lines: self.comment_lines + other.comment_lines,
        }
    }
}

impl AddAssign for LineStats {
    fn add_assign(&mut self, other: Self) {
        self.total_size += other.total_size;
        self.total_lines += other.total_lines;
        self.actual_lines += other.actual_lines;
        self.empty_lines += other.empty_lines;
        self.comment_lines += other.comment_lines;
    }
}

/// Running totals for one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStats {
    /// Files merged into this category
    pub file_count: u64,
    /// Summed bytes of those files
    pub total_size: u64,
    pub total_lines: u64,
    pub actual_lines: u64,
    pub empty_lines: u64,
    /// Reserved, always zero
    pub comment_lines: u64,
}

impl CategoryStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one scanned file into the totals.
    pub fn add_file(&mut self, file: &LineStats) {
        self.file_count += 1;
        self.total_size += file.total_size;
        self.total_lines += file.total_lines;
        self.actual_lines += file.actual_lines;
        self.empty_lines += file.empty_lines;
        self.comment_lines += file.comment_lines;
    }

    /// True until a file has been merged.
    pub fn is_empty(&self) -> bool {
        self.file_count == 0
    }
}

impl Add for CategoryStats {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            file_count: self.file_count + other.file_count,
            total_size: self.total_size + other.total_size,
            total_lines: self.total_lines + other.total_lines,
            actual_lines: self.actual_lines + other.actual_lines,
            empty_lines: self.empty_lines + other.empty_lines,
            comment_lines: self.comment_lines + other.comment_lines,
        }
    }
}

impl AddAssign for CategoryStats {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

/// One category together with its totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryEntry {
    pub category: Category,
    pub stats: CategoryStats,
}

/// Per-category accumulator for a whole run.
///
/// Built zeroed from a category table at the start of a run and owned by the
/// caller. The set of categories never changes afterwards; only the totals do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotals {
    entries: Vec<CategoryEntry>,
}

impl CategoryTotals {
    /// Zeroed totals for every category of `table`, in table order.
    pub fn new(table: &CategoryTable) -> Self {
        Self {
            entries: table
                .iter()
                .map(|category| CategoryEntry {
                    category: category.clone(),
                    stats: CategoryStats::new(),
                })
                .collect(),
        }
    }

    /// Merge one scanned file into the category at `index`.
    ///
    /// Indices come from [`CategoryTable::classify`] on the same table.
    pub fn merge(&mut self, index: usize, file: &LineStats) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.stats.add_file(file);
        }
    }

    pub fn get(&self, index: usize) -> Option<&CategoryStats> {
        self.entries.get(index).map(|e| &e.stats)
    }

    /// Totals of the category with the given id.
    pub fn by_id(&self, id: &str) -> Option<&CategoryStats> {
        self.entries
            .iter()
            .find(|e| e.category.id == id)
            .map(|e| &e.stats)
    }

    /// All categories with their totals, in table order.
    pub fn iter(&self) -> impl Iterator<Item = &CategoryEntry> {
        self.entries.iter()
    }

    /// Only categories that received at least one file, in table order.
    pub fn non_empty(&self) -> impl Iterator<Item = &CategoryEntry> {
        self.entries.iter().filter(|e| !e.stats.is_empty())
    }

    /// Sum over all categories. Files credited to several categories are
    /// counted once per category.
    pub fn grand_total(&self) -> CategoryStats {
        self.entries
            .iter()
            .fold(CategoryStats::new(), |acc, e| acc + e.stats)
    }
}
