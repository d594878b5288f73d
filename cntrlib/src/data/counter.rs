//! High-level counting API.
//!
//! This module ties the pipeline together: walk the search roots, classify
//! each regular file, scan the ones that belong to a category and merge the
//! result into that category's totals.
//!
//! Per-item failures (a root that is not a directory, an unreadable
//! directory or file) never abort a run. They are recorded in
//! [`CountResult::skipped`] for the caller to report and the walk moves on.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::error::CntrError;
use crate::source::category::CategoryTable;
use crate::source::filter::ExcludeFilter;
use crate::source::walker::{TreeWalker, WalkVisitor};

use super::scanner::scan_file;
use super::stats::CategoryTotals;

/// Options for counting.
#[derive(Debug, Clone, Default)]
pub struct CountOptions {
    /// Base names pruned during the walk
    pub exclude: ExcludeFilter,
    /// Categories files are sorted into
    pub categories: CategoryTable,
}

impl CountOptions {
    /// Create new default options (built-in categories, no exclusions).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the exclusion filter.
    pub fn exclude(mut self, exclude: ExcludeFilter) -> Self {
        self.exclude = exclude;
        self
    }

    /// Use a custom category table.
    pub fn categories(mut self, categories: CategoryTable) -> Self {
        self.categories = categories;
        self
    }
}

/// A path that could not be opened or read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedEntry {
    pub path: PathBuf,
    /// Human-readable diagnostic
    pub reason: String,
}

impl From<&CntrError> for SkippedEntry {
    fn from(error: &CntrError) -> Self {
        Self {
            path: error.path().to_path_buf(),
            reason: error.to_string(),
        }
    }
}

/// Result of counting one or more trees.
#[derive(Debug, Clone, Serialize)]
pub struct CountResult {
    /// Per-category totals, in table order
    pub totals: CategoryTotals,
    /// Regular files reached by the walk, matched or not
    pub files_seen: u64,
    /// Files that matched at least one category and were scanned
    pub files_counted: u64,
    /// Roots, directories and files that were skipped
    pub skipped: Vec<SkippedEntry>,
}

impl CountResult {
    /// Create an empty result for a category table.
    pub fn new(table: &CategoryTable) -> Self {
        Self {
            totals: CategoryTotals::new(table),
            files_seen: 0,
            files_counted: 0,
            skipped: Vec::new(),
        }
    }
}

/// Walk visitor that classifies, scans and aggregates.
struct Counter<'a, F: FnMut(&Path)> {
    table: &'a CategoryTable,
    result: CountResult,
    on_entry: F,
}

impl<F: FnMut(&Path)> Counter<'_, F> {
    fn record_skip(&mut self, error: CntrError) {
        debug!(path = %error.path().display(), "skipped: {error}");
        self.result.skipped.push(SkippedEntry::from(&error));
    }
}

impl<F: FnMut(&Path)> WalkVisitor for Counter<'_, F> {
    fn visit_entry(&mut self, path: &Path) {
        (self.on_entry)(path);
    }

    fn visit_file(&mut self, path: &Path) {
        self.result.files_seen += 1;

        let hits = self.table.classify(path);
        if hits.is_empty() {
            return;
        }

        // One scan serves every matching category; nothing is merged unless
        // the whole file was read.
        match scan_file(path) {
            Ok(stats) => {
                debug!(path = %path.display(), lines = stats.total_lines, "scanned");
                self.result.files_counted += 1;
                for index in hits {
                    self.result.totals.merge(index, &stats);
                }
            }
            Err(error) => self.record_skip(error),
        }
    }

    fn skip(&mut self, error: CntrError) {
        self.record_skip(error);
    }
}

/// Count every categorized file under `roots`.
///
/// Roots are walked in order. Each one must be a directory; anything else is
/// reported as skipped and the next root is walked.
///
/// # Example
///
/// ```rust
/// use cntrlib::{count_paths, CountOptions, ExcludeFilter};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// fs::write(dir.path().join("main.c"), "int main(void)\n{\n\n}\n").unwrap();
/// fs::create_dir(dir.path().join("build")).unwrap();
/// fs::write(dir.path().join("build/gen.c"), "int gen;\n").unwrap();
///
/// let options = CountOptions::new().exclude(ExcludeFilter::new().exclude("build"));
/// let result = count_paths(&[dir.path()], &options);
///
/// let c = result.totals.by_id("c").unwrap();
/// assert_eq!(c.file_count, 1);
/// assert_eq!(c.actual_lines, 3);
/// assert_eq!(c.empty_lines, 1);
/// ```
pub fn count_paths<P: AsRef<Path>>(roots: &[P], options: &CountOptions) -> CountResult {
    count_paths_with_progress(roots, options, |_| {})
}

/// Like [`count_paths`], calling `on_entry` for every entry the walk visits.
pub fn count_paths_with_progress<P, F>(
    roots: &[P],
    options: &CountOptions,
    on_entry: F,
) -> CountResult
where
    P: AsRef<Path>,
    F: FnMut(&Path),
{
    let mut counter = Counter {
        table: &options.categories,
        result: CountResult::new(&options.categories),
        on_entry,
    };

    TreeWalker::new(&options.exclude).walk_all(roots, &mut counter);

    let result = counter.result;
    info!(
        files_seen = result.files_seen,
        files_counted = result.files_counted,
        skipped = result.skipped.len(),
        "count finished"
    );
    result
}
