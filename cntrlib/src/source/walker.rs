//! Depth-first tree walking with base-name pruning.
//!
//! The walker enumerates one root at a time and reports what it finds to a
//! [`WalkVisitor`]. Excluded entries are pruned before they are descended
//! into, so nothing below an excluded directory is ever listed. Entries come
//! out in filesystem enumeration order; nothing is sorted.

use std::fs;
use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use crate::error::CntrError;

use super::filter::ExcludeFilter;

/// Receives the events of a walk.
pub trait WalkVisitor {
    /// Called for every entry that survives exclusion, before it is handled.
    fn visit_entry(&mut self, _path: &Path) {}

    /// Called for every regular file, symlink resolving to one, or symlink
    /// that cannot be resolved.
    fn visit_file(&mut self, path: &Path);

    /// Called when a root or directory cannot be opened. The walk goes on.
    fn skip(&mut self, error: CntrError);
}

/// Walks directory trees, pruning entries whose base name is excluded.
#[derive(Debug, Clone, Copy)]
pub struct TreeWalker<'a> {
    exclude: &'a ExcludeFilter,
}

impl<'a> TreeWalker<'a> {
    pub fn new(exclude: &'a ExcludeFilter) -> Self {
        Self { exclude }
    }

    /// Walk every root in order. A root that cannot be opened as a directory
    /// is reported to the visitor and the next root is walked.
    pub fn walk_all<P: AsRef<Path>>(&self, roots: &[P], visitor: &mut impl WalkVisitor) {
        for root in roots {
            self.walk(root.as_ref(), visitor);
        }
    }

    /// Walk a single root.
    ///
    /// The root itself is never checked against the exclusion list; only the
    /// entries found below it are.
    pub fn walk(&self, root: &Path, visitor: &mut impl WalkVisitor) {
        match fs::metadata(root) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => {
                visitor.skip(CntrError::NotADirectory(root.to_path_buf()));
                return;
            }
            Err(source) => {
                visitor.skip(CntrError::DirRead {
                    path: root.to_path_buf(),
                    source,
                });
                return;
            }
        }

        debug!(root = %root.display(), "walking");

        let walker = WalkDir::new(root).follow_links(false).into_iter();

        let exclude = self.exclude;
        for entry in
            walker.filter_entry(|e| e.depth() == 0 || !exclude.is_excluded(e.file_name()))
        {
            let entry = match entry {
                Ok(e) => e,
                Err(err) => {
                    visitor.skip(CntrError::from_walk(err, root));
                    continue;
                }
            };

            if entry.depth() == 0 {
                continue;
            }

            let path = entry.path();
            visitor.visit_entry(path);

            let file_type = entry.file_type();
            if file_type.is_dir() {
                // walkdir descends on its own
                continue;
            }

            if file_type.is_file() {
                visitor.visit_file(path);
            } else if file_type.is_symlink() {
                // Links to directories are not followed. A link that cannot be
                // resolved is handed over as a file so opening it fails loudly.
                match fs::metadata(path) {
                    Ok(meta) if meta.is_dir() => {
                        debug!(path = %path.display(), "skipping dir link")
                    }
                    Ok(meta) if !meta.is_file() => {
                        debug!(path = %path.display(), "skipping link to special file")
                    }
                    _ => visitor.visit_file(path),
                }
            } else {
                debug!(path = %path.display(), "skipping special file");
            }
        }
    }
}
