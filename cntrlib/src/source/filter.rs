//! Exclusion filtering by base name.
//!
//! Exclusions are compared against the final component of each directory
//! entry by exact string equality. They are neither glob patterns nor path
//! prefixes: `build` prunes every entry named `build` at any depth, while
//! `src/build` can never match because no base name contains a separator.

use std::ffi::OsStr;

use serde::Serialize;

/// Configuration for pruning entries during a walk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExcludeFilter {
    /// Excluded base names, in the order they were given
    pub names: Vec<String>,
}

impl ExcludeFilter {
    /// Create an empty filter (excludes nothing).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an excluded base name.
    pub fn exclude(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    /// Add multiple excluded base names.
    pub fn exclude_many<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Check whether an entry with this base name must be skipped.
    pub fn is_excluded(&self, base_name: &OsStr) -> bool {
        if self.names.is_empty() {
            return false;
        }
        let name = base_name.to_string_lossy();
        self.names.iter().any(|excluded| *excluded == name)
    }
}
