//! Source-file categories and path classification.
//!
//! A category groups file suffixes under a description ("C source",
//! "CMake file", ...). A suffix is either a dotted extension (`.cpp`) or a
//! whole file name (`Makefile`); both match the same way, as an exact
//! trailing substring of the full path.

use std::path::Path;

use serde::Serialize;

/// A named group of file suffixes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    /// Short stable identifier (e.g. "cpp")
    pub id: String,
    /// Human-readable description shown in reports
    pub description: String,
    /// Suffixes in registration order
    pub suffixes: Vec<String>,
}

impl Category {
    /// Create a category from an id, a description and its suffixes.
    pub fn new(id: &str, description: &str, suffixes: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            description: description.to_string(),
            suffixes: suffixes.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Whether the path string ends exactly with one of this category's suffixes.
    ///
    /// A suffix that only appears earlier in the path does not count:
    /// `foo.cpp.bak` is not a `.cpp` file.
    pub fn matches_str(&self, path: &str) -> bool {
        self.suffixes
            .iter()
            .any(|suffix| !suffix.is_empty() && path.ends_with(suffix.as_str()))
    }

    /// Path-typed convenience over [`Category::matches_str`].
    pub fn matches(&self, path: &Path) -> bool {
        self.matches_str(&path.to_string_lossy())
    }
}

/// Ordered, immutable set of categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTable {
    categories: Vec<Category>,
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CategoryTable {
    /// The built-in C/C++ oriented table.
    pub fn builtin() -> Self {
        Self::new(vec![
            Category::new("c", "C source", &[".c"]),
            Category::new("cpp", "C++ source", &[".cpp", ".cc", ".cxx", ".c++"]),
            Category::new("headers", "C/C++ headers", &[".h", ".hpp"]),
            Category::new("cmake", "CMake file", &["CMakeLists.txt"]),
            Category::new("makefile", "GNU Makefile", &["Makefile"]),
            Category::new("kconfig", "Linux Kconfig", &["Kconfig"]),
        ])
    }

    /// Build a table from categories, keeping their order.
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Category> {
        self.categories.get(index)
    }

    /// Index of the category with the given id.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    /// Indices of every category the path belongs to, in table order.
    ///
    /// Matching does not stop at the first hit: a path that satisfies the
    /// suffix rules of several categories is reported for each of them.
    pub fn classify(&self, path: &Path) -> Vec<usize> {
        let path_str = path.to_string_lossy();
        self.categories
            .iter()
            .enumerate()
            .filter(|(_, category)| category.matches_str(&path_str))
            .map(|(index, _)| index)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(table: &CategoryTable, path: &str) -> Vec<String> {
        table
            .classify(Path::new(path))
            .into_iter()
            .map(|i| table.get(i).unwrap().id.clone())
            .collect()
    }

    #[test]
    fn test_builtin_table_order() {
        let table = CategoryTable::builtin();
        let order: Vec<&str> = table.iter().map(|c| c.description.as_str()).collect();
        assert_eq!(
            order,
            vec![
                "C source",
                "C++ source",
                "C/C++ headers",
                "CMake file",
                "GNU Makefile",
                "Linux Kconfig"
            ]
        );
    }

    #[test]
    fn test_classify_extensions() {
        let table = CategoryTable::builtin();
        assert_eq!(ids(&table, "src/main.c"), vec!["c"]);
        assert_eq!(ids(&table, "src/a.cpp"), vec!["cpp"]);
        assert_eq!(ids(&table, "src/a.cc"), vec!["cpp"]);
        assert_eq!(ids(&table, "src/a.cxx"), vec!["cpp"]);
        assert_eq!(ids(&table, "src/a.c++"), vec!["cpp"]);
        assert_eq!(ids(&table, "include/a.h"), vec!["headers"]);
        assert_eq!(ids(&table, "include/a.hpp"), vec!["headers"]);
    }

    #[test]
    fn test_classify_whole_file_names() {
        let table = CategoryTable::builtin();
        assert_eq!(ids(&table, "proj/CMakeLists.txt"), vec!["cmake"]);
        assert_eq!(ids(&table, "proj/Makefile"), vec!["makefile"]);
        assert_eq!(ids(&table, "drivers/Kconfig"), vec!["kconfig"]);
    }

    #[test]
    fn test_suffix_must_end_the_path() {
        let table = CategoryTable::builtin();
        assert!(ids(&table, "foo.cpp.bak").is_empty());
        assert!(ids(&table, "proj/CMakeLists.txtx").is_empty());
        assert!(ids(&table, "dir.c/README").is_empty());
        assert!(ids(&table, "README.md").is_empty());
    }

    #[test]
    fn test_suffix_matches_even_when_it_also_appears_earlier() {
        let table = CategoryTable::builtin();
        assert_eq!(ids(&table, "lib.c/util.c"), vec!["c"]);
    }

    #[test]
    fn test_whole_name_suffix_is_plain_string_match() {
        // "GNUmakefile" does not end with "Makefile", "XMakefile" does
        let table = CategoryTable::builtin();
        assert!(ids(&table, "GNUmakefile").is_empty());
        assert_eq!(ids(&table, "XMakefile"), vec!["makefile"]);
    }

    #[test]
    fn test_path_matching_several_categories_reports_all() {
        let table = CategoryTable::new(vec![
            Category::new("c", "C source", &[".c"]),
            Category::new("objc", "Objective-C", &[".m"]),
            Category::new("any", "Anything ending in c", &["c"]),
        ]);
        assert_eq!(ids(&table, "x.c"), vec!["c", "any"]);
    }

    #[test]
    fn test_category_credited_once_for_overlapping_suffixes() {
        let table = CategoryTable::new(vec![Category::new("pp", "PP", &[".hpp", "pp"])]);
        assert_eq!(table.classify(Path::new("a.hpp")), vec![0]);
    }

    #[test]
    fn test_empty_suffix_never_matches() {
        let category = Category::new("empty", "Empty", &[""]);
        assert!(!category.matches(Path::new("anything")));
    }

    #[test]
    fn test_position_by_id() {
        let table = CategoryTable::builtin();
        assert_eq!(table.position("c"), Some(0));
        assert_eq!(table.position("kconfig"), Some(5));
        assert_eq!(table.position("rust"), None);
    }
}
