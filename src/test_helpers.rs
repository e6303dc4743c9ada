//! Shared test utilities for the doc-index test suite.
//!
//! Builds throwaway content trees and provides lookup helpers over scanned
//! [`Category`] lists.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = content_tree(&[
//!     ("1.setup", &["1.intro.md"]),
//!     ("2.tools", &["1.editors.md", "2.terminals.md"]),
//! ]);
//! let categories = scan(tmp.path()).unwrap();
//! assert_eq!(category_names(&categories), vec!["1.setup", "2.tools"]);
//! ```

use std::fs;
use tempfile::TempDir;

use crate::types::Category;

// =========================================================================
// Fixture setup
// =========================================================================

/// Create a temp content root with one directory per `(category, documents)`
/// pair. Each document is written with a placeholder heading.
pub fn content_tree(layout: &[(&str, &[&str])]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for (category, documents) in layout {
        let dir = tmp.path().join(category);
        fs::create_dir_all(&dir).unwrap();
        for doc in *documents {
            fs::write(dir.join(doc), format!("# {doc}\n")).unwrap();
        }
    }
    tmp
}

/// Build a category in memory, bypassing the filesystem.
pub fn category(name: &str, documents: &[&str]) -> Category {
    let mut category = Category::new(name);
    category.children = documents
        .iter()
        .map(|d| crate::types::Document::new(*d))
        .collect();
    category
}

// =========================================================================
// Lookups — panics with a clear message on miss
// =========================================================================

/// Find a category by full directory name. Panics if not found.
pub fn find_category<'a>(categories: &'a [Category], name: &str) -> &'a Category {
    categories
        .iter()
        .find(|c| c.name == name)
        .unwrap_or_else(|| {
            let names = category_names(categories);
            panic!("category '{name}' not found. Available: {names:?}")
        })
}

/// All category names in list order.
pub fn category_names(categories: &[Category]) -> Vec<&str> {
    categories.iter().map(|c| c.name.as_str()).collect()
}

/// All document names of one category in list order.
pub fn document_names(category: &Category) -> Vec<&str> {
    category.children.iter().map(|d| d.name.as_str()).collect()
}
