//! The in-memory documentation tree shared by scanning, rendering and
//! reporting.

use serde::Serialize;

/// One numbered top-level documentation directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    /// Leading number of the directory name (sort key only)
    pub index: Option<u64>,
    /// Full directory name, e.g. `1.setup`
    pub name: String,
    /// Documents in enumeration order; may be empty
    pub children: Vec<Document>,
}

/// One numbered markdown file inside a [`Category`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    /// Leading number of the file name (sort key only)
    pub index: Option<u64>,
    /// Full file name, e.g. `1.intro.md`
    pub name: String,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            index: crate::naming::parse_index(&name),
            name,
            children: Vec::new(),
        }
    }
}

impl Document {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            index: crate::naming::parse_index(&name),
            name,
        }
    }
}

/// Total number of documents across all categories.
pub fn document_count(categories: &[Category]) -> usize {
    categories.iter().map(|c| c.children.len()).sum()
}
