//! Filesystem scanning.
//!
//! Stage 1 of the pipeline. Reads the content root and produces the
//! unsorted [`Category`] tree that the renderer consumes.
//!
//! ## Directory Structure
//!
//! ```text
//! src/                             # Content root
//! ├── 1.setup/                     # Category (N.name directory)
//! │   ├── 1.intro.md               # Document (N.name.md file)
//! │   ├── 2.install.md
//! │   └── notes.txt                # Skipped: not N.name.md
//! ├── 2.tools/
//! │   ├── 1.editors.md
//! │   └── 10.terminals.md
//! ├── 3.empty/                     # Category with no documents (still listed)
//! ├── drafts/                      # Skipped: no number prefix
//! └── 4.stray.md                   # Skipped: files are never categories
//! ```
//!
//! Only two levels are read. Anything deeper than a document is ignored.
//!
//! ## Ordering
//!
//! Entries are enumerated sorted by file name so a scan is deterministic
//! across platforms. Ordering by numeric index happens later, in
//! [`crate::render`].

use crate::naming::{is_category_name, is_document_name};
use crate::types::{Category, Document};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Cannot read directory: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Content root is not a directory: {0}")]
    MissingRoot(PathBuf),
}

/// Scan `root` for numbered categories and their numbered documents.
pub fn scan(root: &Path) -> Result<Vec<Category>, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::MissingRoot(root.to_path_buf()));
    }

    let mut categories = Vec::new();
    for entry in list_entries(root)? {
        let Some(name) = entry.file_name().to_str() else {
            debug!(path = %entry.path().display(), "skipping non-UTF-8 entry");
            continue;
        };
        if !entry.file_type().is_dir() || !is_category_name(name) {
            debug!(entry = name, "skipping entry: not a category directory");
            continue;
        }

        let mut category = Category::new(name);
        category.children = scan_category(entry.path())?;
        debug!(
            category = %category.name,
            documents = category.children.len(),
            "scanned category"
        );
        categories.push(category);
    }

    Ok(categories)
}

/// Collect the documents directly inside one category directory.
fn scan_category(dir: &Path) -> Result<Vec<Document>, ScanError> {
    let mut documents = Vec::new();
    for entry in list_entries(dir)? {
        let Some(name) = entry.file_name().to_str() else {
            debug!(path = %entry.path().display(), "skipping non-UTF-8 entry");
            continue;
        };
        if !entry.file_type().is_file() || !is_document_name(name) {
            debug!(entry = name, "skipping entry: not a document file");
            continue;
        }
        documents.push(Document::new(name));
    }
    Ok(documents)
}

/// Immediate children of `dir`, sorted by file name. Symlinks are followed
/// so a linked category or document counts as the real thing.
///
/// Only a failure to read `dir` itself is an error. An entry that cannot be
/// resolved (a dangling symlink, an editor lock file) is skipped.
fn list_entries(dir: &Path) -> Result<Vec<DirEntry>, ScanError> {
    let mut entries = Vec::new();
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();
    for result in walker {
        match result {
            Ok(entry) => entries.push(entry),
            Err(e) if e.depth() == 0 => return Err(e.into()),
            Err(e) => debug!(error = %e, "skipping unreadable entry"),
        }
    }
    Ok(entries)
}
