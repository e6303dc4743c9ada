//! # doc-index
//!
//! Generates a markdown table of contents for a tree of numbered
//! documentation folders. The filesystem is the data source: every `N.name`
//! directory under the content root is a category, every `N.name.md` file
//! inside it is a document, and both are ordered by their leading number.
//!
//! # Pipeline
//!
//! ```text
//! 1. Scan      src/         →  Vec<Category>   (filesystem → tree)
//! 2. Render    tree         →  String          (sort + markdown, pure)
//! 3. Write     String       →  README.md       (delete old, append new)
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Reads categories and documents, filtering by the naming convention |
//! | [`render`] | Sorts by numeric index and produces the markdown index |
//! | [`generate`] | Runs the pipeline and replaces the output file |
//! | [`config`] | Optional `docindex.toml` layered over stock defaults |
//! | [`naming`] | `N.name` / `N.name.md` pattern matching and index parsing |
//! | [`types`] | `Category` and `Document` |
//! | [`output`] | CLI report formatting |
//!
//! # Example
//!
//! ```no_run
//! use doc_index::{config::IndexConfig, generate};
//!
//! // Reads `src/`, writes `README.md`
//! let config = IndexConfig::default();
//! let summary = generate::generate(&config)?;
//! println!("{} documents indexed", summary.documents);
//! # Ok::<(), doc_index::generate::GenerateError>(())
//! ```

pub mod config;
pub mod generate;
pub mod naming;
pub mod output;
pub mod render;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
