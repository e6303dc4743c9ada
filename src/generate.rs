//! Index file generation.
//!
//! Runs the whole pipeline for one invocation:
//!
//! ```text
//! scan(source) → render → remove_existing(output) → append(output)
//! ```
//!
//! Scanning and rendering finish before the output is touched, so a run that
//! fails early (missing content root, unreadable category) leaves any
//! existing index exactly as it was. Once rendering succeeds the old file is
//! deleted and the new content appended, giving a full replacement on every
//! run. There is no atomic rename: an interrupted write can leave the index
//! partial or absent until the next run.

use crate::config::IndexConfig;
use crate::render;
use crate::scan::{self, ScanError};
use crate::types::document_count;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),
}

/// What a successful run produced, for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSummary {
    pub categories: usize,
    pub documents: usize,
    pub bytes_written: usize,
    /// Whether an earlier index was deleted before writing
    pub replaced: bool,
}

/// Scan `config.source`, render the index and replace `config.output` with it.
pub fn generate(config: &IndexConfig) -> Result<GenerateSummary, GenerateError> {
    let source = config.source.as_path();
    let output = config.output.as_path();
    let categories = scan::scan(source)?;
    let documents = document_count(&categories);
    info!(
        source = %source.display(),
        categories = categories.len(),
        documents,
        "scanned content root"
    );

    let content = render::render(&categories, config);

    let replaced = remove_existing(output)?;
    append_output(output, &content)?;
    info!(output = %output.display(), bytes = content.len(), "wrote index");

    Ok(GenerateSummary {
        categories: categories.len(),
        documents,
        bytes_written: content.len(),
        replaced,
    })
}

/// Delete `path` if it exists. Returns whether anything was removed.
pub fn remove_existing(path: &Path) -> Result<bool, GenerateError> {
    if !path.try_exists()? {
        return Ok(false);
    }
    info!(path = %path.display(), "replacing existing index");
    fs::remove_file(path)?;
    Ok(true)
}

/// Append `content` to `path`, creating the file if needed.
pub fn append_output(path: &Path, content: &str) -> Result<(), GenerateError> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(content.as_bytes())?;
    file.flush()?;
    Ok(())
}
