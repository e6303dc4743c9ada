//! Index configuration module.
//!
//! Handles loading, validating, and merging `docindex.toml`. Stock defaults
//! reproduce the behavior of running the tool with no configuration at all:
//! read `src/`, write `README.md`, link into the upstream documents
//! repository.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! source = "src"                # Content root holding numbered categories
//! output = "README.md"          # Generated table of contents
//! title = "一些杂乱的文档"          # Text of the single top-level heading
//! base_url = "https://github.com/Atlanstis/documents/blob/main/src"
//! ```
//!
//! Only the values change; the layout of the generated markdown is fixed.
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up in the working directory when `--config` is absent.
pub const CONFIG_FILE_NAME: &str = "docindex.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Index configuration loaded from `docindex.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndexConfig {
    /// Content root containing the numbered category directories.
    pub source: PathBuf,
    /// File the index is written to.
    pub output: PathBuf,
    /// Text of the `# ` heading at the top of the index.
    pub title: String,
    /// Prefix every document link is built on, without the category segment.
    pub base_url: String,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("src"),
            output: PathBuf::from("README.md"),
            title: "一些杂乱的文档".to_string(),
            base_url: "https://github.com/Atlanstis/documents/blob/main/src".to_string(),
        }
    }
}

impl IndexConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::Validation("title must not be empty".into()));
        }
        if self.source.as_os_str().is_empty() {
            return Err(ConfigError::Validation("source must not be empty".into()));
        }
        if self.output.as_os_str().is_empty() {
            return Err(ConfigError::Validation("output must not be empty".into()));
        }
        if !(self.base_url.starts_with("https://") || self.base_url.starts_with("http://")) {
            return Err(ConfigError::Validation(
                "base_url must start with http:// or https://".into(),
            ));
        }
        Ok(())
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(IndexConfig::default())
        .map_err(|e| ConfigError::Validation(format!("cannot serialize defaults: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key-by-key; any other overlay value replaces the base value.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Read a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Load config from `path`, layered over the stock defaults.
///
/// A missing file is not an error: the defaults are returned as-is.
pub fn load_config(path: &Path) -> Result<IndexConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let merged = match load_raw_config(path)? {
        Some(overlay) => merge_toml(base, overlay),
        None => base,
    };
    let config: IndexConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `docindex.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r#"# doc-index configuration
# =======================
# All settings are optional. Values shown below are the defaults.
# Unknown keys cause an error.

# Content root. Every `N.name` directory inside becomes a category and
# every `N.name.md` file inside a category becomes a document.
source = "src"

# Generated table of contents. Replaced on every run.
output = "README.md"

# Text of the top-level `# ` heading.
title = "一些杂乱的文档"

# Document links are `<base_url>/<category>/<document>`, percent-encoded.
base_url = "https://github.com/Atlanstis/documents/blob/main/src"
"#
}
