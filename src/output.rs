//! CLI output formatting.
//!
//! Each report has a pure `format_*` function returning `Vec<String>` and a
//! `print_*` wrapper that writes to stdout. Diagnostics go through `tracing`
//! on stderr; only these reports are printed to stdout.
//!
//! ## Check
//!
//! Shows the tree in the order it will be rendered, with 1-based positions:
//!
//! ```text
//! Categories
//! 001 1.setup (1 documents)
//!     001 1.intro.md
//! 002 2.tools (2 documents)
//!     001 1.editors.md
//!     002 2.terminals.md
//!
//! Found 2 categories, 3 documents in src
//! ```
//!
//! ## Build
//!
//! ```text
//! Wrote README.md (2 categories, 3 documents, 412 bytes)
//! ```

use crate::generate::GenerateSummary;
use crate::render::{sorted_categories, sorted_documents};
use crate::types::{Category, document_count};
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Format the `check` report for a scanned tree.
pub fn format_check_output(categories: &[Category], source_root: &Path) -> Vec<String> {
    let mut lines = vec!["Categories".to_string()];

    for (i, category) in sorted_categories(categories).into_iter().enumerate() {
        lines.push(format!(
            "{} {} ({} documents)",
            format_index(i + 1),
            category.name,
            category.children.len()
        ));
        for (j, document) in sorted_documents(category).into_iter().enumerate() {
            lines.push(format!("    {} {}", format_index(j + 1), document.name));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Found {} categories, {} documents in {}",
        categories.len(),
        document_count(categories),
        source_root.display()
    ));
    lines
}

/// Print the `check` report to stdout.
pub fn print_check_output(categories: &[Category], source_root: &Path) {
    for line in format_check_output(categories, source_root) {
        println!("{}", line);
    }
}

/// Format the `build` report.
pub fn format_build_output(summary: &GenerateSummary, output: &Path) -> Vec<String> {
    let verb = if summary.replaced { "Replaced" } else { "Wrote" };
    vec![format!(
        "{} {} ({} categories, {} documents, {} bytes)",
        verb,
        output.display(),
        summary.categories,
        summary.documents,
        summary.bytes_written
    )]
}

/// Print the `build` report to stdout.
pub fn print_build_output(summary: &GenerateSummary, output: &Path) {
    for line in format_build_output(summary, output) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::category;

    #[test]
    fn check_output_lists_sorted_tree() {
        let tree = vec![
            category("2.tools", &["2.terminals.md", "1.editors.md"]),
            category("1.setup", &["1.intro.md"]),
        ];
        let lines = format_check_output(&tree, Path::new("src"));
        assert_eq!(
            lines,
            vec![
                "Categories",
                "001 1.setup (1 documents)",
                "    001 1.intro.md",
                "002 2.tools (2 documents)",
                "    001 1.editors.md",
                "    002 2.terminals.md",
                "",
                "Found 2 categories, 3 documents in src",
            ]
        );
    }

    #[test]
    fn check_output_empty_tree() {
        let lines = format_check_output(&[], Path::new("src"));
        assert_eq!(lines.first().map(String::as_str), Some("Categories"));
        assert_eq!(
            lines.last().map(String::as_str),
            Some("Found 0 categories, 0 documents in src")
        );
    }

    #[test]
    fn build_output_mentions_replacement() {
        let summary = GenerateSummary {
            categories: 2,
            documents: 3,
            bytes_written: 412,
            replaced: true,
        };
        assert_eq!(
            format_build_output(&summary, Path::new("README.md")),
            vec!["Replaced README.md (2 categories, 3 documents, 412 bytes)"]
        );
    }

    #[test]
    fn build_output_fresh_file() {
        let summary = GenerateSummary {
            categories: 0,
            documents: 0,
            bytes_written: 22,
            replaced: false,
        };
        let lines = format_build_output(&summary, Path::new("README.md"));
        assert!(lines[0].starts_with("Wrote README.md"));
    }
}
