//! Markdown rendering.
//!
//! Stage 2 of the pipeline: sorts the scanned tree and serializes it into the
//! index document. Pure, no I/O.
//!
//! ## Output Format
//!
//! ```text
//! # 一些杂乱的文档
//! ## 1.setup
//! - [1.intro.md](https://github.com/Atlanstis/documents/blob/main/src/1.setup/1.intro.md)
//! ## 2.tools
//! - [1.editors.md](https://github.com/Atlanstis/documents/blob/main/src/2.tools/1.editors.md)
//! ```
//!
//! Categories and documents are ordered by their numeric index with a stable
//! sort, so entries that share an index keep scan order.
//!
//! ## Link Encoding
//!
//! Link path segments are percent-encoded with the same character set as
//! JavaScript's `encodeURI`: spaces, `%`, the unsafe ASCII punctuation and
//! all non-ASCII bytes are escaped, while URI delimiters such as `/`, `?`,
//! `#` and `:` pass through unchanged.

use crate::config::IndexConfig;
use crate::naming::sort_key;
use crate::types::{Category, Document};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Characters `encodeURI` escapes on top of controls and non-ASCII.
const URI_ESCAPE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Percent-encode `input` the way `encodeURI` does.
pub fn encode_uri(input: &str) -> String {
    utf8_percent_encode(input, URI_ESCAPE).to_string()
}

/// Categories ordered by index, ties in scan order.
pub fn sorted_categories(categories: &[Category]) -> Vec<&Category> {
    let mut sorted: Vec<&Category> = categories.iter().collect();
    sorted.sort_by_key(|c| sort_key(c.index));
    sorted
}

/// Documents of one category ordered by index, ties in scan order.
pub fn sorted_documents(category: &Category) -> Vec<&Document> {
    let mut sorted: Vec<&Document> = category.children.iter().collect();
    sorted.sort_by_key(|d| sort_key(d.index));
    sorted
}

/// Link target for one document.
pub fn document_url(base_url: &str, category: &Category, document: &Document) -> String {
    format!(
        "{}/{}/{}",
        base_url.trim_end_matches('/'),
        encode_uri(&category.name),
        encode_uri(&document.name)
    )
}

/// Render the full index document.
pub fn render(categories: &[Category], config: &IndexConfig) -> String {
    let mut content = format!("# {}\n", config.title);
    for category in sorted_categories(categories) {
        content.push_str(&format!("## {}\n", category.name));
        for document in sorted_documents(category) {
            content.push_str(&format!(
                "- [{}]({})\n",
                document.name,
                document_url(&config.base_url, category, document)
            ));
        }
    }
    content
}
