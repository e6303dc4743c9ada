//! Centralized filename parsing for the `N.name` convention.
//!
//! Categories and documents share one naming pattern: a run of ASCII digits,
//! a literal period, then the rest of the name. Documents additionally end in
//! `.md`:
//!
//! - `1.setup/` → category, index 1
//! - `12.tools and tricks/` → category, index 12
//! - `1.intro.md` → document, index 1
//! - `setup/`, `1/`, `1.md`, `notes.md` → skipped
//!
//! ## Index Parsing
//!
//! The index is the leading digit run of the entry's *own* name, parsed as a
//! `u64`. A digit run too long for `u64` yields `None`, which sorts after
//! every numbered entry (see [`sort_key`]).

/// Result of parsing a numbered entry name like `2.tools`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    /// Leading number, `None` if the digit run overflows `u64`.
    pub index: Option<u64>,
    /// Everything after the first period.
    pub rest: String,
}

/// Split `N.rest` into its digit run and remainder.
///
/// Returns `None` when the name does not start with at least one digit
/// followed by a period.
pub fn parse_entry_name(name: &str) -> Option<ParsedName> {
    let digits = name.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 || name.as_bytes().get(digits) != Some(&b'.') {
        return None;
    }
    Some(ParsedName {
        index: name[..digits].parse::<u64>().ok(),
        rest: name[digits + 1..].to_string(),
    })
}

/// Line terminators are never matched by `.` in the naming patterns.
const LINE_TERMINATORS: [char; 4] = ['\n', '\r', '\u{2028}', '\u{2029}'];

/// Does `name` match `^[0-9]+\..+$`?
pub fn is_category_name(name: &str) -> bool {
    parse_entry_name(name)
        .is_some_and(|p| !p.rest.is_empty() && !p.rest.contains(LINE_TERMINATORS))
}

/// Does `name` match `^[0-9]+\..+\.md$`?
///
/// At least one character must sit between the leading period and the
/// `.md` suffix, so `1.md` and `1..md` are rejected while `1.a.md` passes.
pub fn is_document_name(name: &str) -> bool {
    parse_entry_name(name)
        .filter(|p| !p.rest.contains(LINE_TERMINATORS))
        .and_then(|p| p.rest.strip_suffix(".md").map(|stem| !stem.is_empty()))
        .unwrap_or(false)
}

/// Leading index of a name, if it has one that fits in a `u64`.
pub fn parse_index(name: &str) -> Option<u64> {
    parse_entry_name(name).and_then(|p| p.index)
}

/// Sort key for an optional index: unparseable entries go last.
pub fn sort_key(index: Option<u64>) -> u64 {
    index.unwrap_or(u64::MAX)
}
