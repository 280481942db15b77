//! Centralized name parsing for the NNN-name convention.
//!
//! Documentation files and directories carry an optional numeric prefix
//! (`01-overview.md`, `10-advanced/`) that controls sibling ordering but
//! never appears in display titles. This module owns both halves of that
//! contract: [`sort_key`] extracts the ordering pair from the raw name, and
//! [`humanize`] produces the display title.
//!
//! ## Display Titles
//!
//! - `01-OVERVIEW` → "Overview" (prefix stripped, all-caps title-cased)
//! - `billing-setup` → "billing setup" (dashes to spaces, case untouched)
//! - `api_reference` → "api reference" (underscores to spaces)

use serde::Serialize;

/// Sort position for names without a numeric prefix, so unprefixed names
/// sort after every prefixed one. Prefixes at or above this value break
/// that ordering; real trees stay well below it.
pub const UNPREFIXED: u32 = 999;

/// Ordering pair extracted from a raw file or directory name.
///
/// Derives `Ord` so siblings compare as `(number, rest)` tuples: numeric
/// prefix first, remainder lexicographically on ties.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct SortKey {
    /// Numeric prefix, or [`UNPREFIXED`] when the name has none.
    pub number: u32,
    /// Name remainder after `NNN-`, or the full name when unprefixed.
    pub rest: String,
}

/// Extract the sort key from a raw (unstripped) name.
///
/// Names matching `NNN-rest` yield `(NNN, rest)`; everything else yields
/// `(UNPREFIXED, name)`, so `["10-b", "2-a", "z"]` orders as
/// `["2-a", "10-b", "z"]`.
pub fn sort_key(name: &str) -> SortKey {
    if let Some(dash_pos) = name.find('-') {
        let prefix = &name[..dash_pos];
        let rest = &name[dash_pos + 1..];
        if !prefix.is_empty()
            && !rest.is_empty()
            && let Ok(num) = prefix.parse::<u32>()
        {
            return SortKey {
                number: num,
                rest: rest.to_string(),
            };
        }
    }
    SortKey {
        number: UNPREFIXED,
        rest: name.to_string(),
    }
}

/// Convert a file or directory stem to a human-readable title.
///
/// Strips a leading `NNN-` prefix, replaces dashes and underscores with
/// spaces, and title-cases the result only when its letters are entirely
/// uppercase. Mixed- and lower-case names keep their casing.
pub fn humanize(stem: &str) -> String {
    let name = strip_number_prefix(stem);
    let name = name.replace(['-', '_'], " ");

    if is_all_uppercase(&name) {
        title_case(&name)
    } else {
        name
    }
}

/// Strip a leading `NNN-` from a name, if present.
fn strip_number_prefix(name: &str) -> &str {
    if let Some(dash_pos) = name.find('-') {
        let prefix = &name[..dash_pos];
        if !prefix.is_empty() && prefix.bytes().all(|b| b.is_ascii_digit()) {
            return &name[dash_pos + 1..];
        }
    }
    name
}

/// True when the string contains at least one letter and no lowercase ones.
fn is_all_uppercase(s: &str) -> bool {
    let mut has_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            has_alpha = true;
            if !c.is_uppercase() {
                return false;
            }
        }
    }
    has_alpha
}

/// Uppercase the first letter of each word, lowercase the rest.
/// Word boundaries are non-alphabetic characters; spacing is preserved.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}
