//! Filesystem scanning and navigation tree construction.
//!
//! Stage 1 of the docnav pipeline. Walks the documentation root and produces
//! the ordered category list the renderer consumes.
//!
//! ## Directory Structure
//!
//! docnav expects one directory per sidebar section directly under the root:
//!
//! ```text
//! docs/                            # Documentation root
//! ├── guides/                      # Category → one sidebar section
//! │   ├── 01-intro.md              # Numbered = ordered first
//! │   ├── 02-setup.md
//! │   ├── advanced/                # Subdirectory → collapsible group
//! │   │   └── 01-tuning.md
//! │   └── README.md                # Never listed
//! ├── api/
//! │   └── payments.md
//! ├── _drafts/                     # Underscore prefix = skipped entirely
//! └── .cache/                      # Hidden = skipped entirely
//! ```
//!
//! ## Inclusion Rules
//!
//! - Files: must end in `.md`, must not start with `.` or `_`, and must not
//!   be `README.md` or `INDEX.md` (case-insensitive).
//! - Directories: must not start with `.` or `_`. A directory only appears
//!   as a group if its recursive scan found at least one file; empty
//!   subtrees are pruned bottom-up. The same rule applies to categories.
//! - Siblings at every level are ordered by [`naming::sort_key`] of the raw
//!   name, files and groups interleaved.
//!
//! A missing root is not an error — it scans as "no content". Unreadable
//! entries and permission failures propagate as [`ScanError::Io`].

use crate::naming;
use crate::sections;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Document extension recognized by the scanner.
const DOC_EXTENSION: &str = "md";

/// Stems excluded from navigation regardless of numbering.
const EXCLUDED_FILES: &[&str] = &["README.MD", "INDEX.MD"];

/// One node in a category's navigation tree.
///
/// Serializes with a `type` tag (`"file"` / `"group"`) so the JSON dump
/// reads the same way the sidebar nests.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NavNode {
    File {
        /// Raw filename stem, numbering intact.
        name: String,
        /// Display title from [`naming::humanize`].
        title: String,
        /// Site-relative URL: leading `/`, extension stripped, `/` separators.
        link: String,
    },
    Group {
        /// Raw directory name, numbering intact.
        name: String,
        /// Display title from [`naming::humanize`].
        title: String,
        /// Children in sorted scan order. Never empty after pruning.
        items: Vec<NavNode>,
    },
}

/// A top-level directory under the documentation root, rendered as one
/// titled sidebar section.
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    /// Raw directory name.
    pub name: String,
    /// Section heading from the [`sections`] tables (or computed fallback).
    pub title: String,
    /// Section icon from the [`sections`] tables (or generic fallback).
    pub icon: String,
    /// Navigation tree, sorted. Never empty — empty categories are pruned.
    pub items: Vec<NavNode>,
}

/// Scan the documentation root into ordered categories.
///
/// Links are computed relative to the root's parent, so files under `docs/`
/// get `/docs/...` URLs. A missing root yields an empty category list.
pub fn scan(root: &Path) -> Result<Vec<Category>, ScanError> {
    if !root.exists() {
        return Ok(Vec::new());
    }

    // Links keep the root directory name as their first segment
    let link_base = root.parent().unwrap_or_else(|| Path::new(""));

    let mut categories = Vec::new();
    for dir in sorted_entries(root)?.into_iter().filter(|e| e.is_dir()) {
        let name = entry_name(&dir);
        if !include_dir(&name) {
            continue;
        }

        let items = scan_items(&dir, link_base)?;
        if items.is_empty() {
            continue;
        }

        categories.push(Category {
            title: sections::title_for(&name),
            icon: sections::icon_for(&name).to_string(),
            name,
            items,
        });
    }

    Ok(categories)
}

/// Recursively scan one directory into navigation nodes.
///
/// Entries are visited in sort-key order; subdirectories whose recursive
/// scan comes back empty vanish from the result.
fn scan_items(dir: &Path, link_base: &Path) -> Result<Vec<NavNode>, ScanError> {
    let mut items = Vec::new();

    for entry in sorted_entries(dir)? {
        let name = entry_name(&entry);

        if entry.is_file() {
            if !include_file(&name) {
                continue;
            }
            let stem = entry
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default();
            items.push(NavNode::File {
                title: naming::humanize(&stem),
                link: file_link(&entry, link_base),
                name: stem,
            });
        } else if entry.is_dir() && include_dir(&name) {
            let children = scan_items(&entry, link_base)?;
            if !children.is_empty() {
                items.push(NavNode::Group {
                    title: naming::humanize(&name),
                    name,
                    items: children,
                });
            }
        }
    }

    Ok(items)
}

/// List a directory's entries sorted by the sort key of their names.
fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let mut entries: Vec<PathBuf> = fs::read_dir(dir)?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|e| e.path())
        .collect();
    entries.sort_by_key(|p| naming::sort_key(&entry_name(p)));
    Ok(entries)
}

fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

fn include_file(name: &str) -> bool {
    if name.starts_with('.') || name.starts_with('_') {
        return false;
    }
    if EXCLUDED_FILES.contains(&name.to_uppercase().as_str()) {
        return false;
    }
    Path::new(name)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(DOC_EXTENSION))
}

fn include_dir(name: &str) -> bool {
    !name.starts_with('.') && !name.starts_with('_')
}

/// Site-relative link for a document: path relative to `link_base` with the
/// extension stripped, a leading `/`, and separators normalized to `/` on
/// every platform.
fn file_link(path: &Path, link_base: &Path) -> String {
    let rel = path.strip_prefix(link_base).unwrap_or(path);
    let rel = rel.with_extension("");
    let joined = rel
        .components()
        .filter(|c| !matches!(c, std::path::Component::CurDir))
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    format!("/{joined}")
}
