//! # docnav
//!
//! Sidebar navigation generator for static documentation sites. Your
//! filesystem is the data source: top-level directories become sidebar
//! sections, nested directories become collapsible groups, and markdown
//! files become links, ordered by numeric prefix.
//!
//! # Architecture: One Pipeline, Three Stages
//!
//! ```text
//! 1. Scan     docs/       →  Vec<Category>      (filesystem → node tree)
//! 2. Render   categories  →  sidebar HTML       (pure string assembly)
//! 3. Patch    HTML        →  _layouts/default.html   (update mode only)
//! ```
//!
//! The stages are independent: scanning never renders, rendering never
//! touches the filesystem, and patching only ever rewrites the one layout
//! file. Preview mode stops after stage 2 and prints the markup for review.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1 — walks the docs root, applies inclusion rules, builds ordered categories |
//! | [`render`] | Stage 2 — converts the node tree to indented sidebar HTML |
//! | [`patch`] | Stage 3 — splices rendered markup between the layout's sidebar markers |
//! | [`naming`] | `NNN-name` convention: sort keys and display titles |
//! | [`sections`] | Compiled-in icon/title tables per category, with fallbacks |
//! | [`output`] | CLI output formatting — pure `format_*` functions plus print wrappers |
//!
//! # Design Decisions
//!
//! ## Filesystem Is the Source of Truth
//!
//! There is no navigation config file to keep in sync. Adding a document or
//! directory under `docs/` and re-running the tool is the whole workflow.
//! Ordering comes from numeric filename prefixes (`01-intro.md`), parsed by
//! [`naming::sort_key`]; the prefix never appears in displayed titles.
//!
//! ## Indented Text, Not a DOM
//!
//! The renderer emits an indentation-sensitive HTML fragment because the
//! output is spliced verbatim into a hand-maintained layout file. The
//! generated region has to diff cleanly against the surrounding template,
//! so the renderer controls leading whitespace exactly rather than going
//! through an HTML builder.
//!
//! ## Rebuilt From Scratch Every Run
//!
//! No caching, no incremental regeneration, no state between invocations.
//! Documentation trees are small enough that a full rescan is instant, and
//! a rebuild-from-zero tool cannot drift out of sync with the filesystem.

pub mod naming;
pub mod output;
pub mod patch;
pub mod render;
pub mod scan;
pub mod sections;
