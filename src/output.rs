//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Output is information-centric, not file-centric. Every entity (category,
//! group, document) leads with its positional index and display title;
//! filesystem detail appears as an indented `Link:` context line. The scan
//! summary reads as a content inventory:
//!
//! ```text
//! Sections
//! 001 GUIDES
//!     001 intro
//!         Link: /docs/guides/01-intro
//!     002 advanced
//!         001 tuning
//!             Link: /docs/guides/10-advanced/01-tuning
//! ```
//!
//! # Architecture
//!
//! Each display has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::scan::{Category, NavNode};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{pos:0>3}")
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format the scanned category tree as a summary listing.
pub fn format_scan_output(categories: &[Category]) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Sections".to_string());
    if categories.is_empty() {
        lines.push("    (no documentation found)".to_string());
        return lines;
    }

    for (i, category) in categories.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), category.title));
        format_items(&category.items, 1, &mut lines);
    }

    let (files, groups) = count_nodes(categories);
    lines.push(String::new());
    lines.push(format!(
        "{} sections, {} groups, {} documents",
        categories.len(),
        groups,
        files
    ));

    lines
}

fn format_items(items: &[NavNode], depth: usize, lines: &mut Vec<String>) {
    for (i, item) in items.iter().enumerate() {
        let pad = indent(depth);
        match item {
            NavNode::File { title, link, .. } => {
                lines.push(format!("{}{} {}", pad, format_index(i + 1), title));
                lines.push(format!("{}    Link: {}", pad, link));
            }
            NavNode::Group {
                title,
                items: children,
                ..
            } => {
                lines.push(format!("{}{} {}", pad, format_index(i + 1), title));
                format_items(children, depth + 1, lines);
            }
        }
    }
}

/// Count document and group nodes across all categories.
fn count_nodes(categories: &[Category]) -> (usize, usize) {
    fn walk(items: &[NavNode], files: &mut usize, groups: &mut usize) {
        for item in items {
            match item {
                NavNode::File { .. } => *files += 1,
                NavNode::Group { items, .. } => {
                    *groups += 1;
                    walk(items, files, groups);
                }
            }
        }
    }
    let mut files = 0;
    let mut groups = 0;
    for category in categories {
        walk(&category.items, &mut files, &mut groups);
    }
    (files, groups)
}

/// Print scan output to stdout.
pub fn print_scan_output(categories: &[Category]) {
    for line in format_scan_output(categories) {
        println!("{}", line);
    }
}

/// Format the preview display: status line, then the rendered markup inside
/// a delimited block for copy-paste review.
pub fn format_preview_output(sidebar_html: &str) -> Vec<String> {
    let rule = "=".repeat(60);
    let mut lines = Vec::new();
    lines.push(rule.clone());
    lines.push("GENERATED SIDEBAR HTML:".to_string());
    lines.push(rule.clone());
    lines.extend(sidebar_html.lines().map(str::to_string));
    lines.push(rule);
    lines.push(String::new());
    lines.push("To update the layout file, run:".to_string());
    lines.push("    docnav update".to_string());
    lines
}

/// Print preview output to stdout.
pub fn print_preview_output(sidebar_html: &str) {
    for line in format_preview_output(sidebar_html) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(title: &str, link: &str) -> NavNode {
        NavNode::File {
            name: title.to_string(),
            title: title.to_string(),
            link: link.to_string(),
        }
    }

    fn sample_categories() -> Vec<Category> {
        vec![Category {
            name: "guides".to_string(),
            title: "GUIDES".to_string(),
            icon: "\u{1F4D6}".to_string(),
            items: vec![
                file("intro", "/docs/guides/01-intro"),
                NavNode::Group {
                    name: "10-advanced".to_string(),
                    title: "advanced".to_string(),
                    items: vec![file("tuning", "/docs/guides/10-advanced/01-tuning")],
                },
            ],
        }]
    }

    #[test]
    fn format_index_pads_to_three_digits() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(100), "100");
    }

    #[test]
    fn indent_four_spaces_per_level() {
        assert_eq!(indent(0), "");
        assert_eq!(indent(2), "        ");
    }

    #[test]
    fn scan_output_lists_sections_and_documents() {
        let lines = format_scan_output(&sample_categories());
        assert_eq!(lines[0], "Sections");
        assert_eq!(lines[1], "001 GUIDES");
        assert_eq!(lines[2], "    001 intro");
        assert_eq!(lines[3], "        Link: /docs/guides/01-intro");
        assert_eq!(lines[4], "    002 advanced");
        assert_eq!(lines[5], "        001 tuning");
    }

    #[test]
    fn scan_output_summary_counts() {
        let lines = format_scan_output(&sample_categories());
        assert_eq!(lines.last().unwrap(), "1 sections, 1 groups, 2 documents");
    }

    #[test]
    fn scan_output_empty_tree() {
        let lines = format_scan_output(&[]);
        assert_eq!(lines, vec!["Sections", "    (no documentation found)"]);
    }

    #[test]
    fn preview_output_wraps_markup_in_rules() {
        let lines = format_preview_output("<nav>x</nav>");
        assert_eq!(lines[0], "=".repeat(60));
        assert_eq!(lines[1], "GENERATED SIDEBAR HTML:");
        assert!(lines.contains(&"<nav>x</nav>".to_string()));
        assert!(lines.contains(&"    docnav update".to_string()));
    }
}
