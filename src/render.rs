//! Sidebar HTML assembly.
//!
//! Stage 2 of the docnav pipeline. Pure string building — no I/O — so the
//! same scanned tree always renders to byte-identical markup. The output is
//! an indented HTML fragment meant to sit inside an existing layout's
//! `<aside>`:
//!
//! ```text
//!         <nav class="sidebar-nav">
//!             <div class="sidebar-nav-title">📖 GUIDES</div>
//!             <ul>
//!                 <li><a href="/docs/guides/01-intro">intro</a></li>
//!                 <li class="nav-group">
//!                     <div class="nav-group-toggle" data-target="guides-10-advanced-group">
//!                         <span>advanced</span>
//!                         <span class="toggle-icon">▼</span>
//!                     </div>
//!                     <ul class="nav-group-items" id="guides-10-advanced-group">
//!                         ...
//!                     </ul>
//!                 </li>
//!             </ul>
//!         </nav>
//! ```
//!
//! Indentation is part of the contract: the fragment is spliced verbatim
//! into the layout file, so nesting depth is expressed as leading spaces,
//! not DOM structure alone. Group lists indent 8 columns past their parent.
//!
//! A fixed Resources section with three static links closes every sidebar,
//! independent of scanned content.

use crate::scan::{Category, NavNode};

/// Extra indentation for a group's child list relative to its own line.
const GROUP_CHILD_INDENT: usize = 8;

/// Indentation of item markup inside a section's `<ul>`.
const SECTION_ITEM_INDENT: usize = 16;

/// Static links appended as the final Resources section.
const RESOURCE_LINKS: &[(&str, &str)] = &[
    ("/privacy/en/", "Privacy Policy"),
    ("/CONTRIBUTING", "Contributing"),
    ("/SITEMAP", "Site Map"),
];

/// Render a sequence of navigation nodes as nested `<li>` markup.
///
/// `section` keys the collapsible-group ids; `indent` is the column of the
/// generated lines. Output order mirrors input order.
pub fn render_items(section: &str, items: &[NavNode], indent: usize) -> String {
    let mut lines = Vec::new();
    let pad = " ".repeat(indent);

    for item in items {
        match item {
            NavNode::File { title, link, .. } => {
                lines.push(format!(r#"{pad}<li><a href="{link}">{title}</a></li>"#));
            }
            NavNode::Group {
                name,
                title,
                items: children,
            } => {
                let group_id = format!("{section}-{name}-group").replace('/', "-");
                lines.push(format!(r#"{pad}<li class="nav-group">"#));
                lines.push(format!(
                    r#"{pad}    <div class="nav-group-toggle" data-target="{group_id}">"#
                ));
                lines.push(format!("{pad}        <span>{title}</span>"));
                lines.push(format!(
                    "{pad}        <span class=\"toggle-icon\">\u{25BC}</span>"
                ));
                lines.push(format!("{pad}    </div>"));
                lines.push(format!(
                    r#"{pad}    <ul class="nav-group-items" id="{group_id}">"#
                ));
                lines.push(render_items(section, children, indent + GROUP_CHILD_INDENT));
                lines.push(format!("{pad}    </ul>"));
                lines.push(format!("{pad}</li>"));
            }
        }
    }

    lines.join("\n")
}

/// Render one category as a titled `<nav>` section.
fn render_section(category: &Category) -> String {
    format!(
        "        <nav class=\"sidebar-nav\">\n            \
         <div class=\"sidebar-nav-title\">{} {}</div>\n            \
         <ul>\n{}\n            </ul>\n        </nav>",
        category.icon,
        category.title,
        render_items(&category.name, &category.items, SECTION_ITEM_INDENT)
    )
}

/// Render the fixed Resources section.
fn render_resources() -> String {
    let links: Vec<String> = RESOURCE_LINKS
        .iter()
        .map(|(href, label)| format!(r#"                <li><a href="{href}">{label}</a></li>"#))
        .collect();
    format!(
        "        <nav class=\"sidebar-nav\">\n            \
         <div class=\"sidebar-nav-title\">\u{1F4CB} RESOURCES</div>\n            \
         <ul>\n{}\n            </ul>\n        </nav>",
        links.join("\n")
    )
}

/// Render the complete sidebar: one section per category, in input order,
/// with the static Resources section always last.
pub fn render_sidebar(categories: &[Category]) -> String {
    let mut sections: Vec<String> = categories.iter().map(render_section).collect();
    sections.push(render_resources());
    sections.join("\n\n")
}
