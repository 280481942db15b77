//! In-place layout patching.
//!
//! Stage 3 of the docnav pipeline (update mode only). The layout file keeps
//! a recognizable marker pair — the sidebar `<aside>` element — and the
//! patcher replaces everything from the begin marker through just before
//! the end marker with freshly rendered markup. The rest of the file is
//! left byte-identical.
//!
//! Marker search is a plain substring scan; the end marker is looked up
//! after the begin marker so an earlier stray `</aside>` cannot corrupt
//! the layout. Any failure (missing file, missing marker) is reported
//! without touching the file. There is no backup and no atomic write; a
//! crash mid-write loses the layout, which is acceptable for a file that
//! lives in version control.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Opening of the sidebar element; replacement begins here.
pub const BEGIN_MARKER: &str = r#"<aside class="sidebar">"#;

/// Close of the sidebar element; replacement ends just before it.
pub const END_MARKER: &str = "</aside>";

#[derive(Error, Debug)]
pub enum PatchError {
    #[error("layout file not found: {0}")]
    LayoutMissing(PathBuf),
    #[error("marker {0:?} not found in layout file")]
    MarkerNotFound(&'static str),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Splice `sidebar_html` into the layout file between the sidebar markers,
/// rewriting the file in place.
pub fn patch_layout(layout: &Path, sidebar_html: &str) -> Result<(), PatchError> {
    if !layout.exists() {
        return Err(PatchError::LayoutMissing(layout.to_path_buf()));
    }

    let content = fs::read_to_string(layout)?;
    let patched = splice(&content, sidebar_html)?;
    fs::write(layout, patched)?;
    Ok(())
}

/// Pure marker replacement, separated from the file I/O for testability.
fn splice(content: &str, sidebar_html: &str) -> Result<String, PatchError> {
    let begin = content
        .find(BEGIN_MARKER)
        .ok_or(PatchError::MarkerNotFound(BEGIN_MARKER))?;
    let end = content[begin..]
        .find(END_MARKER)
        .map(|offset| begin + offset)
        .ok_or(PatchError::MarkerNotFound(END_MARKER))?;

    Ok(format!(
        "{}{}\n{}\n    {}",
        &content[..begin],
        BEGIN_MARKER,
        sidebar_html,
        &content[end..]
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const LAYOUT: &str = "<html>\n<body>\n\
        <aside class=\"sidebar\">\n        <nav>old</nav>\n    </aside>\n\
        <main>content</main>\n</body>\n</html>\n";

    #[test]
    fn splice_replaces_between_markers() {
        let patched = splice(LAYOUT, "        <nav>new</nav>").unwrap();
        assert!(patched.contains("<nav>new</nav>"));
        assert!(!patched.contains("<nav>old</nav>"));
    }

    #[test]
    fn splice_preserves_surrounding_content() {
        let patched = splice(LAYOUT, "        <nav>new</nav>").unwrap();
        assert!(patched.starts_with("<html>\n<body>\n"));
        assert!(patched.contains("<main>content</main>"));
        assert!(patched.ends_with("</html>\n"));
    }

    #[test]
    fn splice_keeps_both_markers() {
        let patched = splice(LAYOUT, "x").unwrap();
        assert!(patched.contains(BEGIN_MARKER));
        assert!(patched.contains(END_MARKER));
    }

    #[test]
    fn splice_is_stable_under_repeated_patching() {
        let once = splice(LAYOUT, "        <nav>new</nav>").unwrap();
        let twice = splice(&once, "        <nav>new</nav>").unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn missing_begin_marker_is_error() {
        let result = splice("<html><body></body></html>", "x");
        assert!(matches!(
            result,
            Err(PatchError::MarkerNotFound(m)) if m == BEGIN_MARKER
        ));
    }

    #[test]
    fn missing_end_marker_is_error() {
        let result = splice("<aside class=\"sidebar\"><p>unterminated", "x");
        assert!(matches!(
            result,
            Err(PatchError::MarkerNotFound(m)) if m == END_MARKER
        ));
    }

    #[test]
    fn end_marker_before_begin_marker_is_error() {
        // A stray close tag ahead of the sidebar must not be matched
        let content = "</aside> text <aside class=\"sidebar\">no close";
        let result = splice(content, "x");
        assert!(matches!(
            result,
            Err(PatchError::MarkerNotFound(m)) if m == END_MARKER
        ));
    }

    #[test]
    fn patch_layout_rewrites_file() {
        let tmp = TempDir::new().unwrap();
        let layout = tmp.path().join("default.html");
        fs::write(&layout, LAYOUT).unwrap();

        patch_layout(&layout, "        <nav>new</nav>").unwrap();

        let content = fs::read_to_string(&layout).unwrap();
        assert!(content.contains("<nav>new</nav>"));
        assert!(!content.contains("<nav>old</nav>"));
    }

    #[test]
    fn missing_layout_file_is_error() {
        let tmp = TempDir::new().unwrap();
        let layout = tmp.path().join("nonexistent.html");
        let result = patch_layout(&layout, "x");
        assert!(matches!(result, Err(PatchError::LayoutMissing(_))));
    }

    #[test]
    fn file_untouched_when_markers_missing() {
        let tmp = TempDir::new().unwrap();
        let layout = tmp.path().join("default.html");
        fs::write(&layout, "<html>no sidebar here</html>").unwrap();

        let result = patch_layout(&layout, "x");
        assert!(matches!(result, Err(PatchError::MarkerNotFound(_))));
        assert_eq!(
            fs::read_to_string(&layout).unwrap(),
            "<html>no sidebar here</html>"
        );
    }
}
