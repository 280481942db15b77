//! Compiled-in per-category display tables.
//!
//! Top-level documentation directories map to sidebar sections. The icon and
//! title for the known categories are fixed at compile time; anything else
//! falls back to a generic icon and a computed title, so a new directory
//! shows up in the sidebar without a code change.

use crate::naming;

/// Icon shown before the section title. Keyed by raw directory name.
const SECTION_ICONS: &[(&str, &str)] = &[
    ("mall-app", "\u{1F4F1}"),      // 📱
    ("customer-app", "\u{1F465}"),  // 👥
    ("staff-app", "\u{1F468}\u{200D}\u{1F4BC}"), // 👨‍💼
    ("tenant-app", "\u{1F3EA}"),    // 🏪
    ("admin-app", "\u{2699}\u{FE0F}"), // ⚙️
    ("tech", "\u{2699}\u{FE0F}"),   // ⚙️
    ("api", "\u{1F50C}"),           // 🔌
    ("guides", "\u{1F4D6}"),        // 📖
    ("tutorials", "\u{1F393}"),     // 🎓
    ("resources", "\u{1F4CB}"),     // 📋
];

/// Section heading text. Keyed by raw directory name.
const SECTION_TITLES: &[(&str, &str)] = &[
    ("mall-app", "MALL APP"),
    ("customer-app", "CUSTOMER APP"),
    ("staff-app", "STAFF APP"),
    ("tenant-app", "TENANT APP"),
    ("admin-app", "ADMIN APP"),
    ("tech", "TECHNICAL"),
    ("api", "API REFERENCE"),
    ("guides", "GUIDES"),
    ("tutorials", "TUTORIALS"),
    ("resources", "RESOURCES"),
];

/// Icon for unlisted categories.
const FALLBACK_ICON: &str = "\u{1F4C4}"; // 📄

/// Icon for a category directory name, with generic fallback.
pub fn icon_for(name: &str) -> &'static str {
    SECTION_ICONS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, icon)| *icon)
        .unwrap_or(FALLBACK_ICON)
}

/// Heading text for a category directory name.
///
/// Unlisted categories get their humanized name uppercased, matching the
/// all-caps style of the fixed table.
pub fn title_for(name: &str) -> String {
    SECTION_TITLES
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, title)| (*title).to_string())
        .unwrap_or_else(|| naming::humanize(name).to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_category_icon() {
        assert_eq!(icon_for("guides"), "\u{1F4D6}");
    }

    #[test]
    fn unknown_category_gets_fallback_icon() {
        assert_eq!(icon_for("changelog"), FALLBACK_ICON);
    }

    #[test]
    fn known_category_title() {
        assert_eq!(title_for("tech"), "TECHNICAL");
        assert_eq!(title_for("api"), "API REFERENCE");
    }

    #[test]
    fn unknown_category_title_is_humanized_uppercase() {
        assert_eq!(title_for("release-notes"), "RELEASE NOTES");
    }

    #[test]
    fn unknown_numbered_category_strips_prefix() {
        assert_eq!(title_for("01-internals"), "INTERNALS");
    }
}
