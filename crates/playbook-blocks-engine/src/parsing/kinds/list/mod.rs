//! Checklists and mistake lists.
//!
//! Both kinds share one extraction algorithm and differ only in their marker
//! glyphs and default title.

pub mod markers;

pub use markers::MarkerSet;

use serde::Serialize;

use crate::parsing::lines::{is_blank, payload_lines};

/// Which list kind is being extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStyle {
    Checklist,
    Mistakes,
}

impl ListStyle {
    pub fn markers(self) -> MarkerSet {
        match self {
            ListStyle::Checklist => MarkerSet::CHECKLIST,
            ListStyle::Mistakes => MarkerSet::MISTAKES,
        }
    }

    pub fn default_title(self) -> &'static str {
        match self {
            ListStyle::Checklist => "Key Takeaways",
            ListStyle::Mistakes => "Common Mistakes",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedList {
    pub title: String,
    pub items: Vec<String>,
}

/// Extracts list items from a payload.
///
/// Blank lines are dropped before stripping; a line holding only a marker
/// still yields an (empty) item.
pub fn extract_items(raw: &str, markers: &MarkerSet) -> Vec<String> {
    payload_lines(raw)
        .into_iter()
        .filter(|line| !is_blank(line))
        .map(|line| markers.strip(line).to_string())
        .collect()
}

pub fn parse_list(raw: &str, style: ListStyle, title: Option<&str>) -> ParsedList {
    ParsedList {
        title: title.unwrap_or(style.default_title()).to_string(),
        items: extract_items(raw, &style.markers()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn mixed_markers_and_blank_lines() {
        assert_eq!(
            extract_items("✓ Item one\n- Item two\n\nItem three", &MarkerSet::CHECKLIST),
            vec!["Item one", "Item two", "Item three"]
        );
    }

    #[test]
    fn empty_payload() {
        assert!(extract_items("", &MarkerSet::CHECKLIST).is_empty());
        assert!(extract_items("\n   \n", &MarkerSet::MISTAKES).is_empty());
    }

    #[test]
    fn marker_only_line_is_kept_as_empty_item() {
        assert_eq!(
            extract_items("✗ Forgetting backups\n✗\n× Skipping review", &MarkerSet::MISTAKES),
            vec!["Forgetting backups", "", "Skipping review"]
        );
    }

    #[test]
    fn duplicates_and_order_are_kept() {
        assert_eq!(
            extract_items("- b\n- a\n- b", &MarkerSet::CHECKLIST),
            vec!["b", "a", "b"]
        );
    }

    #[test]
    fn default_titles() {
        assert_eq!(parse_list("", ListStyle::Checklist, None).title, "Key Takeaways");
        assert_eq!(parse_list("", ListStyle::Mistakes, None).title, "Common Mistakes");
    }

    #[test]
    fn explicit_title_wins() {
        let list = parse_list("- one", ListStyle::Mistakes, Some("Pitfalls"));
        assert_eq!(list.title, "Pitfalls");
        assert_eq!(list.items, vec!["one"]);
    }
}
