use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::layout::{ImageBlock, Layout, LayoutMode, LayoutSize, Position};

/// A `:::floating` or `:::sidebyside` directive and its raw inner text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive<'a> {
    pub range: Range<usize>,
    pub layout: Layout,
    pub inner: &'a str,
}

/// Finds layout directives of the form
/// `:::floating[:left|:right][:size]` ... `:::`, in document order.
///
/// Position defaults to right and size to medium.
pub fn directives(text: &str) -> Vec<Directive<'_>> {
    static DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(
            r"(?s):::(sidebyside|floating)(?::(left|right))?(?::(small|medium|large|1/3|1/2|2/3|full))?\r?\n(.*?):::",
        )
        .expect("valid directive regex")
    });

    DIRECTIVE
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let mode = if &caps[1] == "floating" {
                LayoutMode::Floating
            } else {
                LayoutMode::SideBySide
            };
            let position = caps
                .get(2)
                .map_or(Position::Right, |m| Position::parse_or_default(m.as_str()));
            let size = caps
                .get(3)
                .map_or(LayoutSize::Half, |m| LayoutSize::normalize(m.as_str()));
            Some(Directive {
                range: whole.range(),
                layout: Layout::new(mode, position, size),
                inner: caps.get(4).map_or("", |m| m.as_str()),
            })
        })
        .collect()
}

/// A markdown image `![alt](src "caption")` and its byte range.
pub fn find_image(text: &str) -> Option<(Range<usize>, ImageBlock)> {
    static IMAGE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r#"!\[([^\]]*)\]\(([^)\s]+)(?:\s+"([^"]*)")?\)"#).expect("valid image regex")
    });

    let caps = IMAGE.captures(text)?;
    let mut image = ImageBlock::new(&caps[2]).with_alt(&caps[1]);
    if let Some(caption) = caps.get(3).map(|m| m.as_str()).filter(|c| !c.is_empty()) {
        image = image.with_caption(caption);
    }
    Some((caps.get(0)?.range(), image))
}
