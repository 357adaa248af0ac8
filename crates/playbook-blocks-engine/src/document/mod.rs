//! # Lesson Documents
//!
//! A lesson is markdown with two extensions layered on top:
//!
//! - Fenced code blocks whose language names a [`BlockKind`] become content
//!   blocks, e.g. ```` ```pager variant=warning time=03:12 ````
//! - `:::floating` / `:::sidebyside` directives wrap one diagram, code block
//!   or image beside flowing text
//!
//! [`scan_lesson`] splits a lesson into ordered [`Segment`]s. Scanning is
//! total, like block parsing: anything it does not recognise stays markdown.
//!
//! ## Key Invariants
//!
//! - Segments appear in source order
//! - Markdown segments are trimmed and never blank
//! - Fences with an unknown language are left inside the markdown text

pub mod directive;
pub mod fence;

pub use directive::{Directive, directives, find_image};
pub use fence::{Fence, fenced_blocks};

use serde::Serialize;

use crate::layout::{ImageBlock, Layout};
use crate::parsing::{BlockKind, RawBlock};

/// Fence language that marks a diagram inside a layout directive.
const DIAGRAM_LANGUAGE: &str = "mermaid";

/// One ordered piece of a lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "segment", rename_all = "snake_case")]
pub enum Segment {
    Markdown { text: String },
    Block(RawBlock),
    Layout(LayoutSegment),
}

impl Segment {
    /// Short label for lists and log lines.
    pub fn label(&self) -> String {
        match self {
            Segment::Markdown { text } => {
                let first = text.lines().next().unwrap_or("");
                format!("text: {}", first.trim_start_matches('#').trim())
            }
            Segment::Block(block) => match block.attributes.explicit_title() {
                Some(title) => format!("{}: {title}", block.kind),
                None => block.kind.to_string(),
            },
            Segment::Layout(layout) => {
                format!("{} ({})", layout.layout.mode, layout.content.label())
            }
        }
    }

    pub fn block(&self) -> Option<&RawBlock> {
        match self {
            Segment::Block(block) => Some(block),
            Segment::Layout(LayoutSegment {
                content: LayoutContent::Block(block),
                ..
            }) => Some(block),
            _ => None,
        }
    }
}

/// A layout directive: wrapped content plus the text flowing beside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutSegment {
    pub layout: Layout,
    pub content: LayoutContent,
    /// Inner markdown with the wrapped content removed, trimmed.
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "content", rename_all = "snake_case")]
pub enum LayoutContent {
    Diagram { source: String },
    Block(RawBlock),
    Code { language: String, code: String },
    Image(ImageBlock),
}

impl LayoutContent {
    pub fn label(&self) -> String {
        match self {
            LayoutContent::Diagram { .. } => "diagram".to_string(),
            LayoutContent::Block(block) => block.kind.to_string(),
            LayoutContent::Code { language, .. } if language.is_empty() => "code".to_string(),
            LayoutContent::Code { language, .. } => format!("{language} code"),
            LayoutContent::Image(image) => format!("image {}", image.src),
        }
    }
}

/// Splits a lesson into segments in source order.
pub fn scan_lesson(source: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for found in directives(source) {
        scan_markdown(&source[cursor..found.range.start], &mut segments);
        segments.push(layout_segment(&found));
        cursor = found.range.end;
    }
    scan_markdown(&source[cursor..], &mut segments);

    log::debug!(
        "scanned lesson into {} segments ({} blocks)",
        segments.len(),
        segments.iter().filter(|s| s.block().is_some()).count()
    );
    segments
}

/// The content blocks of a lesson, including those inside layout directives.
pub fn lesson_blocks(source: &str) -> Vec<RawBlock> {
    scan_lesson(source)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Block(block) => Some(block),
            Segment::Layout(LayoutSegment {
                content: LayoutContent::Block(block),
                ..
            }) => Some(block),
            _ => None,
        })
        .collect()
}

fn scan_markdown(text: &str, segments: &mut Vec<Segment>) {
    let mut cursor = 0;
    for fence in fenced_blocks(text) {
        let Some(block) = fence.to_block() else {
            continue;
        };
        push_markdown(&text[cursor..fence.range.start], segments);
        segments.push(Segment::Block(block));
        cursor = fence.range.end;
    }
    push_markdown(&text[cursor..], segments);
}

fn push_markdown(text: &str, segments: &mut Vec<Segment>) {
    let text = text.trim();
    if !text.is_empty() {
        segments.push(Segment::Markdown {
            text: text.to_string(),
        });
    }
}

fn layout_segment(found: &Directive<'_>) -> Segment {
    let inner = found.inner;

    let wrapped = fenced_blocks(inner)
        .into_iter()
        .next()
        .map(|fence| (fence.range.clone(), fence_content(fence)))
        .or_else(|| find_image(inner).map(|(range, image)| (range, LayoutContent::Image(image))));

    let Some((range, content)) = wrapped else {
        log::debug!("{} directive wraps no content, keeping its text", found.layout.mode);
        return Segment::Markdown {
            text: inner.trim().to_string(),
        };
    };

    let text = format!("{}{}", &inner[..range.start], &inner[range.end..]);
    Segment::Layout(LayoutSegment {
        layout: found.layout,
        content,
        text: text.trim().to_string(),
    })
}

fn fence_content(fence: Fence) -> LayoutContent {
    if fence.language().eq_ignore_ascii_case(DIAGRAM_LANGUAGE) {
        return LayoutContent::Diagram { source: fence.code };
    }
    match fence.to_block() {
        Some(block) => LayoutContent::Block(block),
        None => LayoutContent::Code {
            language: fence.language().to_string(),
            code: fence.code,
        },
    }
}

/// Block kinds used in a lesson, in first-use order.
pub fn kinds_used(segments: &[Segment]) -> Vec<BlockKind> {
    let mut kinds = Vec::new();
    for kind in segments.iter().filter_map(|s| s.block()).map(|b| b.kind) {
        if !kinds.contains(&kind) {
            kinds.push(kind);
        }
    }
    kinds
}
