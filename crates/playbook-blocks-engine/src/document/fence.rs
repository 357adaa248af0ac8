use std::ops::Range;
use std::sync::LazyLock;

use pulldown_cmark::{CodeBlockKind, Event, Parser, Tag, TagEnd};
use regex::Regex;

use crate::parsing::{BlockAttributes, BlockKind, RawBlock};

/// A fenced code block found in markdown text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fence {
    /// Byte range of the whole block, fences included.
    pub range: Range<usize>,
    /// The info string after the opening fence.
    pub info: String,
    /// Block content without the fences.
    pub code: String,
}

impl Fence {
    /// The first word of the info string.
    pub fn language(&self) -> &str {
        self.info.split_whitespace().next().unwrap_or("")
    }

    /// The rest of the info string as `key=value` attributes.
    ///
    /// `title` and `variant` become block attributes; every other key is
    /// metadata. Values may be double-quoted to include spaces.
    pub fn attributes(&self) -> BlockAttributes {
        static ATTR: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r#"([A-Za-z][\w-]*)=(?:"([^"]*)"|(\S+))"#).expect("valid attribute regex")
        });

        let rest = self
            .info
            .trim_start()
            .strip_prefix(self.language())
            .unwrap_or("");

        let mut attrs = BlockAttributes::default();
        for caps in ATTR.captures_iter(rest) {
            let key = &caps[1];
            let value = caps
                .get(2)
                .or_else(|| caps.get(3))
                .map_or("", |m| m.as_str())
                .to_string();
            match key {
                "title" => attrs.title = Some(value),
                "variant" => attrs.variant = Some(value),
                _ => {
                    attrs.metadata.insert(key.to_string(), value);
                }
            }
        }
        attrs
    }

    /// Turns the fence into a content block if its language names a kind.
    pub fn to_block(&self) -> Option<RawBlock> {
        let kind: BlockKind = self.language().parse().ok()?;
        Some(RawBlock {
            kind,
            raw_text: self.code.clone(),
            attributes: self.attributes(),
        })
    }
}

/// Finds the fenced code blocks in `text`, in document order.
///
/// An unterminated fence runs to the end of the text.
pub fn fenced_blocks(text: &str) -> Vec<Fence> {
    let mut out = Vec::new();
    let mut current: Option<Fence> = None;

    for (event, range) in Parser::new(text).into_offset_iter() {
        match event {
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))) => {
                current = Some(Fence {
                    range,
                    info: info.to_string(),
                    code: String::new(),
                });
            }
            Event::Text(t) => {
                if let Some(fence) = current.as_mut() {
                    fence.code.push_str(&t);
                }
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some(mut fence) = current.take() {
                    if fence.code.ends_with('\n') {
                        fence.code.pop();
                    }
                    out.push(fence);
                }
            }
            _ => {}
        }
    }

    out
}
