//! # Block Parsing
//!
//! Every content block kind has its own small, tolerant grammar. Each lives in
//! [`kinds`] as an independent pure function, and [`parse_block`] routes a
//! [`RawBlock`] to the right one by its declared kind.
//!
//! ## Key Invariants
//!
//! - Parsing is total: every input string yields a well-formed value
//! - Parsing is deterministic and has no side effects beyond debug logging
//! - Presentational attributes are echoed untouched into the output

pub mod kinds;
pub mod lines;
pub mod types;
pub mod variants;

pub use types::{BlockAttributes, BlockContent, BlockKind, BlockKindError, ParsedBlock, RawBlock};
pub use variants::{CalloutVariant, EmailVariant, PagerVariant, Variant};

use kinds::{EmailPreview, ListStyle};

/// Parses one block.
pub fn parse_block(block: &RawBlock) -> ParsedBlock {
    let attrs = &block.attributes;
    let title = attrs.explicit_title();
    log::debug!(
        "parsing {} block ({} bytes)",
        block.kind,
        block.raw_text.len()
    );

    let content = match block.kind {
        BlockKind::Terminal => BlockContent::Terminal(kinds::parse_terminal(&block.raw_text, title)),
        BlockKind::Email => BlockContent::Email(EmailPreview {
            variant: EmailVariant::resolve(attrs.variant.as_deref()),
            email: kinds::parse_email(&block.raw_text),
        }),
        BlockKind::Checklist => BlockContent::Checklist(kinds::parse_list(
            &block.raw_text,
            ListStyle::Checklist,
            title,
        )),
        BlockKind::MistakeList => BlockContent::MistakeList(kinds::parse_list(
            &block.raw_text,
            ListStyle::Mistakes,
            title,
        )),
        BlockKind::PagerAlert => BlockContent::PagerAlert(kinds::parse_pager(
            &block.raw_text,
            PagerVariant::resolve(attrs.variant.as_deref()),
            attrs.meta("time"),
            attrs.meta("source"),
        )),
        BlockKind::Callout => BlockContent::Callout(kinds::parse_callout(
            &block.raw_text,
            CalloutVariant::resolve(attrs.variant.as_deref()),
            title,
        )),
    };

    ParsedBlock {
        attributes: attrs.clone(),
        content,
    }
}

/// Parses a batch of blocks. Blocks are independent; order is preserved.
pub fn parse_blocks(blocks: &[RawBlock]) -> Vec<ParsedBlock> {
    blocks.iter().map(parse_block).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::kinds::{LineRole, ParsedEmail};
    use pretty_assertions::assert_eq;

    #[test]
    fn dispatches_by_kind() {
        for kind in BlockKind::ALL {
            let parsed = parse_block(&RawBlock::new(kind, "Line one\nLine two"));
            assert_eq!(parsed.kind(), kind);
        }
    }

    #[test]
    fn every_kind_accepts_awkward_input() {
        let inputs = [
            "",
            "   ",
            "\n\n\n",
            "no line breaks at all",
            "\r\n\r\n",
            "$",
            "\\",
            "---",
            ":",
            "From:",
            "✓",
            "\u{FE0F}",
            "🦀 multibyte ünïcödé\n\t\n$ ✓ \\",
        ];
        for kind in BlockKind::ALL {
            for input in inputs {
                let block = RawBlock::new(kind, input).with_variant("nonsense");
                let first = parse_block(&block);
                assert_eq!(first, parse_block(&block), "{kind} not deterministic");
            }
        }
    }

    #[test]
    fn attributes_are_echoed() {
        let block = RawBlock::new(BlockKind::PagerAlert, "High latency\np99 at 2s")
            .with_variant("warning")
            .with_title("ignored by pager")
            .with_meta("time", "02:14")
            .with_meta("source", "Grafana");
        let parsed = parse_block(&block);
        assert_eq!(parsed.attributes, block.attributes);

        let BlockContent::PagerAlert(alert) = parsed.content else {
            panic!("expected pager alert");
        };
        assert_eq!(alert.variant, PagerVariant::Warning);
        assert_eq!(alert.time.as_deref(), Some("02:14"));
        assert_eq!(alert.source, "Grafana");
        assert_eq!(alert.content.title, "High latency");
        assert_eq!(alert.content.body, "p99 at 2s");
    }

    #[test]
    fn unknown_variant_falls_back() {
        let parsed = parse_block(&RawBlock::new(BlockKind::Email, "hi").with_variant("loud"));
        let BlockContent::Email(preview) = parsed.content else {
            panic!("expected email");
        };
        assert_eq!(preview.variant, EmailVariant::Info);
        assert_eq!(
            preview.email,
            ParsedEmail {
                body: "hi".to_string(),
                ..Default::default()
            }
        );
        assert_eq!(parsed.attributes.variant.as_deref(), Some("loud"));
    }

    #[test]
    fn blank_title_uses_default() {
        let parsed = parse_block(&RawBlock::new(BlockKind::Checklist, "- a").with_title(""));
        let BlockContent::Checklist(list) = parsed.content else {
            panic!("expected checklist");
        };
        assert_eq!(list.title, "Key Takeaways");
    }

    #[test]
    fn terminal_block() {
        let parsed = parse_block(&RawBlock::new(
            BlockKind::Terminal,
            "$ cmd \\\ncontinued\n$ next",
        ));
        let BlockContent::Terminal(session) = parsed.content else {
            panic!("expected terminal");
        };
        let roles: Vec<_> = session.lines.iter().map(|l| (l.role, l.is_command)).collect();
        assert_eq!(
            roles,
            vec![
                (LineRole::Prompt, true),
                (LineRole::Continuation, true),
                (LineRole::Prompt, true),
            ]
        );
    }

    #[test]
    fn batch_preserves_order() {
        let blocks = vec![
            RawBlock::new(BlockKind::Callout, "a"),
            RawBlock::new(BlockKind::Terminal, "$ b"),
            RawBlock::new(BlockKind::MistakeList, "✗ c"),
        ];
        let kinds: Vec<_> = parse_blocks(&blocks).iter().map(ParsedBlock::kind).collect();
        assert_eq!(
            kinds,
            vec![BlockKind::Callout, BlockKind::Terminal, BlockKind::MistakeList]
        );
    }
}
