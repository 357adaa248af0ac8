use playbook_blocks_engine::parsing::kinds::LineRole;
use playbook_blocks_engine::{BlockContent, BlockKind, RawBlock, parse_block, parse_blocks};
use playbook_blocks_engine::{lesson_blocks, scan_lesson};

#[test]
fn fixture_terminal_session() {
    let block = RawBlock::new(BlockKind::Terminal, fixture("terminal_session.txt")).with_title("Setup");
    insta::assert_yaml_snapshot!("terminal_session", parse_block(&block));
}

#[test]
fn fixture_mistakes() {
    let block = RawBlock::new(BlockKind::MistakeList, fixture("mistakes.txt"));
    insta::assert_yaml_snapshot!("mistakes", parse_block(&block));
}

#[test]
fn fixture_incident_lesson() {
    insta::assert_yaml_snapshot!("incident_lesson", scan_lesson(&fixture("incident_lesson.md")));
}

/// Every block in a lesson parses to content of its declared kind
#[test]
fn lesson_blocks_parse_to_their_kind() {
    let blocks = lesson_blocks(&fixture("incident_lesson.md"));
    let parsed = parse_blocks(&blocks);
    assert_eq!(parsed.len(), 1);

    let BlockContent::PagerAlert(alert) = &parsed[0].content else {
        panic!("expected pager alert");
    };
    assert_eq!(alert.content.title, "Replication lag");
    assert_eq!(alert.source, "Prod DB");
    assert!(alert.variant.is_urgent());
}

/// A continuation never outlives the command that opened it
#[test]
fn continuation_only_follows_commands() {
    let parsed = parse_block(&RawBlock::new(
        BlockKind::Terminal,
        fixture("terminal_session.txt"),
    ));
    let BlockContent::Terminal(session) = parsed.content else {
        panic!("expected terminal");
    };

    for pair in session.lines.windows(2) {
        if pair[1].role == LineRole::Continuation {
            assert!(pair[0].is_command);
            assert!(pair[0].text.trim_end().ends_with('\\'));
        }
    }
    assert_eq!(
        session.commands(),
        vec!["npm install \\\n  --save-dev jest", "npm test"]
    );
}

fn fixture(name: &str) -> String {
    std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}
