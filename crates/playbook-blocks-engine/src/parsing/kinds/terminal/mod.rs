//! # Terminal Sessions
//!
//! Two-stage parsing of a pasted shell session:
//!
//! 1. **Line classification** (`classify`): each line is classified into
//!    [`LineFacts`] holding only local facts (prompt glyph, comment, blank,
//!    trailing backslash).
//! 2. **Continuation threading** (`continuation`): one left-to-right fold
//!    carries a single `in_continuation` bit and resolves each line's
//!    [`LineRole`].

pub mod classify;
pub mod continuation;

pub use classify::{LineFacts, TerminalLineClassifier};
pub use continuation::{ClassifiedLine, LineRole, thread_continuations};

use serde::Serialize;

use crate::parsing::lines::payload_lines;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TerminalSession {
    pub title: String,
    pub lines: Vec<ClassifiedLine>,
}

impl TerminalSession {
    pub const DEFAULT_TITLE: &'static str = "Terminal";

    /// The commands in the session with continuations joined onto their
    /// prompt line.
    pub fn commands(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for line in &self.lines {
            match (line.role, line.command_text()) {
                (LineRole::Prompt, Some(text)) => out.push(text.to_string()),
                (LineRole::Continuation, Some(text)) => {
                    if let Some(last) = out.last_mut() {
                        last.push('\n');
                        last.push_str(text);
                    }
                }
                _ => {}
            }
        }
        out
    }
}

pub fn classify_session(raw: &str) -> Vec<ClassifiedLine> {
    let classifier = TerminalLineClassifier;
    let facts: Vec<LineFacts> = payload_lines(raw)
        .into_iter()
        .map(|line| classifier.classify(line))
        .collect();
    thread_continuations(&facts)
}

pub fn parse_terminal(raw: &str, title: Option<&str>) -> TerminalSession {
    TerminalSession {
        title: title.unwrap_or(TerminalSession::DEFAULT_TITLE).to_string(),
        lines: classify_session(raw),
    }
}
