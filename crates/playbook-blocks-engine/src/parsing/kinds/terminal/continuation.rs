use serde::Serialize;

use super::classify::LineFacts;

/// The role a line plays in a terminal session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineRole {
    /// Starts with a prompt glyph.
    Prompt,
    /// Follows a command line that ended in `\`.
    Continuation,
    /// Starts with `#` outside of a continuation.
    Comment,
    /// Whitespace only.
    Blank,
    /// Command output.
    Plain,
}

/// A terminal line with its resolved role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedLine {
    pub text: String,
    pub role: LineRole,
    pub is_command: bool,
}

impl ClassifiedLine {
    /// The prompt glyph of a prompt line.
    pub fn prompt_glyph(&self) -> Option<char> {
        match self.role {
            LineRole::Prompt => self.text.chars().next(),
            _ => None,
        }
    }

    /// The command text: everything after the prompt glyph for prompt lines,
    /// the whole line for continuations, nothing otherwise.
    pub fn command_text(&self) -> Option<&str> {
        match self.role {
            LineRole::Prompt => self
                .text
                .chars()
                .next()
                .map(|glyph| self.text[glyph.len_utf8()..].trim()),
            LineRole::Continuation => Some(self.text.as_str()),
            _ => None,
        }
    }

    /// Renders as vertical spacing only.
    ///
    /// True for blank lines and for a blank line caught inside a continuation.
    pub fn is_spacing(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Stage two of terminal parsing: a single left-to-right fold carrying the
/// `in_continuation` bit.
///
/// A line continues the previous command iff the previous command line ended
/// in `\` and this line does not open a new prompt. The continuation check
/// runs before the comment check, so `# ...` inside a continuation is command
/// text.
pub fn thread_continuations(facts: &[LineFacts<'_>]) -> Vec<ClassifiedLine> {
    facts
        .iter()
        .scan(false, |in_continuation, f| {
            let is_continuation = *in_continuation && !f.starts_with_prompt;
            let is_command = f.starts_with_prompt || is_continuation;
            *in_continuation = is_command && f.ends_with_backslash;

            let role = if f.starts_with_prompt {
                LineRole::Prompt
            } else if is_continuation {
                LineRole::Continuation
            } else if f.is_blank {
                LineRole::Blank
            } else if f.is_comment {
                LineRole::Comment
            } else {
                LineRole::Plain
            };

            Some(ClassifiedLine {
                text: f.text.to_string(),
                role,
                is_command,
            })
        })
        .collect()
}
