/// Local facts about a single terminal line.
///
/// This is stage one of terminal parsing: each line is classified on its own,
/// without reference to the lines around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineFacts<'a> {
    /// The line exactly as the author wrote it.
    pub text: &'a str,
    /// First character is a prompt glyph (`$` or `>`).
    pub starts_with_prompt: bool,
    /// First character is `#`.
    pub is_comment: bool,
    /// Whitespace only.
    pub is_blank: bool,
    /// Last non-whitespace character is a `\` continuation marker.
    pub ends_with_backslash: bool,
}

/// Classifies individual terminal lines.
pub struct TerminalLineClassifier;

impl TerminalLineClassifier {
    pub const PROMPT_GLYPHS: [char; 2] = ['$', '>'];
    pub const COMMENT: char = '#';
    pub const CONTINUATION: char = '\\';

    pub fn classify<'a>(&self, line: &'a str) -> LineFacts<'a> {
        let first = line.chars().next();
        LineFacts {
            text: line,
            starts_with_prompt: first.is_some_and(|c| Self::PROMPT_GLYPHS.contains(&c)),
            is_comment: first == Some(Self::COMMENT),
            is_blank: line.trim().is_empty(),
            ends_with_backslash: line.trim_end().ends_with(Self::CONTINUATION),
        }
    }
}
