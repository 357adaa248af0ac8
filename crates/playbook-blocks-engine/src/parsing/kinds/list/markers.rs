/// A set of leading marker glyphs that a list kind strips from its items.
///
/// Unknown glyphs are never stripped, so a line with no recognised marker
/// passes through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerSet {
    glyphs: &'static [char],
}

/// Emoji presentation selector that often trails a marker such as `✔️`.
const VARIATION_SELECTOR: char = '\u{FE0F}';

impl MarkerSet {
    /// Bullets and dashes accepted by every list kind.
    pub const GENERIC: &'static [char] = &['-', '*', '•'];

    pub const CHECKLIST: MarkerSet = MarkerSet {
        glyphs: &['✓', '✔', '√', '☑', '✅', '-', '*', '•'],
    };

    pub const MISTAKES: MarkerSet = MarkerSet {
        glyphs: &['✗', '✘', '×', '❌', '✕', '-', '*', '•'],
    };

    pub fn glyphs(&self) -> &'static [char] {
        self.glyphs
    }

    pub fn is_marker(&self, c: char) -> bool {
        self.glyphs.contains(&c)
    }

    /// Strips at most one leading marker and the whitespace around the item.
    pub fn strip<'a>(&self, line: &'a str) -> &'a str {
        let line = line.trim();
        match line.chars().next() {
            Some(c) if self.is_marker(c) => line[c.len_utf8()..]
                .trim_start_matches(VARIATION_SELECTOR)
                .trim(),
            _ => line,
        }
    }
}
