use serde::Serialize;

use crate::parsing::lines::is_blank;

/// The header fields an email preview recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HeaderField {
    From,
    To,
    Subject,
    Date,
}

impl HeaderField {
    pub const ALL: [HeaderField; 4] = [
        HeaderField::From,
        HeaderField::To,
        HeaderField::Subject,
        HeaderField::Date,
    ];

    pub fn name(self) -> &'static str {
        match self {
            HeaderField::From => "From",
            HeaderField::To => "To",
            HeaderField::Subject => "Subject",
            HeaderField::Date => "Date",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(name))
    }
}

/// What a single line means while scanning the header block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderLine<'a> {
    Field(HeaderField, &'a str),
    Separator,
    Blank,
    Other,
}

pub struct HeaderBlock;

impl HeaderBlock {
    pub const SEPARATOR: &'static str = "---";

    /// Classifies one line.
    ///
    /// A header is `Name: value` with a recognised name at the very start of
    /// the line, matched case-insensitively. The value is what follows the
    /// colon and any whitespace after it, and must not be empty.
    pub fn classify(line: &str) -> HeaderLine<'_> {
        if line.trim() == Self::SEPARATOR {
            return HeaderLine::Separator;
        }
        if is_blank(line) {
            return HeaderLine::Blank;
        }
        let Some((name, value)) = line.split_once(':') else {
            return HeaderLine::Other;
        };
        let value = value.trim_start();
        match HeaderField::from_name(name) {
            Some(field) if !value.is_empty() => HeaderLine::Field(field, value),
            _ => HeaderLine::Other,
        }
    }

    /// Scans the leading header block.
    ///
    /// Returns the recognised fields in order and the index of the first body
    /// line. Scanning stops at a separator (body starts after it), at a blank
    /// line once a header has been read (body starts after it), or at the
    /// first line that is not a header (body starts at it).
    pub fn scan<'a>(lines: &[&'a str]) -> (Vec<(HeaderField, &'a str)>, usize) {
        let mut fields = Vec::new();
        let mut body_start = 0;

        for (i, &line) in lines.iter().enumerate() {
            match Self::classify(line) {
                HeaderLine::Separator => {
                    body_start = i + 1;
                    break;
                }
                HeaderLine::Blank if !fields.is_empty() => {
                    body_start = i + 1;
                    break;
                }
                HeaderLine::Field(field, value) => {
                    fields.push((field, value));
                    body_start = i + 1;
                }
                HeaderLine::Blank | HeaderLine::Other => {
                    body_start = i;
                    break;
                }
            }
        }

        (fields, body_start)
    }
}
