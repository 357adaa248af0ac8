pub mod headers;

pub use headers::{HeaderBlock, HeaderField, HeaderLine};

use serde::Serialize;

use crate::parsing::{
    lines::{join_trimmed, payload_lines},
    variants::EmailVariant,
};

/// An email excerpt split into its headers and body.
///
/// `body` is always present; header fields are only set when recognised in
/// the leading header block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedEmail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub body: String,
}

impl ParsedEmail {
    pub fn header(&self, field: HeaderField) -> Option<&str> {
        match field {
            HeaderField::From => self.from.as_deref(),
            HeaderField::To => self.to.as_deref(),
            HeaderField::Subject => self.subject.as_deref(),
            HeaderField::Date => self.date.as_deref(),
        }
    }

    /// The headers that are present, in display order.
    pub fn present_headers(&self) -> Vec<(HeaderField, &str)> {
        HeaderField::ALL
            .into_iter()
            .filter_map(|field| self.header(field).map(|value| (field, value)))
            .collect()
    }

    fn set(&mut self, field: HeaderField, value: &str) {
        let slot = match field {
            HeaderField::From => &mut self.from,
            HeaderField::To => &mut self.to,
            HeaderField::Subject => &mut self.subject,
            HeaderField::Date => &mut self.date,
        };
        *slot = Some(value.to_string());
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailPreview {
    pub variant: EmailVariant,
    pub email: ParsedEmail,
}

pub fn parse_email(raw: &str) -> ParsedEmail {
    let lines = payload_lines(raw);
    let (fields, body_start) = HeaderBlock::scan(&lines);

    let mut email = ParsedEmail::default();
    // A repeated header keeps its last value.
    for (field, value) in fields {
        email.set(field, value);
    }
    email.body = join_trimmed(&lines[body_start.min(lines.len())..]);
    email
}
