//! Pager alerts and callouts: a heading plus body text.

use serde::Serialize;

use crate::parsing::{
    lines::{join_trimmed, payload_lines},
    variants::{CalloutVariant, PagerVariant},
};

/// A title line and the text below it.
///
/// `title` is the first line of the trimmed payload and is always present,
/// though it is empty for an empty payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AlertContent {
    pub title: String,
    pub body: String,
}

pub fn split_alert(raw: &str) -> AlertContent {
    let lines = payload_lines(raw);
    match lines.split_first() {
        Some((title, rest)) => AlertContent {
            title: title.to_string(),
            body: join_trimmed(rest),
        },
        None => AlertContent::default(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PagerAlert {
    pub variant: PagerVariant,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    pub source: String,
    pub content: AlertContent,
}

impl PagerAlert {
    pub const DEFAULT_SOURCE: &'static str = "ALERT";
}

pub fn parse_pager(
    raw: &str,
    variant: PagerVariant,
    time: Option<&str>,
    source: Option<&str>,
) -> PagerAlert {
    PagerAlert {
        variant,
        time: time.map(str::to_string),
        source: source.unwrap_or(PagerAlert::DEFAULT_SOURCE).to_string(),
        content: split_alert(raw),
    }
}

/// A callout box: a heading from the title attribute (or the variant's
/// default) and one paragraph per payload line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Callout {
    pub variant: CalloutVariant,
    pub title: String,
    pub paragraphs: Vec<String>,
}

pub fn parse_callout(raw: &str, variant: CalloutVariant, title: Option<&str>) -> Callout {
    Callout {
        variant,
        title: title.unwrap_or(variant.default_title()).to_string(),
        paragraphs: payload_lines(raw).into_iter().map(str::to_string).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn single_line_is_all_title() {
        assert_eq!(
            split_alert("Just a title"),
            AlertContent {
                title: "Just a title".to_string(),
                body: String::new(),
            }
        );
    }

    #[test]
    fn multi_line_split() {
        assert_eq!(
            split_alert("Title\nLine A\nLine B"),
            AlertContent {
                title: "Title".to_string(),
                body: "Line A\nLine B".to_string(),
            }
        );
    }

    #[test]
    fn empty_payload_has_empty_title() {
        assert_eq!(split_alert(""), AlertContent::default());
        assert_eq!(split_alert("\n \n"), AlertContent::default());
    }

    #[test]
    fn body_is_trimmed() {
        let content = split_alert("  CPU at 98%  \n\n  api-7 is throttling\n\n");
        assert_eq!(content.title, "CPU at 98%  ");
        assert_eq!(content.body, "api-7 is throttling");
    }

    #[test]
    fn pager_defaults_and_pass_through() {
        let alert = parse_pager("Disk full", PagerVariant::default(), None, None);
        assert_eq!(alert.source, "ALERT");
        assert_eq!(alert.time, None);
        assert_eq!(alert.variant, PagerVariant::Critical);

        let alert = parse_pager("Disk full", PagerVariant::Warning, Some("03:12"), Some("PagerDuty"));
        assert_eq!(alert.source, "PagerDuty");
        assert_eq!(alert.time.as_deref(), Some("03:12"));
    }

    #[test]
    fn callout_title_resolution() {
        assert_eq!(parse_callout("x", CalloutVariant::Tip, None).title, "Pro Tip");
        assert_eq!(
            parse_callout("x", CalloutVariant::Tip, Some("Did You Know?")).title,
            "Did You Know?"
        );
    }

    #[test]
    fn callout_paragraph_per_line() {
        let callout = parse_callout("First.\n\nSecond.", CalloutVariant::Info, None);
        assert_eq!(callout.paragraphs, vec!["First.", "", "Second."]);
        assert!(parse_callout("", CalloutVariant::Info, None).paragraphs.is_empty());
    }
}
