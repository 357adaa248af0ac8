use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::kinds::{Callout, EmailPreview, PagerAlert, ParsedList, TerminalSession};

/// The declared kind of a content block.
///
/// Kinds are resolved by the content source before parsing; the parsing core
/// never has to guess one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Terminal,
    Email,
    Checklist,
    MistakeList,
    PagerAlert,
    Callout,
}

impl BlockKind {
    pub const ALL: [BlockKind; 6] = [
        BlockKind::Terminal,
        BlockKind::Email,
        BlockKind::Checklist,
        BlockKind::MistakeList,
        BlockKind::PagerAlert,
        BlockKind::Callout,
    ];

    /// The canonical component name lesson authors write for this kind.
    pub fn name(self) -> &'static str {
        match self {
            BlockKind::Terminal => "terminal",
            BlockKind::Email => "email",
            BlockKind::Checklist => "checklist",
            BlockKind::MistakeList => "mistakes",
            BlockKind::PagerAlert => "pager",
            BlockKind::Callout => "callout",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BlockKindError {
    #[error("Unknown block kind: {0}")]
    UnknownBlockKind(String),
}

impl FromStr for BlockKind {
    type Err = BlockKindError;

    /// Accepts component names and the fence languages authors use for them.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "terminal" | "bash" | "shell" | "console" => Ok(BlockKind::Terminal),
            "email" => Ok(BlockKind::Email),
            "checklist" => Ok(BlockKind::Checklist),
            "mistakes" | "mistakelist" | "mistake_list" => Ok(BlockKind::MistakeList),
            "pager" | "alert" | "notification" | "pager_alert" => Ok(BlockKind::PagerAlert),
            "callout" => Ok(BlockKind::Callout),
            _ => Err(BlockKindError::UnknownBlockKind(s.to_string())),
        }
    }
}

/// Presentational attributes supplied alongside a block's raw text.
///
/// These are echoed untouched into the parsed output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

impl BlockAttributes {
    /// The explicit title, if one was given and is not blank.
    pub fn explicit_title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.trim().is_empty())
    }

    pub fn meta(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }
}

/// A content block as handed over by the content source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawBlock {
    pub kind: BlockKind,
    #[serde(default)]
    pub raw_text: String,
    #[serde(flatten)]
    pub attributes: BlockAttributes,
}

impl RawBlock {
    pub fn new(kind: BlockKind, raw_text: impl Into<String>) -> Self {
        Self {
            kind,
            raw_text: raw_text.into(),
            attributes: BlockAttributes::default(),
        }
    }

    pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
        self.attributes.variant = Some(variant.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.attributes.title = Some(title.into());
        self
    }

    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.metadata.insert(key.into(), value.into());
        self
    }
}

/// The typed payload produced for each block kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BlockContent {
    Terminal(TerminalSession),
    Email(EmailPreview),
    Checklist(ParsedList),
    MistakeList(ParsedList),
    PagerAlert(PagerAlert),
    Callout(Callout),
}

impl BlockContent {
    pub fn kind(&self) -> BlockKind {
        match self {
            BlockContent::Terminal(_) => BlockKind::Terminal,
            BlockContent::Email(_) => BlockKind::Email,
            BlockContent::Checklist(_) => BlockKind::Checklist,
            BlockContent::MistakeList(_) => BlockKind::MistakeList,
            BlockContent::PagerAlert(_) => BlockKind::PagerAlert,
            BlockContent::Callout(_) => BlockKind::Callout,
        }
    }
}

/// A parsed block: the typed payload plus the echoed attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedBlock {
    pub attributes: BlockAttributes,
    pub content: BlockContent,
}

impl ParsedBlock {
    pub fn kind(&self) -> BlockKind {
        self.content.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("terminal", BlockKind::Terminal)]
    #[case("Bash", BlockKind::Terminal)]
    #[case("shell", BlockKind::Terminal)]
    #[case("email", BlockKind::Email)]
    #[case("CheckList", BlockKind::Checklist)]
    #[case("mistakes", BlockKind::MistakeList)]
    #[case("pager", BlockKind::PagerAlert)]
    #[case("alert", BlockKind::PagerAlert)]
    #[case("notification", BlockKind::PagerAlert)]
    #[case(" callout ", BlockKind::Callout)]
    fn kind_from_author_names(#[case] name: &str, #[case] expected: BlockKind) {
        assert_eq!(name.parse::<BlockKind>(), Ok(expected));
    }

    #[test]
    fn unknown_kind_is_an_error() {
        assert_eq!(
            "mermaid".parse::<BlockKind>(),
            Err(BlockKindError::UnknownBlockKind("mermaid".to_string()))
        );
    }

    #[test]
    fn canonical_names_round_trip() {
        for kind in BlockKind::ALL {
            assert_eq!(kind.name().parse::<BlockKind>(), Ok(kind));
        }
    }

    #[test]
    fn blank_title_is_not_explicit() {
        let block = RawBlock::new(BlockKind::Checklist, "").with_title("   ");
        assert_eq!(block.attributes.explicit_title(), None);

        let block = RawBlock::new(BlockKind::Checklist, "").with_title("Recap");
        assert_eq!(block.attributes.explicit_title(), Some("Recap"));
    }
}
