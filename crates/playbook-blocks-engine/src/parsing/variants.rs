//! Kind-specific variant enums.
//!
//! Variants only select presentation. Resolving a variant never fails: an
//! absent name gives the kind's default and an unknown name falls back to it.

use serde::{Deserialize, Serialize};

use super::types::BlockKind;

/// Behaviour shared by every variant enum.
pub trait Variant: Copy + Default + 'static {
    /// The kind this variant belongs to, used when logging fallbacks.
    const KIND: BlockKind;
    /// Every variant with its author-facing name.
    const NAMES: &'static [(&'static str, Self)];

    fn name(self) -> &'static str;

    /// Resolves an author-supplied variant name, case-insensitively.
    fn resolve(name: Option<&str>) -> Self {
        let Some(name) = name.map(str::trim).filter(|n| !n.is_empty()) else {
            return Self::default();
        };
        match Self::NAMES
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
        {
            Some((_, variant)) => *variant,
            None => {
                let fallback = Self::default();
                log::warn!(
                    "unknown {} variant {name:?}, using {:?}",
                    Self::KIND,
                    fallback.name()
                );
                fallback
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailVariant {
    #[default]
    Info,
    Warning,
    Critical,
    Success,
}

impl Variant for EmailVariant {
    const KIND: BlockKind = BlockKind::Email;
    const NAMES: &'static [(&'static str, Self)] = &[
        ("info", Self::Info),
        ("warning", Self::Warning),
        ("critical", Self::Critical),
        ("success", Self::Success),
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Critical => "critical",
            Self::Success => "success",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PagerVariant {
    #[default]
    Critical,
    Warning,
    Info,
    Success,
}

impl PagerVariant {
    /// Critical and warning pages are the ones that demand attention.
    pub fn is_urgent(self) -> bool {
        matches!(self, Self::Critical | Self::Warning)
    }
}

impl Variant for PagerVariant {
    const KIND: BlockKind = BlockKind::PagerAlert;
    const NAMES: &'static [(&'static str, Self)] = &[
        ("critical", Self::Critical),
        ("warning", Self::Warning),
        ("info", Self::Info),
        ("success", Self::Success),
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Success => "success",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalloutVariant {
    #[default]
    Info,
    Warning,
    Tip,
    Danger,
}

impl CalloutVariant {
    pub fn default_title(self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Warning => "Warning",
            Self::Tip => "Pro Tip",
            Self::Danger => "Important",
        }
    }
}

impl Variant for CalloutVariant {
    const KIND: BlockKind = BlockKind::Callout;
    const NAMES: &'static [(&'static str, Self)] = &[
        ("info", Self::Info),
        ("warning", Self::Warning),
        ("tip", Self::Tip),
        ("danger", Self::Danger),
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Tip => "tip",
            Self::Danger => "danger",
        }
    }
}
