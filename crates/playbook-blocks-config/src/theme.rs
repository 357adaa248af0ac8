//! Colour palettes for each block kind and variant.
//!
//! The built-in table is fixed; the config file only carries overrides, and
//! an override names just the fields it changes.

use playbook_blocks_engine::parsing::{CalloutVariant, EmailVariant, PagerVariant};
use serde::{Deserialize, Serialize};

/// A named colour. Renderers map these onto whatever their backend offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Red,
    Amber,
    Yellow,
    Emerald,
    Green,
    Blue,
    Violet,
    Slate,
    Gray,
    White,
}

/// The resolved colours for one block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Borders, header bar and markers.
    pub accent: Accent,
    /// Body text.
    pub text: Accent,
    /// Header label such as `URGENT`.
    pub label: Option<String>,
    /// Draw attention with a pulsing indicator.
    pub pulse: bool,
}

impl Palette {
    const fn new(accent: Accent, text: Accent) -> Self {
        Self {
            accent,
            text,
            label: None,
            pulse: false,
        }
    }

    fn labelled(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    fn pulsing(mut self) -> Self {
        self.pulse = true;
        self
    }

    fn overridden(mut self, with: &PaletteOverride) -> Self {
        if let Some(accent) = with.accent {
            self.accent = accent;
        }
        if let Some(text) = with.text {
            self.text = text;
        }
        if let Some(label) = &with.label {
            self.label = Some(label.clone()).filter(|l| !l.is_empty());
        }
        if let Some(pulse) = with.pulse {
            self.pulse = pulse;
        }
        self
    }
}

/// Fields a config file may change on a palette. An empty label removes it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaletteOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<Accent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Accent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pulse: Option<bool>,
}

impl PaletteOverride {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Overrides for the email and pager variant tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeverityOverrides {
    #[serde(skip_serializing_if = "PaletteOverride::is_empty")]
    pub critical: PaletteOverride,
    #[serde(skip_serializing_if = "PaletteOverride::is_empty")]
    pub warning: PaletteOverride,
    #[serde(skip_serializing_if = "PaletteOverride::is_empty")]
    pub info: PaletteOverride,
    #[serde(skip_serializing_if = "PaletteOverride::is_empty")]
    pub success: PaletteOverride,
}

impl SeverityOverrides {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalloutOverrides {
    #[serde(skip_serializing_if = "PaletteOverride::is_empty")]
    pub info: PaletteOverride,
    #[serde(skip_serializing_if = "PaletteOverride::is_empty")]
    pub warning: PaletteOverride,
    #[serde(skip_serializing_if = "PaletteOverride::is_empty")]
    pub tip: PaletteOverride,
    #[serde(skip_serializing_if = "PaletteOverride::is_empty")]
    pub danger: PaletteOverride,
}

impl CalloutOverrides {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// The `[theme]` table of the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Theme {
    #[serde(skip_serializing_if = "PaletteOverride::is_empty")]
    pub terminal: PaletteOverride,
    #[serde(skip_serializing_if = "SeverityOverrides::is_empty")]
    pub email: SeverityOverrides,
    #[serde(skip_serializing_if = "PaletteOverride::is_empty")]
    pub checklist: PaletteOverride,
    #[serde(skip_serializing_if = "PaletteOverride::is_empty")]
    pub mistakes: PaletteOverride,
    #[serde(skip_serializing_if = "SeverityOverrides::is_empty")]
    pub pager: SeverityOverrides,
    #[serde(skip_serializing_if = "CalloutOverrides::is_empty")]
    pub callout: CalloutOverrides,
}

impl Theme {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn terminal(&self) -> Palette {
        Palette::new(Accent::Emerald, Accent::Gray).overridden(&self.terminal)
    }

    pub fn email(&self, variant: EmailVariant) -> Palette {
        let (base, with) = match variant {
            EmailVariant::Info => (
                Palette::new(Accent::Slate, Accent::Slate).labelled("EMAIL"),
                &self.email.info,
            ),
            EmailVariant::Warning => (
                Palette::new(Accent::Amber, Accent::Amber).labelled("IMPORTANT"),
                &self.email.warning,
            ),
            EmailVariant::Critical => (
                Palette::new(Accent::Red, Accent::Red).labelled("URGENT"),
                &self.email.critical,
            ),
            EmailVariant::Success => (
                Palette::new(Accent::Emerald, Accent::Emerald).labelled("EMAIL"),
                &self.email.success,
            ),
        };
        base.overridden(with)
    }

    pub fn checklist(&self) -> Palette {
        Palette::new(Accent::Emerald, Accent::Gray).overridden(&self.checklist)
    }

    pub fn mistakes(&self) -> Palette {
        Palette::new(Accent::Red, Accent::Red).overridden(&self.mistakes)
    }

    pub fn pager(&self, variant: PagerVariant) -> Palette {
        let (base, with) = match variant {
            PagerVariant::Critical => (
                Palette::new(Accent::Red, Accent::Red),
                &self.pager.critical,
            ),
            PagerVariant::Warning => (
                Palette::new(Accent::Amber, Accent::Amber),
                &self.pager.warning,
            ),
            PagerVariant::Info => (Palette::new(Accent::Blue, Accent::Blue), &self.pager.info),
            PagerVariant::Success => (
                Palette::new(Accent::Emerald, Accent::Emerald),
                &self.pager.success,
            ),
        };
        let base = if variant.is_urgent() {
            base.pulsing()
        } else {
            base
        };
        base.overridden(with)
    }

    pub fn callout(&self, variant: CalloutVariant) -> Palette {
        let (base, with) = match variant {
            CalloutVariant::Info => (Palette::new(Accent::Blue, Accent::Blue), &self.callout.info),
            CalloutVariant::Warning => (
                Palette::new(Accent::Amber, Accent::Amber),
                &self.callout.warning,
            ),
            CalloutVariant::Tip => (
                Palette::new(Accent::Violet, Accent::Violet),
                &self.callout.tip,
            ),
            CalloutVariant::Danger => (
                Palette::new(Accent::Red, Accent::Red),
                &self.callout.danger,
            ),
        };
        base.overridden(with)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn built_in_email_labels() {
        let theme = Theme::default();
        assert_eq!(theme.email(EmailVariant::Critical).label.as_deref(), Some("URGENT"));
        assert_eq!(theme.email(EmailVariant::Warning).label.as_deref(), Some("IMPORTANT"));
        assert_eq!(theme.email(EmailVariant::Info).label.as_deref(), Some("EMAIL"));
        assert_eq!(theme.email(EmailVariant::Success).label.as_deref(), Some("EMAIL"));
    }

    #[test]
    fn only_urgent_pages_pulse() {
        let theme = Theme::default();
        assert!(theme.pager(PagerVariant::Critical).pulse);
        assert!(theme.pager(PagerVariant::Warning).pulse);
        assert!(!theme.pager(PagerVariant::Info).pulse);
        assert!(!theme.pager(PagerVariant::Success).pulse);
    }

    #[test]
    fn override_changes_only_named_fields() {
        let theme: Theme = toml::from_str(
            r#"
[pager.critical]
accent = "violet"
label = "PAGE"
"#,
        )
        .unwrap();

        assert_eq!(
            theme.pager(PagerVariant::Critical),
            Palette {
                accent: Accent::Violet,
                text: Accent::Red,
                label: Some("PAGE".to_string()),
                pulse: true,
            }
        );
        assert_eq!(
            theme.pager(PagerVariant::Warning),
            Theme::default().pager(PagerVariant::Warning)
        );
    }

    #[test]
    fn empty_label_removes_it() {
        let theme: Theme = toml::from_str("[email.critical]\nlabel = \"\"\n").unwrap();
        assert_eq!(theme.email(EmailVariant::Critical).label, None);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<Theme>("[pager.critical]\ncolour = \"red\"\n").is_err());
        assert!(toml::from_str::<Theme>("[banner]\naccent = \"red\"\n").is_err());
        assert!(toml::from_str::<Theme>("[callout.tip]\naccent = \"pink\"\n").is_err());
    }

    #[test]
    fn callout_defaults() {
        let theme = Theme::default();
        assert_eq!(theme.callout(CalloutVariant::Tip).accent, Accent::Violet);
        assert_eq!(theme.callout(CalloutVariant::Danger).accent, Accent::Red);
        assert_eq!(theme.terminal().accent, Accent::Emerald);
        assert_eq!(theme.mistakes().accent, Accent::Red);
    }
}
