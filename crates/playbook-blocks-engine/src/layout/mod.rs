//! Layout wrappers for images and diagrams placed beside lesson text.
//!
//! These carry no text grammar; they only map author-facing position and size
//! names onto a layout mode the renderer can apply.

pub mod image;

pub use image::{ImageBlock, ImageLoadState, ImagePresentation};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    #[default]
    Inline,
    Floating,
    SideBySide,
}

impl LayoutMode {
    pub fn name(self) -> &'static str {
        match self {
            LayoutMode::Inline => "inline",
            LayoutMode::Floating => "floating",
            LayoutMode::SideBySide => "sidebyside",
        }
    }
}

impl FromStr for LayoutMode {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inline" | "normal" => Ok(LayoutMode::Inline),
            "floating" => Ok(LayoutMode::Floating),
            "sidebyside" | "side-by-side" => Ok(LayoutMode::SideBySide),
            _ => Err(LayoutError::UnknownLayout(s.to_string())),
        }
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("Unknown layout: {0}")]
    UnknownLayout(String),
}

/// Which side the wrapped content sits on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Left,
    #[default]
    Right,
}

impl Position {
    /// Parses `left`/`right`; anything else is the default side.
    pub fn parse_or_default(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("left") {
            Position::Left
        } else {
            Position::Right
        }
    }

    pub fn mirrored(self) -> Self {
        match self {
            Position::Left => Position::Right,
            Position::Right => Position::Left,
        }
    }
}

/// Width of the wrapped content as a share of the column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LayoutSize {
    #[serde(rename = "1/3")]
    OneThird,
    #[default]
    #[serde(rename = "1/2")]
    Half,
    #[serde(rename = "2/3")]
    TwoThirds,
    #[serde(rename = "full")]
    Full,
}

impl LayoutSize {
    /// Normalises a size name. The legacy `small`/`medium`/`large` names map
    /// to thirds and halves; anything unrecognised is half width.
    pub fn normalize(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" | "1/3" => LayoutSize::OneThird,
            "medium" | "1/2" => LayoutSize::Half,
            "large" | "2/3" => LayoutSize::TwoThirds,
            "full" => LayoutSize::Full,
            _ => LayoutSize::Half,
        }
    }

    pub fn width_fraction(self) -> f32 {
        match self {
            LayoutSize::OneThird => 1.0 / 3.0,
            LayoutSize::Half => 0.5,
            LayoutSize::TwoThirds => 2.0 / 3.0,
            LayoutSize::Full => 1.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LayoutSize::OneThird => "1/3",
            LayoutSize::Half => "1/2",
            LayoutSize::TwoThirds => "2/3",
            LayoutSize::Full => "full",
        }
    }

    /// Columns out of `total` taken by content of this size, at least one.
    pub fn columns_of(self, total: u16) -> u16 {
        let cols = (f32::from(total) * self.width_fraction()).round() as u16;
        cols.clamp(1.min(total), total)
    }
}

/// A resolved layout: mode, side and width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub mode: LayoutMode,
    pub position: Position,
    pub size: LayoutSize,
}

impl Layout {
    pub fn new(mode: LayoutMode, position: Position, size: LayoutSize) -> Self {
        Self {
            mode,
            position,
            size,
        }
    }

    /// True when the wrapped content comes before the text in reading order.
    pub fn content_first(&self) -> bool {
        self.position == Position::Left
    }

    pub fn mirrored(self) -> Self {
        Self {
            position: self.position.mirrored(),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("small", LayoutSize::OneThird)]
    #[case("medium", LayoutSize::Half)]
    #[case("large", LayoutSize::TwoThirds)]
    #[case("1/3", LayoutSize::OneThird)]
    #[case("2/3", LayoutSize::TwoThirds)]
    #[case("FULL", LayoutSize::Full)]
    #[case("huge", LayoutSize::Half)]
    #[case("", LayoutSize::Half)]
    fn normalize_sizes(#[case] name: &str, #[case] expected: LayoutSize) {
        assert_eq!(LayoutSize::normalize(name), expected);
    }

    #[test]
    fn sizes_grow() {
        let small = LayoutSize::normalize("small").width_fraction();
        let medium = LayoutSize::normalize("medium").width_fraction();
        let large = LayoutSize::normalize("large").width_fraction();
        assert!(small < medium && medium < large);
        assert!(large < LayoutSize::Full.width_fraction());
    }

    #[test]
    fn columns() {
        assert_eq!(LayoutSize::Half.columns_of(80), 40);
        assert_eq!(LayoutSize::OneThird.columns_of(90), 30);
        assert_eq!(LayoutSize::Full.columns_of(7), 7);
        assert_eq!(LayoutSize::OneThird.columns_of(1), 1);
        assert_eq!(LayoutSize::Half.columns_of(0), 0);
    }

    #[test]
    fn positions_mirror() {
        assert_eq!(Position::Left.mirrored(), Position::Right);
        let layout = Layout::new(LayoutMode::Floating, Position::Left, LayoutSize::Half);
        assert!(layout.content_first());
        assert!(!layout.mirrored().content_first());
        assert_eq!(layout.mirrored().mirrored(), layout);
    }

    #[test]
    fn position_defaults_right() {
        assert_eq!(Position::parse_or_default("LEFT"), Position::Left);
        assert_eq!(Position::parse_or_default("up"), Position::Right);
    }

    #[test]
    fn layout_mode_names() {
        assert_eq!("floating".parse::<LayoutMode>(), Ok(LayoutMode::Floating));
        assert_eq!("SideBySide".parse::<LayoutMode>(), Ok(LayoutMode::SideBySide));
        assert_eq!("normal".parse::<LayoutMode>(), Ok(LayoutMode::Inline));
        assert!("grid".parse::<LayoutMode>().is_err());
    }
}
