//! Style types for color scheme attributes
//!
//! This module provides the color and text attribute values a color
//! scheme assigns to style keys.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::error::PaletteError;

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$").unwrap());

static RGB_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rgb\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*\)$").unwrap()
});

/// Scheme colors: the ANSI 16-color palette plus true color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    Rgb(u8, u8, u8),
}

impl Color {
    const NAMED: [(&'static str, Color); 16] = [
        ("black", Color::Black),
        ("red", Color::Red),
        ("green", Color::Green),
        ("yellow", Color::Yellow),
        ("blue", Color::Blue),
        ("magenta", Color::Magenta),
        ("cyan", Color::Cyan),
        ("white", Color::White),
        ("bright-black", Color::BrightBlack),
        ("bright-red", Color::BrightRed),
        ("bright-green", Color::BrightGreen),
        ("bright-yellow", Color::BrightYellow),
        ("bright-blue", Color::BrightBlue),
        ("bright-magenta", Color::BrightMagenta),
        ("bright-cyan", Color::BrightCyan),
        ("bright-white", Color::BrightWhite),
    ];

    /// Approximate RGB value, using the xterm defaults for named colors
    pub fn to_rgb(self) -> (u8, u8, u8) {
        match self {
            Color::Black => (0, 0, 0),
            Color::Red => (205, 0, 0),
            Color::Green => (0, 205, 0),
            Color::Yellow => (205, 205, 0),
            Color::Blue => (0, 0, 238),
            Color::Magenta => (205, 0, 205),
            Color::Cyan => (0, 205, 205),
            Color::White => (229, 229, 229),
            Color::BrightBlack => (127, 127, 127),
            Color::BrightRed => (255, 0, 0),
            Color::BrightGreen => (0, 255, 0),
            Color::BrightYellow => (255, 255, 0),
            Color::BrightBlue => (92, 92, 255),
            Color::BrightMagenta => (255, 0, 255),
            Color::BrightCyan => (0, 255, 255),
            Color::BrightWhite => (255, 255, 255),
            Color::Rgb(r, g, b) => (r, g, b),
        }
    }

    /// Perceived brightness in 0..=255 (ITU-R BT.601 weights)
    pub fn luminance(self) -> u8 {
        let (r, g, b) = self.to_rgb();
        ((299 * r as u32 + 587 * g as u32 + 114 * b as u32) / 1000) as u8
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Color::Rgb(r, g, b) = self {
            return write!(f, "#{:02x}{:02x}{:02x}", r, g, b);
        }
        let name = Self::NAMED
            .iter()
            .find(|(_, color)| color == self)
            .map(|(name, _)| *name)
            .unwrap_or("?");
        f.write_str(name)
    }
}

impl FromStr for Color {
    type Err = PaletteError;

    /// Parse a color name (`"bright-red"`), `#rrggbb`, or `rgb(r, g, b)`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let lower = s.to_lowercase().replace('_', "-");
        if let Some((_, color)) = Self::NAMED.iter().find(|(name, _)| *name == lower) {
            return Ok(*color);
        }

        if let Some(caps) = HEX_COLOR.captures(s) {
            let channel = |i: usize| u8::from_str_radix(&caps[i], 16).unwrap_or(0);
            return Ok(Color::Rgb(channel(1), channel(2), channel(3)));
        }

        if let Some(caps) = RGB_COLOR.captures(&lower) {
            let mut channels = [0u8; 3];
            for (slot, i) in channels.iter_mut().zip(1..=3) {
                *slot = caps[i]
                    .parse::<u8>()
                    .map_err(|_| PaletteError::InvalidColor(s.to_string()))?;
            }
            return Ok(Color::Rgb(channels[0], channels[1], channels[2]));
        }

        Err(PaletteError::InvalidColor(s.to_string()))
    }
}

/// How an effect color is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EffectType {
    #[default]
    Underline,
    WaveUnderline,
    Bordered,
    StrikeOut,
}

/// Text attributes a scheme assigns to one style key
///
/// Every color is optional: an unset color means "inherit from the
/// editor default".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextAttributes {
    /// Foreground color
    pub foreground: Option<Color>,
    /// Background color
    pub background: Option<Color>,
    /// Color of the underline/border/strike effect
    pub effect_color: Option<Color>,
    /// Effect drawn with `effect_color`
    pub effect: EffectType,
    /// Color of the marker in the scrollbar error stripe
    pub error_stripe: Option<Color>,
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italic: bool,
}

impl TextAttributes {
    /// Create attributes with just a foreground color
    pub fn fg(color: Color) -> Self {
        Self {
            foreground: Some(color),
            ..Default::default()
        }
    }

    /// Create attributes with just a background color
    pub fn bg(color: Color) -> Self {
        Self {
            background: Some(color),
            ..Default::default()
        }
    }

    /// Builder: set background color
    pub fn with_bg(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Builder: set an effect and its color
    pub fn with_effect(mut self, effect: EffectType, color: Color) -> Self {
        self.effect = effect;
        self.effect_color = Some(color);
        self
    }

    /// Builder: set error stripe color
    pub fn with_error_stripe(mut self, color: Color) -> Self {
        self.error_stripe = Some(color);
        self
    }

    /// Builder: set bold
    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Builder: set italic
    pub fn with_italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Check if these attributes carry nothing
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attributes_default() {
        let attrs = TextAttributes::default();
        assert!(attrs.is_empty());
        assert_eq!(attrs.foreground, None);
        assert_eq!(attrs.effect, EffectType::Underline);
    }

    #[test]
    fn test_attributes_builders() {
        let attrs = TextAttributes::fg(Color::Red)
            .with_bold()
            .with_bg(Color::Blue)
            .with_effect(EffectType::WaveUnderline, Color::Yellow);
        assert_eq!(attrs.foreground, Some(Color::Red));
        assert_eq!(attrs.background, Some(Color::Blue));
        assert_eq!(attrs.effect_color, Some(Color::Yellow));
        assert_eq!(attrs.effect, EffectType::WaveUnderline);
        assert!(attrs.bold);
        assert!(!attrs.is_empty());
    }

    #[test]
    fn test_parse_named_colors() {
        assert_eq!("red".parse::<Color>().unwrap(), Color::Red);
        assert_eq!("Bright_Blue".parse::<Color>().unwrap(), Color::BrightBlue);
        assert_eq!(" bright-white ".parse::<Color>().unwrap(), Color::BrightWhite);
    }

    #[test]
    fn test_parse_true_colors() {
        assert_eq!("#ff8000".parse::<Color>().unwrap(), Color::Rgb(255, 128, 0));
        assert_eq!("#FF8000".parse::<Color>().unwrap(), Color::Rgb(255, 128, 0));
        assert_eq!("rgb(1, 2, 3)".parse::<Color>().unwrap(), Color::Rgb(1, 2, 3));
    }

    #[test]
    fn test_parse_invalid_colors() {
        assert!("".parse::<Color>().is_err());
        assert!("#12345".parse::<Color>().is_err());
        assert!("rgb(256, 0, 0)".parse::<Color>().is_err());
        assert!("mauve".parse::<Color>().is_err());
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for color in [Color::BrightCyan, Color::Rgb(10, 20, 30)] {
            assert_eq!(color.to_string().parse::<Color>().unwrap(), color);
        }
    }

    #[test]
    fn test_luminance() {
        assert_eq!(Color::Black.luminance(), 0);
        assert_eq!(Color::BrightWhite.luminance(), 255);
        assert!(Color::Yellow.luminance() > Color::Blue.luminance());
    }
}
