//! Colors and container styling applied behind transitioning screens.

use std::str::FromStr;

use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Parse a CSS hex color: `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`
    pub fn parse_hex(input: &str) -> Result<Self> {
        let invalid = || ConfigError::InvalidColor(input.to_string());

        let digits = input.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channels: Vec<u8> = match digits.len() {
            // Short form: each digit is doubled, "e" -> "ee"
            3 | 4 => digits
                .chars()
                .map(|c| c.to_digit(16).map(|d| (d * 17) as u8))
                .collect::<Option<_>>()
                .ok_or_else(invalid)?,
            6 | 8 => (0..digits.len())
                .step_by(2)
                .map(|i| u8::from_str_radix(&digits[i..i + 2], 16).ok())
                .collect::<Option<_>>()
                .ok_or_else(invalid)?,
            _ => return Err(invalid()),
        };

        let channel = |i: usize| channels.get(i).map_or(1.0, |&v| v as f32 / 255.0);
        Ok(Self::rgba(channel(0), channel(1), channel(2), channel(3)))
    }

    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);
    /// `#eee`, painted behind sliding screens
    pub const CARD_BACKGROUND: Color = Color::from_hex(0xEEEEEE);
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

impl FromStr for Color {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse_hex(s.trim())
    }
}

/// Styling for the container that hosts the transitioning screens
///
/// Presets set a background color where the surface underneath would
/// otherwise flash through mid-transition.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContainerStyle {
    pub background_color: Option<Color>,
}

impl ContainerStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(color: Color) -> Self {
        Self {
            background_color: Some(color),
        }
    }

    pub fn background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_hex() {
        let color = Color::parse_hex("#eee").unwrap();
        assert_eq!(color, Color::CARD_BACKGROUND);
        assert_eq!(color.a, 1.0);
    }

    #[test]
    fn test_parse_long_hex() {
        assert_eq!(Color::parse_hex("#000000").unwrap(), Color::BLACK);
        assert_eq!(Color::parse_hex("#ffffff").unwrap(), Color::WHITE);
        let translucent = Color::parse_hex("#00000000").unwrap();
        assert_eq!(translucent, Color::TRANSPARENT);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for input in ["eee", "#ee", "#eeeee", "#ggg", "#", ""] {
            assert_eq!(
                Color::parse_hex(input),
                Err(ConfigError::InvalidColor(input.to_string())),
                "{input}"
            );
        }
    }

    #[test]
    fn test_from_str_trims() {
        let color: Color = " #000 ".parse().unwrap();
        assert_eq!(color, Color::BLACK);
    }

    #[test]
    fn test_container_style_builder() {
        let style = ContainerStyle::new().background_color(Color::BLACK);
        assert_eq!(style, ContainerStyle::background(Color::BLACK));
        assert_eq!(ContainerStyle::default().background_color, None);
    }
}
