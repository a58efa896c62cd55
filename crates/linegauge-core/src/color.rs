//! RGBA colors and their `#rrggbb[aa]` notation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Linear RGBA, each channel in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    /// Opacity
    pub a: f32,
}

impl Color {
    pub const BLACK: Self = Self::opaque(0.0, 0.0, 0.0);
    pub const RED: Self = Self::opaque(1.0, 0.0, 0.0);

    const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Build a color, clamping every channel into range.
    #[must_use]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Opaque color from byte channels.
    #[must_use]
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        let unit = |c: u8| f32::from(c) / 255.0;
        Self::opaque(unit(r), unit(g), unit(b))
    }

    /// Parse `#rrggbb` or `#rrggbbaa`; the leading `#` is optional.
    ///
    /// # Errors
    ///
    /// Returns [`ColorParseError`] for non-hex digits or a wrong length.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.is_ascii() {
            return Err(ColorParseError::InvalidHex);
        }

        let byte = |at: usize| {
            u8::from_str_radix(&digits[at..at + 2], 16).map_err(|_| ColorParseError::InvalidHex)
        };
        let alpha = match digits.len() {
            6 => 1.0,
            8 => f32::from(byte(6)?) / 255.0,
            _ => return Err(ColorParseError::InvalidLength),
        };
        Ok(Self::rgb8(byte(0)?, byte(2)?, byte(4)?).with_alpha(alpha))
    }

    /// `#rrggbb`, ignoring opacity.
    #[must_use]
    pub fn to_hex(&self) -> String {
        let [r, g, b] = [self.r, self.g, self.b].map(to_byte);
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// `#rrggbbaa`.
    #[must_use]
    pub fn to_hex_with_alpha(&self) -> String {
        format!("{}{:02x}", self.to_hex(), to_byte(self.a))
    }

    /// Same hue at another opacity.
    #[must_use]
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self::new(self.r, self.g, self.b, alpha)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

fn to_byte(channel: f32) -> u8 {
    (channel * 255.0).round() as u8
}

/// Malformed hex color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("invalid hex characters")]
    InvalidHex,
    #[error("invalid hex string length (expected 6 or 8)")]
    InvalidLength,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new_clamps_values() {
        let c = Color::new(1.5, -0.5, 0.5, 2.0);
        assert_eq!((c.r, c.g, c.b, c.a), (1.0, 0.0, 0.5, 1.0));
    }

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex("#4A4A4A").unwrap();
        assert_eq!(c.to_hex(), "#4a4a4a");

        let c = Color::from_hex("979797").unwrap();
        assert_eq!(c.to_hex(), "#979797");
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn test_color_from_hex_with_alpha() {
        let c = Color::from_hex("#ff000099").unwrap();
        assert_eq!(c.r, 1.0);
        assert!((c.a - 0.6).abs() < 0.01);
        assert_eq!(c.to_hex_with_alpha(), "#ff000099");
    }

    #[test]
    fn test_color_from_hex_invalid() {
        assert_eq!(Color::from_hex("#gg0000"), Err(ColorParseError::InvalidHex));
        assert_eq!(Color::from_hex("#ff"), Err(ColorParseError::InvalidLength));
        assert_eq!(Color::from_hex("ééé"), Err(ColorParseError::InvalidHex));
    }

    #[test]
    fn test_color_with_alpha() {
        let c = Color::RED.with_alpha(0.6);
        assert_eq!(c.r, 1.0);
        assert!((c.a - 0.6).abs() < f32::EPSILON);
        assert_eq!(Color::RED.to_hex_with_alpha(), "#ff0000ff");
    }

    #[test]
    fn test_color_default() {
        assert_eq!(Color::default(), Color::BLACK);
    }

    #[test]
    fn test_color_parse_error_display() {
        assert_eq!(
            ColorParseError::InvalidLength.to_string(),
            "invalid hex string length (expected 6 or 8)"
        );
    }
}
