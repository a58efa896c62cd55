//! Visual styling for the line gauge.

use crate::interval::TickSize;
use linegauge_core::{Color, FontWeight, TextStyle};
use serde::{Deserialize, Serialize};

/// Colors and dimensions used when painting.
///
/// Colors are written as hex strings (`"#979797"`, `"#ff000099"`) in config
/// files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaugeStyle {
    /// Preferred widget height
    pub height: f32,
    /// Strip background
    #[serde(with = "hex_color")]
    pub background: Color,
    /// Top and bottom border color
    #[serde(with = "hex_color")]
    pub border_color: Color,
    /// Border thickness
    pub border_width: f32,
    /// Small and medium mark color
    #[serde(with = "hex_color")]
    pub tick_color: Color,
    /// Large mark color
    #[serde(with = "hex_color")]
    pub large_tick_color: Color,
    /// Small mark height
    pub small_height: f32,
    /// Medium mark height
    pub medium_height: f32,
    /// Large mark height
    pub large_height: f32,
    /// Small and medium mark width
    pub mark_width: f32,
    /// Large mark width
    pub large_mark_width: f32,
    /// Label font size
    pub label_size: f32,
    /// Space between a label and its mark
    pub label_gap: f32,
    /// Label color
    #[serde(with = "hex_color")]
    pub label_color: Color,
    /// Centerline color (alpha included)
    #[serde(with = "hex_color")]
    pub centerline_color: Color,
    /// Centerline height
    pub centerline_height: f32,
    /// Centerline width
    pub centerline_width: f32,
}

impl Default for GaugeStyle {
    fn default() -> Self {
        Self {
            height: 55.0,
            background: Color::rgb8(0xF9, 0xF9, 0xF9),
            border_color: Color::rgb8(0xDD, 0xDD, 0xDD),
            border_width: 1.0,
            tick_color: Color::rgb8(0x97, 0x97, 0x97),
            large_tick_color: Color::rgb8(0x4A, 0x4A, 0x4A),
            small_height: 13.0,
            medium_height: 20.0,
            large_height: 26.0,
            mark_width: 1.0,
            large_mark_width: 2.0,
            label_size: 9.0,
            label_gap: 3.0,
            label_color: Color::BLACK,
            centerline_color: Color::RED.with_alpha(0.6),
            centerline_height: 54.0,
            centerline_width: 1.0,
        }
    }
}

impl GaugeStyle {
    /// Height of a mark of the given weight.
    #[must_use]
    pub const fn mark_height(&self, size: TickSize) -> f32 {
        match size {
            TickSize::Small => self.small_height,
            TickSize::Medium => self.medium_height,
            TickSize::Large => self.large_height,
        }
    }

    /// Width of a mark of the given weight.
    #[must_use]
    pub const fn mark_width(&self, size: TickSize) -> f32 {
        match size {
            TickSize::Small | TickSize::Medium => self.mark_width,
            TickSize::Large => self.large_mark_width,
        }
    }

    /// Fill color of a mark of the given weight.
    #[must_use]
    pub const fn mark_color(&self, size: TickSize) -> Color {
        match size {
            TickSize::Small | TickSize::Medium => self.tick_color,
            TickSize::Large => self.large_tick_color,
        }
    }

    /// Text style for large-mark labels.
    #[must_use]
    pub const fn label_style(&self) -> TextStyle {
        TextStyle {
            size: self.label_size,
            color: self.label_color,
            weight: FontWeight::Bold,
        }
    }
}

mod hex_color {
    use linegauge_core::Color;
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(color: &Color, serializer: S) -> Result<S::Ok, S::Error> {
        if color.a < 1.0 {
            serializer.serialize_str(&color.to_hex_with_alpha())
        } else {
            serializer.serialize_str(&color.to_hex())
        }
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Color::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}
