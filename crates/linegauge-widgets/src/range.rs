//! Domain range and the scroll-coordinate space derived from it.

use crate::error::GaugeError;
use serde::Serialize;

/// Pixels between two adjacent ticks.
pub const DEFAULT_TICK_WIDTH: f32 = 18.0;

/// Inclusive domain bounds with `max > min`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GaugeRange {
    min: i64,
    max: i64,
}

impl GaugeRange {
    /// Create a validated range.
    ///
    /// # Errors
    ///
    /// Returns [`GaugeError::InvalidRange`] when `max <= min`.
    pub fn new(min: i64, max: i64) -> Result<Self, GaugeError> {
        if max <= min || max.checked_sub(min).is_none() {
            return Err(GaugeError::InvalidRange {
                min: min as f64,
                max: max as f64,
            });
        }
        Ok(Self { min, max })
    }

    /// Lower bound.
    #[must_use]
    pub const fn min(&self) -> i64 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub const fn max(&self) -> i64 {
        self.max
    }

    /// Number of tick steps between `min` and `max`.
    #[must_use]
    pub const fn span(&self) -> i64 {
        self.max - self.min
    }

    /// Check whether `value` lies inside the range.
    #[must_use]
    pub const fn contains(&self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp `value` into the range.
    #[must_use]
    pub fn clamp(&self, value: i64) -> i64 {
        value.clamp(self.min, self.max)
    }

    /// Every integer in the range, ascending.
    pub fn values(&self) -> impl Iterator<Item = i64> {
        self.min..=self.max
    }
}

impl Default for GaugeRange {
    fn default() -> Self {
        Self { min: 1, max: 100 }
    }
}

/// Pixel extent the scroll surface can report: `[0, span * tick_width]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScrollSpace {
    /// Always zero; the first tick sits at the start of the content.
    pub min: f32,
    /// Offset of the last tick.
    pub max: f32,
}

impl ScrollSpace {
    /// Derive the scroll space for a range.
    ///
    /// # Errors
    ///
    /// Returns [`GaugeError::InvalidTickWidth`] when `tick_width` is not a
    /// positive finite number.
    pub fn for_range(range: &GaugeRange, tick_width: f32) -> Result<Self, GaugeError> {
        if !tick_width.is_finite() || tick_width <= 0.0 {
            return Err(GaugeError::InvalidTickWidth(tick_width));
        }
        Ok(Self {
            min: 0.0,
            max: range.span() as f32 * tick_width,
        })
    }

    /// Width of the space in pixels.
    #[must_use]
    pub fn extent(&self) -> f32 {
        self.max - self.min
    }
}
