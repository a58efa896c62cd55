//! Gauge configuration.
//!
//! Every construction option lives in [`GaugeConfig`], which can be built in
//! code or loaded from TOML:
//!
//! ```toml
//! min = 1
//! max = 100
//! medium_interval = 5
//! large_interval = 10
//! rounding = "nearest"
//! mode = { controlled = { value = 50 } }
//!
//! [style]
//! tick_color = "#979797"
//! ```

use crate::error::GaugeError;
use crate::interval::IntervalSpec;
use crate::range::{GaugeRange, DEFAULT_TICK_WIDTH};
use crate::scale::{Rounding, ScaleMapper};
use crate::style::GaugeStyle;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Who owns the gauge's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueMode {
    /// The host supplies the value and re-supplies it after each change.
    Controlled {
        /// Externally imposed value
        value: i64,
    },
    /// The gauge keeps its own value, starting from `initial_value` (or `min`).
    Uncontrolled {
        /// Starting value
        #[serde(default)]
        initial_value: Option<i64>,
    },
}

impl Default for ValueMode {
    fn default() -> Self {
        Self::Uncontrolled {
            initial_value: None,
        }
    }
}

impl ValueMode {
    /// Value the gauge starts at, clamped into `range`.
    #[must_use]
    pub fn initial(&self, range: &GaugeRange) -> i64 {
        match *self {
            Self::Controlled { value } => range.clamp(value),
            Self::Uncontrolled { initial_value } => {
                range.clamp(initial_value.unwrap_or_else(|| range.min()))
            }
        }
    }

    /// Externally imposed value, if controlled.
    #[must_use]
    pub const fn external(&self) -> Option<i64> {
        match *self {
            Self::Controlled { value } => Some(value),
            Self::Uncontrolled { .. } => None,
        }
    }

    /// Whether the host owns the value.
    #[must_use]
    pub const fn is_controlled(&self) -> bool {
        matches!(self, Self::Controlled { .. })
    }
}

/// Construction options for a line gauge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GaugeConfig {
    /// Inclusive lower bound
    pub min: i64,
    /// Inclusive upper bound
    pub max: i64,
    /// Divisor for medium marks
    pub medium_interval: i64,
    /// Divisor for large (labelled) marks
    pub large_interval: i64,
    /// Pixels between adjacent ticks
    pub tick_width: f32,
    /// Rounding applied by the scale mapper
    pub rounding: Rounding,
    /// Animate programmatic scrolls to externally set values
    pub animate_sync: bool,
    /// Controlled or uncontrolled value
    pub mode: ValueMode,
    /// Visual style
    pub style: GaugeStyle,
}

impl Default for GaugeConfig {
    fn default() -> Self {
        Self {
            min: 1,
            max: 100,
            medium_interval: 5,
            large_interval: 10,
            tick_width: DEFAULT_TICK_WIDTH,
            rounding: Rounding::default(),
            animate_sync: false,
            mode: ValueMode::default(),
            style: GaugeStyle::default(),
        }
    }
}

impl GaugeConfig {
    /// Set the domain bounds.
    #[must_use]
    pub const fn with_range(mut self, min: i64, max: i64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Set the tick classification divisors.
    #[must_use]
    pub const fn with_intervals(mut self, medium: i64, large: i64) -> Self {
        self.medium_interval = medium;
        self.large_interval = large;
        self
    }

    /// Set the pixel distance between ticks.
    #[must_use]
    pub const fn with_tick_width(mut self, tick_width: f32) -> Self {
        self.tick_width = tick_width;
        self
    }

    /// Set the rounding policy.
    #[must_use]
    pub const fn with_rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }

    /// Enable or disable animated sync scrolls.
    #[must_use]
    pub const fn with_animate_sync(mut self, animate: bool) -> Self {
        self.animate_sync = animate;
        self
    }

    /// Make the value externally controlled.
    #[must_use]
    pub const fn controlled(mut self, value: i64) -> Self {
        self.mode = ValueMode::Controlled { value };
        self
    }

    /// Let the gauge own its value.
    #[must_use]
    pub const fn uncontrolled(mut self, initial_value: Option<i64>) -> Self {
        self.mode = ValueMode::Uncontrolled { initial_value };
        self
    }

    /// Set the visual style.
    #[must_use]
    pub fn with_style(mut self, style: GaugeStyle) -> Self {
        self.style = style;
        self
    }

    /// Check every option and build the mapper and interval spec.
    ///
    /// # Errors
    ///
    /// Returns the first configuration error found: range, then intervals,
    /// then tick width.
    pub fn validate(&self) -> Result<(ScaleMapper, IntervalSpec), GaugeError> {
        let range = GaugeRange::new(self.min, self.max)?;
        let intervals = IntervalSpec::new(self.medium_interval, self.large_interval)?;
        let mapper = ScaleMapper::new(range, self.tick_width, self.rounding)?;
        Ok((mapper, intervals))
    }

    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`GaugeError::Parse`] for malformed TOML or unknown keys and a
    /// configuration error for invalid values.
    pub fn from_toml_str(source: &str) -> Result<Self, GaugeError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`GaugeError::Io`] if the file cannot be read, otherwise as
    /// [`GaugeConfig::from_toml_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, GaugeError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }
}
