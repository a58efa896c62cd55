//! Tick classification.

use crate::error::GaugeError;
use serde::{Deserialize, Serialize};

/// Visual weight of a tick mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TickSize {
    /// Plain tick
    Small,
    /// Multiple of the medium interval
    Medium,
    /// Multiple of the large interval; carries a label
    Large,
}

impl TickSize {
    /// Whether marks of this weight show their value.
    #[must_use]
    pub const fn is_labeled(self) -> bool {
        matches!(self, Self::Large)
    }
}

/// Divisors used to classify each value into a [`TickSize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IntervalSpec {
    medium: i64,
    large: i64,
}

impl IntervalSpec {
    /// Create a validated interval spec.
    ///
    /// # Errors
    ///
    /// Returns [`GaugeError::InvalidInterval`] if either divisor is not
    /// strictly positive.
    pub fn new(medium: i64, large: i64) -> Result<Self, GaugeError> {
        if medium <= 0 {
            return Err(GaugeError::InvalidInterval {
                name: "medium_interval",
                value: medium,
            });
        }
        if large <= 0 {
            return Err(GaugeError::InvalidInterval {
                name: "large_interval",
                value: large,
            });
        }
        Ok(Self { medium, large })
    }

    /// Medium divisor.
    #[must_use]
    pub const fn medium(&self) -> i64 {
        self.medium
    }

    /// Large divisor.
    #[must_use]
    pub const fn large(&self) -> i64 {
        self.large
    }

    /// Classify a value. Large wins when both divisors match.
    #[must_use]
    pub const fn classify(&self, value: i64) -> TickSize {
        if value % self.large == 0 {
            TickSize::Large
        } else if value % self.medium == 0 {
            TickSize::Medium
        } else {
            TickSize::Small
        }
    }
}

impl Default for IntervalSpec {
    fn default() -> Self {
        Self {
            medium: 5,
            large: 10,
        }
    }
}
