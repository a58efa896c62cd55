//! Error types for the line gauge.

use thiserror::Error;

/// Errors raised while configuring a gauge.
///
/// Out-of-range values are never errors: they are clamped into the
/// configured range.
#[derive(Debug, Error)]
pub enum GaugeError {
    /// `max` must be strictly greater than `min`.
    #[error("invalid range: max ({max}) must be greater than min ({min})")]
    InvalidRange {
        /// Lower bound supplied
        min: f64,
        /// Upper bound supplied
        max: f64,
    },

    /// Tick classification divisors must be positive.
    #[error("invalid {name}: {value} (must be greater than zero)")]
    InvalidInterval {
        /// Which interval was rejected
        name: &'static str,
        /// Value supplied
        value: i64,
    },

    /// Tick pixel width must be finite and positive.
    #[error("invalid tick width: {0} (must be a positive, finite number of pixels)")]
    InvalidTickWidth(f32),

    /// Config file could not be parsed.
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GaugeError {
    /// True for errors that reject a configuration rather than an I/O failure.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(
            self,
            Self::InvalidRange { .. } | Self::InvalidInterval { .. } | Self::InvalidTickWidth(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_range_display() {
        let err = GaugeError::InvalidRange { min: 5.0, max: 5.0 };
        assert_eq!(
            err.to_string(),
            "invalid range: max (5) must be greater than min (5)"
        );
        assert!(err.is_config());
    }

    #[test]
    fn test_invalid_interval_display() {
        let err = GaugeError::InvalidInterval {
            name: "large_interval",
            value: 0,
        };
        let msg = err.to_string();
        assert!(msg.contains("large_interval"));
        assert!(msg.contains("greater than zero"));
    }

    #[test]
    fn test_invalid_tick_width_display() {
        let err = GaugeError::InvalidTickWidth(-1.0);
        assert!(err.to_string().contains("-1"));
        assert!(err.is_config());
    }

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gauge.toml");
        let err: GaugeError = io_err.into();
        assert!(matches!(err, GaugeError::Io(_)));
        assert!(!err.is_config());
        assert!(err.to_string().contains("gauge.toml"));
    }
}
