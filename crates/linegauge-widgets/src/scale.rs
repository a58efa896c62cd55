//! Linear mapping between domain values and scroll offsets.
//!
//! The same transform runs in both directions with the domain range and the
//! scroll-coordinate space swapping roles:
//!
//! ```text
//! output = rounding(((v - in_min) * (out_max - out_min)) / (in_max - in_min) + out_min)
//! ```
//!
//! Scroll offsets stay fractional; only the domain side is rounded. An
//! offset produced by `value_to_scroll(v)` always maps back to `v`, for any
//! tick width and either rounding policy.

use crate::error::GaugeError;
use crate::range::{GaugeRange, ScrollSpace};
use serde::{Deserialize, Serialize};

/// How fractional mapping results are turned into whole values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rounding {
    /// Round to the nearest integer, halves away from zero.
    #[default]
    Nearest,
    /// Round toward negative infinity.
    Floor,
}

impl Rounding {
    /// Apply the policy.
    #[must_use]
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Self::Nearest => x.round(),
            Self::Floor => x.floor(),
        }
    }
}

fn linear(v: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    (v - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

fn check_span(in_min: f64, in_max: f64) -> Result<(), GaugeError> {
    let span = in_max - in_min;
    if span == 0.0 || !span.is_finite() {
        return Err(GaugeError::InvalidRange {
            min: in_min,
            max: in_max,
        });
    }
    Ok(())
}

/// Map `v` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// # Errors
///
/// Returns [`GaugeError::InvalidRange`] when the input range is empty or not
/// finite, instead of producing `NaN` or an infinity.
pub fn scale(
    v: f64,
    in_min: f64,
    in_max: f64,
    out_min: f64,
    out_max: f64,
    rounding: Rounding,
) -> Result<f64, GaugeError> {
    check_span(in_min, in_max)?;
    Ok(rounding.apply(linear(v, in_min, in_max, out_min, out_max)))
}

/// Bidirectional mapper bound to one range and tick width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleMapper {
    range: GaugeRange,
    space: ScrollSpace,
    tick_width: f32,
    rounding: Rounding,
}

impl ScaleMapper {
    /// Build a mapper, deriving the scroll space from the range.
    ///
    /// Both directions pass the same span check as [`scale`], so the
    /// conversions below never divide by an empty span.
    ///
    /// # Errors
    ///
    /// Returns [`GaugeError::InvalidTickWidth`] for a non-positive or
    /// non-finite tick width, and [`GaugeError::InvalidRange`] when either
    /// span is empty or overflows to infinity.
    pub fn new(range: GaugeRange, tick_width: f32, rounding: Rounding) -> Result<Self, GaugeError> {
        let space = ScrollSpace::for_range(&range, tick_width)?;
        check_span(range.min() as f64, range.max() as f64)?;
        check_span(f64::from(space.min), f64::from(space.max))?;
        Ok(Self {
            range,
            space,
            tick_width,
            rounding,
        })
    }

    /// Domain range.
    #[must_use]
    pub const fn range(&self) -> GaugeRange {
        self.range
    }

    /// Scroll-coordinate space.
    #[must_use]
    pub const fn space(&self) -> ScrollSpace {
        self.space
    }

    /// Pixels between ticks.
    #[must_use]
    pub const fn tick_width(&self) -> f32 {
        self.tick_width
    }

    /// Rounding policy.
    #[must_use]
    pub const fn rounding(&self) -> Rounding {
        self.rounding
    }

    /// Scroll offset that puts `value` under the centerline.
    ///
    /// Not rounded: with a fractional tick width the offset is fractional.
    #[must_use]
    pub fn value_to_scroll(&self, value: i64) -> f32 {
        linear(
            value as f64,
            self.range.min() as f64,
            self.range.max() as f64,
            f64::from(self.space.min),
            f64::from(self.space.max),
        ) as f32
    }

    /// Domain value under the centerline at `offset_x`, without clamping.
    #[must_use]
    pub fn scroll_to_value(&self, offset_x: f32) -> i64 {
        let value = linear(
            f64::from(offset_x),
            f64::from(self.space.min),
            f64::from(self.space.max),
            self.range.min() as f64,
            self.range.max() as f64,
        );

        // A tick's own offset may carry f32 error that floors one value low.
        let nearest = value.round() as i64;
        if self.value_to_scroll(nearest) == offset_x {
            return nearest;
        }
        self.rounding.apply(value) as i64
    }

    /// Domain value at `offset_x`, clamped into the range.
    ///
    /// Overscroll past either end of the content is expected while the
    /// surface rubber-bands, so it is absorbed here rather than reported.
    #[must_use]
    pub fn clamped_value(&self, offset_x: f32) -> i64 {
        self.range.clamp(self.scroll_to_value(offset_x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::DEFAULT_TICK_WIDTH;
    use proptest::prelude::*;

    fn default_mapper(rounding: Rounding) -> ScaleMapper {
        ScaleMapper::new(GaugeRange::default(), DEFAULT_TICK_WIDTH, rounding).unwrap()
    }

    // =========================================================================
    // scale()
    // =========================================================================

    #[test]
    fn test_scale_degenerate_range_is_error() {
        let err = scale(5.0, 5.0, 5.0, 0.0, 100.0, Rounding::Nearest).unwrap_err();
        assert!(matches!(err, GaugeError::InvalidRange { .. }));
    }

    #[test]
    fn test_scale_non_finite_range_is_error() {
        assert!(scale(1.0, 0.0, f64::INFINITY, 0.0, 1.0, Rounding::Floor).is_err());
        assert!(scale(1.0, f64::NAN, 1.0, 0.0, 1.0, Rounding::Floor).is_err());
    }

    #[test]
    fn test_scale_rounding_policies_differ() {
        // 0.75 along [0, 1] lands on 7.5 in [0, 10]
        assert_eq!(scale(0.75, 0.0, 1.0, 0.0, 10.0, Rounding::Nearest).unwrap(), 8.0);
        assert_eq!(scale(0.75, 0.0, 1.0, 0.0, 10.0, Rounding::Floor).unwrap(), 7.0);
    }

    #[test]
    fn test_scale_inverted_output() {
        assert_eq!(scale(0.0, 0.0, 10.0, 100.0, 0.0, Rounding::Nearest).unwrap(), 100.0);
    }

    // =========================================================================
    // ScaleMapper
    // =========================================================================

    #[test]
    fn test_value_to_scroll_scenario() {
        let mapper = default_mapper(Rounding::Nearest);
        assert_eq!(mapper.value_to_scroll(80), 1422.0);
        assert_eq!(mapper.value_to_scroll(1), 0.0);
        assert_eq!(mapper.value_to_scroll(100), 1782.0);
    }

    #[test]
    fn test_scroll_to_value_scenario() {
        for rounding in [Rounding::Nearest, Rounding::Floor] {
            assert_eq!(default_mapper(rounding).scroll_to_value(900.0), 51);
        }
    }

    #[test]
    fn test_between_ticks_rounding_boundary() {
        // 909px is half a tick past 51's offset (900)
        assert_eq!(default_mapper(Rounding::Nearest).scroll_to_value(909.0), 52);
        assert_eq!(default_mapper(Rounding::Floor).scroll_to_value(909.0), 51);
        assert_eq!(default_mapper(Rounding::Nearest).scroll_to_value(908.0), 51);
        assert_eq!(default_mapper(Rounding::Floor).scroll_to_value(917.0), 51);
    }

    #[test]
    fn test_overscroll_is_clamped() {
        let mapper = default_mapper(Rounding::Nearest);
        assert_eq!(mapper.scroll_to_value(-90.0), -4);
        assert_eq!(mapper.clamped_value(-90.0), 1);
        assert_eq!(mapper.clamped_value(5000.0), 100);
    }

    #[test]
    fn test_floor_overscroll_below_zero_is_clamped() {
        let mapper = default_mapper(Rounding::Floor);
        assert_eq!(mapper.scroll_to_value(-1.0), 0);
        assert_eq!(mapper.clamped_value(-1.0), 1);
    }

    #[test]
    fn test_mapper_accessors() {
        let mapper = default_mapper(Rounding::Floor);
        assert_eq!(mapper.range(), GaugeRange::default());
        assert_eq!(mapper.space().max, 1782.0);
        assert_eq!(mapper.tick_width(), 18.0);
        assert_eq!(mapper.rounding(), Rounding::Floor);
    }

    #[test]
    fn test_mapper_rejects_zero_tick_width() {
        let err = ScaleMapper::new(GaugeRange::default(), 0.0, Rounding::Nearest).unwrap_err();
        assert!(matches!(err, GaugeError::InvalidTickWidth(_)));
    }

    #[test]
    fn test_mapper_rejects_overflowing_scroll_space() {
        let err = ScaleMapper::new(GaugeRange::default(), f32::MAX, Rounding::Nearest).unwrap_err();
        assert!(matches!(err, GaugeError::InvalidRange { .. }));
    }

    #[test]
    fn test_fractional_tick_width_round_trips() {
        let range = GaugeRange::default();
        for rounding in [Rounding::Nearest, Rounding::Floor] {
            let mapper = ScaleMapper::new(range, 18.5, rounding).unwrap();
            assert_eq!(mapper.value_to_scroll(2), 18.5);
            for v in 1..=100 {
                assert_eq!(mapper.scroll_to_value(mapper.value_to_scroll(v)), v);
            }
        }
    }

    #[test]
    fn test_fractional_tick_width_between_ticks() {
        let mapper = ScaleMapper::new(GaugeRange::default(), 18.5, Rounding::Floor).unwrap();
        assert_eq!(mapper.scroll_to_value(18.0), 1);
        assert_eq!(mapper.scroll_to_value(36.9), 2);
    }

    proptest! {
        #[test]
        fn prop_round_trip_is_exact(
            min in -1_000i64..1_000,
            span in 1i64..2_000,
            pick in 0.0f64..=1.0,
            tick_width in 0.1f32..64.0,
            floor in any::<bool>(),
        ) {
            let rounding = if floor { Rounding::Floor } else { Rounding::Nearest };
            let range = GaugeRange::new(min, min + span).unwrap();
            let mapper = ScaleMapper::new(range, tick_width, rounding).unwrap();
            let v = min + (pick * span as f64) as i64;
            prop_assert_eq!(mapper.scroll_to_value(mapper.value_to_scroll(v)), v);
        }

        #[test]
        fn prop_clamped_value_stays_in_range(offset in -10_000.0f32..20_000.0, floor in any::<bool>()) {
            let rounding = if floor { Rounding::Floor } else { Rounding::Nearest };
            let mapper = default_mapper(rounding);
            let v = mapper.clamped_value(offset);
            prop_assert!((1..=100).contains(&v));
        }

        #[test]
        fn prop_scroll_to_value_is_monotonic(a in 0.0f32..1782.0, b in 0.0f32..1782.0) {
            let mapper = default_mapper(Rounding::Nearest);
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(mapper.scroll_to_value(lo) <= mapper.scroll_to_value(hi));
        }
    }
}
