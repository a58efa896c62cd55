//! Tick layout.
//!
//! Pure function of range, intervals and tick width. Content x positions are
//! measured from the first tick; the widget adds the centerline padding and
//! subtracts the scroll offset when painting.

use crate::interval::{IntervalSpec, TickSize};
use crate::range::GaugeRange;

/// One mark on the ruler.
#[derive(Debug, Clone, PartialEq)]
pub struct TickMark {
    /// Domain value
    pub value: i64,
    /// Visual weight
    pub size: TickSize,
    /// Numeric label (large marks only)
    pub label: Option<String>,
    /// Content x position of the mark's center
    pub x: f32,
}

/// Positions and classifies every tick of a gauge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickLayout {
    range: GaugeRange,
    intervals: IntervalSpec,
    tick_width: f32,
}

impl TickLayout {
    /// Create a layout. `tick_width` is expected to be validated already.
    #[must_use]
    pub const fn new(range: GaugeRange, intervals: IntervalSpec, tick_width: f32) -> Self {
        Self {
            range,
            intervals,
            tick_width,
        }
    }

    /// Content x of a value's tick.
    #[must_use]
    pub fn position(&self, value: i64) -> f32 {
        (value - self.range.min()) as f32 * self.tick_width
    }

    /// Build the mark for one value.
    #[must_use]
    pub fn mark(&self, value: i64) -> TickMark {
        let size = self.intervals.classify(value);
        TickMark {
            value,
            size,
            label: size.is_labeled().then(|| value.to_string()),
            x: self.position(value),
        }
    }

    /// Every mark from `min` to `max`.
    pub fn marks(&self) -> impl Iterator<Item = TickMark> + '_ {
        self.range.values().map(|v| self.mark(v))
    }

    /// Marks that fall inside a viewport of `viewport_width` pixels whose
    /// center sits at content offset `offset_x`, plus one tick of slack on
    /// each side.
    pub fn visible(&self, offset_x: f32, viewport_width: f32) -> impl Iterator<Item = TickMark> + '_ {
        let half = f64::from(viewport_width.max(0.0)) / 2.0;
        let offset = f64::from(offset_x);
        let tick = f64::from(self.tick_width);

        let first = ((offset - half) / tick).floor() as i64 - 1;
        let last = ((offset + half) / tick).ceil() as i64 + 1;

        let lo = self.range.min().saturating_add(first).max(self.range.min());
        let hi = self.range.min().saturating_add(last).min(self.range.max());
        (lo..=hi).map(|v| self.mark(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::DEFAULT_TICK_WIDTH;

    fn default_layout() -> TickLayout {
        TickLayout::new(
            GaugeRange::default(),
            IntervalSpec::default(),
            DEFAULT_TICK_WIDTH,
        )
    }

    #[test]
    fn test_marks_cover_whole_range() {
        let layout = default_layout();
        let marks: Vec<_> = layout.marks().collect();
        assert_eq!(marks.len(), 100);
        assert_eq!(marks[0].value, 1);
        assert_eq!(marks[0].x, 0.0);
        assert_eq!(marks[99].value, 100);
        assert_eq!(marks[99].x, 1782.0);
    }

    #[test]
    fn test_only_large_marks_have_labels() {
        let layout = default_layout();
        let labeled: Vec<_> = layout
            .marks()
            .filter_map(|m| m.label)
            .collect();
        assert_eq!(
            labeled,
            vec!["10", "20", "30", "40", "50", "60", "70", "80", "90", "100"]
        );
    }

    #[test]
    fn test_mark_classification() {
        let layout = default_layout();
        assert_eq!(layout.mark(10).size, TickSize::Large);
        assert_eq!(layout.mark(15).size, TickSize::Medium);
        assert_eq!(layout.mark(12).size, TickSize::Small);
        assert!(layout.mark(15).label.is_none());
    }

    #[test]
    fn test_visible_window_at_start() {
        let layout = default_layout();
        // 360px viewport centred on value 1: 180px covers 10 ticks, +1 slack
        let values: Vec<_> = layout.visible(0.0, 360.0).map(|m| m.value).collect();
        assert_eq!(values.first(), Some(&1));
        assert_eq!(values.last(), Some(&12));
    }

    #[test]
    fn test_visible_window_in_middle() {
        let layout = default_layout();
        // Centred on 51 (offset 900): 720..=1080px spans 41..=61, plus one tick of slack
        let values: Vec<_> = layout.visible(900.0, 360.0).map(|m| m.value).collect();
        assert_eq!(values.first(), Some(&40));
        assert_eq!(values.last(), Some(&62));
        assert!(values.contains(&51));
    }

    #[test]
    fn test_visible_window_past_end_is_clamped() {
        let layout = default_layout();
        let values: Vec<_> = layout.visible(1782.0, 360.0).map(|m| m.value).collect();
        assert_eq!(values.last(), Some(&100));
        assert!(layout.visible(100_000.0, 360.0).next().is_none());
    }

    #[test]
    fn test_visible_window_zero_width() {
        let layout = default_layout();
        let values: Vec<_> = layout.visible(900.0, 0.0).map(|m| m.value).collect();
        assert_eq!(values, vec![50, 51, 52]);
    }
}
