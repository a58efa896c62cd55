//! Reconciliation between user scrolling and externally imposed values.
//!
//! The gauge has two sources of truth competing for the scroll position: the
//! user's finger and the host's `value`. The [`Reconciler`] decides which one
//! wins for each event:
//!
//! - **Idle**: the scroll position reflects the current value. Scroll events
//!   are the user's, and a new value under the centerline is reported.
//! - **Syncing**: a programmatic scroll to an external value is queued
//!   (waiting for the content to be laid out) or, when animated, in flight.
//!   Scroll events are not reported.
//!
//! At most one programmatic target is kept; a newer external value
//! overwrites an older queued one.

use crate::scale::ScaleMapper;
use linegauge_core::{ScrollCommand, ScrollSurface};
use serde::Serialize;
use tracing::debug;

/// Offsets closer than this to a tick count as resting on it.
const SNAP_TOLERANCE: f32 = 0.5;

/// Reconciliation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SyncState {
    /// Scroll position reflects the current value
    Idle,
    /// A programmatic scroll is pending or in flight
    Syncing,
}

/// Pending programmatic scroll target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScrollQueue {
    /// Value the scroll will land on
    pub value: i64,
    /// Target content offset
    pub offset_x: f32,
    /// Whether to animate
    pub animate: bool,
}

impl ScrollQueue {
    const fn command(&self) -> ScrollCommand {
        ScrollCommand {
            offset_x: self.offset_x,
            animated: self.animate,
        }
    }
}

/// Outcome of a momentum-scroll end.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Settled {
    /// Newly settled value to report, if any
    pub changed: Option<i64>,
    /// Snap command issued to the surface, if any
    pub command: Option<ScrollCommand>,
}

/// State machine arbitrating between user and programmatic scrolling.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciler {
    value: i64,
    queue: Option<ScrollQueue>,
    layout_pending: bool,
    in_flight: Option<i64>,
}

impl Reconciler {
    /// Start idle at `value`.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self {
            value,
            queue: None,
            layout_pending: false,
            in_flight: None,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> SyncState {
        if self.queue.is_some() || self.in_flight.is_some() {
            SyncState::Syncing
        } else {
            SyncState::Idle
        }
    }

    /// Last known value.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.value
    }

    /// Pending programmatic target.
    #[must_use]
    pub const fn queue(&self) -> Option<&ScrollQueue> {
        self.queue.as_ref()
    }

    /// Whether a content-size-changed event is awaited.
    #[must_use]
    pub const fn is_layout_pending(&self) -> bool {
        self.layout_pending
    }

    /// The scroll-coordinate space changed (new range or tick width).
    ///
    /// The position is realigned to the pending target, or to the current
    /// value clamped into the new range, once the content reports its new
    /// size.
    pub fn bounds_changed(&mut self, mapper: &ScaleMapper) {
        let target = self.queue.map_or(self.value, |q| q.value);
        let value = mapper.range().clamp(target);
        if value != target {
            debug!(from = target, to = value, "clamped value into new range");
        }

        self.layout_pending = true;
        self.in_flight = None;
        self.queue = Some(ScrollQueue {
            value,
            offset_x: mapper.value_to_scroll(value),
            animate: false,
        });
        debug!(value, "coordinate space changed; realignment deferred");
    }

    /// An external value arrived.
    ///
    /// Returns the command issued to `surface` when the scroll could be
    /// applied immediately. Repeating the current (or already pending)
    /// value is a no-op.
    pub fn set_external(
        &mut self,
        value: i64,
        mapper: &ScaleMapper,
        animate: bool,
        surface: &mut dyn ScrollSurface,
    ) -> Option<ScrollCommand> {
        let clamped = mapper.range().clamp(value);
        if clamped != value {
            debug!(value, clamped, "external value out of range");
        }

        let pending = self.queue.map(|q| q.value).or(self.in_flight);
        if pending.unwrap_or(self.value) == clamped {
            return None;
        }

        let offset_x = mapper.value_to_scroll(clamped);
        self.queue = Some(ScrollQueue {
            value: clamped,
            offset_x,
            animate,
        });
        debug!(value = clamped, offset_x, "entering sync");

        if self.layout_pending {
            debug!("sync deferred until content size settles");
            return None;
        }
        self.flush(surface)
    }

    /// The scroll content was laid out again.
    pub fn content_size_changed(&mut self, surface: &mut dyn ScrollSurface) -> Option<ScrollCommand> {
        self.layout_pending = false;
        self.flush(surface)
    }

    /// The scroll position changed. Returns a new value to report.
    ///
    /// Non-finite offsets are ignored.
    pub fn scroll(&mut self, offset_x: f32, mapper: &ScaleMapper) -> Option<i64> {
        if !offset_x.is_finite() {
            debug!(offset_x, "ignoring non-finite scroll offset");
            return None;
        }
        if self.queue.is_some() {
            debug!(offset_x, "scroll suppressed while sync is pending");
            return None;
        }

        let value = mapper.clamped_value(offset_x);
        if let Some(target) = self.in_flight {
            if value == target {
                self.in_flight = None;
                debug!(value, "programmatic scroll arrived; idle");
            }
            return None;
        }

        if value == self.value {
            return None;
        }
        self.value = value;
        Some(value)
    }

    /// The user released the surface and it came to rest at `offset_x`.
    ///
    /// In controlled mode the current value is reaffirmed from `external`;
    /// otherwise the resting position decides it. Either way the surface is
    /// snapped onto the value's tick if it rests between ticks.
    pub fn momentum_end(
        &mut self,
        offset_x: f32,
        external: Option<i64>,
        mapper: &ScaleMapper,
        surface: &mut dyn ScrollSurface,
    ) -> Settled {
        if !offset_x.is_finite() {
            debug!(offset_x, "ignoring non-finite resting offset");
            return Settled::default();
        }
        if self.queue.is_some() {
            return Settled::default();
        }
        self.in_flight = None;

        let mut settled = Settled::default();
        match external {
            Some(value) => self.value = mapper.range().clamp(value),
            None => {
                let value = mapper.clamped_value(offset_x);
                if value != self.value {
                    self.value = value;
                    settled.changed = Some(value);
                }
            }
        }

        let target = mapper.value_to_scroll(self.value);
        if (offset_x - target).abs() >= SNAP_TOLERANCE {
            let command = ScrollCommand::jump(target);
            surface.scroll_to(command);
            settled.command = Some(command);
            debug!(from = offset_x, to = target, "snapped to tick");
        }
        settled
    }

    fn flush(&mut self, surface: &mut dyn ScrollSurface) -> Option<ScrollCommand> {
        let queued = self.queue.take()?;
        let command = queued.command();
        surface.scroll_to(command);

        self.value = queued.value;
        self.in_flight = queued.animate.then_some(queued.value);
        debug!(
            value = queued.value,
            offset_x = queued.offset_x,
            animated = queued.animate,
            "sync scroll issued"
        );
        Some(command)
    }
}
