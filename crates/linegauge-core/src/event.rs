//! Events delivered to widgets by the host scroll surface.

use serde::{Deserialize, Serialize};

/// Input event types.
///
/// These are the notifications a horizontally scrolling surface reports.
/// Offsets are in content pixels, measured from the start of the scrolled
/// content.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// The scroll position changed (user drag, momentum or programmatic)
    ScrollOffsetChanged {
        /// Horizontal content offset
        offset_x: f32,
    },
    /// The user released the surface and deceleration finished
    MomentumScrollEnd {
        /// Horizontal content offset at rest
        offset_x: f32,
    },
    /// The scrolled content was laid out again with a new size
    ContentSizeChanged {
        /// New content width
        width: f32,
        /// New content height
        height: f32,
    },
}
