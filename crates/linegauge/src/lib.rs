//! Line gauge: a scrollable ruler widget for picking an integer value.
//!
//! The user slides a strip of tick marks under a fixed centerline; the value
//! under the line is reported as it changes. The host can also impose a value,
//! in which case the gauge scrolls itself to match without reporting a change.
//!
//! ```
//! use linegauge::widgets::{GaugeConfig, GaugeChanged, LineGauge};
//! use linegauge::{Event, Widget};
//!
//! let mut gauge = LineGauge::new(GaugeConfig::default()).unwrap();
//! let msg = gauge.event(&Event::ScrollOffsetChanged { offset_x: 900.0 });
//! let changed = msg.unwrap().downcast::<GaugeChanged>().unwrap();
//! assert_eq!(changed.value, 51);
//! ```

pub use linegauge_core::*;
pub use linegauge_widgets as widgets;
