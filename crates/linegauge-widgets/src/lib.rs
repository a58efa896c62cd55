//! Scrollable ruler-style line gauge.
//!
//! A [`LineGauge`] lets the user pick an integer by sliding a ruler of tick
//! marks under a fixed centerline. Its pieces are usable on their own:
//!
//! - [`ScaleMapper`]: linear mapping between values and scroll offsets
//! - [`TickLayout`]: positions and sizes of the marks
//! - [`Reconciler`]: arbitration between user scrolling and external values
//! - [`GaugeConfig`]: construction options, loadable from TOML
//!
//! # Examples
//!
//! ```
//! use linegauge_widgets::{GaugeConfig, LineGauge, TickSize};
//!
//! let mut gauge = LineGauge::new(GaugeConfig::default().controlled(50)).unwrap();
//! assert_eq!(gauge.mapper().value_to_scroll(80), 1422.0);
//! assert_eq!(gauge.intervals().classify(10), TickSize::Large);
//!
//! gauge.set_value(80);
//! assert_eq!(gauge.value(), 80);
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod interval;
pub mod line_gauge;
pub mod range;
pub mod scale;
pub mod style;
pub mod ticks;

pub use config::{GaugeConfig, ValueMode};
pub use controller::{Reconciler, ScrollQueue, Settled, SyncState};
pub use error::GaugeError;
pub use interval::{IntervalSpec, TickSize};
pub use line_gauge::{GaugeChanged, LineGauge};
pub use range::{GaugeRange, ScrollSpace, DEFAULT_TICK_WIDTH};
pub use scale::{scale, Rounding, ScaleMapper};
pub use style::GaugeStyle;
pub use ticks::{TickLayout, TickMark};
