//! Core types and traits shared by the line gauge crates.
//!
//! This crate is the seam between the gauge and whatever UI host renders it:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`]
//! - Layout constraints: [`Constraints`]
//! - Scroll surface notifications: [`Event`]
//! - Painting: [`Canvas`], [`RecordingCanvas`]
//! - Programmatic scrolling: [`ScrollSurface`], [`ScrollCommand`]

mod canvas;
mod color;
mod event;
mod geometry;
mod scroll;
pub mod widget;

pub use canvas::{DrawCommand, RecordingCanvas};
pub use color::{Color, ColorParseError};
pub use event::Event;
pub use geometry::{Constraints, Point, Rect, Size};
pub use scroll::{RecordingSurface, ScrollCommand, ScrollSurface};
pub use widget::{
    AccessibleRole, Canvas, FontWeight, LayoutResult, TextStyle, TypeId, Widget,
};
