//! The contract between a widget and the UI host that embeds it.
//!
//! A host drives every widget through the same cycle: ask for a preferred
//! size under some [`Constraints`], hand it final bounds, let it paint into a
//! [`Canvas`], and forward surface [`Event`]s. A widget answers an event with
//! an optional boxed message (the gauge sends its new value) that the host
//! routes to the application.
//!
//! ```
//! use linegauge_core::TypeId;
//!
//! assert_ne!(TypeId::of::<String>(), TypeId::of::<i32>());
//! ```

use crate::event::Event;
use crate::geometry::{Constraints, Point, Rect, Size};
use crate::Color;
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Identity of a concrete widget type, for hosts keyed by type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(std::any::TypeId);

impl TypeId {
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self(std::any::TypeId::of::<T>())
    }
}

/// What a widget settled on after [`Widget::layout`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutResult {
    pub size: Size,
}

/// Something the host can measure, place, paint and feed events to.
pub trait Widget: Send + Sync {
    fn type_id(&self) -> TypeId;

    /// Preferred size within `constraints`.
    fn measure(&self, constraints: Constraints) -> Size;

    /// Accept final bounds from the host.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Emit drawing operations for the current state.
    fn paint(&self, canvas: &mut dyn Canvas);

    /// React to a surface event, optionally producing a message.
    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>>;

    fn is_interactive(&self) -> bool {
        false
    }

    /// Label announced by assistive technology.
    fn accessible_name(&self) -> Option<&str> {
        None
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Generic
    }

    /// Stable handle for UI tests.
    fn test_id(&self) -> Option<&str> {
        None
    }

    /// Bounds from the last layout pass.
    fn bounds(&self) -> Rect {
        Rect::default()
    }
}

/// Drawing backend.
///
/// Clips nest; every `push_clip` is matched by a `pop_clip`.
pub trait Canvas {
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw `text` with its top-left corner at `position`.
    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle);

    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f32);

    /// Restrict drawing to `rect` until the matching `pop_clip`.
    fn push_clip(&mut self, rect: Rect);

    fn pop_clip(&mut self);
}

/// Font settings for a text run.
///
/// ```
/// use linegauge_core::{Color, FontWeight, TextStyle};
///
/// let label = TextStyle {
///     size: 9.0,
///     color: Color::BLACK,
///     weight: FontWeight::Bold,
/// };
/// assert_eq!(label.weight, FontWeight::Bold);
/// assert_eq!(TextStyle::default().size, 12.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels
    pub size: f32,
    pub color: Color,
    pub weight: FontWeight,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 12.0,
            color: Color::BLACK,
            weight: FontWeight::Normal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Role reported to assistive technology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccessibleRole {
    #[default]
    Generic,
    /// Adjustable value picker
    Slider,
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Blank;

    impl Widget for Blank {
        fn type_id(&self) -> TypeId {
            TypeId::of::<Self>()
        }

        fn measure(&self, constraints: Constraints) -> Size {
            constraints.constrain(Size::default())
        }

        fn layout(&mut self, bounds: Rect) -> LayoutResult {
            LayoutResult {
                size: bounds.size(),
            }
        }

        fn paint(&self, _canvas: &mut dyn Canvas) {}

        fn event(&mut self, _event: &Event) -> Option<Box<dyn Any + Send>> {
            None
        }
    }

    #[test]
    fn test_type_id() {
        assert_eq!(TypeId::of::<u32>(), TypeId::of::<u32>());
        assert_ne!(TypeId::of::<u32>(), TypeId::of::<String>());
    }

    #[test]
    fn test_widget_defaults() {
        let blank = Blank;
        assert!(!blank.is_interactive());
        assert_eq!(blank.accessible_name(), None);
        assert_eq!(blank.accessible_role(), AccessibleRole::Generic);
        assert_eq!(blank.test_id(), None);
        assert_eq!(blank.bounds(), Rect::default());
        assert_eq!(Widget::type_id(&blank), TypeId::of::<Blank>());
    }

    #[test]
    fn test_text_style_default() {
        let style = TextStyle::default();
        assert_eq!(style.size, 12.0);
        assert_eq!(style.weight, FontWeight::Normal);
        assert_eq!(style.color, Color::BLACK);
    }

    #[test]
    fn test_font_weight_serde() {
        assert_eq!(serde_json::to_string(&FontWeight::Bold).unwrap(), "\"bold\"");
    }
}
