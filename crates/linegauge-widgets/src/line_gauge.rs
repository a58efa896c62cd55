//! Line gauge widget: a horizontally scrolling ruler for picking an integer.

use crate::config::GaugeConfig;
use crate::controller::{Reconciler, SyncState};
use crate::error::GaugeError;
use crate::interval::IntervalSpec;
use crate::range::GaugeRange;
use crate::scale::ScaleMapper;
use crate::ticks::TickLayout;
use linegauge_core::{
    widget::{AccessibleRole, LayoutResult},
    Canvas, Constraints, Event, Point, Rect, RecordingSurface, ScrollCommand, ScrollSurface,
    Size, TypeId, Widget,
};
use std::any::Any;
use std::fmt;
use tracing::{debug, warn};

/// Width used when the parent leaves the width unbounded.
const PREFERRED_WIDTH: f32 = 360.0;

/// Average glyph advance relative to font size, used to center labels.
const GLYPH_ADVANCE: f32 = 0.6;

/// Message emitted when the user scrolls to a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GaugeChanged {
    /// The value now under the centerline
    pub value: i64,
}

type ChangeCallback = Box<dyn FnMut(i64) + Send + Sync>;

/// Scrollable ruler widget.
///
/// The gauge paints a strip of tick marks that slides under a fixed
/// centerline. The host's scroll view drives it through [`Event`]s and is
/// driven back through a [`ScrollSurface`] whenever the value is imposed
/// from outside.
pub struct LineGauge<S = RecordingSurface> {
    config: GaugeConfig,
    mapper: ScaleMapper,
    intervals: IntervalSpec,
    controller: Reconciler,
    /// Last externally supplied value (controlled mode only)
    external: Option<i64>,
    /// Current content offset of the scroll surface
    offset: f32,
    surface: S,
    on_change: Option<ChangeCallback>,
    test_id_value: Option<String>,
    accessible_name_value: Option<String>,
    bounds: Rect,
}

impl LineGauge {
    /// Create a gauge from a configuration.
    ///
    /// # Errors
    ///
    /// Returns the configuration error if `config` does not validate.
    pub fn new(config: GaugeConfig) -> Result<Self, GaugeError> {
        let (mapper, intervals) = config.validate()?;
        let value = config.mode.initial(&mapper.range());
        Ok(Self {
            external: config.mode.external(),
            offset: mapper.value_to_scroll(value),
            controller: Reconciler::new(value),
            config,
            mapper,
            intervals,
            surface: RecordingSurface::new(),
            on_change: None,
            test_id_value: None,
            accessible_name_value: None,
            bounds: Rect::default(),
        })
    }
}

impl<S: ScrollSurface> LineGauge<S> {
    /// Attach the host's scroll surface.
    ///
    /// The surface is moved to the current value's offset right away.
    pub fn with_surface<T: ScrollSurface>(self, mut surface: T) -> LineGauge<T> {
        surface.scroll_to(ScrollCommand::jump(self.offset));
        LineGauge {
            config: self.config,
            mapper: self.mapper,
            intervals: self.intervals,
            controller: self.controller,
            external: self.external,
            offset: self.offset,
            surface,
            on_change: self.on_change,
            test_id_value: self.test_id_value,
            accessible_name_value: self.accessible_name_value,
            bounds: self.bounds,
        }
    }

    /// Register the change callback.
    #[must_use]
    pub fn on_change(mut self, f: impl FnMut(i64) + Send + Sync + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Set the accessible name.
    #[must_use]
    pub fn with_accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name_value = Some(name.into());
        self
    }

    /// Value under the centerline.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.controller.value()
    }

    /// Domain range.
    #[must_use]
    pub const fn range(&self) -> GaugeRange {
        self.mapper.range()
    }

    /// Tick classification divisors.
    #[must_use]
    pub const fn intervals(&self) -> IntervalSpec {
        self.intervals
    }

    /// Value/offset mapper.
    #[must_use]
    pub const fn mapper(&self) -> &ScaleMapper {
        &self.mapper
    }

    /// Reconciliation state.
    #[must_use]
    pub const fn state(&self) -> SyncState {
        self.controller.state()
    }

    /// The reconciliation controller.
    #[must_use]
    pub const fn controller(&self) -> &Reconciler {
        &self.controller
    }

    /// Last known content offset.
    #[must_use]
    pub const fn offset(&self) -> f32 {
        self.offset
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &GaugeConfig {
        &self.config
    }

    /// Whether the host owns the value.
    #[must_use]
    pub const fn is_controlled(&self) -> bool {
        self.external.is_some()
    }

    /// The attached scroll surface.
    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the attached scroll surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Tick layout for the current range, intervals and tick width.
    #[must_use]
    pub const fn tick_layout(&self) -> TickLayout {
        TickLayout::new(
            self.mapper.range(),
            self.intervals,
            self.mapper.tick_width(),
        )
    }

    /// Impose a value from outside.
    ///
    /// In controlled mode this also becomes the value reaffirmed when the
    /// user lets go. Returns the scroll command issued, if any; none is
    /// issued while a layout pass is pending or when nothing changes. The
    /// change callback does not fire.
    pub fn set_value(&mut self, value: i64) -> Option<ScrollCommand> {
        if self.external.is_some() {
            self.external = Some(value);
        }
        let command = self.controller.set_external(
            value,
            &self.mapper,
            self.config.animate_sync,
            &mut self.surface,
        );
        self.track(command);
        command
    }

    /// Apply an updated configuration.
    ///
    /// # Errors
    ///
    /// Returns the configuration error and leaves the gauge untouched if
    /// `config` does not validate.
    pub fn apply(&mut self, config: &GaugeConfig) -> Result<(), GaugeError> {
        let (mapper, intervals) = config.validate().map_err(|e| {
            warn!(error = %e, "rejected gauge configuration");
            e
        })?;

        let space_changed =
            mapper.range() != self.mapper.range() || mapper.tick_width() != self.mapper.tick_width();
        self.mapper = mapper;
        self.intervals = intervals;
        self.config = config.clone();

        if space_changed {
            debug!(
                min = mapper.range().min(),
                max = mapper.range().max(),
                tick_width = mapper.tick_width(),
                "scroll space changed"
            );
            self.controller.bounds_changed(&self.mapper);
        }

        match config.mode.external() {
            Some(value) => {
                self.external = Some(value);
                self.set_value(value);
            }
            None => self.external = None,
        }
        Ok(())
    }

    fn track(&mut self, command: Option<ScrollCommand>) {
        if let Some(command) = command.filter(|c| !c.animated) {
            self.offset = command.offset_x;
        }
    }

    fn emit(&mut self, value: i64) -> Option<Box<dyn Any + Send>> {
        if let Some(callback) = self.on_change.as_mut() {
            callback(value);
        }
        Some(Box::new(GaugeChanged { value }))
    }
}

impl<S: ScrollSurface> fmt::Debug for LineGauge<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineGauge")
            .field("value", &self.value())
            .field("range", &self.mapper.range())
            .field("state", &self.state())
            .field("offset", &self.offset)
            .field("external", &self.external)
            .field("bounds", &self.bounds)
            .finish_non_exhaustive()
    }
}

impl<S: ScrollSurface + 'static> Widget for LineGauge<S> {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let width = if constraints.has_bounded_width() {
            constraints.max_width
        } else {
            PREFERRED_WIDTH
        };
        constraints.constrain(Size::new(width, self.config.style.height))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let style = &self.config.style;
        let bounds = self.bounds;
        let center_x = bounds.center_x();
        let bottom = bounds.bottom();

        canvas.push_clip(bounds);
        canvas.fill_rect(bounds, style.background);

        // Hairline borders
        for y in [bounds.y, bottom] {
            canvas.draw_line(
                Point::new(bounds.x, y),
                Point::new(bounds.right(), y),
                style.border_color,
                style.border_width,
            );
        }

        // Centerline sits behind the marks
        canvas.fill_rect(
            Rect::new(
                center_x - style.centerline_width / 2.0,
                bounds.y,
                style.centerline_width,
                style.centerline_height.min(bounds.height),
            ),
            style.centerline_color,
        );

        let label_style = style.label_style();
        for mark in self.tick_layout().visible(self.offset, bounds.width) {
            let x = center_x - self.offset + mark.x;
            let width = style.mark_width(mark.size);
            let height = style.mark_height(mark.size);
            canvas.fill_rect(
                Rect::new(x - width / 2.0, bottom - height, width, height),
                style.mark_color(mark.size),
            );

            if let Some(label) = &mark.label {
                let text_width = label.len() as f32 * label_style.size * GLYPH_ADVANCE;
                let position = Point::new(
                    x - text_width / 2.0,
                    bottom - height - style.label_gap - label_style.size,
                );
                canvas.draw_text(label, position, &label_style);
            }
        }

        canvas.pop_clip();
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        match *event {
            Event::ScrollOffsetChanged { offset_x } => {
                if offset_x.is_finite() {
                    self.offset = offset_x;
                }
                let value = self.controller.scroll(offset_x, &self.mapper)?;
                self.emit(value)
            }
            Event::MomentumScrollEnd { offset_x } => {
                if offset_x.is_finite() {
                    self.offset = offset_x;
                }
                let settled = self.controller.momentum_end(
                    offset_x,
                    self.external,
                    &self.mapper,
                    &mut self.surface,
                );
                self.track(settled.command);
                let value = settled.changed?;
                self.emit(value)
            }
            Event::ContentSizeChanged { width, .. } => {
                debug!(width, "content size changed");
                let command = self.controller.content_size_changed(&mut self.surface);
                self.track(command);
                None
            }
        }
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name_value.as_deref()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Slider
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
