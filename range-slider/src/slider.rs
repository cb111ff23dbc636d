//! A dual-knob slider for selecting a sub-range of a fixed horizontal track.
//!
//! ## Usage
//!
//! Create a [`RangeSlider`] from [`RangeSliderArgs`], feed it pointer events
//! with the current bounds of the control, and paint it from the frames it
//! reports.
//!
//! ```
//! use range_slider::{
//!     DragTarget, RangeSlider, RangeSliderArgs,
//!     geometry::{Point, Size},
//! };
//!
//! let bounds = Size::new(200.0, 24.0);
//! let mut slider = RangeSlider::new(
//!     RangeSliderArgs::default()
//!         .min_value(0.0)
//!         .max_value(4.0)
//!         .snaps_to_integers(true),
//! );
//!
//! // Grab the end knob and drag it to the middle of the track.
//! let end_knob = slider.frame_for_end_slider(bounds);
//! let target = slider.pointer_down(Point::new(end_knob.mid_x(), 12.0), bounds);
//! assert_eq!(target, DragTarget::End);
//! slider.pointer_drag(Point::new(100.0, 12.0), bounds);
//! slider.pointer_up();
//!
//! assert_eq!(slider.end(), 2.0);
//! ```
use derive_setters::Setters;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use slotmap::{SlotMap, new_key_type};
use tracing::{debug, warn};

use crate::{
    geometry::{Point, Rect, Size},
    prop::{CallbackRef, CallbackWith},
    selection::{DragTarget, SelectionChange, SelectionRange, SliderValues},
};

pub use layout::SliderLayout;
pub use render::{
    DISABLED_DESATURATION, Gradient, KNOB_SHADOW, PaintCommand, PaintCommands, Painter,
    RoundedRect, Shadow, SliderPalette, VERTICAL_GRADIENT_DEGREES,
};

mod interaction;
mod layout;
mod render;

/// Vertical room reserved around the knobs for their drop shadow.
pub const VERTICAL_SHADOW_PADDING: f64 = 4.0;
/// Width of a [`KnobStyle::Square`] knob.
pub const SQUARE_KNOB_WIDTH: f64 = 8.0;

new_key_type! {
    /// Handle returned by [`RangeSlider::subscribe`].
    pub struct SubscriptionKey;
}

/// Color scheme of the selected part of the track.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ColorStyle {
    /// Yellow to amber fill.
    #[default]
    Yellow,
    /// Light to deep blue fill.
    Aqua,
}

/// Shape of the two knobs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum KnobStyle {
    /// Narrow rounded rectangles, [`SQUARE_KNOB_WIDTH`] wide.
    #[default]
    Square,
    /// Circles as tall as the knob area.
    Circular,
}

/// Configuration of a [`RangeSlider`].
#[derive(Debug, Clone, PartialEq, Setters)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct RangeSliderArgs {
    /// Initial normalized selection.
    pub selection: SelectionRange,
    /// Value reported when a knob sits at the left edge of the track.
    pub min_value: f64,
    /// Value reported when a knob sits at the right edge of the track.
    pub max_value: f64,
    /// Quantize dragged positions to the `max_value - min_value` integer
    /// steps of the value range.
    pub snaps_to_integers: bool,
    /// When snapping, count both end points so a single step has length 1.
    pub inclusive_length_for_snap_to: bool,
    /// Clicking the bar outside the knobs moves the nearer knob there.
    pub allow_clicks_on_bar_to_move_sliders: bool,
    /// Color scheme of the fill.
    pub color_style: ColorStyle,
    /// Shape of the knobs.
    pub knob_style: KnobStyle,
    /// Ignore pointer input and paint with a desaturated palette.
    pub disabled: bool,
}

impl Default for RangeSliderArgs {
    fn default() -> Self {
        Self {
            selection: SelectionRange::default(),
            min_value: 0.0,
            max_value: 1.0,
            snaps_to_integers: false,
            inclusive_length_for_snap_to: true,
            allow_clicks_on_bar_to_move_sliders: true,
            color_style: ColorStyle::default(),
            knob_style: KnobStyle::default(),
            disabled: false,
        }
    }
}

/// State and behavior of a dual-knob range slider.
///
/// The slider owns its normalized selection and configuration. Every mutation
/// marks the control as needing a redraw, and every mutation that changes the
/// value-space outputs ([`start`](Self::start), [`end`](Self::end),
/// [`length`](Self::length)) notifies subscribers exactly once.
#[derive(Debug)]
pub struct RangeSlider {
    args: RangeSliderArgs,
    drag_target: DragTarget,
    initial_mouse_down: Option<Point>,
    needs_redraw: bool,
    subscribers: SlotMap<SubscriptionKey, CallbackWith<SelectionChange>>,
    on_control_changed: Option<CallbackRef<RangeSlider>>,
}

impl Default for RangeSlider {
    fn default() -> Self {
        Self::new(RangeSliderArgs::default())
    }
}

impl RangeSlider {
    /// Creates a slider. Selection ends outside `0.0..=1.0` are clamped, non
    /// finite ones fall back to the default selection.
    pub fn new(mut args: RangeSliderArgs) -> Self {
        let fallback = SelectionRange::default();
        args.selection = SelectionRange::new(
            sanitize_fraction(args.selection.start).unwrap_or(fallback.start),
            sanitize_fraction(args.selection.end).unwrap_or(fallback.end),
        );
        if !args.min_value.is_finite() || !args.max_value.is_finite() {
            warn!(
                min_value = args.min_value,
                max_value = args.max_value,
                "non-finite value range, using 0..1"
            );
            args.min_value = 0.0;
            args.max_value = 1.0;
        }

        Self {
            args,
            drag_target: DragTarget::None,
            initial_mouse_down: None,
            needs_redraw: true,
            subscribers: SlotMap::with_key(),
            on_control_changed: None,
        }
    }

    /// Current configuration, including the live selection.
    pub fn args(&self) -> &RangeSliderArgs {
        &self.args
    }

    /// The normalized selection.
    pub fn selection(&self) -> SelectionRange {
        self.args.selection
    }

    /// Start of the selection in value space.
    pub fn start(&self) -> f64 {
        self.to_value(self.args.selection.start)
    }

    /// End of the selection in value space.
    pub fn end(&self) -> f64 {
        self.to_value(self.args.selection.end)
    }

    /// Length of the selection in value space.
    ///
    /// With integer snapping and an inclusive length, both end points count,
    /// so a selection covering a single value has length `1.0`.
    pub fn length(&self) -> f64 {
        let length = self.args.selection.width() * self.value_span();
        if self.args.snaps_to_integers && self.args.inclusive_length_for_snap_to {
            length + 1.0
        } else {
            length
        }
    }

    /// `start`, `end` and `length` in one snapshot.
    pub fn values(&self) -> SliderValues {
        SliderValues {
            start: self.start(),
            end: self.end(),
            length: self.length(),
        }
    }

    /// Lower bound of the value range.
    pub fn min_value(&self) -> f64 {
        self.args.min_value
    }

    /// Upper bound of the value range.
    pub fn max_value(&self) -> f64 {
        self.args.max_value
    }

    /// Whether dragged positions snap to integer steps.
    pub fn snaps_to_integers(&self) -> bool {
        self.args.snaps_to_integers
    }

    /// Whether a snapped length counts both end points.
    pub fn inclusive_length_for_snap_to(&self) -> bool {
        self.args.inclusive_length_for_snap_to
    }

    /// Whether clicking the bar moves the nearer knob.
    pub fn allow_clicks_on_bar_to_move_sliders(&self) -> bool {
        self.args.allow_clicks_on_bar_to_move_sliders
    }

    /// Color scheme of the fill.
    pub fn color_style(&self) -> ColorStyle {
        self.args.color_style
    }

    /// Shape of the knobs.
    pub fn knob_style(&self) -> KnobStyle {
        self.args.knob_style
    }

    /// Whether pointer input is ignored.
    pub fn is_disabled(&self) -> bool {
        self.args.disabled
    }

    /// The knob moved by pointer drags, if any.
    pub fn drag_target(&self) -> DragTarget {
        self.drag_target
    }

    /// Where the last pointer-down landed.
    pub fn initial_mouse_down(&self) -> Option<Point> {
        self.initial_mouse_down
    }

    /// Whether the control has changed since the last
    /// [`take_needs_redraw`](Self::take_needs_redraw).
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Returns and clears the redraw flag.
    pub fn take_needs_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Sets the normalized start of the selection, leaving the end untouched.
    ///
    /// The value is clamped to `0.0..=1.0`; non-finite values are ignored.
    /// Unlike dragging, this never pushes the end knob, so the selection may
    /// become inverted.
    pub fn set_start(&mut self, raw: f64) {
        let Some(start) = sanitize_fraction(raw) else {
            warn!(raw, "ignoring non-finite selection start");
            return;
        };
        self.update(|args| args.selection.start = start);
        if self.args.selection.is_inverted() {
            debug!(selection = ?self.args.selection, "selection inverted by direct assignment");
        }
    }

    /// Sets the normalized end of the selection, leaving the start untouched.
    ///
    /// Mirrors [`set_start`](Self::set_start).
    pub fn set_end(&mut self, raw: f64) {
        let Some(end) = sanitize_fraction(raw) else {
            warn!(raw, "ignoring non-finite selection end");
            return;
        };
        self.update(|args| args.selection.end = end);
        if self.args.selection.is_inverted() {
            debug!(selection = ?self.args.selection, "selection inverted by direct assignment");
        }
    }

    /// Sets the start from a value-space number.
    pub fn set_start_value(&mut self, value: f64) {
        self.set_start(self.to_fraction(value));
    }

    /// Sets the end from a value-space number.
    pub fn set_end_value(&mut self, value: f64) {
        self.set_end(self.to_fraction(value));
    }

    /// Replaces the whole normalized selection.
    pub fn set_selection(&mut self, selection: SelectionRange) {
        let (Some(start), Some(end)) = (
            sanitize_fraction(selection.start),
            sanitize_fraction(selection.end),
        ) else {
            warn!(?selection, "ignoring non-finite selection");
            return;
        };
        self.update(|args| args.selection = SelectionRange::new(start, end));
    }

    /// Sets the lower bound of the value range. The normalized selection is
    /// kept, only its value-space interpretation changes.
    pub fn set_min_value(&mut self, min_value: f64) {
        if !min_value.is_finite() {
            warn!(min_value, "ignoring non-finite min value");
            return;
        }
        self.update(|args| args.min_value = min_value);
    }

    /// Sets the upper bound of the value range. The normalized selection is
    /// kept, only its value-space interpretation changes.
    pub fn set_max_value(&mut self, max_value: f64) {
        if !max_value.is_finite() {
            warn!(max_value, "ignoring non-finite max value");
            return;
        }
        self.update(|args| args.max_value = max_value);
    }

    /// Enables or disables integer snapping.
    pub fn set_snaps_to_integers(&mut self, snaps: bool) {
        self.update(|args| args.snaps_to_integers = snaps);
    }

    /// Chooses whether a snapped length counts both end points.
    pub fn set_inclusive_length_for_snap_to(&mut self, inclusive: bool) {
        self.update(|args| args.inclusive_length_for_snap_to = inclusive);
    }

    /// Enables or disables moving knobs by clicking the bar.
    pub fn set_allow_clicks_on_bar_to_move_sliders(&mut self, allow: bool) {
        self.update(|args| args.allow_clicks_on_bar_to_move_sliders = allow);
    }

    /// Switches the fill color scheme.
    pub fn set_color_style(&mut self, style: ColorStyle) {
        self.update(|args| args.color_style = style);
    }

    /// Switches the knob shape.
    pub fn set_knob_style(&mut self, style: KnobStyle) {
        self.update(|args| args.knob_style = style);
    }

    /// Disables or enables pointer input. Disabling ends any drag.
    pub fn set_disabled(&mut self, disabled: bool) {
        if disabled {
            self.drag_target = DragTarget::None;
        }
        self.update(|args| args.disabled = disabled);
    }

    /// Registers a callback fired after every change of `start`, `end` or
    /// `length`.
    ///
    /// Subscribing a handle that is already registered (the same handle or a
    /// clone of it) returns the existing key, so it is still called once per
    /// change.
    pub fn subscribe(
        &mut self,
        callback: impl Into<CallbackWith<SelectionChange>>,
    ) -> SubscriptionKey {
        let callback = callback.into();
        if let Some((key, _)) = self
            .subscribers
            .iter()
            .find(|(_, existing)| **existing == callback)
        {
            debug!(?key, "callback already subscribed");
            return key;
        }
        self.subscribers.insert(callback)
    }

    /// Removes a subscription. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, key: SubscriptionKey) -> bool {
        self.subscribers.remove(key).is_some()
    }

    /// Sets the callback that receives the control itself after every change
    /// of its values, replacing any previous one.
    pub fn set_on_control_changed(&mut self, callback: impl Into<CallbackRef<RangeSlider>>) {
        self.on_control_changed = Some(callback.into());
    }

    /// Removes the control callback.
    pub fn clear_on_control_changed(&mut self) {
        self.on_control_changed = None;
    }

    /// Layout of the control for the given bounds.
    pub fn layout(&self, bounds: Size) -> SliderLayout {
        SliderLayout::new(bounds, self.args.knob_style)
    }

    /// Frame of the start knob, pixel-snapped.
    pub fn frame_for_start_slider(&self, bounds: Size) -> Rect {
        self.layout(bounds).knob_frame(self.args.selection.start)
    }

    /// Frame of the end knob, pixel-snapped.
    pub fn frame_for_end_slider(&self, bounds: Size) -> Rect {
        self.layout(bounds).knob_frame(self.args.selection.end)
    }

    /// Frame of the selected part of the bar, pixel-snapped. Zero-sized when
    /// nothing is selected.
    pub fn frame_for_fill(&self, bounds: Size) -> Rect {
        self.layout(bounds).fill_frame(self.args.selection)
    }

    /// Frame of the whole bar, pixel-snapped.
    pub fn frame_for_bar(&self, bounds: Size) -> Rect {
        self.layout(bounds).bar_frame()
    }

    /// Colors for the current style and enabled state.
    pub fn palette(&self) -> SliderPalette {
        SliderPalette::for_style(self.args.color_style, self.args.disabled)
    }

    fn value_span(&self) -> f64 {
        self.args.max_value - self.args.min_value
    }

    fn to_value(&self, fraction: f64) -> f64 {
        fraction * self.value_span() + self.args.min_value
    }

    fn to_fraction(&self, value: f64) -> f64 {
        let span = self.value_span();
        if span == 0.0 || !span.is_finite() {
            return 0.0;
        }
        (value - self.args.min_value) / span
    }

    fn update(&mut self, mutate: impl FnOnce(&mut RangeSliderArgs)) {
        let previous = self.values();
        mutate(&mut self.args);
        self.needs_redraw = true;

        let current = self.values();
        if previous != current {
            self.notify(SelectionChange { previous, current });
        }
    }

    fn notify(&self, change: SelectionChange) {
        debug!(
            start = change.current.start,
            end = change.current.end,
            length = change.current.length,
            subscribers = self.subscribers.len(),
            "range slider values changed"
        );
        for callback in self.subscribers.values() {
            callback.call(change);
        }
        if let Some(callback) = &self.on_control_changed {
            callback.call(self);
        }
    }
}

fn sanitize_fraction(value: f64) -> Option<f64> {
    value.is_finite().then(|| value.clamp(0.0, 1.0))
}
