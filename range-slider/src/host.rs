//! Glue between a [`RangeSlider`] and the view that hosts it.
//!
//! The slider never talks to a windowing toolkit. A host exposes the two
//! capabilities the control needs through [`SliderHost`], and [`SliderView`]
//! routes pointer events through the slider, asking the host for its bounds
//! and requesting a redraw whenever the slider changed.

use tracing::trace;

use crate::{
    geometry::{Point, Size},
    selection::DragTarget,
    slider::{Painter, RangeSlider},
};

/// What a platform view provides to a hosted slider.
pub trait SliderHost {
    /// Schedules a repaint. Hosts may coalesce repeated requests.
    fn request_redraw(&mut self);

    /// Current bounds of the control in local coordinates.
    fn query_bounds(&self) -> Size;
}

/// A slider bound to its host.
#[derive(Debug)]
pub struct SliderView<H: SliderHost> {
    slider: RangeSlider,
    host: H,
}

impl<H: SliderHost> SliderView<H> {
    /// Binds `slider` to `host`. The host is asked for an initial redraw.
    pub fn new(slider: RangeSlider, host: H) -> Self {
        let mut view = Self { slider, host };
        view.flush_redraw();
        view
    }

    /// The hosted slider.
    pub fn slider(&self) -> &RangeSlider {
        &self.slider
    }

    /// The host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Separates the slider from its host.
    pub fn into_parts(self) -> (RangeSlider, H) {
        (self.slider, self.host)
    }

    /// Applies a change to the slider and requests a redraw if it needs one.
    pub fn update<R>(&mut self, change: impl FnOnce(&mut RangeSlider) -> R) -> R {
        let result = change(&mut self.slider);
        self.flush_redraw();
        result
    }

    /// Forwards a pointer press in local coordinates.
    pub fn pointer_down(&mut self, point: Point) -> DragTarget {
        let bounds = self.host.query_bounds();
        let target = self.slider.pointer_down(point, bounds);
        self.flush_redraw();
        target
    }

    /// Forwards a pointer drag in local coordinates.
    pub fn pointer_dragged(&mut self, point: Point) {
        let bounds = self.host.query_bounds();
        self.slider.pointer_drag(point, bounds);
        self.flush_redraw();
    }

    /// Forwards a pointer release.
    pub fn pointer_up(&mut self) {
        self.slider.pointer_up();
        self.flush_redraw();
    }

    /// Paints the slider at the host's current bounds.
    ///
    /// # Panics
    ///
    /// Panics when the host's bounds violate the slider's layout
    /// preconditions.
    pub fn paint(&self, painter: &mut impl Painter) {
        self.slider.paint(self.host.query_bounds(), painter);
    }

    fn flush_redraw(&mut self) {
        if self.slider.take_needs_redraw() {
            trace!("requesting range slider redraw");
            self.host.request_redraw();
        }
    }
}
