//! A headless dual-knob range slider.
//!
//! The crate holds everything a range slider does except putting pixels on a
//! screen: the normalized selection, its mapping into a user-facing value
//! range, the pointer state machine, integer snapping, change notification
//! and the frames of the bar, the fill and both knobs.
//!
//! # Usage
//!
//! Implement [`SliderHost`] for your view and drive the slider through a
//! [`SliderView`]. Paint by implementing [`Painter`] on top of the platform's
//! drawing API.
//!
//! ```
//! use range_slider::{
//!     PaintCommand, RangeSlider, RangeSliderArgs, SelectionChange, SliderHost, SliderView,
//!     geometry::{Point, Size},
//! };
//!
//! struct Host {
//!     dirty: bool,
//! }
//!
//! impl SliderHost for Host {
//!     fn request_redraw(&mut self) {
//!         self.dirty = true;
//!     }
//!
//!     fn query_bounds(&self) -> Size {
//!         Size::new(300.0, 24.0)
//!     }
//! }
//!
//! let mut slider = RangeSlider::new(RangeSliderArgs::default().min_value(0.0).max_value(100.0));
//! slider.subscribe(|change: SelectionChange| {
//!     println!("{:.1} - {:.1}", change.current.start, change.current.end);
//! });
//!
//! let mut view = SliderView::new(slider, Host { dirty: false });
//! view.pointer_down(Point::new(150.0, 12.0));
//! view.pointer_up();
//! assert!(view.host().dirty);
//! assert_eq!(view.slider().end(), 50.0);
//!
//! let mut commands: Vec<PaintCommand> = Vec::new();
//! view.paint(&mut commands);
//! assert!(!commands.is_empty());
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod color;
pub mod error;
pub mod geometry;
pub mod host;
pub mod prop;
pub mod selection;
pub mod slider;

pub use color::Color;
pub use error::LayoutError;
pub use host::{SliderHost, SliderView};
pub use prop::{CallbackRef, CallbackWith};
pub use selection::{DragTarget, SelectionChange, SelectionRange, SliderValues};
pub use slider::{
    ColorStyle, KnobStyle, PaintCommand, PaintCommands, Painter, RangeSlider, RangeSliderArgs,
    SliderLayout, SliderPalette, SubscriptionKey,
};
