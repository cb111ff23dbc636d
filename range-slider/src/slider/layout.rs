use tracing::trace;

use crate::{
    error::LayoutError,
    geometry::{Rect, Size},
    selection::SelectionRange,
};

use super::{KnobStyle, SQUARE_KNOB_WIDTH, VERTICAL_SHADOW_PADDING};

const SQUARE_KNOB_CORNER_RADIUS: f64 = 2.0;

/// Resolved geometry of the control for one set of bounds.
///
/// All frames are derived from the bounds and the knob style alone, so a
/// layout can be rebuilt on every paint or pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderLayout {
    /// Bounds of the whole control.
    pub bounds: Size,
    /// Width of either knob.
    pub knob_width: f64,
    /// Height of either knob.
    pub knob_height: f64,
    /// Top of the knobs, centering them vertically.
    pub knob_y: f64,
    /// Corner radius of the knob outline.
    pub knob_corner_radius: f64,
    /// Space kept free to the right of a knob at the far end of the track.
    pub trailing_margin: f64,
    /// Height of the bar.
    pub bar_height: f64,
    /// Top of the bar.
    pub bar_y: f64,
}

impl SliderLayout {
    /// Computes the layout for the given bounds.
    pub fn new(bounds: Size, knob_style: KnobStyle) -> Self {
        let height = sanitize_extent(bounds.height);
        let knob_height = (height - VERTICAL_SHADOW_PADDING).max(0.0);
        let (knob_width, knob_corner_radius) = match knob_style {
            KnobStyle::Square => (SQUARE_KNOB_WIDTH, SQUARE_KNOB_CORNER_RADIUS),
            KnobStyle::Circular => (knob_height, knob_height / 2.0),
        };
        let bar_height = ((height - VERTICAL_SHADOW_PADDING) * (2.0 / 3.0))
            .round()
            .max(0.0);

        Self {
            bounds,
            knob_width,
            knob_height,
            knob_y: (height - knob_height) / 2.0,
            knob_corner_radius,
            trailing_margin: knob_width / 2.0,
            bar_height,
            bar_y: ((height - bar_height) / 2.0).floor(),
        }
    }

    /// Verifies the proportions the control needs to render sanely.
    pub fn check(&self) -> Result<(), LayoutError> {
        let Size { width, height } = self.bounds;
        if !self.bounds.is_drawable() {
            return Err(LayoutError::DegenerateBounds { width, height });
        }
        if width < height * 2.0 {
            return Err(LayoutError::TrackTooShort { width, height });
        }
        if width < self.knob_width * 2.0 {
            return Err(LayoutError::TrackTooNarrowForKnobs {
                width,
                knob_width: self.knob_width,
            });
        }
        // Knobs are the track height minus the shadow padding, so they always
        // fit; they only vanish when the track is no taller than the padding.
        if self.knob_height <= 0.0 {
            return Err(LayoutError::NoRoomForKnobs {
                height,
                shadow_padding: VERTICAL_SHADOW_PADDING,
            });
        }
        Ok(())
    }

    /// Width of the track that normalized positions are measured against.
    pub fn track_width(&self) -> f64 {
        sanitize_extent(self.bounds.width)
    }

    /// Leftmost x a knob may take.
    pub fn min_knob_x(&self) -> f64 {
        0.0
    }

    /// Rightmost x a knob may take.
    pub fn max_knob_x(&self) -> f64 {
        (self.track_width() - self.knob_width - self.trailing_margin).max(self.min_knob_x())
    }

    /// Unsnapped left edge of a knob centered on `fraction` of the track,
    /// kept inside `min_knob_x()..=max_knob_x()`.
    pub fn knob_x(&self, fraction: f64) -> f64 {
        let centered = fraction * self.track_width() - self.knob_width / 2.0;
        if centered.is_nan() {
            return self.min_knob_x();
        }
        centered.clamp(self.min_knob_x(), self.max_knob_x())
    }

    /// Pixel-snapped frame of a knob at `fraction` of the track.
    pub fn knob_frame(&self, fraction: f64) -> Rect {
        let frame = Rect::new(
            self.knob_x(fraction),
            self.knob_y,
            self.knob_width,
            self.knob_height,
        );
        trace!(fraction, ?frame, "knob frame");
        frame.crisp()
    }

    /// Pixel-snapped frame of the whole bar.
    pub fn bar_frame(&self) -> Rect {
        Rect::new(0.0, self.bar_y, self.track_width(), self.bar_height).crisp()
    }

    /// Pixel-snapped frame of the selected part of the bar. Empty, and
    /// collapsed to the origin, when the selection has no positive width.
    pub fn fill_frame(&self, selection: SelectionRange) -> Rect {
        let width = self.track_width();
        Rect::new(
            selection.start * width,
            self.bar_y,
            selection.width() * width,
            self.bar_height,
        )
        .crisp()
    }

    /// Corner radius of the bar and the fill.
    pub fn bar_corner_radius(&self) -> f64 {
        self.bar_height / 3.0
    }
}

fn sanitize_extent(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    const BOUNDS: Size = Size::new(200.0, 24.0);

    #[test]
    fn test_square_layout_metrics() {
        let layout = SliderLayout::new(BOUNDS, KnobStyle::Square);
        assert_eq!(layout.knob_width, 8.0);
        assert_eq!(layout.knob_height, 20.0);
        assert_eq!(layout.knob_y, 2.0);
        assert_eq!(layout.knob_corner_radius, 2.0);
        assert_eq!(layout.trailing_margin, 4.0);
        assert_eq!(layout.bar_height, 13.0);
        assert_eq!(layout.bar_y, 5.0);
        assert_eq!(layout.max_knob_x(), 188.0);
        assert!(layout.check().is_ok());
    }

    #[test]
    fn test_circular_layout_metrics() {
        let layout = SliderLayout::new(BOUNDS, KnobStyle::Circular);
        assert_eq!(layout.knob_width, 20.0);
        assert_eq!(layout.knob_corner_radius, 10.0);
        assert_eq!(layout.max_knob_x(), 170.0);
        assert!(layout.check().is_ok());
    }

    #[test]
    fn test_knob_x_stays_within_bounds() {
        for style in [KnobStyle::Square, KnobStyle::Circular] {
            let layout = SliderLayout::new(BOUNDS, style);
            for step in 0..=100 {
                let fraction = step as f64 / 100.0;
                let x = layout.knob_x(fraction);
                assert!(x >= layout.min_knob_x(), "{style:?} {fraction}: {x}");
                assert!(x <= layout.max_knob_x(), "{style:?} {fraction}: {x}");

                let frame = layout.knob_frame(fraction);
                assert!(frame.min_x() - 0.5 >= layout.min_knob_x());
                assert!(frame.min_x() - 0.5 <= layout.max_knob_x());
            }
        }
    }

    #[test]
    fn test_knob_frame_is_centered_and_crisp() {
        let layout = SliderLayout::new(BOUNDS, KnobStyle::Square);
        assert_eq!(layout.knob_frame(0.5), Rect::new(96.5, 2.5, 8.0, 20.0));
        assert_eq!(layout.knob_frame(0.0), Rect::new(0.5, 2.5, 8.0, 20.0));
        assert_eq!(layout.knob_frame(1.0), Rect::new(188.5, 2.5, 8.0, 20.0));
        // 0.333 * 200 - 4 = 62.6, widened to whole pixels.
        assert_eq!(layout.knob_frame(0.333), Rect::new(62.5, 2.5, 9.0, 20.0));
    }

    #[test]
    fn test_bar_frame() {
        let layout = SliderLayout::new(BOUNDS, KnobStyle::Square);
        assert_eq!(layout.bar_frame(), Rect::new(0.5, 5.5, 200.0, 13.0));
        assert_eq!(layout.bar_corner_radius(), 13.0 / 3.0);
    }

    #[test]
    fn test_fill_frame() {
        let layout = SliderLayout::new(BOUNDS, KnobStyle::Square);
        let fill = layout.fill_frame(SelectionRange::new(0.25, 0.75));
        assert_eq!(fill, Rect::new(50.5, 5.5, 100.0, 13.0));
    }

    #[test]
    fn test_fill_frame_empty_selection() {
        let layout = SliderLayout::new(BOUNDS, KnobStyle::Square);
        let fill = layout.fill_frame(SelectionRange::new(0.4, 0.4));
        assert_eq!(fill.width(), 0.0);
        assert!(fill.is_empty());

        let inverted = layout.fill_frame(SelectionRange::new(0.9, 0.5));
        assert!(inverted.is_empty());
        assert!(!inverted.contains(Point::new(150.0, 10.0)));
    }

    #[test]
    fn test_check_rejects_bad_proportions() {
        let square = |w, h| SliderLayout::new(Size::new(w, h), KnobStyle::Square).check();
        assert_eq!(
            square(40.0, 24.0),
            Err(LayoutError::TrackTooShort {
                width: 40.0,
                height: 24.0
            })
        );
        assert_eq!(
            square(12.0, 4.0),
            Err(LayoutError::TrackTooNarrowForKnobs {
                width: 12.0,
                knob_width: 8.0
            })
        );
        assert_eq!(
            square(0.0, 24.0),
            Err(LayoutError::DegenerateBounds {
                width: 0.0,
                height: 24.0
            })
        );
        assert!(square(48.0, 24.0).is_ok());
    }

    #[test]
    fn test_check_rejects_track_no_taller_than_shadow_padding() {
        let layout = SliderLayout::new(Size::new(20.0, 4.0), KnobStyle::Square);
        assert_eq!(layout.knob_height, 0.0);
        assert_eq!(
            layout.check(),
            Err(LayoutError::NoRoomForKnobs {
                height: 4.0,
                shadow_padding: VERTICAL_SHADOW_PADDING,
            })
        );

        let circular = SliderLayout::new(Size::new(10.0, 3.0), KnobStyle::Circular);
        assert!(matches!(
            circular.check(),
            Err(LayoutError::NoRoomForKnobs { .. })
        ));

        let tall_enough = SliderLayout::new(Size::new(20.0, 5.0), KnobStyle::Square);
        assert_eq!(tall_enough.knob_height, 1.0);
        assert!(tall_enough.check().is_ok());
    }

    #[test]
    fn test_degenerate_bounds_stay_total() {
        let layout = SliderLayout::new(Size::new(f64::NAN, -3.0), KnobStyle::Square);
        assert_eq!(layout.track_width(), 0.0);
        assert_eq!(layout.max_knob_x(), 0.0);
        assert_eq!(layout.knob_x(0.5), 0.0);
        assert!(layout.fill_frame(SelectionRange::new(0.0, 1.0)).is_empty());
    }
}
