use tracing::{debug, warn};

use crate::{
    geometry::{Point, Rect, Size},
    selection::DragTarget,
};

use super::RangeSlider;

/// Quantizes `value` to the nearest of `steps` equal divisions of `0..=1`.
///
/// A zero or non-finite step count disables snapping and returns `value`
/// unchanged.
pub(super) fn snap_fraction(value: f64, steps: f64) -> f64 {
    if steps == 0.0 || !steps.is_finite() {
        return value;
    }
    ((value * steps).round() / steps).clamp(0.0, 1.0)
}

/// Normalized position of the pointer along the track, or `None` when the
/// track has no width or the point is not finite.
pub(super) fn cursor_fraction(point: Point, bounds: Size) -> Option<f64> {
    if bounds.width <= 0.0 || !bounds.width.is_finite() || !point.x.is_finite() {
        return None;
    }
    Some((point.x / bounds.width).clamp(0.0, 1.0))
}

/// The knob whose horizontal center is closer to `x`. Ties go to the end knob.
pub(super) fn nearest_knob(x: f64, start_frame: Rect, end_frame: Rect) -> DragTarget {
    let dist_start = (x - start_frame.mid_x()).abs();
    let dist_end = (x - end_frame.mid_x()).abs();
    if dist_start < dist_end {
        DragTarget::Start
    } else {
        DragTarget::End
    }
}

impl RangeSlider {
    /// Starts a drag at `point`.
    ///
    /// The start knob is hit-tested first, then the end knob. A press on the
    /// bar outside both knobs moves the nearer knob to the pointer straight
    /// away when bar clicks are allowed, and is ignored otherwise. Returns the
    /// knob that subsequent [`pointer_drag`](Self::pointer_drag) calls move.
    pub fn pointer_down(&mut self, point: Point, bounds: Size) -> DragTarget {
        if self.args.disabled {
            self.drag_target = DragTarget::None;
            return DragTarget::None;
        }
        if !point.is_finite() {
            warn!(?point, "ignoring pointer-down at non-finite point");
            self.drag_target = DragTarget::None;
            return DragTarget::None;
        }

        self.initial_mouse_down = Some(point);

        let start_frame = self.frame_for_start_slider(bounds);
        let end_frame = self.frame_for_end_slider(bounds);

        let (target, relocate) = if start_frame.contains(point) {
            (DragTarget::Start, false)
        } else if end_frame.contains(point) {
            (DragTarget::End, false)
        } else if self.args.allow_clicks_on_bar_to_move_sliders {
            (nearest_knob(point.x, start_frame, end_frame), true)
        } else {
            (DragTarget::None, false)
        };

        debug!(?point, ?target, relocate, "range slider pointer down");
        self.drag_target = target;
        if relocate {
            self.pointer_drag(point, bounds);
        }
        target
    }

    /// Moves the dragged knob to `point`. Does nothing without a drag target.
    ///
    /// Moving a knob past the other one pushes the other knob along, so the
    /// selection stays ordered.
    pub fn pointer_drag(&mut self, point: Point, bounds: Size) {
        if !self.drag_target.is_dragging() || self.args.disabled {
            return;
        }
        let Some(x) = cursor_fraction(point, bounds) else {
            warn!(?point, ?bounds, "ignoring drag on a degenerate track");
            return;
        };
        let x = if self.args.snaps_to_integers {
            snap_fraction(x, self.value_span())
        } else {
            x
        };

        let target = self.drag_target;
        self.update(|args| {
            args.selection = match target {
                DragTarget::Start => args.selection.with_start_pushing(x),
                DragTarget::End => args.selection.with_end_pushing(x),
                DragTarget::None => args.selection,
            };
        });
    }

    /// Ends the current drag.
    pub fn pointer_up(&mut self) {
        self.drag_target = DragTarget::None;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use super::*;
    use crate::{
        selection::{SelectionChange, SelectionRange},
        slider::RangeSliderArgs,
    };

    const BOUNDS: Size = Size::new(200.0, 24.0);
    const MID_Y: f64 = 12.0;

    fn slider_with(selection: SelectionRange) -> RangeSlider {
        RangeSlider::new(RangeSliderArgs::default().selection(selection))
    }

    fn at(x: f64) -> Point {
        Point::new(x, MID_Y)
    }

    #[test]
    fn test_snap_fraction() {
        assert_eq!(snap_fraction(0.3, 4.0), 0.25);
        assert_eq!(snap_fraction(0.4, 4.0), 0.5);
        assert_eq!(snap_fraction(1.0, 9.0), 1.0);
        assert_eq!(snap_fraction(1.0, 2.5), 1.0);
    }

    #[test]
    fn test_snap_fraction_with_empty_range() {
        assert_eq!(snap_fraction(0.37, 0.0), 0.37);
        assert_eq!(snap_fraction(0.37, f64::NAN), 0.37);
    }

    #[test]
    fn test_cursor_fraction() {
        assert_eq!(cursor_fraction(at(50.0), BOUNDS), Some(0.25));
        assert_eq!(cursor_fraction(at(-20.0), BOUNDS), Some(0.0));
        assert_eq!(cursor_fraction(at(500.0), BOUNDS), Some(1.0));
        assert_eq!(cursor_fraction(at(50.0), Size::new(0.0, 24.0)), None);
        assert_eq!(cursor_fraction(at(f64::NAN), BOUNDS), None);
    }

    #[test]
    fn test_nearest_knob_ties_go_to_end() {
        let start = Rect::new(0.0, 0.0, 8.0, 20.0);
        let end = Rect::new(20.0, 0.0, 8.0, 20.0);
        assert_eq!(nearest_knob(10.0, start, end), DragTarget::Start);
        assert_eq!(nearest_knob(14.0, start, end), DragTarget::End);
        assert_eq!(nearest_knob(18.0, start, end), DragTarget::End);
    }

    #[test]
    fn test_pointer_down_on_knobs() {
        let mut slider = slider_with(SelectionRange::new(0.25, 0.75));
        assert_eq!(slider.pointer_down(at(50.0), BOUNDS), DragTarget::Start);
        assert_eq!(slider.drag_target(), DragTarget::Start);
        assert_eq!(slider.initial_mouse_down(), Some(at(50.0)));

        assert_eq!(slider.pointer_down(at(150.0), BOUNDS), DragTarget::End);
        assert_eq!(slider.selection(), SelectionRange::new(0.25, 0.75));
    }

    #[test]
    fn test_overlapping_knobs_prefer_start() {
        let mut slider = slider_with(SelectionRange::new(0.5, 0.5));
        let start = slider.frame_for_start_slider(BOUNDS);
        let end = slider.frame_for_end_slider(BOUNDS);
        assert_eq!(start, end);

        let target = slider.pointer_down(Point::new(start.mid_x(), start.mid_y()), BOUNDS);
        assert_eq!(target, DragTarget::Start);
    }

    #[test]
    fn test_point_only_in_end_knob_selects_end() {
        // The knobs overlap partially: start spans 96.5..104.5, end 98.5..107.5.
        let mut slider = slider_with(SelectionRange::new(0.5, 0.511));
        let start = slider.frame_for_start_slider(BOUNDS);
        let end = slider.frame_for_end_slider(BOUNDS);
        assert!(end.min_x() < start.max_x());

        let only_end = Point::new(start.max_x() + 0.5, MID_Y);
        assert!(!start.contains(only_end));
        assert!(end.contains(only_end));
        assert_eq!(slider.pointer_down(only_end, BOUNDS), DragTarget::End);
    }

    #[test]
    fn test_drag_start_pushes_end() {
        let mut slider = slider_with(SelectionRange::new(0.2, 0.6));
        assert_eq!(slider.pointer_down(at(40.0), BOUNDS), DragTarget::Start);
        slider.pointer_drag(at(180.0), BOUNDS);
        assert_eq!(slider.selection(), SelectionRange::new(0.9, 0.9));
    }

    #[test]
    fn test_drag_end_pushes_start() {
        let mut slider = slider_with(SelectionRange::new(0.2, 0.6));
        assert_eq!(slider.pointer_down(at(120.0), BOUNDS), DragTarget::End);
        slider.pointer_drag(at(20.0), BOUNDS);
        assert_eq!(slider.selection(), SelectionRange::new(0.1, 0.1));
    }

    #[test]
    fn test_drag_sequence_keeps_order() {
        let mut slider = slider_with(SelectionRange::new(0.2, 0.6));
        slider.pointer_down(at(40.0), BOUNDS);
        for x in [10.0, 150.0, 199.0, 60.0, -30.0, 260.0, 120.0] {
            slider.pointer_drag(at(x), BOUNDS);
            let selection = slider.selection();
            assert!(selection.start <= selection.end, "{selection:?}");
            assert!((0.0..=1.0).contains(&selection.start));
            assert!((0.0..=1.0).contains(&selection.end));
        }
        slider.pointer_up();

        let end_center = slider.frame_for_end_slider(BOUNDS).mid_x();
        slider.pointer_down(at(end_center), BOUNDS);
        for x in [0.0, 90.0, 20.0, 200.0] {
            slider.pointer_drag(at(x), BOUNDS);
            let selection = slider.selection();
            assert!(selection.start <= selection.end, "{selection:?}");
        }
    }

    #[test]
    fn test_drag_clamps_to_track() {
        let mut slider = slider_with(SelectionRange::new(0.2, 0.6));
        slider.pointer_down(at(120.0), BOUNDS);
        slider.pointer_drag(at(400.0), BOUNDS);
        assert_eq!(slider.selection(), SelectionRange::new(0.2, 1.0));
        slider.pointer_drag(at(-50.0), BOUNDS);
        assert_eq!(slider.selection(), SelectionRange::new(0.0, 0.0));
    }

    #[test]
    fn test_drag_snaps_to_integer_steps() {
        let mut slider = RangeSlider::new(
            RangeSliderArgs::default()
                .selection(SelectionRange::new(0.0, 1.0))
                .min_value(0.0)
                .max_value(4.0)
                .snaps_to_integers(true),
        );
        slider.pointer_down(at(2.0), BOUNDS);
        assert_eq!(slider.drag_target(), DragTarget::Start);
        slider.pointer_drag(at(60.0), BOUNDS);
        assert_eq!(slider.selection().start, 0.25);
        assert_eq!(slider.start(), 1.0);
    }

    #[test]
    fn test_snapping_disabled_for_empty_value_range() {
        let mut slider = RangeSlider::new(
            RangeSliderArgs::default()
                .selection(SelectionRange::new(0.0, 1.0))
                .min_value(3.0)
                .max_value(3.0)
                .snaps_to_integers(true),
        );
        slider.pointer_down(at(2.0), BOUNDS);
        slider.pointer_drag(at(74.0), BOUNDS);
        assert_eq!(slider.selection().start, 0.37);
        assert!(slider.start().is_finite());
        assert!(slider.length().is_finite());
    }

    #[test]
    fn test_bar_click_relocates_nearer_knob() {
        let mut slider = slider_with(SelectionRange::new(0.2, 0.6));
        // Start knob centered at 40, end knob at 120; 100 is closer to end.
        let target = slider.pointer_down(at(100.0), BOUNDS);
        assert_eq!(target, DragTarget::End);
        assert_eq!(slider.selection(), SelectionRange::new(0.2, 0.5));

        slider.pointer_drag(at(110.0), BOUNDS);
        assert_eq!(slider.selection(), SelectionRange::new(0.2, 0.55));
    }

    #[test]
    fn test_bar_click_relocates_start_when_closer() {
        let mut slider = slider_with(SelectionRange::new(0.2, 0.6));
        assert_eq!(slider.pointer_down(at(60.0), BOUNDS), DragTarget::Start);
        assert_eq!(slider.selection(), SelectionRange::new(0.3, 0.6));
    }

    #[test]
    fn test_bar_click_disabled_ignores_drags() {
        let mut slider = RangeSlider::new(
            RangeSliderArgs::default()
                .selection(SelectionRange::new(0.2, 0.6))
                .allow_clicks_on_bar_to_move_sliders(false),
        );
        assert_eq!(slider.pointer_down(at(100.0), BOUNDS), DragTarget::None);
        slider.pointer_drag(at(150.0), BOUNDS);
        slider.pointer_drag(at(10.0), BOUNDS);
        assert_eq!(slider.selection(), SelectionRange::new(0.2, 0.6));
    }

    #[test]
    fn test_missed_pointer_down_clears_previous_target() {
        let mut slider = RangeSlider::new(
            RangeSliderArgs::default()
                .selection(SelectionRange::new(0.2, 0.6))
                .allow_clicks_on_bar_to_move_sliders(false),
        );
        assert_eq!(slider.pointer_down(at(40.0), BOUNDS), DragTarget::Start);
        assert_eq!(slider.pointer_down(at(80.0), BOUNDS), DragTarget::None);
        slider.pointer_drag(at(10.0), BOUNDS);
        assert_eq!(slider.selection(), SelectionRange::new(0.2, 0.6));
    }

    #[test]
    fn test_non_finite_pointer_down_clears_previous_target() {
        let mut slider = slider_with(SelectionRange::new(0.2, 0.6));
        assert_eq!(slider.pointer_down(at(40.0), BOUNDS), DragTarget::Start);
        assert_eq!(slider.pointer_down(at(f64::NAN), BOUNDS), DragTarget::None);
        assert_eq!(slider.drag_target(), DragTarget::None);
        slider.pointer_drag(at(10.0), BOUNDS);
        assert_eq!(slider.selection(), SelectionRange::new(0.2, 0.6));
    }

    #[test]
    fn test_pointer_down_while_disabled_clears_previous_target() {
        let mut slider = slider_with(SelectionRange::new(0.2, 0.6));
        assert_eq!(slider.pointer_down(at(40.0), BOUNDS), DragTarget::Start);
        slider.args.disabled = true;
        assert_eq!(slider.pointer_down(at(40.0), BOUNDS), DragTarget::None);
        assert_eq!(slider.drag_target(), DragTarget::None);
        slider.args.disabled = false;
        slider.pointer_drag(at(10.0), BOUNDS);
        assert_eq!(slider.selection(), SelectionRange::new(0.2, 0.6));
    }

    #[test]
    fn test_pointer_up_ends_drag() {
        let mut slider = slider_with(SelectionRange::new(0.2, 0.6));
        slider.pointer_down(at(40.0), BOUNDS);
        slider.pointer_up();
        assert_eq!(slider.drag_target(), DragTarget::None);
        slider.pointer_drag(at(10.0), BOUNDS);
        assert_eq!(slider.selection(), SelectionRange::new(0.2, 0.6));
    }

    #[test]
    fn test_disabled_slider_ignores_pointer() {
        let mut slider = slider_with(SelectionRange::new(0.2, 0.6));
        slider.pointer_down(at(40.0), BOUNDS);
        slider.set_disabled(true);
        assert_eq!(slider.drag_target(), DragTarget::None);
        assert_eq!(slider.pointer_down(at(40.0), BOUNDS), DragTarget::None);
        slider.pointer_drag(at(10.0), BOUNDS);
        assert_eq!(slider.selection(), SelectionRange::new(0.2, 0.6));
    }

    #[test]
    fn test_drag_on_degenerate_track_is_ignored() {
        let mut slider = slider_with(SelectionRange::new(0.2, 0.6));
        slider.pointer_down(at(40.0), BOUNDS);
        slider.pointer_drag(at(10.0), Size::new(0.0, 24.0));
        assert_eq!(slider.selection(), SelectionRange::new(0.2, 0.6));
    }

    #[test]
    fn test_drag_notifies_only_on_change() {
        let mut slider = slider_with(SelectionRange::new(0.2, 0.6));
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        slider.subscribe(move |_change: SelectionChange| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        slider.pointer_down(at(40.0), BOUNDS);
        slider.pointer_drag(at(60.0), BOUNDS);
        slider.pointer_drag(at(60.0), BOUNDS);
        slider.pointer_drag(at(70.0), BOUNDS);

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }
}
