//! Selection state and change notifications.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The selected sub-range, stored as fractions of the track width.
///
/// Both ends live in `0.0..=1.0`. Pointer drags keep `start <= end`; direct
/// assignment through [`RangeSlider::set_start`](crate::RangeSlider::set_start)
/// and [`RangeSlider::set_end`](crate::RangeSlider::set_end) does not reorder,
/// so an inverted range is representable (see [`SelectionRange::is_inverted`]).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SelectionRange {
    /// Normalized position of the start knob.
    pub start: f64,
    /// Normalized position of the end knob.
    pub end: f64,
}

impl SelectionRange {
    /// Creates a new selection.
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// `end - start`; negative for an inverted selection.
    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    /// Returns `true` when `start > end`.
    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    /// The selection after moving the start knob to `x`, pushing the end knob
    /// along when `x` passes it.
    pub fn with_start_pushing(self, x: f64) -> Self {
        Self::new(x, self.end.max(x))
    }

    /// The selection after moving the end knob to `x`, pushing the start knob
    /// along when `x` passes it.
    pub fn with_end_pushing(self, x: f64) -> Self {
        Self::new(self.start.min(x), x)
    }
}

impl Default for SelectionRange {
    fn default() -> Self {
        Self::new(0.0, 0.75)
    }
}

/// Which knob, if any, a pointer drag currently moves.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragTarget {
    /// No drag in progress; drag events are ignored.
    #[default]
    None,
    /// The start knob follows the pointer.
    Start,
    /// The end knob follows the pointer.
    End,
}

impl DragTarget {
    /// Returns `true` unless this is [`DragTarget::None`].
    pub fn is_dragging(self) -> bool {
        !matches!(self, DragTarget::None)
    }
}

/// Snapshot of the value-space outputs of a slider.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct SliderValues {
    /// Start of the selection in value space.
    pub start: f64,
    /// End of the selection in value space.
    pub end: f64,
    /// Length of the selection in value space.
    pub length: f64,
}

/// Delivered to subscribers whenever `start`, `end` or `length` changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionChange {
    /// Values before the mutation.
    pub previous: SliderValues,
    /// Values after the mutation.
    pub current: SliderValues,
}

impl SelectionChange {
    /// Whether the start value changed.
    pub fn start_changed(&self) -> bool {
        self.previous.start != self.current.start
    }

    /// Whether the end value changed.
    pub fn end_changed(&self) -> bool {
        self.previous.end != self.current.end
    }

    /// Whether the length changed.
    pub fn length_changed(&self) -> bool {
        self.previous.length != self.current.length
    }
}
