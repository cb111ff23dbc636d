//! Errors reported by slider layout checks.

use thiserror::Error;

/// A violated layout precondition.
///
/// The control only renders sanely when the track is wide enough for both
/// knobs and reasonably elongated. Hosts that hit one of these have sized the
/// control wrongly; painting treats it as a programming error.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LayoutError {
    /// Width or height is zero, negative or not finite.
    #[error("slider bounds must be finite and positive, got {width}x{height}")]
    DegenerateBounds {
        /// Width of the offending bounds.
        width: f64,
        /// Height of the offending bounds.
        height: f64,
    },
    /// The track is not at least twice as wide as it is tall.
    #[error(
        "range control expects a reasonable width to height ratio, width should be at least twice the height (width {width}, height {height})"
    )]
    TrackTooShort {
        /// Track width.
        width: f64,
        /// Track height.
        height: f64,
    },
    /// The track cannot fit two knobs side by side.
    #[error("width must be able to accommodate two range sliders (width {width}, knob width {knob_width})")]
    TrackTooNarrowForKnobs {
        /// Track width.
        width: f64,
        /// Width of a single knob.
        knob_width: f64,
    },
    /// The height leaves nothing for the knobs once the shadow padding is
    /// taken out.
    #[error("height {height} leaves no room for knobs inside the {shadow_padding} shadow padding")]
    NoRoomForKnobs {
        /// Track height.
        height: f64,
        /// Vertical padding reserved for the knob shadow.
        shadow_padding: f64,
    },
}
