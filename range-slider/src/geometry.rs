//! Floating point geometry in the slider's local coordinate space.
//!
//! # Key Types
//!
//! - [`Point`] - A 2D position, as delivered by pointer events
//! - [`Size`] - The bounds of the control (track width and height)
//! - [`Rect`] - An axis-aligned rectangle with an origin and a size
//!
//! # Coordinate System
//!
//! Coordinates are local to the control: the origin is the corner of the
//! control's bounds, X increases to the right. The slider is vertically
//! symmetric, so whether Y grows upwards or downwards makes no difference to
//! any query in this crate.
//!
//! # Pixel snapping
//!
//! [`Rect::crisp`] aligns a rectangle so that a one pixel stroke drawn along
//! its edges lands exactly on the pixel grid instead of being smeared across
//! two pixels.
//!
//! ```
//! use range_slider::geometry::Rect;
//!
//! let rect = Rect::new(3.2, 1.7, 8.0, 20.0).crisp();
//! assert_eq!(rect, Rect::new(3.5, 1.5, 9.0, 21.0));
//! ```

/// A position in local coordinates.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns `true` when both coordinates are finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Returns this point moved by `dx`/`dy`.
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// A width/height pair, used for the bounds of the control.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Size {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Size {
    /// A size with zero extent.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Creates a new size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns `true` when both extents are finite and strictly positive.
    pub fn is_drawable(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// An axis-aligned rectangle.
///
/// A rectangle whose width or height is zero or negative is *empty*. Empty
/// rectangles contain no points and collapse to [`Rect::ZERO`] when made
/// integral.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Rect {
    /// The corner with the smallest coordinates.
    pub origin: Point,
    /// Width and height.
    pub size: Size,
}

impl Rect {
    /// The empty rectangle at the origin.
    pub const ZERO: Self = Self {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    /// Creates a rectangle from its origin and extents.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Smallest x coordinate.
    pub fn min_x(&self) -> f64 {
        self.origin.x
    }

    /// Largest x coordinate.
    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    /// Smallest y coordinate.
    pub fn min_y(&self) -> f64 {
        self.origin.y
    }

    /// Largest y coordinate.
    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }

    /// Horizontal center.
    pub fn mid_x(&self) -> f64 {
        self.origin.x + self.size.width / 2.0
    }

    /// Vertical center.
    pub fn mid_y(&self) -> f64 {
        self.origin.y + self.size.height / 2.0
    }

    /// Width of the rectangle.
    pub fn width(&self) -> f64 {
        self.size.width
    }

    /// Height of the rectangle.
    pub fn height(&self) -> f64 {
        self.size.height
    }

    /// Returns `true` if the width or height is not strictly positive.
    pub fn is_empty(&self) -> bool {
        !(self.size.width > 0.0 && self.size.height > 0.0)
    }

    /// Hit test. The minimum edges are inclusive, the maximum edges exclusive,
    /// so two rectangles sharing an edge never both contain a point on it.
    pub fn contains(&self, point: Point) -> bool {
        !self.is_empty()
            && point.x >= self.min_x()
            && point.x < self.max_x()
            && point.y >= self.min_y()
            && point.y < self.max_y()
    }

    /// Returns this rectangle moved by `dx`/`dy`.
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self {
            origin: self.origin.offset(dx, dy),
            size: self.size,
        }
    }

    /// The smallest rectangle with integral coordinates that encloses this
    /// one. Empty rectangles become [`Rect::ZERO`].
    pub fn integral(self) -> Self {
        if self.is_empty() {
            return Self::ZERO;
        }
        let min_x = self.min_x().floor();
        let min_y = self.min_y().floor();
        let max_x = self.max_x().ceil();
        let max_y = self.max_y().ceil();
        Self::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    /// Makes the rectangle integral and shifts it by half a pixel on both
    /// axes, so hairline strokes along its edges cover whole pixels.
    pub fn crisp(self) -> Self {
        self.integral().offset(0.5, 0.5)
    }
}
