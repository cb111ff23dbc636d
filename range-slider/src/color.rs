//! RGBA colors and the HSB helpers used to derive disabled palettes.

/// An RGBA color with `f32` components in the range `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red component.
    pub r: f32,
    /// Green component.
    pub g: f32,
    /// Blue component.
    pub b: f32,
    /// Alpha component.
    pub a: f32,
}

impl Color {
    /// Creates a new `Color` from four `f32` values (red, green, blue, alpha).
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a new opaque `Color` from three `f32` values (red, green, blue).
    #[inline]
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Creates a gray of the given brightness.
    #[inline]
    pub const fn gray(white: f32, alpha: f32) -> Self {
        Self::new(white, white, white, alpha)
    }

    /// Creates a new `Color` from hue, saturation and brightness, each in
    /// `[0.0, 1.0]`.
    pub fn from_hsb(hue: f32, saturation: f32, brightness: f32, alpha: f32) -> Self {
        let saturation = saturation.clamp(0.0, 1.0);
        let brightness = brightness.clamp(0.0, 1.0);
        if saturation <= 0.0 {
            return Self::gray(brightness, alpha);
        }

        let sector = hue.rem_euclid(1.0) * 6.0;
        let index = sector.floor();
        let f = sector - index;
        let p = brightness * (1.0 - saturation);
        let q = brightness * (1.0 - saturation * f);
        let t = brightness * (1.0 - saturation * (1.0 - f));
        let v = brightness;

        let (r, g, b) = match index as u8 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        Self::new(r, g, b, alpha)
    }

    /// Returns `(hue, saturation, brightness)`, each in `[0.0, 1.0]`.
    pub fn to_hsb(self) -> (f32, f32, f32) {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let delta = max - min;

        let brightness = max;
        let saturation = if max > 0.0 { delta / max } else { 0.0 };
        if delta <= 0.0 {
            return (0.0, saturation, brightness);
        }

        let hue = if max == self.r {
            ((self.g - self.b) / delta).rem_euclid(6.0)
        } else if max == self.g {
            (self.b - self.r) / delta + 2.0
        } else {
            (self.r - self.g) / delta + 4.0
        };
        (hue / 6.0, saturation, brightness)
    }

    /// Scales the saturation by `ratio`, keeping hue, brightness and alpha.
    ///
    /// A ratio of `0.0` yields a gray of the same brightness, `1.0` leaves the
    /// color unchanged.
    pub fn desaturated(self, ratio: f32) -> Self {
        let (hue, saturation, brightness) = self.to_hsb();
        Self::from_hsb(hue, saturation * ratio, brightness, self.a)
    }
}
