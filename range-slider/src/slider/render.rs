use smallvec::SmallVec;
use tracing::trace;

use crate::{
    color::Color,
    geometry::{Point, Rect, Size},
};

use super::{ColorStyle, RangeSlider};

/// Angle, in degrees, of a top-to-bottom gradient.
pub const VERTICAL_GRADIENT_DEGREES: f64 = -90.0;

/// Saturation ratio applied to the fill colors of a disabled slider.
pub const DISABLED_DESATURATION: f32 = 0.2;

/// Drop shadow painted under both knobs.
pub const KNOB_SHADOW: Shadow = Shadow {
    offset: Point::new(2.0, -2.0),
    blur_radius: 2.0,
    color: Color::gray(0.0, 0.1),
};

/// Two-stop linear gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient {
    /// Color at the start of the gradient axis.
    pub start: Color,
    /// Color at the end of the gradient axis.
    pub end: Color,
}

impl Gradient {
    /// Creates a gradient.
    pub const fn new(start: Color, end: Color) -> Self {
        Self { start, end }
    }

    fn desaturated(self, ratio: f32) -> Self {
        Self::new(self.start.desaturated(ratio), self.end.desaturated(ratio))
    }
}

/// A blurred, offset shadow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    /// Offset of the shadow from the shape.
    pub offset: Point,
    /// Blur radius.
    pub blur_radius: f64,
    /// Shadow color.
    pub color: Color,
}

/// A rectangle with uniformly rounded corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedRect {
    /// Outline rectangle.
    pub rect: Rect,
    /// Corner radius.
    pub radius: f64,
}

impl RoundedRect {
    /// Creates a rounded rectangle.
    pub const fn new(rect: Rect, radius: f64) -> Self {
        Self { rect, radius }
    }
}

/// One drawing operation of the slider, in painting order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaintCommand {
    /// Fill a shape with a linear gradient at `angle` degrees.
    FillGradient {
        /// Shape to fill.
        shape: RoundedRect,
        /// Gradient colors.
        gradient: Gradient,
        /// Gradient axis in degrees.
        angle: f64,
    },
    /// Stroke the outline of a shape with a one pixel line.
    Stroke {
        /// Shape to outline.
        shape: RoundedRect,
        /// Stroke color.
        color: Color,
    },
    /// Fill a shape so that only its shadow remains visible once covered.
    FillShadow {
        /// Shape casting the shadow.
        shape: RoundedRect,
        /// Shadow parameters.
        shadow: Shadow,
    },
}

/// Buffer holding a full paint of the slider without allocating.
pub type PaintCommands = SmallVec<[PaintCommand; 12]>;

/// Drawing backend the slider paints through.
///
/// Implement this on top of a platform drawing API. `Vec<PaintCommand>`
/// implements it by recording, which is handy for tests.
pub trait Painter {
    /// Executes one drawing operation.
    fn draw(&mut self, command: PaintCommand);
}

impl Painter for Vec<PaintCommand> {
    fn draw(&mut self, command: PaintCommand) {
        self.push(command);
    }
}

impl Painter for PaintCommands {
    fn draw(&mut self, command: PaintCommand) {
        self.push(command);
    }
}

/// Colors used to paint a slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderPalette {
    /// Fill of both knobs.
    pub knob: Gradient,
    /// Fill of the unselected bar.
    pub bar_background: Gradient,
    /// Fill of the selected part of the bar.
    pub bar_fill: Gradient,
    /// Outline of the bar and the knobs.
    pub bar_stroke: Color,
    /// Outline of the selected part of the bar.
    pub bar_fill_stroke: Color,
    /// Shadow under the knobs.
    pub knob_shadow: Shadow,
}

impl SliderPalette {
    /// Palette for a color style. Disabled sliders get a desaturated fill.
    pub fn for_style(style: ColorStyle, disabled: bool) -> Self {
        let (bar_fill, bar_fill_stroke) = match style {
            ColorStyle::Yellow => (
                Gradient::new(
                    Color::from_rgb(1.0, 1.0, 0.0),
                    Color::from_rgb(1.0, 196.0 / 255.0, 0.0),
                ),
                Color::new(1.0, 170.0 / 255.0, 16.0 / 255.0, 0.70),
            ),
            ColorStyle::Aqua => (
                Gradient::new(
                    Color::from_rgb(0.60, 0.85, 1.0),
                    Color::from_rgb(0.16, 0.55, 0.96),
                ),
                Color::new(0.10, 0.45, 0.90, 0.70),
            ),
        };

        let palette = Self {
            knob: Gradient::new(Color::gray(0.92, 1.0), Color::gray(0.80, 1.0)),
            bar_background: Gradient::new(Color::gray(0.85, 1.0), Color::gray(0.70, 1.0)),
            bar_fill,
            bar_stroke: Color::gray(0.0, 0.25),
            bar_fill_stroke,
            knob_shadow: KNOB_SHADOW,
        };

        if disabled {
            Self {
                bar_fill: palette.bar_fill.desaturated(DISABLED_DESATURATION),
                bar_fill_stroke: palette.bar_fill_stroke.desaturated(DISABLED_DESATURATION),
                ..palette
            }
        } else {
            palette
        }
    }
}

impl RangeSlider {
    /// Drawing operations for one paint of the slider, in order.
    ///
    /// # Panics
    ///
    /// Panics when `bounds` violate the layout preconditions checked by
    /// [`SliderLayout::check`](super::SliderLayout::check). A control sized
    /// like that is a bug in the host.
    pub fn paint_commands(&self, bounds: Size) -> PaintCommands {
        let mut commands = PaintCommands::new();
        self.paint(bounds, &mut commands);
        commands
    }

    /// Paints the slider through `painter`.
    ///
    /// Order: bar background, fill with its outline (skipped when nothing is
    /// selected), bar outline, both knob shadows, then each knob with its
    /// outline.
    ///
    /// # Panics
    ///
    /// Panics when `bounds` violate the layout preconditions, see
    /// [`paint_commands`](Self::paint_commands).
    pub fn paint(&self, bounds: Size, painter: &mut impl Painter) {
        let layout = self.layout(bounds);
        if let Err(err) = layout.check() {
            panic!("{err}");
        }

        let palette = self.palette();
        let bar_radius = layout.bar_corner_radius();
        let bar = RoundedRect::new(layout.bar_frame(), bar_radius);
        let fill = RoundedRect::new(layout.fill_frame(self.args.selection), bar_radius);
        let start_knob = RoundedRect::new(
            layout.knob_frame(self.args.selection.start),
            layout.knob_corner_radius,
        );
        let end_knob = RoundedRect::new(
            layout.knob_frame(self.args.selection.end),
            layout.knob_corner_radius,
        );
        trace!(?bar, ?fill, ?start_knob, ?end_knob, "painting range slider");

        painter.draw(PaintCommand::FillGradient {
            shape: bar,
            gradient: palette.bar_background,
            angle: -VERTICAL_GRADIENT_DEGREES,
        });

        if fill.rect.width() > 0.0 {
            painter.draw(PaintCommand::FillGradient {
                shape: fill,
                gradient: palette.bar_fill,
                angle: VERTICAL_GRADIENT_DEGREES,
            });
            painter.draw(PaintCommand::Stroke {
                shape: fill,
                color: palette.bar_fill_stroke,
            });
        }

        painter.draw(PaintCommand::Stroke {
            shape: bar,
            color: palette.bar_stroke,
        });

        for knob in [start_knob, end_knob] {
            painter.draw(PaintCommand::FillShadow {
                shape: knob,
                shadow: palette.knob_shadow,
            });
        }

        for knob in [start_knob, end_knob] {
            painter.draw(PaintCommand::FillGradient {
                shape: knob,
                gradient: palette.knob,
                angle: VERTICAL_GRADIENT_DEGREES,
            });
            painter.draw(PaintCommand::Stroke {
                shape: knob,
                color: palette.bar_stroke,
            });
        }
    }
}
