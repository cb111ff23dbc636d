use range_slider::{PaintCommand, Painter, SliderHost, geometry::Size};
use tracing::{debug, trace};

/// Stand-in for a window hosting one slider. Redraw requests are coalesced
/// into a single pending flag, like a display pipeline would.
#[derive(Debug)]
pub struct DemoHost {
    pub name: &'static str,
    bounds: Size,
    redraw_pending: bool,
    frames: usize,
}

impl DemoHost {
    pub fn new(name: &'static str, width: f64, height: f64) -> Self {
        Self {
            name,
            bounds: Size::new(width, height),
            redraw_pending: false,
            frames: 0,
        }
    }

    /// Consumes the pending redraw, counting it as a painted frame.
    pub fn take_redraw(&mut self) -> bool {
        if std::mem::take(&mut self.redraw_pending) {
            self.frames += 1;
            true
        } else {
            false
        }
    }

    pub fn frames(&self) -> usize {
        self.frames
    }
}

impl SliderHost for DemoHost {
    fn request_redraw(&mut self) {
        if !self.redraw_pending {
            debug!(host = self.name, "redraw requested");
        }
        self.redraw_pending = true;
    }

    fn query_bounds(&self) -> Size {
        self.bounds
    }
}

/// Painter that only logs what it would draw.
#[derive(Debug, Default)]
pub struct TracingPainter {
    pub commands: usize,
}

impl Painter for TracingPainter {
    fn draw(&mut self, command: PaintCommand) {
        self.commands += 1;
        match command {
            PaintCommand::FillGradient { shape, angle, .. } => {
                trace!(rect = ?shape.rect, radius = shape.radius, angle, "fill gradient")
            }
            PaintCommand::Stroke { shape, color } => {
                trace!(rect = ?shape.rect, alpha = color.a, "stroke")
            }
            PaintCommand::FillShadow { shape, shadow } => {
                trace!(rect = ?shape.rect, blur = shadow.blur_radius, "shadow")
            }
        }
    }
}
