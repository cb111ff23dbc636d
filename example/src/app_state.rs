use std::sync::Arc;

use parking_lot::RwLock;
use range_slider::{
    ColorStyle, KnobStyle, RangeSlider, RangeSliderArgs, SelectionChange, SelectionRange,
    SliderView, SliderValues,
};

use crate::demo_host::DemoHost;

/// How a label renders a slider value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelFormat {
    /// Three fraction digits.
    Decimal,
    /// Rounded to a whole number.
    Integer,
}

impl LabelFormat {
    pub fn format(self, value: f64) -> String {
        match self {
            LabelFormat::Decimal => format!("{value:.3}"),
            LabelFormat::Integer => format!("{}", value.round() as i64),
        }
    }
}

/// The three text labels shown next to a slider: start, end and length.
#[derive(Debug, Clone, Default)]
pub struct LabelRow {
    pub start: Arc<RwLock<String>>,
    pub end: Arc<RwLock<String>>,
    pub length: Arc<RwLock<String>>,
}

impl LabelRow {
    /// Keeps the labels in sync with `slider`, the way a text field bound to
    /// the slider's value would.
    pub fn bind(slider: &mut RangeSlider, format: LabelFormat) -> Self {
        let row = Self::default();
        row.show(slider.values(), format);

        let bound = row.clone();
        slider.subscribe(move |change: SelectionChange| {
            bound.show(change.current, format);
        });
        row
    }

    fn show(&self, values: SliderValues, format: LabelFormat) {
        *self.start.write() = format.format(values.start);
        *self.end.write() = format.format(values.end);
        *self.length.write() = format.format(values.length);
    }

    pub fn text(&self) -> String {
        format!(
            "start {:>7}  end {:>7}  length {:>7}",
            self.start.read(),
            self.end.read(),
            self.length.read()
        )
    }
}

pub struct DemoSlider {
    pub view: SliderView<DemoHost>,
    pub labels: LabelRow,
}

pub struct AppState {
    pub sliders: Vec<DemoSlider>,
}

impl AppState {
    pub fn new() -> Self {
        let plain = RangeSlider::new(
            RangeSliderArgs::default().selection(SelectionRange::new(0.25, 0.75)),
        );
        let wide = RangeSlider::new(
            RangeSliderArgs::default().selection(SelectionRange::new(0.5, 0.95)),
        );

        let mut big = RangeSlider::default();
        big.set_start(0.2);
        big.set_on_control_changed(|slider: &RangeSlider| {
            tracing::info!(
                start = slider.start(),
                end = slider.end(),
                "big slider changed"
            );
        });

        let snapping = RangeSlider::new(
            RangeSliderArgs::default()
                .snaps_to_integers(true)
                .min_value(1.0)
                .max_value(10.0),
        );

        let sliders = [
            ("slider 1", plain, 300.0, 24.0, LabelFormat::Decimal),
            ("slider 2", wide, 300.0, 24.0, LabelFormat::Decimal),
            ("slider 3", big, 420.0, 30.0, LabelFormat::Decimal),
            ("slider 4", snapping, 300.0, 24.0, LabelFormat::Integer),
        ]
        .into_iter()
        .map(|(name, mut slider, width, height, format)| {
            let labels = LabelRow::bind(&mut slider, format);
            DemoSlider {
                view: SliderView::new(slider, DemoHost::new(name, width, height)),
                labels,
            }
        })
        .collect();

        Self { sliders }
    }

    /// Mirrors the inclusive-length checkbox of the snapping slider.
    pub fn set_inclusive_length(&mut self, inclusive: bool) {
        if let Some(snapping) = self.sliders.get_mut(3) {
            snapping
                .view
                .update(|slider| slider.set_inclusive_length_for_snap_to(inclusive));
        }
    }

    /// Mirrors the color style popup, which applies to every slider.
    pub fn set_color_style(&mut self, style: ColorStyle) {
        for demo in &mut self.sliders {
            demo.view.update(|slider| slider.set_color_style(style));
        }
    }

    /// Mirrors the knob style popup, which applies to every slider.
    pub fn set_knob_style(&mut self, style: KnobStyle) {
        for demo in &mut self.sliders {
            demo.view.update(|slider| slider.set_knob_style(style));
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
