//! Headless demo of four range sliders: plain, wide, a big one with a control
//! callback, and one snapping to the integers 1 through 10. A scripted pointer
//! session drives them and the bound labels are logged after every step.

mod app_state;
mod demo_host;

use std::error::Error;

use range_slider::{ColorStyle, KnobStyle, SliderHost, SliderView, geometry::Point};
use tracing::info;

use crate::{
    app_state::{AppState, DemoSlider},
    demo_host::{DemoHost, TracingPainter},
};

pub fn run() -> Result<(), Box<dyn Error>> {
    let mut state = AppState::new();
    for demo in &state.sliders {
        demo.view
            .slider()
            .layout(demo.view.host().query_bounds())
            .check()?;
    }
    present(&mut state, "initial");

    {
        let demo = slider_mut(&mut state, 0)?;
        let end_knob = demo.view.slider().frame_for_end_slider(demo.view.host().query_bounds());
        drag(&mut demo.view, end_knob.mid_x(), &[200.0, 240.0]);
    }
    present(&mut state, "dragged end knob of slider 1");

    {
        // Click on the bar left of the start knob: it jumps there, then follows.
        let demo = slider_mut(&mut state, 1)?;
        drag(&mut demo.view, 60.0, &[90.0]);
    }
    present(&mut state, "bar click on slider 2");

    {
        let demo = slider_mut(&mut state, 2)?;
        let start_knob = demo
            .view
            .slider()
            .frame_for_start_slider(demo.view.host().query_bounds());
        drag(&mut demo.view, start_knob.mid_x(), &[300.0, 400.0]);
    }
    present(&mut state, "pushed end knob of slider 3");

    {
        let demo = slider_mut(&mut state, 3)?;
        let end_knob = demo.view.slider().frame_for_end_slider(demo.view.host().query_bounds());
        drag(&mut demo.view, end_knob.mid_x(), &[150.0]);
    }
    present(&mut state, "snapped slider 4");

    state.set_inclusive_length(false);
    present(&mut state, "exclusive length on slider 4");

    state.set_color_style(ColorStyle::Aqua);
    state.set_knob_style(KnobStyle::Circular);
    present(&mut state, "aqua style with circular knobs");

    for demo in &state.sliders {
        info!(
            slider = demo.view.host().name,
            frames = demo.view.host().frames(),
            "done"
        );
    }
    Ok(())
}

fn slider_mut(state: &mut AppState, index: usize) -> Result<&mut DemoSlider, Box<dyn Error>> {
    state
        .sliders
        .get_mut(index)
        .ok_or_else(|| format!("no demo slider at index {index}").into())
}

/// Presses at `from_x`, drags through `path` and releases, on the vertical
/// center of the control.
fn drag(view: &mut SliderView<DemoHost>, from_x: f64, path: &[f64]) {
    let y = view.host().query_bounds().height / 2.0;
    let target = view.pointer_down(Point::new(from_x, y));
    info!(slider = view.host().name, ?target, "pointer down");
    for &x in path {
        view.pointer_dragged(Point::new(x, y));
    }
    view.pointer_up();
}

/// Paints every slider with a pending redraw and logs all label rows.
fn present(state: &mut AppState, step: &str) {
    info!("--- {step} ---");
    for demo in &mut state.sliders {
        if demo.view.host_mut().take_redraw() {
            let mut painter = TracingPainter::default();
            demo.view.paint(&mut painter);
            info!(
                slider = demo.view.host().name,
                commands = painter.commands,
                "painted"
            );
        }
        info!(slider = demo.view.host().name, "{}", demo.labels.text());
    }
}
