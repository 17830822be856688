//! Benchmarks for the Msg → Update → Cmd loop of the sticky panel
//!
//! Run with: cargo bench transition

use std::time::Duration;

use sticky_panel::config::PanelConfig;
use sticky_panel::container::{SimpleChild, StickyContainer};
use sticky_panel::host::PanelHost;
use sticky_panel::messages::Msg;
use sticky_panel::model::AppModel;
use sticky_panel::transition::{GestureSample, SpringCurve, TransitionController, Velocity};
use sticky_panel::update::update;

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

const FRAME: Duration = Duration::from_millis(16);

fn main() {
    divan::main();
}

fn make_model() -> AppModel {
    let mut model = AppModel::new(849.0, PanelConfig::default());
    model
        .container
        .configure_child(Box::new(SimpleChild::new("now-playing")), false);
    model
}

// ============================================================================
// Curve sampling
// ============================================================================

#[divan::bench(args = [0.5, 1.0, 2.0])]
fn spring_position(damping_ratio: f64) {
    let curve = SpringCurve::new(damping_ratio);
    for i in 0..=1000 {
        divan::black_box(curve.position(i as f64 / 1000.0));
    }
}

// ============================================================================
// Controller only
// ============================================================================

#[divan::bench]
fn controller_toggle_to_settle() {
    let mut controller = TransitionController::default();
    let mut host = PanelHost::new(800.0, 50.0);
    controller.request_toggle();
    while controller.tick(FRAME, &mut host).is_none() {}
    divan::black_box(&host);
}

#[divan::bench(args = [100, 1000])]
fn controller_drag_scrub(samples: usize) {
    let mut controller = TransitionController::default();
    let mut host = PanelHost::new(800.0, 50.0);
    controller.begin_gesture(Velocity(-10.0));

    for i in 0..samples {
        let translation = -((i % 800) as f64);
        controller.update_gesture(GestureSample::new(translation, -10.0), 849.0, &mut host);
    }

    controller.end_gesture();
    divan::black_box(&host);
}

// ============================================================================
// Full update loop
// ============================================================================

#[divan::bench]
fn update_tap_to_settle() {
    let mut model = make_model();
    let mut cmd = update(&mut model, Msg::tap());
    while cmd.as_ref().is_some_and(|c| c.needs_tick()) {
        cmd = update(&mut model, Msg::tick(FRAME));
    }
    divan::black_box(&model);
}

#[divan::bench(args = [100, 1000])]
fn update_drag_round_trip(samples: usize) {
    let mut model = make_model();
    update(&mut model, Msg::drag_began(-10.0));

    for i in 0..samples {
        let translation = -((i % 800) as f64);
        let cmd = update(&mut model, Msg::drag_changed(translation, -10.0));
        divan::black_box(cmd);
    }

    let mut cmd = update(&mut model, Msg::drag_ended());
    while cmd.as_ref().is_some_and(|c| c.needs_tick()) {
        cmd = update(&mut model, Msg::tick(FRAME));
    }
    divan::black_box(&model);
}
