//! Headless unit-circle demo
//!
//! Builds the unit-circle figure with console drawables, sweeps theta
//! through a full turn, and steps fixed-dt frames. Run with
//! `RUST_LOG=debug` to see every geometry update.

use radian_core::{BindingEngine, ConsoleDrawable, Easing};
use radian_figures::{UnitCircleConfig, UnitCircleDrawables, UnitCircleFigure};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let mut engine = BindingEngine::new();
    let theta = engine
        .register_parameter("theta", 50.0_f32.to_radians())
        .unwrap();
    let radius = engine.register_parameter("radius", 3.0).unwrap();

    let handles = UnitCircleFigure::new(UnitCircleConfig::default())
        .install(
            &mut engine,
            theta,
            radius,
            UnitCircleDrawables {
                point: Box::new(ConsoleDrawable::new("point")),
                foot: Box::new(ConsoleDrawable::new("foot")),
                radius_segment: Box::new(ConsoleDrawable::new("radius_segment")),
                base_segment: Box::new(ConsoleDrawable::new("base_segment")),
                drop_segment: Box::new(ConsoleDrawable::new("drop_segment")),
                angle_arc: Box::new(ConsoleDrawable::new("angle_arc")),
            },
        )
        .unwrap();

    engine
        .animate_parameter(theta, std::f32::consts::TAU, 2.0, Easing::Smooth)
        .unwrap();

    let dt = 1.0 / 60.0;
    let mut frames = 0;
    while engine.is_animating(theta) {
        engine.advance(dt);
        frames += 1;
    }

    let point = engine.binding_output(handles.point);
    tracing::info!(frames, final_theta = engine.parameter(theta).unwrap(), ?point, "sweep done");
}
