//! Sine-graph tracer
//!
//! The graph half of the sine scene: a separate plane maps `(θ, sin θ)`
//! into scene coordinates, a dot traces the curve as theta grows, a
//! vertical drop connects it to the axis, and a connector runs from the
//! moving point on the circle across to the graph.
//!
//! Theta stays unwrapped on the graph side so the tracer keeps moving
//! right past a full turn; only the circle end of the connector wraps.

use radian_core::{
    BindingEngine, BindingId, Drawable, ParameterId, Point, Result, Scalar, Segment,
};
use tracing::debug;

use crate::angles::{toward, wrap_tau};

/// Affine map from graph coordinates to scene coordinates.
#[derive(Clone, Copy, Debug)]
pub struct GraphPlane {
    pub origin: Point,
    pub x_unit: Scalar,
    pub y_unit: Scalar,
}

impl Default for GraphPlane {
    fn default() -> Self {
        Self {
            origin: Point::ZERO,
            x_unit: 1.0,
            y_unit: 1.0,
        }
    }
}

impl GraphPlane {
    pub fn to_point(&self, x: Scalar, y: Scalar) -> Point {
        self.origin + Point::new(x * self.x_unit, y * self.y_unit, 0.0)
    }
}

/// Static layout of a [`SineTracerFigure`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SineTracerConfig {
    pub plane: GraphPlane,
    /// Center of the circle the connector starts from
    pub circle_center: Point,
}

pub struct SineTracerDrawables {
    /// Dot tracing `(θ, sin θ)` on the graph plane
    pub tracer: Box<dyn Drawable>,
    /// Vertical drop from the tracer to the graph's x-axis
    pub drop: Box<dyn Drawable>,
    /// Segment from the point on the circle to the tracer
    pub connector: Box<dyn Drawable>,
}

pub struct SineTracerHandles {
    pub tracer: BindingId,
    pub drop: BindingId,
    pub connector: BindingId,
}

pub struct SineTracerFigure {
    config: SineTracerConfig,
}

impl SineTracerFigure {
    pub fn new(config: SineTracerConfig) -> Self {
        Self { config }
    }

    pub fn install(
        &self,
        engine: &mut BindingEngine,
        theta: ParameterId,
        radius: ParameterId,
        drawables: SineTracerDrawables,
    ) -> Result<SineTracerHandles> {
        let plane = self.config.plane;
        let circle_center = self.config.circle_center;

        let tracer = engine.register_binding(
            [theta.into()],
            Box::new(move |inputs| {
                let angle = inputs[0].scalar().unwrap_or(0.0);
                plane.to_point(angle, angle.sin()).into()
            }),
            drawables.tracer,
        )?;

        let drop = engine.register_binding(
            [tracer.into()],
            Box::new(move |inputs| {
                let top = inputs[0].point().unwrap_or(plane.origin);
                Segment::new(top, Point::new(top.x, plane.origin.y, top.z)).into()
            }),
            drawables.drop,
        )?;

        let connector = engine.register_binding(
            [theta.into(), radius.into(), tracer.into()],
            Box::new(move |inputs| {
                let angle = wrap_tau(inputs[0].scalar().unwrap_or(0.0));
                let r = inputs[1].scalar().unwrap_or(0.0);
                let graph_point = inputs[2].point().unwrap_or(plane.origin);
                Segment::new(circle_center + toward(angle) * r, graph_point).into()
            }),
            drawables.connector,
        )?;

        debug!(?plane, ?circle_center, "sine tracer installed");

        Ok(SineTracerHandles {
            tracer,
            drop,
            connector,
        })
    }
}
