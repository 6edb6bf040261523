//! Unit-circle figure
//!
//! The recurring circle construction of the scenes: a point moving on a
//! circle of tracked radius, the foot of its perpendicular on the
//! horizontal axis, the three segments connecting origin, point and
//! foot, and the angle arc at the origin.

use radian_core::{
    Arc, BindingEngine, BindingId, Drawable, ParameterId, Point, Result, Scalar, Segment,
};
use tracing::debug;

use crate::angles::{toward, wrap_tau};

/// Static layout of a [`UnitCircleFigure`].
#[derive(Clone, Copy, Debug)]
pub struct UnitCircleConfig {
    /// Circle center
    pub center: Point,
    /// Display radius of the angle arc at the center
    pub arc_radius: Scalar,
}

impl Default for UnitCircleConfig {
    fn default() -> Self {
        Self {
            center: Point::ZERO,
            arc_radius: 0.5,
        }
    }
}

/// Host drawables the figure pushes into, one per binding.
pub struct UnitCircleDrawables {
    /// Moving point on the circle
    pub point: Box<dyn Drawable>,
    /// Foot of the perpendicular on the horizontal axis
    pub foot: Box<dyn Drawable>,
    /// Segment from center to the moving point
    pub radius_segment: Box<dyn Drawable>,
    /// Segment from center to the foot
    pub base_segment: Box<dyn Drawable>,
    /// Vertical drop from the moving point to the foot
    pub drop_segment: Box<dyn Drawable>,
    /// Angle arc at the center
    pub angle_arc: Box<dyn Drawable>,
}

/// Binding handles returned by [`UnitCircleFigure::install`].
pub struct UnitCircleHandles {
    pub point: BindingId,
    pub foot: BindingId,
    pub radius_segment: BindingId,
    pub base_segment: BindingId,
    pub drop_segment: BindingId,
    pub angle_arc: BindingId,
}

pub struct UnitCircleFigure {
    config: UnitCircleConfig,
}

impl UnitCircleFigure {
    pub fn new(config: UnitCircleConfig) -> Self {
        Self { config }
    }

    /// Register the figure's bindings against an engine, driven by a
    /// theta and a radius parameter.
    ///
    /// Wrap policy: the moving point wraps its angle into `[0, τ)`; the
    /// angle arc takes theta as-is, so sweeps past a full turn stay
    /// visible.
    pub fn install(
        &self,
        engine: &mut BindingEngine,
        theta: ParameterId,
        radius: ParameterId,
        drawables: UnitCircleDrawables,
    ) -> Result<UnitCircleHandles> {
        let center = self.config.center;
        let arc_radius = self.config.arc_radius;

        let point = engine.register_binding(
            [theta.into(), radius.into()],
            Box::new(move |inputs| {
                let angle = wrap_tau(inputs[0].scalar().unwrap_or(0.0));
                let r = inputs[1].scalar().unwrap_or(0.0);
                (center + toward(angle) * r).into()
            }),
            drawables.point,
        )?;

        let foot = engine.register_binding(
            [theta.into(), radius.into()],
            Box::new(move |inputs| {
                let angle = inputs[0].scalar().unwrap_or(0.0);
                let r = inputs[1].scalar().unwrap_or(0.0);
                (center + Point::new(r * angle.cos(), 0.0, 0.0)).into()
            }),
            drawables.foot,
        )?;

        let radius_segment = engine.register_binding(
            [point.into()],
            Box::new(move |inputs| {
                let tip = inputs[0].point().unwrap_or(center);
                Segment::new(center, tip).into()
            }),
            drawables.radius_segment,
        )?;

        let base_segment = engine.register_binding(
            [foot.into()],
            Box::new(move |inputs| {
                let tip = inputs[0].point().unwrap_or(center);
                Segment::new(center, tip).into()
            }),
            drawables.base_segment,
        )?;

        let drop_segment = engine.register_binding(
            [point.into(), foot.into()],
            Box::new(move |inputs| {
                let top = inputs[0].point().unwrap_or(center);
                let bottom = inputs[1].point().unwrap_or(center);
                Segment::new(top, bottom).into()
            }),
            drawables.drop_segment,
        )?;

        let angle_arc = engine.register_binding(
            [theta.into()],
            Box::new(move |inputs| {
                let angle = inputs[0].scalar().unwrap_or(0.0);
                Arc::new(center, arc_radius, 0.0, angle).into()
            }),
            drawables.angle_arc,
        )?;

        debug!(?center, arc_radius, "unit circle figure installed");

        Ok(UnitCircleHandles {
            point,
            foot,
            radius_segment,
            base_segment,
            drop_segment,
            angle_arc,
        })
    }
}
