//! Tangent construction
//!
//! The construction deriving tan θ on a circle: the ray through the
//! center at angle theta, the fixed vertical tangent line where the
//! circle meets the positive x-axis, and their intersection at
//! `(r, r·tan θ)`.
//!
//! Every binding here takes theta unwrapped. Wrapping the angle would
//! move the tangent's discontinuity away from the odd multiples of π/2
//! where it belongs.

use radian_core::{
    Anchor, BindingEngine, BindingId, Drawable, ParameterId, Point, Result, Scalar, Segment,
};
use std::f32::consts::FRAC_PI_2;
use tracing::debug;

use crate::angles::toward;

/// Static layout of a [`TangentFigure`].
#[derive(Clone, Copy, Debug)]
pub struct TangentConfig {
    /// Circle center
    pub center: Point,
    /// Half-length of the ray through the center
    pub ray_extent: Scalar,
    /// Half-length of the vertical tangent line
    pub tangent_extent: Scalar,
}

impl Default for TangentConfig {
    fn default() -> Self {
        Self {
            center: Point::ZERO,
            ray_extent: 9.0,
            tangent_extent: 5.0,
        }
    }
}

pub struct TangentDrawables {
    /// Ray through the center at angle theta, both directions
    pub ray: Box<dyn Drawable>,
    /// Vertical tangent line at x = r
    pub tangent_line: Box<dyn Drawable>,
    /// Intersection of ray and tangent line
    pub tangent_point: Box<dyn Drawable>,
    /// Point where the tangent line touches the circle
    pub touch_point: Box<dyn Drawable>,
    /// Label anchor for the center, inside the angle
    pub origin_label: Box<dyn Drawable>,
    /// Label anchor for the point on the circle at angle theta
    pub point_label: Box<dyn Drawable>,
    /// Label anchor for the foot of the point's perpendicular
    pub foot_label: Box<dyn Drawable>,
}

pub struct TangentHandles {
    pub ray: BindingId,
    pub tangent_line: BindingId,
    pub tangent_point: BindingId,
    pub touch_point: BindingId,
    pub origin_label: BindingId,
    pub point_label: BindingId,
    pub foot_label: BindingId,
}

pub struct TangentFigure {
    config: TangentConfig,
}

impl TangentFigure {
    pub fn new(config: TangentConfig) -> Self {
        Self { config }
    }

    pub fn install(
        &self,
        engine: &mut BindingEngine,
        theta: ParameterId,
        radius: ParameterId,
        drawables: TangentDrawables,
    ) -> Result<TangentHandles> {
        let center = self.config.center;
        let ray_extent = self.config.ray_extent;
        let tangent_extent = self.config.tangent_extent;

        let ray = engine.register_binding(
            [theta.into()],
            Box::new(move |inputs| {
                let angle = inputs[0].scalar().unwrap_or(0.0);
                let dir = toward(angle) * ray_extent;
                Segment::new(center - dir, center + dir).into()
            }),
            drawables.ray,
        )?;

        let tangent_line = engine.register_binding(
            [radius.into()],
            Box::new(move |inputs| {
                let r = inputs[0].scalar().unwrap_or(0.0);
                let touch = center + Point::new(r, 0.0, 0.0);
                Segment::new(
                    touch + Point::new(0.0, -tangent_extent, 0.0),
                    touch + Point::new(0.0, tangent_extent, 0.0),
                )
                .into()
            }),
            drawables.tangent_line,
        )?;

        let tangent_point = engine.register_binding(
            [theta.into(), radius.into()],
            Box::new(move |inputs| {
                let angle = inputs[0].scalar().unwrap_or(0.0);
                let r = inputs[1].scalar().unwrap_or(0.0);
                (center + Point::new(r, r * angle.tan(), 0.0)).into()
            }),
            drawables.tangent_point,
        )?;

        let touch_point = engine.register_binding(
            [radius.into()],
            Box::new(move |inputs| {
                let r = inputs[0].scalar().unwrap_or(0.0);
                (center + Point::new(r, 0.0, 0.0)).into()
            }),
            drawables.touch_point,
        )?;

        // Label anchors for the three named points. The center label
        // sits opposite the angle bisector so it clears the arc; the
        // circle-point label points radially outward rotated a quarter
        // turn; the foot label goes below the axis while the point is
        // above it and flips under.
        let origin_label = engine.register_binding(
            [theta.into()],
            Box::new(move |inputs| {
                let angle = inputs[0].scalar().unwrap_or(0.0);
                Anchor::new(center, toward(angle / 2.0) * -1.0).into()
            }),
            drawables.origin_label,
        )?;

        let point_label = engine.register_binding(
            [theta.into(), radius.into()],
            Box::new(move |inputs| {
                let angle = inputs[0].scalar().unwrap_or(0.0);
                let r = inputs[1].scalar().unwrap_or(0.0);
                Anchor::new(center + toward(angle) * r, toward(angle + FRAC_PI_2)).into()
            }),
            drawables.point_label,
        )?;

        let foot_label = engine.register_binding(
            [theta.into(), radius.into()],
            Box::new(move |inputs| {
                let angle = inputs[0].scalar().unwrap_or(0.0);
                let r = inputs[1].scalar().unwrap_or(0.0);
                let foot = center + Point::new(r * angle.cos(), 0.0, 0.0);
                Anchor::new(foot, Point::new(0.0, -angle.sin().signum(), 0.0)).into()
            }),
            drawables.foot_label,
        )?;

        debug!(ray_extent, tangent_extent, "tangent figure installed");

        Ok(TangentHandles {
            ray,
            tangent_line,
            tangent_point,
            touch_point,
            origin_label,
            point_label,
            foot_label,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use radian_core::NullDrawable;
    use std::f32::consts::FRAC_PI_4;

    fn installed(theta0: f32, r0: f32) -> (BindingEngine, TangentHandles) {
        let mut engine = BindingEngine::new();
        let theta = engine.register_parameter("theta", theta0).unwrap();
        let radius = engine.register_parameter("radius", r0).unwrap();
        let handles = TangentFigure::new(TangentConfig::default())
            .install(
                &mut engine,
                theta,
                radius,
                TangentDrawables {
                    ray: Box::new(NullDrawable),
                    tangent_line: Box::new(NullDrawable),
                    tangent_point: Box::new(NullDrawable),
                    touch_point: Box::new(NullDrawable),
                    origin_label: Box::new(NullDrawable),
                    point_label: Box::new(NullDrawable),
                    foot_label: Box::new(NullDrawable),
                },
            )
            .unwrap();
        engine.advance(0.0);
        (engine, handles)
    }

    #[test]
    fn tangent_point_matches_r_tan_theta() {
        let (engine, handles) = installed(0.6, 3.0);
        let p = engine
            .binding_output(handles.tangent_point)
            .and_then(|g| g.as_point())
            .unwrap();
        assert!((p.x - 3.0).abs() < 1e-6);
        assert!((p.y - 3.0 * 0.6_f32.tan()).abs() < 1e-5);
    }

    #[test]
    fn forty_five_degrees_meets_the_corner() {
        let (engine, handles) = installed(FRAC_PI_4, 2.0);
        let p = engine
            .binding_output(handles.tangent_point)
            .and_then(|g| g.as_point())
            .unwrap();
        // tan(pi/4) = 1: the intersection sits at (r, r).
        assert!(p.distance(Point::new(2.0, 2.0, 0.0)) < 1e-5);
    }

    #[test]
    fn ray_is_symmetric_about_the_center() {
        let (engine, handles) = installed(0.6, 3.0);
        let ray = engine
            .binding_output(handles.ray)
            .and_then(|g| g.as_segment())
            .unwrap();
        assert!(ray.midpoint().distance(Point::ZERO) < 1e-5);
        assert!((ray.length() - 18.0).abs() < 1e-4);
    }

    #[test]
    fn tangent_line_tracks_the_radius() {
        let (engine, handles) = installed(0.6, 3.0);
        let line = engine
            .binding_output(handles.tangent_line)
            .and_then(|g| g.as_segment())
            .unwrap();
        let touch = engine
            .binding_output(handles.touch_point)
            .and_then(|g| g.as_point())
            .unwrap();
        assert_eq!(touch, Point::new(3.0, 0.0, 0.0));
        assert!((line.start.x - 3.0).abs() < 1e-6);
        assert!((line.end.x - 3.0).abs() < 1e-6);
        assert!((line.length() - 10.0).abs() < 1e-5);
    }

    #[test]
    fn labels_hang_off_their_points() {
        let (engine, handles) = installed(0.6, 3.0);

        let origin = engine
            .binding_output(handles.origin_label)
            .and_then(|g| g.as_anchor())
            .unwrap();
        assert!(origin.position.distance(Point::ZERO) < 1e-6);
        assert!(origin.direction.distance(toward(0.3) * -1.0) < 1e-6);

        let point = engine
            .binding_output(handles.point_label)
            .and_then(|g| g.as_anchor())
            .unwrap();
        assert!(point.position.distance(toward(0.6) * 3.0) < 1e-6);
        assert!(point.direction.distance(toward(0.6 + FRAC_PI_2)) < 1e-6);

        let foot = engine
            .binding_output(handles.foot_label)
            .and_then(|g| g.as_anchor())
            .unwrap();
        assert!((foot.position.x - 3.0 * 0.6_f32.cos()).abs() < 1e-6);
        assert_eq!(foot.direction, Point::new(0.0, -1.0, 0.0));
    }

    #[test]
    fn foot_label_flips_above_for_negative_angles() {
        let (engine, handles) = installed(-0.4, 1.0);
        let foot = engine
            .binding_output(handles.foot_label)
            .and_then(|g| g.as_anchor())
            .unwrap();
        assert_eq!(foot.direction, Point::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn negative_angle_drops_below_the_axis() {
        let (engine, handles) = installed(-0.4, 1.0);
        let p = engine
            .binding_output(handles.tangent_point)
            .and_then(|g| g.as_point())
            .unwrap();
        assert!(p.y < 0.0);
        assert!((p.y - (-0.4_f32).tan()).abs() < 1e-5);
    }
}
