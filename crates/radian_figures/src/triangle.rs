//! Right-triangle figure
//!
//! The triangle the scenes open with: horizontal leg `r·cos θ`, vertical
//! leg up to the hypotenuse tip at `r·toward(θ)`, plus label anchors for
//! all three sides, the angle arc, and the right-angle indicator at the
//! perpendicular foot. The label anchors and the indicator flip to the
//! outside of the triangle as theta moves through the quadrants,
//! reproducing the original side rules.
//!
//! The triangle's vertex is not fixed: it is driven by a pair of center
//! parameters, so the whole figure can be animated across the scene
//! (the plane-placement move) with the same interpolations that drive
//! theta and radius.

use radian_core::{
    Anchor, Arc, BindingEngine, BindingId, Drawable, InputValue, ParameterId, Point, Result,
    Scalar, Segment,
};
use std::f32::consts::{FRAC_PI_2, PI};
use tracing::debug;

use crate::angles::{toward, wrap_signed};

const UP: Point = Point::new(0.0, 1.0, 0.0);
const DOWN: Point = Point::new(0.0, -1.0, 0.0);
const LEFT: Point = Point::new(-1.0, 0.0, 0.0);
const RIGHT: Point = Point::new(1.0, 0.0, 0.0);

/// Static layout of a [`RightTriangleFigure`]. The vertex position is
/// not part of the config; it comes from the center parameters passed
/// to [`RightTriangleFigure::install`].
#[derive(Clone, Copy, Debug)]
pub struct RightTriangleConfig {
    /// Display radius of the angle arc
    pub arc_radius: Scalar,
    /// Upper bound on the right-angle indicator's side length
    pub indicator_max: Scalar,
}

impl Default for RightTriangleConfig {
    fn default() -> Self {
        Self {
            arc_radius: 0.5,
            indicator_max: 0.7,
        }
    }
}

pub struct RightTriangleDrawables {
    pub width: Box<dyn Drawable>,
    pub height: Box<dyn Drawable>,
    pub hypotenuse: Box<dyn Drawable>,
    pub width_label: Box<dyn Drawable>,
    pub height_label: Box<dyn Drawable>,
    pub hypotenuse_label: Box<dyn Drawable>,
    pub angle_arc: Box<dyn Drawable>,
    pub angle_label: Box<dyn Drawable>,
    /// Horizontal stroke of the right-angle indicator at the foot
    pub right_indicator_hor: Box<dyn Drawable>,
    /// Vertical stroke of the right-angle indicator at the foot
    pub right_indicator_vert: Box<dyn Drawable>,
}

pub struct RightTriangleHandles {
    pub width: BindingId,
    pub height: BindingId,
    pub hypotenuse: BindingId,
    pub width_label: BindingId,
    pub height_label: BindingId,
    pub hypotenuse_label: BindingId,
    pub angle_arc: BindingId,
    pub angle_label: BindingId,
    pub right_indicator_hor: BindingId,
    pub right_indicator_vert: BindingId,
}

/// Side length of the right-angle indicator: a tenth of the shorter
/// leg, clamped.
fn indicator_len(r: Scalar, angle: Scalar, max: Scalar) -> Scalar {
    (r * Scalar::min(angle.sin().abs(), angle.cos().abs()) / 10.0).min(max)
}

/// Resolve the two leading center inputs into the vertex point.
fn center_of(inputs: &[InputValue]) -> Point {
    Point::new(
        inputs[0].scalar().unwrap_or(0.0),
        inputs[1].scalar().unwrap_or(0.0),
        0.0,
    )
}

pub struct RightTriangleFigure {
    config: RightTriangleConfig,
}

impl RightTriangleFigure {
    pub fn new(config: RightTriangleConfig) -> Self {
        Self { config }
    }

    /// Register the figure's bindings, driven by a theta and a radius
    /// parameter plus a center parameter pair for the vertex. The side
    /// labels hang off the side bindings rather than recomputing the
    /// sides, so a label can never disagree with the segment it
    /// annotates within a frame.
    pub fn install(
        &self,
        engine: &mut BindingEngine,
        theta: ParameterId,
        radius: ParameterId,
        center_x: ParameterId,
        center_y: ParameterId,
        drawables: RightTriangleDrawables,
    ) -> Result<RightTriangleHandles> {
        let arc_radius = self.config.arc_radius;
        let indicator_max = self.config.indicator_max;

        let width = engine.register_binding(
            [center_x.into(), center_y.into(), theta.into(), radius.into()],
            Box::new(move |inputs| {
                let center = center_of(inputs);
                let angle = inputs[2].scalar().unwrap_or(0.0);
                let r = inputs[3].scalar().unwrap_or(0.0);
                Segment::new(center, center + RIGHT * (r * angle.cos())).into()
            }),
            drawables.width,
        )?;

        let height = engine.register_binding(
            [center_x.into(), center_y.into(), theta.into(), radius.into()],
            Box::new(move |inputs| {
                let center = center_of(inputs);
                let angle = inputs[2].scalar().unwrap_or(0.0);
                let r = inputs[3].scalar().unwrap_or(0.0);
                let tip = center + toward(angle) * r;
                let foot = center + RIGHT * (r * angle.cos());
                Segment::new(tip, foot).into()
            }),
            drawables.height,
        )?;

        let hypotenuse = engine.register_binding(
            [center_x.into(), center_y.into(), theta.into(), radius.into()],
            Box::new(move |inputs| {
                let center = center_of(inputs);
                let angle = inputs[2].scalar().unwrap_or(0.0);
                let r = inputs[3].scalar().unwrap_or(0.0);
                Segment::new(center, center + toward(angle) * r).into()
            }),
            drawables.hypotenuse,
        )?;

        // Below the horizontal leg while it extends rightward, above it
        // otherwise.
        let width_label = engine.register_binding(
            [center_x.into(), width.into()],
            Box::new(move |inputs| {
                let cx = inputs[0].scalar().unwrap_or(0.0);
                let seg = inputs[1].segment().unwrap_or_default();
                let mid = seg.midpoint();
                let side = if mid.x - cx > 0.0 { DOWN } else { UP };
                Anchor::new(mid, side).into()
            }),
            drawables.width_label,
        )?;

        // Right of the vertical leg in the upper half-plane, left of it
        // in the lower.
        let height_label = engine.register_binding(
            [center_y.into(), height.into()],
            Box::new(move |inputs| {
                let cy = inputs[0].scalar().unwrap_or(0.0);
                let seg = inputs[1].segment().unwrap_or_default();
                let mid = seg.midpoint();
                let side = if mid.y - cy > 0.0 { RIGHT } else { LEFT };
                Anchor::new(mid, side).into()
            }),
            drawables.height_label,
        )?;

        // Normal to the hypotenuse, flipping at theta mod tau = pi
        // (signed wrap, so negative angles keep the +pi/2 side).
        let hypotenuse_label = engine.register_binding(
            [theta.into(), hypotenuse.into()],
            Box::new(move |inputs| {
                let angle = inputs[0].scalar().unwrap_or(0.0);
                let seg = inputs[1].segment().unwrap_or_default();
                let side = if wrap_signed(angle) < PI {
                    toward(angle + FRAC_PI_2)
                } else {
                    toward(angle - FRAC_PI_2)
                };
                Anchor::new(seg.midpoint(), side).into()
            }),
            drawables.hypotenuse_label,
        )?;

        let angle_arc = engine.register_binding(
            [center_x.into(), center_y.into(), theta.into()],
            Box::new(move |inputs| {
                let center = center_of(inputs);
                let angle = inputs[2].scalar().unwrap_or(0.0);
                Arc::new(center, arc_radius, 0.0, angle).into()
            }),
            drawables.angle_arc,
        )?;

        // On the arc's midpoint, pushed outward along the bisector.
        let angle_label = engine.register_binding(
            [theta.into(), angle_arc.into()],
            Box::new(move |inputs| {
                let angle = inputs[0].scalar().unwrap_or(0.0);
                let arc = inputs[1].arc().unwrap_or_default();
                Anchor::new(arc.point_at(0.5), toward(angle / 2.0)).into()
            }),
            drawables.angle_label,
        )?;

        // Two short strokes framing the right angle at the foot, on the
        // triangle's inside: vertically toward the hypotenuse tip,
        // horizontally back toward the vertex.
        let right_indicator_hor = engine.register_binding(
            [center_x.into(), center_y.into(), theta.into(), radius.into()],
            Box::new(move |inputs| {
                let center = center_of(inputs);
                let angle = inputs[2].scalar().unwrap_or(0.0);
                let r = inputs[3].scalar().unwrap_or(0.0);
                let len = indicator_len(r, angle, indicator_max);
                let vs = if angle.sin() > 0.0 { UP } else { DOWN };
                let hs = if angle.cos() > 0.0 { LEFT } else { RIGHT };
                let foot = center + RIGHT * (r * angle.cos());
                Segment::new(foot + vs * len, foot + (vs + hs) * len).into()
            }),
            drawables.right_indicator_hor,
        )?;

        let right_indicator_vert = engine.register_binding(
            [center_x.into(), center_y.into(), theta.into(), radius.into()],
            Box::new(move |inputs| {
                let center = center_of(inputs);
                let angle = inputs[2].scalar().unwrap_or(0.0);
                let r = inputs[3].scalar().unwrap_or(0.0);
                let len = indicator_len(r, angle, indicator_max);
                let vs = if angle.sin() > 0.0 { UP } else { DOWN };
                let hs = if angle.cos() > 0.0 { LEFT } else { RIGHT };
                let foot = center + RIGHT * (r * angle.cos());
                Segment::new(foot + hs * len, foot + (vs + hs) * len).into()
            }),
            drawables.right_indicator_vert,
        )?;

        debug!(arc_radius, indicator_max, "right triangle figure installed");

        Ok(RightTriangleHandles {
            width,
            height,
            hypotenuse,
            width_label,
            height_label,
            hypotenuse_label,
            angle_arc,
            angle_label,
            right_indicator_hor,
            right_indicator_vert,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use radian_core::{Easing, NullDrawable};
    use std::f32::consts::PI;

    fn null_drawables() -> RightTriangleDrawables {
        RightTriangleDrawables {
            width: Box::new(NullDrawable),
            height: Box::new(NullDrawable),
            hypotenuse: Box::new(NullDrawable),
            width_label: Box::new(NullDrawable),
            height_label: Box::new(NullDrawable),
            hypotenuse_label: Box::new(NullDrawable),
            angle_arc: Box::new(NullDrawable),
            angle_label: Box::new(NullDrawable),
            right_indicator_hor: Box::new(NullDrawable),
            right_indicator_vert: Box::new(NullDrawable),
        }
    }

    fn installed(theta0: f32, r0: f32, center: Point) -> (BindingEngine, RightTriangleHandles) {
        let mut engine = BindingEngine::new();
        let theta = engine.register_parameter("theta", theta0).unwrap();
        let radius = engine.register_parameter("radius", r0).unwrap();
        let center_x = engine.register_parameter("center_x", center.x).unwrap();
        let center_y = engine.register_parameter("center_y", center.y).unwrap();
        let handles = RightTriangleFigure::new(RightTriangleConfig::default())
            .install(&mut engine, theta, radius, center_x, center_y, null_drawables())
            .unwrap();
        engine.advance(0.0);
        (engine, handles)
    }

    fn segment(engine: &BindingEngine, id: BindingId) -> Segment {
        engine
            .binding_output(id)
            .and_then(|g| g.as_segment())
            .unwrap()
    }

    fn anchor(engine: &BindingEngine, id: BindingId) -> Anchor {
        engine
            .binding_output(id)
            .and_then(|g| g.as_anchor())
            .unwrap()
    }

    #[test]
    fn sides_close_into_a_triangle() {
        let center = Point::new(-1.0, -1.0, 0.0);
        let (engine, handles) = installed(PI / 3.0, 4.0, center);

        let width = segment(&engine, handles.width);
        let height = segment(&engine, handles.height);
        let hypo = segment(&engine, handles.hypotenuse);

        // width: center to (center.x + r cos, center.y)
        assert!(width.start.distance(center) < 1e-6);
        assert!((width.end.x - (center.x + 2.0)).abs() < 1e-5);
        // The three sides share their corners.
        assert!(hypo.end.distance(height.start) < 1e-6);
        assert!(height.end.distance(width.end) < 1e-6);
        // Pythagoras.
        let legs = width.length().powi(2) + height.length().powi(2);
        assert!((legs - hypo.length().powi(2)).abs() < 1e-3);
    }

    #[test]
    fn width_label_flips_with_the_leg_direction() {
        let (engine, handles) = installed(PI / 3.0, 4.0, Point::ZERO);
        assert_eq!(anchor(&engine, handles.width_label).direction, DOWN);

        // cos < 0: the leg extends leftward, the label moves above it.
        let (engine, handles) = installed(0.75 * PI, 4.0, Point::ZERO);
        assert_eq!(anchor(&engine, handles.width_label).direction, UP);
    }

    #[test]
    fn height_label_flips_across_the_axis() {
        let (engine, handles) = installed(PI / 4.0, 2.0, Point::ZERO);
        assert_eq!(anchor(&engine, handles.height_label).direction, RIGHT);

        let (engine, handles) = installed(-PI / 4.0, 2.0, Point::ZERO);
        assert_eq!(anchor(&engine, handles.height_label).direction, LEFT);
    }

    #[test]
    fn hypotenuse_label_normal_flips_past_half_turn() {
        let theta = PI / 3.0;
        let (engine, handles) = installed(theta, 4.0, Point::ZERO);
        let a = anchor(&engine, handles.hypotenuse_label);
        assert!(a.direction.distance(toward(theta + FRAC_PI_2)) < 1e-6);

        let theta = 1.25 * PI;
        let (engine, handles) = installed(theta, 4.0, Point::ZERO);
        let a = anchor(&engine, handles.hypotenuse_label);
        assert!(a.direction.distance(toward(theta - FRAC_PI_2)) < 1e-6);
    }

    #[test]
    fn angle_label_sits_on_the_bisector() {
        let theta = PI / 2.0;
        let (engine, handles) = installed(theta, 1.0, Point::ZERO);
        let a = anchor(&engine, handles.angle_label);
        // Arc midpoint at theta/2, scaled by the arc radius.
        assert!(a.position.distance(toward(theta / 2.0) * 0.5) < 1e-6);
        assert!(a.direction.distance(toward(theta / 2.0)) < 1e-6);
    }

    #[test]
    fn right_indicator_frames_the_foot() {
        let theta = 0.7_f32;
        let (engine, handles) = installed(theta, 4.0, Point::ZERO);

        let hor = segment(&engine, handles.right_indicator_hor);
        let vert = segment(&engine, handles.right_indicator_vert);

        let len = 4.0 * f32::min(theta.sin().abs(), theta.cos().abs()) / 10.0;
        let foot = Point::new(4.0 * theta.cos(), 0.0, 0.0);

        // First quadrant: up toward the tip, left back toward the vertex.
        assert!(hor.start.distance(foot + UP * len) < 1e-6);
        assert!(vert.start.distance(foot + LEFT * len) < 1e-6);
        // Both strokes meet at the inner corner of the square.
        assert!(hor.end.distance(vert.end) < 1e-6);
        assert!(hor.end.distance(foot + (UP + LEFT) * len) < 1e-6);
        assert!((hor.length() - len).abs() < 1e-6);
        assert!((vert.length() - len).abs() < 1e-6);
    }

    #[test]
    fn right_indicator_length_is_clamped() {
        let theta = 0.7_f32;
        let (engine, handles) = installed(theta, 40.0, Point::ZERO);
        let hor = segment(&engine, handles.right_indicator_hor);
        // r·min(|sin|,|cos|)/10 would exceed the cap here.
        assert!((hor.length() - 0.7).abs() < 1e-6);

        let (engine, handles) = installed(theta, 4.0, Point::ZERO);
        let hor = segment(&engine, handles.right_indicator_hor);
        assert!(hor.length() < 0.7);
    }

    #[test]
    fn right_indicator_flips_quadrants() {
        // Second quadrant: cos < 0, the horizontal stroke turns rightward.
        let (engine, handles) = installed(0.7 * PI, 4.0, Point::ZERO);
        let hor = segment(&engine, handles.right_indicator_hor);
        assert!(hor.end.x > hor.start.x);
        assert!(hor.start.y > 0.0);

        // Fourth quadrant: sin < 0, the vertical stroke turns downward.
        let (engine, handles) = installed(-PI / 3.0, 4.0, Point::ZERO);
        let vert = segment(&engine, handles.right_indicator_vert);
        assert!(vert.end.y < vert.start.y);
        assert!(vert.start.x < 4.0 * (PI / 3.0).cos());
    }

    #[test]
    fn center_animation_carries_the_whole_figure() {
        let start = Point::new(-1.0, -1.0, 0.0);
        let (mut engine, handles) = installed(0.7, 4.0, start);
        let center_x = engine.parameter_by_name("center_x").unwrap();
        let center_y = engine.parameter_by_name("center_y").unwrap();

        // The plane-placement move: slide the vertex to the origin.
        engine
            .animate_parameter(center_x, 0.0, 1.0, Easing::Linear)
            .unwrap();
        engine
            .animate_parameter(center_y, 0.0, 1.0, Easing::Linear)
            .unwrap();
        engine.advance(0.5);

        let mid = Point::new(-0.5, -0.5, 0.0);
        let width = segment(&engine, handles.width);
        assert!(width.start.distance(mid) < 1e-6);
        let hor = segment(&engine, handles.right_indicator_hor);
        let foot = mid + RIGHT * (4.0 * 0.7_f32.cos());
        let len = 4.0 * f32::min(0.7_f32.sin().abs(), 0.7_f32.cos().abs()) / 10.0;
        assert!(hor.start.distance(foot + UP * len) < 1e-6);

        engine.advance(0.5);
        let arc = engine
            .binding_output(handles.angle_arc)
            .and_then(|g| g.as_arc())
            .unwrap();
        assert!(arc.center.distance(Point::ZERO) < 1e-6);
    }
}
