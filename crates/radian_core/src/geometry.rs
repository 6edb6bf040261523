//! Geometric value types
//!
//! The outputs a derived binding can produce and push into a drawable:
//! points, segments, arcs, and label anchors. Points carry three
//! coordinates; 2D figures leave `z` at zero.

use std::ops::{Add, Mul, Sub};

/// Scalar type used for parameter values and coordinates.
pub type Scalar = f32;

/// A point in 3-space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: Scalar,
    pub y: Scalar,
    pub z: Scalar,
}

impl Point {
    pub const ZERO: Point = Point {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: Scalar, y: Scalar, z: Scalar) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: Point) -> Scalar {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    pub fn length(&self) -> Scalar {
        self.distance(Point::ZERO)
    }

    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len > 0.0 {
            Self::new(self.x / len, self.y / len, self.z / len)
        } else {
            Self::ZERO
        }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<Scalar> for Point {
    type Output = Point;

    fn mul(self, rhs: Scalar) -> Point {
        Point::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// A line segment between two points.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn midpoint(&self) -> Point {
        (self.start + self.end) * 0.5
    }

    pub fn length(&self) -> Scalar {
        self.start.distance(self.end)
    }
}

/// A circular arc spanning `start_angle..end_angle` (radians, CCW).
///
/// Angles are taken as given; the arc does not wrap or normalize them,
/// so a sweep past a full turn is representable.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Arc {
    pub center: Point,
    pub radius: Scalar,
    pub start_angle: Scalar,
    pub end_angle: Scalar,
}

impl Arc {
    pub const fn new(center: Point, radius: Scalar, start_angle: Scalar, end_angle: Scalar) -> Self {
        Self {
            center,
            radius,
            start_angle,
            end_angle,
        }
    }

    /// Signed angular sweep of the arc.
    pub fn sweep(&self) -> Scalar {
        self.end_angle - self.start_angle
    }

    /// Point at a proportion of the sweep, 0.0 at `start_angle`, 1.0 at
    /// `end_angle`.
    pub fn point_at(&self, proportion: Scalar) -> Point {
        let angle = self.start_angle + self.sweep() * proportion;
        self.center + Point::new(angle.cos(), angle.sin(), 0.0) * self.radius
    }
}

/// A placement anchor for a label: a position plus the unit direction the
/// label should be offset toward.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Anchor {
    pub position: Point,
    pub direction: Point,
}

impl Anchor {
    pub const fn new(position: Point, direction: Point) -> Self {
        Self {
            position,
            direction,
        }
    }
}

/// Output of a derived binding.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GeometricValue {
    Point(Point),
    Segment(Segment),
    Arc(Arc),
    Anchor(Anchor),
}

impl GeometricValue {
    pub fn as_point(&self) -> Option<Point> {
        match self {
            GeometricValue::Point(p) => Some(*p),
            _ => None,
        }
    }

    pub fn as_segment(&self) -> Option<Segment> {
        match self {
            GeometricValue::Segment(s) => Some(*s),
            _ => None,
        }
    }

    pub fn as_arc(&self) -> Option<Arc> {
        match self {
            GeometricValue::Arc(a) => Some(*a),
            _ => None,
        }
    }

    pub fn as_anchor(&self) -> Option<Anchor> {
        match self {
            GeometricValue::Anchor(a) => Some(*a),
            _ => None,
        }
    }
}

impl From<Point> for GeometricValue {
    fn from(p: Point) -> Self {
        GeometricValue::Point(p)
    }
}

impl From<Segment> for GeometricValue {
    fn from(s: Segment) -> Self {
        GeometricValue::Segment(s)
    }
}

impl From<Arc> for GeometricValue {
    fn from(a: Arc) -> Self {
        GeometricValue::Arc(a)
    }
}

impl From<Anchor> for GeometricValue {
    fn from(a: Anchor) -> Self {
        GeometricValue::Anchor(a)
    }
}

/// Resolved value of one declared binding input, in declaration order:
/// the current value of a tracked parameter, or the output another binding
/// produced earlier in the same recompute pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputValue {
    Scalar(Scalar),
    Geometry(GeometricValue),
}

impl InputValue {
    pub fn scalar(&self) -> Option<Scalar> {
        match self {
            InputValue::Scalar(v) => Some(*v),
            _ => None,
        }
    }

    pub fn geometry(&self) -> Option<GeometricValue> {
        match self {
            InputValue::Geometry(g) => Some(*g),
            _ => None,
        }
    }

    pub fn point(&self) -> Option<Point> {
        self.geometry().and_then(|g| g.as_point())
    }

    pub fn segment(&self) -> Option<Segment> {
        self.geometry().and_then(|g| g.as_segment())
    }

    pub fn arc(&self) -> Option<Arc> {
        self.geometry().and_then(|g| g.as_arc())
    }
}
