//! Angle helpers
//!
//! The engine never normalizes angles; each binding picks its own wrap
//! policy. The two policies the figures use differ on negative input:
//! [`wrap_tau`] lands in `[0, τ)`, [`wrap_signed`] keeps the sign of its
//! input (`(-τ, τ)`). A tangent construction must stay unwrapped
//! entirely, so it uses neither.

use radian_core::{Point, Scalar};

pub const TAU: Scalar = std::f32::consts::TAU;

/// Unit vector toward the given angle, in the z = 0 plane.
pub fn toward(angle: Scalar) -> Point {
    Point::new(angle.cos(), angle.sin(), 0.0)
}

/// Wrap into `[0, τ)`.
pub fn wrap_tau(angle: Scalar) -> Scalar {
    angle.rem_euclid(TAU)
}

/// Wrap into `(-τ, τ)`, keeping the sign of the input.
pub fn wrap_signed(angle: Scalar) -> Scalar {
    angle % TAU
}
