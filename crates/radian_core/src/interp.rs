//! Timed parameter interpolations

use crate::easing::Easing;
use crate::engine::ParameterId;
use crate::geometry::Scalar;

/// A time-bounded transition of one tracked parameter from the value it
/// held when the transition started to a target value.
#[derive(Clone, Copy, Debug)]
pub struct Interpolation {
    target: ParameterId,
    start: Scalar,
    end: Scalar,
    duration: Scalar,
    elapsed: Scalar,
    easing: Easing,
}

impl Interpolation {
    pub(crate) fn new(
        target: ParameterId,
        start: Scalar,
        end: Scalar,
        duration: Scalar,
        easing: Easing,
    ) -> Self {
        Self {
            target,
            start,
            end,
            duration,
            elapsed: 0.0,
            easing,
        }
    }

    /// The parameter this interpolation drives.
    pub fn target(&self) -> ParameterId {
        self.target
    }

    /// Normalized progress, clamped to 0.0..=1.0.
    pub fn progress(&self) -> Scalar {
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Current eased value. Snaps to the exact end value once the
    /// duration has elapsed.
    pub fn sample(&self) -> Scalar {
        if self.elapsed >= self.duration {
            return self.end;
        }
        self.start + (self.end - self.start) * self.easing.apply(self.progress())
    }

    /// Advance by a frame delta. Returns true once the transition has
    /// reached its end and should be retired.
    pub(crate) fn tick(&mut self, dt: Scalar) -> bool {
        self.elapsed += dt;
        self.elapsed >= self.duration
    }
}
