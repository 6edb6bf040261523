//! Easing functions for interpolations

/// Easing function applied to an interpolation's normalized progress.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    #[default]
    Linear,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    /// Quintic smoothstep, zero velocity and acceleration at both ends.
    /// The default rate of hand-authored scene playback.
    Smooth,
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Apply the easing curve to a progress value. Input is clamped to
    /// the 0.0..=1.0 domain; output maps 0.0 to 0.0 and 1.0 to 1.0.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::EaseInQuad => t * t,
            Easing::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::EaseInCubic => t * t * t,
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::Smooth => t * t * t * (10.0 - 15.0 * t + 6.0 * t * t),
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier_ease(t, x1, y1, x2, y2),
        }
    }

    /// Resolve an easing curve from its external name.
    pub fn from_name(name: &str) -> Option<Easing> {
        match name {
            "linear" => Some(Easing::Linear),
            "ease_in_quad" => Some(Easing::EaseInQuad),
            "ease_out_quad" => Some(Easing::EaseOutQuad),
            "ease_in_out_quad" => Some(Easing::EaseInOutQuad),
            "ease_in_cubic" => Some(Easing::EaseInCubic),
            "ease_out_cubic" => Some(Easing::EaseOutCubic),
            "ease_in_out_cubic" => Some(Easing::EaseInOutCubic),
            "smooth" => Some(Easing::Smooth),
            _ => None,
        }
    }
}

/// CSS-style cubic bezier easing.
///
/// Solves bezier_x(p) == t for the curve parameter with Newton-Raphson,
/// falling back to bisection when the slope is too flat. f64 internally
/// to keep per-frame output stable.
fn cubic_bezier_ease(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let x = t as f64;
    let (x1, y1, x2, y2) = (x1 as f64, y1 as f64, x2 as f64, y2 as f64);

    let mut p = x;
    for _ in 0..8 {
        let err = bezier_axis(p, x1, x2) - x;
        if err.abs() < 1e-7 {
            return bezier_axis(p, y1, y2) as f32;
        }
        let slope = bezier_axis_slope(p, x1, x2);
        if slope.abs() < 1e-7 {
            break;
        }
        p -= err / slope;
    }

    let mut lo = 0.0_f64;
    let mut hi = 1.0_f64;
    p = x;
    for _ in 0..20 {
        let val = bezier_axis(p, x1, x2);
        if (val - x).abs() < 1e-7 {
            break;
        }
        if val < x {
            lo = p;
        } else {
            hi = p;
        }
        p = (lo + hi) * 0.5;
    }

    bezier_axis(p, y1, y2) as f32
}

/// One axis of the cubic bezier with implicit endpoints 0 and 1, in
/// Horner form.
#[inline]
fn bezier_axis(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    ((a * t + b) * t + c) * t
}

#[inline]
fn bezier_axis_slope(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    (3.0 * a * t + 2.0 * b) * t + c
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: [Easing; 9] = [
        Easing::Linear,
        Easing::EaseInQuad,
        Easing::EaseOutQuad,
        Easing::EaseInOutQuad,
        Easing::EaseInCubic,
        Easing::EaseOutCubic,
        Easing::EaseInOutCubic,
        Easing::Smooth,
        Easing::CubicBezier(0.25, 0.1, 0.25, 1.0),
    ];

    #[test]
    fn endpoints_are_exact() {
        for curve in CURVES {
            assert_eq!(curve.apply(0.0), 0.0, "{curve:?} at 0");
            assert!((curve.apply(1.0) - 1.0).abs() < 1e-6, "{curve:?} at 1");
        }
    }

    #[test]
    fn curves_are_monotonic() {
        for curve in CURVES {
            let mut prev = 0.0;
            for i in 1..=100 {
                let v = curve.apply(i as f32 / 100.0);
                assert!(v >= prev - 1e-6, "{curve:?} decreased at step {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn out_of_domain_input_is_clamped() {
        assert_eq!(Easing::Smooth.apply(-0.5), 0.0);
        assert_eq!(Easing::Smooth.apply(1.5), 1.0);
    }

    #[test]
    fn smooth_is_symmetric_about_midpoint() {
        assert!((Easing::Smooth.apply(0.5) - 0.5).abs() < 1e-6);
        for i in 0..=50 {
            let t = i as f32 / 100.0;
            let a = Easing::Smooth.apply(t);
            let b = Easing::Smooth.apply(1.0 - t);
            assert!((a + b - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn linear_bezier_matches_linear() {
        let bezier = Easing::CubicBezier(0.25, 0.25, 0.75, 0.75);
        for i in 0..=20 {
            let t = i as f32 / 20.0;
            assert!((bezier.apply(t) - t).abs() < 1e-4);
        }
    }

    #[test]
    fn resolves_names() {
        assert_eq!(Easing::from_name("linear"), Some(Easing::Linear));
        assert_eq!(Easing::from_name("smooth"), Some(Easing::Smooth));
        assert_eq!(Easing::from_name("bounce"), None);
    }
}
