//! Radian Core Runtime
//!
//! A reactive geometric binding engine for frame-driven animation
//! scenes. A scene owns a handful of named scalar parameters (an angle,
//! a radius); derived bindings are pure functions from those parameters
//! (and from other bindings) to geometry — points, segments, arcs,
//! label anchors — pushed into host-owned drawables every frame.
//!
//! - **Tracked parameters**: named scalars, set directly or driven by a
//!   timed, eased interpolation (one in-flight transition per parameter)
//! - **Derived bindings**: explicit input lists instead of state-capturing
//!   closures, giving cycle detection and a deterministic recompute order
//! - **Frame driven**: a single [`BindingEngine::advance`] call per frame,
//!   synchronous and deterministic
//!
//! # Example
//!
//! ```rust
//! use radian_core::{BindingEngine, Easing, NullDrawable, Point};
//!
//! let mut engine = BindingEngine::new();
//!
//! let theta = engine.register_parameter("theta", 0.0).unwrap();
//! let radius = engine.register_parameter("radius", 3.0).unwrap();
//!
//! // A point moving on a circle of tracked radius.
//! let point = engine
//!     .register_binding(
//!         [theta.into(), radius.into()],
//!         Box::new(|inputs| {
//!             let theta = inputs[0].scalar().unwrap_or(0.0);
//!             let r = inputs[1].scalar().unwrap_or(0.0);
//!             Point::new(r * theta.cos(), r * theta.sin(), 0.0).into()
//!         }),
//!         Box::new(NullDrawable),
//!     )
//!     .unwrap();
//!
//! // Sweep a quarter turn over one second of frames.
//! engine
//!     .animate_parameter(theta, std::f32::consts::FRAC_PI_2, 1.0, Easing::Linear)
//!     .unwrap();
//! for _ in 0..60 {
//!     engine.advance(1.0 / 60.0);
//! }
//!
//! let top = engine.binding_output(point).and_then(|g| g.as_point()).unwrap();
//! assert!((top.y - 3.0).abs() < 1e-4);
//! ```

pub mod drawable;
pub mod easing;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod interp;

pub use drawable::{ConsoleDrawable, Drawable, NullDrawable, RecordingDrawable};
pub use easing::Easing;
pub use engine::{BindingEngine, BindingId, BindingInput, ComputeFn, InterpolationId, ParameterId};
pub use error::{BindingError, Result};
pub use geometry::{Anchor, Arc, GeometricValue, InputValue, Point, Scalar, Segment};
pub use interp::Interpolation;
