//! Radian Figures
//!
//! Reusable trigonometric figures built on the binding engine: each
//! figure registers the derived bindings of one recurring construction
//! against a [`BindingEngine`](radian_core::BindingEngine), wired to a
//! shared theta and radius parameter.
//!
//! - **Unit circle**: moving point, perpendicular foot, connecting
//!   segments, angle arc
//! - **Right triangle**: legs, hypotenuse, side labels with quadrant
//!   flip rules, angle arc and label, right-angle indicator, movable
//!   center
//! - **Tangent construction**: ray, fixed tangent line, intersection at
//!   `(r, r·tan θ)`, label anchors for the named points
//! - **Sine tracer**: graph-plane mapping of `(θ, sin θ)` with drop and
//!   circle connector
//!
//! Figures decide their own angle wrap policy per binding; see
//! [`angles`].

pub mod angles;
pub mod circle;
pub mod sine;
pub mod tangent;
pub mod triangle;

pub use circle::{UnitCircleConfig, UnitCircleDrawables, UnitCircleFigure, UnitCircleHandles};
pub use sine::{
    GraphPlane, SineTracerConfig, SineTracerDrawables, SineTracerFigure, SineTracerHandles,
};
pub use tangent::{TangentConfig, TangentDrawables, TangentFigure, TangentHandles};
pub use triangle::{
    RightTriangleConfig, RightTriangleDrawables, RightTriangleFigure, RightTriangleHandles,
};
