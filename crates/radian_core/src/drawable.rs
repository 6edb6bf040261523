//! Drawable seam
//!
//! The engine never renders anything itself. Each binding pushes its
//! recomputed [`GeometricValue`] into a [`Drawable`], the handle a host
//! rendering engine hands to the scene. The implementations here cover
//! headless use: discarding output, recording it for assertions, and
//! logging it through `tracing`.

use std::cell::RefCell;
use std::rc::Rc;

use crate::geometry::GeometricValue;

/// A renderable object owned by the host rendering engine.
pub trait Drawable {
    /// Replace the displayed geometry with a freshly computed value.
    fn set_geometry(&mut self, value: GeometricValue);
}

/// Discards every update. Useful when only a binding's output value is of
/// interest, read back through the engine.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullDrawable;

impl Drawable for NullDrawable {
    fn set_geometry(&mut self, _value: GeometricValue) {}
}

/// Records every pushed value, sharing the recording with clones of
/// itself. Tests hand one clone to the engine and keep another to assert
/// on what would have been drawn.
#[derive(Clone, Debug, Default)]
pub struct RecordingDrawable {
    frames: Rc<RefCell<Vec<GeometricValue>>>,
}

impl RecordingDrawable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently pushed value, if any update happened yet.
    pub fn latest(&self) -> Option<GeometricValue> {
        self.frames.borrow().last().copied()
    }

    /// Every value pushed so far, in push order.
    pub fn frames(&self) -> Vec<GeometricValue> {
        self.frames.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.frames.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.borrow().is_empty()
    }
}

impl Drawable for RecordingDrawable {
    fn set_geometry(&mut self, value: GeometricValue) {
        self.frames.borrow_mut().push(value);
    }
}

/// Logs each update at debug level under a fixed label. The headless
/// demos use this as their "renderer".
#[derive(Clone, Debug)]
pub struct ConsoleDrawable {
    label: String,
}

impl ConsoleDrawable {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl Drawable for ConsoleDrawable {
    fn set_geometry(&mut self, value: GeometricValue) {
        tracing::debug!(label = %self.label, ?value, "geometry updated");
    }
}
