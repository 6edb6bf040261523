//! Engine error types

use thiserror::Error;

/// Errors surfaced by [`BindingEngine`](crate::engine::BindingEngine)
/// operations. Every error is local to the offending call; the engine
/// stays usable afterwards.
#[derive(Error, Debug)]
pub enum BindingError {
    /// A parameter with this name is already registered
    #[error("parameter name already registered: {0}")]
    DuplicateName(String),

    /// Interpolation durations must be strictly positive
    #[error("interpolation duration must be positive, got {0}")]
    InvalidDuration(f32),

    /// The requested binding definition would make the binding graph cyclic
    #[error("binding dependencies form a cycle")]
    CyclicDependency,

    /// Parameter handle does not refer to a registered parameter
    #[error("unknown parameter handle")]
    UnknownParameter,

    /// Binding handle does not refer to a declared binding
    #[error("unknown binding handle")]
    UnknownBinding,

    /// Interpolation handle does not refer to an in-flight interpolation
    #[error("unknown interpolation handle")]
    UnknownInterpolation,

    /// The binding already has a definition
    #[error("binding is already defined")]
    AlreadyDefined,
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, BindingError>;
