use thiserror::Error;

/// Failures surfaced by the physics core. None are recovered internally;
/// every one propagates to the caller of the operation that raised it and
/// aborts the current tick.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PhysicsError {
    #[error("division by zero")]
    DivisionByZero,

    /// Normalizing a zero-magnitude vector. Also raised when two bodies sit
    /// at exactly the same position during a gravity pass.
    #[error("cannot normalize a zero-magnitude vector")]
    DegenerateVector,

    #[error("vector component index {index} out of range, expected 0..3")]
    IndexOutOfRange { index: usize },

    /// Display size is log-of-mass, which is undefined for mass <= 0.
    #[error("mass must be positive, got {mass}")]
    InvalidMass { mass: f64 },
}
