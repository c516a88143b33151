/// Operator scheduling: when to apply, when to push.
pub mod core;

/// Scalar arithmetic for the four operators.
pub mod scalar;
