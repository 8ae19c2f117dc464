/// Core evaluation loop and state.
///
/// Contains the value stack, the step trace, and the `evaluate` entry point.
pub mod core;

/// Unary operator evaluation.
///
/// Handles unary minus.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements `+`, `-`, `*`, `/` and `^`, including the division-by-zero and
/// real-domain checks.
pub mod binary;
