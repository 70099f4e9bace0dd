/// Binary operator evaluation logic.
///
/// Implements `+`, `-`, `*`, `/` and `^` on two operands, including the
/// division-by-zero check.
pub mod binary;

/// Core evaluation loop.
///
/// Replays a postfix sequence against the current bindings with a value
/// stack and checks that exactly one value remains.
pub mod core;

/// Unary operator evaluation logic.
///
/// Implements negation and the `abs` operator produced by `|...|`.
pub mod unary;
