/// Operator dispatch for binary operations.
pub mod core;

/// Arithmetic on two scalars.
///
/// Defines the fixed per-operator function `f(x, y)` that every broadcast
/// ultimately applies.
pub mod scalar;

/// Elementwise evaluation over vectors.
///
/// Broadcasting rules shared by binary operators and lifted scalar functions:
/// scalars spread over vectors, vectors of equal length combine elementwise,
/// and vectors of different lengths are rejected.
pub mod vector;
