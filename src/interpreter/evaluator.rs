/// Binary operator application.
///
/// Implements the arithmetic of every infix operator on scalars and the
/// broadcasting rules that lift it to vectors.
pub mod binary;

/// Unary operator application.
///
/// Implements prefix `+` and `-` on scalars and vectors.
pub mod unary;

/// The operator-precedence evaluation loop.
///
/// Holds the operator and value stacks, the pushback buffer and the frames
/// for parenthesized groups, argument lists and vector literals.
pub mod core;

/// Function values and the builtin function library.
///
/// Handles argument count checking, elementwise lifting of scalar functions
/// and the functions installed by [`crate::Environment::with_builtins`].
pub mod function;
