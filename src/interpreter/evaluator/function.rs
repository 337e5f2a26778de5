/// Built-in function implementations.
///
/// Contains the mathematical functions installed by
/// [`crate::Environment::with_builtins`].
pub mod builtin;

/// Function values: argument count checking and calling.
pub mod core;
