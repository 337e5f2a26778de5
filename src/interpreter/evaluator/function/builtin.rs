use std::collections::HashMap;

use crate::interpreter::{
    evaluator::function::core::{Arity, Function},
    value::core::Value,
};

/// Defines builtin functions by generating a constructor and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - the [`Function`] constructor (`scalar` or `native`) to wrap the body with,
/// - the body itself.
///
/// The macro produces:
/// - `BUILTIN_FUNCTIONS` (public list of builtin names),
/// - `builtins()` (the name to function map).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                kind: $kind:ident,
                body: $body:expr $(,)?
            }
        ),* $(,)?
    ) => {
        /// Names of every builtin function, in definition order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];

        /// Builds the builtin function map.
        ///
        /// # Example
        /// ```
        /// use shunt::interpreter::evaluator::function::builtin::{BUILTIN_FUNCTIONS, builtins};
        ///
        /// let table = builtins();
        /// assert_eq!(table.len(), BUILTIN_FUNCTIONS.len());
        /// assert!(table.contains_key("atan2"));
        /// ```
        #[must_use]
        pub fn builtins() -> HashMap<String, Function> {
            HashMap::from([
                $(
                    ($name.to_string(), Function::$kind($arity, $body)),
                )*
            ])
        }
    };
}

builtin_functions! {
    "abs"   => { arity: Arity::Exact(1), kind: scalar, body: |x: &[f64]| x[0].abs() },
    "exp"   => { arity: Arity::Exact(1), kind: scalar, body: |x: &[f64]| x[0].exp() },
    "ln"    => { arity: Arity::Exact(1), kind: scalar, body: |x: &[f64]| x[0].ln() },
    "sqrt"  => { arity: Arity::Exact(1), kind: scalar, body: |x: &[f64]| x[0].sqrt() },
    "sin"   => { arity: Arity::Exact(1), kind: scalar, body: |x: &[f64]| x[0].sin() },
    "cos"   => { arity: Arity::Exact(1), kind: scalar, body: |x: &[f64]| x[0].cos() },
    "tan"   => { arity: Arity::Exact(1), kind: scalar, body: |x: &[f64]| x[0].tan() },
    "atan"  => { arity: Arity::Exact(1), kind: scalar, body: |x: &[f64]| x[0].atan() },
    "atan2" => { arity: Arity::Exact(2), kind: scalar, body: |x: &[f64]| x[0].atan2(x[1]) },
    "min"   => { arity: Arity::AtLeast(1), kind: native, body: |args: &[Value]| Ok(fold(args, f64::min)) },
    "max"   => { arity: Arity::AtLeast(1), kind: native, body: |args: &[Value]| Ok(fold(args, f64::max)) },
    "dot"   => { arity: Arity::Exact(2), kind: native, body: dot },
    "len"   => { arity: Arity::Exact(1), kind: native, body: len },
}

/// Reduces every element of every argument to a single scalar.
///
/// Vector arguments contribute all of their elements, so `max([1, 5], 3)` is
/// `5`.
fn fold(args: &[Value], f: fn(f64, f64) -> f64) -> Value {
    let mut elements = args.iter().flat_map(Value::elements).copied();
    let first = elements.next().unwrap_or(f64::NAN);
    Value::Scalar(elements.fold(first, f))
}

/// Computes the inner product of two vectors of equal length.
///
/// # Example
/// ```
/// use shunt::{Environment, Value, evaluate};
///
/// let env = Environment::new().with_builtins();
/// assert_eq!(evaluate("dot([1, 2, 3], [4, 5, 6])", &env).unwrap(),
///            Value::Scalar(32.0));
/// assert!(evaluate("dot([1, 2], 3)", &env).is_err());
/// ```
fn dot(args: &[Value]) -> Result<Value, String> {
    let (Some(a), Some(b)) = (args[0].as_vector(), args[1].as_vector()) else {
        return Err("both arguments must be vectors".to_string());
    };
    if a.len() != b.len() {
        return Err(format!("vectors have lengths {} and {}", a.len(), b.len()));
    }

    Ok(Value::Scalar(a.iter().zip(b).map(|(x, y)| x * y).sum()))
}

/// Returns the number of elements; a scalar counts as one.
#[allow(clippy::unnecessary_wraps, clippy::cast_precision_loss)]
fn len(args: &[Value]) -> Result<Value, String> {
    Ok(Value::Scalar(args[0].elements().len() as f64))
}
