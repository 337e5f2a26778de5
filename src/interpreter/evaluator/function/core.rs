use std::sync::Arc;

use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

/// Signature of a function working on individual numbers.
type ScalarFn = dyn Fn(&[f64]) -> f64 + Send + Sync;

/// Signature of a function working on whole values.
///
/// An `Err` message is reported as [`EvalError::InvalidArgument`].
type NativeFn = dyn Fn(&[Value]) -> Result<Value, String> + Send + Sync;

/// Specifies the allowed number of arguments for a function.
///
/// - `Exact(n)` means the function must receive exactly `n` arguments.
/// - `AtLeast(n)` means the function accepts `n` or more arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many arguments.
    Exact(usize),
    /// This many arguments or more.
    AtLeast(usize),
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    #[must_use]
    pub const fn check(self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == m,
            Self::AtLeast(m) => n >= m,
        }
    }
}

impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{n}"),
            Self::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

#[derive(Clone)]
enum Body {
    Scalar(Arc<ScalarFn>),
    Native(Arc<NativeFn>),
}

/// A callable entry of an [`crate::Environment`].
///
/// Cloning is cheap; the implementation is shared.
///
/// # Example
/// ```
/// use shunt::{Arity, Environment, Function, Value, evaluate};
///
/// let f = Function::scalar(Arity::Exact(3), |a| a[0] * a[1] + a[1] * a[2] + a[2] * a[0]);
/// let env = Environment::new().with_function("f", f)
///                             .with_variable("x", 1.0)
///                             .with_variable("y", 2.0)
///                             .with_variable("z", 3.0);
///
/// assert_eq!(evaluate("f(x, y, z) = f(z, x, y)", &env).unwrap(),
///            Value::Scalar(1.0));
/// ```
#[derive(Clone)]
pub struct Function {
    arity: Arity,
    body:  Body,
}

impl Function {
    /// Creates a function on plain numbers.
    ///
    /// Vector arguments are handled by calling `f` once per element, with
    /// scalar arguments repeated; see [`Evaluator::broadcast`].
    pub fn scalar<F>(arity: Arity, f: F) -> Self
        where F: Fn(&[f64]) -> f64 + Send + Sync + 'static
    {
        Self { arity,
               body: Body::Scalar(Arc::new(f)) }
    }

    /// Creates a function that sees its arguments as whole values.
    pub fn native<F>(arity: Arity, f: F) -> Self
        where F: Fn(&[Value]) -> Result<Value, String> + Send + Sync + 'static
    {
        Self { arity,
               body: Body::Native(Arc::new(f)) }
    }

    /// Shorthand for a one-argument scalar function such as `f64::sqrt`.
    pub fn unary<F>(f: F) -> Self
        where F: Fn(f64) -> f64 + Send + Sync + 'static
    {
        Self::scalar(Arity::Exact(1), move |x| f(x[0]))
    }

    /// Shorthand for a two-argument scalar function such as `f64::atan2`.
    pub fn binary<F>(f: F) -> Self
        where F: Fn(f64, f64) -> f64 + Send + Sync + 'static
    {
        Self::scalar(Arity::Exact(2), move |x| f(x[0], x[1]))
    }

    /// The accepted argument count.
    #[must_use]
    pub const fn arity(&self) -> Arity {
        self.arity
    }

    /// Calls the function after checking the argument count.
    ///
    /// # Parameters
    /// - `name`: Name the function was called by.
    /// - `args`: Evaluated arguments.
    /// - `offset`: Source offset of the call for error reporting.
    ///
    /// # Errors
    /// - `ArityMismatch` if `args` does not satisfy the arity.
    /// - `ShapeMismatch` if a scalar function receives vectors of different
    ///   lengths.
    /// - `InvalidArgument` if a native function rejects its arguments.
    pub fn call(&self, name: &str, args: &[Value], offset: usize) -> EvalResult<Value> {
        if !self.arity.check(args.len()) {
            return Err(EvalError::ArityMismatch { name: name.to_string(),
                                                  expected: self.arity.to_string(),
                                                  found: args.len(),
                                                  offset });
        }

        match &self.body {
            Body::Scalar(f) => Evaluator::broadcast(name, args, offset, &**f),
            Body::Native(f) => f(args).map_err(|details| EvalError::InvalidArgument { name: name.to_string(),
                                                                                      details,
                                                                                      offset }),
        }
    }
}

impl std::fmt::Debug for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self.body {
            Body::Scalar(_) => "scalar",
            Body::Native(_) => "native",
        };
        f.debug_struct("Function")
         .field("arity", &self.arity)
         .field("kind", &kind)
         .finish()
    }
}
