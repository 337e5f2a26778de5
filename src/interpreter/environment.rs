use std::collections::{HashMap, HashSet};

use crate::interpreter::{
    evaluator::function::{builtin::builtins, core::Function},
    value::core::Value,
};

/// Default threshold below which `=` treats two numbers as equal.
pub const DEFAULT_TOLERANCE: f64 = 1e-8;

/// Names and settings an expression is evaluated against.
///
/// An environment is assembled once with the `with_*` builders and then only
/// read; evaluation never mutates it, so a shared reference can serve any
/// number of evaluations, including concurrent ones.
///
/// # Example
/// ```
/// use shunt::{Environment, Value, evaluate};
///
/// let env = Environment::new().with_builtins()
///                             .with_variable("x", 666.0)
///                             .with_variable("v", [1.0, 2.0]);
///
/// assert_eq!(evaluate("x + 1", &env).unwrap(), Value::Scalar(667.0));
/// assert_eq!(evaluate("sqrt(v * 8)", &env).unwrap(), Value::from([8f64.sqrt(), 4.0]));
/// ```
#[derive(Debug, Clone)]
pub struct Environment {
    variables: HashMap<String, Value>,
    functions: HashMap<String, Function>,
    tolerance: f64,
}

impl Default for Environment {
    fn default() -> Self {
        Self { variables: HashMap::new(),
               functions: HashMap::new(),
               tolerance: DEFAULT_TOLERANCE }
    }
}

impl Environment {
    /// Creates an empty environment with the default tolerance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds every builtin function.
    ///
    /// Functions registered earlier under a builtin name are replaced.
    #[must_use]
    pub fn with_builtins(mut self) -> Self {
        self.functions.extend(builtins());
        self
    }

    /// Binds `name` to `value`, replacing any earlier binding.
    #[must_use]
    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    /// Registers `function` under `name`, replacing any earlier one.
    #[must_use]
    pub fn with_function(mut self, name: impl Into<String>, function: Function) -> Self {
        self.functions.insert(name.into(), function);
        self
    }

    /// Sets the threshold used by `=`.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Looks up the value bound to `name`.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Looks up the function registered under `name`.
    #[must_use]
    pub fn function(&self, name: &str) -> Option<&Function> {
        self.functions.get(name)
    }

    /// Threshold below which `=` treats two numbers as equal.
    #[must_use]
    pub const fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Every name the tokenizer should accept: variables and functions.
    #[must_use]
    pub fn identifiers(&self) -> HashSet<&str> {
        self.variables
            .keys()
            .chain(self.functions.keys())
            .map(String::as_str)
            .collect()
    }
}
