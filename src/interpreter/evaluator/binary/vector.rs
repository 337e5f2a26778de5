use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator<'_, '_> {
    /// Applies a scalar function elementwise across any number of operands.
    ///
    /// This function unifies every broadcasting path:
    /// - all scalars: `f` is applied once and the result is a scalar;
    /// - scalars mixed with vectors: each scalar is repeated for every element;
    /// - several vectors: they must all have the same length and are zipped.
    ///
    /// Operand order is preserved, so `2 - [1, 2]` computes `2 - 1` and
    /// `2 - 2`.
    ///
    /// # Parameters
    /// - `name`: Operator symbol or function name, used in error messages.
    /// - `operands`: The operands, in source order.
    /// - `offset`: Source offset for error reporting.
    /// - `f`: Scalar operation receiving one element from every operand.
    ///
    /// # Errors
    /// Returns `ShapeMismatch` if two vector operands differ in length.
    ///
    /// # Example
    /// ```
    /// use shunt::{Value, interpreter::evaluator::core::Evaluator};
    ///
    /// let left = Value::from([1.0, 2.0]);
    /// let right = Value::Scalar(10.0);
    ///
    /// let r = Evaluator::broadcast("+", &[left, right], 0, |xs| xs[0] + xs[1]).unwrap();
    /// assert_eq!(r, Value::from([11.0, 12.0]));
    ///
    /// let bad = Evaluator::broadcast("+",
    ///                                &[Value::from([1.0]), Value::from([1.0, 2.0])],
    ///                                0,
    ///                                |xs| xs[0] + xs[1]);
    /// assert!(bad.is_err());
    /// ```
    pub fn broadcast<F>(name: &str, operands: &[Value], offset: usize, f: F) -> EvalResult<Value>
        where F: Fn(&[f64]) -> f64
    {
        let mut len: Option<usize> = None;
        for operand in operands {
            if let Value::Vector(v) = operand {
                match len {
                    Some(n) if n != v.len() => {
                        return Err(EvalError::ShapeMismatch { operator: name.to_string(),
                                                              left: n,
                                                              right: v.len(),
                                                              offset });
                    },
                    _ => len = Some(v.len()),
                }
            }
        }

        let mut row = Vec::with_capacity(operands.len());
        let mut element = |i: usize| {
            row.clear();
            row.extend(operands.iter().map(|operand| match operand {
                                          Value::Scalar(x) => *x,
                                          Value::Vector(v) => v[i],
                                      }));
            f(row.as_slice())
        };

        Ok(match len {
               None => Value::Scalar(element(0)),
               Some(n) => Value::Vector((0..n).map(element).collect()),
           })
    }
}
