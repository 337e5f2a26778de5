use crate::interpreter::{
    evaluator::core::{EvalResult, Evaluator},
    operator::BinaryOperator,
    value::core::Value,
};

impl Evaluator<'_, '_> {
    /// Evaluates a binary operation between two values.
    ///
    /// Scalar pairs go straight to [`Evaluator::eval_scalar_op`]; any vector
    /// operand routes through [`Evaluator::broadcast`].
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand, pushed first.
    /// - `right`: Right operand, pushed second.
    /// - `tolerance`: Threshold used by `=`.
    /// - `offset`: Source offset of the operator for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use shunt::{
    ///     Value,
    ///     interpreter::{evaluator::core::Evaluator, operator::BinaryOperator},
    /// };
    ///
    /// let left = Value::from([1.0, 2.0, 3.0]);
    /// let right = Value::Scalar(2.0);
    ///
    /// let result = Evaluator::apply_binary(BinaryOperator::Mul, &left, &right, 1e-8, 0);
    /// assert_eq!(result.unwrap(), Value::from([2.0, 4.0, 6.0]));
    /// ```
    pub fn apply_binary(op: BinaryOperator,
                        left: &Value,
                        right: &Value,
                        tolerance: f64,
                        offset: usize)
                        -> EvalResult<Value> {
        match (left, right) {
            (Value::Scalar(x), Value::Scalar(y)) => {
                Ok(Value::Scalar(Self::eval_scalar_op(op, *x, *y, tolerance)))
            },
            _ => Self::broadcast(&op.to_string(),
                                 &[left.clone(), right.clone()],
                                 offset,
                                 |xs| Self::eval_scalar_op(op, xs[0], xs[1], tolerance)),
        }
    }
}
