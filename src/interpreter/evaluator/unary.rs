use crate::interpreter::{
    evaluator::core::Evaluator, operator::UnaryOperator, value::core::Value,
};

impl Evaluator<'_, '_> {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Plus`: the identity.
    /// - `Minus`: arithmetic negation.
    ///
    /// Both act elementwise on vectors.
    ///
    /// # Example
    /// ```
    /// use shunt::{
    ///     Value,
    ///     interpreter::{evaluator::core::Evaluator, operator::UnaryOperator},
    /// };
    ///
    /// let v = Evaluator::apply_unary(UnaryOperator::Minus, &Value::Scalar(5.0));
    /// assert_eq!(v, Value::Scalar(-5.0));
    ///
    /// let v = Evaluator::apply_unary(UnaryOperator::Minus, &Value::from([1.0, -2.0]));
    /// assert_eq!(v, Value::from([-1.0, 2.0]));
    /// ```
    #[must_use]
    pub fn apply_unary(op: UnaryOperator, value: &Value) -> Value {
        match op {
            UnaryOperator::Plus => value.clone(),
            UnaryOperator::Minus => value.map(|x| -x),
        }
    }
}
