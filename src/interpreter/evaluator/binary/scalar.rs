use crate::interpreter::{evaluator::core::Evaluator, operator::BinaryOperator};

impl Evaluator<'_, '_> {
    /// Evaluates a binary operator on two scalars.
    ///
    /// Division follows IEEE-754: dividing by zero yields an infinity or NaN
    /// rather than an error. `Equal` yields `1` when `|x - y| < tolerance`
    /// and `0` otherwise.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `x`: Left operand.
    /// - `y`: Right operand.
    /// - `tolerance`: Threshold used by `Equal`.
    ///
    /// # Example
    /// ```
    /// use shunt::interpreter::{evaluator::core::Evaluator, operator::BinaryOperator};
    ///
    /// assert_eq!(Evaluator::eval_scalar_op(BinaryOperator::Pow, 2.0, 10.0, 1e-8), 1024.0);
    /// assert_eq!(Evaluator::eval_scalar_op(BinaryOperator::Equal, 0.1 + 0.2, 0.3, 1e-8), 1.0);
    /// assert!(Evaluator::eval_scalar_op(BinaryOperator::Div, 1.0, 0.0, 1e-8).is_infinite());
    /// ```
    #[must_use]
    pub fn eval_scalar_op(op: BinaryOperator, x: f64, y: f64, tolerance: f64) -> f64 {
        match op {
            BinaryOperator::Add => x + y,
            BinaryOperator::Sub => x - y,
            BinaryOperator::Mul => x * y,
            BinaryOperator::Div => x / y,
            BinaryOperator::Pow => x.powf(y),
            BinaryOperator::Equal => {
                if (x - y).abs() < tolerance {
                    1.0
                } else {
                    0.0
                }
            },
        }
    }
}
