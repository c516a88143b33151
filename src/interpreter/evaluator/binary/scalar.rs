use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        operator::BinaryOperator,
    },
};

impl Evaluator {
    /// Evaluates a scalar arithmetic operation.
    ///
    /// Division by exactly zero (including `-0.0`) is an error; every other
    /// result follows `f64` semantics, so overflow yields an infinity.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `offset`: Byte offset of the operator, for error reporting.
    ///
    /// # Example
    /// ```
    /// use stackcalc::interpreter::{evaluator::core::Evaluator, operator::BinaryOperator};
    ///
    /// let result = Evaluator::eval_scalar_op(BinaryOperator::Div, 7.0, 2.0, 1).unwrap();
    /// assert_eq!(result, 3.5);
    ///
    /// assert!(Evaluator::eval_scalar_op(BinaryOperator::Div, 7.0, 0.0, 1).is_err());
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator,
                          left: f64,
                          right: f64,
                          offset: usize)
                          -> EvalResult<f64> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        Ok(match op {
            Add => left + right,
            Sub => left - right,
            Mul => left * right,
            Div => {
                if right == 0.0 {
                    return Err(RuntimeError::DivisionByZero { offset });
                }
                left / right
            },
        })
    }
}
