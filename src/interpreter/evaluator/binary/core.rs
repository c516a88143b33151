use log::trace;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator, Pending},
        operator::BinaryOperator,
    },
};

impl Evaluator {
    /// Pushes an operator after applying every pending operator it does not
    /// out-rank.
    ///
    /// Pending operators are applied while the top of the stack is an
    /// operator (not a `(`) whose precedence is greater than or equal to
    /// `op`'s. Using "or equal" makes same-precedence operators associate to
    /// the left: `10 - 2 - 3` is `(10 - 2) - 3`.
    pub(crate) fn push_operator(&mut self, op: BinaryOperator, offset: usize) -> EvalResult<()> {
        while let Some(&Pending::Operator { op: top,
                                            offset: top_offset, }) = self.operators.last()
              && op.precedence() <= top.precedence()
        {
            self.operators.pop();
            self.apply(top, top_offset)?;
        }
        self.operators.push(Pending::Operator { op, offset });
        Ok(())
    }

    /// Applies operators down to the nearest `(` and discards it.
    ///
    /// # Errors
    /// `MismatchedParentheses` at `offset` if the stack holds no `(`.
    pub(crate) fn close_paren(&mut self, offset: usize) -> EvalResult<()> {
        loop {
            match self.operators.pop() {
                Some(Pending::LeftParen { .. }) => return Ok(()),
                Some(Pending::Operator { op,
                                         offset: op_offset, }) => self.apply(op, op_offset)?,
                None => return Err(RuntimeError::MismatchedParentheses { offset }),
            }
        }
    }

    /// Pops two operands, applies `op` and pushes the result.
    ///
    /// The right operand is on top of the stack, the left one beneath it.
    ///
    /// # Errors
    /// - `InsufficientOperands` if fewer than two operands are available.
    /// - `DivisionByZero` from [`Evaluator::eval_scalar_op`].
    pub(crate) fn apply(&mut self, op: BinaryOperator, offset: usize) -> EvalResult<()> {
        let (Some(right), Some(left)) = (self.operands.pop(), self.operands.pop()) else {
            return Err(RuntimeError::InsufficientOperands { operator: op,
                                                            offset });
        };

        let value = Self::eval_scalar_op(op, left, right, offset)?;
        trace!("{left} {op} {right} = {value}");
        self.operands.push(value);
        Ok(())
    }
}
