use log::debug;

use crate::{
    error::RuntimeError,
    interpreter::{lexer::Token, operator::BinaryOperator},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// An entry of the operator stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pending {
    /// An operator waiting for its right operand to be complete.
    Operator {
        /// The operator.
        op:     BinaryOperator,
        /// Byte offset of the operator in the expression.
        offset: usize,
    },
    /// An opening parenthesis. Never applied; only a `)` removes it.
    LeftParen {
        /// Byte offset of the parenthesis in the expression.
        offset: usize,
    },
}

/// Holds the two stacks of one evaluation.
///
/// An `Evaluator` is built for a single expression and consumed by
/// [`Evaluator::finish`]; nothing is shared between evaluations.
#[derive(Debug, Default)]
pub struct Evaluator {
    /// Intermediate and final values, last in first out.
    pub(crate) operands:  Vec<f64>,
    /// Operators and parentheses awaiting application.
    pub(crate) operators: Vec<Pending>,
}

impl Evaluator {
    /// Creates an evaluator with empty stacks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates a whole token sequence.
    ///
    /// This is the main entry point for evaluation. Tokens are fed to
    /// [`Evaluator::push_token`] in order and the stacks are drained with
    /// [`Evaluator::finish`].
    ///
    /// # Example
    /// ```
    /// use stackcalc::interpreter::{evaluator::core::Evaluator, lexer::tokenize};
    ///
    /// let tokens = tokenize("2 + 3 * 4").unwrap();
    /// assert_eq!(Evaluator::eval_tokens(&tokens).unwrap(), 14.0);
    /// ```
    pub fn eval_tokens(tokens: &[(Token, usize)]) -> EvalResult<f64> {
        let mut evaluator = Self::new();
        for &(token, offset) in tokens {
            evaluator.push_token(token, offset)?;
        }
        evaluator.finish()
    }

    /// Feeds one token to the stacks.
    ///
    /// Numbers go to the operand stack and `(` to the operator stack. A `)`
    /// applies operators back to its matching `(`, and an operator first
    /// applies every pending operator it does not out-rank.
    pub fn push_token(&mut self, token: Token, offset: usize) -> EvalResult<()> {
        match token {
            Token::Number(value) => self.operands.push(value),
            Token::LeftParen => self.operators.push(Pending::LeftParen { offset }),
            Token::RightParen => self.close_paren(offset)?,
            Token::Operator(op) => self.push_operator(op, offset)?,
            // Skipped by the lexer, never produced.
            Token::Ignored => {},
        }
        Ok(())
    }

    /// Applies the remaining operators and returns the final value.
    ///
    /// # Errors
    /// - `MismatchedParentheses` if a `(` was never closed.
    /// - `InsufficientOperands` if a pending operator lacks an operand.
    /// - `EmptyExpression` if no value was produced.
    /// - `TrailingGarbage` if more than one value remains.
    pub fn finish(mut self) -> EvalResult<f64> {
        while let Some(pending) = self.operators.pop() {
            match pending {
                Pending::Operator { op, offset } => self.apply(op, offset)?,
                Pending::LeftParen { offset } => {
                    return Err(RuntimeError::MismatchedParentheses { offset });
                },
            }
        }

        match self.operands.as_slice() {
            [value] => Ok(*value),
            [] => Err(RuntimeError::EmptyExpression),
            rest => {
                debug!("operand stack left with {} values: {rest:?}", rest.len());
                Err(RuntimeError::TrailingGarbage { remaining: rest.len() })
            },
        }
    }
}
