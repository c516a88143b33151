use crate::interpreter::operator::BinaryOperator;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a token sequence.
pub enum RuntimeError {
    /// A `)` had no matching `(`, or a `(` was never closed.
    MismatchedParentheses {
        /// Byte offset of the unmatched parenthesis.
        offset: usize,
    },
    /// An operator was applied with fewer than two operands available.
    InsufficientOperands {
        /// The operator being applied.
        operator: BinaryOperator,
        /// Byte offset of the operator.
        offset:   usize,
    },
    /// The expression produced no value at all, e.g. an empty line or `()`.
    EmptyExpression,
    /// The right operand of `/` was zero.
    DivisionByZero {
        /// Byte offset of the `/` operator.
        offset: usize,
    },
    /// More than one value was left once every operator had been applied.
    TrailingGarbage {
        /// How many values were left on the operand stack.
        remaining: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MismatchedParentheses { offset } => {
                write!(f, "Mismatched parenthesis at offset {offset}.")
            },
            Self::InsufficientOperands { operator, offset } => write!(f,
                                                                      "Operator '{operator}' at offset {offset} is missing an operand."),
            Self::EmptyExpression => write!(f, "Expression is empty."),
            Self::DivisionByZero { offset } => write!(f, "Division by zero at offset {offset}."),
            Self::TrailingGarbage { remaining } => write!(f,
                                                          "Malformed expression: {remaining} values are not joined by an operator."),
        }
    }
}

impl std::error::Error for RuntimeError {}
