use crate::error::{ParseError, RuntimeError};

/// Classifies an [`EvaluationError`] without its location details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidCharacter,
    MalformedNumber,
    MismatchedParentheses,
    InsufficientOperands,
    DivisionByZero,
    TrailingGarbage,
}

/// Any failure of [`crate::evaluate`], tagged with the stage that raised it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    /// Raised by the validator or the lexer.
    Parse(ParseError),
    /// Raised by the evaluator.
    Runtime(RuntimeError),
}

impl EvaluationError {
    /// Returns the kind of failure.
    ///
    /// # Example
    /// ```
    /// use stackcalc::{error::ErrorKind, evaluate};
    ///
    /// let err = evaluate("5 / 0").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(ParseError::InvalidCharacter { .. }) => ErrorKind::InvalidCharacter,
            Self::Parse(ParseError::MalformedNumber { .. }) => ErrorKind::MalformedNumber,
            Self::Runtime(RuntimeError::MismatchedParentheses { .. }) => {
                ErrorKind::MismatchedParentheses
            },
            Self::Runtime(RuntimeError::InsufficientOperands { .. } | RuntimeError::EmptyExpression) => {
                ErrorKind::InsufficientOperands
            },
            Self::Runtime(RuntimeError::DivisionByZero { .. }) => ErrorKind::DivisionByZero,
            Self::Runtime(RuntimeError::TrailingGarbage { .. }) => ErrorKind::TrailingGarbage,
        }
    }
}

impl From<ParseError> for EvaluationError {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for EvaluationError {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl std::fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => e.fmt(f),
            Self::Runtime(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for EvaluationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
