/// Lexing errors.
///
/// Defines the errors raised before evaluation starts: characters outside the
/// calculator's alphabet and numeric literals that cannot be parsed.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the errors raised while the two-stack evaluator runs, such as
/// unbalanced parentheses, missing operands, or division by zero.
pub mod runtime_error;
/// The error returned by [`crate::evaluate`].
///
/// Wraps both stages and classifies every failure into an [`ErrorKind`].
pub mod evaluation_error;

pub use evaluation_error::{ErrorKind, EvaluationError};
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
