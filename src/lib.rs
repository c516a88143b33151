//! # stackcalc
//!
//! stackcalc evaluates infix arithmetic expressions such as `(2 + 3) * 4.5`.
//! Input is validated against a small alphabet, split into tokens, and
//! evaluated with an operand stack and an operator stack. Every failure is
//! returned as a typed [`EvaluationError`].

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use log::debug;

use crate::{
    error::EvaluationError,
    interpreter::{evaluator::core::Evaluator, lexer::tokenize, validator::validate},
};

/// Provides the error types of every evaluation stage.
///
/// # Responsibilities
/// - Defines `ParseError` for validation and lexing failures.
/// - Defines `RuntimeError` for failures of the two-stack evaluator.
/// - Unifies both in `EvaluationError`, classified by `ErrorKind`.
pub mod error;
/// Validation, tokenization and evaluation of expressions.
///
/// Each stage is a pure function of its input and keeps no state between
/// calls.
pub mod interpreter;
/// The interactive read-evaluate-print loop.
///
/// Handles prompts, exit keywords and result formatting around
/// [`evaluate`].
pub mod shell;

/// Evaluates an infix arithmetic expression.
///
/// The expression may contain non-negative decimal numbers, `+ - * /`,
/// parentheses and whitespace. `*` and `/` bind tighter than `+` and `-`, and
/// operators of equal precedence associate to the left.
///
/// # Errors
/// Returns an [`EvaluationError`] if the input contains a character outside
/// the alphabet, a malformed number, unbalanced parentheses, a missing
/// operand, a division by zero, or values not joined by an operator.
///
/// # Examples
/// ```
/// use stackcalc::{error::ErrorKind, evaluate};
///
/// assert_eq!(evaluate("2 + 3 * 4").unwrap(), 14.0);
/// assert_eq!(evaluate("(2 + 3) * 4").unwrap(), 20.0);
/// assert_eq!(evaluate("10 - 2 - 3").unwrap(), 5.0);
///
/// assert_eq!(evaluate("2 + a").unwrap_err().kind(), ErrorKind::InvalidCharacter);
/// assert_eq!(evaluate("2 3").unwrap_err().kind(), ErrorKind::TrailingGarbage);
/// ```
pub fn evaluate(expression: &str) -> Result<f64, EvaluationError> {
    validate(expression)?;

    let tokens = tokenize(expression)?;
    debug!("{expression:?} produced {} tokens", tokens.len());

    let value = Evaluator::eval_tokens(&tokens)?;
    debug!("{expression:?} evaluated to {value}");

    Ok(value)
}
