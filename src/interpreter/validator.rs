use crate::{error::ParseError, interpreter::lexer::ParseResult};

/// Returns `true` if `c` may appear in an expression.
///
/// The alphabet is the ASCII digits, `+ - * / ( ) .` and ASCII whitespace,
/// including the vertical tab.
#[must_use]
pub const fn is_permitted(c: char) -> bool {
    c.is_ascii_digit()
    || matches!(c, '+' | '-' | '*' | '/' | '(' | ')' | '.')
    || c.is_ascii_whitespace()
    || c == '\x0B'
}

/// Returns whether every character of `source` is permitted.
///
/// Empty and whitespace-only input is valid here; it fails later, during
/// evaluation.
///
/// # Example
/// ```
/// use stackcalc::interpreter::validator::is_valid;
///
/// assert!(is_valid("(1.5 + 2) * 3"));
/// assert!(is_valid("   "));
/// assert!(!is_valid("2 + x"));
/// ```
#[must_use]
pub fn is_valid(source: &str) -> bool {
    source.chars().all(is_permitted)
}

/// Checks `source` against the alphabet.
///
/// # Errors
/// Returns [`ParseError::InvalidCharacter`] for the first character outside
/// the alphabet, with its byte offset.
pub fn validate(source: &str) -> ParseResult<()> {
    match source.char_indices().find(|&(_, c)| !is_permitted(c)) {
        Some((offset, character)) => Err(ParseError::InvalidCharacter { character, offset }),
        None => Ok(()),
    }
}
