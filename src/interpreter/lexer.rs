use logos::Logos;

use crate::{error::ParseError, interpreter::operator::BinaryOperator};

pub type ParseResult<T> = Result<T, ParseError>;

/// Represents a lexical token in an arithmetic expression.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(error = LexError)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5` or `2.`.
    ///
    /// Every run of digits and decimal points is captured so that literals
    /// like `1.2.3` are reported whole instead of being split.
    #[regex(r"[0-9.]+", parse_number)]
    Number(f64),
    /// `+`, `-`, `*` or `/`.
    #[token("+", |_| BinaryOperator::Add)]
    #[token("-", |_| BinaryOperator::Sub)]
    #[token("*", |_| BinaryOperator::Mul)]
    #[token("/", |_| BinaryOperator::Div)]
    Operator(BinaryOperator),
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// Spaces, tabs and line breaks.
    #[regex(r"[ \t\r\n\f\x0B]+", logos::skip)]
    Ignored,
}

/// Errors raised by the generated lexer.
///
/// These carry no location; [`tokenize`] attaches the span and turns them into
/// a [`ParseError`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum LexError {
    /// No token matches at the current position.
    #[default]
    UnexpectedCharacter,
    /// A run of digits and decimal points is not a valid `f64` literal.
    MalformedNumber,
}

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Ok(f64)`: The parsed value.
/// - `Err(LexError::MalformedNumber)`: For slices such as `.` or `1.2.3`.
fn parse_number(lex: &logos::Lexer<Token>) -> Result<f64, LexError> {
    lex.slice().parse().map_err(|_| LexError::MalformedNumber)
}

/// Splits `source` into tokens paired with their byte offsets.
///
/// # Errors
/// - [`ParseError::MalformedNumber`] if a numeric literal cannot be parsed.
/// - [`ParseError::InvalidCharacter`] if a character matches no token. This
///   only happens when the input skipped validation.
///
/// # Example
/// ```
/// use stackcalc::interpreter::{lexer::{Token, tokenize},
///                              operator::BinaryOperator};
///
/// let tokens = tokenize("1.5 * (2)").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Number(1.5), 0),
///                 (Token::Operator(BinaryOperator::Mul), 4),
///                 (Token::LeftParen, 6),
///                 (Token::Number(2.0), 7),
///                 (Token::RightParen, 8)]);
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let offset = lexer.span().start;
        match token {
            Ok(tok) => tokens.push((tok, offset)),
            Err(LexError::MalformedNumber) => {
                return Err(ParseError::MalformedNumber { literal: lexer.slice().to_string(),
                                                         offset });
            },
            Err(LexError::UnexpectedCharacter) => {
                let character = lexer.slice().chars().next().unwrap_or_default();
                return Err(ParseError::InvalidCharacter { character, offset });
            },
        }
    }

    Ok(tokens)
}
