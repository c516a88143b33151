/// The evaluator module computes the value of a token sequence.
///
/// The evaluator walks the tokens once, keeping an operand stack and an
/// operator stack. Operators are applied as soon as a following operator of
/// lower or equal precedence (or a closing parenthesis, or the end of input)
/// shows that they are dominated.
///
/// # Responsibilities
/// - Applies `+ - * /` with the usual precedence and left associativity.
/// - Treats `(` as a barrier that only a matching `)` removes.
/// - Reports unbalanced parentheses, missing operands, division by zero and
///   leftover values as typed errors.
pub mod evaluator;
/// The lexer module tokenizes validated input.
///
/// # Responsibilities
/// - Skips whitespace between tokens.
/// - Folds runs of digits and decimal points into numeric literals.
/// - Produces single-character operator and parenthesis tokens.
pub mod lexer;
/// Binary operators and their precedence table.
pub mod operator;
/// The validator module rejects characters outside the calculator's alphabet.
///
/// It runs before lexing so that stray letters or symbols get a clear error
/// instead of being misread as operators.
pub mod validator;
