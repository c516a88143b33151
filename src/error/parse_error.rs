#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during validation or lexing.
pub enum ParseError {
    /// Found a character outside the permitted alphabet.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the expression.
        offset:    usize,
    },
    /// A numeric literal could not be parsed, e.g. `1.2.3` or a bare `.`.
    MalformedNumber {
        /// The literal as it appeared in the expression.
        literal: String,
        /// Byte offset where the literal starts.
        offset:  usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { character, offset } => {
                write!(f, "Invalid character '{character}' at offset {offset}.")
            },
            Self::MalformedNumber { literal, offset } => {
                write!(f, "Malformed number '{literal}' at offset {offset}.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
