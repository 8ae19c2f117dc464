#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing an expression.
///
/// Positions are zero-based character offsets into the original input.
pub enum LexError {
    /// A character that is neither whitespace, a digit, a decimal point, an
    /// operator nor a parenthesis.
    UnknownCharacter {
        /// The offending character.
        character: char,
        /// Where the character was found.
        position:  usize,
    },
    /// A run of digits and dots that contains more than one decimal point,
    /// such as `1.2.3`.
    MultipleDecimalPoints {
        /// The full digit/dot run.
        literal:  String,
        /// Where the literal starts.
        position: usize,
    },
    /// A literal too large to be represented as a finite number.
    LiteralTooLarge {
        /// The rejected literal.
        literal:  String,
        /// Where the literal starts.
        position: usize,
    },
    /// A digit/dot run that does not describe a number, such as a lone `.`.
    InvalidNumber {
        /// The rejected literal.
        literal:  String,
        /// Where the literal starts.
        position: usize,
    },
}

impl LexError {
    /// Returns the character offset the error points at.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnknownCharacter { position, .. }
            | Self::MultipleDecimalPoints { position, .. }
            | Self::LiteralTooLarge { position, .. }
            | Self::InvalidNumber { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCharacter { character, position } => {
                write!(f, "Unknown character {character:?} at position {position}.")
            },
            Self::MultipleDecimalPoints { literal, position } => write!(f,
                                                                       "Invalid number with multiple dots '{literal}' at position {position}."),
            Self::LiteralTooLarge { literal, position } => write!(f,
                                                                  "Literal starting '{}' at position {position} is too large.",
                                                                  literal.chars().take(12).collect::<String>()),
            Self::InvalidNumber { literal, position } => {
                write!(f, "Invalid number '{literal}' at position {position}.")
            },
        }
    }
}

impl std::error::Error for LexError {}
