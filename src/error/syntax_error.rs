#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents the structural errors detected while converting to postfix.
pub enum SyntaxError {
    /// A `)` was found with no matching `(` before it.
    UnmatchedClosingParen {
        /// Index of the offending `)` in the token sequence.
        token: usize,
    },
    /// A `(` was never closed.
    UnclosedParen,
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnmatchedClosingParen { token } => write!(f,
                                                           "Mismatched parentheses: ')' at token {token} has no matching '('."),
            Self::UnclosedParen => write!(f, "Mismatched parentheses: '(' is never closed."),
        }
    }
}

impl std::error::Error for SyntaxError {}
