/// Tokenizer errors.
///
/// Raised while scanning raw text: unknown characters and malformed number
/// literals.
pub mod lex_error;
/// Converter errors.
///
/// Raised by the shunting-yard pass when parentheses do not balance.
pub mod syntax_error;
/// Evaluation errors.
///
/// Raised while running a postfix sequence: missing operands, leftover values,
/// division by zero and exponentiation outside the real numbers.
pub mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use syntax_error::SyntaxError;

/// Coarse classification of a [`CalcError`].
///
/// Division by zero gets its own kind even though the evaluator raises it, so
/// callers can single it out without matching on evaluator internals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input text could not be tokenized.
    Lex,
    /// Parentheses do not balance.
    Syntax,
    /// The postfix sequence could not be evaluated.
    Eval,
    /// A divisor was (numerically) zero.
    DivideByZero,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Any error the calculation pipeline can produce.
pub enum CalcError {
    /// Failure in the tokenizer.
    Lex(LexError),
    /// Failure in the infix-to-postfix converter.
    Syntax(SyntaxError),
    /// Failure in the postfix evaluator.
    Eval(EvalError),
}

impl CalcError {
    /// Returns the kind of this error.
    ///
    /// # Example
    /// ```
    /// use stepcalc::{calculate, error::ErrorKind};
    ///
    /// let err = calculate("5/0").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::DivideByZero);
    ///
    /// let err = calculate("5+").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Eval);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Lex(_) => ErrorKind::Lex,
            Self::Syntax(_) => ErrorKind::Syntax,
            Self::Eval(EvalError::DivisionByZero) => ErrorKind::DivideByZero,
            Self::Eval(_) => ErrorKind::Eval,
        }
    }
}

impl From<LexError> for CalcError {
    fn from(err: LexError) -> Self {
        Self::Lex(err)
    }
}

impl From<SyntaxError> for CalcError {
    fn from(err: SyntaxError) -> Self {
        Self::Syntax(err)
    }
}

impl From<EvalError> for CalcError {
    fn from(err: EvalError) -> Self {
        Self::Eval(err)
    }
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Syntax(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Syntax(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}
