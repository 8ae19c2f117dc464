#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a postfix sequence.
pub enum EvalError {
    /// An operator found fewer values on the stack than it consumes.
    MissingOperands {
        /// Symbol of the operator, `u-` for unary minus.
        operator: String,
        /// How many values the operator needs.
        needed:   usize,
        /// How many values were available.
        found:    usize,
    },
    /// The pass finished with zero or more than one value on the stack.
    LeftoverOperands {
        /// Number of values left on the stack.
        remaining: usize,
    },
    /// A token that has no meaning in postfix order, such as a parenthesis.
    UnexpectedToken {
        /// The offending token as displayed in traces.
        token: String,
    },
    /// Division where the divisor's magnitude is below the zero tolerance.
    DivisionByZero,
    /// A value outside the finite real numbers: a power with no real result,
    /// or any result too large to represent.
    Domain {
        /// Details about the failed operation.
        details: String,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingOperands { operator, needed, found } => write!(f,
                                                                        "Not enough operands for '{operator}': needs {needed}, found {found}."),
            Self::LeftoverOperands { remaining } => write!(f,
                                                           "Invalid expression or leftover operands ({remaining} values left on the stack)."),
            Self::UnexpectedToken { token } => {
                write!(f, "Malformed postfix expression: unexpected '{token}'.")
            },
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::Domain { details } => write!(f, "Math error: {details}."),
        }
    }
}

impl std::error::Error for EvalError {}
