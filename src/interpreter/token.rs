use crate::util::num::format_number;

/// Binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
}

impl BinaryOperator {
    /// Returns the source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }

    /// Returns the precedence and associativity of the operator.
    #[must_use]
    pub const fn info(self) -> OperatorInfo {
        match self {
            Self::Add | Self::Sub => ADDITIVE,
            Self::Mul | Self::Div => MULTIPLICATIVE,
            Self::Pow => POWER,
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// How operators of equal precedence group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` is `(a - b) - c`.
    Left,
    /// `a ^ b ^ c` is `a ^ (b ^ c)`.
    Right,
}

/// Precedence and associativity of an operator.
///
/// Higher precedence binds tighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorInfo {
    /// Binding strength.
    pub precedence:    u8,
    /// Grouping of equal-precedence chains.
    pub associativity: Associativity,
}

/// `+` and `-`.
pub const ADDITIVE: OperatorInfo = OperatorInfo { precedence:    1,
                                                  associativity: Associativity::Left, };
/// `*` and `/`.
pub const MULTIPLICATIVE: OperatorInfo = OperatorInfo { precedence:    2,
                                                        associativity: Associativity::Left, };
/// `^`.
pub const POWER: OperatorInfo = OperatorInfo { precedence:    3,
                                               associativity: Associativity::Right, };
/// Unary minus binds tighter than `^`, so `-2^2` is `(-2)^2`.
pub const NEGATION: OperatorInfo = OperatorInfo { precedence:    4,
                                                  associativity: Associativity::Right, };

/// A lexical token of an arithmetic expression.
///
/// The tokenizer produces these in infix order; the converter rearranges the
/// same tokens into postfix order, dropping the parentheses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A number literal such as `42`, `3.14` or `.5`.
    Number(f64),
    /// A binary operator.
    BinaryOp(BinaryOperator),
    /// A `-` in prefix position, as in `-3` or `2*-3`.
    UnaryMinus,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
}

impl Token {
    /// Returns the precedence and associativity of an operator token, or
    /// `None` for numbers and parentheses.
    ///
    /// # Example
    /// ```
    /// use stepcalc::interpreter::token::{Associativity, BinaryOperator, Token};
    ///
    /// let pow = Token::BinaryOp(BinaryOperator::Pow).operator_info().unwrap();
    /// assert_eq!(pow.precedence, 3);
    /// assert_eq!(pow.associativity, Associativity::Right);
    ///
    /// assert!(Token::UnaryMinus.operator_info().unwrap().precedence > pow.precedence);
    /// assert!(Token::Number(1.0).operator_info().is_none());
    /// ```
    #[must_use]
    pub const fn operator_info(&self) -> Option<OperatorInfo> {
        match self {
            Self::BinaryOp(op) => Some(op.info()),
            Self::UnaryMinus => Some(NEGATION),
            Self::Number(_) | Self::LeftParen | Self::RightParen => None,
        }
    }

    /// Returns `true` for `(` and `)`.
    #[must_use]
    pub const fn is_paren(&self) -> bool {
        matches!(self, Self::LeftParen | Self::RightParen)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", format_number(*n)),
            Self::BinaryOp(op) => write!(f, "{op}"),
            Self::UnaryMinus => write!(f, "u-"),
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
        }
    }
}

/// Displays a token sequence as a bracketed, comma separated list.
///
/// # Example
/// ```
/// use stepcalc::interpreter::token::{BinaryOperator, Token, TokenList};
///
/// let tokens = [Token::UnaryMinus, Token::Number(2.0), Token::BinaryOp(BinaryOperator::Pow)];
/// assert_eq!(TokenList(&tokens).to_string(), "[u-, 2, ^]");
/// ```
pub struct TokenList<'a>(pub &'a [Token]);

impl std::fmt::Display for TokenList<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;

        for (index, token) in self.0.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }

            write!(f, "{token}")?;
        }

        write!(f, "]")
    }
}
