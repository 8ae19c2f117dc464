use log::{debug, trace};
use logos::Logos;

use crate::{
    error::LexError,
    interpreter::token::{BinaryOperator, Token},
};

/// Result type used by the tokenizer.
pub type LexResult<T> = Result<T, LexError>;

/// Raw lexemes recognised in the source text.
///
/// A lexeme knows nothing about its surroundings: `-` is always `Minus` here,
/// and [`tokenize`] decides afterwards whether it is unary or binary.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Lexeme {
    /// A maximal run of digits and dots, such as `3.14`, `.5` or `1.2.3`.
    /// Validated when it is turned into a [`Token::Number`].
    #[regex(r"[0-9.]+")]
    Number,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Spaces, tabs, line breaks and feeds.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// Converts an infix expression into a flat sequence of tokens.
///
/// The scan runs left to right once. Whitespace is skipped. A run of digits and
/// dots becomes a single [`Token::Number`]. A `-` becomes
/// [`Token::UnaryMinus`] when nothing precedes it or when the last emitted
/// token is a binary operator or `(`; otherwise it is binary subtraction. A
/// `+` in the same position is a no-op and emits nothing.
///
/// Empty or whitespace-only input yields an empty sequence.
///
/// # Parameters
/// - `source`: The expression text.
///
/// # Returns
/// The tokens in source order.
///
/// # Errors
/// - `UnknownCharacter` for any character outside the grammar.
/// - `MultipleDecimalPoints` for literals such as `1.2.3`.
/// - `InvalidNumber` for a run with no digits, such as `.`.
/// - `LiteralTooLarge` for a literal beyond the largest finite `f64`.
///
/// # Example
/// ```
/// use stepcalc::interpreter::{
///     lexer::tokenize,
///     token::{BinaryOperator, Token},
/// };
///
/// let tokens = tokenize("2 * -3").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Number(2.0),
///                 Token::BinaryOp(BinaryOperator::Mul),
///                 Token::UnaryMinus,
///                 Token::Number(3.0)]);
///
/// assert!(tokenize("2 $ 3").is_err());
/// assert!(tokenize("   ").unwrap().is_empty());
/// ```
pub fn tokenize(source: &str) -> LexResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut lexer = Lexeme::lexer(source);

    while let Some(lexeme) = lexer.next() {
        let span = lexer.span();
        let position = source[..span.start].chars().count();

        let Ok(lexeme) = lexeme else {
            let character = source[span.start..].chars().next().unwrap_or('\u{FFFD}');
            return Err(LexError::UnknownCharacter { character, position });
        };

        let unary_position = is_unary_position(tokens.last());
        let token = match lexeme {
            Lexeme::Number => Some(parse_number(lexer.slice(), position)?),
            Lexeme::Plus if unary_position => None,
            Lexeme::Plus => Some(Token::BinaryOp(BinaryOperator::Add)),
            Lexeme::Minus if unary_position => Some(Token::UnaryMinus),
            Lexeme::Minus => Some(Token::BinaryOp(BinaryOperator::Sub)),
            Lexeme::Star => Some(Token::BinaryOp(BinaryOperator::Mul)),
            Lexeme::Slash => Some(Token::BinaryOp(BinaryOperator::Div)),
            Lexeme::Caret => Some(Token::BinaryOp(BinaryOperator::Pow)),
            Lexeme::LParen => Some(Token::LeftParen),
            Lexeme::RParen => Some(Token::RightParen),
            Lexeme::Ignored => None,
        };

        match token {
            Some(token) => {
                trace!("lexeme {lexeme:?} at {position} -> {token}");
                tokens.push(token);
            },
            None => trace!("lexeme {lexeme:?} at {position} elided"),
        }
    }

    debug!("tokenized {source:?} into {} tokens", tokens.len());
    Ok(tokens)
}

/// Decides whether a sign at the current position is a prefix sign.
///
/// Only the tokens emitted so far are consulted, so whitespace between the
/// sign and what precedes it never matters.
fn is_unary_position(previous: Option<&Token>) -> bool {
    matches!(previous, None | Some(Token::BinaryOp(_) | Token::LeftParen))
}

/// Turns a digit/dot run into a number token.
///
/// # Parameters
/// - `literal`: The matched run.
/// - `position`: Character offset of the run, for error reporting.
///
/// # Errors
/// `MultipleDecimalPoints` if the run has more than one `.`, `InvalidNumber`
/// if it does not parse (a lone `.`), `LiteralTooLarge` if it parses to
/// infinity.
fn parse_number(literal: &str, position: usize) -> LexResult<Token> {
    if literal.matches('.').count() > 1 {
        return Err(LexError::MultipleDecimalPoints { literal: literal.to_string(),
                                                     position });
    }

    let value: f64 = literal.parse()
                            .map_err(|_| LexError::InvalidNumber { literal: literal.to_string(),
                                                                   position })?;
    if !value.is_finite() {
        return Err(LexError::LiteralTooLarge { literal: literal.to_string(),
                                               position });
    }

    Ok(Token::Number(value))
}
