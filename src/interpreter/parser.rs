use log::{debug, trace};

use crate::{
    error::SyntaxError,
    interpreter::token::{Associativity, OperatorInfo, Token},
};

/// Result type used by the converter.
pub type ParseResult<T> = Result<T, SyntaxError>;

/// Converts an infix token sequence into postfix (Reverse Polish) order.
///
/// This is the shunting-yard algorithm with an explicit operator stack:
/// numbers go straight to the output, operators wait on the stack until an
/// operator that binds no tighter arrives, and parentheses group without
/// appearing in the output.
///
/// # Parameters
/// - `tokens`: Infix tokens as produced by
///   [`tokenize`](crate::interpreter::lexer::tokenize).
///
/// # Returns
/// The same numbers and operators in postfix order, parentheses removed.
///
/// # Errors
/// - `UnmatchedClosingParen` for a `)` with no `(` before it.
/// - `UnclosedParen` for a `(` that is never closed.
///
/// # Example
/// ```
/// use stepcalc::interpreter::{
///     lexer::tokenize,
///     parser::to_postfix,
///     token::TokenList,
/// };
///
/// let postfix = to_postfix(tokenize("(1 + 2) * 3").unwrap()).unwrap();
/// assert_eq!(TokenList(&postfix).to_string(), "[1, 2, +, 3, *]");
///
/// assert!(to_postfix(tokenize("(1 + 2").unwrap()).is_err());
/// assert!(to_postfix(tokenize("1 + 2)").unwrap()).is_err());
/// ```
pub fn to_postfix(tokens: Vec<Token>) -> ParseResult<Vec<Token>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut operators: Vec<Token> = Vec::new();

    for (index, token) in tokens.into_iter().enumerate() {
        match token {
            Token::Number(_) => output.push(token),
            Token::LeftParen => operators.push(token),
            Token::RightParen => close_group(&mut operators, &mut output, index)?,
            Token::BinaryOp(_) | Token::UnaryMinus => {
                if let Some(info) = token.operator_info() {
                    pop_while_binding(info, &mut operators, &mut output);
                }
                operators.push(token);
            },
        }
        trace!("after token {index}: output {} / stack {}",
               output.len(),
               operators.len());
    }

    while let Some(top) = operators.pop() {
        if top.is_paren() {
            return Err(SyntaxError::UnclosedParen);
        }
        output.push(top);
    }

    debug!("converted to {} postfix tokens", output.len());
    Ok(output)
}

/// Moves operators from the stack to the output while they bind at least as
/// tightly as the incoming operator (strictly tighter for right-associative
/// ones). Stops at a parenthesis.
fn pop_while_binding(incoming: OperatorInfo, operators: &mut Vec<Token>, output: &mut Vec<Token>) {
    while let Some(top) = operators.last().and_then(Token::operator_info) {
        if !yields_to(incoming, top) {
            break;
        }
        if let Some(op) = operators.pop() {
            output.push(op);
        }
    }
}

/// Returns `true` if an operator already on the stack (`top`) must be emitted
/// before `incoming` is pushed.
const fn yields_to(incoming: OperatorInfo, top: OperatorInfo) -> bool {
    match incoming.associativity {
        Associativity::Left => incoming.precedence <= top.precedence,
        Associativity::Right => incoming.precedence < top.precedence,
    }
}

/// Handles a `)`: emits operators back to the matching `(` and discards it.
///
/// # Errors
/// `UnmatchedClosingParen` if the stack runs out before a `(` is found.
fn close_group(operators: &mut Vec<Token>,
               output: &mut Vec<Token>,
               index: usize)
               -> ParseResult<()> {
    while let Some(top) = operators.pop() {
        if top == Token::LeftParen {
            return Ok(());
        }
        output.push(top);
    }

    Err(SyntaxError::UnmatchedClosingParen { token: index })
}
