use log::{debug, trace};

use crate::{
    error::EvalError,
    interpreter::token::Token,
    util::num::format_number,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// The outcome of evaluating a postfix sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// The single value left on the stack.
    pub result: f64,
    /// One human-readable line per push or operator application, in order.
    pub steps:  Vec<String>,
}

/// State of one postfix evaluation.
///
/// An `Evaluator` owns its value stack and step trace and is consumed by
/// [`Evaluator::finish`], so no state survives from one expression to the
/// next. Use [`evaluate`] unless you need to feed tokens one at a time.
#[derive(Debug, Default)]
pub struct Evaluator {
    stack: Vec<f64>,
    steps: Vec<String>,
}

impl Evaluator {
    /// Creates an evaluator with an empty stack and an empty trace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds a single postfix token.
    ///
    /// Numbers are pushed; operators pop their operands and push the result.
    ///
    /// # Errors
    /// Propagates operand and arithmetic errors. A number that is not finite is
    /// a `Domain` error. Parentheses never occur in valid postfix and are
    /// reported as `UnexpectedToken`.
    pub fn eval_token(&mut self, token: &Token) -> EvalResult<()> {
        match token {
            Token::Number(value) => {
                let value = ensure_finite(*value, || format!("{} is not a finite number",
                                                             format_number(*value)))?;
                self.push(value);
                self.record(format!("PUSH {}", format_number(value)));
                Ok(())
            },
            Token::UnaryMinus => self.apply_unary_minus(),
            Token::BinaryOp(op) => self.apply_binary(*op),
            Token::LeftParen | Token::RightParen => {
                Err(EvalError::UnexpectedToken { token: token.to_string() })
            },
        }
    }

    /// Ends the evaluation and returns the result with its trace.
    ///
    /// # Errors
    /// `LeftoverOperands` unless exactly one value is on the stack.
    pub fn finish(self) -> EvalResult<Evaluation> {
        match self.stack.as_slice() {
            [result] => Ok(Evaluation { result: *result,
                                        steps:  self.steps, }),
            rest => Err(EvalError::LeftoverOperands { remaining: rest.len() }),
        }
    }

    pub(super) fn push(&mut self, value: f64) {
        self.stack.push(value);
    }

    /// Pops `N` operands, returned in push order.
    ///
    /// # Errors
    /// `MissingOperands` naming `operator` if fewer than `N` values are on the
    /// stack. The stack is left untouched in that case.
    pub(super) fn pop_operands<const N: usize>(&mut self,
                                               operator: impl std::fmt::Display)
                                               -> EvalResult<[f64; N]> {
        let Some(start) = self.stack.len().checked_sub(N) else {
            return Err(EvalError::MissingOperands { operator: operator.to_string(),
                                                    needed:   N,
                                                    found:    self.stack.len(), });
        };

        let mut operands = [0.0; N];
        operands.copy_from_slice(&self.stack[start..]);
        self.stack.truncate(start);
        Ok(operands)
    }

    pub(super) fn record(&mut self, step: String) {
        trace!("{step}");
        self.steps.push(step);
    }
}

/// Passes `value` through if it is finite.
///
/// # Errors
/// `Domain` with the message built by `details` otherwise.
pub(super) fn ensure_finite(value: f64, details: impl FnOnce() -> String) -> EvalResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::Domain { details: details() })
    }
}

/// Evaluates a postfix token sequence.
///
/// Runs a single left-to-right pass with a fresh value stack, recording a
/// trace line for every push and every operator application. Exactly one value
/// must remain at the end.
///
/// # Parameters
/// - `postfix`: Tokens in postfix order, as produced by
///   [`to_postfix`](crate::interpreter::parser::to_postfix).
///
/// # Returns
/// The final value and the ordered step trace.
///
/// # Errors
/// - `MissingOperands` if an operator finds too few values.
/// - `DivisionByZero` if a divisor is within the zero tolerance.
/// - `Domain` if a number or result is not a finite real number.
/// - `LeftoverOperands` if zero or several values remain (this includes an
///   empty sequence).
///
/// # Example
/// ```
/// use stepcalc::interpreter::{
///     evaluator::core::evaluate,
///     token::{BinaryOperator, Token},
/// };
///
/// let postfix = [Token::Number(3.0), Token::Number(4.0), Token::BinaryOp(BinaryOperator::Add)];
/// let evaluation = evaluate(&postfix).unwrap();
///
/// assert_eq!(evaluation.result, 7.0);
/// assert_eq!(evaluation.steps, ["PUSH 3", "PUSH 4", "APPLY + to 3 and 4 -> 7"]);
///
/// assert!(evaluate(&[]).is_err());
/// ```
pub fn evaluate(postfix: &[Token]) -> EvalResult<Evaluation> {
    let mut evaluator = Evaluator::new();

    for token in postfix {
        evaluator.eval_token(token)?;
    }

    let evaluation = evaluator.finish()?;
    debug!("evaluated {} tokens in {} steps -> {}",
           postfix.len(),
           evaluation.steps.len(),
           format_number(evaluation.result));
    Ok(evaluation)
}
