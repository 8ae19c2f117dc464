//! # stepcalc
//!
//! stepcalc is a step-by-step arithmetic expression calculator written in
//! Rust. It tokenizes an infix expression, converts it to postfix with the
//! shunting-yard algorithm, and evaluates the postfix sequence while recording
//! every stack operation.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use log::debug;

use crate::{
    error::CalcError,
    interpreter::{
        evaluator::core::{Evaluation, evaluate},
        lexer::tokenize,
        parser::to_postfix,
        token::Token,
    },
    util::num::format_number,
};

/// Provides unified error types for the calculation pipeline.
///
/// This module defines the errors raised by each stage and an umbrella type
/// that callers can match on or classify by kind.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (tokenizer, converter,
///   evaluator).
/// - Attaches positions and operator names for context.
/// - Keeps division by zero distinguishable from other evaluation failures.
pub mod error;
/// Runs the three stages of a calculation.
///
/// This module ties together tokens, the tokenizer, the shunting-yard
/// converter and the postfix evaluator.
///
/// # Responsibilities
/// - Coordinates the tokenizer, converter and evaluator.
/// - Exposes each stage as a pure function.
pub mod interpreter;
/// Interactive and batch front ends.
///
/// Reads expressions line by line, prints a report for each one, and keeps
/// going after errors.
pub mod repl;
/// General utilities shared by several stages.
///
/// # Responsibilities
/// - Provide numeric tolerances.
/// - Format numbers for traces and results.
pub mod util;

/// Everything produced while calculating one expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    /// Tokens in source order.
    pub tokens:  Vec<Token>,
    /// Tokens in postfix order.
    pub postfix: Vec<Token>,
    /// The evaluation trace.
    pub steps:   Vec<String>,
    /// The final value.
    pub result:  f64,
}

impl Calculation {
    /// Returns the result formatted the same way as in the trace.
    #[must_use]
    pub fn formatted_result(&self) -> String {
        format_number(self.result)
    }
}

/// Calculates an expression and returns every intermediate product.
///
/// Runs [`tokenize`], [`to_postfix`] and [`evaluate`] in sequence. Each call
/// is independent of every other.
///
/// # Errors
/// Returns the first error raised by any stage.
///
/// # Examples
/// ```
/// use stepcalc::calculate;
///
/// let calc = calculate("2 + 3 * 4").unwrap();
/// assert_eq!(calc.formatted_result(), "14");
/// assert_eq!(calc.steps.last().unwrap(), "APPLY + to 2 and 12 -> 14");
///
/// // Unary minus binds tighter than `^`.
/// assert_eq!(calculate("-2^2").unwrap().result, 4.0);
///
/// assert!(calculate("(2 + 3").is_err());
/// ```
pub fn calculate(source: &str) -> Result<Calculation, CalcError> {
    let tokens = tokenize(source)?;
    let postfix = to_postfix(tokens.clone())?;
    let Evaluation { result, steps } = evaluate(&postfix)?;

    debug!("{source:?} = {}", format_number(result));
    Ok(Calculation { tokens,
                     postfix,
                     steps,
                     result })
}
