use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator, ensure_finite},
        token::BinaryOperator,
    },
    util::num::{format_number, is_zero},
};

impl Evaluator {
    /// Pops two operands, applies `op` and pushes the result.
    ///
    /// The value pushed last is the right operand.
    ///
    /// # Errors
    /// `MissingOperands` with fewer than two values on the stack, plus any
    /// arithmetic error from [`Evaluator::eval_binary`].
    pub(super) fn apply_binary(&mut self, op: BinaryOperator) -> EvalResult<()> {
        let [left, right] = self.pop_operands::<2>(op)?;
        let result = Self::eval_binary(op, left, right)?;

        self.record(format!("APPLY {op} to {} and {} -> {}",
                            format_number(left),
                            format_number(right),
                            format_number(result)));
        self.push(result);
        Ok(())
    }

    /// Computes `left op right`.
    ///
    /// # Errors
    /// - `DivisionByZero` if `op` is `/` and `right` is within the zero
    ///   tolerance.
    /// - `Domain` if the result is not a finite number, such as a product
    ///   beyond the largest `f64`, and from [`Evaluator::eval_pow`].
    ///
    /// # Example
    /// ```
    /// use stepcalc::interpreter::{evaluator::core::Evaluator, token::BinaryOperator};
    ///
    /// assert_eq!(Evaluator::eval_binary(BinaryOperator::Sub, 7.0, 2.0).unwrap(), 5.0);
    /// assert!(Evaluator::eval_binary(BinaryOperator::Div, 1.0, 1e-13).is_err());
    /// assert!(Evaluator::eval_binary(BinaryOperator::Mul, f64::MAX, 10.0).is_err());
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> EvalResult<f64> {
        let result = match op {
            BinaryOperator::Add => left + right,
            BinaryOperator::Sub => left - right,
            BinaryOperator::Mul => left * right,
            BinaryOperator::Div => {
                if is_zero(right) {
                    return Err(EvalError::DivisionByZero);
                }
                left / right
            },
            BinaryOperator::Pow => return Self::eval_pow(left, right),
        };

        ensure_finite(result, || {
            format!("{} {op} {} is out of range",
                    format_number(left),
                    format_number(right))
        })
    }

    /// Evaluates `base ^ exponent` over the reals.
    ///
    /// A negative base with a fractional exponent, or zero raised to a
    /// negative power, has no real result. A power that overflows is out of
    /// range.
    ///
    /// # Errors
    /// `Domain` in the cases above.
    ///
    /// # Example
    /// ```
    /// use stepcalc::interpreter::evaluator::core::Evaluator;
    ///
    /// assert_eq!(Evaluator::eval_pow(2.0, 10.0).unwrap(), 1024.0);
    /// assert_eq!(Evaluator::eval_pow(4.0, 0.5).unwrap(), 2.0);
    /// assert!(Evaluator::eval_pow(-8.0, 0.5).is_err());
    /// assert!(Evaluator::eval_pow(0.0, -1.0).is_err());
    /// assert!(Evaluator::eval_pow(10.0, 400.0).is_err());
    /// ```
    pub fn eval_pow(base: f64, exponent: f64) -> EvalResult<f64> {
        let result = base.powf(exponent);

        if result.is_nan() {
            return Err(EvalError::Domain { details: format!("{} ^ {} is not a real number",
                                                            format_number(base),
                                                            format_number(exponent)) });
        }
        if result.is_infinite() {
            let details = if base == 0.0 {
                format!("0 cannot be raised to the negative power {}",
                        format_number(exponent))
            } else {
                format!("{} ^ {} is out of range",
                        format_number(base),
                        format_number(exponent))
            };
            return Err(EvalError::Domain { details });
        }

        Ok(result)
    }
}
