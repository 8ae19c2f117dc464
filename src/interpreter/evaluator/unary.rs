use crate::{
    interpreter::evaluator::core::{EvalResult, Evaluator},
    util::num::format_number,
};

impl Evaluator {
    /// Applies unary minus to the top of the stack.
    ///
    /// # Errors
    /// `MissingOperands` if the stack is empty, as in `--2` where the second
    /// `-` is binary and the first has nothing to negate yet.
    pub(super) fn apply_unary_minus(&mut self) -> EvalResult<()> {
        let [operand] = self.pop_operands::<1>("u-")?;
        let result = -operand;

        self.record(format!("APPLY unary - to {} -> {}",
                            format_number(operand),
                            format_number(result)));
        self.push(result);
        Ok(())
    }
}
