/// Numeric tolerances and number formatting.
///
/// Holds the zero and integrality tolerances shared by the evaluator and the
/// printer, and the formatting routine used for step traces and results.
pub mod num;
