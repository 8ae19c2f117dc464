/// The token module defines the tokens passed between pipeline stages.
///
/// Tokens are a sum type: numbers carry their value, operators carry their
/// kind, and unary minus is distinct from binary subtraction. The module also
/// holds the fixed operator precedence and associativity table.
pub mod token;
/// The lexer module tokenizes expression text.
///
/// The lexer reads the raw text and produces a flat sequence of tokens,
/// deciding for each `-` and `+` whether it is a prefix sign or a binary
/// operator.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Validates number literals.
/// - Reports unknown characters with their position.
pub mod lexer;
/// The parser module reorders tokens from infix to postfix.
///
/// Implements the shunting-yard algorithm, resolving precedence,
/// associativity and parenthesis nesting.
///
/// # Responsibilities
/// - Produces tokens in Reverse Polish order.
/// - Reports unbalanced parentheses.
pub mod parser;
/// The evaluator module computes the value of a postfix sequence.
///
/// The evaluator runs a single pass over postfix tokens with a value stack and
/// records a human-readable trace of every step.
///
/// # Responsibilities
/// - Applies unary and binary operators.
/// - Reports missing or leftover operands, division by zero and math domain
///   errors.
pub mod evaluator;
