/// The evaluator module validates operands and computes results.
///
/// This is the arithmetic core: operand parsing, operator selection and the
/// six supported operations. Every function is pure and reports failures
/// through [`evaluator::EvalResult`].
///
/// # Responsibilities
/// - Parses operand text into finite numbers.
/// - Selects an operator from its code.
/// - Refuses division by zero before computing anything.
pub mod evaluator;
/// The lexer module tokenizes one line of user input.
///
/// Operator codes such as `+` or `max` become operator tokens; every other
/// whitespace-delimited run becomes a word.
pub mod lexer;
/// The parser module splits a one-line expression into its parts.
///
/// It accepts `a op b` and `op a b` and leaves validation to the evaluator.
pub mod parser;

use crate::{ast::Evaluation, interpreter::evaluator::EvalResult};

/// Parses and evaluates a one-line expression such as `10 / 2`.
///
/// # Errors
/// Returns [`crate::error::EvalError::MalformedExpression`] if the line does
/// not have three parts, otherwise any error of
/// [`evaluator::evaluate`].
pub fn evaluate_line(line: &str) -> EvalResult<Evaluation> {
    let request = parser::parse_request(line)?;
    evaluator::evaluate_request(&request)
}
