//! # arith-eval
//!
//! arith-eval is a small console calculator written in Rust.
//! It reads two operands and an operator, validates both operands before
//! computing anything, and reports a result or a descriptive error instead of
//! aborting on bad input.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the values that flow through an evaluation.
///
/// This module declares the operators, the operand slots used in error
/// reports, the raw parts of a one-line expression, and the record of a
/// completed evaluation.
pub mod ast;
/// Drives an interactive calculator session.
///
/// This module prompts for operands and an operator, prints results and error
/// messages, and decides whether to ask again, continue or stop. It works on
/// any `BufRead`/`Write` pair so sessions can be replayed in tests.
///
/// # Responsibilities
/// - Prompts for each value and re-prompts or stops according to the policy.
/// - Prints "Cannot divide by zero" instead of failing.
/// - Evaluates expression lines in pipe mode.
pub mod console;
/// Provides the error types for evaluation and for the console.
///
/// Evaluation errors are values the user caused and can recover from. Console
/// errors are I/O failures of the streams the session talks to.
pub mod error;
/// Turns user text into results.
///
/// This module ties together the lexer, the line parser and the evaluator.
///
/// # Responsibilities
/// - Recognizes operator codes.
/// - Splits one-line expressions into operands and operator.
/// - Validates operands and computes the requested operation.
pub mod interpreter;
/// General utilities for parsing and printing numbers.
pub mod util;

pub use interpreter::evaluate_line;

use crate::interpreter::evaluator::{EvalResult, evaluate};

/// Returns the result of applying `operator` to two operand strings.
///
/// This is the pure core of the calculator: operand text is parsed and
/// validated, the operator code is resolved, and the operation is applied.
/// No I/O is performed.
///
/// # Errors
/// Returns an [`error::EvalError`] if an operand is not a number, the
/// operator code is unknown, or a division has a zero divisor.
///
/// # Examples
/// ```
/// use arith_eval::{error::EvalError, get_result};
///
/// assert_eq!(get_result("10", "2", "/"), Ok(5.0));
/// assert_eq!(get_result("10", "0", "/"), Err(EvalError::DivisionByZero));
/// assert!(matches!(get_result("abc", "5", "+"), Err(EvalError::InvalidInput { .. })));
/// ```
pub fn get_result(first: &str, second: &str, operator: &str) -> EvalResult<f64> {
    evaluate(first, second, operator).map(|evaluation| evaluation.result)
}
