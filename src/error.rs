/// Evaluation errors.
///
/// Defines every way a single evaluation can fail: an operand that is not a
/// number, an operator code outside the supported set, a zero divisor, or a
/// one-line expression that does not have the `a op b` shape.
pub mod eval_error;
/// Console errors.
///
/// Failures of the interactive session itself, as opposed to failures of an
/// evaluation. Evaluation errors are reported to the user and recovered; only
/// I/O failures on the console streams end up here.
pub mod console_error;

pub use console_error::ConsoleError;
pub use eval_error::EvalError;
