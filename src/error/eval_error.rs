use thiserror::Error;

use crate::ast::{OperandSlot, Operator};

/// Represents all errors that can occur while evaluating one request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// An operand did not parse as a finite number.
    #[error("Invalid input for the {operand} number: '{value}' is not a number.")]
    InvalidInput {
        /// Which operand failed.
        operand: OperandSlot,
        /// The offending text, trimmed.
        value:   String,
    },
    /// Division with a zero second operand.
    #[error("Cannot divide by zero")]
    DivisionByZero,
    /// The operator code is not one of the supported operations.
    #[error("Unsupported operator '{code}'. Choose one of: {}.", Operator::CODES.join(", "))]
    UnsupportedOperator {
        /// The code that was supplied.
        code: String,
    },
    /// A one-line expression did not consist of two operands and an operator.
    #[error("Malformed expression '{input}': expected three parts such as '10 / 2', found {tokens}.")]
    MalformedExpression {
        /// The expression as typed.
        input:  String,
        /// How many whitespace-separated parts were found.
        tokens: usize,
    },
}
