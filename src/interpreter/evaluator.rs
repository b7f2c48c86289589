use tracing::debug;

use crate::{
    ast::{Evaluation, OperandSlot, Operator, Request},
    error::EvalError,
    interpreter::lexer::tokenize,
    util::num::parse_finite,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Parses the text of one operand.
///
/// # Errors
/// Returns [`EvalError::InvalidInput`] naming `slot` and the trimmed text if
/// the text is not a finite number.
///
/// # Example
/// ```
/// use arith_eval::{ast::OperandSlot, error::EvalError, interpreter::evaluator::parse_operand};
///
/// assert_eq!(parse_operand("10", OperandSlot::First), Ok(10.0));
///
/// let err = parse_operand(" abc ", OperandSlot::Second).unwrap_err();
/// assert_eq!(err,
///            EvalError::InvalidInput { operand: OperandSlot::Second,
///                                      value:   "abc".to_string(), });
/// ```
pub fn parse_operand(text: &str, slot: OperandSlot) -> EvalResult<f64> {
    parse_finite(text).ok_or_else(|| EvalError::InvalidInput { operand: slot,
                                                               value:   text.trim().to_string(), })
}

impl Operator {
    /// Selects an operator by its code.
    ///
    /// Codes are the symbols `+ - * /`, `x` for multiplication, and the words
    /// `add`, `plus`, `sub`, `subtract`, `minus`, `mul`, `multiply`, `times`,
    /// `div`, `divide`, `max`, `maximum`, `min` and `minimum` in any ASCII case.
    ///
    /// # Errors
    /// Returns [`EvalError::UnsupportedOperator`] if `code` is anything else,
    /// including an empty string.
    ///
    /// # Example
    /// ```
    /// use arith_eval::ast::Operator;
    ///
    /// assert_eq!(Operator::from_code("/"), Ok(Operator::Div));
    /// assert_eq!(Operator::from_code("Maximum"), Ok(Operator::Max));
    /// assert!(Operator::from_code("^").is_err());
    /// ```
    pub fn from_code(code: &str) -> EvalResult<Self> {
        let operator = match tokenize(code)[..] {
            [(token, _)] => token.operator(),
            _ => None,
        };

        operator.ok_or_else(|| EvalError::UnsupportedOperator { code: code.trim().to_string() })
    }

    /// Applies the operator to two numbers.
    ///
    /// Maximum returns `a` when `a >= b` and minimum returns `a` when
    /// `a <= b`, so ties resolve to the first operand.
    ///
    /// # Errors
    /// Returns [`EvalError::DivisionByZero`] for a division whose divisor is
    /// zero (of either sign). Nothing is computed in that case.
    ///
    /// # Example
    /// ```
    /// use arith_eval::{ast::Operator, error::EvalError};
    ///
    /// assert_eq!(Operator::Div.apply(10.0, 2.0), Ok(5.0));
    /// assert_eq!(Operator::Div.apply(10.0, 0.0), Err(EvalError::DivisionByZero));
    /// assert_eq!(Operator::Min.apply(3.0, 7.0), Ok(3.0));
    /// ```
    pub fn apply(self, a: f64, b: f64) -> EvalResult<f64> {
        let value = match self {
            Self::Add => a + b,
            Self::Sub => a - b,
            Self::Mul => a * b,
            Self::Div => {
                if b == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                a / b
            },
            Self::Max => {
                if a >= b {
                    a
                } else {
                    b
                }
            },
            Self::Min => {
                if a <= b {
                    a
                } else {
                    b
                }
            },
        };

        Ok(value)
    }
}

/// Evaluates two operand strings and an operator code.
///
/// The first operand is validated before the second, and both before the
/// operator code, so a non-numeric operand is always reported as
/// [`EvalError::InvalidInput`] whatever the operator.
///
/// # Errors
/// Returns [`EvalError::InvalidInput`], [`EvalError::UnsupportedOperator`] or
/// [`EvalError::DivisionByZero`].
///
/// # Example
/// ```
/// use arith_eval::{ast::Operator, interpreter::evaluator::evaluate};
///
/// let evaluation = evaluate("3", "7", "max").unwrap();
/// assert_eq!(evaluation.operator, Operator::Max);
/// assert_eq!(evaluation.result, 7.0);
/// ```
pub fn evaluate(first: &str, second: &str, operator: &str) -> EvalResult<Evaluation> {
    let a = parse_operand(first, OperandSlot::First)?;
    let b = parse_operand(second, OperandSlot::Second)?;
    let operator = Operator::from_code(operator)?;
    let result = operator.apply(a, b)?;

    debug!(first = a, second = b, operator = operator.name(), result, "evaluated");

    Ok(Evaluation { first: a,
                    operator,
                    second: b,
                    result })
}

/// Evaluates a request produced by the line parser.
///
/// # Errors
/// See [`evaluate`].
pub fn evaluate_request(request: &Request<'_>) -> EvalResult<Evaluation> {
    evaluate(request.first, request.second, request.operator)
}
