use crate::{
    ast::Request,
    error::EvalError,
    interpreter::{evaluator::EvalResult, lexer::tokenize},
};

/// Splits a one-line expression into its operand and operator parts.
///
/// Exactly three parts are accepted. The supported shapes are:
/// - infix, `10 / 2`, when the middle part is an operator code;
/// - prefix, `max 3 7`, when only the first part is an operator code.
///
/// Any other three-part line is read as infix and its middle part is handed
/// to the evaluator as the operator code, which rejects it with
/// [`EvalError::UnsupportedOperator`] if both operands are valid.
///
/// # Errors
/// Returns [`EvalError::MalformedExpression`] if the line does not have
/// exactly three parts.
///
/// # Example
/// ```
/// use arith_eval::interpreter::parser::parse_request;
///
/// let request = parse_request("max 3 7").unwrap();
/// assert_eq!((request.first, request.operator, request.second), ("3", "max", "7"));
///
/// assert!(parse_request("1 +").is_err());
/// ```
pub fn parse_request(line: &str) -> EvalResult<Request<'_>> {
    let tokens = tokenize(line);

    let [(left, left_text), (middle, middle_text), (_, right_text)] = tokens[..] else {
        return Err(EvalError::MalformedExpression { input:  line.trim().to_string(),
                                                    tokens: tokens.len(), });
    };

    let request = if middle.operator().is_none() && left.operator().is_some() {
        Request { first:    middle_text,
                  operator: left_text,
                  second:   right_text, }
    } else {
        Request { first:    left_text,
                  operator: middle_text,
                  second:   right_text, }
    };

    Ok(request)
}
