use crate::util::num::format_number;

/// Identifies one of the two operands of an evaluation.
///
/// Used in [`crate::error::EvalError::InvalidInput`] to tell the user which
/// value was rejected.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OperandSlot {
    /// The left-hand operand.
    First,
    /// The right-hand operand.
    Second,
}

/// Represents one of the supported arithmetic operations.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// The larger of the two operands (`max`)
    Max,
    /// The smaller of the two operands (`min`)
    Min,
}

impl Operator {
    /// Every operator, in menu order.
    pub const ALL: [Self; 6] = [Self::Add, Self::Sub, Self::Mul, Self::Div, Self::Max, Self::Min];
    /// The canonical code of every operator, in menu order.
    pub const CODES: [&'static str; 6] = ["+", "-", "*", "/", "max", "min"];

    /// Returns the canonical code used to select and display this operator.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Max => "max",
            Self::Min => "min",
        }
    }

    /// Returns a human readable name of the operation.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "subtract",
            Self::Mul => "multiply",
            Self::Div => "divide",
            Self::Max => "maximum",
            Self::Min => "minimum",
        }
    }
}

impl std::fmt::Display for OperandSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let slot = match self {
            Self::First => "first",
            Self::Second => "second",
        };
        write!(f, "{slot}")
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// The raw parts of a one-line expression, borrowed from the input.
///
/// Produced by [`crate::interpreter::parser::parse_request`]. Nothing has been
/// validated yet; the evaluator decides whether the parts are acceptable.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Request<'a> {
    /// Text of the left-hand operand.
    pub first:    &'a str,
    /// Text of the operator code.
    pub operator: &'a str,
    /// Text of the right-hand operand.
    pub second:   &'a str,
}

/// A completed evaluation: the parsed operands, the operator and the result.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Evaluation {
    /// The parsed left-hand operand.
    pub first:    f64,
    /// The operation that was applied.
    pub operator: Operator,
    /// The parsed right-hand operand.
    pub second:   f64,
    /// The computed value.
    pub result:   f64,
}

impl Evaluation {
    /// Renders the evaluation as `10 / 2 = 5` or `max(3, 7) = 7`.
    ///
    /// Only the result honours `precision`; operands print in their shortest
    /// form.
    ///
    /// # Example
    /// ```
    /// use arith_eval::ast::{Evaluation, Operator};
    ///
    /// let evaluation = Evaluation { first:    10.0,
    ///                               operator: Operator::Div,
    ///                               second:   3.0,
    ///                               result:   10.0 / 3.0, };
    /// assert_eq!(evaluation.describe(Some(2)), "10 / 3 = 3.33");
    /// ```
    #[must_use]
    pub fn describe(&self, precision: Option<usize>) -> String {
        let first = format_number(self.first, None);
        let second = format_number(self.second, None);
        let result = format_number(self.result, precision);
        let operator = self.operator;

        match operator {
            Operator::Max | Operator::Min => format!("{operator}({first}, {second}) = {result}"),
            _ => format!("{first} {operator} {second} = {result}"),
        }
    }
}

impl std::fmt::Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.describe(None))
    }
}
