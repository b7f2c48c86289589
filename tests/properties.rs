//! Property-based tests for the arithmetic core.
//!
//! Operands are generated as finite numbers and passed through their text
//! form, the same way they arrive from the console.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use arith_eval::{ast::Operator, error::EvalError, get_result};
use proptest::prelude::*;

/// Finite operands of moderate size, so sums and products stay finite.
fn operand() -> impl Strategy<Value = f64> {
    prop_oneof![-1.0e6..1.0e6_f64, (-1000_i32..1000).prop_map(f64::from)]
}

fn operator() -> impl Strategy<Value = Operator> {
    prop::sample::select(Operator::ALL.to_vec())
}

/// Text that can never be read as a number.
fn non_numeric() -> impl Strategy<Value = String> {
    prop::string::string_regex("[g-zG-Z_]{1,8}").expect("valid regex")
                                                 .prop_filter("not a float keyword", |s| {
                                                     let lower = s.to_ascii_lowercase();
                                                     !["inf", "infinity", "nan"].contains(&lower.as_str())
                                                 })
}

fn eval(a: f64, b: f64, operator: Operator) -> Result<f64, EvalError> {
    get_result(&a.to_string(), &b.to_string(), operator.code())
}

proptest! {
    #[test]
    fn division_matches_ieee_division(a in operand(), b in operand()) {
        prop_assume!(b != 0.0);
        prop_assert_eq!(eval(a, b, Operator::Div), Ok(a / b));
    }

    #[test]
    fn division_by_zero_always_fails(a in operand()) {
        prop_assert_eq!(eval(a, 0.0, Operator::Div), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn addition_is_commutative(a in operand(), b in operand()) {
        prop_assert_eq!(eval(a, b, Operator::Add), eval(b, a, Operator::Add));
    }

    #[test]
    fn maximum_and_minimum_pick_an_operand(a in operand(), b in operand()) {
        let max = eval(a, b, Operator::Max).unwrap();
        let min = eval(a, b, Operator::Min).unwrap();

        prop_assert_eq!(max, if a >= b { a } else { b });
        prop_assert_eq!(min, if a <= b { a } else { b });
        prop_assert!(min <= max);
    }

    #[test]
    fn non_numeric_operand_is_invalid_for_every_operator(text in non_numeric(),
                                                         b in operand(),
                                                         operator in operator()) {
        let b = b.to_string();
        let first = get_result(&text, &b, operator.code());
        let second = get_result(&b, &text, operator.code());

        prop_assert!(matches!(first, Err(EvalError::InvalidInput { .. })), "{first:?}");
        prop_assert!(matches!(second, Err(EvalError::InvalidInput { .. })), "{second:?}");
    }

    #[test]
    fn operator_codes_resolve_to_themselves(operator in operator()) {
        prop_assert_eq!(Operator::from_code(operator.code()), Ok(operator));
        prop_assert_eq!(Operator::from_code(operator.name()), Ok(operator));
    }
}
