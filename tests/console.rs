use std::io::Cursor;

use arith_eval::{
    console::{RetryPolicy, Session, SessionMode, SessionOptions, Summary, run_expression,
              run_pipe},
    util::num::{MAX_PRECISION, format_number},
};
use pretty_assertions::assert_eq;

fn run_session(input: impl AsRef<[u8]>, options: SessionOptions) -> (Summary, String) {
    let mut output = Vec::new();
    let summary = Session::new(Cursor::new(input), &mut output, options).run()
                                                                     .unwrap_or_else(|e| {
                                                                         panic!("Session failed: {e}")
                                                                     });
    (summary, String::from_utf8(output).expect("console output is UTF-8"))
}

fn once() -> SessionOptions {
    SessionOptions { mode: SessionMode::Once,
                     ..SessionOptions::default() }
}

#[test]
fn one_evaluation_prints_the_result() {
    let (summary, output) = run_session("10\n2\n/\n", once());

    assert!(output.contains("Enter the first number: "), "{output}");
    assert!(output.contains("Enter the second number: "), "{output}");
    assert!(output.contains("Choose an operation (+, -, *, /, max, min): "), "{output}");
    assert!(output.contains("Result: 10 / 2 = 5\n"), "{output}");
    assert_eq!(summary,
               Summary { evaluations:      1,
                         failures:         0,
                         ended_with_error: false, });
}

#[test]
fn division_by_zero_is_reported_without_stopping_the_loop() {
    let (summary, output) = run_session("10\n0\n/\n3\n7\nmax\n", SessionOptions::default());

    assert!(output.contains("Cannot divide by zero\n"), "{output}");
    assert!(output.contains("Result: max(3, 7) = 7\n"), "{output}");
    assert_eq!((summary.evaluations, summary.failures, summary.ended_with_error),
               (1, 1, false));
}

#[test]
fn division_by_zero_in_once_mode_ends_with_error() {
    let (summary, output) = run_session("10\n0\n/\n", once());

    assert!(output.contains("Cannot divide by zero"), "{output}");
    assert!(summary.ended_with_error);
    assert_eq!(summary.evaluations, 0);
}

#[test]
fn invalid_operand_is_asked_for_again() {
    let (summary, output) = run_session("abc\n3\n7\nmin\n", once());

    assert!(output.contains("'abc' is not a number"), "{output}");
    assert_eq!(output.matches("Enter the first number: ").count(), 2, "{output}");
    assert!(output.contains("Result: min(3, 7) = 3\n"), "{output}");
    assert_eq!((summary.evaluations, summary.failures, summary.ended_with_error),
               (1, 1, false));
}

#[test]
fn unsupported_operator_is_asked_for_again() {
    let (summary, output) = run_session("2\n3\n^\n*\n", once());

    assert!(output.contains("Unsupported operator '^'"), "{output}");
    assert!(output.contains("Result: 2 * 3 = 6\n"), "{output}");
    assert_eq!(summary.failures, 1);
}

#[test]
fn exit_policy_stops_at_the_first_rejected_value() {
    let options = SessionOptions { on_error: RetryPolicy::Exit,
                                   ..SessionOptions::default() };
    let (summary, output) = run_session("1\nxyz\n2\n+\n", options);

    assert!(output.contains("Invalid input for the second number: 'xyz' is not a number."),
            "{output}");
    assert!(!output.contains("Result:"), "{output}");
    assert_eq!((summary.evaluations, summary.failures, summary.ended_with_error),
               (0, 1, true));
}

#[test]
fn quit_word_and_end_of_input_end_the_loop() {
    let (summary, output) = run_session("1\n2\n+\nquit\n", SessionOptions::default());
    assert!(output.contains("Result: 1 + 2 = 3\n"), "{output}");
    assert_eq!((summary.evaluations, summary.ended_with_error), (1, false));

    let (summary, _) = run_session("4\n", SessionOptions::default());
    assert_eq!(summary, Summary::default());

    let (summary, _) = run_session("4\nQ\n", SessionOptions::default());
    assert_eq!(summary, Summary::default());
}

#[test]
fn precision_applies_to_the_result_only() {
    let options = SessionOptions { precision: Some(3),
                                   ..once() };
    let (_, output) = run_session("2\n3\n/\n", options);

    assert!(output.contains("Result: 2 / 3 = 0.667\n"), "{output}");
}

#[test]
fn pipe_mode_prints_one_line_per_expression() {
    let mut output = Vec::new();
    let input = "10 / 4\nabc + 5\n\nmin 3 7\n1 +\n";
    let summary = run_pipe(Cursor::new(input), &mut output, None).expect("pipe succeeds");
    let output = String::from_utf8(output).expect("pipe output is UTF-8");
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 4, "{output}");
    assert_eq!(lines[0], "2.5");
    assert!(lines[1].contains("'abc'"), "{output}");
    assert_eq!(lines[2], "3");
    assert!(lines[3].starts_with("Malformed expression '1 +'"), "{output}");
    assert_eq!((summary.evaluations, summary.failures, summary.ended_with_error),
               (2, 2, true));
}

#[test]
fn single_expressions_format_with_precision() {
    assert_eq!(run_expression("1 / 8", None).as_deref(), Ok("0.125"));
    assert_eq!(run_expression("1 / 8", Some(1)).as_deref(), Ok("0.1"));
    assert_eq!(run_expression("0 * -1", None).as_deref(), Ok("0"));
    assert!(run_expression("1 / 0", None).is_err());
}

#[test]
fn invalid_utf8_operand_is_asked_for_again() {
    let (summary, output) = run_session(b"\xff\n3\n7\nmax\n", once());

    assert!(output.contains("Invalid input for the first number"), "{output}");
    assert!(output.contains("Result: max(3, 7) = 7\n"), "{output}");
    assert_eq!((summary.evaluations, summary.failures, summary.ended_with_error),
               (1, 1, false));
}

#[test]
fn invalid_utf8_line_does_not_stop_the_pipe() {
    let mut output = Vec::new();
    let input: &[u8] = b"10 / 2\n\xff\xfe + 1\n3 max 7\n";
    let summary = run_pipe(Cursor::new(input), &mut output, None).expect("pipe succeeds");
    let output = String::from_utf8(output).expect("pipe output is UTF-8");
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 3, "{output}");
    assert_eq!(lines[0], "5");
    assert!(lines[1].starts_with("Invalid input for the first number"), "{output}");
    assert_eq!(lines[2], "7");
    assert_eq!((summary.evaluations, summary.failures), (2, 1));
}

#[test]
fn oversized_precision_is_capped() {
    assert_eq!(run_expression("1 + 1", Some(usize::MAX)).as_deref(),
               Ok(format!("{:.*}", MAX_PRECISION, 2.0).as_str()));
    assert_eq!(format_number(0.5, Some(70_000)), format_number(0.5, Some(MAX_PRECISION)));
}

#[test]
fn extreme_magnitudes_use_scientific_notation() {
    assert_eq!(run_expression("1e300 * 1", None).as_deref(), Ok("1e300"));
    assert_eq!(run_expression("1 / 1e7", None).as_deref(), Ok("1e-7"));
    assert_eq!(run_expression("1e16 + 0", Some(1)).as_deref(), Ok("1.0e16"));
    assert_eq!(run_expression("123456 * 10", None).as_deref(), Ok("1234560"));
}
