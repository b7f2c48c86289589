use std::io::{BufRead, Write};

use tracing::{info, warn};

use crate::{
    ast::{Evaluation, OperandSlot, Operator},
    error::{ConsoleError, EvalError},
    interpreter::{evaluate_line,
                  evaluator::{EvalResult, parse_operand}},
    util::num::format_number,
};

/// Result type used by the console.
pub type ConsoleResult<T> = Result<T, ConsoleError>;

/// Words that end a session when typed at any prompt.
pub const QUIT_WORDS: [&str; 3] = ["q", "quit", "exit"];

/// Whether a session performs one evaluation or keeps asking for more.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum SessionMode {
    /// Exit after one evaluation.
    Once,
    /// Keep evaluating until the user quits or the input ends.
    #[default]
    Loop,
}

/// What the session does after rejecting an operand or an operator code.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum RetryPolicy {
    /// Print the error and ask for the same value again.
    #[default]
    Reprompt,
    /// Print the error and end the session with a failure.
    Exit,
}

/// Settings of an interactive session.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct SessionOptions {
    /// One evaluation or many.
    pub mode:      SessionMode,
    /// Reaction to rejected input.
    pub on_error:  RetryPolicy,
    /// Fractional digits of printed results; `None` prints the shortest form.
    pub precision: Option<usize>,
}

/// What happened during a session.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Summary {
    /// Number of results printed.
    pub evaluations:      usize,
    /// Number of error messages printed.
    pub failures:         usize,
    /// Whether the session stopped because of an error rather than because
    /// it was done or the user quit.
    pub ended_with_error: bool,
}

/// Outcome of reading one value from the user.
enum Input<T> {
    Value(T),
    Quit,
    Abort,
}

/// Outcome of one evaluation round.
enum Step {
    Evaluated,
    Failed,
    Quit,
    Abort,
}

/// An interactive calculator session over arbitrary streams.
///
/// The session prompts for the first operand, the second operand and the
/// operator, then prints either the result or an error message. Errors never
/// end the process; how the session continues is controlled by
/// [`SessionOptions`].
///
/// # Example
/// ```
/// use std::io::Cursor;
///
/// use arith_eval::console::{Session, SessionMode, SessionOptions};
///
/// let options = SessionOptions { mode: SessionMode::Once,
///                                ..SessionOptions::default() };
/// let mut output = Vec::new();
/// let summary = Session::new(Cursor::new("10\n2\n/\n"), &mut output, options).run()
///                                                                         .unwrap();
///
/// assert_eq!(summary.evaluations, 1);
/// assert!(String::from_utf8(output).unwrap().contains("Result: 10 / 2 = 5"));
/// ```
pub struct Session<R, W> {
    input:   R,
    output:  W,
    options: SessionOptions,
    summary: Summary,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session reading from `input` and writing to `output`.
    pub fn new(input: R, output: W, options: SessionOptions) -> Self {
        Self { input,
               output,
               options,
               summary: Summary::default() }
    }

    /// Runs the session until it is done, the user quits or the input ends.
    ///
    /// # Errors
    /// Returns [`ConsoleError::Io`] if reading or writing the streams fails.
    pub fn run(mut self) -> ConsoleResult<Summary> {
        info!(mode = ?self.options.mode, on_error = ?self.options.on_error, "session started");

        writeln!(self.output,
                 "Two-number calculator. Operations: {}. Type 'quit' to leave.",
                 Operator::CODES.join(", "))?;

        loop {
            match self.step()? {
                Step::Evaluated => {
                    if self.options.mode == SessionMode::Once {
                        break;
                    }
                },
                Step::Failed => {
                    if self.options.mode == SessionMode::Once {
                        self.summary.ended_with_error = true;
                        break;
                    }
                },
                Step::Abort => {
                    self.summary.ended_with_error = true;
                    break;
                },
                Step::Quit => break,
            }
        }

        info!(evaluations = self.summary.evaluations,
              failures = self.summary.failures,
              "session ended");
        Ok(self.summary)
    }

    /// Reads both operands and the operator, then prints the outcome.
    fn step(&mut self) -> ConsoleResult<Step> {
        let first = match self.read_operand(OperandSlot::First)? {
            Input::Value(value) => value,
            Input::Quit => return Ok(Step::Quit),
            Input::Abort => return Ok(Step::Abort),
        };
        let second = match self.read_operand(OperandSlot::Second)? {
            Input::Value(value) => value,
            Input::Quit => return Ok(Step::Quit),
            Input::Abort => return Ok(Step::Abort),
        };
        let prompt = format!("Choose an operation ({}): ", Operator::CODES.join(", "));
        let operator = match self.read_value(&prompt, Operator::from_code)? {
            Input::Value(operator) => operator,
            Input::Quit => return Ok(Step::Quit),
            Input::Abort => return Ok(Step::Abort),
        };

        match operator.apply(first, second) {
            Ok(result) => {
                let evaluation = Evaluation { first,
                                              operator,
                                              second,
                                              result };
                writeln!(self.output,
                         "Result: {}",
                         evaluation.describe(self.options.precision))?;
                self.summary.evaluations += 1;
                Ok(Step::Evaluated)
            },
            Err(e) => {
                warn!(error = %e, "evaluation failed");
                writeln!(self.output, "{e}")?;
                self.summary.failures += 1;
                Ok(Step::Failed)
            },
        }
    }

    fn read_operand(&mut self, slot: OperandSlot) -> ConsoleResult<Input<f64>> {
        let prompt = format!("Enter the {slot} number: ");
        self.read_value(&prompt, |text| parse_operand(text, slot))
    }

    /// Prompts until `parse` accepts the answer, honouring the retry policy.
    fn read_value<T>(&mut self,
                     prompt: &str,
                     parse: impl Fn(&str) -> EvalResult<T>)
                     -> ConsoleResult<Input<T>> {
        loop {
            let Some(answer) = self.prompt(prompt)? else {
                return Ok(Input::Quit);
            };

            match parse(&answer) {
                Ok(value) => return Ok(Input::Value(value)),
                Err(e) => {
                    warn!(error = %e, "input rejected");
                    writeln!(self.output, "{e}")?;
                    self.summary.failures += 1;
                    if self.options.on_error == RetryPolicy::Exit {
                        return Ok(Input::Abort);
                    }
                },
            }
        }
    }

    /// Writes `text` and reads one line. Returns `None` at end of input or
    /// when the user types a quit word. Invalid UTF-8 is replaced rather than
    /// reported as an I/O failure.
    fn prompt(&mut self, text: &str) -> ConsoleResult<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&line);
        let answer = line.trim();
        if QUIT_WORDS.iter().any(|word| answer.eq_ignore_ascii_case(word)) {
            return Ok(None);
        }

        Ok(Some(answer.to_string()))
    }
}

/// Evaluates one expression per input line and writes one line per result.
///
/// Blank lines are skipped. A failed line prints its error message in place
/// of a value and processing continues with the next line. Bytes that are not
/// UTF-8 are replaced, so such a line fails like any other bad input.
///
/// # Errors
/// Returns [`ConsoleError::Io`] if reading or writing the streams fails.
///
/// # Example
/// ```
/// use std::io::Cursor;
///
/// use arith_eval::console::run_pipe;
///
/// let mut output = Vec::new();
/// let summary = run_pipe(Cursor::new("10 / 2\n\n3 max 7\n1 / 0\n"), &mut output, None).unwrap();
///
/// assert_eq!(String::from_utf8(output).unwrap(), "5\n7\nCannot divide by zero\n");
/// assert_eq!((summary.evaluations, summary.failures), (2, 1));
/// ```
pub fn run_pipe<R: BufRead, W: Write>(input: R,
                                      mut output: W,
                                      precision: Option<usize>)
                                      -> ConsoleResult<Summary> {
    let mut summary = Summary::default();

    for line in input.split(b'\n') {
        let line = line?;
        let line = String::from_utf8_lossy(&line);
        if line.trim().is_empty() {
            continue;
        }

        match evaluate_line(&line) {
            Ok(evaluation) => {
                writeln!(output, "{}", format_number(evaluation.result, precision))?;
                summary.evaluations += 1;
            },
            Err(e) => {
                warn!(error = %e, line = %line, "expression failed");
                writeln!(output, "{e}")?;
                summary.failures += 1;
            },
        }
    }

    summary.ended_with_error = summary.failures > 0;
    Ok(summary)
}

/// Evaluates one expression and formats its value.
///
/// # Errors
/// Any [`EvalError`] of the expression.
///
/// # Example
/// ```
/// use arith_eval::console::run_expression;
///
/// assert_eq!(run_expression("10 / 4", None).unwrap(), "2.5");
/// assert_eq!(run_expression("10 / 3", Some(2)).unwrap(), "3.33");
/// ```
pub fn run_expression(line: &str, precision: Option<usize>) -> Result<String, EvalError> {
    let evaluation = evaluate_line(line)?;
    Ok(format_number(evaluation.result, precision))
}
