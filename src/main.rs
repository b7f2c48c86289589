use std::{io, process::ExitCode};

use arith_eval::console::{RetryPolicy, Session, SessionMode, SessionOptions, run_expression,
                          run_pipe};
use clap::Parser;

/// arith-eval is a console calculator for two numbers: add, subtract,
/// multiply, divide, maximum and minimum.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates one expression such as "10 / 2" or "max 3 7" instead of
    /// prompting.
    expression: Option<String>,

    /// Exits after one evaluation instead of asking for another.
    #[arg(long)]
    once: bool,

    /// What to do after an operand or operator is rejected.
    #[arg(long, value_enum, default_value_t = RetryPolicy::Reprompt)]
    on_error: RetryPolicy,

    /// Number of fractional digits to print in results, at most 64.
    #[arg(long, value_parser = clap::value_parser!(u16).range(..=64))]
    precision: Option<u16>,

    /// Pipe mode reads one expression per line from standard input and
    /// prints one result per line.
    #[arg(short, long, conflicts_with = "expression")]
    pipe: bool,
}

/// Installs a stderr log subscriber when `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)
                                                        .with_target(true)
                                                        .with_level(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();
    let precision = args.precision.map(usize::from);

    if let Some(expression) = &args.expression {
        return match run_expression(expression, precision) {
            Ok(value) => {
                println!("{value}");
                ExitCode::SUCCESS
            },
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    }

    let input = io::stdin().lock();
    let output = io::stdout().lock();

    let outcome = if args.pipe {
        run_pipe(input, output, precision)
    } else {
        let mode = if args.once { SessionMode::Once } else { SessionMode::Loop };
        let options = SessionOptions { mode,
                                       on_error: args.on_error,
                                       precision };
        Session::new(input, output, options).run()
    };

    match outcome {
        Ok(summary) if summary.ended_with_error => ExitCode::FAILURE,
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
