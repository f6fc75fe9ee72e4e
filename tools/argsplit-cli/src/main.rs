//! `argsplit` command-line tool.
//!
//! Splits text into arguments the way a command dispatcher would see them.

mod options;
mod run;

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Once;

use options::{Options, UsageError, USAGE};

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber if `RUST_LOG` is set.
///
/// Enable with `RUST_LOG=argsplit=trace` to see every argument as it is
/// produced.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match Options::parse(&args) {
        Ok(options) => options,
        Err(UsageError::Help) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!();
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    let result = match &options.text {
        Some(text) => run::run_text(text, options.mode, &mut out, &mut err),
        None => run::run_lines(io::stdin().lock(), options.mode, &mut out, &mut err),
    };
    let result = result.and_then(|ok| out.flush().map(|()| ok));

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            let _ = writeln!(err, "error: {e}");
            ExitCode::FAILURE
        }
    }
}
