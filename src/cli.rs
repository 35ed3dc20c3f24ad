//! Shared plumbing for the hook binaries.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::check::Outcome;
use crate::error::Error;

/// Default log filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "stdlib_hooks=warn";

/// Install the stderr logger. Stdout is reserved for hook reports.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Print the report for `result` and return the process exit code.
pub fn finish(result: Result<Outcome, Error>) -> i32 {
    match result {
        Ok(outcome) => {
            if let Some(report) = outcome.report() {
                println!("{}", report);
            }
            outcome.exit_code()
        }
        Err(e) => {
            eprintln!("error: {}", e);
            1
        }
    }
}
