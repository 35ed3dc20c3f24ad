//! Formatter check.
//!
//! Runs the formatter in list-and-rewrite mode. Any file it lists has
//! already been rewritten on disk, so a non-empty listing fails the hook
//! and the next run passes.

use std::ffi::OsString;
use std::path::PathBuf;

use tracing::info;

use crate::check::{self, Outcome};
use crate::config::FormatterConfig;
use crate::error::Error;
use crate::runner::CommandRunner;

/// Run the formatter over `paths`.
///
/// An empty `paths` leaves the choice of files to the formatter.
pub fn run(
    runner: &dyn CommandRunner,
    config: &FormatterConfig,
    paths: &[PathBuf],
) -> Result<Outcome, Error> {
    let args: Vec<OsString> = config
        .args
        .iter()
        .map(OsString::from)
        .chain(paths.iter().map(|p| p.as_os_str().to_os_string()))
        .collect();

    let result = match runner.run(&config.program, &args) {
        Ok(result) => result,
        Err(e) if e.is_tool_unavailable() => return Ok(check::skipped(&e)),
        Err(e) => return Err(e),
    };

    let output = result.output.trim();
    if !result.success() {
        let code = result.code.unwrap_or(1);
        info!(program = %config.program, code, "Formatter failed");
        return Ok(Outcome::ToolFailed {
            code,
            output: output.to_string(),
        });
    }

    if output.is_empty() {
        Ok(Outcome::Clean)
    } else {
        info!(files = output.lines().count(), "Formatter rewrote files");
        Ok(Outcome::Violations(output.to_string()))
    }
}
