//! Untracked file check.

use std::ffi::OsString;

use tracing::info;

use crate::check::{self, Outcome};
use crate::config::VcsConfig;
use crate::error::Error;
use crate::runner::CommandRunner;

/// Porcelain status marker for untracked entries.
const UNTRACKED_MARKER: &str = "??";

const STATUS_ARGS: [&str; 4] = ["status", "-u", "--porcelain", "--no-column"];

/// Report header printed before the untracked entries.
pub const HEADER: &str = "Found untracked files:";

/// Status lines that mark untracked files, in output order.
pub fn untracked_lines(status: &str) -> Vec<&str> {
    status
        .trim()
        .lines()
        .filter(|line| line.starts_with(UNTRACKED_MARKER))
        .collect()
}

/// Check the working copy for untracked files.
pub fn run(runner: &dyn CommandRunner, config: &VcsConfig) -> Result<Outcome, Error> {
    let args: Vec<OsString> = STATUS_ARGS.iter().map(OsString::from).collect();

    let result = match runner.run(&config.program, &args) {
        Ok(result) => result,
        Err(e) if e.is_tool_unavailable() => return Ok(check::skipped(&e)),
        Err(e) => return Err(e),
    };

    // Outside a working copy the status command fails; there is nothing to check.
    if !result.success() {
        info!(
            program = %config.program,
            code = ?result.code,
            output = result.output.trim(),
            "Status command failed, skipping check"
        );
        return Ok(Outcome::Skipped(result.output.trim().to_string()));
    }

    let untracked = untracked_lines(&result.output);
    if untracked.is_empty() {
        return Ok(Outcome::Clean);
    }

    info!(count = untracked.len(), "Found untracked files");
    Ok(Outcome::Violations(format!(
        "{}\n{}",
        HEADER,
        untracked.join("\n")
    )))
}
