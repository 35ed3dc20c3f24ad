//! Check outcomes and their mapping to exit codes.

use tracing::info;

use crate::error::Error;

/// Result of running a single check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing to report.
    Clean,
    /// The check found what it looks for; the report is printed verbatim.
    Violations(String),
    /// The tool itself failed for reasons unrelated to the check.
    ToolFailed { code: i32, output: String },
    /// The tool could not be used, so the check did not run.
    Skipped(String),
}

impl Outcome {
    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Clean | Outcome::Skipped(_) => 0,
            Outcome::Violations(_) => 1,
            Outcome::ToolFailed { code, .. } => *code,
        }
    }

    /// Text to print on stdout, if any.
    pub fn report(&self) -> Option<&str> {
        match self {
            Outcome::Violations(report) => Some(report),
            Outcome::ToolFailed { output, .. } => Some(output),
            Outcome::Clean | Outcome::Skipped(_) => None,
        }
    }
}

/// Outcome for a tool that could not be used at all.
pub(crate) fn skipped(error: &Error) -> Outcome {
    info!(error = %error, "Skipping check");
    Outcome::Skipped(error.to_string())
}
