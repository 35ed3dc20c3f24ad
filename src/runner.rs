//! Subprocess execution.
//!
//! Checks never spawn processes directly. They go through [`CommandRunner`]
//! so tests can script the external tool's behavior.

use std::ffi::OsString;
use std::io::ErrorKind;
use std::process::Command;

use tracing::debug;

use crate::error::Error;

/// Captured result of a finished process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Standard output followed by standard error.
    pub output: String,
    /// Exit code, or `None` if the process was terminated by a signal.
    pub code: Option<i32>,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs an external program to completion.
///
/// Arguments are passed through byte for byte, so file names need not be UTF-8.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[OsString]) -> Result<CommandOutput, Error>;
}

/// Runs programs found on `$PATH`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[OsString]) -> Result<CommandOutput, Error> {
        debug!(program, ?args, "Running command");

        let output = match Command::new(program).args(args).output() {
            Ok(output) => output,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(Error::ToolNotFound(program.to_string()));
            }
            Err(e) => return Err(Error::Io(e)),
        };

        let mut combined = output.stdout;
        combined.extend_from_slice(&output.stderr);
        let output_text = String::from_utf8(combined).map_err(|source| Error::Decode {
            program: program.to_string(),
            source,
        })?;

        debug!(program, code = ?output.status.code(), "Command finished");

        Ok(CommandOutput {
            output: output_text,
            code: output.status.code(),
        })
    }
}
