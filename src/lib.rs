//! Pre-commit hooks.
//!
//! `gofmt-hook` rewrites unformatted Go files and fails if it had to;
//! `untracked-hook` fails when the working copy has untracked files.

pub mod check;
pub mod cli;
pub mod config;
pub mod error;
pub mod gofmt;
pub mod runner;
pub mod untracked;

pub use check::Outcome;
pub use error::Error;
