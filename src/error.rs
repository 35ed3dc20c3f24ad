//! Error types for the hooks.

use std::path::PathBuf;

use thiserror::Error;

/// Hook error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("`{0}` was not found in $PATH")]
    ToolNotFound(String),

    #[error("`{program}` produced output that is not valid UTF-8")]
    Decode {
        program: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("Config parse error: {0}")]
    ConfigParse(String),
}

impl Error {
    /// Whether this error means the tool could not be used at all.
    ///
    /// Hooks treat these as a skipped check rather than a failure.
    pub fn is_tool_unavailable(&self) -> bool {
        matches!(self, Error::ToolNotFound(_) | Error::Decode { .. })
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::ConfigParse(e.to_string())
    }
}
