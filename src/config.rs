//! Hook configuration.
//!
//! Handles loading `.stdlib-hooks.toml`. Every key is optional; a missing
//! file means built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Error;

/// Project-level config file name.
pub const PROJECT_FILE: &str = ".stdlib-hooks.toml";

/// Hook configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub formatter: FormatterConfig,

    #[serde(default)]
    pub vcs: VcsConfig,
}

/// Formatter invoked by `gofmt-hook`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormatterConfig {
    #[serde(default = "default_formatter_program")]
    pub program: String,

    /// Flags that make the formatter list and rewrite files in place.
    #[serde(default = "default_formatter_args")]
    pub args: Vec<String>,
}

/// Version control client invoked by `untracked-hook`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VcsConfig {
    #[serde(default = "default_vcs_program")]
    pub program: String,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            program: default_formatter_program(),
            args: default_formatter_args(),
        }
    }
}

impl Default for VcsConfig {
    fn default() -> Self {
        Self {
            program: default_vcs_program(),
        }
    }
}

fn default_formatter_program() -> String {
    "gofmt".to_string()
}

fn default_formatter_args() -> Vec<String> {
    vec!["-l".to_string(), "-w".to_string()]
}

fn default_vcs_program() -> String {
    "git".to_string()
}

impl Config {
    /// Load config for a hook run.
    ///
    /// An explicit path must exist. Otherwise the project file in the
    /// current directory wins over the global one, and defaults apply when
    /// neither is present.
    pub fn load(explicit: Option<&Path>) -> Result<Self, Error> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }
        let project_root = std::env::current_dir()?;
        Self::discover(&project_root, &Self::global_dir())
    }

    /// Find and load the first config file under `project_root` or `global_dir`.
    pub fn discover(project_root: &Path, global_dir: &Path) -> Result<Self, Error> {
        let candidates = [
            project_root.join(PROJECT_FILE),
            global_dir.join("config.toml"),
        ];
        for path in &candidates {
            if path.exists() {
                return Self::load_from(path);
            }
        }
        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Load config from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, Error> {
        if !path.exists() {
            return Err(Error::ConfigNotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Path to global config directory (~/.stdlib-hooks/)
    pub fn global_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".stdlib-hooks")
    }
}
