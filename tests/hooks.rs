//! End-to-end runs of the hook binaries against fake tools.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::str::contains;
use stdlib_hooks::config::{Config, FormatterConfig, VcsConfig};
use tempfile::TempDir;

fn write_config(dir: &Path, config: &Config) -> PathBuf {
    let path = dir.join("hooks.toml");
    fs::write(&path, toml::to_string(config).unwrap()).unwrap();
    path
}

/// Formatter config that runs `script` through `sh`, with file paths as `$@`.
fn sh_formatter(script: &str) -> Config {
    Config {
        formatter: FormatterConfig {
            program: "sh".to_string(),
            args: vec!["-c".to_string(), script.to_string(), "fake-gofmt".to_string()],
        },
        vcs: VcsConfig::default(),
    }
}

/// Executable that prints `status` regardless of its arguments.
fn fake_vcs(dir: &Path, status: &str, code: i32) -> PathBuf {
    let path = dir.join("fake-git");
    let script = format!("#!/bin/sh\nprintf '%s' '{}'\nexit {}\n", status, code);
    fs::write(&path, script).unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
    path
}

fn gofmt_hook(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("gofmt-hook").unwrap();
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

fn untracked_hook(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("untracked-hook").unwrap();
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_gofmt_hook_reports_rewritten_files() {
    let temp = TempDir::new().unwrap();
    let config = write_config(
        temp.path(),
        &sh_formatter("for f in \"$@\"; do echo \"$f\"; done"),
    );

    let assert = gofmt_hook(temp.path())
        .args(["--config", config.to_str().unwrap(), "a.go", "b.go"])
        .assert();

    assert.code(1).stdout("a.go\nb.go\n");
}

#[test]
fn test_gofmt_hook_clean_run_is_silent() {
    let temp = TempDir::new().unwrap();
    let config = write_config(temp.path(), &sh_formatter("true"));

    let assert = gofmt_hook(temp.path())
        .args(["--config", config.to_str().unwrap(), "a.go"])
        .assert();

    assert.code(0).stdout("");
}

#[test]
fn test_gofmt_hook_passes_formatter_failure_through() {
    let temp = TempDir::new().unwrap();
    let config = write_config(temp.path(), &sh_formatter("echo 'syntax error' >&2; exit 3"));

    let assert = gofmt_hook(temp.path())
        .args(["--config", config.to_str().unwrap(), "bad.go"])
        .assert();

    assert.code(3).stdout("syntax error\n");
}

#[test]
fn test_gofmt_hook_missing_formatter_passes() {
    let temp = TempDir::new().unwrap();
    let mut config = Config::default();
    config.formatter.program = "stdlib-hooks-missing-formatter".to_string();
    let config = write_config(temp.path(), &config);

    let assert = gofmt_hook(temp.path())
        .args(["--config", config.to_str().unwrap(), "a.go"])
        .assert();

    assert
        .code(0)
        .stdout("")
        .stderr("");
}

#[test]
fn test_gofmt_hook_missing_config_fails() {
    let temp = TempDir::new().unwrap();

    let assert = gofmt_hook(temp.path()).args(["--config", "does-not-exist.toml"]).assert();

    assert
        .code(1)
        .stdout("")
        .stderr(contains("Config file not found"));
}

#[test]
fn test_untracked_hook_reports_untracked_files() {
    let temp = TempDir::new().unwrap();
    let vcs = fake_vcs(temp.path(), "?? foo.txt\n M bar.txt\n", 0);
    let config = Config {
        vcs: VcsConfig {
            program: vcs.to_string_lossy().into_owned(),
        },
        ..Config::default()
    };
    let config = write_config(temp.path(), &config);

    let assert = untracked_hook(temp.path())
        .args(["--config", config.to_str().unwrap()])
        .assert();

    assert.code(1).stdout("Found untracked files:\n?? foo.txt\n");
}

#[test]
fn test_gofmt_hook_missing_formatter_is_visible_with_rust_log() {
    let temp = TempDir::new().unwrap();
    let mut config = Config::default();
    config.formatter.program = "stdlib-hooks-missing-formatter".to_string();
    let config = write_config(temp.path(), &config);

    let assert = gofmt_hook(temp.path())
        .env("RUST_LOG", "stdlib_hooks=info")
        .args(["--config", config.to_str().unwrap(), "a.go"])
        .assert();

    assert
        .code(0)
        .stdout("")
        .stderr(contains("stdlib-hooks-missing-formatter"));
}

#[test]
fn test_untracked_hook_ignores_file_arguments() {
    let temp = TempDir::new().unwrap();
    let vcs = fake_vcs(temp.path(), " M bar.txt\n", 0);
    let config = Config {
        vcs: VcsConfig {
            program: vcs.to_string_lossy().into_owned(),
        },
        ..Config::default()
    };
    let config = write_config(temp.path(), &config);

    let assert = untracked_hook(temp.path())
        .args(["--config", config.to_str().unwrap(), "bar.txt"])
        .assert();

    assert.code(0).stdout("");
}

#[test]
fn test_untracked_hook_missing_vcs_passes() {
    let temp = TempDir::new().unwrap();
    let mut config = Config::default();
    config.vcs.program = "stdlib-hooks-missing-vcs".to_string();
    let config = write_config(temp.path(), &config);

    let assert = untracked_hook(temp.path())
        .args(["--config", config.to_str().unwrap()])
        .assert();

    assert.code(0).stdout("").stderr("");
}

#[test]
fn test_untracked_hook_outside_working_copy_passes() {
    let temp = TempDir::new().unwrap();
    let vcs = fake_vcs(temp.path(), "fatal: not a git repository\n", 128);
    let config = Config {
        vcs: VcsConfig {
            program: vcs.to_string_lossy().into_owned(),
        },
        ..Config::default()
    };
    let config = write_config(temp.path(), &config);

    let assert = untracked_hook(temp.path())
        .args(["--config", config.to_str().unwrap()])
        .assert();

    assert.code(0).stdout("").stderr("");
}
