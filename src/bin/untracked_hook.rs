//! Fail if the working copy has untracked files.

use std::path::PathBuf;

use clap::Parser;

use stdlib_hooks::cli;
use stdlib_hooks::config::Config;
use stdlib_hooks::runner::SystemRunner;
use stdlib_hooks::untracked;

#[derive(Parser)]
#[command(name = "untracked-hook")]
#[command(about = "Fail if git reports untracked files")]
#[command(version)]
struct Args {
    /// Config file (defaults to .stdlib-hooks.toml, then ~/.stdlib-hooks/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Ignored; hook managers pass staged file names
    #[arg(hide = true, value_name = "FILES")]
    _files: Vec<PathBuf>,
}

fn main() {
    cli::init_logging();
    let args = Args::parse();

    let result = Config::load(args.config.as_deref())
        .and_then(|config| untracked::run(&SystemRunner, &config.vcs));

    std::process::exit(cli::finish(result));
}
