//! Format Go files and fail if any were rewritten.

use std::path::PathBuf;

use clap::Parser;

use stdlib_hooks::cli;
use stdlib_hooks::config::Config;
use stdlib_hooks::gofmt;
use stdlib_hooks::runner::SystemRunner;

#[derive(Parser)]
#[command(name = "gofmt-hook")]
#[command(about = "Run gofmt over the given files and fail if any were reformatted")]
#[command(version)]
struct Args {
    /// Config file (defaults to .stdlib-hooks.toml, then ~/.stdlib-hooks/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Files to format
    paths: Vec<PathBuf>,
}

fn main() {
    cli::init_logging();
    let args = Args::parse();

    let result = Config::load(args.config.as_deref())
        .and_then(|config| gofmt::run(&SystemRunner, &config.formatter, &args.paths));

    std::process::exit(cli::finish(result));
}
