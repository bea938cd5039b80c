//! find-cxx-flags - Output compilation flags for a source file
//!
//! Prints the command line recorded for a file in the nearest
//! compile_commands.json, so it can be compiled or analyzed directly.

mod cli;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log to stderr (stdout is for the flags)
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(EnvFilter::from_default_env(), cli.verbose)?)
        .with_writer(std::io::stderr)
        .init();

    cli::run(cli)
}

/// `-v` adds debug output for this tool on top of whatever RUST_LOG asks for
fn log_filter(base: EnvFilter, verbose: bool) -> Result<EnvFilter> {
    if verbose {
        Ok(base.add_directive("find_cxx_flags=debug".parse::<Directive>()?))
    } else {
        Ok(base)
    }
}
