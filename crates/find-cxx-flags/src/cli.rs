//! CLI definition and handler

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

use find_cxx_flags::paths::absolutize;
use find_cxx_flags::resolve::resolve_with_name;
use find_cxx_flags::{FlagsConfig, FlagsError};

/// find-cxx-flags - Output compilation flags for a source file
#[derive(Parser)]
#[command(name = "find-cxx-flags")]
#[command(version)]
#[command(about = "Output compilation flags for selected file")]
#[command(after_help = "\
Finds the compilation database (compile_commands.json) for the selected file.
It looks in the file's directory, all of its parents, and the \"build\"
subdirectory of each of those. When it finds one, it prints the compilation
flags recorded for the file, so you can run the compiler on it directly.

EXAMPLES:
    find-cxx-flags src/main.cpp        -I/my/includes src/main.cpp
    find-cxx-flags -f src/main.cpp     /usr/bin/clang++ -I/my/includes src/main.cpp
    find-cxx-flags --no-output-compiler-path src/main.cpp
                                       (overrides output_compiler_path in the config)
    clang++ -fsyntax-only $(find-cxx-flags src/main.cpp)")]
pub struct Cli {
    /// Source file to print flags for
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Show compiler path
    #[arg(short = 'f', long, overrides_with = "no_output_compiler_path")]
    pub output_compiler_path: bool,

    /// Hide compiler path, even when the config turns it on
    #[arg(long, overrides_with = "output_compiler_path")]
    pub no_output_compiler_path: bool,

    /// Directory containing the compilation database (skips the search)
    #[arg(short = 'p', long, value_name = "DIR")]
    pub database: Option<PathBuf>,

    /// Config file (default: ~/.config/find-cxx-flags/config.yaml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output the arguments as a JSON array
    #[arg(long)]
    pub json: bool,

    /// Log the search to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Whether to print the compiler. The last of `-f` and
    /// `--no-output-compiler-path` wins; without either the config decides.
    pub fn include_compiler(&self, config_default: bool) -> bool {
        if self.output_compiler_path {
            true
        } else if self.no_output_compiler_path {
            false
        } else {
            config_default
        }
    }
}

/// Run the CLI
pub fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => FlagsConfig::load_from(path)?,
        None => FlagsConfig::load()?,
    };

    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let target = absolutize(&cli.file, &cwd);

    let database_dir = match &cli.database {
        Some(dir) => absolutize(dir, &cwd),
        None => config
            .locator()
            .locate(&target)
            .ok_or_else(|| FlagsError::NoDatabaseFound {
                start: target.clone(),
            })?,
    };
    tracing::debug!("Using compilation database in {}", database_dir.display());

    let arguments = resolve_with_name(&database_dir, &config.database_name, &target)?;
    let include_compiler = cli.include_compiler(config.output_compiler_path);

    let mut stdout = std::io::stdout().lock();
    if cli.json {
        let json = serde_json::to_string(arguments.selected(include_compiler))
            .context("Failed to serialize arguments")?;
        writeln!(stdout, "{}", json)?;
    } else {
        write!(stdout, "{}", arguments.format(include_compiler))?;
    }
    stdout.flush()?;

    Ok(())
}
