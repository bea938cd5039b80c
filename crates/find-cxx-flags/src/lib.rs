//! find-cxx-flags - compiler flags for a single source file
//!
//! Finds the `compile_commands.json` that applies to a source file by
//! walking up from it (checking each directory and its `build`
//! subdirectory), then pulls that file's exact command line out of the
//! database. Editors, linters and one-off compiler runs can then build the
//! file the same way the real build does.

pub mod config;
pub mod database;
pub mod error;
pub mod locate;
pub mod paths;
pub mod resolve;
pub mod shell;

pub use config::FlagsConfig;
pub use database::{CompilationDatabase, CompileEntry};
pub use error::FlagsError;
pub use locate::{locate, Locator, DATABASE_FILE};
pub use resolve::{resolve, resolve_in, ArgumentList};
