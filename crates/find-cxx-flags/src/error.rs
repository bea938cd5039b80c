//! Errors reported while resolving compiler flags

use std::path::PathBuf;
use thiserror::Error;

/// Every way a resolution can fail. None of these are retried.
#[derive(Error, Debug)]
pub enum FlagsError {
    #[error("No compilation database found for {} (searched its parents and their build directories)", .start.display())]
    NoDatabaseFound { start: PathBuf },

    #[error("Malformed compilation database {}: {reason}", .path.display())]
    MalformedDatabase { path: PathBuf, reason: String },

    #[error("{} is not in compilation database {}", .file.display(), .database.display())]
    FileNotInDatabase { file: PathBuf, database: PathBuf },

    #[error("{} has {count} entries in compilation database {}, expected exactly one", .file.display(), .database.display())]
    AmbiguousEntry {
        file: PathBuf,
        database: PathBuf,
        count: usize,
    },

    #[error("Invalid config file {}: {reason}", .path.display())]
    Config { path: PathBuf, reason: String },
}

impl FlagsError {
    pub(crate) fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::MalformedDatabase {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
