//! Resolving the command line for one file

use crate::database::CompilationDatabase;
use crate::error::FlagsError;
use crate::locate::DATABASE_FILE;
use std::path::Path;
use tracing::debug;

/// The command line of one compile entry. Never empty; element 0 is the
/// compiler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentList(Vec<String>);

impl ArgumentList {
    /// `None` for an empty list
    pub fn new(arguments: Vec<String>) -> Option<Self> {
        if arguments.is_empty() {
            None
        } else {
            Some(Self(arguments))
        }
    }

    /// The compiler executable
    pub fn compiler(&self) -> &str {
        &self.0[0]
    }

    /// Everything after the compiler: flags and the source file
    pub fn flags(&self) -> &[String] {
        &self.0[1..]
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// The full list, or the list without the compiler
    pub fn selected(&self, include_compiler: bool) -> &[String] {
        if include_compiler {
            self.as_slice()
        } else {
            self.flags()
        }
    }

    /// Join the selected arguments with single spaces. Arguments are
    /// written as they are, without re-quoting.
    pub fn format(&self, include_compiler: bool) -> String {
        self.selected(include_compiler).join(" ")
    }
}

/// Resolve the command line for `target` from the database in
/// `database_dir`
pub fn resolve(database_dir: &Path, target: &Path) -> Result<ArgumentList, FlagsError> {
    resolve_with_name(database_dir, DATABASE_FILE, target)
}

/// Like [`resolve`], for a database file with a different name
pub fn resolve_with_name(
    database_dir: &Path,
    database_name: &str,
    target: &Path,
) -> Result<ArgumentList, FlagsError> {
    let db = CompilationDatabase::load_from_directory(database_dir, database_name)?;
    resolve_in(&db, target)
}

/// Find the single entry for `target` in a loaded database and return its
/// arguments unmodified.
///
/// `target` should be absolute; a relative path is taken relative to the
/// database's directory.
pub fn resolve_in(db: &CompilationDatabase, target: &Path) -> Result<ArgumentList, FlagsError> {
    let matches = db.entries_for(target);
    debug!(
        "{} of {} entries match {}",
        matches.len(),
        db.len(),
        target.display()
    );

    let entry = match matches.as_slice() {
        [entry] => *entry,
        [] => {
            return Err(FlagsError::FileNotInDatabase {
                file: target.to_path_buf(),
                database: db.path().to_path_buf(),
            })
        }
        many => {
            return Err(FlagsError::AmbiguousEntry {
                file: target.to_path_buf(),
                database: db.path().to_path_buf(),
                count: many.len(),
            })
        }
    };

    debug!(
        "Selected entry run in {} (output: {})",
        entry.directory,
        entry.output.as_deref().unwrap_or("none")
    );

    let arguments = entry.command_line().map_err(|e| {
        FlagsError::malformed(db.path(), format!("command for {}: {}", entry.file, e))
    })?;

    ArgumentList::new(arguments).ok_or_else(|| {
        FlagsError::malformed(db.path(), format!("empty command for {}", entry.file))
    })
}
