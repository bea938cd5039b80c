//! Finding the compilation database for a path
//!
//! Looks in the path's directory, all of its parents, and the `build`
//! subdirectory of each of those.

use std::path::{Path, PathBuf};
use tracing::debug;

/// File name of a compilation database
pub const DATABASE_FILE: &str = "compile_commands.json";

/// Upward search for the directory holding a compilation database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locator {
    database_name: String,
    build_dirs: Vec<String>,
}

impl Default for Locator {
    fn default() -> Self {
        Self::new(DATABASE_FILE, vec!["build".to_string()])
    }
}

impl Locator {
    pub fn new(database_name: &str, build_dirs: Vec<String>) -> Self {
        Self {
            database_name: database_name.to_string(),
            build_dirs,
        }
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    /// Find the directory containing the database that applies to `start`.
    ///
    /// `start` should be absolute. A file (or a path that does not exist)
    /// is collapsed to its nearest existing ancestor directory first. At
    /// each level the directory itself is checked before its build
    /// subdirectories. Returns `None` once the root has been checked.
    pub fn locate(&self, start: &Path) -> Option<PathBuf> {
        let mut current = start;
        while !current.is_dir() {
            current = current.parent()?;
        }

        loop {
            debug!("Looking for {} in {}", self.database_name, current.display());

            if current.join(&self.database_name).is_file() {
                return Some(current.to_path_buf());
            }

            for build_dir in &self.build_dirs {
                let candidate = current.join(build_dir);
                if candidate.join(&self.database_name).is_file() {
                    return Some(candidate);
                }
            }

            current = current.parent()?;
        }
    }
}

/// Find the database directory for `start` with the default layout
pub fn locate(start: &Path) -> Option<PathBuf> {
    Locator::default().locate(start)
}
