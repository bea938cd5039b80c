//! Compilation database model and loading
//!
//! A compilation database is a JSON array of entries:
//!
//! ```json
//! [
//!   {
//!     "directory": "/proj/build",
//!     "file": "../src/a.cpp",
//!     "arguments": ["clang++", "-c", "../src/a.cpp"]
//!   }
//! ]
//! ```
//!
//! Each entry carries either `arguments` (already split) or `command`
//! (one shell-escaped string).

use crate::error::FlagsError;
use crate::paths::absolutize;
use crate::shell::{self, SplitError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// One compile command for one source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileEntry {
    /// Working directory the command ran in
    pub directory: String,

    /// Source file, possibly relative to `directory`
    pub file: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

impl CompileEntry {
    /// Absolute, normalized path of the source file.
    ///
    /// A relative `directory` is taken relative to `base`.
    pub fn source_path(&self, base: &Path) -> PathBuf {
        let directory = absolutize(Path::new(&self.directory), base);
        absolutize(Path::new(&self.file), &directory)
    }

    /// The command line as a list of arguments. `arguments` is used as is
    /// when present, otherwise `command` is split.
    pub fn command_line(&self) -> Result<Vec<String>, SplitError> {
        match (&self.arguments, &self.command) {
            (Some(arguments), _) => Ok(arguments.clone()),
            (None, Some(command)) => shell::split(command),
            (None, None) => Ok(Vec::new()),
        }
    }
}

/// A loaded compilation database
#[derive(Debug, Clone)]
pub struct CompilationDatabase {
    path: PathBuf,
    entries: Vec<CompileEntry>,
}

impl CompilationDatabase {
    /// Load the database file called `database_name` from `dir`
    pub fn load_from_directory(dir: &Path, database_name: &str) -> Result<Self, FlagsError> {
        Self::load(&dir.join(database_name))
    }

    /// Load a database file
    pub fn load(path: &Path) -> Result<Self, FlagsError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| FlagsError::malformed(path, format!("failed to read: {}", e)))?;

        let db = Self::from_json(path, &content)?;
        debug!("Loaded {} entries from {}", db.entries.len(), path.display());
        Ok(db)
    }

    /// Parse database content; `path` is recorded for messages and for
    /// resolving relative working directories
    pub fn from_json(path: &Path, content: &str) -> Result<Self, FlagsError> {
        let entries: Vec<CompileEntry> = serde_json::from_str(content)
            .map_err(|e| FlagsError::malformed(path, e.to_string()))?;

        for (index, entry) in entries.iter().enumerate() {
            if entry.arguments.is_none() && entry.command.is_none() {
                return Err(FlagsError::malformed(
                    path,
                    format!(
                        "entry {} for {} has neither \"arguments\" nor \"command\"",
                        index, entry.file
                    ),
                ));
            }
        }

        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory the database file lives in
    pub fn directory(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }

    pub fn entries(&self) -> &[CompileEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries whose source file is `target`.
    ///
    /// `target` must already be absolute; it is normalized here the same
    /// way the entries' paths are.
    pub fn entries_for(&self, target: &Path) -> Vec<&CompileEntry> {
        let target = absolutize(target, self.directory());
        self.entries
            .iter()
            .filter(|entry| entry.source_path(self.directory()) == target)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locate::DATABASE_FILE;
    use std::fs;
    use tempfile::tempdir;

    fn parse(content: &str) -> Result<CompilationDatabase, FlagsError> {
        CompilationDatabase::from_json(Path::new("/proj/build/compile_commands.json"), content)
    }

    #[test]
    fn test_parse_arguments_and_command() {
        let db = parse(
            r#"[
                {"directory": "/proj/build", "file": "/proj/src/a.cpp",
                 "arguments": ["clang++", "-c", "/proj/src/a.cpp"]},
                {"directory": "/proj/build", "file": "../src/b.cpp",
                 "command": "clang++ -c ../src/b.cpp", "output": "b.o"}
            ]"#,
        )
        .unwrap();

        assert_eq!(db.len(), 2);
        assert_eq!(db.directory(), Path::new("/proj/build"));
        assert_eq!(
            db.entries()[1].command_line().unwrap(),
            vec!["clang++", "-c", "../src/b.cpp"]
        );
        assert_eq!(db.entries()[1].output.as_deref(), Some("b.o"));
    }

    #[test]
    fn test_arguments_preferred_over_command() {
        let db = parse(
            r#"[{"directory": "/p", "file": "a.c",
                 "arguments": ["cc", "a.c"], "command": "gcc a.c"}]"#,
        )
        .unwrap();
        assert_eq!(db.entries()[0].command_line().unwrap(), vec!["cc", "a.c"]);
    }

    #[test]
    fn test_relative_file_matches_absolute_target() {
        let db = parse(
            r#"[{"directory": "/proj/build", "file": "../src/./a.cpp",
                 "arguments": ["cc", "a.cpp"]}]"#,
        )
        .unwrap();

        assert_eq!(db.entries_for(Path::new("/proj/src/a.cpp")).len(), 1);
        assert_eq!(db.entries_for(Path::new("/proj/build/../src/a.cpp")).len(), 1);
        assert!(db.entries_for(Path::new("/proj/src/b.cpp")).is_empty());
    }

    #[test]
    fn test_relative_directory_is_under_database() {
        let db = parse(r#"[{"directory": ".", "file": "x.c", "arguments": ["cc"]}]"#).unwrap();
        assert_eq!(
            db.entries()[0].source_path(db.directory()),
            PathBuf::from("/proj/build/x.c")
        );
    }

    #[test]
    fn test_not_an_array() {
        let err = parse(r#"{"directory": "/p"}"#).unwrap_err();
        assert!(matches!(err, FlagsError::MalformedDatabase { .. }));
    }

    #[test]
    fn test_missing_required_field() {
        let err = parse(r#"[{"directory": "/p", "arguments": ["cc"]}]"#).unwrap_err();
        assert!(matches!(err, FlagsError::MalformedDatabase { .. }));
    }

    #[test]
    fn test_entry_without_command() {
        let err = parse(r#"[{"directory": "/p", "file": "a.c"}]"#).unwrap_err();
        assert!(err.to_string().contains("neither"));
    }

    #[test]
    fn test_invalid_json() {
        assert!(parse("[{").is_err());
    }

    #[test]
    fn test_empty_array_is_valid() {
        assert!(parse("[]").unwrap().is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = CompilationDatabase::load_from_directory(dir.path(), DATABASE_FILE).unwrap_err();
        assert!(matches!(err, FlagsError::MalformedDatabase { .. }));
    }

    #[test]
    fn test_load_from_directory() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("compile_commands.json"),
            r#"[{"directory": "/p", "file": "a.c", "command": "cc a.c"}]"#,
        )
        .unwrap();

        let db = CompilationDatabase::load_from_directory(dir.path(), DATABASE_FILE).unwrap();
        assert_eq!(db.len(), 1);
        assert_eq!(db.path(), dir.path().join("compile_commands.json"));
    }

    #[test]
    fn test_load_from_directory_with_other_name() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("commands.json"),
            r#"[{"directory": "/p", "file": "a.c", "arguments": ["cc", "a.c"]}]"#,
        )
        .unwrap();

        let db = CompilationDatabase::load_from_directory(dir.path(), "commands.json").unwrap();
        assert_eq!(db.len(), 1);
        assert!(CompilationDatabase::load_from_directory(dir.path(), DATABASE_FILE).is_err());
    }
}
