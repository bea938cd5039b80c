//! Configuration
//!
//! Read from ~/.config/find-cxx-flags/config.yaml when present. Every key
//! is optional:
//!
//! ```yaml
//! database_name: compile_commands.json
//! build_dirs: [build]
//! output_compiler_path: false
//! ```

use crate::error::FlagsError;
use crate::locate::{Locator, DATABASE_FILE};
use crate::paths::Paths;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlagsConfig {
    /// File name of the compilation database
    pub database_name: String,

    /// Subdirectories checked for a database at each level, in order
    pub build_dirs: Vec<String>,

    /// Print the compiler executable unless told otherwise
    pub output_compiler_path: bool,
}

impl Default for FlagsConfig {
    fn default() -> Self {
        Self {
            database_name: DATABASE_FILE.to_string(),
            build_dirs: vec!["build".to_string()],
            output_compiler_path: false,
        }
    }
}

impl FlagsConfig {
    /// Load configuration from the default location
    pub fn load() -> Result<Self, FlagsError> {
        Self::load_from(&Paths::new().config_file())
    }

    /// Load configuration from a specific path, falling back to defaults
    /// when the file does not exist
    pub fn load_from(path: &Path) -> Result<Self, FlagsError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| FlagsError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        // An empty file deserializes to `null`
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(&content).map_err(|e| FlagsError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        if config.database_name.is_empty() {
            return Err(FlagsError::Config {
                path: path.to_path_buf(),
                reason: "database_name must not be empty".to_string(),
            });
        }

        Ok(config)
    }

    /// Build a locator from this configuration
    pub fn locator(&self) -> Locator {
        Locator::new(&self.database_name, self.build_dirs.clone())
    }
}
