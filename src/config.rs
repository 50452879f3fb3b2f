//! Shell configuration.
//!
//! Centralizes the constants used throughout the shell and the optional
//! [`Settings`] file loaded at startup.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::core::error::ConfigError;

// =============================================================================
// Path Rendering
// =============================================================================

/// Symbol for the root of the virtual tree.
pub const HOME_SYMBOL: &str = "~";

/// Separator between path segments.
pub const PATH_SEPARATOR: &str = "/";

/// Separator between names in `ls` output.
pub const LIST_SEPARATOR: &str = " | ";

// =============================================================================
// Commands
// =============================================================================

/// Recognized file command vocabulary.
///
/// `cp`, `mv`, `rm`, `rmdir` and `chmod` are recognized but have no handler.
pub const FILE_COMMANDS: &[&str] = &[
    "pwd", "cd", "ls", "cp", "mv", "rm", "mkdir", "rmdir", "chmod",
];

// =============================================================================
// Session Defaults
// =============================================================================

/// Default user name shown in the prompt.
pub const DEFAULT_USER: &str = "guest";

/// Default number of command history entries to keep.
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

// =============================================================================
// Settings File
// =============================================================================

/// Settings loaded from a TOML file.
///
/// ```toml
/// [shell]
/// user = "guest"
/// history_limit = 100
///
/// [filesystem]
/// manifest = "tree.json"
/// ```
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub shell: ShellSettings,
    pub filesystem: FilesystemSettings,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShellSettings {
    /// Prompt user name
    pub user: String,
    /// Command history capacity
    pub history_limit: usize,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            user: DEFAULT_USER.to_string(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct FilesystemSettings {
    /// Seed manifest path (JSON)
    pub manifest: Option<PathBuf>,
}

impl Settings {
    /// Parse settings from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read and parse a settings file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.shell.history_limit == 0 {
            return Err(ConfigError::InvalidHistoryLimit);
        }
        Ok(())
    }
}
