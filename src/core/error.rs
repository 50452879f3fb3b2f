//! Error types for the shell.
//!
//! - [`CommandError`] - User-facing command failures, rendered as output text
//! - [`ApplyError`] - A mutation that cannot be applied to the session tree
//! - [`ManifestError`] - Seed manifest loading failures
//! - [`ConfigError`] - Settings file failures

use std::path::PathBuf;

use thiserror::Error;

/// Command failures. The `Display` text is what the user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Wrong argument count or shape
    #[error("Invalid command argument")]
    InvalidArgument,
    /// `cd` target is not an existing folder
    #[error("This is not a directory")]
    NotADirectory,
    /// `ls` has nothing to show
    #[error("Empty folder")]
    EmptyFolder,
    /// `mkdir` name is taken by a sibling
    #[error("Folder already exists")]
    AlreadyExists,
}

/// Failures applying a [`Mutation`](crate::core::Mutation) to a session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplyError {
    #[error("location not found: {0}")]
    LocationNotFound(String),
    #[error("name already taken: {0}")]
    NameTaken(String),
}

/// Seed manifest failures.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read manifest {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid manifest JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid manifest path: {0:?}")]
    InvalidPath(String),
}

/// Settings file failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("history_limit must be greater than 0")]
    InvalidHistoryLimit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_messages() {
        assert_eq!(
            CommandError::InvalidArgument.to_string(),
            "Invalid command argument"
        );
        assert_eq!(
            CommandError::NotADirectory.to_string(),
            "This is not a directory"
        );
        assert_eq!(CommandError::EmptyFolder.to_string(), "Empty folder");
        assert_eq!(
            CommandError::AlreadyExists.to_string(),
            "Folder already exists"
        );
    }

    #[test]
    fn test_apply_error_display() {
        assert_eq!(
            ApplyError::LocationNotFound("~/a".into()).to_string(),
            "location not found: ~/a"
        );
    }
}
