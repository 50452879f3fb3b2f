//! Command execution result type.

use crate::core::error::CommandError;
use crate::models::{FileNode, FileType, Location};

/// A change to session state requested by a command.
///
/// Commands never touch state themselves; the session applies these.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mutation {
    /// Insert a node under the folder at `location`.
    CreateNode {
        name: String,
        file_type: FileType,
        location: Location,
        children: Vec<FileNode>,
    },
    /// Replace the current location.
    ChangeLocation(Location),
}

/// Result of executing a command.
///
/// Either plain display text, or a mutation plus the text to show once it
/// has been applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandResult {
    Output(String),
    Mutate { mutation: Mutation, output: String },
}

impl CommandResult {
    /// Create a result with just output, no mutation.
    pub fn output(text: impl Into<String>) -> Self {
        Self::Output(text.into())
    }

    /// Create an empty result (no output, no mutation).
    pub fn empty() -> Self {
        Self::Output(String::new())
    }

    /// Create a result rendering a command error.
    pub fn error(err: CommandError) -> Self {
        Self::Output(err.to_string())
    }

    /// Create a mutation request with the text to display after it.
    pub fn mutate(mutation: Mutation, output: impl Into<String>) -> Self {
        Self::Mutate {
            mutation,
            output: output.into(),
        }
    }

    /// Request a location change with no output.
    pub fn navigate(location: Location) -> Self {
        Self::mutate(Mutation::ChangeLocation(location), "")
    }

    /// Display text of this result.
    pub fn text(&self) -> &str {
        match self {
            Self::Output(text) | Self::Mutate { output: text, .. } => text,
        }
    }

    /// Requested mutation, if any.
    pub fn mutation(&self) -> Option<&Mutation> {
        match self {
            Self::Output(_) => None,
            Self::Mutate { mutation, .. } => Some(mutation),
        }
    }

    pub fn into_parts(self) -> (Option<Mutation>, String) {
        match self {
            Self::Output(text) => (None, text),
            Self::Mutate { mutation, output } => (Some(mutation), output),
        }
    }
}

impl From<CommandError> for CommandResult {
    fn from(err: CommandError) -> Self {
        Self::error(err)
    }
}
