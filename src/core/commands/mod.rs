//! Command parsing and execution.
//!
//! This module provides:
//! - `Command` enum for parsed shell commands
//! - `CommandResult` and `Mutation` for command execution results
//! - `execute_command` for running a command against a `ShellSnapshot`
//!
//! # Architecture
//!
//! Input is tokenized into a name and argument words, mapped onto the
//! `Command` enum by `Command::parse`, then executed via `execute_command`.
//! Handlers only read the snapshot; any state change comes back as a
//! `Mutation` for the caller to apply.

mod execute;
mod result;

pub use execute::execute_command;
pub use result::{CommandResult, Mutation};

use crate::config::FILE_COMMANDS;
use crate::models::{FileNode, Location};

// =============================================================================
// Snapshot
// =============================================================================

/// Read-only view of session state handed to every command.
#[derive(Clone, Copy, Debug)]
pub struct ShellSnapshot<'a> {
    /// Root-level tree
    pub files: &'a [FileNode],
    /// Current working folder
    pub location: &'a Location,
}

// =============================================================================
// Command Enum
// =============================================================================

/// Parsed shell command with its raw argument words.
///
/// Argument validation happens at execution time, per command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Pwd(Vec<String>),
    Ls(Vec<String>),
    Cd(Vec<String>),
    Mkdir(Vec<String>),
    /// Part of the vocabulary but without a handler (`cp`, `mv`, `rm`, `rmdir`, `chmod`)
    Unimplemented(String),
    Unknown(String),
}

impl Command {
    /// Get all recognized command names.
    pub fn names() -> &'static [&'static str] {
        FILE_COMMANDS
    }

    /// Parse command from name and arguments. Names are case-sensitive.
    pub fn parse(name: &str, args: &[String]) -> Self {
        match name {
            "pwd" => Self::Pwd(args.to_vec()),
            "ls" => Self::Ls(args.to_vec()),
            "cd" => Self::Cd(args.to_vec()),
            "mkdir" => Self::Mkdir(args.to_vec()),
            other if FILE_COMMANDS.contains(&other) => Self::Unimplemented(other.to_string()),
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Command name as typed.
    pub fn name(&self) -> &str {
        match self {
            Self::Pwd(_) => "pwd",
            Self::Ls(_) => "ls",
            Self::Cd(_) => "cd",
            Self::Mkdir(_) => "mkdir",
            Self::Unimplemented(name) | Self::Unknown(name) => name,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
