//! Core logic for the virtual shell.
//!
//! This module provides:
//! - [`Command`] parsing and [`execute_command`] execution
//! - [`resolve_children`] and [`exists_as_folder_path`] path resolution
//! - [`Session`], the state container that applies [`Mutation`]s
//! - [`parse_input`] for splitting raw input lines

mod commands;
pub mod error;
mod filesystem;
pub mod parser;
mod session;

pub use commands::{Command, CommandResult, Mutation, ShellSnapshot, execute_command};
pub use filesystem::{
    Resolved, build_tree, exists_as_folder_path, folder_children_mut, load_manifest,
    resolve_children,
};
pub use parser::{ParsedCommand, parse_input};
pub use session::Session;
