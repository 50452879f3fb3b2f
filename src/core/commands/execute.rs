//! Command execution logic.
//!
//! Contains the `execute_command` function that runs parsed commands
//! against a read-only [`ShellSnapshot`] and returns results. State changes
//! are returned as [`Mutation`]s, not applied.

use crate::config::{LIST_SEPARATOR, PATH_SEPARATOR};
use crate::core::error::CommandError;
use crate::core::filesystem::{exists_as_folder_path, resolve_children};
use crate::models::{FileType, Location};

use super::{Command, CommandResult, Mutation, ShellSnapshot};

/// Execute a parsed command against a snapshot of the session.
pub fn execute_command(cmd: Command, snapshot: &ShellSnapshot<'_>) -> CommandResult {
    tracing::debug!(command = cmd.name(), location = %snapshot.location, "execute");

    match cmd {
        Command::Pwd(args) => execute_pwd(&args, snapshot),
        Command::Ls(args) => execute_ls(&args, snapshot),
        Command::Cd(args) => execute_cd(&args, snapshot),
        Command::Mkdir(args) => execute_mkdir(&args, snapshot),
        // Recognized without a handler: silent no-op
        Command::Unimplemented(_) | Command::Unknown(_) => CommandResult::empty(),
    }
}

/// Execute `pwd` command.
fn execute_pwd(args: &[String], snapshot: &ShellSnapshot<'_>) -> CommandResult {
    if !args.is_empty() {
        return CommandError::InvalidArgument.into();
    }
    CommandResult::output(snapshot.location.to_string())
}

/// Execute `ls` command.
///
/// A missing current folder lists the same as an empty one.
fn execute_ls(args: &[String], snapshot: &ShellSnapshot<'_>) -> CommandResult {
    if !args.is_empty() {
        return CommandError::InvalidArgument.into();
    }

    let children = resolve_children(snapshot.location.segments(), snapshot.files).children();
    if children.is_empty() {
        return CommandError::EmptyFolder.into();
    }

    let names: Vec<&str> = children.iter().map(|node| node.name.as_str()).collect();
    CommandResult::output(names.join(LIST_SEPARATOR))
}

/// Execute `cd` command.
///
/// Targets are relative to the current location; `a/b` descends two levels.
/// No argument (or a blank one) returns to the root.
fn execute_cd(args: &[String], snapshot: &ShellSnapshot<'_>) -> CommandResult {
    let target = match args {
        [] => return CommandResult::navigate(Location::root()),
        [target] if target.trim().is_empty() => return CommandResult::navigate(Location::root()),
        [target] => target,
        _ => return CommandError::InvalidArgument.into(),
    };

    let segments: Vec<&str> = target.split(PATH_SEPARATOR).collect();
    let current = resolve_children(snapshot.location.segments(), snapshot.files).children();

    if exists_as_folder_path(&segments, current) {
        CommandResult::navigate(snapshot.location.join(&segments))
    } else {
        CommandError::NotADirectory.into()
    }
}

/// Execute `mkdir` command.
///
/// Exactly one name. The name must be non-blank, contain no separator and
/// not be taken by a sibling in the current folder.
fn execute_mkdir(args: &[String], snapshot: &ShellSnapshot<'_>) -> CommandResult {
    let [name] = args else {
        return CommandError::InvalidArgument.into();
    };
    if name.trim().is_empty() || name.contains(PATH_SEPARATOR) {
        return CommandError::InvalidArgument.into();
    }

    let current = resolve_children(snapshot.location.segments(), snapshot.files).children();
    if current.iter().any(|node| node.name == *name) {
        return CommandError::AlreadyExists.into();
    }

    CommandResult::mutate(
        Mutation::CreateNode {
            name: name.clone(),
            file_type: FileType::Folder,
            location: snapshot.location.clone(),
            children: Vec::new(),
        },
        format!("Folder {} created", name),
    )
}
