//! Shell session state.
//!
//! [`Session`] owns the tree, the current location and the command history.
//! Commands run against a [`ShellSnapshot`] of it; the mutation they return
//! is applied before control goes back to the caller, so the next command
//! always sees it.

use crate::config::{DEFAULT_HISTORY_LIMIT, DEFAULT_USER, ShellSettings};
use crate::core::commands::{Command, Mutation, ShellSnapshot, execute_command};
use crate::core::error::{ApplyError, ManifestError};
use crate::core::filesystem::{build_tree, folder_children_mut};
use crate::core::parser::parse_input;
use crate::models::{FileNode, Location, Manifest};
use crate::utils::CommandHistory;

/// A single interactive shell session.
#[derive(Clone, Debug)]
pub struct Session {
    files: Vec<FileNode>,
    location: Location,
    history: CommandHistory,
    user: String,
}

impl Session {
    /// Creates a session at the root of `files`.
    pub fn new(files: Vec<FileNode>) -> Self {
        Self {
            files,
            location: Location::root(),
            history: CommandHistory::new(DEFAULT_HISTORY_LIMIT),
            user: DEFAULT_USER.to_string(),
        }
    }

    /// Creates a session using prompt user and history size from settings.
    ///
    /// A zero `history_limit` falls back to the default.
    pub fn with_settings(files: Vec<FileNode>, settings: &ShellSettings) -> Self {
        let limit = if settings.history_limit == 0 {
            DEFAULT_HISTORY_LIMIT
        } else {
            settings.history_limit
        };
        Self {
            files,
            location: Location::root(),
            history: CommandHistory::new(limit),
            user: settings.user.clone(),
        }
    }

    /// Creates a session seeded from a manifest.
    pub fn from_manifest(manifest: &Manifest) -> Result<Self, ManifestError> {
        Ok(Self::new(build_tree(manifest)?))
    }

    pub fn files(&self) -> &[FileNode] {
        &self.files
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    /// Read-only view for command execution.
    pub fn snapshot(&self) -> ShellSnapshot<'_> {
        ShellSnapshot {
            files: &self.files,
            location: &self.location,
        }
    }

    /// Prompt text, e.g. `guest:~/docs$ `.
    pub fn prompt(&self) -> String {
        format!("{}:{}$ ", self.user, self.location)
    }

    /// Tokenize, record and run one input line, returning its display text.
    ///
    /// Blank lines return `""` and are not recorded.
    pub fn execute(&mut self, line: &str) -> String {
        let Some(parsed) = parse_input(line) else {
            return String::new();
        };
        self.history.push(line.trim());
        self.run(&parsed.name, &parsed.args)
    }

    /// Run an already tokenized command.
    pub fn run(&mut self, name: &str, args: &[String]) -> String {
        let cmd = Command::parse(name, args);
        let (mutation, output) = execute_command(cmd, &self.snapshot()).into_parts();

        if let Some(mutation) = mutation
            && let Err(err) = self.apply(mutation)
        {
            tracing::warn!(error = %err, "mutation rejected");
            return err.to_string();
        }

        output
    }

    /// Apply a mutation to the session.
    pub fn apply(&mut self, mutation: Mutation) -> Result<(), ApplyError> {
        match mutation {
            Mutation::CreateNode {
                name,
                file_type,
                location,
                children,
            } => {
                let siblings = folder_children_mut(location.segments(), &mut self.files)
                    .ok_or_else(|| ApplyError::LocationNotFound(location.to_string()))?;
                if siblings.iter().any(|node| node.name == name) {
                    return Err(ApplyError::NameTaken(name));
                }
                tracing::debug!(%name, %file_type, %location, "create node");
                siblings.push(FileNode {
                    name,
                    file_type,
                    children,
                });
            }
            Mutation::ChangeLocation(location) => {
                tracing::debug!(from = %self.location, to = %location, "change location");
                self.location = location;
            }
        }
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FileType;

    fn create_test_session() -> Session {
        Session::new(vec![
            FileNode::folder_with("docs", vec![FileNode::folder("x")]),
            FileNode::file("notes.txt"),
        ])
    }

    #[test]
    fn test_new_session_at_root() {
        let session = create_test_session();
        assert!(session.location().is_root());
        assert_eq!(session.user(), DEFAULT_USER);
        assert_eq!(session.prompt(), "guest:~$ ");
    }

    #[test]
    fn test_apply_change_location() {
        let mut session = create_test_session();
        session
            .apply(Mutation::ChangeLocation(Location::from(&["docs"][..])))
            .unwrap();
        assert_eq!(session.location().to_string(), "~/docs");
        assert_eq!(session.prompt(), "guest:~/docs$ ");
    }

    #[test]
    fn test_apply_create_node_appends() {
        let mut session = create_test_session();
        session
            .apply(Mutation::CreateNode {
                name: "y".into(),
                file_type: FileType::Folder,
                location: Location::from(&["docs"][..]),
                children: vec![],
            })
            .unwrap();
        let docs = &session.files()[0];
        assert_eq!(docs.children, vec![FileNode::folder("x"), FileNode::folder("y")]);
    }

    #[test]
    fn test_apply_create_node_missing_location() {
        let mut session = create_test_session();
        let err = session
            .apply(Mutation::CreateNode {
                name: "y".into(),
                file_type: FileType::Folder,
                location: Location::from(&["notes.txt"][..]),
                children: vec![],
            })
            .unwrap_err();
        assert_eq!(err, ApplyError::LocationNotFound("~/notes.txt".into()));
    }

    #[test]
    fn test_apply_create_node_name_taken() {
        let mut session = create_test_session();
        let err = session
            .apply(Mutation::CreateNode {
                name: "docs".into(),
                file_type: FileType::Folder,
                location: Location::root(),
                children: vec![],
            })
            .unwrap_err();
        assert_eq!(err, ApplyError::NameTaken("docs".into()));
    }

    #[test]
    fn test_execute_records_history() {
        let mut session = create_test_session();
        assert_eq!(session.execute("  pwd  "), "~");
        assert_eq!(session.execute(""), "");
        assert_eq!(session.execute("   "), "");
        assert_eq!(session.history().iter().collect::<Vec<_>>(), vec!["pwd"]);
    }

    #[test]
    fn test_with_settings() {
        let settings = ShellSettings {
            user: "wonjae".into(),
            history_limit: 2,
        };
        let mut session = Session::with_settings(vec![], &settings);
        for line in ["pwd", "ls", "cd"] {
            session.execute(line);
        }
        assert_eq!(session.prompt(), "wonjae:~$ ");
        assert_eq!(session.history().iter().collect::<Vec<_>>(), vec!["ls", "cd"]);
    }

    #[test]
    fn test_run_tokenized() {
        let mut session = create_test_session();
        assert_eq!(session.run("cd", &["docs/x".to_string()]), "");
        assert_eq!(session.location().segments(), &["docs", "x"]);
    }
}
