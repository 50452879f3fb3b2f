use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// File Nodes
// =============================================================================

/// Kind of a node in the virtual tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    File,
    Folder,
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Folder => write!(f, "folder"),
        }
    }
}

/// One entry in the virtual filesystem.
///
/// Nodes are owned by their parent's `children` list. Only folders carry
/// children; for files the list is always empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileNode {
    pub name: String,
    pub file_type: FileType,
    pub children: Vec<FileNode>,
}

impl FileNode {
    /// Create an empty folder.
    pub fn folder(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file_type: FileType::Folder,
            children: Vec::new(),
        }
    }

    /// Create a folder with the given children, in order.
    pub fn folder_with(name: impl Into<String>, children: Vec<FileNode>) -> Self {
        Self {
            name: name.into(),
            file_type: FileType::Folder,
            children,
        }
    }

    /// Create a file.
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file_type: FileType::File,
            children: Vec::new(),
        }
    }

    /// Check if this node is a folder.
    pub fn is_folder(&self) -> bool {
        self.file_type == FileType::Folder
    }

    /// Find a direct child by name.
    pub fn child(&self, name: &str) -> Option<&FileNode> {
        self.children.iter().find(|c| c.name == name)
    }
}

// =============================================================================
// Manifest Types
// =============================================================================

/// Seed tree loaded from a JSON manifest.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Manifest {
    /// Entries in insertion order
    #[serde(default)]
    pub entries: Vec<ManifestEntry>,
}

/// A single manifest entry, e.g. `{"path": "docs/notes", "type": "folder"}`.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ManifestEntry {
    /// Slash-separated path from the root (no `~` prefix)
    pub path: String,
    /// Node kind of the last segment
    #[serde(rename = "type")]
    pub file_type: FileType,
}

impl ManifestEntry {
    pub fn folder(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            file_type: FileType::Folder,
        }
    }

    pub fn file(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            file_type: FileType::File,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let dir = FileNode::folder_with("docs", vec![FileNode::file("a.md")]);
        assert!(dir.is_folder());
        assert_eq!(dir.children.len(), 1);
        assert!(!FileNode::file("a.md").is_folder());
        assert!(FileNode::folder("x").children.is_empty());
    }

    #[test]
    fn test_child_lookup() {
        let dir = FileNode::folder_with("docs", vec![FileNode::file("a"), FileNode::folder("b")]);
        assert_eq!(dir.child("b"), Some(&FileNode::folder("b")));
        assert!(dir.child("c").is_none());
    }

    #[test]
    fn test_manifest_deserialize() {
        let json = r#"{"entries": [
            {"path": "docs/notes", "type": "folder"},
            {"path": "readme.md", "type": "file"}
        ]}"#;
        let manifest: Manifest = serde_json::from_str(json).unwrap();
        assert_eq!(manifest.entries.len(), 2);
        assert_eq!(manifest.entries[0].file_type, FileType::Folder);
        assert_eq!(manifest.entries[1].path, "readme.md");
    }

    #[test]
    fn test_manifest_missing_entries_defaults_empty() {
        let manifest: Manifest = serde_json::from_str("{}").unwrap();
        assert!(manifest.entries.is_empty());
    }

    #[test]
    fn test_file_type_display() {
        assert_eq!(FileType::Folder.to_string(), "folder");
        assert_eq!(FileType::File.to_string(), "file");
    }
}
