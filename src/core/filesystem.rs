//! Path resolution over the virtual tree.
//!
//! All lookups walk a root-level `&[FileNode]` slice one segment at a time.
//! Names are unique among siblings, so the first match is the only match.
//!
//! # Path Convention
//!
//! - Root: empty segment list
//! - Nested folder: `["docs", "notes"]`
//! - No `.`/`..` handling; every segment is a literal name

use std::path::Path;

use crate::config::PATH_SEPARATOR;
use crate::core::error::ManifestError;
use crate::models::{FileNode, FileType, Manifest};

// =============================================================================
// Resolution
// =============================================================================

/// Outcome of resolving a folder's children.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolved<'a> {
    /// Every segment matched; holds the last node's children.
    /// A file at the end of the path resolves to an empty slice.
    Found(&'a [FileNode]),
    /// Some segment had no matching sibling.
    NotFound,
}

impl<'a> Resolved<'a> {
    /// Children of the resolved node, or an empty slice if not found.
    pub fn children(self) -> &'a [FileNode] {
        match self {
            Self::Found(children) => children,
            Self::NotFound => &[],
        }
    }

    pub fn is_found(self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Resolve the children of the node at `segments` under `files`.
///
/// An empty path resolves to `files` itself.
pub fn resolve_children<'a, S: AsRef<str>>(segments: &[S], files: &'a [FileNode]) -> Resolved<'a> {
    let mut current = files;

    for segment in segments {
        match find(current, segment.as_ref()) {
            Some(node) => current = &node.children,
            None => return Resolved::NotFound,
        }
    }

    Resolved::Found(current)
}

/// Check that every segment in order names a folder nested in the previous one.
///
/// An empty path denotes the starting folder itself and is always `true`.
pub fn exists_as_folder_path<S: AsRef<str>>(segments: &[S], files: &[FileNode]) -> bool {
    let mut current = files;

    for segment in segments {
        match find(current, segment.as_ref()) {
            Some(node) if node.is_folder() => current = &node.children,
            _ => return false,
        }
    }

    true
}

/// Mutable children of the folder at `segments`, if it exists.
pub fn folder_children_mut<'a, S: AsRef<str>>(
    segments: &[S],
    files: &'a mut Vec<FileNode>,
) -> Option<&'a mut Vec<FileNode>> {
    let mut current = files;

    for segment in segments {
        let node = current
            .iter_mut()
            .find(|node| node.name == segment.as_ref())?;
        if !node.is_folder() {
            return None;
        }
        current = &mut node.children;
    }

    Some(current)
}

fn find<'a>(files: &'a [FileNode], name: &str) -> Option<&'a FileNode> {
    files.iter().find(|node| node.name == name)
}

// =============================================================================
// Manifest Loading
// =============================================================================

/// Build a root-level tree from a manifest.
///
/// Intermediate folders are created on demand and children keep insertion
/// order. Entries blocked by an existing file, or repeating an existing path,
/// are skipped.
pub fn build_tree(manifest: &Manifest) -> Result<Vec<FileNode>, ManifestError> {
    let mut root: Vec<FileNode> = Vec::new();

    for entry in &manifest.entries {
        let parts: Vec<&str> = entry.path.split(PATH_SEPARATOR).collect();
        if parts.iter().any(|p| p.trim().is_empty()) {
            return Err(ManifestError::InvalidPath(entry.path.clone()));
        }
        insert_path(&mut root, &parts, entry.file_type, &entry.path);
    }

    Ok(root)
}

/// Read a JSON manifest from disk and build its tree.
pub fn load_manifest(path: &Path) -> Result<Vec<FileNode>, ManifestError> {
    let text = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let manifest: Manifest = serde_json::from_str(&text)?;
    build_tree(&manifest)
}

/// Insert a path into the tree using iteration instead of recursion.
fn insert_path(tree: &mut Vec<FileNode>, parts: &[&str], file_type: FileType, full_path: &str) {
    let mut current = tree;

    for (i, part) in parts.iter().enumerate() {
        let is_last = i == parts.len() - 1;
        let position = current.iter().position(|node| node.name == *part);

        if is_last {
            match position {
                Some(_) => tracing::warn!(path = full_path, "manifest: duplicate entry skipped"),
                None => current.push(FileNode {
                    name: part.to_string(),
                    file_type,
                    children: Vec::new(),
                }),
            }
            return;
        }

        let index = match position {
            Some(index) => index,
            None => {
                current.push(FileNode::folder(*part));
                current.len() - 1
            }
        };

        let node = &mut current[index];
        if !node.is_folder() {
            tracing::warn!(
                path = full_path,
                blocker = part,
                "manifest: entry blocked by existing file"
            );
            return;
        }
        current = &mut node.children;
    }
}
