//! Data models for the virtual shell.
//!
//! Contains domain types for:
//! - [`FileNode`], [`FileType`] - Virtual filesystem tree
//! - [`Manifest`], [`ManifestEntry`] - Seed tree format
//! - [`Location`] - Current working folder

mod filesystem;
mod location;

pub use filesystem::{FileNode, FileType, Manifest, ManifestEntry};
pub use location::Location;
