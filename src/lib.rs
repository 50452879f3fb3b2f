//! In-memory virtual filesystem with a small shell interpreter.
//!
//! A [`Session`](crate::core::Session) holds a tree of [`FileNode`](crate::models::FileNode)s
//! and a current [`Location`](crate::models::Location). `pwd`, `ls`, `cd` and `mkdir`
//! are handled; `cp`, `mv`, `rm`, `rmdir` and `chmod` are recognized no-ops.
//!
//! ```
//! use vfsh::core::Session;
//!
//! let mut session = Session::default();
//! assert_eq!(session.execute("mkdir notes"), "Folder notes created");
//! assert_eq!(session.execute("cd notes"), "");
//! assert_eq!(session.execute("pwd"), "~/notes");
//! ```

pub mod config;
pub mod core;
pub mod models;
pub mod utils;
