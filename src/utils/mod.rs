//! Utility data structures.
//!
//! Provides:
//! - [`CommandHistory`] - Fixed-capacity command history

mod history;

pub use history::CommandHistory;
