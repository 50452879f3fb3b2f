//! Current working location in the virtual tree.

use std::fmt;

use crate::config::{HOME_SYMBOL, PATH_SEPARATOR};

/// Absolute path from the root (`~`) to a folder, as a list of segments.
///
/// An empty list is the root. Locations are only ever replaced wholesale.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Location(Vec<String>);

impl Location {
    /// The root location (`~`).
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn new(segments: Vec<String>) -> Self {
        Self(segments)
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// New location with `segments` appended.
    pub fn join<S: AsRef<str>>(&self, segments: &[S]) -> Self {
        let mut next = self.0.clone();
        next.extend(segments.iter().map(|s| s.as_ref().to_string()));
        Self(next)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", HOME_SYMBOL)?;
        for segment in &self.0 {
            write!(f, "{}{}", PATH_SEPARATOR, segment)?;
        }
        Ok(())
    }
}

impl From<Vec<String>> for Location {
    fn from(segments: Vec<String>) -> Self {
        Self(segments)
    }
}

impl From<&[&str]> for Location {
    fn from(segments: &[&str]) -> Self {
        Self(segments.iter().map(|s| s.to_string()).collect())
    }
}
