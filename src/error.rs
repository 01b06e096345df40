//! Error types for feathers.

use crate::cache::ItemId;
use std::fmt;

/// Result type alias for feathers operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for feathers operations.
///
/// Expected conditions (no width yet, unrenderable content, probing past the
/// last line) are not errors and never show up here. The variants below are
/// programming errors on the caller's side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid color format (e.g., malformed hex string).
    InvalidColor(String),
    /// The item id was never added, or was already removed.
    UnknownItem(ItemId),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColor(s) => write!(f, "invalid color format: {s}"),
            Self::UnknownItem(id) => write!(f, "unknown content item: {id}"),
        }
    }
}

impl std::error::Error for Error {}
