//! Error types for the library layer.

use std::fmt;

use crate::db::DbError;

/// Errors produced by the library layer: storage failures when opening local
/// state, and input validation failures.
///
/// The recipe client and favorites operations absorb failures internally;
/// these surface only from setup and validation helpers.
#[derive(Debug)]
pub enum RecipeExplorerError {
    /// The local persistence medium failed.
    Storage(DbError),
    /// User-provided input failed validation.
    InvalidInput(String),
}

impl fmt::Display for RecipeExplorerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage(e) => write!(f, "Storage error: {}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for RecipeExplorerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Storage(e) => Some(e),
            Self::InvalidInput(_) => None,
        }
    }
}

impl From<DbError> for RecipeExplorerError {
    fn from(e: DbError) -> Self {
        Self::Storage(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn display_prefixes_kind() {
        let err = RecipeExplorerError::InvalidInput("recipe id must not be empty".to_string());
        assert_eq!(err.to_string(), "Invalid input: recipe id must not be empty");
        assert!(err.source().is_none());
    }
}
