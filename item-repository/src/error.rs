//! Repository error types

use thiserror::Error;

/// Errors that can occur when binding or syncing a repository.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The binding name was empty.
    #[error("Repository name must not be empty")]
    InvalidName,

    /// The selected class name was empty or contained whitespace.
    #[error("Invalid selected class name '{0}'")]
    InvalidClassName(String),

    /// Two bound elements share an ID, so they cannot be told apart.
    #[error("Bound element ID '{0}' is not unique")]
    DuplicateBoundElement(String),

    /// A pre-existing item element carried data that could not be parsed.
    #[error("Malformed item data on element '{element}': {source}")]
    MalformedItem {
        /// ID of the offending element.
        element: String,
        /// The parse error.
        source: serde_json::Error,
    },

    /// An item could not be serialized into its element snapshot.
    #[error("Failed to serialize item: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result alias for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
