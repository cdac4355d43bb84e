//! Error types for recall-core.

use thiserror::Error;

/// Result type alias using ValidationError.
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Errors raised while turning user input into a word list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name is required")]
    EmptyName,

    #[error("words are required")]
    EmptyWordsText,

    #[error("at least one word required")]
    NoWords,
}

/// Errors raised when a study session cannot be set up.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("nothing to study: the word list is empty")]
    EmptyTargetSet,
}
