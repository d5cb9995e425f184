//! Error types for zetamac-core.

use thiserror::Error;

/// Result type alias using QuestionError.
pub type Result<T> = std::result::Result<T, QuestionError>;

/// Errors that can occur while generating a question.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionError {
    #[error("invalid difficulty: {0}")]
    InvalidDifficulty(String),

    #[error("no valid ops provided")]
    NoValidOperators,

    #[error("invalid range {min}..={max}")]
    InvalidRange { min: i64, max: i64 },
}
