//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The priority lies outside the closed range `1..=5`.
    #[error("priority {0} is outside the range 1 to 5")]
    PriorityOutOfRange(i32),

    /// The description is identical to the task name.
    #[error("Description cannot be the same as task name.")]
    DescriptionMatchesName,
}

/// Error returned while parsing a task identifier from its string form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid task identifier: {0}")]
pub struct ParseTaskIdError(pub String);
