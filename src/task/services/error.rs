//! Error taxonomy surfaced by task services to the transport layer.

use crate::task::domain::TaskDomainError;
use std::fmt;
use thiserror::Error;

/// Message used when a failure carries no text of its own.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong.";

/// Message used when a query is issued without a user identifier.
pub(crate) const MISSING_USER_ID_MESSAGE: &str = "User id is required.";

/// Service operation named in wrapped failure messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskOperation {
    /// Task creation.
    Create,
    /// Task update.
    Update,
    /// Task deletion.
    Delete,
    /// Single-task lookup.
    Get,
    /// Task list queries.
    List,
}

impl TaskOperation {
    /// Returns the phrase used after `Failed to` in wrapped messages.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Create => "create task",
            Self::Update => "update task",
            Self::Delete => "delete task",
            Self::Get => "fetch task",
            Self::List => "fetch tasks",
        }
    }
}

impl fmt::Display for TaskOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Typed failure returned by every task service operation.
///
/// The `Display` output is the user-visible message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskServiceError {
    /// No task exists with the requested identifier.
    #[error("Task not found.")]
    NotFound,

    /// The caller does not own the task.
    #[error("Unauthorized.")]
    Unauthorized,

    /// A supplied priority lies outside `1..=5`.
    #[error("Priority must be between 1 and 5.")]
    InvalidPriority,

    /// Field validation failed; carries the underlying validation text.
    #[error("{0}")]
    ValidationFailed(String),

    /// Any other failure; carries a prefixed description of the cause.
    #[error("{0}")]
    OperationFailed(String),
}

impl TaskServiceError {
    /// Wraps an unexpected failure of `operation`.
    ///
    /// Produces `Failed to <operation>: <cause>`, or
    /// [`GENERIC_FAILURE_MESSAGE`] when the cause renders as blank text.
    #[must_use]
    pub fn operation_failed(operation: TaskOperation, cause: &dyn std::error::Error) -> Self {
        let message = cause.to_string();
        if message.trim().is_empty() {
            return Self::OperationFailed(GENERIC_FAILURE_MESSAGE.to_owned());
        }
        Self::OperationFailed(format!("Failed to {operation}: {message}"))
    }

    /// Returns a stable machine-readable code for the error kind.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::InvalidPriority | Self::ValidationFailed(_) => "BAD_USER_INPUT",
            Self::OperationFailed(_) => "INTERNAL_SERVER_ERROR",
        }
    }
}

impl From<TaskDomainError> for TaskServiceError {
    fn from(err: TaskDomainError) -> Self {
        match err {
            TaskDomainError::PriorityOutOfRange(_) => Self::InvalidPriority,
            TaskDomainError::DescriptionMatchesName => Self::ValidationFailed(err.to_string()),
        }
    }
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;
