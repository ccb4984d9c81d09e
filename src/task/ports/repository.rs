//! Repository port for task persistence and lookup.

use crate::task::domain::{NewTask, Task, TaskId, TaskValidationError, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Selection criteria for [`TaskRepository::find`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFilter {
    user_id: UserId,
    is_done: Option<bool>,
}

impl TaskFilter {
    /// Creates a filter on owner and, optionally, completion flag.
    #[must_use]
    pub const fn new(user_id: UserId, is_done: Option<bool>) -> Self {
        Self { user_id, is_done }
    }

    /// Matches every task owned by `user_id`.
    #[must_use]
    pub const fn owned_by(user_id: UserId) -> Self {
        Self {
            user_id,
            is_done: None,
        }
    }

    /// Restricts matches to the given completion flag.
    #[must_use]
    pub const fn with_is_done(mut self, is_done: bool) -> Self {
        self.is_done = Some(is_done);
        self
    }

    /// Returns the owner criterion.
    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the completion-flag criterion, if any.
    #[must_use]
    pub const fn is_done(&self) -> Option<bool> {
        self.is_done
    }

    /// Returns `true` when `task` satisfies every criterion.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        task.user_id() == &self.user_id && self.is_done.is_none_or(|done| task.is_done() == done)
    }
}

/// Task persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Validates and stores a new task, assigning its identifier and
    /// timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Validation`] when the draft violates
    /// the store schema.
    async fn insert(&self, task: NewTask) -> TaskRepositoryResult<Task>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Persists every mutable field of an existing task and refreshes its
    /// update timestamp. Last write wins.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Validation`] when the task violates the
    /// store schema or [`TaskRepositoryError::NotFound`] when it no longer
    /// exists.
    async fn save(&self, task: &Task) -> TaskRepositoryResult<Task>;

    /// Returns tasks matching `filter` in the store's natural order.
    async fn find(&self, filter: &TaskFilter) -> TaskRepositoryResult<Vec<Task>>;

    /// Removes a task.
    ///
    /// Returns `false` when no task with the identifier existed.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<bool>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The document violates the store schema.
    #[error(transparent)]
    Validation(#[from] TaskValidationError),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("{0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
