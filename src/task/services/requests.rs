//! Request payloads accepted by [`super::TaskService`].

use crate::task::domain::{TaskId, UserId};

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    pub(super) task_name: String,
    pub(super) description: String,
    pub(super) priority: i32,
    pub(super) tags: Vec<String>,
    pub(super) user_id: UserId,
}

impl CreateTaskRequest {
    /// Creates a request with the required task fields.
    #[must_use]
    pub fn new(
        task_name: impl Into<String>,
        description: impl Into<String>,
        priority: i32,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            task_name: task_name.into(),
            description: description.into(),
            priority,
            tags: Vec::new(),
            user_id: UserId::new(user_id),
        }
    }

    /// Sets task tags.
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = String>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }
}

/// Request payload for a partial task update.
///
/// Fields left unset keep their stored values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    pub(super) task_id: TaskId,
    pub(super) user_id: UserId,
    pub(super) task_name: Option<String>,
    pub(super) description: Option<String>,
    pub(super) priority: Option<i32>,
    pub(super) is_done: Option<bool>,
    pub(super) tags: Option<Vec<String>>,
}

impl UpdateTaskRequest {
    /// Creates a request that changes nothing yet.
    #[must_use]
    pub fn new(task_id: TaskId, user_id: impl Into<String>) -> Self {
        Self {
            task_id,
            user_id: UserId::new(user_id),
            task_name: None,
            description: None,
            priority: None,
            is_done: None,
            tags: None,
        }
    }

    /// Sets a new task name.
    #[must_use]
    pub fn with_task_name(mut self, task_name: impl Into<String>) -> Self {
        self.task_name = Some(task_name.into());
        self
    }

    /// Sets a new description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets a new, not yet validated priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the completion flag.
    #[must_use]
    pub const fn with_is_done(mut self, is_done: bool) -> Self {
        self.is_done = Some(is_done);
        self
    }

    /// Replaces the tags.
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = String>) -> Self {
        self.tags = Some(tags.into_iter().collect());
        self
    }

    /// Returns the targeted task.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }
}
