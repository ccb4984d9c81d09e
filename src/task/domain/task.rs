//! Task aggregate root, creation draft, and partial change set.

use super::{
    Priority, TaskDomainError, TaskId, UserId,
    schema::{self, TaskField, TaskFields, TaskValidationError},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unsaved task handed to a repository for insertion.
///
/// The draft carries caller-supplied values verbatim. Identifier,
/// completion flag and timestamps are assigned when the repository accepts
/// it through [`NewTask::into_task`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    task_name: String,
    description: String,
    priority: i32,
    tags: Vec<String>,
    user_id: UserId,
}

impl NewTask {
    /// Creates a draft with the required task fields.
    #[must_use]
    pub fn new(
        task_name: impl Into<String>,
        description: impl Into<String>,
        priority: i32,
        user_id: UserId,
    ) -> Self {
        Self {
            task_name: task_name.into(),
            description: description.into(),
            priority,
            tags: Vec::new(),
            user_id,
        }
    }

    /// Sets the task tags, preserving their order.
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = String>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    /// Returns the task name.
    #[must_use]
    pub fn task_name(&self) -> &str {
        &self.task_name
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the raw, not yet validated priority.
    #[must_use]
    pub const fn priority(&self) -> i32 {
        self.priority
    }

    /// Returns the tags.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Rejects a draft whose description is identical to its name.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DescriptionMatchesName`] on an exact,
    /// case-sensitive match.
    pub fn ensure_description_differs(&self) -> Result<(), TaskDomainError> {
        if self.description == self.task_name {
            return Err(TaskDomainError::DescriptionMatchesName);
        }
        Ok(())
    }

    /// Checks the draft against the store schema.
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError`] listing each rejected field.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        schema::validate(&TaskFields {
            task_name: &self.task_name,
            description: &self.description,
            priority: self.priority,
            user_id: self.user_id.as_str(),
        })
    }

    /// Validates the draft and materializes it as a stored task.
    ///
    /// The task starts not done, with both timestamps set to `timestamp`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError`] when the draft violates the store
    /// schema.
    pub fn into_task(self, id: TaskId, timestamp: DateTime<Utc>) -> Result<Task, TaskValidationError> {
        self.validate()?;
        let priority = Priority::new(self.priority).map_err(|err| {
            TaskValidationError::single(TaskField::Priority, err.to_string())
        })?;

        Ok(Task {
            id,
            task_name: self.task_name,
            description: self.description,
            is_done: false,
            priority,
            tags: self.tags,
            user_id: self.user_id,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }
}

/// Explicit partial update for a task.
///
/// `None` means the field was omitted and the stored value is kept.
/// `Some` replaces the stored value, including `Some(false)` for the
/// completion flag and `Some(vec![])` for tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskChanges {
    task_name: Option<String>,
    description: Option<String>,
    priority: Option<Priority>,
    is_done: Option<bool>,
    tags: Option<Vec<String>>,
}

impl TaskChanges {
    /// Creates an empty change set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the task name.
    #[must_use]
    pub fn with_task_name(mut self, task_name: impl Into<String>) -> Self {
        self.task_name = Some(task_name.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Replaces the completion flag.
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

    /// Returns `true` when no field is supplied.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.task_name.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.is_done.is_none()
            && self.tags.is_none()
    }
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    task_name: String,
    description: String,
    is_done: bool,
    priority: Priority,
    tags: Vec<String>,
    user_id: UserId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted task name.
    pub task_name: String,
    /// Persisted description.
    pub description: String,
    /// Persisted completion flag.
    pub is_done: bool,
    /// Persisted priority.
    pub priority: Priority,
    /// Persisted tags in stored order.
    pub tags: Vec<String>,
    /// Persisted owner.
    pub user_id: UserId,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            task_name: data.task_name,
            description: data.description,
            is_done: data.is_done,
            priority: data.priority,
            tags: data.tags,
            user_id: data.user_id,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task name.
    #[must_use]
    pub fn task_name(&self) -> &str {
        &self.task_name
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns `true` when the task is completed.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.is_done
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the tags in stored order.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns `true` when `user_id` owns this task.
    #[must_use]
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        self.user_id == *user_id
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Merges the supplied fields of `changes` into this task.
    ///
    /// Identifier, owner and timestamps are never touched.
    pub fn apply(&mut self, changes: TaskChanges) {
        let TaskChanges {
            task_name,
            description,
            priority,
            is_done,
            tags,
        } = changes;

        if let Some(value) = task_name {
            self.task_name = value;
        }
        if let Some(value) = description {
            self.description = value;
        }
        if let Some(value) = priority {
            self.priority = value;
        }
        if let Some(value) = is_done {
            self.is_done = value;
        }
        if let Some(value) = tags {
            self.tags = value;
        }
    }

    /// Checks the task against the store schema.
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError`] listing each rejected field.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        schema::validate(&TaskFields {
            task_name: &self.task_name,
            description: &self.description,
            priority: i32::from(self.priority),
            user_id: self.user_id.as_str(),
        })
    }

    /// Sets the latest update timestamp.
    pub const fn touch(&mut self, timestamp: DateTime<Utc>) {
        self.updated_at = timestamp;
    }
}
