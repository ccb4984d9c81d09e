//! Service layer for task creation, update, lookup, listing and deletion.

use super::{
    CreateTaskRequest, TaskOperation, TaskServiceError, TaskServiceResult, UpdateTaskRequest,
    error::MISSING_USER_ID_MESSAGE,
};
use crate::task::{
    domain::{NewTask, Priority, Task, TaskChanges, TaskId, UserId},
    ports::{TaskFilter, TaskRepository, TaskRepositoryError},
};
use std::sync::Arc;

/// Task management orchestration service.
///
/// Each operation performs one validate-then-commit pass against the
/// repository and converts every failure into a [`TaskServiceError`]. The
/// service holds no mutable state; concurrency control is left to the
/// repository.
pub struct TaskService<R>
where
    R: TaskRepository + ?Sized,
{
    repository: Arc<R>,
}

impl<R> Clone for TaskService<R>
where
    R: TaskRepository + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> TaskService<R>
where
    R: TaskRepository + ?Sized,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a task owned by the requesting user.
    ///
    /// The description/name rule is checked before the repository is
    /// called; field presence and ranges are checked by the repository.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::ValidationFailed`] when the description
    /// equals the task name or the repository rejects the document, and
    /// [`TaskServiceError::OperationFailed`] for any other repository
    /// failure.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskServiceResult<Task> {
        let CreateTaskRequest {
            task_name,
            description,
            priority,
            tags,
            user_id,
        } = request;

        let draft = NewTask::new(task_name, description, priority, user_id).with_tags(tags);
        draft.ensure_description_differs()?;

        self.repository
            .insert(draft)
            .await
            .map_err(|err| match err {
                TaskRepositoryError::Validation(violation) => {
                    TaskServiceError::ValidationFailed(violation.to_string())
                }
                other => TaskServiceError::operation_failed(TaskOperation::Create, &other),
            })
    }

    /// Applies a partial update to a task owned by the requesting user.
    ///
    /// Steps run in order and stop at the first failure: lookup,
    /// ownership check, priority validation, merge, save. A request that
    /// supplies no fields returns the stored task without saving.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist,
    /// [`TaskServiceError::Unauthorized`] when the caller is not the owner,
    /// [`TaskServiceError::InvalidPriority`] for a priority outside `1..=5`,
    /// [`TaskServiceError::ValidationFailed`] when the merged record breaks
    /// the store rules, and [`TaskServiceError::OperationFailed`] when lookup
    /// or save fails otherwise.
    pub async fn update_task(&self, request: UpdateTaskRequest) -> TaskServiceResult<Task> {
        let UpdateTaskRequest {
            task_id,
            user_id,
            task_name,
            description,
            priority,
            is_done,
            tags,
        } = request;

        let mut task = self
            .owned_task(task_id, &user_id, TaskOperation::Update)
            .await?;

        let mut changes = TaskChanges::new();
        if let Some(value) = priority {
            changes = changes.with_priority(Priority::new(value)?);
        }
        if let Some(value) = task_name {
            changes = changes.with_task_name(value);
        }
        if let Some(value) = description {
            changes = changes.with_description(value);
        }
        if let Some(value) = is_done {
            changes = changes.with_is_done(value);
        }
        if let Some(value) = tags {
            changes = changes.with_tags(value);
        }
        if changes.is_empty() {
            return Ok(task);
        }
        task.apply(changes);

        self.repository
            .save(&task)
            .await
            .map_err(|err| match err {
                TaskRepositoryError::Validation(violation) => {
                    TaskServiceError::ValidationFailed(violation.to_string())
                }
                other => TaskServiceError::operation_failed(TaskOperation::Update, &other),
            })
    }

    /// Returns a single task owned by the requesting user.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`], [`TaskServiceError::Unauthorized`]
    /// or [`TaskServiceError::OperationFailed`] when the lookup fails.
    pub async fn get_task(&self, task_id: TaskId, user_id: &UserId) -> TaskServiceResult<Task> {
        self.owned_task(task_id, user_id, TaskOperation::Get).await
    }

    /// Deletes a task owned by the requesting user.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist or
    /// vanished before removal, [`TaskServiceError::Unauthorized`] when the
    /// caller is not the owner, and [`TaskServiceError::OperationFailed`]
    /// when the repository fails.
    pub async fn delete_task(&self, task_id: TaskId, user_id: &UserId) -> TaskServiceResult<()> {
        self.owned_task(task_id, user_id, TaskOperation::Delete)
            .await?;

        let removed = self
            .repository
            .delete(task_id)
            .await
            .map_err(|err| TaskServiceError::operation_failed(TaskOperation::Delete, &err))?;
        if !removed {
            return Err(TaskServiceError::NotFound);
        }
        Ok(())
    }

    /// Lists the user's tasks that are not done.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::ValidationFailed`] for a blank user id and
    /// [`TaskServiceError::OperationFailed`] when the query fails.
    pub async fn list_active_tasks(&self, user_id: &UserId) -> TaskServiceResult<Vec<Task>> {
        self.list(user_id, Some(false)).await
    }

    /// Lists the user's completed tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::ValidationFailed`] for a blank user id and
    /// [`TaskServiceError::OperationFailed`] when the query fails.
    pub async fn list_done_tasks(&self, user_id: &UserId) -> TaskServiceResult<Vec<Task>> {
        self.list(user_id, Some(true)).await
    }

    /// Lists every task owned by the user.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::ValidationFailed`] for a blank user id and
    /// [`TaskServiceError::OperationFailed`] when the query fails.
    pub async fn list_user_tasks(&self, user_id: &UserId) -> TaskServiceResult<Vec<Task>> {
        self.list(user_id, None).await
    }

    async fn list(&self, user_id: &UserId, is_done: Option<bool>) -> TaskServiceResult<Vec<Task>> {
        if user_id.is_blank() {
            return Err(TaskServiceError::ValidationFailed(
                MISSING_USER_ID_MESSAGE.to_owned(),
            ));
        }

        let filter = TaskFilter::new(user_id.clone(), is_done);
        self.repository
            .find(&filter)
            .await
            .map_err(|err| TaskServiceError::operation_failed(TaskOperation::List, &err))
    }

    /// Loads a task and checks that `user_id` owns it.
    async fn owned_task(
        &self,
        task_id: TaskId,
        user_id: &UserId,
        operation: TaskOperation,
    ) -> TaskServiceResult<Task> {
        let task = self
            .repository
            .find_by_id(task_id)
            .await
            .map_err(|err| TaskServiceError::operation_failed(operation, &err))?
            .ok_or(TaskServiceError::NotFound)?;

        if !task.is_owned_by(user_id) {
            return Err(TaskServiceError::Unauthorized);
        }
        Ok(task)
    }
}
