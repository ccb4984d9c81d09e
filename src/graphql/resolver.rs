//! Maps decoded operations onto the task service.

use super::{
    request::{
        AddTaskArgs, GraphQlRequest, TaskOperationRequest, TaskRefArgs, UpdateTaskArgs, UserArgs,
    },
    response::{FieldValue, GraphQlResponse},
};
use crate::task::{
    domain::{TaskId, UserId},
    ports::TaskRepository,
    services::{
        CreateTaskRequest, TaskService, TaskServiceError, TaskServiceResult, UpdateTaskRequest,
    },
};

/// Message returned by a successful `deleteTask`.
pub const TASK_DELETED_MESSAGE: &str = "Task deleted successfully";

/// Executes GraphQL operations against a [`TaskService`].
pub struct TaskResolver<R>
where
    R: TaskRepository + ?Sized,
{
    service: TaskService<R>,
}

impl<R> Clone for TaskResolver<R>
where
    R: TaskRepository + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
        }
    }
}

impl<R> TaskResolver<R>
where
    R: TaskRepository + ?Sized,
{
    /// Creates a resolver over `service`.
    #[must_use]
    pub const fn new(service: TaskService<R>) -> Self {
        Self { service }
    }

    /// Decodes and executes one request.
    ///
    /// Every failure is reported inside the returned response; this method
    /// itself cannot fail.
    pub async fn execute(&self, request: GraphQlRequest) -> GraphQlResponse {
        let operation = match TaskOperationRequest::parse(request) {
            Ok(operation) => operation,
            Err(err) => {
                tracing::warn!(error = %err, "rejected graphql request");
                return GraphQlResponse::request_error(&err);
            }
        };

        let field = operation.name();
        match self.resolve(operation).await {
            Ok(value) => {
                tracing::debug!(operation = field, "resolved graphql operation");
                GraphQlResponse::data(field, value)
            }
            Err(err) => {
                tracing::info!(
                    operation = field,
                    code = err.code(),
                    error = %err,
                    "graphql operation failed"
                );
                GraphQlResponse::field_error(field, &err)
            }
        }
    }

    async fn resolve(&self, operation: TaskOperationRequest) -> TaskServiceResult<FieldValue> {
        match operation {
            TaskOperationRequest::GetUserDoneTasks(UserArgs { user_id }) => {
                let tasks = self.service.list_done_tasks(&UserId::new(user_id)).await?;
                Ok(FieldValue::tasks(&tasks))
            }
            TaskOperationRequest::GetUserActiveTasks(UserArgs { user_id }) => {
                let tasks = self
                    .service
                    .list_active_tasks(&UserId::new(user_id))
                    .await?;
                Ok(FieldValue::tasks(&tasks))
            }
            TaskOperationRequest::GetUserTasks(UserArgs { user_id }) => {
                let tasks = self.service.list_user_tasks(&UserId::new(user_id)).await?;
                Ok(FieldValue::tasks(&tasks))
            }
            TaskOperationRequest::GetTask(TaskRefArgs { task_id, user_id }) => {
                let task = self
                    .service
                    .get_task(parse_task_id(&task_id)?, &UserId::new(user_id))
                    .await?;
                Ok(FieldValue::task(&task))
            }
            TaskOperationRequest::AddTask(args) => {
                let task = self.service.create_task(create_request(args)).await?;
                Ok(FieldValue::task(&task))
            }
            TaskOperationRequest::UpdateTask(args) => {
                let task = self.service.update_task(update_request(args)?).await?;
                Ok(FieldValue::task(&task))
            }
            TaskOperationRequest::DeleteTask(TaskRefArgs { task_id, user_id }) => {
                self.service
                    .delete_task(parse_task_id(&task_id)?, &UserId::new(user_id))
                    .await?;
                Ok(FieldValue::Message(TASK_DELETED_MESSAGE.to_owned()))
            }
        }
    }
}

/// Identifiers that cannot name a stored task resolve as missing.
fn parse_task_id(raw: &str) -> TaskServiceResult<TaskId> {
    raw.parse().map_err(|_| TaskServiceError::NotFound)
}

fn create_request(args: AddTaskArgs) -> CreateTaskRequest {
    let AddTaskArgs {
        task_name,
        description,
        priority,
        tags,
        user_id,
    } = args;
    CreateTaskRequest::new(task_name, description, priority, user_id)
        .with_tags(tags.unwrap_or_default())
}

fn update_request(args: UpdateTaskArgs) -> TaskServiceResult<UpdateTaskRequest> {
    let UpdateTaskArgs {
        task_id,
        task_name,
        description,
        priority,
        is_done,
        tags,
        user_id,
    } = args;

    let mut request = UpdateTaskRequest::new(parse_task_id(&task_id)?, user_id);
    if let Some(value) = task_name {
        request = request.with_task_name(value);
    }
    if let Some(value) = description {
        request = request.with_description(value);
    }
    if let Some(value) = priority {
        request = request.with_priority(value);
    }
    if let Some(value) = is_done {
        request = request.with_is_done(value);
    }
    if let Some(value) = tags {
        request = request.with_tags(value);
    }
    Ok(request)
}
