//! Decoding of persisted-operation requests into typed operations.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Raw request body posted to the GraphQL endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest {
    /// Name of the root field to execute.
    pub operation_name: String,
    /// Operation arguments keyed by their schema names.
    #[serde(default)]
    pub variables: Value,
}

impl GraphQlRequest {
    /// Builds a request for `operation_name` with the given arguments.
    #[must_use]
    pub fn new(operation_name: impl Into<String>, variables: Value) -> Self {
        Self {
            operation_name: operation_name.into(),
            variables,
        }
    }
}

/// Failure to turn a [`GraphQlRequest`] into a [`TaskOperationRequest`].
#[derive(Debug, Error)]
pub enum RequestError {
    /// The operation name matches no root field.
    #[error("Cannot query field \"{0}\".")]
    UnknownOperation(String),

    /// The variables do not fit the operation's arguments.
    #[error("Variable input for \"{operation}\" is invalid: {source}")]
    InvalidVariables {
        /// Operation whose arguments were rejected.
        operation: String,
        /// Decoding failure.
        source: serde_json::Error,
    },
}

/// Arguments naming only the requesting user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UserArgs {
    /// Requesting user.
    pub user_id: String,
}

/// Arguments naming one task and the requesting user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TaskRefArgs {
    /// Raw task identifier.
    pub task_id: String,
    /// Requesting user.
    pub user_id: String,
}

/// Arguments of `addTask`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AddTaskArgs {
    /// Task title.
    pub task_name: String,
    /// Task description.
    pub description: String,
    /// Requested priority.
    pub priority: i32,
    /// Optional labels; `null` and absent both mean none.
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    /// Owning user.
    pub user_id: String,
}

/// Arguments of `updateTask`; absent fields are left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateTaskArgs {
    /// Raw task identifier.
    pub task_id: String,
    /// New title.
    #[serde(default)]
    pub task_name: Option<String>,
    /// New description.
    #[serde(default)]
    pub description: Option<String>,
    /// New priority.
    #[serde(default)]
    pub priority: Option<i32>,
    /// New completion flag.
    #[serde(default)]
    pub is_done: Option<bool>,
    /// Replacement labels.
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    /// Requesting user.
    pub user_id: String,
}

/// A decoded root-field invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskOperationRequest {
    /// `getUserDoneTasks`.
    GetUserDoneTasks(UserArgs),
    /// `getUserActiveTasks`.
    GetUserActiveTasks(UserArgs),
    /// `getUserTasks`.
    GetUserTasks(UserArgs),
    /// `getTask`.
    GetTask(TaskRefArgs),
    /// `addTask`.
    AddTask(AddTaskArgs),
    /// `updateTask`.
    UpdateTask(UpdateTaskArgs),
    /// `deleteTask`.
    DeleteTask(TaskRefArgs),
}

impl TaskOperationRequest {
    /// Decodes the operation named by `request`.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::UnknownOperation`] for an unrecognized name and
    /// [`RequestError::InvalidVariables`] when the variables are missing,
    /// mistyped or carry unknown arguments.
    pub fn parse(request: GraphQlRequest) -> Result<Self, RequestError> {
        let GraphQlRequest {
            operation_name,
            variables,
        } = request;

        let operation = match operation_name.as_str() {
            "getUserDoneTasks" => Self::GetUserDoneTasks(decode(&operation_name, variables)?),
            "getUserActiveTasks" => Self::GetUserActiveTasks(decode(&operation_name, variables)?),
            "getUserTasks" => Self::GetUserTasks(decode(&operation_name, variables)?),
            "getTask" => Self::GetTask(decode(&operation_name, variables)?),
            "addTask" => Self::AddTask(decode(&operation_name, variables)?),
            "updateTask" => Self::UpdateTask(decode(&operation_name, variables)?),
            "deleteTask" => Self::DeleteTask(decode(&operation_name, variables)?),
            _ => return Err(RequestError::UnknownOperation(operation_name)),
        };
        Ok(operation)
    }

    /// Returns the root field name of the operation.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::GetUserDoneTasks(_) => "getUserDoneTasks",
            Self::GetUserActiveTasks(_) => "getUserActiveTasks",
            Self::GetUserTasks(_) => "getUserTasks",
            Self::GetTask(_) => "getTask",
            Self::AddTask(_) => "addTask",
            Self::UpdateTask(_) => "updateTask",
            Self::DeleteTask(_) => "deleteTask",
        }
    }
}

fn decode<T: DeserializeOwned>(operation: &str, variables: Value) -> Result<T, RequestError> {
    serde_json::from_value(variables).map_err(|source| RequestError::InvalidVariables {
        operation: operation.to_owned(),
        source,
    })
}
