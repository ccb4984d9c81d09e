//! GraphQL response envelope and task DTOs.

use crate::task::{domain::Task, services::TaskServiceError};
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::request::RequestError;

/// Error code for request-level input failures.
const BAD_USER_INPUT: &str = "BAD_USER_INPUT";

/// Wire representation of a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
    /// Task identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Task title.
    pub task_name: String,
    /// Task description.
    pub description: String,
    /// Completion flag.
    pub is_done: bool,
    /// Priority in `1..=5`.
    pub priority: i32,
    /// Free-form labels.
    pub tags: Vec<String>,
    /// Owning user.
    pub user_id: String,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
    /// RFC 3339 last-update timestamp.
    pub updated_at: String,
}

impl From<&Task> for TaskDto {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().to_string(),
            task_name: task.task_name().to_owned(),
            description: task.description().to_owned(),
            is_done: task.is_done(),
            priority: i32::from(task.priority()),
            tags: task.tags().to_vec(),
            user_id: task.user_id().as_str().to_owned(),
            created_at: task
                .created_at()
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            updated_at: task
                .updated_at()
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Value produced by a resolved root field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A single task.
    Task(TaskDto),
    /// A task list.
    Tasks(Vec<TaskDto>),
    /// A plain message.
    Message(String),
}

impl FieldValue {
    /// Wraps one task.
    #[must_use]
    pub fn task(task: &Task) -> Self {
        Self::Task(TaskDto::from(task))
    }

    /// Wraps a task list, preserving order.
    #[must_use]
    pub fn tasks(tasks: &[Task]) -> Self {
        Self::Tasks(tasks.iter().map(TaskDto::from).collect())
    }
}

/// `extensions` member of a GraphQL error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorExtensions {
    /// Machine-readable error code.
    pub code: String,
}

/// One entry of the `errors` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphQlError {
    /// User-visible message.
    pub message: String,
    /// Path of the failing field; empty for request-level errors.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<String>,
    /// Error classification.
    pub extensions: ErrorExtensions,
}

/// Response body returned for every executed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphQlResponse {
    /// Root field results; absent when the request never reached a resolver.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<BTreeMap<String, Option<FieldValue>>>,
    /// Failures encountered while executing the request.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<GraphQlError>,
}

impl GraphQlResponse {
    /// Successful response for `field`.
    #[must_use]
    pub fn data(field: &str, value: FieldValue) -> Self {
        Self {
            data: Some(BTreeMap::from([(field.to_owned(), Some(value))])),
            errors: Vec::new(),
        }
    }

    /// Response for a resolver failure; the field resolves to `null`.
    #[must_use]
    pub fn field_error(field: &str, err: &TaskServiceError) -> Self {
        Self {
            data: Some(BTreeMap::from([(field.to_owned(), None)])),
            errors: vec![GraphQlError {
                message: err.to_string(),
                path: vec![field.to_owned()],
                extensions: ErrorExtensions {
                    code: err.code().to_owned(),
                },
            }],
        }
    }

    /// Response for a request that could not be decoded into an operation.
    #[must_use]
    pub fn request_error(err: &RequestError) -> Self {
        Self::malformed_body(err.to_string())
    }

    /// Response for a body that never reached a resolver.
    #[must_use]
    pub fn malformed_body(message: impl Into<String>) -> Self {
        Self {
            data: None,
            errors: vec![GraphQlError {
                message: message.into(),
                path: Vec::new(),
                extensions: ErrorExtensions {
                    code: BAD_USER_INPUT.to_owned(),
                },
            }],
        }
    }

    /// Returns the value resolved for `field`, if any.
    #[must_use]
    pub fn field(&self, field: &str) -> Option<&FieldValue> {
        self.data.as_ref()?.get(field)?.as_ref()
    }

    /// Returns the code of the first error, if any.
    #[must_use]
    pub fn error_code(&self) -> Option<&str> {
        self.errors.first().map(|err| err.extensions.code.as_str())
    }
}
