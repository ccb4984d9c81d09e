//! GraphQL transport over the task service.
//!
//! Requests use the persisted-operation shape: the client names a root
//! field in `operationName` and supplies its arguments in `variables`.
//! Responses follow the standard `{"data", "errors"}` envelope, with service
//! failures reported per field and classified by `extensions.code`.

mod request;
mod resolver;
mod response;
pub mod schema;


pub use request::{
    AddTaskArgs, GraphQlRequest, RequestError, TaskOperationRequest, TaskRefArgs, UpdateTaskArgs,
    UserArgs,
};
pub use resolver::{TASK_DELETED_MESSAGE, TaskResolver};
pub use response::{ErrorExtensions, FieldValue, GraphQlError, GraphQlResponse, TaskDto};
pub use schema::TASK_SCHEMA_SDL;
