//! Application services for task management.

mod error;
mod lifecycle;
mod requests;

pub use error::{GENERIC_FAILURE_MESSAGE, TaskOperation, TaskServiceError, TaskServiceResult};
pub use lifecycle::TaskService;
pub use requests::{CreateTaskRequest, UpdateTaskRequest};
