//! Domain model for task management.
//!
//! The task domain models task creation drafts, partial change sets and the
//! store schema rules while keeping all infrastructure concerns outside of
//! the domain boundary.

mod error;
mod ids;
mod priority;
pub mod schema;
mod task;

pub use error::{ParseTaskIdError, TaskDomainError};
pub use ids::{TaskId, UserId};
pub use priority::Priority;
pub use schema::{FieldViolation, TaskField, TaskValidationError};
pub use task::{NewTask, PersistedTaskData, Task, TaskChanges};
