//! Shared world state for task mutation BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Task, TaskId},
    services::{CreateTaskRequest, TaskService, TaskServiceError},
};

/// Service type used by the BDD world.
pub type TestTaskService = TaskService<InMemoryTaskRepository>;

/// Scenario world for task mutation behaviour tests.
pub struct TaskWorld {
    pub service: TestTaskService,
    pub pending_create: Option<CreateTaskRequest>,
    pub existing_task: Option<Task>,
    pub target_task_id: Option<TaskId>,
    pub last_result: Option<Result<Task, TaskServiceError>>,
}

impl TaskWorld {
    /// Creates a world over an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            service: TaskService::new(Arc::new(InMemoryTaskRepository::new())),
            pending_create: None,
            existing_task: None,
            target_task_id: None,
            last_result: None,
        }
    }

    /// Returns the task targeted by update steps.
    ///
    /// # Errors
    ///
    /// Returns an error when no given step chose a target.
    pub fn target(&self) -> Result<TaskId, eyre::Report> {
        self.target_task_id
            .ok_or_else(|| eyre::eyre!("missing target task in scenario world"))
    }

    /// Returns the outcome of the last create or update.
    ///
    /// # Errors
    ///
    /// Returns an error when no when step has run.
    pub fn last_result(&self) -> Result<&Result<Task, TaskServiceError>, eyre::Report> {
        self.last_result
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing operation result in scenario world"))
    }
}

impl Default for TaskWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskWorld {
    TaskWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
