//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use rstest::fixture;
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{NewTask, UserId},
    services::TaskService,
};

/// Service type backed by the in-memory store.
pub type TestService = TaskService<InMemoryTaskRepository>;

/// Provides a fresh in-memory repository for each test.
#[fixture]
pub fn repo() -> InMemoryTaskRepository {
    InMemoryTaskRepository::new()
}

/// Provides a service and a handle on the repository behind it.
#[fixture]
pub fn harness() -> (TestService, InMemoryTaskRepository) {
    let repository = InMemoryTaskRepository::new();
    let service = TaskService::new(Arc::new(repository.clone()));
    (service, repository)
}

/// Builds a valid draft owned by `user_id`.
#[must_use]
pub fn draft(task_name: &str, user_id: &str) -> NewTask {
    NewTask::new(
        task_name,
        format!("Details for {task_name} task"),
        3,
        UserId::new(user_id),
    )
}
