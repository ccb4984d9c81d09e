//! In-memory integration tests for task service flows.

use super::helpers::{TestService, harness};
use rstest::rstest;
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Task, UserId},
    services::{CreateTaskRequest, TaskServiceError, UpdateTaskRequest},
};

/// Asserts that `tasks` hold exactly the given names in order.
///
/// # Errors
///
/// Returns an error when the names differ.
fn ensure_names(tasks: &[Task], expected: &[&str]) -> Result<(), eyre::Report> {
    let names: Vec<&str> = tasks.iter().map(Task::task_name).collect();
    eyre::ensure!(names == expected, "expected {expected:?}, found {names:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_lifecycle_from_creation_to_deletion(
    harness: (TestService, InMemoryTaskRepository),
) -> Result<(), eyre::Report> {
    let (service, repository) = harness;
    let owner = UserId::new("lifecycle-user");

    let created = service
        .create_task(
            CreateTaskRequest::new("Buy groceries", "Milk, eggs, bread", 2, "lifecycle-user")
                .with_tags(vec!["home".to_owned()]),
        )
        .await?;
    ensure_names(&service.list_active_tasks(&owner).await?, &["Buy groceries"])?;
    ensure_names(&service.list_done_tasks(&owner).await?, &[])?;

    let completed = service
        .update_task(UpdateTaskRequest::new(created.id(), "lifecycle-user").with_is_done(true))
        .await?;
    eyre::ensure!(completed.is_done(), "task should be done after update");
    eyre::ensure!(
        completed.created_at() == created.created_at(),
        "creation time must not change"
    );
    ensure_names(&service.list_active_tasks(&owner).await?, &[])?;
    ensure_names(&service.list_done_tasks(&owner).await?, &["Buy groceries"])?;

    let fetched = service.get_task(created.id(), &owner).await?;
    eyre::ensure!(fetched == completed, "fetched task should match update result");

    service.delete_task(created.id(), &owner).await?;
    eyre::ensure!(repository.is_empty()?, "repository should be empty");
    let missing = service.get_task(created.id(), &owner).await;
    eyre::ensure!(
        missing == Err(TaskServiceError::NotFound),
        "deleted task should be missing, got {missing:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn users_only_see_and_change_their_own_tasks(
    harness: (TestService, InMemoryTaskRepository),
) -> Result<(), eyre::Report> {
    let (service, _) = harness;
    let alice = UserId::new("alice");
    let bob = UserId::new("bob");

    let alice_task = service
        .create_task(CreateTaskRequest::new(
            "Alice task",
            "Belongs to alice only",
            1,
            "alice",
        ))
        .await?;
    service
        .create_task(CreateTaskRequest::new(
            "Bob task",
            "Belongs to bob only",
            4,
            "bob",
        ))
        .await?;

    ensure_names(&service.list_user_tasks(&alice).await?, &["Alice task"])?;
    ensure_names(&service.list_user_tasks(&bob).await?, &["Bob task"])?;

    let read = service.get_task(alice_task.id(), &bob).await;
    let write = service
        .update_task(UpdateTaskRequest::new(alice_task.id(), "bob").with_is_done(true))
        .await;
    let delete = service.delete_task(alice_task.id(), &bob).await;
    eyre::ensure!(read == Err(TaskServiceError::Unauthorized), "read: {read:?}");
    eyre::ensure!(write == Err(TaskServiceError::Unauthorized), "write: {write:?}");
    eyre::ensure!(
        delete == Err(TaskServiceError::Unauthorized),
        "delete: {delete:?}"
    );

    let untouched = service.get_task(alice_task.id(), &alice).await?;
    eyre::ensure!(untouched == alice_task, "alice's task must be unchanged");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rejected_update_leaves_stored_task_unchanged(
    harness: (TestService, InMemoryTaskRepository),
) -> Result<(), eyre::Report> {
    let (service, _) = harness;
    let owner = UserId::new("owner");
    let task = service
        .create_task(CreateTaskRequest::new(
            "Stable",
            "Should not change at all",
            3,
            "owner",
        ))
        .await?;

    let invalid_priority = service
        .update_task(
            UpdateTaskRequest::new(task.id(), "owner")
                .with_task_name("Renamed")
                .with_priority(10),
        )
        .await;
    let invalid_description = service
        .update_task(UpdateTaskRequest::new(task.id(), "owner").with_description("short"))
        .await;

    eyre::ensure!(
        invalid_priority == Err(TaskServiceError::InvalidPriority),
        "got {invalid_priority:?}"
    );
    eyre::ensure!(
        matches!(
            &invalid_description,
            Err(TaskServiceError::ValidationFailed(message))
                if message.starts_with("Task validation failed: description")
        ),
        "got {invalid_description:?}"
    );
    eyre::ensure!(
        service.get_task(task.id(), &owner).await? == task,
        "stored task must be unchanged"
    );
    Ok(())
}
