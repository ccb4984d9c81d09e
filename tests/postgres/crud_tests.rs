//! CRUD tests for the `PostgreSQL` task repository.

use super::helpers::{BoxError, draft, test_repository, unique_user};
use rstest::rstest;
use taskboard::task::{
    domain::{Task, TaskChanges, TaskId, UserId},
    ports::{TaskFilter, TaskRepository, TaskRepositoryError},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn insert_then_find_round_trips_every_field() -> Result<(), BoxError> {
    let Some(repo) = test_repository().await? else {
        return Ok(());
    };
    let owner = unique_user();

    let inserted = repo.insert(draft("Write report", &owner)).await?;
    let found = repo.find_by_id(inserted.id()).await?;

    assert!(!inserted.is_done());
    assert_eq!(inserted.tags(), ["pg".to_owned(), "integration".to_owned()]);
    assert_eq!(inserted.created_at(), inserted.updated_at());
    assert_eq!(found, Some(inserted));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_by_unknown_id_returns_none() -> Result<(), BoxError> {
    let Some(repo) = test_repository().await? else {
        return Ok(());
    };

    assert_eq!(repo.find_by_id(TaskId::new()).await?, None);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn save_persists_changes_and_refreshes_update_time() -> Result<(), BoxError> {
    let Some(repo) = test_repository().await? else {
        return Ok(());
    };
    let owner = unique_user();
    let mut task = repo.insert(draft("Write report", &owner)).await?;
    task.apply(
        TaskChanges::new()
            .with_task_name("Write final report")
            .with_is_done(true)
            .with_tags(Vec::<String>::new()),
    );

    let saved = repo.save(&task).await?;

    assert_eq!(saved.task_name(), "Write final report");
    assert!(saved.is_done());
    assert!(saved.tags().is_empty());
    assert_eq!(saved.created_at(), task.created_at());
    assert!(saved.updated_at() >= task.updated_at());
    assert_eq!(repo.find_by_id(task.id()).await?, Some(saved));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn save_of_missing_task_is_not_found() -> Result<(), BoxError> {
    let Some(repo) = test_repository().await? else {
        return Ok(());
    };
    let owner = unique_user();
    let task = repo.insert(draft("Short lived", &owner)).await?;
    assert!(repo.delete(task.id()).await?);

    let result = repo.save(&task).await;

    assert!(matches!(result, Err(TaskRepositoryError::NotFound(id)) if id == task.id()));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_filters_by_owner_and_completion() -> Result<(), BoxError> {
    let Some(repo) = test_repository().await? else {
        return Ok(());
    };
    let owner = unique_user();
    let stranger = unique_user();
    let first = repo.insert(draft("First", &owner)).await?;
    let mut second = repo.insert(draft("Second", &owner)).await?;
    repo.insert(draft("Foreign", &stranger)).await?;
    second.apply(TaskChanges::new().with_is_done(true));
    repo.save(&second).await?;

    let ids = |tasks: Vec<Task>| tasks.iter().map(Task::id).collect::<Vec<_>>();
    let all = ids(repo.find(&TaskFilter::owned_by(owner.clone())).await?);
    let active = ids(
        repo.find(&TaskFilter::owned_by(owner.clone()).with_is_done(false))
            .await?,
    );
    let done = ids(
        repo.find(&TaskFilter::owned_by(owner).with_is_done(true))
            .await?,
    );

    assert_eq!(all, vec![first.id(), second.id()]);
    assert_eq!(active, vec![first.id()]);
    assert_eq!(done, vec![second.id()]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_reports_whether_a_row_was_removed() -> Result<(), BoxError> {
    let Some(repo) = test_repository().await? else {
        return Ok(());
    };
    let owner = unique_user();
    let task = repo.insert(draft("Disposable", &owner)).await?;

    assert!(repo.delete(task.id()).await?);
    assert!(!repo.delete(task.id()).await?);
    assert_eq!(repo.find_by_id(task.id()).await?, None);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn long_user_ids_are_stored_intact() -> Result<(), BoxError> {
    let Some(repo) = test_repository().await? else {
        return Ok(());
    };
    let owner = UserId::new(format!("{}-{}", unique_user().as_str(), "u".repeat(300)));

    let inserted = repo.insert(draft("Long owner", &owner)).await?;
    let owned = repo.find(&TaskFilter::owned_by(owner.clone())).await?;

    assert_eq!(inserted.user_id(), &owner);
    assert_eq!(owned, vec![inserted]);
    Ok(())
}
