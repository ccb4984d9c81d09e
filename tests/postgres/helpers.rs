//! Shared test helpers for `PostgreSQL` integration tests.

use taskboard::task::{
    adapters::postgres::{PostgresTaskRepository, TaskPgPool, connect_pool, run_migrations},
    domain::{NewTask, UserId},
};
use uuid::Uuid;

/// Environment variable naming the test database.
pub const DATABASE_URL_ENV: &str = "TASKBOARD_TEST_DATABASE_URL";

/// Boxed error type for fallible helpers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Connects to the test database and applies the task schema.
///
/// Returns `None` when no test database is configured.
///
/// # Errors
///
/// Returns an error if the pool cannot be built or the migration fails.
pub async fn test_pool() -> Result<Option<TaskPgPool>, BoxError> {
    let Ok(url) = std::env::var(DATABASE_URL_ENV) else {
        return Ok(None);
    };
    let pool = connect_pool(&url, 2).await?;
    run_migrations(&pool).await?;
    Ok(Some(pool))
}

/// Builds a repository over the test database, if one is configured.
///
/// # Errors
///
/// Returns an error if the database is configured but unusable.
pub async fn test_repository() -> Result<Option<PostgresTaskRepository>, BoxError> {
    Ok(test_pool().await?.map(PostgresTaskRepository::new))
}

/// Returns a user identifier no other test run shares.
#[must_use]
pub fn unique_user() -> UserId {
    UserId::new(format!("pg-test-{}", Uuid::new_v4()))
}

/// Builds a valid draft owned by `user_id`.
#[must_use]
pub fn draft(task_name: &str, user_id: &UserId) -> NewTask {
    NewTask::new(
        task_name,
        format!("Details for {task_name} task"),
        3,
        user_id.clone(),
    )
    .with_tags(vec!["pg".to_owned(), "integration".to_owned()])
}
