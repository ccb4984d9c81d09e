//! `PostgreSQL` repository implementation for task storage.

use super::{
    models::{NewTaskRow, TaskChangesetRow, TaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{
        NewTask, PersistedTaskData, Priority, Task, TaskField, TaskId, TaskValidationError, UserId,
    },
    ports::{TaskFilter, TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// SQL creating the `tasks` table and its constraints.
const CREATE_TASKS_SQL: &str =
    include_str!("../../../../migrations/2026-10-01-000000_create_tasks/up.sql");

/// Advisory lock key serializing concurrent schema setup.
const MIGRATION_LOCK_SQL: &str = "SELECT pg_advisory_xact_lock(7305982211)";

/// Builds a pool of up to `max_size` connections to `database_url`.
///
/// r2d2 opens its idle connections while building, so the work runs on the
/// blocking thread pool.
///
/// # Errors
///
/// Returns [`TaskRepositoryError::Persistence`] when the pool cannot
/// establish its connections.
pub async fn connect_pool(
    database_url: &str,
    max_size: u32,
) -> TaskRepositoryResult<TaskPgPool> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    tokio::task::spawn_blocking(move || {
        Pool::builder()
            .max_size(max_size)
            .build(manager)
            .map_err(TaskRepositoryError::persistence)
    })
    .await
    .map_err(TaskRepositoryError::persistence)?
}

/// Applies the task schema to the database behind `pool`.
///
/// The migration is idempotent and safe to run on every start. Concurrent
/// callers are serialized by a transaction-scoped advisory lock.
///
/// # Errors
///
/// Returns [`TaskRepositoryError::Persistence`] when a connection cannot be
/// obtained or the SQL fails.
pub async fn run_migrations(pool: &TaskPgPool) -> TaskRepositoryResult<()> {
    let migration_pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut connection = migration_pool
            .get()
            .map_err(TaskRepositoryError::persistence)?;
        connection
            .transaction::<_, DieselError, _>(|conn| {
                conn.batch_execute(MIGRATION_LOCK_SQL)?;
                conn.batch_execute(CREATE_TASKS_SQL)
            })
            .map_err(TaskRepositoryError::persistence)
    })
    .await
    .map_err(TaskRepositoryError::persistence)?
}

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn insert(&self, task: NewTask) -> TaskRepositoryResult<Task> {
        task.validate()?;
        let new_row = to_new_row(&task)?;

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(tasks::table)
                .values(&new_row)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .map_err(map_write_error)?;
            tracing::debug!(task_id = %row.id, user_id = %row.user_id, "inserted task");
            row_to_task(row)
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .find(id.into_inner())
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn save(&self, task: &Task) -> TaskRepositoryResult<Task> {
        task.validate()?;
        let task_id = task.id();
        let changeset = to_changeset(task);

        self.run_blocking(move |connection| {
            let row = diesel::update(tasks::table.find(task_id.into_inner()))
                .set((changeset, tasks::updated_at.eq(diesel::dsl::now)))
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .optional()
                .map_err(map_write_error)?
                .ok_or(TaskRepositoryError::NotFound(task_id))?;
            tracing::debug!(task_id = %task_id, "saved task");
            row_to_task(row)
        })
        .await
    }

    async fn find(&self, filter: &TaskFilter) -> TaskRepositoryResult<Vec<Task>> {
        let user_id = filter.user_id().as_str().to_owned();
        let is_done = filter.is_done();

        self.run_blocking(move |connection| {
            let mut query = tasks::table
                .select(TaskRow::as_select())
                .filter(tasks::user_id.eq(user_id))
                .into_boxed();
            if let Some(done) = is_done {
                query = query.filter(tasks::is_done.eq(done));
            }
            let rows = query
                .order((tasks::created_at.asc(), tasks::id.asc()))
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        self.run_blocking(move |connection| {
            let removed = diesel::delete(tasks::table.find(id.into_inner()))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(removed > 0)
        })
        .await
    }
}

fn to_new_row(task: &NewTask) -> TaskRepositoryResult<NewTaskRow> {
    let priority = i16::try_from(task.priority()).map_err(TaskRepositoryError::persistence)?;
    let task_name = task.task_name().to_owned();
    let description = task.description().to_owned();
    let user_id = task.user_id().as_str().to_owned();
    let tags = task.tags().to_vec();

    Ok(NewTaskRow {
        id: TaskId::new().into_inner(),
        task_name,
        description,
        is_done: false,
        priority,
        tags,
        user_id,
    })
}

fn to_changeset(task: &Task) -> TaskChangesetRow {
    TaskChangesetRow {
        task_name: task.task_name().to_owned(),
        description: task.description().to_owned(),
        is_done: task.is_done(),
        priority: i16::from(task.priority().value()),
        tags: task.tags().to_vec(),
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        task_name,
        description,
        is_done,
        priority: persisted_priority,
        tags,
        user_id,
        created_at,
        updated_at,
    } = row;

    let priority =
        Priority::new(i32::from(persisted_priority)).map_err(TaskRepositoryError::persistence)?;

    let data = PersistedTaskData {
        id: TaskId::from_uuid(id),
        task_name,
        description,
        is_done,
        priority,
        tags,
        user_id: UserId::new(user_id),
        created_at,
        updated_at,
    };
    Ok(Task::from_persisted(data))
}

fn map_write_error(err: DieselError) -> TaskRepositoryError {
    if let DieselError::DatabaseError(DatabaseErrorKind::CheckViolation, info) = &err
        && let Some(violation) = check_violation(info.as_ref())
    {
        return violation.into();
    }
    TaskRepositoryError::persistence(err)
}

fn check_violation(info: &dyn DatabaseErrorInformation) -> Option<TaskValidationError> {
    let field = match info.constraint_name()? {
        "tasks_task_name_present" => TaskField::TaskName,
        "tasks_description_length" | "tasks_description_differs" => TaskField::Description,
        "tasks_priority_range" => TaskField::Priority,
        "tasks_user_id_present" => TaskField::UserId,
        _ => return None,
    };
    Some(TaskValidationError::single(field, info.message().to_owned()))
}
