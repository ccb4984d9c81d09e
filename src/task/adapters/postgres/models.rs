//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Task name.
    pub task_name: String,
    /// Task description.
    pub description: String,
    /// Completion flag.
    pub is_done: bool,
    /// Priority.
    pub priority: i16,
    /// Ordered tags.
    pub tags: Vec<String>,
    /// Owning user identifier.
    pub user_id: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for task records. Timestamps use column defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Task name.
    pub task_name: String,
    /// Task description.
    pub description: String,
    /// Completion flag.
    pub is_done: bool,
    /// Priority.
    pub priority: i16,
    /// Ordered tags.
    pub tags: Vec<String>,
    /// Owning user identifier.
    pub user_id: String,
}

/// Mutable columns written by a save.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
pub struct TaskChangesetRow {
    /// Task name.
    pub task_name: String,
    /// Task description.
    pub description: String,
    /// Completion flag.
    pub is_done: bool,
    /// Priority.
    pub priority: i16,
    /// Ordered tags.
    pub tags: Vec<String>,
}
