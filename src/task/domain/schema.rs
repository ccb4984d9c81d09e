//! Store-level field rules for task documents.
//!
//! These rules model the field-presence and range validation performed by
//! the document store. Every repository adapter runs them before a write so
//! that a rejected document reports the same message regardless of backend.

use super::Priority;
use std::fmt;

/// Minimum number of characters in a trimmed description.
pub const MIN_DESCRIPTION_LENGTH: usize = 10;

/// Task fields checked by the store schema, named as they appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskField {
    /// The `taskName` field.
    TaskName,
    /// The `description` field.
    Description,
    /// The `priority` field.
    Priority,
    /// The `userId` field.
    UserId,
}

impl TaskField {
    /// Returns the wire name of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TaskName => "taskName",
            Self::Description => "description",
            Self::Priority => "priority",
            Self::UserId => "userId",
        }
    }
}

impl fmt::Display for TaskField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single rejected field and the reason it was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    field: TaskField,
    reason: String,
}

impl FieldViolation {
    /// Creates a violation for `field`.
    #[must_use]
    pub fn new(field: TaskField, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }

    /// Returns the rejected field.
    #[must_use]
    pub const fn field(&self) -> TaskField {
        self.field
    }

    /// Returns the rejection reason.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Error raised when a task document violates the store schema.
///
/// Renders as `Task validation failed: <field>: <reason>, ...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskValidationError {
    violations: Vec<FieldViolation>,
}

impl TaskValidationError {
    /// Creates an error carrying a single violation.
    #[must_use]
    pub fn single(field: TaskField, reason: impl Into<String>) -> Self {
        Self {
            violations: vec![FieldViolation::new(field, reason)],
        }
    }

    /// Returns every violation, in field declaration order.
    #[must_use]
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Returns `true` when `field` is among the violations.
    #[must_use]
    pub fn has_violation(&self, field: TaskField) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

impl fmt::Display for TaskValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Task validation failed: ")?;
        for (index, violation) in self.violations.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", violation.field, violation.reason)?;
        }
        Ok(())
    }
}

impl std::error::Error for TaskValidationError {}

/// Borrowed view of the task fields subject to schema validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskFields<'a> {
    /// Task name as supplied.
    pub task_name: &'a str,
    /// Description as supplied.
    pub description: &'a str,
    /// Raw priority value.
    pub priority: i32,
    /// Owning user identifier.
    pub user_id: &'a str,
}

/// Checks a task document against the store schema.
///
/// All violated fields are reported together.
///
/// # Errors
///
/// Returns [`TaskValidationError`] listing each rejected field.
pub fn validate(fields: &TaskFields<'_>) -> Result<(), TaskValidationError> {
    let mut violations = Vec::new();

    if fields.task_name.trim().is_empty() {
        violations.push(FieldViolation::new(TaskField::TaskName, "is required"));
    }

    let description = fields.description.trim();
    if description.is_empty() {
        violations.push(FieldViolation::new(TaskField::Description, "is required"));
    } else if description.chars().count() < MIN_DESCRIPTION_LENGTH {
        violations.push(FieldViolation::new(
            TaskField::Description,
            format!("must be at least {MIN_DESCRIPTION_LENGTH} characters long"),
        ));
    } else if fields.description == fields.task_name {
        violations.push(FieldViolation::new(
            TaskField::Description,
            "cannot be the same as task name",
        ));
    }

    if Priority::new(fields.priority).is_err() {
        violations.push(FieldViolation::new(
            TaskField::Priority,
            format!("must be between {} and {}", Priority::MIN, Priority::MAX),
        ));
    }

    if fields.user_id.trim().is_empty() {
        violations.push(FieldViolation::new(TaskField::UserId, "is required"));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(TaskValidationError { violations })
    }
}
