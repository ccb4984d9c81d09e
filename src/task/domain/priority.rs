//! Validated task priority.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task priority in the closed range `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Priority(u8);

impl Priority {
    /// Lowest accepted priority.
    pub const MIN: i32 = 1;
    /// Highest accepted priority.
    pub const MAX: i32 = 5;

    /// Creates a validated priority.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::PriorityOutOfRange`] when the value lies
    /// outside `1..=5`.
    pub fn new(value: i32) -> Result<Self, TaskDomainError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(TaskDomainError::PriorityOutOfRange(value));
        }
        u8::try_from(value)
            .map(Self)
            .map_err(|_| TaskDomainError::PriorityOutOfRange(value))
    }

    /// Returns the numeric priority.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i32> for Priority {
    type Error = TaskDomainError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Priority> for i32 {
    fn from(priority: Priority) -> Self {
        Self::from(priority.0)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
