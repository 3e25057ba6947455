//! Lifecycle status of a task.

use serde::{Deserialize, Serialize};

/// The two valid lifecycle states of a task.
///
/// Serialized on the wire as `"PENDING"` / `"DONE"`; any other string is
/// rejected during deserialization. A task that is created without an
/// explicit status starts out as [`TaskStatus::Pending`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Task is open and awaiting completion.
    #[default]
    Pending,
    /// Task has been completed.
    Done,
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Done => write!(f, "done"),
        }
    }
}
