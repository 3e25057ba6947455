//! The task record and its JSON wire shape.
//!
//! A [`Task`] is the sole entity of the system. On the wire it uses
//! camelCase field names and serializes the due date as `YYYY-MM-DD`:
//!
//! ```json
//! { "id": 1, "title": "Buy milk", "description": null,
//!   "status": "PENDING", "dueDate": "2024-01-15" }
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::status::TaskStatus;

/// Unique identifier for a task, assigned by the store on insert.
///
/// Ids are strictly increasing and never reused, even after the task they
/// belonged to is deleted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TaskId(i64);

impl TaskId {
    /// Creates a `TaskId` from a raw integer value.
    #[must_use]
    pub const fn from_raw(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw integer value of this id.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored task record, as returned by every read and write operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Store-assigned identifier, immutable after creation.
    pub id: TaskId,
    /// Task title. Emptiness is not rejected; the field itself is required.
    pub title: String,
    /// Optional free-text description (`null` on the wire when absent).
    pub description: Option<String>,
    /// Current lifecycle status.
    pub status: TaskStatus,
    /// Calendar due date, serialized as `YYYY-MM-DD`.
    pub due_date: NaiveDate,
}

/// Field values for a task that has not been assigned an id yet.
///
/// This is the input to the store's `insert` operation; by the time a
/// draft reaches the store, the status has been resolved.
#[derive(Debug, Clone)]
pub struct NewTask {
    /// Task title.
    pub title: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Resolved lifecycle status.
    pub status: TaskStatus,
    /// Calendar due date.
    pub due_date: NaiveDate,
}

/// Request body for creating or fully updating a task.
///
/// `title` and `dueDate` must be present in the JSON body; `description`
/// and `status` may be omitted. Any `id` field in the body is ignored --
/// ids are owned exclusively by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    /// Task title.
    pub title: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Lifecycle status; `None` when the client left it unset.
    pub status: Option<TaskStatus>,
    /// Calendar due date, parsed from `YYYY-MM-DD`.
    pub due_date: NaiveDate,
}
