//! Shared domain model for the `taskman` REST service.
//!
//! Defines the [`Task`] record and its JSON wire shape, which both the
//! server and integration tests depend on.

pub mod status;
pub mod task;

pub use status::TaskStatus;
pub use task::{NewTask, Task, TaskDraft, TaskId};
