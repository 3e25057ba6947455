//! Business rule layer between the HTTP handlers and the store.
//!
//! [`TaskService`] is deliberately thin: every operation is a single
//! delegation to the store, and the only rule beyond pass-through is
//! that a task created without a status starts out as `PENDING`.

use taskman_model::{NewTask, Task, TaskDraft, TaskId, TaskStatus};

use crate::store::TaskStore;

/// Thin service wrapping a [`TaskStore`].
///
/// Absence of a task is reported as `None`, never as an error; the HTTP
/// layer maps it to 404.
pub struct TaskService<S> {
    store: S,
}

impl<S: TaskStore> TaskService<S> {
    /// Creates a service backed by the given store.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns all tasks in insertion order.
    #[must_use]
    pub fn list_tasks(&self) -> Vec<Task> {
        self.store.find_all()
    }

    /// Returns the task with the given id, or `None` if absent.
    #[must_use]
    pub fn get_task(&self, id: TaskId) -> Option<Task> {
        self.store.find_by_id(id)
    }

    /// Creates a task from a draft, defaulting an unset status to
    /// [`TaskStatus::Pending`] before it reaches the store.
    pub fn create_task(&self, draft: TaskDraft) -> Task {
        let status = draft.status.unwrap_or(TaskStatus::Pending);
        self.store.insert(NewTask {
            title: draft.title,
            description: draft.description,
            status,
            due_date: draft.due_date,
        })
    }

    /// Replaces all four mutable fields of an existing task.
    ///
    /// Full replacement: a semantically empty field in the draft still
    /// overwrites, there is no partial merge. Returns `None` (and creates
    /// nothing) when the id is absent. A draft with no status falls back
    /// to `PENDING`, matching create.
    pub fn update_task(&self, id: TaskId, draft: TaskDraft) -> Option<Task> {
        let mut task = self.store.find_by_id(id)?;
        task.title = draft.title;
        task.description = draft.description;
        task.status = draft.status.unwrap_or(TaskStatus::Pending);
        task.due_date = draft.due_date;
        Some(self.store.save(task))
    }

    /// Overwrites only the status of an existing task.
    pub fn update_task_status(&self, id: TaskId, status: TaskStatus) -> Option<Task> {
        let mut task = self.store.find_by_id(id)?;
        task.status = status;
        Some(self.store.save(task))
    }

    /// Deletes the task with the given id.
    ///
    /// Checks existence first; returns `false` without attempting a
    /// deletion when the id is absent.
    pub fn delete_task(&self, id: TaskId) -> bool {
        if self.store.exists_by_id(id) {
            self.store.delete_by_id(id);
            true
        } else {
            false
        }
    }
}
