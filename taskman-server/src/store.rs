//! Persistence layer: the [`TaskStore`] trait and its in-memory engine.
//!
//! The store is a durable mapping from [`TaskId`] to [`Task`]. Ids are
//! assigned on insert, strictly increasing, and never reused after a
//! deletion. Absence on lookup is a normal outcome, not an error.

use std::collections::BTreeMap;

use parking_lot::RwLock;
use taskman_model::{NewTask, Task, TaskId};

/// Storage seam for task records.
///
/// The service layer is written against this trait so the concrete engine
/// (in-memory map today, an embedded or relational store later) can be
/// swapped without touching business logic. There are no transactions and
/// no isolation: callers racing on the same id get last-write-wins.
pub trait TaskStore: Send + Sync {
    /// Inserts a new task, assigning the next unused id. Always succeeds.
    fn insert(&self, new: NewTask) -> Task;

    /// Point lookup by id. `None` means the id is not present.
    fn find_by_id(&self, id: TaskId) -> Option<Task>;

    /// Full scan of all tasks, in insertion (= id) order.
    fn find_all(&self) -> Vec<Task>;

    /// Returns whether a task with the given id exists.
    fn exists_by_id(&self, id: TaskId) -> bool;

    /// Removes the task with the given id, if present.
    ///
    /// Callers are expected to check [`TaskStore::exists_by_id`] first;
    /// deleting an absent id is a no-op.
    fn delete_by_id(&self, id: TaskId);

    /// Upserts a task that already carries an id, overwriting all fields.
    fn save(&self, task: Task) -> Task;
}

/// In-memory [`TaskStore`] backed by an id-ordered map.
///
/// Thread-safe via [`RwLock`]; each operation holds the lock only for its
/// own duration. The id counter only ever moves forward, so deleted ids
/// are never handed out again.
pub struct MemoryStore {
    inner: RwLock<MemoryStoreInner>,
}

struct MemoryStoreInner {
    tasks: BTreeMap<TaskId, Task>,
    next_id: i64,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Creates a new, empty store. The first inserted task gets id 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(MemoryStoreInner {
                tasks: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Returns the number of stored tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().tasks.len()
    }

    /// Returns whether the store holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.read().tasks.is_empty()
    }
}

impl TaskStore for MemoryStore {
    fn insert(&self, new: NewTask) -> Task {
        let mut inner = self.inner.write();
        let id = TaskId::from_raw(inner.next_id);
        inner.next_id += 1;
        let task = Task {
            id,
            title: new.title,
            description: new.description,
            status: new.status,
            due_date: new.due_date,
        };
        inner.tasks.insert(id, task.clone());
        task
    }

    fn find_by_id(&self, id: TaskId) -> Option<Task> {
        self.inner.read().tasks.get(&id).cloned()
    }

    fn find_all(&self) -> Vec<Task> {
        self.inner.read().tasks.values().cloned().collect()
    }

    fn exists_by_id(&self, id: TaskId) -> bool {
        self.inner.read().tasks.contains_key(&id)
    }

    fn delete_by_id(&self, id: TaskId) {
        self.inner.write().tasks.remove(&id);
    }

    fn save(&self, task: Task) -> Task {
        self.inner.write().tasks.insert(task.id, task.clone());
        task
    }
}
