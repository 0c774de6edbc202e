use crate::{
    domain::{TaskId, TaskStatus, TaskStore},
    error::Result,
    storage::Storage,
};
use tracing::warn;

/// Composition-root object tying a [`TaskStore`] to a storage backend
///
/// Construction is two-phase: `new` builds an empty store and performs no
/// I/O; the owner calls [`rehydrate`](Self::rehydrate) once its environment
/// is ready. After that, every task mutation is written through to the slot.
/// Write-through is fire-and-forget: a persistence failure is logged and the
/// in-memory mutation stands, so the mutation operations stay total.
pub struct BoardSession {
    store: TaskStore,
    storage: Box<dyn Storage>,
}

impl BoardSession {
    /// Creates a session with an empty store; does not touch the slot
    pub fn new(storage: Box<dyn Storage>) -> Self {
        Self {
            store: TaskStore::new(),
            storage,
        }
    }

    /// Read access to the underlying store
    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Loads the persisted task list, replacing current in-memory tasks
    ///
    /// The drag cursor never survives rehydration. An absent slot loads as
    /// an empty board.
    pub async fn rehydrate(&mut self) -> Result<()> {
        let tasks = self.storage.load_tasks().await?;
        self.store.replace_tasks(tasks);
        Ok(())
    }

    /// Appends a new Todo task and writes the list through to the slot
    pub async fn add_task(&mut self, title: impl Into<String>, description: Option<String>) {
        self.store.add_task(title, description);
        self.write_through().await;
    }

    /// Deletes a task (no-op if absent) and writes through
    pub async fn delete_task(&mut self, id: &TaskId) {
        self.store.delete_task(id);
        self.write_through().await;
    }

    /// Updates a task's status (no-op if absent) and writes through
    pub async fn update_task(&mut self, id: &TaskId, status: TaskStatus) {
        self.store.update_task(id, status);
        self.write_through().await;
    }

    /// Sets or clears the drag cursor; transient, never persisted
    pub fn drag_task(&mut self, id: Option<TaskId>) {
        self.store.drag_task(id);
    }

    /// Drops the dragged task onto the column with the given status
    ///
    /// Mirrors the drop handler contract: no-op when nothing is being
    /// dragged; otherwise update the dragged task's status (itself a no-op
    /// if the task was deleted mid-drag) and clear the cursor regardless.
    pub async fn drop_dragged(&mut self, status: TaskStatus) {
        let Some(id) = self.store.dragged_task().cloned() else {
            return;
        };
        self.update_task(&id, status).await;
        self.drag_task(None);
    }

    async fn write_through(&self) {
        if let Err(err) = self.storage.save_tasks(self.store.tasks()).await {
            warn!(error = %err, "failed to persist task list to slot");
        }
    }
}
