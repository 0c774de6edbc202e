use crate::{domain::Task, error::Result};
use async_trait::async_trait;

pub mod file_storage;

#[cfg(feature = "sqlite-storage")]
pub mod sqlite_storage;

/// Storage trait for the durable slot holding the persisted task list
///
/// The slot always contains the latest full task list; every save overwrites
/// it. The drag cursor is transient state and never reaches storage.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Initializes the storage backend
    async fn initialize(&self) -> Result<()>;

    /// Serializes the task list into the slot, replacing its contents
    async fn save_tasks(&self, tasks: &[Task]) -> Result<()>;

    /// Loads the task list from the slot
    ///
    /// An absent slot yields an empty list: a fresh environment has nothing
    /// persisted yet.
    async fn load_tasks(&self) -> Result<Vec<Task>>;

    /// Checks if the backend has been initialized
    async fn is_initialized(&self) -> bool;
}
