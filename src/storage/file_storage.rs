use crate::{domain::Task, error::Result, storage::Storage};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// File-based storage implementation
///
/// Keeps the serialized task list as a single JSON document in a
/// `.taskboard` directory under the given root.
pub struct FileStorage {
    root_path: PathBuf,
}

impl FileStorage {
    const TASKBOARD_DIR: &'static str = ".taskboard";
    // Fixed slot namespace; the file name is derived from it
    const SLOT_NAME: &'static str = "task-storage";

    /// Creates a new FileStorage instance rooted at the given directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root_path: root.as_ref().join(Self::TASKBOARD_DIR),
        }
    }

    fn slot_file(&self) -> PathBuf {
        self.root_path.join(format!("{}.json", Self::SLOT_NAME))
    }

    async fn ensure_directory_exists(&self) -> Result<()> {
        if !self.root_path.exists() {
            fs::create_dir_all(&self.root_path).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn initialize(&self) -> Result<()> {
        self.ensure_directory_exists().await?;

        // Seed an empty slot so the directory is recognizably a board
        if !self.slot_file().exists() {
            self.save_tasks(&[]).await?;
        }

        Ok(())
    }

    async fn save_tasks(&self, tasks: &[Task]) -> Result<()> {
        self.ensure_directory_exists().await?;

        let json = serde_json::to_string_pretty(tasks)?;
        fs::write(self.slot_file(), json).await?;

        debug!(count = tasks.len(), "saved task list to slot");
        Ok(())
    }

    async fn load_tasks(&self) -> Result<Vec<Task>> {
        let slot_file = self.slot_file();

        if !slot_file.exists() {
            debug!("slot file absent, loading empty task list");
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&slot_file).await?;
        let tasks: Vec<Task> = serde_json::from_str(&contents)?;

        Ok(tasks)
    }

    async fn is_initialized(&self) -> bool {
        self.root_path.exists() && self.slot_file().exists()
    }
}
