use crate::{
    domain::Task,
    error::{Result, TaskboardError},
    storage::Storage,
};
use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};
use std::{
    path::Path,
    sync::{Mutex, MutexGuard},
};

/// SQLite-based storage backend
///
/// The task list lives in a single row of a slot table, keyed by the same
/// fixed namespace the file backend uses. The connection is wrapped in a
/// mutex because `rusqlite::Connection` is not `Sync`.
pub struct SqliteStorage {
    conn: Mutex<Connection>,
}

impl SqliteStorage {
    const SLOT_NAME: &'static str = "task-storage";

    /// Opens (or creates) a database at the given path
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path).map_err(sqlite_err)?;
        let storage = Self {
            conn: Mutex::new(conn),
        };
        storage.create_schema()?;
        Ok(storage)
    }

    /// Opens an in-memory database, mainly for tests
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(sqlite_err)?;
        let storage = Self {
            conn: Mutex::new(conn),
        };
        storage.create_schema()?;
        Ok(storage)
    }

    fn create_schema(&self) -> Result<()> {
        self.lock()?
            .execute_batch(
                r#"
                CREATE TABLE IF NOT EXISTS slots (
                    name TEXT PRIMARY KEY,
                    payload TEXT NOT NULL
                );
                "#,
            )
            .map_err(sqlite_err)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| TaskboardError::StorageError("connection mutex poisoned".to_string()))
    }
}

fn sqlite_err(err: rusqlite::Error) -> TaskboardError {
    TaskboardError::StorageError(err.to_string())
}

#[async_trait]
impl Storage for SqliteStorage {
    async fn initialize(&self) -> Result<()> {
        // Schema creation is idempotent; open() already ran it
        self.create_schema()
    }

    async fn save_tasks(&self, tasks: &[Task]) -> Result<()> {
        let payload = serde_json::to_string(tasks)?;

        self.lock()?
            .execute(
                "INSERT INTO slots (name, payload) VALUES (?1, ?2)
                 ON CONFLICT(name) DO UPDATE SET payload = excluded.payload",
                params![Self::SLOT_NAME, payload],
            )
            .map_err(sqlite_err)?;

        Ok(())
    }

    async fn load_tasks(&self) -> Result<Vec<Task>> {
        let payload: Option<String> = self
            .lock()?
            .query_row(
                "SELECT payload FROM slots WHERE name = ?1",
                params![Self::SLOT_NAME],
                |row| row.get(0),
            )
            .optional()
            .map_err(sqlite_err)?;

        match payload {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    async fn is_initialized(&self) -> bool {
        let Ok(conn) = self.lock() else {
            return false;
        };
        conn.query_row(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'slots'",
            [],
            |_| Ok(()),
        )
        .optional()
        .map(|row| row.is_some())
        .unwrap_or(false)
    }
}
