use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// Unique identifier for a task
///
/// Newtype over a v4 UUID, generated at task creation time. Serializes
/// transparently as the UUID string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Generates a fresh random identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for TaskId {
    type Err = crate::error::TaskboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| crate::error::TaskboardError::InvalidTaskId(s.to_string()))
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Status of a task on the kanban board
///
/// Serialized exactly as "Todo", "Progress", "Done" to stay compatible with
/// the persisted slot payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    Todo,
    Progress,
    Done,
}

impl TaskStatus {
    /// All statuses in board column order
    pub fn all() -> [TaskStatus; 3] {
        [Self::Todo, Self::Progress, Self::Done]
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Todo => write!(f, "Todo"),
            Self::Progress => write!(f, "In Progress"),
            Self::Done => write!(f, "Done"),
        }
    }
}

/// A task on the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task with a fresh id and status Todo
    ///
    /// The title is taken as-is; validating it (e.g. rejecting an empty
    /// string) is the caller's responsibility.
    pub fn new(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            id: TaskId::new(),
            title: title.into(),
            description,
            status: TaskStatus::Todo,
            created_at: Utc::now(),
        }
    }
}
