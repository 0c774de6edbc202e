use crate::domain::task::TaskStatus;
use serde::{Deserialize, Serialize};

/// Configuration for a kanban board column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub title: String,
    pub status: TaskStatus,
}

impl Column {
    pub fn new(title: impl Into<String>, status: TaskStatus) -> Self {
        Self {
            title: title.into(),
            status,
        }
    }
}

/// Board layout read by the rendering layer
///
/// Pure data: a UI adapter iterates the columns and asks the store for the
/// tasks carrying each column's status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub name: String,
    pub columns: Vec<Column>,
}

impl BoardConfig {
    /// Gets the column displaying the given status, if the layout has one
    pub fn column_for_status(&self, status: TaskStatus) -> Option<&Column> {
        self.columns.iter().find(|col| col.status == status)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: "Task Board".to_string(),
            columns: TaskStatus::all()
                .into_iter()
                .map(|status| Column::new(status.to_string(), status))
                .collect(),
        }
    }
}
