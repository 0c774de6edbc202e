use crate::domain::task::{Task, TaskId, TaskStatus};

/// In-memory source of truth for the board's tasks and drag cursor
///
/// All mutations are synchronous and total: operations on an id that is no
/// longer present are silent no-ops, and nothing here performs I/O. Tasks
/// keep insertion order, which is creation order.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    dragged_task: Option<TaskId>,
}

impl TaskStore {
    /// Creates an empty store
    ///
    /// Construction never touches persistence; rehydration is a separate,
    /// explicit step driven by the session owning this store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all tasks in creation order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the tasks belonging to one board column
    pub fn tasks_with_status(&self, status: TaskStatus) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.status == status).collect()
    }

    /// Returns the id of the task currently being dragged, if any
    pub fn dragged_task(&self) -> Option<&TaskId> {
        self.dragged_task.as_ref()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Appends a new task with a fresh id and status Todo
    pub fn add_task(&mut self, title: impl Into<String>, description: Option<String>) {
        self.tasks.push(Task::new(title, description));
    }

    /// Removes the task with the given id; no-op if absent
    ///
    /// The drag cursor is deliberately left alone even when it references the
    /// deleted task: the eventual drop becomes a no-op and clears it.
    pub fn delete_task(&mut self, id: &TaskId) {
        self.tasks.retain(|t| &t.id != id);
    }

    /// Replaces the status of the task with the given id; no-op if absent
    ///
    /// Only the status field changes. Transitions are unrestricted: any
    /// status can move to any other status any number of times.
    pub fn update_task(&mut self, id: &TaskId, status: TaskStatus) {
        if let Some(task) = self.tasks.iter_mut().find(|t| &t.id == id) {
            task.status = status;
        }
    }

    /// Sets or clears the drag cursor
    pub fn drag_task(&mut self, id: Option<TaskId>) {
        self.dragged_task = id;
    }

    /// Replaces the whole task list, clearing the drag cursor
    ///
    /// Used by rehydration; the cursor is transient state and never survives
    /// a reload.
    pub fn replace_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.dragged_task = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_is_empty() {
        let store = TaskStore::new();
        assert!(store.is_empty());
        assert!(store.dragged_task().is_none());
    }

    #[test]
    fn test_add_task_creates_todo_with_fresh_id() {
        let mut store = TaskStore::new();
        store.add_task("First", None);
        store.add_task("Second", Some("details".to_string()));

        assert_eq!(store.len(), 2);
        assert!(store.tasks().iter().all(|t| t.status == TaskStatus::Todo));
        assert_ne!(store.tasks()[0].id, store.tasks()[1].id);
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut store = TaskStore::new();
        for i in 0..5 {
            store.add_task(format!("task {i}"), None);
        }
        assert_eq!(store.len(), 5);
        let titles: Vec<_> = store.tasks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["task 0", "task 1", "task 2", "task 3", "task 4"]);
    }

    #[test]
    fn test_delete_task_is_idempotent() {
        let mut store = TaskStore::new();
        store.add_task("Only", None);
        let id = store.tasks()[0].id.clone();

        store.delete_task(&id);
        assert!(store.is_empty());

        // Second delete of the same id changes nothing
        store.delete_task(&id);
        assert!(store.is_empty());
    }

    #[test]
    fn test_update_task_is_idempotent() {
        let mut store = TaskStore::new();
        store.add_task("Only", None);
        let id = store.tasks()[0].id.clone();

        store.update_task(&id, TaskStatus::Done);
        store.update_task(&id, TaskStatus::Done);
        assert_eq!(store.tasks()[0].status, TaskStatus::Done);
    }

    #[test]
    fn test_update_unknown_id_is_silent_noop() {
        let mut store = TaskStore::new();
        store.add_task("Only", None);

        store.update_task(&TaskId::new(), TaskStatus::Done);
        assert_eq!(store.tasks()[0].status, TaskStatus::Todo);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_update_changes_status_only() {
        let mut store = TaskStore::new();
        store.add_task("Buy milk", Some("2%".to_string()));
        let before = store.tasks()[0].clone();

        store.update_task(&before.id, TaskStatus::Progress);

        let after = &store.tasks()[0];
        assert_eq!(after.status, TaskStatus::Progress);
        assert_eq!(after.id, before.id);
        assert_eq!(after.title, before.title);
        assert_eq!(after.description, before.description);
        assert_eq!(after.created_at, before.created_at);
    }

    #[test]
    fn test_status_transitions_are_unrestricted() {
        let mut store = TaskStore::new();
        store.add_task("Wanderer", None);
        let id = store.tasks()[0].id.clone();

        // Done is not terminal and backwards moves are allowed
        for status in [
            TaskStatus::Progress,
            TaskStatus::Done,
            TaskStatus::Progress,
            TaskStatus::Todo,
            TaskStatus::Done,
        ] {
            store.update_task(&id, status);
            assert_eq!(store.tasks()[0].status, status);
        }
    }

    #[test]
    fn test_drag_task_sets_and_clears_cursor() {
        let mut store = TaskStore::new();
        store.add_task("Draggable", None);
        let id = store.tasks()[0].id.clone();
        let before = store.tasks().to_vec();

        store.drag_task(Some(id.clone()));
        assert_eq!(store.dragged_task(), Some(&id));

        store.drag_task(None);
        assert!(store.dragged_task().is_none());

        // No task was mutated by dragging
        assert_eq!(store.tasks(), before.as_slice());
    }

    #[test]
    fn test_dangling_drag_cursor_drop_is_noop() {
        let mut store = TaskStore::new();
        store.add_task("Doomed", None);
        let id = store.tasks()[0].id.clone();

        store.drag_task(Some(id.clone()));
        store.delete_task(&id);
        // Cursor stays dangling until the drop clears it
        assert_eq!(store.dragged_task(), Some(&id));

        // The drop handler's update is a silent no-op, then the cursor clears
        store.update_task(&id, TaskStatus::Done);
        store.drag_task(None);
        assert!(store.is_empty());
        assert!(store.dragged_task().is_none());
    }

    #[test]
    fn test_tasks_with_status_filters_one_column() {
        let mut store = TaskStore::new();
        store.add_task("a", None);
        store.add_task("b", None);
        store.add_task("c", None);
        let id_b = store.tasks()[1].id.clone();
        store.update_task(&id_b, TaskStatus::Progress);

        let todo = store.tasks_with_status(TaskStatus::Todo);
        assert_eq!(todo.len(), 2);
        let progress = store.tasks_with_status(TaskStatus::Progress);
        assert_eq!(progress.len(), 1);
        assert_eq!(progress[0].title, "b");
        assert!(store.tasks_with_status(TaskStatus::Done).is_empty());
    }

    #[test]
    fn test_replace_tasks_clears_drag_cursor() {
        let mut store = TaskStore::new();
        store.add_task("Old", None);
        let id = store.tasks()[0].id.clone();
        store.drag_task(Some(id));

        let replacement = vec![Task::new("New", None)];
        store.replace_tasks(replacement.clone());

        assert_eq!(store.tasks(), replacement.as_slice());
        assert!(store.dragged_task().is_none());
    }

    #[test]
    fn test_milk_scenario() {
        let mut store = TaskStore::new();
        store.add_task("Buy milk", Some("2%".to_string()));

        let id = store.tasks()[0].id.clone();
        assert_eq!(store.tasks()[0].status, TaskStatus::Todo);
        assert_eq!(store.tasks()[0].title, "Buy milk");
        assert_eq!(store.tasks()[0].description.as_deref(), Some("2%"));

        store.update_task(&id, TaskStatus::Progress);
        assert_eq!(store.tasks()[0].status, TaskStatus::Progress);
        assert_eq!(store.tasks()[0].title, "Buy milk");
        assert_eq!(store.tasks()[0].description.as_deref(), Some("2%"));

        store.delete_task(&id);
        assert!(!store.tasks().iter().any(|t| t.id == id));
    }
}
