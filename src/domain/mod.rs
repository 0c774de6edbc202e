pub mod board;
pub mod store;
pub mod task;

pub use board::{BoardConfig, Column};
pub use store::TaskStore;
pub use task::{Task, TaskId, TaskStatus};
