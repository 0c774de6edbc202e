//! # Taskboard Core
//!
//! Core task store and domain models for a drag-and-drop kanban to-do
//! board with three columns: Todo, In Progress, and Done.
//!
//! This crate provides the fundamental types and operations for managing
//! board tasks and persisting them to a durable slot without any dependency
//! on specific UI implementations. Rendering and event wiring are left to a
//! UI adapter that consumes the store's contract.

pub mod domain;
pub mod error;
pub mod session;
pub mod storage;

// Re-export commonly used types
pub use domain::{
    board::{BoardConfig, Column},
    store::TaskStore,
    task::{Task, TaskId, TaskStatus},
};
pub use error::{Result, TaskboardError};
pub use session::BoardSession;
pub use storage::Storage;
