//! Core board state and persistence for TaskBoard.
//! This crate is the single source of truth for board invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::board::{
    default_columns, demo_project, Column, ColumnId, Project, ProjectId, Task, TaskId,
};
pub use model::image_ref::{classify_image_ref, ImageRefKind};
pub use repo::snapshot_repo::{
    SnapshotError, SnapshotRepository, SnapshotResult, SqliteSnapshotRepository, PROJECTS_SLOT_KEY,
};
pub use service::board_service::BoardService;
pub use store::board_store::{BoardError, BoardResult, BoardStore, TaskDraft};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
