//! Project, column, and task records.
//!
//! # Responsibility
//! - Define the board data shapes shared by store, persistence, and UI
//!   callers.
//! - Provide the default column set and the demo seed used by fresh boards.
//!
//! # Invariants
//! - Ids are opaque strings. Fresh ids are generated; the four default
//!   columns keep their conventional slugs so older saved documents stay
//!   loadable.
//! - Column `order` keys define display sort; ties are broken by insertion
//!   order.
//! - `done` is tri-state on the wire: absent, `false`, and `true`. Absent and
//!   `false` both mean "not done".

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for one project.
pub type ProjectId = String;
/// Stable identifier for one column within a project.
pub type ColumnId = String;
/// Stable identifier for one task within a project.
pub type TaskId = String;

/// Conventional id of the default intake column.
pub const INTAKE_COLUMN_ID: &str = "todo";

/// Generates a fresh opaque id.
pub fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}

/// Named, ordered bucket that tasks belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    /// Display sort key. Not necessarily contiguous.
    pub order: i64,
}

/// One work item on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Data URI, URL, or asset path. See [`crate::model::image_ref`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Id of the owning column within the same project.
    #[serde(rename = "columnId")]
    pub column_id: ColumnId,
    /// Absent and `Some(false)` both mean "not done".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,
}

impl Task {
    /// Returns whether this task is marked done.
    pub fn is_done(&self) -> bool {
        self.done.unwrap_or(false)
    }
}

/// Top-level workspace owning its columns and tasks exclusively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub columns: Vec<Column>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Project {
    /// Columns in display order: `order ASC`, ties stable by insertion.
    pub fn sorted_columns(&self) -> Vec<&Column> {
        let mut columns: Vec<&Column> = self.columns.iter().collect();
        columns.sort_by_key(|column| column.order);
        columns
    }

    /// Default intake column: first column in display order.
    pub fn intake_column(&self) -> Option<&Column> {
        self.sorted_columns().first().copied()
    }

    /// Tasks belonging to one column, in underlying collection order.
    ///
    /// This is a derived view; per-column task lists are never stored.
    pub fn tasks_in_column(&self, column_id: &str) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| task.column_id == column_id)
            .collect()
    }

    /// Looks up one column by id.
    pub fn column(&self, column_id: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.id == column_id)
    }

    /// Looks up one task by id.
    pub fn task(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == task_id)
    }
}

/// Default four-column set for new and repaired projects.
pub fn default_columns() -> Vec<Column> {
    vec![
        Column {
            id: INTAKE_COLUMN_ID.to_string(),
            title: "To do".to_string(),
            order: 0,
        },
        Column {
            id: "inprogress".to_string(),
            title: "In progress".to_string(),
            order: 1,
        },
        Column {
            id: "review".to_string(),
            title: "Ready for review".to_string(),
            order: 2,
        },
        Column {
            id: "done".to_string(),
            title: "Done".to_string(),
            order: 3,
        },
    ]
}

/// Seed project used when no saved board exists.
pub fn demo_project() -> Project {
    Project {
        id: fresh_id(),
        name: "Demo project".to_string(),
        description: None,
        columns: default_columns(),
        tasks: vec![
            Task {
                id: fresh_id(),
                title: "E-commerce website design".to_string(),
                description: None,
                image: Some("/kanban1.jpg".to_string()),
                column_id: "inprogress".to_string(),
                done: None,
            },
            Task {
                id: fresh_id(),
                title: "Startup landing page update".to_string(),
                description: None,
                image: Some("/kanban2.jpg".to_string()),
                column_id: "review".to_string(),
                done: None,
            },
            Task {
                id: fresh_id(),
                title: "Design email newsletter template".to_string(),
                description: None,
                image: None,
                column_id: "done".to_string(),
                done: None,
            },
        ],
    }
}
