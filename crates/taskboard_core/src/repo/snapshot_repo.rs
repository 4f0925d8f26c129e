//! Board snapshot repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist the whole project collection as one JSON document in the
//!   `slots` table.
//! - Repair restored projects that carry an empty column list.
//!
//! # Invariants
//! - Absent slot and corrupt document both surface as `Ok(None)`; persistence
//!   failures never make the in-memory state less authoritative.
//! - Repair substitutes the default column set only; task lists are left
//!   untouched even when they reference columns that no longer exist.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::board::{default_columns, Project};
use log::{debug, info, warn};
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Slot key the board document is stored under.
///
/// Kept identical to the original web app's storage key so documents exported
/// from it load unchanged.
pub const PROJECTS_SLOT_KEY: &str = "kanban-projects";

/// Result type used by snapshot repository operations.
pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Errors from snapshot persistence operations.
#[derive(Debug)]
pub enum SnapshotError {
    /// Underlying SQLite/bootstrap error.
    Db(DbError),
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Required table is missing.
    MissingRequiredTable(&'static str),
    /// Required column is missing from expected table.
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
    /// The project collection could not be encoded for saving.
    Encode(serde_json::Error),
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "snapshot repository requires schema version {expected_version}, got {actual_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "snapshot repository requires table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => write!(
                f,
                "snapshot repository requires column `{column}` in table `{table}`"
            ),
            Self::Encode(err) => write!(f, "failed to encode board document: {err}"),
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encode(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for SnapshotError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for SnapshotError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Load/save contract for whole-board snapshots.
pub trait SnapshotRepository {
    /// Restores the project collection, repaired for display.
    ///
    /// Returns `Ok(None)` when no usable document exists.
    fn load(&self) -> SnapshotResult<Option<Vec<Project>>>;
    /// Persists the full project collection, replacing the previous document.
    fn save(&self, projects: &[Project]) -> SnapshotResult<()>;
}

/// SQLite-backed snapshot repository over the `slots` table.
pub struct SqliteSnapshotRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSnapshotRepository<'conn> {
    /// Creates a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> SnapshotResult<Self> {
        ensure_snapshot_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl SnapshotRepository for SqliteSnapshotRepository<'_> {
    fn load(&self) -> SnapshotResult<Option<Vec<Project>>> {
        let document: Option<String> = self
            .conn
            .query_row(
                "SELECT document FROM slots WHERE slot_key = ?1;",
                [PROJECTS_SLOT_KEY],
                |row| row.get(0),
            )
            .optional()?;

        let Some(document) = document else {
            info!("event=snapshot_load module=repo status=ok outcome=absent");
            return Ok(None);
        };

        match serde_json::from_str::<Vec<Project>>(&document) {
            Ok(mut projects) => {
                let repaired = repair_projects(&mut projects);
                info!(
                    "event=snapshot_load module=repo status=ok outcome=restored projects={} repaired_columns={repaired}",
                    projects.len()
                );
                Ok(Some(projects))
            }
            Err(err) => {
                // In-memory state stays authoritative for the session; a
                // corrupt document is treated the same as an absent one.
                warn!(
                    "event=snapshot_load module=repo status=error error_code=corrupt_document error={err}"
                );
                Ok(None)
            }
        }
    }

    fn save(&self, projects: &[Project]) -> SnapshotResult<()> {
        let document = serde_json::to_string(projects)?;
        self.conn.execute(
            "INSERT INTO slots (slot_key, document, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(slot_key) DO UPDATE SET
                document = excluded.document,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![PROJECTS_SLOT_KEY, document],
        )?;
        debug!(
            "event=snapshot_save module=repo status=ok bytes={} projects={}",
            document.len(),
            projects.len()
        );
        Ok(())
    }
}

/// Substitutes the default column set into projects restored with an empty
/// column list. Tasks are deliberately left untouched, even when they now
/// reference nonexistent columns.
///
/// Returns the number of repaired projects.
fn repair_projects(projects: &mut [Project]) -> usize {
    let mut repaired = 0;
    for project in projects.iter_mut() {
        if project.columns.is_empty() {
            project.columns = default_columns();
            repaired += 1;
        }
    }
    repaired
}

fn ensure_snapshot_connection_ready(conn: &Connection) -> SnapshotResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(SnapshotError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, "slots")? {
        return Err(SnapshotError::MissingRequiredTable("slots"));
    }

    for column in ["slot_key", "document", "updated_at"] {
        if !table_has_column(conn, "slots", column)? {
            return Err(SnapshotError::MissingRequiredColumn {
                table: "slots",
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> SnapshotResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> SnapshotResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
