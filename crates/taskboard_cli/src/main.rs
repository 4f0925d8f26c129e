//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `taskboard_core` linkage.
//! - Walk the seeded board end to end for quick local sanity checks.

use taskboard_core::db::open_db_in_memory;
use taskboard_core::{core_version, BoardService, SqliteSnapshotRepository};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("taskboard_core version={}", core_version());

    let conn = open_db_in_memory()?;
    let repo = SqliteSnapshotRepository::try_new(&conn)?;
    let service = BoardService::load_or_seed(repo)?;

    let Some(project) = service.current_project() else {
        return Err("no current project after seeding".into());
    };
    println!("project name={:?} columns={}", project.name, project.columns.len());
    for column in project.sorted_columns() {
        println!(
            "column id={} title={:?} tasks={}",
            column.id,
            column.title,
            project.tasks_in_column(&column.id).len()
        );
    }
    Ok(())
}
