//! Board use-case service.
//!
//! # Responsibility
//! - Restore the board at startup and seed the demo project when absent.
//! - Apply store mutations and write the snapshot back after each one.
//!
//! # Invariants
//! - The in-memory store is authoritative; snapshot save failures are logged
//!   and otherwise invisible to callers.
//! - Every successful mutation triggers exactly one save.

use crate::model::board::{Column, Project, Task};
use crate::model::image_ref::classify_image_ref;
use crate::repo::snapshot_repo::{SnapshotRepository, SnapshotResult};
use crate::store::board_store::{BoardResult, BoardStore, TaskDraft};
use log::{debug, info, warn};

/// Service facade wiring the board store to snapshot persistence.
pub struct BoardService<R: SnapshotRepository> {
    repo: R,
    store: BoardStore,
}

impl<R: SnapshotRepository> BoardService<R> {
    /// Restores the board from the snapshot slot, or seeds the demo project
    /// when no usable document exists. The first project becomes current.
    pub fn load_or_seed(repo: R) -> SnapshotResult<Self> {
        let store = match repo.load()? {
            Some(projects) => BoardStore::from_projects(projects),
            None => {
                info!("event=board_init module=service status=ok outcome=seeded");
                BoardStore::seeded()
            }
        };
        Ok(Self { repo, store })
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &BoardStore {
        &self.store
    }

    /// Currently selected project.
    pub fn current_project(&self) -> Option<&Project> {
        self.store.current_project()
    }

    /// All projects, in stable order.
    pub fn projects(&self) -> &[Project] {
        self.store.projects()
    }

    /// Appends a new column to the project.
    pub fn add_column(&mut self, project_id: &str) -> BoardResult<Column> {
        let column = self.store.add_column(project_id)?;
        debug!(
            "event=board_mutation module=service op=add_column status=ok project={project_id} column={}",
            column.id
        );
        self.persist_after("add_column");
        Ok(column)
    }

    /// Renames one column.
    pub fn rename_column(
        &mut self,
        project_id: &str,
        column_id: &str,
        new_title: &str,
    ) -> BoardResult<()> {
        self.store.rename_column(project_id, column_id, new_title)?;
        debug!(
            "event=board_mutation module=service op=rename_column status=ok project={project_id} column={column_id}"
        );
        self.persist_after("rename_column");
        Ok(())
    }

    /// Deletes one column, cascading to its tasks.
    pub fn delete_column(&mut self, project_id: &str, column_id: &str) -> BoardResult<usize> {
        let cascaded = self.store.delete_column(project_id, column_id)?;
        info!(
            "event=board_mutation module=service op=delete_column status=ok project={project_id} column={column_id} cascaded_tasks={cascaded}"
        );
        self.persist_after("delete_column");
        Ok(cascaded)
    }

    /// Creates one task in the project's intake column.
    pub fn add_task(&mut self, project_id: &str, draft: TaskDraft) -> BoardResult<Task> {
        let task = self.store.add_task(project_id, draft)?;
        let image_kind = task
            .image
            .as_deref()
            .map(|image| classify_image_ref(image).as_str())
            .unwrap_or("none");
        debug!(
            "event=board_mutation module=service op=add_task status=ok project={project_id} task={} column={} image_kind={image_kind}",
            task.id, task.column_id
        );
        self.persist_after("add_task");
        Ok(task)
    }

    /// Replaces one task by id.
    pub fn update_task(&mut self, project_id: &str, task: Task) -> BoardResult<()> {
        let task_id = task.id.clone();
        self.store.update_task(project_id, task)?;
        debug!(
            "event=board_mutation module=service op=update_task status=ok project={project_id} task={task_id}"
        );
        self.persist_after("update_task");
        Ok(())
    }

    /// Removes one task. Confirmation happens at the UI boundary before this
    /// is invoked.
    pub fn delete_task(&mut self, project_id: &str, task_id: &str) -> BoardResult<Task> {
        let task = self.store.delete_task(project_id, task_id)?;
        info!(
            "event=board_mutation module=service op=delete_task status=ok project={project_id} task={task_id}"
        );
        self.persist_after("delete_task");
        Ok(task)
    }

    /// Moves one task to a destination column and index.
    pub fn move_task(
        &mut self,
        project_id: &str,
        task_id: &str,
        dest_column_id: &str,
        dest_index: usize,
    ) -> BoardResult<()> {
        let changed = self
            .store
            .move_task(project_id, task_id, dest_column_id, dest_index)?;
        debug!(
            "event=board_mutation module=service op=move_task status=ok project={project_id} task={task_id} column={dest_column_id} index={dest_index} changed={changed}"
        );
        if changed {
            self.persist_after("move_task");
        }
        Ok(())
    }

    /// Marks one task done. Idempotent.
    pub fn mark_task_done(&mut self, project_id: &str, task_id: &str) -> BoardResult<()> {
        let changed = self.store.mark_task_done(project_id, task_id)?;
        debug!(
            "event=board_mutation module=service op=mark_task_done status=ok project={project_id} task={task_id} changed={changed}"
        );
        if changed {
            self.persist_after("mark_task_done");
        }
        Ok(())
    }

    /// Clears one task's done flag. Idempotent.
    pub fn undo_task_done(&mut self, project_id: &str, task_id: &str) -> BoardResult<()> {
        let changed = self.store.undo_task_done(project_id, task_id)?;
        debug!(
            "event=board_mutation module=service op=undo_task_done status=ok project={project_id} task={task_id} changed={changed}"
        );
        if changed {
            self.persist_after("undo_task_done");
        }
        Ok(())
    }

    /// Creates one project with the default column set and selects it.
    pub fn add_project(&mut self, name: &str) -> BoardResult<Project> {
        let project = self.store.add_project(name)?;
        info!(
            "event=board_mutation module=service op=add_project status=ok project={}",
            project.id
        );
        self.persist_after("add_project");
        Ok(project)
    }

    /// Replaces one project's name and description.
    pub fn edit_project(
        &mut self,
        project_id: &str,
        name: &str,
        description: Option<String>,
    ) -> BoardResult<()> {
        self.store.edit_project(project_id, name, description)?;
        debug!(
            "event=board_mutation module=service op=edit_project status=ok project={project_id}"
        );
        self.persist_after("edit_project");
        Ok(())
    }

    /// Deletes one project. Confirmation happens at the UI boundary.
    pub fn delete_project(&mut self, project_id: &str) -> BoardResult<()> {
        self.store.delete_project(project_id)?;
        info!(
            "event=board_mutation module=service op=delete_project status=ok project={project_id} remaining={}",
            self.store.projects().len()
        );
        self.persist_after("delete_project");
        Ok(())
    }

    /// Moves the current-project pointer. Pure selection; nothing persists.
    pub fn select_project(&mut self, project_id: &str) -> BoardResult<()> {
        self.store.select_project(project_id)?;
        debug!(
            "event=board_mutation module=service op=select_project status=ok project={project_id}"
        );
        Ok(())
    }

    fn persist_after(&self, op: &str) {
        if let Err(err) = self.repo.save(self.store.projects()) {
            // Save failures never reach the caller; the in-memory state
            // stays authoritative for the session.
            warn!(
                "event=snapshot_save module=service op={op} status=error error={err}"
            );
        }
    }
}
