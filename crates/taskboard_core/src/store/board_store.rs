//! Board state store and mutation operations.
//!
//! # Responsibility
//! - Hold all projects plus the "current project" pointer used by read views.
//! - Validate and apply column/task/project mutations in place.
//!
//! # Invariants
//! - At least one project exists at all times; deleting the last project
//!   synthesizes a fresh default project and selects it.
//! - Every task's `column_id` names a column in the same project, except for
//!   tasks carried through the documented repair-on-load quirk.
//! - An `Err` return means no mutation occurred.

use crate::model::board::{
    default_columns, demo_project, fresh_id, Column, ColumnId, Project, ProjectId, Task, TaskId,
};
use crate::model::image_ref::normalize_image_ref;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type used by board store operations.
pub type BoardResult<T> = Result<T, BoardError>;

/// Semantic errors from board mutations.
///
/// Validation rejections (`Blank*`) carry no-op semantics: callers that
/// ignore them observe exactly the silent short-circuit behavior of the UI
/// boundary, because rejected operations never mutate the store.
#[derive(Debug)]
pub enum BoardError {
    /// Target project does not exist.
    ProjectNotFound(ProjectId),
    /// Target column does not exist in the project.
    ColumnNotFound {
        project_id: ProjectId,
        column_id: ColumnId,
    },
    /// Target task does not exist in the project.
    TaskNotFound {
        project_id: ProjectId,
        task_id: TaskId,
    },
    /// Column title is blank after trim.
    BlankColumnTitle,
    /// Task title is blank after trim.
    BlankTaskTitle,
    /// Project name is blank after trim.
    BlankProjectName,
    /// Project has no columns, so there is no intake column for new tasks.
    NoIntakeColumn(ProjectId),
}

impl Display for BoardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ProjectNotFound(id) => write!(f, "project not found: {id}"),
            Self::ColumnNotFound {
                project_id,
                column_id,
            } => write!(f, "column not found: {column_id} in project {project_id}"),
            Self::TaskNotFound {
                project_id,
                task_id,
            } => write!(f, "task not found: {task_id} in project {project_id}"),
            Self::BlankColumnTitle => write!(f, "column title must not be blank"),
            Self::BlankTaskTitle => write!(f, "task title must not be blank"),
            Self::BlankProjectName => write!(f, "project name must not be blank"),
            Self::NoIntakeColumn(id) => {
                write!(f, "project has no intake column for new tasks: {id}")
            }
        }
    }
}

impl Error for BoardError {}

/// Form input for creating one task.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// Whole-board state container.
///
/// Mutations apply in place under single-writer discipline; the persisted
/// document is always derived from [`BoardStore::projects`].
#[derive(Debug, Clone)]
pub struct BoardStore {
    projects: Vec<Project>,
    current_project_id: ProjectId,
}

impl BoardStore {
    /// Builds a store from restored projects.
    ///
    /// An empty restore falls back to the demo seed so the non-empty
    /// invariant holds from the first read. The first project is selected.
    pub fn from_projects(projects: Vec<Project>) -> Self {
        let projects = if projects.is_empty() {
            vec![demo_project()]
        } else {
            projects
        };
        let current_project_id = projects[0].id.clone();
        Self {
            projects,
            current_project_id,
        }
    }

    /// Builds a store holding only the demo seed project.
    pub fn seeded() -> Self {
        Self::from_projects(vec![demo_project()])
    }

    /// All projects, in stable order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Id of the currently selected project.
    pub fn current_project_id(&self) -> &str {
        &self.current_project_id
    }

    /// Currently selected project.
    pub fn current_project(&self) -> Option<&Project> {
        self.project(&self.current_project_id)
    }

    /// Looks up one project by id.
    pub fn project(&self, project_id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == project_id)
    }

    /// Total task count across all projects.
    pub fn task_count(&self) -> usize {
        self.projects.iter().map(|p| p.tasks.len()).sum()
    }

    /// Appends an `Uncategorized` column with `order` = current column count.
    pub fn add_column(&mut self, project_id: &str) -> BoardResult<Column> {
        let project = self.project_mut(project_id)?;
        let column = Column {
            id: fresh_id(),
            title: "Uncategorized".to_string(),
            order: project.columns.len() as i64,
        };
        project.columns.push(column.clone());
        Ok(column)
    }

    /// Renames one column. Blank-after-trim titles are rejected.
    pub fn rename_column(
        &mut self,
        project_id: &str,
        column_id: &str,
        new_title: &str,
    ) -> BoardResult<()> {
        let trimmed = new_title.trim();
        if trimmed.is_empty() {
            return Err(BoardError::BlankColumnTitle);
        }
        let project = self.project_mut(project_id)?;
        let column = project
            .columns
            .iter_mut()
            .find(|column| column.id == column_id)
            .ok_or_else(|| BoardError::ColumnNotFound {
                project_id: project_id.to_string(),
                column_id: column_id.to_string(),
            })?;
        column.title = trimmed.to_string();
        Ok(())
    }

    /// Deletes one column and cascades to every task referencing it.
    ///
    /// Returns the number of cascaded tasks.
    pub fn delete_column(&mut self, project_id: &str, column_id: &str) -> BoardResult<usize> {
        let project = self.project_mut(project_id)?;
        let before = project.columns.len();
        project.columns.retain(|column| column.id != column_id);
        if project.columns.len() == before {
            return Err(BoardError::ColumnNotFound {
                project_id: project_id.to_string(),
                column_id: column_id.to_string(),
            });
        }
        let task_count_before = project.tasks.len();
        project.tasks.retain(|task| task.column_id != column_id);
        Ok(task_count_before - project.tasks.len())
    }

    /// Creates one task in the project's intake column (leftmost by order).
    pub fn add_task(&mut self, project_id: &str, draft: TaskDraft) -> BoardResult<Task> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(BoardError::BlankTaskTitle);
        }
        let project = self.project_mut(project_id)?;
        let intake_column_id = project
            .intake_column()
            .map(|column| column.id.clone())
            .ok_or_else(|| BoardError::NoIntakeColumn(project_id.to_string()))?;
        let task = Task {
            id: fresh_id(),
            title: title.to_string(),
            description: normalize_optional_text(draft.description),
            image: normalize_image_ref(draft.image),
            column_id: intake_column_id,
            done: None,
        };
        project.tasks.push(task.clone());
        Ok(task)
    }

    /// Replaces one task by id. All fields are replaceable, including the
    /// column reference (which must name an existing column) and the image.
    pub fn update_task(&mut self, project_id: &str, task: Task) -> BoardResult<()> {
        let title = task.title.trim().to_string();
        if title.is_empty() {
            return Err(BoardError::BlankTaskTitle);
        }
        let project = self.project_mut(project_id)?;
        if project.column(&task.column_id).is_none() {
            return Err(BoardError::ColumnNotFound {
                project_id: project_id.to_string(),
                column_id: task.column_id.clone(),
            });
        }
        let slot = project
            .tasks
            .iter_mut()
            .find(|current| current.id == task.id)
            .ok_or_else(|| BoardError::TaskNotFound {
                project_id: project_id.to_string(),
                task_id: task.id.clone(),
            })?;
        *slot = Task {
            id: task.id,
            title,
            description: normalize_optional_text(task.description),
            image: normalize_image_ref(task.image),
            column_id: task.column_id,
            done: task.done,
        };
        Ok(())
    }

    /// Removes one task and returns it.
    ///
    /// The destructive-action speedbump lives at the UI boundary; by the time
    /// this runs the deletion is confirmed.
    pub fn delete_task(&mut self, project_id: &str, task_id: &str) -> BoardResult<Task> {
        let project = self.project_mut(project_id)?;
        let position = project
            .tasks
            .iter()
            .position(|task| task.id == task_id)
            .ok_or_else(|| BoardError::TaskNotFound {
                project_id: project_id.to_string(),
                task_id: task_id.to_string(),
            })?;
        Ok(project.tasks.remove(position))
    }

    /// Moves one task to `dest_column_id` at `dest_index` within that
    /// column's filtered list.
    ///
    /// Returns `false` without mutating when destination column and index
    /// equal the task's current position. The index is clamped to
    /// `[0, destination task count]`.
    pub fn move_task(
        &mut self,
        project_id: &str,
        task_id: &str,
        dest_column_id: &str,
        dest_index: usize,
    ) -> BoardResult<bool> {
        let project = self.project_mut(project_id)?;
        if project.column(dest_column_id).is_none() {
            return Err(BoardError::ColumnNotFound {
                project_id: project_id.to_string(),
                column_id: dest_column_id.to_string(),
            });
        }
        let position = project
            .tasks
            .iter()
            .position(|task| task.id == task_id)
            .ok_or_else(|| BoardError::TaskNotFound {
                project_id: project_id.to_string(),
                task_id: task_id.to_string(),
            })?;

        let src_column_id = project.tasks[position].column_id.clone();
        let src_index = project
            .tasks
            .iter()
            .take(position)
            .filter(|task| task.column_id == src_column_id)
            .count();
        if src_column_id == dest_column_id && src_index == dest_index {
            return Ok(false);
        }

        let mut task = project.tasks.remove(position);
        task.column_id = dest_column_id.to_string();

        // Reconstitute as (tasks outside destination) ++ (destination tasks
        // with the moved task spliced in). Per-column order is all that read
        // views observe, so the group concatenation order is free.
        let (mut dest_tasks, foreign): (Vec<Task>, Vec<Task>) = project
            .tasks
            .drain(..)
            .partition(|current| current.column_id == dest_column_id);
        let index = dest_index.min(dest_tasks.len());
        dest_tasks.insert(index, task);
        project.tasks = foreign;
        project.tasks.extend(dest_tasks);
        Ok(true)
    }

    /// Sets the task's done flag. Idempotent; returns whether state changed.
    pub fn mark_task_done(&mut self, project_id: &str, task_id: &str) -> BoardResult<bool> {
        let task = self.task_mut(project_id, task_id)?;
        if task.is_done() {
            return Ok(false);
        }
        task.done = Some(true);
        Ok(true)
    }

    /// Clears the task's done flag. Idempotent; a flag that was never set
    /// stays absent. Returns whether state changed.
    pub fn undo_task_done(&mut self, project_id: &str, task_id: &str) -> BoardResult<bool> {
        let task = self.task_mut(project_id, task_id)?;
        if !task.is_done() {
            return Ok(false);
        }
        task.done = Some(false);
        Ok(true)
    }

    /// Creates one project with the default column set and selects it.
    pub fn add_project(&mut self, name: &str) -> BoardResult<Project> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(BoardError::BlankProjectName);
        }
        let project = Project {
            id: fresh_id(),
            name: trimmed.to_string(),
            description: None,
            columns: default_columns(),
            tasks: Vec::new(),
        };
        self.current_project_id = project.id.clone();
        self.projects.push(project.clone());
        Ok(project)
    }

    /// Replaces one project's name and description.
    pub fn edit_project(
        &mut self,
        project_id: &str,
        name: &str,
        description: Option<String>,
    ) -> BoardResult<()> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(BoardError::BlankProjectName);
        }
        let project = self.project_mut(project_id)?;
        project.name = trimmed.to_string();
        project.description = normalize_optional_text(description);
        Ok(())
    }

    /// Deletes one project, cascading to its columns and tasks.
    ///
    /// Deleting the last project synthesizes a fresh default project and
    /// selects it. Deleting the current project reselects the first
    /// remaining project synchronously.
    pub fn delete_project(&mut self, project_id: &str) -> BoardResult<()> {
        let position = self
            .projects
            .iter()
            .position(|project| project.id == project_id)
            .ok_or_else(|| BoardError::ProjectNotFound(project_id.to_string()))?;
        self.projects.remove(position);

        if self.projects.is_empty() {
            let fallback = Project {
                id: fresh_id(),
                name: "New Project".to_string(),
                description: None,
                columns: default_columns(),
                tasks: Vec::new(),
            };
            self.current_project_id = fallback.id.clone();
            self.projects.push(fallback);
        } else if self.current_project_id == project_id {
            self.current_project_id = self.projects[0].id.clone();
        }
        Ok(())
    }

    /// Moves the current-project pointer. No underlying data changes.
    pub fn select_project(&mut self, project_id: &str) -> BoardResult<()> {
        if self.project(project_id).is_none() {
            return Err(BoardError::ProjectNotFound(project_id.to_string()));
        }
        self.current_project_id = project_id.to_string();
        Ok(())
    }

    fn project_mut(&mut self, project_id: &str) -> BoardResult<&mut Project> {
        self.projects
            .iter_mut()
            .find(|project| project.id == project_id)
            .ok_or_else(|| BoardError::ProjectNotFound(project_id.to_string()))
    }

    fn task_mut(&mut self, project_id: &str, task_id: &str) -> BoardResult<&mut Task> {
        let project = self.project_mut(project_id)?;
        project
            .tasks
            .iter_mut()
            .find(|task| task.id == task_id)
            .ok_or_else(|| BoardError::TaskNotFound {
                project_id: project_id.to_string(),
                task_id: task_id.to_string(),
            })
    }
}

fn normalize_optional_text(value: Option<String>) -> Option<String> {
    let value = value?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}
