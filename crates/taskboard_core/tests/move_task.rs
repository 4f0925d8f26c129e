use taskboard_core::model::board::{Column, Project, Task};
use taskboard_core::{BoardError, BoardStore};

fn column(id: &str, order: i64) -> Column {
    Column {
        id: id.to_string(),
        title: id.to_string(),
        order,
    }
}

fn task(id: &str, column_id: &str) -> Task {
    Task {
        id: id.to_string(),
        title: format!("Task {id}"),
        description: None,
        image: None,
        column_id: column_id.to_string(),
        done: None,
    }
}

fn store_with_tasks(columns: Vec<Column>, tasks: Vec<Task>) -> (BoardStore, String) {
    let project = Project {
        id: "p1".to_string(),
        name: "P".to_string(),
        description: None,
        columns,
        tasks,
    };
    let store = BoardStore::from_projects(vec![project]);
    (store, "p1".to_string())
}

fn column_view(store: &BoardStore, project_id: &str, column_id: &str) -> Vec<String> {
    store
        .project(project_id)
        .unwrap()
        .tasks_in_column(column_id)
        .iter()
        .map(|task| task.id.clone())
        .collect()
}

#[test]
fn move_to_other_column_reassigns_reference_and_empties_source_view() {
    let (mut store, project_id) = store_with_tasks(
        vec![column("todo", 0), column("done", 1)],
        vec![task("t", "todo")],
    );

    store.move_task(&project_id, "t", "done", 0).unwrap();

    let project = store.project(&project_id).unwrap();
    assert_eq!(project.task("t").unwrap().column_id, "done");
    assert!(column_view(&store, &project_id, "todo").is_empty());
    assert_eq!(column_view(&store, &project_id, "done"), vec!["t"]);
}

#[test]
fn move_within_column_reorders_filtered_view() {
    let (mut store, project_id) = store_with_tasks(
        vec![column("todo", 0)],
        vec![task("a", "todo"), task("b", "todo"), task("c", "todo")],
    );

    store.move_task(&project_id, "c", "todo", 0).unwrap();
    assert_eq!(column_view(&store, &project_id, "todo"), vec!["c", "a", "b"]);
}

#[test]
fn move_index_beyond_destination_length_clamps_to_end() {
    let (mut store, project_id) = store_with_tasks(
        vec![column("todo", 0), column("done", 1)],
        vec![task("a", "todo"), task("x", "done"), task("y", "done")],
    );

    store.move_task(&project_id, "a", "done", 99).unwrap();
    assert_eq!(
        column_view(&store, &project_id, "done"),
        vec!["x", "y", "a"]
    );
}

#[test]
fn move_with_identical_source_and_destination_is_a_no_op() {
    let (mut store, project_id) = store_with_tasks(
        vec![column("todo", 0)],
        vec![task("a", "todo"), task("b", "todo")],
    );
    let tasks_before = store.project(&project_id).unwrap().tasks.clone();

    // "b" already sits at index 1 of "todo".
    store.move_task(&project_id, "b", "todo", 1).unwrap();
    assert_eq!(store.project(&project_id).unwrap().tasks, tasks_before);
}

#[test]
fn repeating_a_move_with_identical_arguments_is_idempotent() {
    let (mut store, project_id) = store_with_tasks(
        vec![column("todo", 0), column("done", 1)],
        vec![
            task("a", "todo"),
            task("b", "todo"),
            task("x", "done"),
        ],
    );

    store.move_task(&project_id, "a", "done", 1).unwrap();
    let after_first = store.project(&project_id).unwrap().clone();

    store.move_task(&project_id, "a", "done", 1).unwrap();
    assert_eq!(store.project(&project_id).unwrap(), &after_first);
}

#[test]
fn repeating_a_clamped_move_is_idempotent() {
    let (mut store, project_id) = store_with_tasks(
        vec![column("todo", 0), column("done", 1)],
        vec![task("a", "todo"), task("x", "done")],
    );

    store.move_task(&project_id, "a", "done", 42).unwrap();
    let after_first = store.project(&project_id).unwrap().clone();

    store.move_task(&project_id, "a", "done", 42).unwrap();
    assert_eq!(store.project(&project_id).unwrap(), &after_first);
    assert_eq!(column_view(&store, &project_id, "done"), vec!["x", "a"]);
}

#[test]
fn move_preserves_other_columns_views() {
    let (mut store, project_id) = store_with_tasks(
        vec![column("todo", 0), column("doing", 1), column("done", 2)],
        vec![
            task("a", "todo"),
            task("b", "doing"),
            task("c", "doing"),
            task("d", "done"),
        ],
    );

    store.move_task(&project_id, "a", "done", 0).unwrap();

    assert_eq!(column_view(&store, &project_id, "doing"), vec!["b", "c"]);
    assert_eq!(column_view(&store, &project_id, "done"), vec!["a", "d"]);
    assert!(column_view(&store, &project_id, "todo").is_empty());
}

#[test]
fn move_to_unknown_column_is_rejected_without_mutation() {
    let (mut store, project_id) = store_with_tasks(
        vec![column("todo", 0)],
        vec![task("a", "todo")],
    );
    let tasks_before = store.project(&project_id).unwrap().tasks.clone();

    let err = store.move_task(&project_id, "a", "nowhere", 0).unwrap_err();
    assert!(matches!(
        err,
        BoardError::ColumnNotFound { column_id, .. } if column_id == "nowhere"
    ));
    assert_eq!(store.project(&project_id).unwrap().tasks, tasks_before);
}

#[test]
fn move_of_unknown_task_is_rejected() {
    let (mut store, project_id) =
        store_with_tasks(vec![column("todo", 0)], vec![task("a", "todo")]);

    let err = store.move_task(&project_id, "ghost", "todo", 0).unwrap_err();
    assert!(matches!(
        err,
        BoardError::TaskNotFound { task_id, .. } if task_id == "ghost"
    ));
}
