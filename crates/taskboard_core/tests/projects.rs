use taskboard_core::{BoardError, BoardStore, TaskDraft};

#[test]
fn add_project_creates_default_columns_and_selects_it() {
    let mut store = BoardStore::seeded();

    let project = store.add_project("  Website relaunch  ").unwrap();
    assert_eq!(project.name, "Website relaunch");
    assert!(project.tasks.is_empty());

    let ids: Vec<&str> = project.columns.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["todo", "inprogress", "review", "done"]);

    assert_eq!(store.projects().len(), 2);
    assert_eq!(store.current_project_id(), project.id);
}

#[test]
fn edit_project_replaces_name_and_description() {
    let mut store = BoardStore::seeded();
    let project_id = store.projects()[0].id.clone();

    store
        .edit_project(&project_id, "Renamed", Some("fresh scope".to_string()))
        .unwrap();
    let project = store.project(&project_id).unwrap();
    assert_eq!(project.name, "Renamed");
    assert_eq!(project.description.as_deref(), Some("fresh scope"));

    // Blank description clears the field.
    store.edit_project(&project_id, "Renamed", Some("  ".to_string())).unwrap();
    assert_eq!(store.project(&project_id).unwrap().description, None);
}

#[test]
fn edit_project_rejects_blank_name_without_mutation() {
    let mut store = BoardStore::seeded();
    let project_id = store.projects()[0].id.clone();
    store
        .edit_project(&project_id, "Kept", Some("kept scope".to_string()))
        .unwrap();

    let err = store
        .edit_project(&project_id, "   ", Some("discarded".to_string()))
        .unwrap_err();
    assert!(matches!(err, BoardError::BlankProjectName));

    let project = store.project(&project_id).unwrap();
    assert_eq!(project.name, "Kept");
    assert_eq!(project.description.as_deref(), Some("kept scope"));
}

#[test]
fn delete_project_cascades_and_reselects_first_remaining() {
    let mut store = BoardStore::seeded();
    let first_id = store.projects()[0].id.clone();
    let second = store.add_project("Second").unwrap();
    assert_eq!(store.current_project_id(), second.id);

    store
        .add_task(
            &second.id,
            TaskDraft {
                title: "doomed".to_string(),
                ..TaskDraft::default()
            },
        )
        .unwrap();

    store.delete_project(&second.id).unwrap();
    assert_eq!(store.projects().len(), 1);
    assert!(store.project(&second.id).is_none());
    // Reselection is synchronous and deterministic.
    assert_eq!(store.current_project_id(), first_id);
}

#[test]
fn deleting_a_non_current_project_keeps_selection() {
    let mut store = BoardStore::seeded();
    let first_id = store.projects()[0].id.clone();
    let second = store.add_project("Second").unwrap();

    store.delete_project(&first_id).unwrap();
    assert_eq!(store.current_project_id(), second.id);
}

#[test]
fn deleting_the_only_project_yields_exactly_one_fresh_project() {
    let mut store = BoardStore::seeded();
    let only_id = store.projects()[0].id.clone();

    store.delete_project(&only_id).unwrap();

    assert_eq!(store.projects().len(), 1);
    let fallback = &store.projects()[0];
    assert_ne!(fallback.id, only_id);
    assert_eq!(fallback.name, "New Project");
    assert_eq!(fallback.columns.len(), 4);
    assert!(fallback.tasks.is_empty());
    assert_eq!(store.current_project_id(), fallback.id);
}

#[test]
fn select_project_moves_pointer_without_touching_data() {
    let mut store = BoardStore::seeded();
    let first = store.projects()[0].clone();
    let second = store.add_project("Second").unwrap();
    assert_eq!(store.current_project_id(), second.id);

    store.select_project(&first.id).unwrap();
    assert_eq!(store.current_project_id(), first.id);
    assert_eq!(store.projects()[0], first);

    let err = store.select_project("ghost").unwrap_err();
    assert!(matches!(err, BoardError::ProjectNotFound(id) if id == "ghost"));
    assert_eq!(store.current_project_id(), first.id);
}

#[test]
fn current_project_tracks_selection() {
    let mut store = BoardStore::seeded();
    let second = store.add_project("Second").unwrap();
    assert_eq!(store.current_project().unwrap().id, second.id);
}
