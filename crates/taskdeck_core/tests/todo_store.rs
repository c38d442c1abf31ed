use std::collections::HashSet;
use taskdeck_core::{
    AppStore, CategoryId, NewTodo, Priority, SequentialIdGenerator, TodoId, TodoPatch,
};

#[test]
fn add_todo_assigns_pairwise_unique_ids() {
    let mut store = AppStore::new();
    let titles = ["a", "b", "c", "d", "e", "f", "g", "h"];
    for title in titles {
        store.add_todo(NewTodo::new(title, "1")).unwrap();
    }

    let ids: HashSet<&TodoId> = store.state().todos.iter().map(|todo| &todo.id).collect();
    assert_eq!(store.state().todos.len(), titles.len());
    assert_eq!(ids.len(), titles.len());
}

#[test]
fn add_todo_preserves_insertion_order_and_fields() {
    let mut store = AppStore::new().with_id_generator(SequentialIdGenerator::new("t"));
    store
        .add_todo(
            NewTodo::new("Quarterly report", "1")
                .with_priority(Priority::High)
                .with_due_date(1_700_000_000_000),
        )
        .unwrap();
    store
        .add_todo(NewTodo::new("Call mom", "2").with_completed(true))
        .unwrap();

    let todos = &store.state().todos;
    assert_eq!(todos[0].id.as_str(), "t1");
    assert_eq!(todos[0].priority, Priority::High);
    assert_eq!(todos[0].due_date, Some(1_700_000_000_000));
    assert_eq!(todos[1].id.as_str(), "t2");
    assert!(todos[1].completed);
    assert_eq!(todos[1].priority, Priority::Medium);
}

#[test]
fn blank_title_is_not_added() {
    let mut store = AppStore::new();
    assert_eq!(store.add_todo(NewTodo::new("   ", "1")), None);
    assert!(store.state().todos.is_empty());
}

#[test]
fn update_todo_with_unknown_id_leaves_state_unchanged() {
    let mut store = AppStore::new();
    store.add_todo(NewTodo::new("Buy milk", "3")).unwrap();
    let before = store.state().clone();

    store.update_todo(
        &TodoId::from("missing"),
        TodoPatch {
            title: Some("changed".to_string()),
            completed: Some(true),
            ..TodoPatch::default()
        },
    );

    assert_eq!(store.state(), &before);
}

#[test]
fn update_todo_merges_only_given_fields() {
    let mut store = AppStore::new();
    let id = store
        .add_todo(NewTodo::new("Buy milk", "3").with_priority(Priority::Low))
        .unwrap();

    store.update_todo(
        &id,
        TodoPatch {
            priority: Some(Priority::High),
            category: Some(CategoryId::from("2")),
            ..TodoPatch::default()
        },
    );

    let todo = &store.state().todos[0];
    assert_eq!(todo.title, "Buy milk");
    assert_eq!(todo.priority, Priority::High);
    assert_eq!(todo.category, CategoryId::from("2"));
    assert_eq!(todo.id, id);
}

#[test]
fn toggle_todo_status_is_its_own_inverse() {
    let mut store = AppStore::new();
    let id = store.add_todo(NewTodo::new("Stretch", "2")).unwrap();

    store.toggle_todo_status(&id);
    assert!(store.state().todos[0].completed);
    store.toggle_todo_status(&id);
    assert!(!store.state().todos[0].completed);
}

#[test]
fn delete_and_toggle_unknown_ids_are_no_ops() {
    let mut store = AppStore::new();
    store.add_todo(NewTodo::new("Keep me", "1")).unwrap();
    let before = store.state().clone();

    store.delete_todo(&TodoId::from("nope"));
    store.toggle_todo_status(&TodoId::from("nope"));

    assert_eq!(store.state(), &before);
}

#[test]
fn delete_todo_removes_only_the_target() {
    let mut store = AppStore::new();
    let keep = store.add_todo(NewTodo::new("keep", "1")).unwrap();
    let gone = store.add_todo(NewTodo::new("drop", "1")).unwrap();

    store.delete_todo(&gone);

    assert_eq!(store.state().todos.len(), 1);
    assert_eq!(store.state().todos[0].id, keep);
}

#[test]
fn seed_scenario_keeps_dangling_category_reference() {
    let mut store = AppStore::new();
    let names: Vec<&str> = store
        .state()
        .categories
        .iter()
        .map(|category| category.name.as_str())
        .collect();
    assert_eq!(names, vec!["Work", "Personal", "Shopping"]);
    assert!(store.state().todos.is_empty());

    let id = store
        .add_todo(NewTodo::new("Buy milk", "3").with_priority(Priority::Low))
        .unwrap();
    assert_eq!(store.state().todos.len(), 1);
    assert_eq!(store.state().todos[0].title, "Buy milk");
    assert!(!id.as_str().is_empty());

    store.toggle_todo_status(&id);
    assert!(store.state().todos[0].completed);
    store.toggle_todo_status(&id);
    assert!(!store.state().todos[0].completed);

    store.delete_category(&CategoryId::from("3"));
    assert_eq!(store.state().categories.len(), 2);
    assert_eq!(store.state().todos[0].category, CategoryId::from("3"));
}
