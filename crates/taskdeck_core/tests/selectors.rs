use chrono::NaiveDate;
use taskdeck_core::selectors::calendar::format_date_key;
use taskdeck_core::{
    categories_with_counts, category_label, marked_dates, parse_date_key, priority_breakdown,
    todo_stats, todos_due_on, AppStore, CategoryId, NewTodo, Priority, DEFAULT_CATEGORY_NAME,
};

const DAY_MS: i64 = 24 * 60 * 60 * 1000;
// 2024-03-01T09:00:00Z
const MARCH_1_9AM: i64 = 1_709_283_600_000;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn category_label_falls_back_to_general_for_dangling_ids() {
    let mut store = AppStore::new();
    store.add_todo(NewTodo::new("Groceries", "3")).unwrap();

    let label = category_label(store.state(), &CategoryId::from("3"));
    assert_eq!(label.name, "Shopping");
    assert_eq!(label.color.as_deref(), Some("#3357FF"));
    assert!(!label.is_default());

    store.delete_category(&CategoryId::from("3"));
    let label = category_label(store.state(), &store.state().todos[0].category);
    assert_eq!(label.name, DEFAULT_CATEGORY_NAME);
    assert!(label.is_default());
}

#[test]
fn category_counts_track_references() {
    let mut store = AppStore::new();
    store.add_todo(NewTodo::new("Report", "1")).unwrap();
    store.add_todo(NewTodo::new("Slides", "1")).unwrap();
    store.add_todo(NewTodo::new("Milk", "3")).unwrap();
    store.add_todo(NewTodo::new("Orphan", "gone")).unwrap();

    let counts: Vec<(String, usize)> = categories_with_counts(store.state())
        .into_iter()
        .map(|row| (row.category.name, row.todo_count))
        .collect();
    assert_eq!(
        counts,
        vec![
            ("Work".to_string(), 2),
            ("Personal".to_string(), 0),
            ("Shopping".to_string(), 1),
        ]
    );

    let orphans = taskdeck_core::selectors::uncategorized_todos(store.state());
    assert_eq!(orphans.len(), 1);
    assert_eq!(orphans[0].title, "Orphan");
}

#[test]
fn stats_split_completed_and_pending() {
    let mut store = AppStore::new();
    assert!(todo_stats(store.state()).is_empty());

    let first = store.add_todo(NewTodo::new("a", "1")).unwrap();
    store
        .add_todo(NewTodo::new("b", "1").with_priority(Priority::High))
        .unwrap();
    store
        .add_todo(NewTodo::new("c", "2").with_priority(Priority::Low))
        .unwrap();
    store.toggle_todo_status(&first);

    let stats = todo_stats(store.state());
    assert_eq!(stats.total, 3);
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.pending, 2);
    assert_eq!(stats.completion_percent(), 33);

    let breakdown = priority_breakdown(store.state());
    assert_eq!(breakdown.count(Priority::Low), 1);
    assert_eq!(breakdown.count(Priority::Medium), 1);
    assert_eq!(breakdown.count(Priority::High), 1);
}

#[test]
fn calendar_groups_todos_by_utc_day() {
    let mut store = AppStore::new();
    let early = store
        .add_todo(NewTodo::new("Standup", "1").with_due_date(MARCH_1_9AM))
        .unwrap();
    let late = store
        .add_todo(NewTodo::new("Dinner", "2").with_due_date(MARCH_1_9AM + 10 * 60 * 60 * 1000))
        .unwrap();
    let next = store
        .add_todo(NewTodo::new("Dentist", "2").with_due_date(MARCH_1_9AM + DAY_MS))
        .unwrap();
    store.add_todo(NewTodo::new("Someday", "2")).unwrap();

    let marks = marked_dates(store.state());
    assert_eq!(marks.len(), 2);
    assert_eq!(marks[&day(2024, 3, 1)], vec![early, late]);
    assert_eq!(marks[&day(2024, 3, 2)], vec![next]);

    let selected = parse_date_key("2024-03-02").unwrap();
    let due: Vec<&str> = todos_due_on(store.state(), selected)
        .into_iter()
        .map(|todo| todo.title.as_str())
        .collect();
    assert_eq!(due, vec!["Dentist"]);
    assert!(todos_due_on(store.state(), day(2024, 3, 3)).is_empty());
    assert_eq!(format_date_key(selected), "2024-03-02");
}
