//! FFI use-case API for mobile UI calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Own the one `AppStore` instance for the process and serialize writes.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Views read snapshots; every mutation goes through a store action.
//! - State is in-memory only and resets to the seed on process start.

use log::warn;
use once_cell::sync::Lazy;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use taskdeck_core::selectors::calendar::format_date_key;
use taskdeck_core::{
    categories_with_counts, category_label, core_version as core_version_inner,
    init_logging as init_logging_inner, marked_dates, parse_date_key, ping as ping_inner,
    priority_breakdown, todo_stats, todos_due_on, toggle_category_filter, visible_todos,
    AppState, AppStore, CategoryForm, CategoryId, DataExporter, DataImporter,
    JsonSnapshotExporter, LogLevel, Priority, TaskService, Todo, TodoForm, TodoId,
    UnavailableDataPort,
};

static STORE: Lazy<Mutex<AppStore>> = Lazy::new(|| Mutex::new(AppStore::new()));

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    let result = level
        .parse::<LogLevel>()
        .and_then(|level| init_logging_inner(level, Path::new(log_dir.as_str())));
    match result {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Todo row with its category label already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    pub id: String,
    pub title: String,
    pub completed: bool,
    pub due_date: Option<i64>,
    /// `low|medium|high`.
    pub priority: String,
    pub category_id: String,
    /// Category name, or "General" when the category no longer exists.
    pub category_name: String,
    /// `None` when the view should use its theme color.
    pub category_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryItem {
    pub id: String,
    pub name: String,
    pub color: String,
    pub todo_count: u32,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub username: String,
    pub avatar: Option<String>,
    pub dark_mode: bool,
    pub notifications: bool,
}

/// Full read model for one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSnapshot {
    pub todos: Vec<TodoItem>,
    pub categories: Vec<CategoryItem>,
    pub profile: ProfileView,
    pub active_category: Option<String>,
    pub is_loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsSummary {
    pub total: u32,
    pub completed: u32,
    pub pending: u32,
    pub completion_percent: u8,
    pub low: u32,
    pub medium: u32,
    pub high: u32,
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    pub ok: bool,
    /// Created record id, when the action creates one.
    pub id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>, id: Option<String>) -> Self {
        Self {
            ok: true,
            id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            id: None,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataExportResponse {
    pub ok: bool,
    pub payload: Option<String>,
    pub message: String,
}

/// Returns the whole store read model.
#[flutter_rust_bridge::frb(sync)]
pub fn store_snapshot() -> StoreSnapshot {
    let store = lock_store();
    let state = store.state();
    StoreSnapshot {
        todos: state
            .todos
            .iter()
            .map(|todo| to_todo_item(state, todo))
            .collect(),
        categories: categories_with_counts(state)
            .into_iter()
            .map(|row| CategoryItem {
                active: state.active_category.as_ref() == Some(&row.category.id),
                id: row.category.id.to_string(),
                name: row.category.name,
                color: row.category.color,
                todo_count: clamp_count(row.todo_count),
            })
            .collect(),
        profile: ProfileView {
            username: state.profile.username.clone(),
            avatar: state.profile.avatar.clone(),
            dark_mode: state.profile.preferences.dark_mode,
            notifications: state.profile.preferences.notifications,
        },
        active_category: state.active_category.as_ref().map(ToString::to_string),
        is_loading: state.is_loading,
        error: state.error.clone(),
    }
}

/// Home list: todos matching the active category filter.
#[flutter_rust_bridge::frb(sync)]
pub fn todos_visible() -> Vec<TodoItem> {
    let store = lock_store();
    let state = store.state();
    visible_todos(state)
        .into_iter()
        .map(|todo| to_todo_item(state, todo))
        .collect()
}

/// Creates a todo from the create form.
///
/// # FFI contract
/// - Unknown `priority` strings fall back to `medium`.
/// - Blank title or empty category return `ok=false`.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_add(
    title: String,
    category_id: String,
    priority: String,
    completed: bool,
    due_date: Option<i64>,
) -> ActionResponse {
    let form = TodoForm {
        title,
        category: Some(CategoryId::new(category_id)),
        priority: Priority::parse(priority.as_str()).unwrap_or_default(),
        completed,
        due_date,
    };
    let mut store = lock_store();
    match TaskService::new(&mut store).create_todo(&form) {
        Ok(id) => ActionResponse::success("Todo created.", Some(id.to_string())),
        Err(err) => ActionResponse::failure(format!("todo_add failed: {err}")),
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn todo_update_title(id: String, title: String) -> ActionResponse {
    let mut store = lock_store();
    match TaskService::new(&mut store).rename_todo(&TodoId::new(id), title.as_str()) {
        Ok(()) => ActionResponse::success("Todo updated.", None),
        Err(err) => ActionResponse::failure(format!("todo_update_title failed: {err}")),
    }
}

/// Deletes a todo; unknown ids are a silent no-op.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_delete(id: String) {
    lock_store().delete_todo(&TodoId::new(id));
}

#[flutter_rust_bridge::frb(sync)]
pub fn todo_toggle(id: String) {
    lock_store().toggle_todo_status(&TodoId::new(id));
}

#[flutter_rust_bridge::frb(sync)]
pub fn category_add(name: String, color: String) -> ActionResponse {
    let form = CategoryForm { name, color };
    let mut store = lock_store();
    match TaskService::new(&mut store).create_category(&form) {
        Ok(id) => ActionResponse::success("Category created.", Some(id.to_string())),
        Err(err) => ActionResponse::failure(format!("category_add failed: {err}")),
    }
}

/// Deletes a category; todos keep their now-dangling reference.
#[flutter_rust_bridge::frb(sync)]
pub fn category_delete(id: String) {
    lock_store().delete_category(&CategoryId::new(id));
}

/// Sets the list filter; `None` shows all categories.
#[flutter_rust_bridge::frb(sync)]
pub fn category_select(id: Option<String>) {
    lock_store().set_active_category(id.map(CategoryId::new));
}

/// Category row tap: selects it, or clears the filter if already active.
#[flutter_rust_bridge::frb(sync)]
pub fn category_tap(id: String) -> Option<String> {
    let mut store = lock_store();
    let next = toggle_category_filter(
        store.state().active_category.as_ref(),
        &CategoryId::new(id),
    );
    store.set_active_category(next.clone());
    next.map(|id| id.to_string())
}

#[flutter_rust_bridge::frb(sync)]
pub fn profile_set_username(username: String) -> ActionResponse {
    let mut store = lock_store();
    match TaskService::new(&mut store).change_username(username.as_str()) {
        Ok(()) => ActionResponse::success("Username updated.", None),
        Err(err) => ActionResponse::failure(format!("profile_set_username failed: {err}")),
    }
}

/// Returns the new `dark_mode` value.
#[flutter_rust_bridge::frb(sync)]
pub fn profile_toggle_dark_mode() -> bool {
    let mut store = lock_store();
    store.toggle_dark_mode();
    store.state().profile.preferences.dark_mode
}

/// Returns the new `notifications` value.
#[flutter_rust_bridge::frb(sync)]
pub fn profile_toggle_notifications() -> bool {
    let mut store = lock_store();
    store.toggle_notifications();
    store.state().profile.preferences.notifications
}

#[flutter_rust_bridge::frb(sync)]
pub fn stats_summary() -> StatsSummary {
    let store = lock_store();
    let stats = todo_stats(store.state());
    let priorities = priority_breakdown(store.state());
    StatsSummary {
        total: clamp_count(stats.total),
        completed: clamp_count(stats.completed),
        pending: clamp_count(stats.pending),
        completion_percent: stats.completion_percent(),
        low: clamp_count(priorities.low),
        medium: clamp_count(priorities.medium),
        high: clamp_count(priorities.high),
    }
}

/// Day keys (`YYYY-MM-DD`, UTC) that carry at least one due todo.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_marked_days() -> Vec<String> {
    let store = lock_store();
    marked_dates(store.state())
        .into_keys()
        .map(format_date_key)
        .collect()
}

/// Todos due on `date_key`; an unparseable key yields an empty list.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_todos_on(date_key: String) -> Vec<TodoItem> {
    let Some(day) = parse_date_key(date_key.as_str()) else {
        return Vec::new();
    };
    let store = lock_store();
    let state = store.state();
    todos_due_on(state, day)
        .into_iter()
        .map(|todo| to_todo_item(state, todo))
        .collect()
}

/// Renders the current data as a JSON snapshot (in memory, no file I/O).
#[flutter_rust_bridge::frb(sync)]
pub fn data_export() -> DataExportResponse {
    let exporter = JsonSnapshotExporter { pretty: true };
    let store = lock_store();
    match exporter.export(store.state()) {
        Ok(payload) => DataExportResponse {
            ok: true,
            payload: Some(payload),
            message: "Data exported.".to_string(),
        },
        Err(err) => DataExportResponse {
            ok: false,
            payload: None,
            message: format!("data_export failed: {err}"),
        },
    }
}

/// Import has no backing implementation yet; always reports failure.
#[flutter_rust_bridge::frb(sync)]
pub fn data_import(payload: String) -> ActionResponse {
    match UnavailableDataPort.import(payload.as_str()) {
        Ok(_) => ActionResponse::success("Data imported.", None),
        Err(err) => ActionResponse::failure(format!("data_import failed: {err}")),
    }
}

fn lock_store() -> MutexGuard<'static, AppStore> {
    STORE.lock().unwrap_or_else(|poisoned| {
        warn!("event=store_lock module=ffi status=recovered_poison");
        poisoned.into_inner()
    })
}

fn to_todo_item(state: &AppState, todo: &Todo) -> TodoItem {
    let label = category_label(state, &todo.category);
    TodoItem {
        id: todo.id.to_string(),
        title: todo.title.clone(),
        completed: todo.completed,
        due_date: todo.due_date,
        priority: todo.priority.as_str().to_string(),
        category_id: todo.category.to_string(),
        category_name: label.name,
        category_color: label.color,
    }
}

fn clamp_count(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
