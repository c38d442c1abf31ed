//! Core domain logic for TaskDeck.
//! This crate owns the task store and every rule views rely on.

pub mod config;
pub mod export;
pub mod logging;
pub mod model;
pub mod selectors;
pub mod service;
pub mod store;

pub use config::{ConfigError, CoreConfig};
pub use export::{
    DataExporter, DataImporter, DataSnapshot, ExportError, JsonSnapshotExporter,
    UnavailableDataPort,
};
pub use logging::{init_logging, logging_status, LogLevel, LoggingError};
pub use model::category::{Category, NewCategory, DEFAULT_CATEGORY_NAME};
pub use model::ids::{CategoryId, IdGenerator, SequentialIdGenerator, TodoId, UuidIdGenerator};
pub use model::profile::{Preferences, PreferencesPatch, Profile, ProfilePatch};
pub use model::state::AppState;
pub use model::todo::{NewTodo, Priority, Todo, TodoPatch};
pub use selectors::calendar::{due_date_key, marked_dates, parse_date_key, todos_due_on};
pub use selectors::stats::{priority_breakdown, todo_stats, PriorityBreakdown, TodoStats};
pub use selectors::{
    categories_with_counts, category_label, find_category, find_todo, toggle_category_filter,
    visible_todos, CategoryLabel, CategoryWithCount,
};
pub use service::form::{CategoryForm, FormError, TodoForm};
pub use service::task_service::TaskService;
pub use store::action::{reduce, Action, Outcome};
pub use store::app_store::{AppStore, SubscriptionId};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
