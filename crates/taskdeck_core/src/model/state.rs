//! Aggregate root owning every collection the views read.

use crate::model::category::{seed_categories, Category};
use crate::model::ids::CategoryId;
use crate::model::profile::Profile;
use crate::model::todo::Todo;
use serde::{Deserialize, Serialize};

/// Full application snapshot.
///
/// `is_loading` and `error` are reserved for asynchronous work; no action
/// other than `set_loading`/`set_error` touches them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    pub todos: Vec<Todo>,
    pub categories: Vec<Category>,
    pub profile: Profile,
    /// Filter selector; `None` means all categories. Never validated.
    pub active_category: Option<CategoryId>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl AppState {
    /// Fresh-start state: seed categories, no todos, default profile.
    pub fn seed() -> Self {
        Self::with_seed(seed_categories(), Profile::default())
    }

    pub fn with_seed(categories: Vec<Category>, profile: Profile) -> Self {
        Self {
            todos: Vec::new(),
            categories,
            profile,
            active_category: None,
            is_loading: false,
            error: None,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::seed()
    }
}

#[cfg(test)]
mod tests {
    use super::AppState;

    #[test]
    fn seed_has_three_categories_and_no_todos() {
        let state = AppState::seed();
        let names: Vec<&str> = state.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Work", "Personal", "Shopping"]);
        assert!(state.todos.is_empty());
        assert_eq!(state.active_category, None);
        assert!(!state.is_loading);
        assert_eq!(state.error, None);
        assert_eq!(state.profile.username, "User");
        assert!(!state.profile.preferences.dark_mode);
        assert!(state.profile.preferences.notifications);
    }
}
