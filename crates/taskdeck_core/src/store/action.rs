//! Store actions and the pure reducer that applies them.
//!
//! # Responsibility
//! - Enumerate every state transition the views may request.
//! - Apply one action to a snapshot and report whether it changed.
//!
//! # Invariants
//! - `reduce` never fails; unknown ids and duplicate inserts are no-ops.
//! - Deleting a category never touches todos.

use crate::model::category::{Category, NewCategory};
use crate::model::ids::{CategoryId, TodoId};
use crate::model::profile::ProfilePatch;
use crate::model::state::AppState;
use crate::model::todo::{replace_if_different, NewTodo, Todo, TodoPatch};

/// One requested state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AddTodo { id: TodoId, todo: NewTodo },
    UpdateTodo { id: TodoId, patch: TodoPatch },
    DeleteTodo(TodoId),
    ToggleTodoStatus(TodoId),
    AddCategory { id: CategoryId, category: NewCategory },
    DeleteCategory(CategoryId),
    SetActiveCategory(Option<CategoryId>),
    UpdateProfile(ProfilePatch),
    ToggleDarkMode,
    ToggleNotifications,
    SetLoading(bool),
    SetError(Option<String>),
}

impl Action {
    /// Stable event name for metadata-only logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddTodo { .. } => "todo_add",
            Self::UpdateTodo { .. } => "todo_update",
            Self::DeleteTodo(_) => "todo_delete",
            Self::ToggleTodoStatus(_) => "todo_toggle",
            Self::AddCategory { .. } => "category_add",
            Self::DeleteCategory(_) => "category_delete",
            Self::SetActiveCategory(_) => "category_select",
            Self::UpdateProfile(_) => "profile_update",
            Self::ToggleDarkMode => "dark_mode_toggle",
            Self::ToggleNotifications => "notifications_toggle",
            Self::SetLoading(_) => "loading_set",
            Self::SetError(_) => "error_set",
        }
    }
}

/// Result of reducing one action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The snapshot changed.
    Applied,
    /// Target missing, input rejected, or value already in place.
    Ignored,
}

impl Outcome {
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }

    fn from_changed(changed: bool) -> Self {
        if changed {
            Self::Applied
        } else {
            Self::Ignored
        }
    }
}

/// Applies `action` to `state` in place.
pub fn reduce(state: &mut AppState, action: Action) -> Outcome {
    match action {
        Action::AddTodo { id, mut todo } => {
            let title = todo.title.trim();
            if title.is_empty() || state.todos.iter().any(|existing| existing.id == id) {
                return Outcome::Ignored;
            }
            todo.title = title.to_string();
            state.todos.push(Todo::from_new(id, todo));
            Outcome::Applied
        }
        Action::UpdateTodo { id, patch } => match state.todos.iter_mut().find(|t| t.id == id) {
            Some(todo) => Outcome::from_changed(patch.apply_to(todo)),
            None => Outcome::Ignored,
        },
        Action::DeleteTodo(id) => {
            let before = state.todos.len();
            state.todos.retain(|todo| todo.id != id);
            Outcome::from_changed(state.todos.len() != before)
        }
        Action::ToggleTodoStatus(id) => match state.todos.iter_mut().find(|t| t.id == id) {
            Some(todo) => {
                todo.completed = !todo.completed;
                Outcome::Applied
            }
            None => Outcome::Ignored,
        },
        Action::AddCategory { id, category } => {
            if state.categories.iter().any(|existing| existing.id == id) {
                return Outcome::Ignored;
            }
            state.categories.push(Category {
                id,
                name: category.name,
                color: category.color,
            });
            Outcome::Applied
        }
        Action::DeleteCategory(id) => {
            let before = state.categories.len();
            state.categories.retain(|category| category.id != id);
            Outcome::from_changed(state.categories.len() != before)
        }
        Action::SetActiveCategory(selector) => {
            Outcome::from_changed(replace_if_different(&mut state.active_category, selector))
        }
        Action::UpdateProfile(patch) => Outcome::from_changed(patch.apply_to(&mut state.profile)),
        Action::ToggleDarkMode => {
            let preferences = &mut state.profile.preferences;
            preferences.dark_mode = !preferences.dark_mode;
            Outcome::Applied
        }
        Action::ToggleNotifications => {
            let preferences = &mut state.profile.preferences;
            preferences.notifications = !preferences.notifications;
            Outcome::Applied
        }
        Action::SetLoading(is_loading) => {
            Outcome::from_changed(replace_if_different(&mut state.is_loading, is_loading))
        }
        Action::SetError(error) => {
            Outcome::from_changed(replace_if_different(&mut state.error, error))
        }
    }
}
