//! Read-side projections over an `AppState` snapshot.
//!
//! # Responsibility
//! - Answer the questions views ask: filtered lists, lookups, counts,
//!   calendar buckets and completion stats.
//!
//! # Invariants
//! - Selectors are pure and never fail.
//! - Unknown category ids resolve to the default "General" label.
//! - A dangling active-category selector yields an empty list.

pub mod calendar;
pub mod stats;

use crate::model::category::{Category, DEFAULT_CATEGORY_NAME};
use crate::model::ids::{CategoryId, TodoId};
use crate::model::state::AppState;
use crate::model::todo::Todo;

/// Display label resolved for a todo's category reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryLabel {
    pub name: String,
    /// `None` for the default label; views fall back to their theme color.
    pub color: Option<String>,
}

impl CategoryLabel {
    pub fn is_default(&self) -> bool {
        self.color.is_none() && self.name == DEFAULT_CATEGORY_NAME
    }
}

/// Category row with the number of todos referencing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryWithCount {
    pub category: Category,
    pub todo_count: usize,
}

/// Todos matching the active category filter, in insertion order.
pub fn visible_todos(state: &AppState) -> Vec<&Todo> {
    match state.active_category.as_ref() {
        Some(active) => state
            .todos
            .iter()
            .filter(|todo| &todo.category == active)
            .collect(),
        None => state.todos.iter().collect(),
    }
}

pub fn find_todo<'a>(state: &'a AppState, id: &TodoId) -> Option<&'a Todo> {
    state.todos.iter().find(|todo| &todo.id == id)
}

pub fn find_category<'a>(state: &'a AppState, id: &CategoryId) -> Option<&'a Category> {
    state.categories.iter().find(|category| &category.id == id)
}

/// Resolves a category reference for display, tolerating dangling ids.
pub fn category_label(state: &AppState, id: &CategoryId) -> CategoryLabel {
    match find_category(state, id) {
        Some(category) => CategoryLabel {
            name: category.name.clone(),
            color: Some(category.color.clone()),
        },
        None => CategoryLabel {
            name: DEFAULT_CATEGORY_NAME.to_string(),
            color: None,
        },
    }
}

pub fn categories_with_counts(state: &AppState) -> Vec<CategoryWithCount> {
    state
        .categories
        .iter()
        .map(|category| CategoryWithCount {
            category: category.clone(),
            todo_count: state
                .todos
                .iter()
                .filter(|todo| todo.category == category.id)
                .count(),
        })
        .collect()
}

/// Todos whose category no longer exists.
pub fn uncategorized_todos(state: &AppState) -> Vec<&Todo> {
    state
        .todos
        .iter()
        .filter(|todo| find_category(state, &todo.category).is_none())
        .collect()
}

/// Next filter value after a category row is tapped: tapping the active
/// category clears the filter, tapping any other selects it.
pub fn toggle_category_filter(
    current: Option<&CategoryId>,
    tapped: &CategoryId,
) -> Option<CategoryId> {
    if current == Some(tapped) {
        None
    } else {
        Some(tapped.clone())
    }
}
