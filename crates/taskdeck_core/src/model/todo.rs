//! Todo domain model.
//!
//! # Responsibility
//! - Define the canonical task record and its creation/patch shapes.
//! - Own the field-level merge rule used by `update_todo`.
//!
//! # Invariants
//! - `id` is assigned by the store and never changed by a patch.
//! - `title` is non-blank once stored; blank titles are dropped at write time.
//! - `due_date` is Unix epoch milliseconds (UTC).

use crate::model::ids::{CategoryId, TodoId};
use serde::{Deserialize, Serialize};

/// Task urgency shown as a badge and counted in stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// All priorities in ascending urgency.
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// Stable string id used at the FFI boundary.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Parses a priority string; case-insensitive, surrounding whitespace ignored.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

/// Canonical task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
    /// Unix epoch milliseconds.
    pub due_date: Option<i64>,
    pub priority: Priority,
    /// May dangle after the category is deleted.
    pub category: CategoryId,
}

impl Todo {
    /// Builds a stored record from creation input and a store-assigned id.
    pub fn from_new(id: TodoId, input: NewTodo) -> Self {
        Self {
            id,
            title: input.title,
            completed: input.completed,
            due_date: input.due_date,
            priority: input.priority,
            category: input.category,
        }
    }
}

/// Every todo field except `id`; input of `add_todo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTodo {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub due_date: Option<i64>,
    #[serde(default)]
    pub priority: Priority,
    pub category: CategoryId,
}

impl NewTodo {
    /// Creates input with `Medium` priority, not completed and no due date.
    pub fn new(title: impl Into<String>, category: impl Into<CategoryId>) -> Self {
        Self {
            title: title.into(),
            completed: false,
            due_date: None,
            priority: Priority::default(),
            category: category.into(),
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_due_date(mut self, epoch_ms: i64) -> Self {
        self.due_date = Some(epoch_ms);
        self
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

/// Partial field set merged by `update_todo`.
///
/// `None` leaves the field untouched. `due_date: Some(None)` clears the date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub completed: Option<bool>,
    pub due_date: Option<Option<i64>>,
    pub priority: Option<Priority>,
    pub category: Option<CategoryId>,
}

impl TodoPatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.completed.is_none()
            && self.due_date.is_none()
            && self.priority.is_none()
            && self.category.is_none()
    }

    /// Merges set fields into `todo` and reports whether anything changed.
    ///
    /// A title that is blank after trimming is skipped; other fields in the
    /// same patch still apply.
    pub fn apply_to(self, todo: &mut Todo) -> bool {
        let mut changed = false;

        if let Some(title) = self.title {
            let trimmed = title.trim();
            if !trimmed.is_empty() && todo.title != trimmed {
                todo.title = trimmed.to_string();
                changed = true;
            }
        }
        if let Some(completed) = self.completed {
            changed |= replace_if_different(&mut todo.completed, completed);
        }
        if let Some(due_date) = self.due_date {
            changed |= replace_if_different(&mut todo.due_date, due_date);
        }
        if let Some(priority) = self.priority {
            changed |= replace_if_different(&mut todo.priority, priority);
        }
        if let Some(category) = self.category {
            changed |= replace_if_different(&mut todo.category, category);
        }

        changed
    }
}

pub(crate) fn replace_if_different<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

#[cfg(test)]
mod tests {
    use super::{NewTodo, Priority, Todo, TodoPatch};
    use crate::model::ids::{CategoryId, TodoId};

    fn sample() -> Todo {
        Todo::from_new(TodoId::from("t1"), NewTodo::new("Buy milk", "3"))
    }

    #[test]
    fn priority_parse_accepts_mixed_case() {
        assert_eq!(Priority::parse(" HIGH "), Some(Priority::High));
        assert_eq!(Priority::parse("urgent"), None);
    }

    #[test]
    fn patch_skips_blank_title_but_applies_other_fields() {
        let mut todo = sample();
        let patch = TodoPatch {
            title: Some("   ".to_string()),
            priority: Some(Priority::High),
            ..TodoPatch::default()
        };
        assert!(patch.apply_to(&mut todo));
        assert_eq!(todo.title, "Buy milk");
        assert_eq!(todo.priority, Priority::High);
    }

    #[test]
    fn patch_with_identical_values_reports_unchanged() {
        let mut todo = sample();
        let patch = TodoPatch {
            title: Some("Buy milk".to_string()),
            category: Some(CategoryId::from("3")),
            ..TodoPatch::default()
        };
        assert!(!patch.apply_to(&mut todo));
    }

    #[test]
    fn patch_can_clear_due_date() {
        let mut todo = Todo::from_new(
            TodoId::from("t1"),
            NewTodo::new("Dentist", "2").with_due_date(1_700_000_000_000),
        );
        let patch = TodoPatch {
            due_date: Some(None),
            ..TodoPatch::default()
        };
        assert!(patch.apply_to(&mut todo));
        assert_eq!(todo.due_date, None);
    }
}
