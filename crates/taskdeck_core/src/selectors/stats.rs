//! Completion and priority counters for the stats view.

use crate::model::state::AppState;
use crate::model::todo::Priority;

/// Completed/pending split of all todos.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TodoStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

impl TodoStats {
    /// Completed share in whole percent, rounded half up; `0` when empty.
    pub fn completion_percent(&self) -> u8 {
        percent(self.completed, self.total)
    }

    pub fn pending_percent(&self) -> u8 {
        percent(self.pending, self.total)
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Todo counts per priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriorityBreakdown {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

impl PriorityBreakdown {
    pub fn count(&self, priority: Priority) -> usize {
        match priority {
            Priority::Low => self.low,
            Priority::Medium => self.medium,
            Priority::High => self.high,
        }
    }
}

pub fn todo_stats(state: &AppState) -> TodoStats {
    let total = state.todos.len();
    let completed = state.todos.iter().filter(|todo| todo.completed).count();
    TodoStats {
        total,
        completed,
        pending: total - completed,
    }
}

pub fn priority_breakdown(state: &AppState) -> PriorityBreakdown {
    state
        .todos
        .iter()
        .fold(PriorityBreakdown::default(), |mut counts, todo| {
            match todo.priority {
                Priority::Low => counts.low += 1,
                Priority::Medium => counts.medium += 1,
                Priority::High => counts.high += 1,
            }
            counts
        })
}

fn percent(part: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((part * 200 + total) / (total * 2)) as u8
}
