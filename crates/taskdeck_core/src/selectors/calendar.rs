//! Due-date buckets for the calendar view.
//!
//! Days are UTC calendar dates derived from epoch-millisecond due dates.

use crate::model::ids::TodoId;
use crate::model::state::AppState;
use crate::model::todo::Todo;
use chrono::{DateTime, NaiveDate};
use std::collections::BTreeMap;

const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// UTC day of an epoch-millisecond timestamp; `None` when out of range.
pub fn due_date_key(epoch_ms: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp_millis(epoch_ms).map(|instant| instant.date_naive())
}

/// Parses a `YYYY-MM-DD` day key as sent by calendar widgets.
pub fn parse_date_key(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_KEY_FORMAT).ok()
}

pub fn format_date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Days carrying at least one due todo, with the todo ids due that day in
/// insertion order.
pub fn marked_dates(state: &AppState) -> BTreeMap<NaiveDate, Vec<TodoId>> {
    let mut marks: BTreeMap<NaiveDate, Vec<TodoId>> = BTreeMap::new();
    for todo in &state.todos {
        if let Some(day) = todo.due_date.and_then(due_date_key) {
            marks.entry(day).or_default().push(todo.id.clone());
        }
    }
    marks
}

pub fn todos_due_on(state: &AppState, day: NaiveDate) -> Vec<&Todo> {
    state
        .todos
        .iter()
        .filter(|todo| todo.due_date.and_then(due_date_key) == Some(day))
        .collect()
}
