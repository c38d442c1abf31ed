//! Owned application store with subscriber notification.
//!
//! # Responsibility
//! - Hold the one `AppState` snapshot for its owner.
//! - Assign ids to created records and run actions through `reduce`.
//! - Notify subscribers after every action that changed the snapshot.
//!
//! # Invariants
//! - Only store methods mutate state; listeners receive `&AppState`.
//! - Generated ids never collide with ids already in their collection.
//! - Ignored actions notify nobody.

use crate::model::category::NewCategory;
use crate::model::ids::{CategoryId, IdGenerator, TodoId, UuidIdGenerator};
use crate::model::profile::ProfilePatch;
use crate::model::state::AppState;
use crate::model::todo::{NewTodo, TodoPatch};
use crate::store::action::{reduce, Action, Outcome};
use log::{debug, warn};
use std::fmt::{Debug, Formatter};

const MAX_ID_ATTEMPTS: usize = 8;

type Listener = Box<dyn FnMut(&AppState) + Send>;

/// Handle returned by `subscribe`; pass to `unsubscribe` to detach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Single-writer state container.
///
/// `Send` but not `Sync`: callers on a multi-threaded runtime keep it on one
/// owning thread or behind a lock.
pub struct AppStore {
    state: AppState,
    ids: Box<dyn IdGenerator>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for AppStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppStore")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl AppStore {
    /// Creates a store holding the seed state.
    pub fn new() -> Self {
        Self::with_state(AppState::seed())
    }

    /// Creates a store over a caller-built initial snapshot.
    pub fn with_state(state: AppState) -> Self {
        Self {
            state,
            ids: Box::new(UuidIdGenerator),
            listeners: Vec::new(),
            next_subscription: 1,
        }
    }

    /// Replaces the id source used by `add_todo`/`add_category`.
    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    /// Current snapshot.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Registers a listener called after every applied action.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&AppState) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Registers a listener that only fires when `selector`'s projection changes.
    ///
    /// The projection is captured once at subscription time as the baseline.
    pub fn subscribe_selector<T, S, F>(&mut self, selector: S, mut listener: F) -> SubscriptionId
    where
        T: PartialEq + Send + 'static,
        S: Fn(&AppState) -> T + Send + 'static,
        F: FnMut(&T) + Send + 'static,
    {
        let mut previous = selector(&self.state);
        self.subscribe(move |state| {
            let next = selector(state);
            if next != previous {
                listener(&next);
                previous = next;
            }
        })
    }

    /// Detaches a listener. Returns `false` when the id is unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    /// Applies one action and notifies subscribers when it changed state.
    pub fn dispatch(&mut self, action: Action) -> Outcome {
        let event = action.name();
        let outcome = reduce(&mut self.state, action);
        match outcome {
            Outcome::Applied => {
                debug!(
                    "event={event} module=store status=ok todos={} categories={}",
                    self.state.todos.len(),
                    self.state.categories.len()
                );
                for (_, listener) in self.listeners.iter_mut() {
                    listener(&self.state);
                }
            }
            Outcome::Ignored => {
                debug!("event={event} module=store status=ignored");
            }
        }
        outcome
    }

    /// Appends a todo with a fresh id.
    ///
    /// Returns `None` when the title is blank after trimming; state is left
    /// untouched in that case.
    pub fn add_todo(&mut self, todo: NewTodo) -> Option<TodoId> {
        let id = self.fresh_todo_id();
        let outcome = self.dispatch(Action::AddTodo {
            id: id.clone(),
            todo,
        });
        outcome.is_applied().then_some(id)
    }

    /// Merges `patch` into the matching todo; no-op when `id` is unknown.
    pub fn update_todo(&mut self, id: &TodoId, patch: TodoPatch) {
        self.dispatch(Action::UpdateTodo {
            id: id.clone(),
            patch,
        });
    }

    pub fn delete_todo(&mut self, id: &TodoId) {
        self.dispatch(Action::DeleteTodo(id.clone()));
    }

    pub fn toggle_todo_status(&mut self, id: &TodoId) {
        self.dispatch(Action::ToggleTodoStatus(id.clone()));
    }

    /// Appends a category with a fresh id and returns that id.
    pub fn add_category(
        &mut self,
        name: impl Into<String>,
        color: impl Into<String>,
    ) -> CategoryId {
        let id = self.fresh_category_id();
        self.dispatch(Action::AddCategory {
            id: id.clone(),
            category: NewCategory::new(name, color),
        });
        id
    }

    /// Removes the category. Todos that reference it keep the dangling id.
    pub fn delete_category(&mut self, id: &CategoryId) {
        self.dispatch(Action::DeleteCategory(id.clone()));
    }

    pub fn set_active_category(&mut self, id: Option<CategoryId>) {
        self.dispatch(Action::SetActiveCategory(id));
    }

    /// Merges `patch` into the profile; preferences merge field by field.
    pub fn update_profile(&mut self, patch: ProfilePatch) {
        self.dispatch(Action::UpdateProfile(patch));
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dispatch(Action::ToggleDarkMode);
    }

    pub fn toggle_notifications(&mut self) {
        self.dispatch(Action::ToggleNotifications);
    }

    pub fn set_loading(&mut self, is_loading: bool) {
        self.dispatch(Action::SetLoading(is_loading));
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.dispatch(Action::SetError(error));
    }

    fn fresh_todo_id(&mut self) -> TodoId {
        let todos = &self.state.todos;
        let raw = fresh_raw_id(self.ids.as_mut(), |candidate| {
            todos.iter().any(|todo| todo.id.as_str() == candidate)
        });
        TodoId::new(raw)
    }

    fn fresh_category_id(&mut self) -> CategoryId {
        let categories = &self.state.categories;
        let raw = fresh_raw_id(self.ids.as_mut(), |candidate| {
            categories
                .iter()
                .any(|category| category.id.as_str() == candidate)
        });
        CategoryId::new(raw)
    }
}

fn fresh_raw_id(ids: &mut dyn IdGenerator, taken: impl Fn(&str) -> bool) -> String {
    for _ in 0..MAX_ID_ATTEMPTS {
        let candidate = ids.next_id();
        if !taken(candidate.as_str()) {
            return candidate;
        }
    }
    warn!("event=id_collision module=store status=fallback attempts={MAX_ID_ATTEMPTS}");
    loop {
        let candidate = UuidIdGenerator.next_id();
        if !taken(candidate.as_str()) {
            return candidate;
        }
    }
}
