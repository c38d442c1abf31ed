//! Task use-case service.
//!
//! # Responsibility
//! - Provide validated create/edit entry points over `AppStore`.
//! - Report validation and not-found failures that raw actions swallow.

use crate::model::ids::{CategoryId, TodoId};
use crate::model::profile::ProfilePatch;
use crate::model::todo::TodoPatch;
use crate::selectors::find_todo;
use crate::service::form::{
    validate_title_edit, validate_username, CategoryForm, FormError, TodoForm,
};
use crate::store::app_store::AppStore;
use log::info;

/// Form-validating facade borrowing the store for one use-case call.
pub struct TaskService<'s> {
    store: &'s mut AppStore,
}

impl<'s> TaskService<'s> {
    pub fn new(store: &'s mut AppStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &AppStore {
        &*self.store
    }

    /// Validates the form and appends the todo.
    pub fn create_todo(&mut self, form: &TodoForm) -> Result<TodoId, FormError> {
        let todo = form.validate()?;
        let id = self.store.add_todo(todo).ok_or(FormError::BlankTitle)?;
        info!("event=todo_create module=service status=ok");
        Ok(id)
    }

    /// Replaces one todo's title.
    ///
    /// # Errors
    /// - `BlankTitle` when `title` is blank.
    /// - `TodoNotFound` when no todo has `id`.
    pub fn rename_todo(&mut self, id: &TodoId, title: &str) -> Result<(), FormError> {
        let title = validate_title_edit(title)?;
        if find_todo(self.store.state(), id).is_none() {
            return Err(FormError::TodoNotFound(id.clone()));
        }
        self.store.update_todo(id, TodoPatch::title(title));
        Ok(())
    }

    pub fn create_category(&mut self, form: &CategoryForm) -> Result<CategoryId, FormError> {
        let category = form.validate()?;
        Ok(self.store.add_category(category.name, category.color))
    }

    pub fn change_username(&mut self, username: &str) -> Result<(), FormError> {
        let username = validate_username(username)?;
        self.store.update_profile(ProfilePatch::username(username));
        Ok(())
    }
}
