//! Form input shapes and validation rules.
//!
//! # Invariants
//! - Validated titles, names and usernames are trimmed and non-empty.
//! - Validated colors match `#RRGGBB`.

use crate::model::category::NewCategory;
use crate::model::ids::{CategoryId, TodoId};
use crate::model::todo::{NewTodo, Priority};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static HEX_COLOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("valid color regex"));

/// Validation failure surfaced to the user by the calling view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    BlankTitle,
    MissingCategory,
    BlankCategoryName,
    InvalidColor(String),
    BlankUsername,
    TodoNotFound(TodoId),
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "title cannot be empty"),
            Self::MissingCategory => write!(f, "a category must be selected"),
            Self::BlankCategoryName => write!(f, "category name cannot be empty"),
            Self::InvalidColor(value) => {
                write!(f, "color `{value}` is invalid; expected #RRGGBB")
            }
            Self::BlankUsername => write!(f, "username cannot be empty"),
            Self::TodoNotFound(id) => write!(f, "todo not found: {id}"),
        }
    }
}

impl Error for FormError {}

/// Create-todo form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoForm {
    pub title: String,
    pub category: Option<CategoryId>,
    pub priority: Priority,
    pub completed: bool,
    pub due_date: Option<i64>,
}

impl TodoForm {
    pub fn validate(&self) -> Result<NewTodo, FormError> {
        let title = validate_title_edit(&self.title)?;
        let category = self
            .category
            .as_ref()
            .filter(|id| !id.as_str().trim().is_empty())
            .cloned()
            .ok_or(FormError::MissingCategory)?;

        Ok(NewTodo {
            title,
            completed: self.completed,
            due_date: self.due_date,
            priority: self.priority,
            category,
        })
    }
}

/// Add-category form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryForm {
    pub name: String,
    pub color: String,
}

impl CategoryForm {
    pub fn validate(&self) -> Result<NewCategory, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::BlankCategoryName);
        }
        let color = validate_color(&self.color)?;
        Ok(NewCategory::new(name, color))
    }
}

/// Returns the trimmed title, or `BlankTitle`.
pub fn validate_title_edit(title: &str) -> Result<String, FormError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(FormError::BlankTitle);
    }
    Ok(trimmed.to_string())
}

pub fn validate_username(username: &str) -> Result<String, FormError> {
    let trimmed = username.trim();
    if trimmed.is_empty() {
        return Err(FormError::BlankUsername);
    }
    Ok(trimmed.to_string())
}

/// Accepts `#RRGGBB` (any hex case) and normalizes to upper case.
pub fn validate_color(color: &str) -> Result<String, FormError> {
    let trimmed = color.trim();
    if !HEX_COLOR_RE.is_match(trimmed) {
        return Err(FormError::InvalidColor(trimmed.to_string()));
    }
    Ok(trimmed.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::{validate_color, CategoryForm, FormError, TodoForm};
    use crate::model::ids::CategoryId;
    use crate::model::todo::Priority;

    #[test]
    fn todo_form_requires_title_and_category() {
        let mut form = TodoForm {
            title: "   ".to_string(),
            category: Some(CategoryId::from("1")),
            ..TodoForm::default()
        };
        assert_eq!(form.validate().unwrap_err(), FormError::BlankTitle);

        form.title = " Ship release ".to_string();
        form.category = None;
        assert_eq!(form.validate().unwrap_err(), FormError::MissingCategory);

        form.category = Some(CategoryId::from(""));
        assert_eq!(form.validate().unwrap_err(), FormError::MissingCategory);

        form.category = Some(CategoryId::from("1"));
        form.priority = Priority::High;
        let todo = form.validate().unwrap();
        assert_eq!(todo.title, "Ship release");
        assert_eq!(todo.priority, Priority::High);
    }

    #[test]
    fn color_validation_normalizes_case() {
        assert_eq!(validate_color("#ff5733").unwrap(), "#FF5733");
        assert!(matches!(
            validate_color("red"),
            Err(FormError::InvalidColor(value)) if value == "red"
        ));
        assert!(validate_color("#FFF").is_err());
    }

    #[test]
    fn category_form_rejects_blank_name() {
        let form = CategoryForm {
            name: " ".to_string(),
            color: "#000000".to_string(),
        };
        assert_eq!(form.validate().unwrap_err(), FormError::BlankCategoryName);
    }
}
