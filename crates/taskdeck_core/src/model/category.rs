//! Category domain model.

use crate::model::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// Display name used for todos whose category is unknown or deleted.
pub const DEFAULT_CATEGORY_NAME: &str = "General";

/// User-defined label with a display color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// Display color, `#RRGGBB` in the seed and in validated input.
    pub color: String,
}

impl Category {
    pub fn new(
        id: impl Into<CategoryId>,
        name: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
        }
    }
}

/// Category fields except `id`; input of `add_category`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
    pub color: String,
}

impl NewCategory {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }
}

/// Seed categories present on every fresh start.
pub fn seed_categories() -> Vec<Category> {
    vec![
        Category::new("1", "Work", "#FF5733"),
        Category::new("2", "Personal", "#33FF57"),
        Category::new("3", "Shopping", "#3357FF"),
    ]
}
