//! Domain model for todos, categories and the user profile.
//!
//! # Responsibility
//! - Define the plain data records rendered by every view.
//! - Define partial-update shapes (`TodoPatch`, `ProfilePatch`) and their
//!   merge rules.
//!
//! # Invariants
//! - Todo and category ids are unique within their collections.
//! - A todo's `category` may reference a deleted category; readers resolve
//!   unknown ids to the default "General" label.

pub mod category;
pub mod ids;
pub mod profile;
pub mod state;
pub mod todo;
