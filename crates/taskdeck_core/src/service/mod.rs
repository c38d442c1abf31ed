//! Use-case services for UI callers.
//!
//! # Responsibility
//! - Validate form input the way screens do before submitting.
//! - Translate validated input into store actions.
//!
//! # Invariants
//! - Services never mutate state except through `AppStore` actions.

pub mod form;
pub mod task_service;
