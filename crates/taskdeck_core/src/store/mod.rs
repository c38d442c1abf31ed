//! In-memory application store.
//!
//! # Responsibility
//! - Own the mutable `AppState` and expose the action set views call.
//! - Deliver change notifications to subscribed views.
//!
//! # Invariants
//! - All mutations run synchronously to completion before any listener runs.
//! - Actions targeting a missing id are silent no-ops.

pub mod action;
pub mod app_store;
