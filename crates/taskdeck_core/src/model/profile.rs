//! Profile singleton and its merge rules.
//!
//! # Invariants
//! - Exactly one profile exists per state; it is only ever mutated.
//! - Preference patches merge field by field, so setting one flag never
//!   resets its sibling.

use crate::model::todo::replace_if_different;
use serde::{Deserialize, Serialize};

pub const DEFAULT_USERNAME: &str = "User";

/// User preference flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub dark_mode: bool,
    pub notifications: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            dark_mode: false,
            notifications: true,
        }
    }
}

/// Single user's display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    /// Avatar image URI.
    pub avatar: Option<String>,
    pub preferences: Preferences,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            username: DEFAULT_USERNAME.to_string(),
            avatar: None,
            preferences: Preferences::default(),
        }
    }
}

/// Partial preference update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreferencesPatch {
    pub dark_mode: Option<bool>,
    pub notifications: Option<bool>,
}

impl PreferencesPatch {
    fn apply_to(self, preferences: &mut Preferences) -> bool {
        let mut changed = false;
        if let Some(dark_mode) = self.dark_mode {
            changed |= replace_if_different(&mut preferences.dark_mode, dark_mode);
        }
        if let Some(notifications) = self.notifications {
            changed |= replace_if_different(&mut preferences.notifications, notifications);
        }
        changed
    }
}

/// Partial profile update merged by `update_profile`.
///
/// `avatar: Some(None)` clears the avatar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfilePatch {
    pub username: Option<String>,
    pub avatar: Option<Option<String>>,
    pub preferences: Option<PreferencesPatch>,
}

impl ProfilePatch {
    pub fn username(username: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            ..Self::default()
        }
    }

    pub fn preferences(preferences: PreferencesPatch) -> Self {
        Self {
            preferences: Some(preferences),
            ..Self::default()
        }
    }

    /// Merges set fields into `profile`; returns whether anything changed.
    ///
    /// Blank usernames are skipped; the username is stored trimmed.
    pub fn apply_to(self, profile: &mut Profile) -> bool {
        let mut changed = false;

        if let Some(username) = self.username {
            let trimmed = username.trim();
            if !trimmed.is_empty() && profile.username != trimmed {
                profile.username = trimmed.to_string();
                changed = true;
            }
        }
        if let Some(avatar) = self.avatar {
            changed |= replace_if_different(&mut profile.avatar, avatar);
        }
        if let Some(preferences) = self.preferences {
            changed |= preferences.apply_to(&mut profile.preferences);
        }

        changed
    }
}
