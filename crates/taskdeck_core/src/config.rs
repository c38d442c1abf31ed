//! Startup configuration.
//!
//! # Responsibility
//! - Parse the optional TOML config that tunes logging and the seed state.
//! - Build the initial `AppState`/`AppStore` from it.
//!
//! # Invariants
//! - `CoreConfig::default()` reproduces the built-in seed exactly.
//! - A config that passes `validate()` yields unique seed category ids.

use crate::logging::{init_logging, LogLevel, LoggingError};
use crate::model::category::{seed_categories, Category};
use crate::model::profile::{Preferences, Profile, DEFAULT_USERNAME};
use crate::model::state::AppState;
use crate::service::form::validate_color;
use crate::store::app_store::AppStore;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum ConfigError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(toml::de::Error),
    Invalid(String),
    Logging(LoggingError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "failed to parse config: {err}"),
            Self::Invalid(message) => write!(f, "invalid config: {message}"),
            Self::Logging(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Logging(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        Self::Parse(value)
    }
}

impl From<LoggingError> for ConfigError {
    fn from(value: LoggingError) -> Self {
        Self::Logging(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `trace|debug|info|warn|error`.
    pub level: String,
    /// Absolute log directory; file logging stays off when unset.
    pub dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::build_default().as_str().to_string(),
            dir: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProfileConfig {
    pub username: String,
    pub avatar: Option<String>,
    pub dark_mode: bool,
    pub notifications: bool,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        let preferences = Preferences::default();
        Self {
            username: DEFAULT_USERNAME.to_string(),
            avatar: None,
            dark_mode: preferences.dark_mode,
            notifications: preferences.notifications,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoreConfig {
    pub logging: LoggingConfig,
    pub profile: ProfileConfig,
    /// Replaces the seed categories when present.
    pub categories: Option<Vec<Category>>,
}

impl CoreConfig {
    /// Reads and validates a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.log_level()?;
        if self.profile.username.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "profile.username cannot be empty".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for category in self.categories.iter().flatten() {
            if !seen.insert(category.id.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate category id `{}`",
                    category.id
                )));
            }
            if category.name.trim().is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "category `{}` has an empty name",
                    category.id
                )));
            }
            validate_color(&category.color).map_err(|err| {
                ConfigError::Invalid(format!("category `{}`: {err}", category.id))
            })?;
        }
        Ok(())
    }

    pub fn log_level(&self) -> Result<LogLevel, ConfigError> {
        Ok(self.logging.level.parse::<LogLevel>()?)
    }

    /// Starts file logging when `logging.dir` is set; returns whether it did.
    pub fn init_logging(&self) -> Result<bool, ConfigError> {
        let Some(dir) = self.logging.dir.as_deref() else {
            return Ok(false);
        };
        init_logging(self.log_level()?, dir)?;
        Ok(true)
    }

    pub fn seed_state(&self) -> AppState {
        let categories = self.categories.clone().unwrap_or_else(seed_categories);
        let profile = Profile {
            username: self.profile.username.trim().to_string(),
            avatar: self.profile.avatar.clone(),
            preferences: Preferences {
                dark_mode: self.profile.dark_mode,
                notifications: self.profile.notifications,
            },
        };
        AppState::with_seed(categories, profile)
    }

    pub fn build_store(&self) -> AppStore {
        AppStore::with_state(self.seed_state())
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, CoreConfig};
    use crate::model::state::AppState;

    #[test]
    fn default_config_reproduces_seed() {
        assert_eq!(CoreConfig::default().seed_state(), AppState::seed());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = CoreConfig::from_toml_str("[profile]\nnickname = \"x\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn bad_level_is_rejected() {
        let err = CoreConfig::from_toml_str("[logging]\nlevel = \"loud\"\n").unwrap_err();
        assert!(err.to_string().contains("unsupported log level"));
    }

    #[test]
    fn logging_without_dir_is_skipped() {
        assert!(!CoreConfig::default().init_logging().unwrap());
    }
}
