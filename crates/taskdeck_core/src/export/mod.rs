//! Data export/import capability contracts.
//!
//! # Responsibility
//! - Define the exporter/importer seams the settings view calls.
//! - Provide an in-memory JSON snapshot codec and an always-unavailable
//!   placeholder port.
//!
//! # Invariants
//! - No implementation here performs file or network I/O.
//! - Snapshots carry todos, categories and profile only; the filter
//!   selector and transient flags are not exported.
//! - Imported snapshots are validated but never applied to a store.

use crate::model::category::Category;
use crate::model::profile::Profile;
use crate::model::state::AppState;
use crate::model::todo::Todo;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Current snapshot schema version.
pub const SNAPSHOT_FORMAT_VERSION: u32 = 1;

pub type ExportResult<T> = Result<T, ExportError>;

#[derive(Debug)]
pub enum ExportError {
    /// The capability has no backing implementation on this build.
    Unavailable(&'static str),
    Serialize(serde_json::Error),
    InvalidSnapshot(String),
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(operation) => write!(f, "{operation} is not available"),
            Self::Serialize(err) => write!(f, "{err}"),
            Self::InvalidSnapshot(message) => write!(f, "invalid snapshot: {message}"),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Serialize(err) => Some(err),
            Self::Unavailable(_) | Self::InvalidSnapshot(_) => None,
        }
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Portable copy of user data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSnapshot {
    pub format_version: u32,
    pub todos: Vec<Todo>,
    pub categories: Vec<Category>,
    pub profile: Profile,
}

impl DataSnapshot {
    pub fn from_state(state: &AppState) -> Self {
        Self {
            format_version: SNAPSHOT_FORMAT_VERSION,
            todos: state.todos.clone(),
            categories: state.categories.clone(),
            profile: state.profile.clone(),
        }
    }

    /// Checks version and id uniqueness.
    pub fn validate(&self) -> ExportResult<()> {
        if self.format_version != SNAPSHOT_FORMAT_VERSION {
            return Err(ExportError::InvalidSnapshot(format!(
                "format_version {} is unsupported; expected {}",
                self.format_version, SNAPSHOT_FORMAT_VERSION
            )));
        }
        let mut todo_ids = HashSet::new();
        if let Some(todo) = self.todos.iter().find(|t| !todo_ids.insert(&t.id)) {
            return Err(ExportError::InvalidSnapshot(format!(
                "duplicate todo id `{}`",
                todo.id
            )));
        }
        let mut category_ids = HashSet::new();
        if let Some(category) = self
            .categories
            .iter()
            .find(|c| !category_ids.insert(&c.id))
        {
            return Err(ExportError::InvalidSnapshot(format!(
                "duplicate category id `{}`",
                category.id
            )));
        }
        Ok(())
    }
}

/// Renders a state snapshot into a portable payload.
pub trait DataExporter {
    fn export(&self, state: &AppState) -> ExportResult<String>;
}

/// Parses a portable payload back into a snapshot.
pub trait DataImporter {
    fn import(&self, payload: &str) -> ExportResult<DataSnapshot>;
}

/// Placeholder port: every call reports `Unavailable`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableDataPort;

impl DataExporter for UnavailableDataPort {
    fn export(&self, _state: &AppState) -> ExportResult<String> {
        warn!("event=data_export module=export status=unavailable");
        Err(ExportError::Unavailable("data export"))
    }
}

impl DataImporter for UnavailableDataPort {
    fn import(&self, _payload: &str) -> ExportResult<DataSnapshot> {
        warn!("event=data_import module=export status=unavailable");
        Err(ExportError::Unavailable("data import"))
    }
}

/// JSON codec for `DataSnapshot`, entirely in memory.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSnapshotExporter {
    pub pretty: bool,
}

impl DataExporter for JsonSnapshotExporter {
    fn export(&self, state: &AppState) -> ExportResult<String> {
        let snapshot = DataSnapshot::from_state(state);
        let payload = if self.pretty {
            serde_json::to_string_pretty(&snapshot)?
        } else {
            serde_json::to_string(&snapshot)?
        };
        info!(
            "event=data_export module=export status=ok todos={} categories={} bytes={}",
            snapshot.todos.len(),
            snapshot.categories.len(),
            payload.len()
        );
        Ok(payload)
    }
}

impl DataImporter for JsonSnapshotExporter {
    fn import(&self, payload: &str) -> ExportResult<DataSnapshot> {
        let snapshot: DataSnapshot = serde_json::from_str(payload)?;
        snapshot.validate()?;
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::{
        DataExporter, DataImporter, ExportError, JsonSnapshotExporter, UnavailableDataPort,
    };
    use crate::model::state::AppState;

    #[test]
    fn unavailable_port_rejects_both_directions() {
        let port = UnavailableDataPort;
        assert!(matches!(
            port.export(&AppState::seed()),
            Err(ExportError::Unavailable(_))
        ));
        assert!(matches!(port.import("{}"), Err(ExportError::Unavailable(_))));
    }

    #[test]
    fn import_rejects_unknown_format_version() {
        let codec = JsonSnapshotExporter::default();
        let mut value: serde_json::Value =
            serde_json::from_str(&codec.export(&AppState::seed()).unwrap()).unwrap();
        value["format_version"] = serde_json::json!(99);

        let err = codec.import(&value.to_string()).unwrap_err();
        assert!(err.to_string().contains("format_version 99"));
    }

    #[test]
    fn import_rejects_duplicate_category_ids() {
        let codec = JsonSnapshotExporter::default();
        let mut state = AppState::seed();
        let duplicate = state.categories[0].clone();
        state.categories.push(duplicate);
        let payload = codec.export(&state).unwrap();

        let err = codec.import(&payload).unwrap_err();
        assert!(err.to_string().contains("duplicate category id `1`"));
    }
}
