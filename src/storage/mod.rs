//! Storage module for persisting link records
//!
//! This module handles all database operations for the service, including:
//! - SQLite database initialization and schema management
//! - Link record persistence and identity assignment
//! - Partial-field record updates via typed patches

mod schema;
mod sqlite;
mod traits;

pub use sqlite::SqliteStorage;
pub use traits::{LinkStore, StorageError, StorageResult};

use crate::HarvestError;
use serde::Serialize;
use std::path::Path;

/// Initializes or opens a storage database
///
/// # Arguments
///
/// * `path` - Path to the SQLite database file
///
/// # Returns
///
/// * `Ok(SqliteStorage)` - Successfully initialized storage
/// * `Err(HarvestError)` - Failed to initialize storage
pub fn open_storage(path: &Path) -> Result<SqliteStorage, HarvestError> {
    SqliteStorage::new(path)
}

/// A stored link record: a source URL together with the href values
/// harvested from it
#[derive(Debug, Clone, Serialize)]
pub struct LinkRecord {
    pub id: i64,
    pub url: String,
    pub sublinks: Vec<String>,
    pub status: RecordStatus,
    pub created_at: String,
}

/// A partial update to a link record
///
/// Only fields that are `Some` are applied; everything else is left
/// untouched. `id` and `created_at` are never updatable.
#[derive(Debug, Clone, Default)]
pub struct RecordPatch {
    pub url: Option<String>,
    pub sublinks: Option<Vec<String>>,
    pub status: Option<RecordStatus>,
}

/// Harvest status of a link record
///
/// A record starts out `Pending` when created. The harvest pipeline moves it
/// to `Ready` once links have been written back, or to `Failed` if the fetch
/// was abandoned. Client-supplied updates never change the status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Pending,
    Ready,
    Failed,
}

impl RecordStatus {
    /// Returns true if the harvest pipeline has finished with this record
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    pub fn to_db_string(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Ready => "ready",
            Self::Failed => "failed",
        }
    }

    pub fn from_db_string(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "ready" => Some(Self::Ready),
            "failed" => Some(Self::Failed),
            _ => None,
        }
    }
}

impl std::fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_db_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_status_roundtrip() {
        for status in &[
            RecordStatus::Pending,
            RecordStatus::Ready,
            RecordStatus::Failed,
        ] {
            let db_str = status.to_db_string();
            let parsed = RecordStatus::from_db_string(db_str);
            assert_eq!(Some(*status), parsed);
        }
    }

    #[test]
    fn test_record_status_invalid() {
        assert_eq!(RecordStatus::from_db_string("invalid"), None);
    }

    #[test]
    fn test_is_terminal() {
        assert!(!RecordStatus::Pending.is_terminal());
        assert!(RecordStatus::Ready.is_terminal());
        assert!(RecordStatus::Failed.is_terminal());
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&RecordStatus::Pending).unwrap();
        assert_eq!(json, "\"pending\"");
    }
}
