//! Storage traits and error types
//!
//! This module defines the trait interface for storage backends and
//! associated error types.

use crate::storage::{LinkRecord, RecordPatch};
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for storage backend implementations
///
/// This trait defines all database operations needed by the service.
/// Operations targeting an absent record return `None` rather than an error;
/// callers decide whether that is a not-found failure (request path) or a
/// harmless no-op (harvest pipeline racing a delete).
pub trait LinkStore {
    /// Creates a new record for `url` with no sublinks and pending status
    ///
    /// The store assigns the identity and the creation timestamp.
    ///
    /// # Returns
    ///
    /// The ID of the newly created record
    fn create_record(&mut self, url: &str) -> StorageResult<i64>;

    /// Gets a record by ID
    fn get_record(&self, id: i64) -> StorageResult<Option<LinkRecord>>;

    /// Gets all records, oldest first
    fn all_records(&self) -> StorageResult<Vec<LinkRecord>>;

    /// Applies a partial update to a record
    ///
    /// Only the fields set in `patch` are written; `id` and `created_at` are
    /// never touched. Returns the updated record, or `None` if no record with
    /// this ID exists.
    fn update_record(&mut self, id: i64, patch: &RecordPatch) -> StorageResult<Option<LinkRecord>>;

    /// Deletes a record by ID
    ///
    /// Returns the removed record, or `None` if no record with this ID exists.
    fn delete_record(&mut self, id: i64) -> StorageResult<Option<LinkRecord>>;
}
