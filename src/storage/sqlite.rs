//! SQLite storage implementation
//!
//! This module provides a SQLite-based implementation of the LinkStore trait.

use crate::storage::schema::initialize_schema;
use crate::storage::traits::{LinkStore, StorageError, StorageResult};
use crate::storage::{LinkRecord, RecordPatch, RecordStatus};
use crate::HarvestError;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;

/// SQLite storage backend
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Creates a new SqliteStorage instance
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the SQLite database file
    ///
    /// # Returns
    ///
    /// * `Ok(SqliteStorage)` - Successfully opened/created database
    /// * `Err(HarvestError)` - Failed to open database
    pub fn new(path: &Path) -> Result<Self, HarvestError> {
        let conn = Connection::open(path)?;

        // Configure SQLite for better performance
        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA foreign_keys = ON;
            PRAGMA temp_store = MEMORY;
        ",
        )?;

        // Initialize schema
        initialize_schema(&conn)?;

        Ok(Self { conn })
    }

    /// Creates an in-memory database (for testing)
    pub fn new_in_memory() -> Result<Self, HarvestError> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        initialize_schema(&conn)?;
        Ok(Self { conn })
    }

    fn row_to_record(row: &Row<'_>) -> rusqlite::Result<(i64, String, String, String, String)> {
        Ok((
            row.get(0)?,
            row.get(1)?,
            row.get(2)?,
            row.get(3)?,
            row.get(4)?,
        ))
    }

    fn build_record(
        (id, url, sublinks_json, status, created_at): (i64, String, String, String, String),
    ) -> StorageResult<LinkRecord> {
        let sublinks: Vec<String> = serde_json::from_str(&sublinks_json).map_err(|e| {
            StorageError::Serialization(format!("invalid sublinks JSON for record {}: {}", id, e))
        })?;

        // Unknown status strings would mean a corrupted row; treat as failed
        let status = RecordStatus::from_db_string(&status).unwrap_or(RecordStatus::Failed);

        Ok(LinkRecord {
            id,
            url,
            sublinks,
            status,
            created_at,
        })
    }

    fn encode_sublinks(sublinks: &[String]) -> StorageResult<String> {
        serde_json::to_string(sublinks)
            .map_err(|e| StorageError::Serialization(format!("failed to encode sublinks: {}", e)))
    }
}

impl LinkStore for SqliteStorage {
    fn create_record(&mut self, url: &str) -> StorageResult<i64> {
        let now = Utc::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO sublink_lists (url, sublinks, status, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![url, "[]", RecordStatus::Pending.to_db_string(), now],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn get_record(&self, id: i64) -> StorageResult<Option<LinkRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, url, sublinks, status, created_at FROM sublink_lists WHERE id = ?1",
        )?;

        let row = stmt
            .query_row(params![id], Self::row_to_record)
            .optional()?;

        row.map(Self::build_record).transpose()
    }

    fn all_records(&self) -> StorageResult<Vec<LinkRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, url, sublinks, status, created_at FROM sublink_lists ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], Self::row_to_record)?;

        let mut records = Vec::new();
        for row in rows {
            records.push(Self::build_record(row?)?);
        }
        Ok(records)
    }

    fn update_record(&mut self, id: i64, patch: &RecordPatch) -> StorageResult<Option<LinkRecord>> {
        // Build the SET clause from the fields the patch actually carries
        let mut assignments: Vec<&str> = Vec::new();
        let mut values: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(url) = &patch.url {
            assignments.push("url = ?");
            values.push(Box::new(url.clone()));
        }

        if let Some(sublinks) = &patch.sublinks {
            assignments.push("sublinks = ?");
            values.push(Box::new(Self::encode_sublinks(sublinks)?));
        }

        if let Some(status) = &patch.status {
            assignments.push("status = ?");
            values.push(Box::new(status.to_db_string()));
        }

        if assignments.is_empty() {
            // Empty patch: nothing to write, but still report existence
            return self.get_record(id);
        }

        let sql = format!(
            "UPDATE sublink_lists SET {} WHERE id = ?",
            assignments.join(", ")
        );
        values.push(Box::new(id));

        let changed = self.conn.execute(
            &sql,
            rusqlite::params_from_iter(values.iter().map(|v| v.as_ref())),
        )?;

        if changed == 0 {
            return Ok(None);
        }

        self.get_record(id)
    }

    fn delete_record(&mut self, id: i64) -> StorageResult<Option<LinkRecord>> {
        let record = self.get_record(id)?;

        if record.is_some() {
            self.conn
                .execute("DELETE FROM sublink_lists WHERE id = ?1", params![id])?;
        }

        Ok(record)
    }
}
