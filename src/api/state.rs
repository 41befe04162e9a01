//! Shared application state for request handlers

use crate::harvest::JobRunner;
use crate::storage::SqliteStorage;
use std::sync::{Arc, Mutex};

/// State handed to every request handler
///
/// The storage mutex is the single point that serializes record access;
/// handlers hold it only for the duration of one store call and never across
/// an await.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<Mutex<SqliteStorage>>,
    pub jobs: JobRunner,
}
