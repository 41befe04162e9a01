//! The harvest pipeline: fetch → extract → write back
//!
//! One pipeline run is triggered per created record, after the creating
//! request has already been answered. Nothing here can surface an error to a
//! client; failures are logged and the record is marked failed with its
//! sublinks left untouched.

use crate::harvest::extractor::extract_links;
use crate::harvest::fetcher::fetch_page;
use crate::storage::{LinkStore, RecordPatch, RecordStatus, SqliteStorage};
use reqwest::Client;
use std::sync::{Arc, Mutex};

/// Runs the harvest pipeline for a single record
///
/// # Algorithm
///
/// 1. Fetch the record's URL. On failure: log, mark the record failed, stop.
/// 2. Extract anchor hrefs from the body.
/// 3. Patch the record with the harvested sublinks and ready status.
///
/// A record deleted while the pipeline was running makes the write-back a
/// no-op rather than an error. Re-running the pipeline overwrites the
/// sublinks with a freshly computed value, so duplicate runs are safe.
///
/// # Arguments
///
/// * `storage` - Shared storage handle
/// * `client` - The HTTP client for the fetch
/// * `record_id` - Identity of the record to harvest for
/// * `url` - The URL captured at creation time
pub async fn run_harvest(
    storage: &Arc<Mutex<SqliteStorage>>,
    client: &Client,
    record_id: i64,
    url: &str,
) {
    tracing::debug!("harvesting record {} from {}", record_id, url);

    let body = match fetch_page(client, url).await {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!("harvest fetch failed for record {}: {}", record_id, e);
            mark_failed(storage, record_id);
            return;
        }
    };

    let sublinks = extract_links(&body);

    let patch = RecordPatch {
        sublinks: Some(sublinks),
        status: Some(RecordStatus::Ready),
        ..Default::default()
    };

    let result = {
        let mut storage = storage.lock().unwrap();
        storage.update_record(record_id, &patch)
    };

    match result {
        Ok(Some(record)) => {
            tracing::info!(
                "record {} ready with {} sublinks",
                record_id,
                record.sublinks.len()
            );
        }
        Ok(None) => {
            // Deleted while we were fetching; nothing to write back
            tracing::debug!("record {} vanished before harvest finished", record_id);
        }
        Err(e) => {
            tracing::error!("failed to store sublinks for record {}: {}", record_id, e);
        }
    }
}

/// Marks a record as failed, leaving its sublinks untouched
///
/// Storage errors here are logged and swallowed; the job is already being
/// abandoned.
fn mark_failed(storage: &Arc<Mutex<SqliteStorage>>, record_id: i64) {
    let patch = RecordPatch {
        status: Some(RecordStatus::Failed),
        ..Default::default()
    };

    let result = {
        let mut storage = storage.lock().unwrap();
        storage.update_record(record_id, &patch)
    };

    match result {
        Ok(Some(_)) => {}
        Ok(None) => {
            tracing::debug!("record {} vanished before it could be marked failed", record_id);
        }
        Err(e) => {
            tracing::error!("failed to mark record {} as failed: {}", record_id, e);
        }
    }
}
