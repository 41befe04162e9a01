//! Request handlers for the /links/ resource
//!
//! Handlers translate HTTP requests into store and job-runner calls. The
//! create handler answers before its harvest job has run; everything else is
//! synchronous data access.

use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::api::validation::{
    validate_create, validate_id, validate_update, CreatePayload, UpdatePayload,
};
use crate::harvest::HarvestJob;
use crate::storage::{LinkRecord, LinkStore, RecordPatch};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

/// Response body carrying only a record's identity and URL
///
/// Used where the full record shape is not echoed back: creation (links
/// do not exist yet) and deletion (the rest of the record is gone).
#[derive(Debug, Serialize)]
pub struct IdUrlResponse {
    pub id: i64,
    pub url: String,
}

/// POST /links/ — create a record and schedule its harvest
///
/// The record is stored with empty sublinks and pending status, a harvest
/// job is enqueued, and the response returns immediately; links appear later.
pub async fn create_links(
    State(state): State<AppState>,
    Json(payload): Json<CreatePayload>,
) -> Result<(StatusCode, Json<IdUrlResponse>), ApiError> {
    let url = validate_create(&payload).map_err(ApiError::Validation)?;

    let id = {
        let mut storage = state.storage.lock().unwrap();
        storage.create_record(&url)?
    };

    state.jobs.schedule(HarvestJob {
        record_id: id,
        url: url.clone(),
    });

    tracing::info!("created record {} for {}", id, url);
    Ok((StatusCode::CREATED, Json(IdUrlResponse { id, url })))
}

/// GET /links/{id}/ — read one record
pub async fn read_links(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<LinkRecord>, ApiError> {
    validate_id(id).map_err(ApiError::Validation)?;

    let record = {
        let storage = state.storage.lock().unwrap();
        storage.get_record(id)?
    };

    record.map(Json).ok_or(ApiError::NotFound)
}

/// GET /links/ — read all records
pub async fn read_all_links(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkRecord>>, ApiError> {
    let records = {
        let storage = state.storage.lock().unwrap();
        storage.all_records()?
    };

    Ok(Json(records))
}

/// PUT /links/{id}/ — replace a record's URL and sublinks
///
/// The patch carries exactly the caller-supplied fields; `created_at` and
/// `status` are untouched, and no re-harvest is triggered.
pub async fn update_links(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdatePayload>,
) -> Result<Json<LinkRecord>, ApiError> {
    let (url, sublinks) = validate_update(id, &payload).map_err(ApiError::Validation)?;

    let patch = RecordPatch {
        url: Some(url),
        sublinks: Some(sublinks),
        ..Default::default()
    };

    let updated = {
        let mut storage = state.storage.lock().unwrap();
        storage.update_record(id, &patch)?
    };

    updated.map(Json).ok_or(ApiError::NotFound)
}

/// DELETE /links/{id}/ — remove a record
///
/// A harvest job still in flight for this record will find nothing to write
/// back to; that race resolves as a no-op inside the pipeline.
pub async fn delete_links(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<IdUrlResponse>, ApiError> {
    validate_id(id).map_err(ApiError::Validation)?;

    let removed = {
        let mut storage = state.storage.lock().unwrap();
        storage.delete_record(id)?
    };

    match removed {
        Some(record) => Ok(Json(IdUrlResponse {
            id: record.id,
            url: record.url,
        })),
        None => Err(ApiError::NotFound),
    }
}
