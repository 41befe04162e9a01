//! Boundary validation for request inputs
//!
//! All validation runs before any handler logic touches the store. Payload
//! structs deserialize with every field optional so that a missing field is
//! reported in the structured 422 shape instead of as a deserialization
//! rejection; these functions then enforce presence and content explicitly.

use crate::api::error::FieldError;
use serde::Deserialize;
use url::Url;

/// Body of POST /links/
#[derive(Debug, Deserialize)]
pub struct CreatePayload {
    pub url: Option<String>,
}

/// Body of PUT /links/{id}/
#[derive(Debug, Deserialize)]
pub struct UpdatePayload {
    pub url: Option<String>,
    pub sublinks: Option<Vec<String>>,
}

/// Validates a path identifier
///
/// Identifiers must be strictly positive; zero and negative values are a
/// validation failure, not a not-found.
pub fn validate_id(id: i64) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();
    check_id(id, &mut errors);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a create payload, returning the accepted URL
pub fn validate_create(payload: &CreatePayload) -> Result<String, Vec<FieldError>> {
    let mut errors = Vec::new();
    let url = check_url(payload.url.as_deref(), &mut errors);

    match url {
        Some(url) if errors.is_empty() => Ok(url),
        _ => Err(errors),
    }
}

/// Validates an update payload together with its path identifier
///
/// All offending fields are reported in one response: an invalid id does not
/// mask missing body fields.
pub fn validate_update(
    id: i64,
    payload: &UpdatePayload,
) -> Result<(String, Vec<String>), Vec<FieldError>> {
    let mut errors = Vec::new();

    check_id(id, &mut errors);
    let url = check_url(payload.url.as_deref(), &mut errors);
    if payload.sublinks.is_none() {
        errors.push(FieldError::missing_body_field("sublinks"));
    }

    match (url, &payload.sublinks) {
        (Some(url), Some(sublinks)) if errors.is_empty() => Ok((url, sublinks.clone())),
        _ => Err(errors),
    }
}

fn check_id(id: i64, errors: &mut Vec<FieldError>) {
    if id <= 0 {
        errors.push(FieldError::non_positive_id());
    }
}

/// Checks a url field: present, parseable, http or https
///
/// Returns the accepted URL string (as submitted, not re-serialized) when it
/// passed; pushes a field error otherwise.
fn check_url(url: Option<&str>, errors: &mut Vec<FieldError>) -> Option<String> {
    let raw = match url {
        Some(raw) => raw,
        None => {
            errors.push(FieldError::missing_body_field("url"));
            return None;
        }
    };

    let parsed = match Url::parse(raw) {
        Ok(parsed) => parsed,
        Err(_) => {
            errors.push(FieldError::invalid_url("url"));
            return None;
        }
    };

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        errors.push(FieldError::url_scheme_not_permitted("url"));
        return None;
    }

    Some(raw.to_string())
}
