//! HTTP surface of the service
//!
//! This module contains the axum router, the request handlers, boundary
//! validation, and the request-path error mapping. Handlers talk to the
//! store and the job runner and nothing else; the harvest pipeline itself
//! lives in [`crate::harvest`].

mod error;
mod handlers;
mod router;
mod state;
mod validation;

pub use error::{ApiError, FieldError};
pub use router::router;
pub use state::AppState;
pub use validation::{CreatePayload, UpdatePayload};

use crate::config::Config;
use crate::harvest::{build_http_client, JobRunner};
use crate::storage::open_storage;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Wires up storage, workers, and the router, then serves until shutdown
///
/// # Arguments
///
/// * `config` - The validated service configuration
pub async fn serve(config: Config) -> crate::Result<()> {
    let storage = open_storage(Path::new(&config.storage.database_path))?;
    let storage = Arc::new(Mutex::new(storage));

    let client = build_http_client(&config.fetch)?;

    let jobs = JobRunner::start(
        storage.clone(),
        client,
        config.worker.count,
        config.worker.queue_capacity as usize,
    );

    let app = router().with_state(AppState { storage, jobs });

    let listener = tokio::net::TcpListener::bind(&config.server.bind_address).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
