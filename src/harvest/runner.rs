//! Background job runner
//!
//! This module decouples harvest execution from the request path. Jobs are
//! pushed onto a bounded channel and drained by a pool of worker tasks;
//! scheduling never blocks the request handler, and a job scheduled for a
//! response that has already been sent runs entirely on its own.
//!
//! Ordering between jobs is not guaranteed, and jobs still queued at process
//! shutdown are dropped. Both are acceptable: delivery here is best effort.

use crate::harvest::pipeline::run_harvest;
use crate::storage::SqliteStorage;
use reqwest::Client;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// A unit of harvest work, keyed by the record it will write back to
#[derive(Debug, Clone)]
pub struct HarvestJob {
    /// Identity of the record the harvest result belongs to
    pub record_id: i64,

    /// The URL captured when the record was created
    pub url: String,
}

/// Handle for scheduling harvest jobs onto the worker pool
///
/// Cloning the runner clones the sending half of the queue; all clones feed
/// the same workers.
#[derive(Clone)]
pub struct JobRunner {
    tx: mpsc::Sender<HarvestJob>,
}

impl JobRunner {
    /// Starts the worker pool and returns a scheduling handle
    ///
    /// # Arguments
    ///
    /// * `storage` - Shared storage handle passed to every pipeline run
    /// * `client` - HTTP client shared by all workers
    /// * `worker_count` - Number of worker tasks to spawn
    /// * `queue_capacity` - Bound on the job queue
    pub fn start(
        storage: Arc<Mutex<SqliteStorage>>,
        client: Client,
        worker_count: u32,
        queue_capacity: usize,
    ) -> Self {
        let (tx, rx) = mpsc::channel::<HarvestJob>(queue_capacity);
        let rx = Arc::new(tokio::sync::Mutex::new(rx));

        for worker_id in 0..worker_count {
            let rx = rx.clone();
            let storage = storage.clone();
            let client = client.clone();

            tokio::spawn(async move {
                tracing::debug!("harvest worker {} started", worker_id);
                loop {
                    // Hold the receiver lock only while waiting for a job so
                    // other workers can take the next one during the fetch
                    let job = { rx.lock().await.recv().await };

                    match job {
                        Some(job) => {
                            run_harvest(&storage, &client, job.record_id, &job.url).await;
                        }
                        None => {
                            tracing::debug!("harvest worker {} shutting down", worker_id);
                            break;
                        }
                    }
                }
            });
        }

        Self { tx }
    }

    /// Schedules a harvest job without blocking
    ///
    /// A full queue drops the job with a warning; the record then simply
    /// stays pending with empty sublinks, which readers must tolerate anyway.
    pub fn schedule(&self, job: HarvestJob) {
        let record_id = job.record_id;
        if let Err(e) = self.tx.try_send(job) {
            tracing::warn!("dropping harvest job for record {}: {}", record_id, e);
        }
    }
}
