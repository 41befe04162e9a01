//! Harvest module: the asynchronous fetch→extract→write-back pipeline
//!
//! This module contains everything that runs off the request path:
//! - HTTP fetching of submitted URLs
//! - Anchor href extraction from HTML
//! - The pipeline that writes harvested links back to storage
//! - The background job runner that decouples harvesting from requests

mod extractor;
mod fetcher;
mod pipeline;
mod runner;

pub use extractor::extract_links;
pub use fetcher::{build_http_client, fetch_page, FetchError};
pub use pipeline::run_harvest;
pub use runner::{HarvestJob, JobRunner};
