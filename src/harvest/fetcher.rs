//! HTTP fetcher implementation
//!
//! This module handles the single outbound request a harvest job makes:
//! - Building the HTTP client with the configured user agent and timeouts
//! - One GET request per invocation, body decoded as text
//! - Error classification into the FetchError taxonomy
//!
//! No retries are performed here; a failed fetch fails the job.

use crate::config::FetchConfig;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while fetching a page
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("failed to read body from {url}: {source}")]
    Body {
        url: String,
        source: reqwest::Error,
    },
}

/// Builds the HTTP client used for harvest fetches
///
/// # Arguments
///
/// * `config` - The fetch configuration (user agent, timeouts)
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &FetchConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.timeout_seconds))
        .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and returns the response body as text
///
/// Issues exactly one GET request. Non-success status codes, network
/// failures, and timeouts all map to a `FetchError`; retry policy, if any,
/// belongs to the caller (the harvest pipeline has none).
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
///
/// # Returns
///
/// * `Ok(String)` - The response body
/// * `Err(FetchError)` - The classified failure
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, FetchError> {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) if e.is_timeout() => {
            return Err(FetchError::Timeout {
                url: url.to_string(),
            })
        }
        Err(e) => {
            return Err(FetchError::Network {
                url: url.to_string(),
                source: e,
            })
        }
    };

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|e| {
        if e.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
            }
        } else {
            FetchError::Body {
                url: url.to_string(),
                source: e,
            }
        }
    })
}
