//! Integration tests for the harvest pipeline
//!
//! These tests run the fetch→extract→write-back pipeline directly against a
//! wiremock server and an in-memory store, covering the success path, fetch
//! failures, the delete race, and idempotence.

use link_harvester::harvest::run_harvest;
use link_harvester::storage::{LinkStore, RecordStatus, SqliteStorage};
use std::sync::{Arc, Mutex};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn shared_storage() -> Arc<Mutex<SqliteStorage>> {
    Arc::new(Mutex::new(SqliteStorage::new_in_memory().unwrap()))
}

fn create_record(storage: &Arc<Mutex<SqliteStorage>>, url: &str) -> i64 {
    let mut storage = storage.lock().unwrap();
    storage.create_record(url).unwrap()
}

const TWO_ANCHOR_PAGE: &str = r#"<html><body>
    <a href="/a">x</a>
    <a>y</a>
    <a href="/b">z</a>
</body></html>"#;

#[tokio::test]
async fn test_harvest_populates_sublinks_in_document_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(TWO_ANCHOR_PAGE))
        .mount(&server)
        .await;

    let storage = shared_storage();
    let url = format!("{}/", server.uri());
    let id = create_record(&storage, &url);

    let client = reqwest::Client::new();
    run_harvest(&storage, &client, id, &url).await;

    let record = storage.lock().unwrap().get_record(id).unwrap().unwrap();
    assert_eq!(record.sublinks, vec!["/a", "/b"]);
    assert_eq!(record.status, RecordStatus::Ready);
}

#[tokio::test]
async fn test_harvest_preserves_url_and_created_at() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(TWO_ANCHOR_PAGE))
        .mount(&server)
        .await;

    let storage = shared_storage();
    let url = server.uri();
    let id = create_record(&storage, &url);
    let before = storage.lock().unwrap().get_record(id).unwrap().unwrap();

    let client = reqwest::Client::new();
    run_harvest(&storage, &client, id, &url).await;

    let after = storage.lock().unwrap().get_record(id).unwrap().unwrap();
    assert_eq!(after.url, before.url);
    assert_eq!(after.created_at, before.created_at);
}

#[tokio::test]
async fn test_harvest_is_idempotent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(TWO_ANCHOR_PAGE))
        .mount(&server)
        .await;

    let storage = shared_storage();
    let url = server.uri();
    let id = create_record(&storage, &url);

    let client = reqwest::Client::new();
    run_harvest(&storage, &client, id, &url).await;
    let first = storage.lock().unwrap().get_record(id).unwrap().unwrap();

    run_harvest(&storage, &client, id, &url).await;
    let second = storage.lock().unwrap().get_record(id).unwrap().unwrap();

    assert_eq!(first.sublinks, second.sublinks);
    assert_eq!(second.status, RecordStatus::Ready);
}

#[tokio::test]
async fn test_fetch_failure_leaves_sublinks_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let storage = shared_storage();
    let url = server.uri();
    let id = create_record(&storage, &url);

    let client = reqwest::Client::new();
    run_harvest(&storage, &client, id, &url).await;

    let record = storage.lock().unwrap().get_record(id).unwrap().unwrap();
    assert!(record.sublinks.is_empty());
    assert_eq!(record.status, RecordStatus::Failed);
}

#[tokio::test]
async fn test_network_failure_marks_record_failed() {
    let storage = shared_storage();

    // Nothing listens on this port
    let url = "http://127.0.0.1:9/".to_string();
    let id = create_record(&storage, &url);

    let client = reqwest::Client::new();
    run_harvest(&storage, &client, id, &url).await;

    let record = storage.lock().unwrap().get_record(id).unwrap().unwrap();
    assert_eq!(record.status, RecordStatus::Failed);
    assert!(record.sublinks.is_empty());
}

#[tokio::test]
async fn test_delete_race_resolves_as_noop() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(TWO_ANCHOR_PAGE))
        .mount(&server)
        .await;

    let storage = shared_storage();
    let url = server.uri();
    let id = create_record(&storage, &url);

    // Record disappears before the pipeline writes back
    storage.lock().unwrap().delete_record(id).unwrap();

    let client = reqwest::Client::new();
    run_harvest(&storage, &client, id, &url).await;

    // No error was raised and nothing was resurrected
    assert!(storage.lock().unwrap().get_record(id).unwrap().is_none());
    assert!(storage.lock().unwrap().all_records().unwrap().is_empty());
}

#[tokio::test]
async fn test_anchor_free_page_yields_empty_but_ready() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("<html><body>no links</body></html>"),
        )
        .mount(&server)
        .await;

    let storage = shared_storage();
    let url = server.uri();
    let id = create_record(&storage, &url);

    let client = reqwest::Client::new();
    run_harvest(&storage, &client, id, &url).await;

    let record = storage.lock().unwrap().get_record(id).unwrap().unwrap();
    assert!(record.sublinks.is_empty());
    assert_eq!(record.status, RecordStatus::Ready);
}
