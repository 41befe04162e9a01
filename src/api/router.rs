//! Route table for the /links/ resource

use crate::api::handlers::{
    create_links, delete_links, read_all_links, read_links, update_links,
};
use crate::api::state::AppState;
use axum::routing::{get, post};
use axum::Router;

/// Builds the router for the /links/ resource
///
/// Both paths carry a trailing slash; clients must use it.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/links/", post(create_links).get(read_all_links))
        .route(
            "/links/:id/",
            get(read_links).put(update_links).delete(delete_links),
        )
}
