//! HTTP route handlers for the inventory server.
//!
//! Each route accepts any verb and answers the wrong one with 400, before the
//! service or the store is touched. Query strings are read as raw pairs so a
//! repeated key keeps its first value.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{Method, StatusCode};
use tracing::warn;

use crate::service::{params, InventoryService, Reply};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<InventoryService>,
}

fn require(method: &Method, expected: Method) -> Result<(), Reply> {
    if *method == expected {
        Ok(())
    } else {
        warn!(%method, %expected, "Rejected request with wrong verb");
        Err(Reply::bad_request())
    }
}

/// Handle GET /search
pub async fn handle_search(
    State(state): State<AppState>,
    method: Method,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Reply {
    if let Err(reply) = require(&method, Method::GET) {
        return reply;
    }
    state.service.search(&params::title_from_query(&params::first_values(pairs))).await
}

/// Handle POST /create
pub async fn handle_create(
    State(state): State<AppState>,
    method: Method,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Reply {
    if let Err(reply) = require(&method, Method::POST) {
        return reply;
    }
    state.service.create(&params::first_values(pairs)).await
}

/// Handle POST /update
pub async fn handle_update(
    State(state): State<AppState>,
    method: Method,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Reply {
    if let Err(reply) = require(&method, Method::POST) {
        return reply;
    }
    state.service.update(&params::first_values(pairs)).await
}

/// Handle POST /delete
pub async fn handle_delete(
    State(state): State<AppState>,
    method: Method,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Reply {
    if let Err(reply) = require(&method, Method::POST) {
        return reply;
    }
    state.service.delete(&params::first_values(pairs)).await
}

/// Handle GET /-/healthy
pub async fn handle_healthy() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}

/// Handle GET /-/ready
///
/// Ready once the inventory store answers a ping.
pub async fn handle_ready(State(state): State<AppState>) -> (StatusCode, &'static str) {
    match state.service.store().ping().await {
        Ok(_) => (StatusCode::OK, "OK"),
        Err(_) => (StatusCode::SERVICE_UNAVAILABLE, "Not Ready"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::InventoryClient;
    use crate::mock_framework::{create_mock_client, spawn_inventory_store, FixedLookup};
    use crate::service::ServiceConfig;
    use crate::domain::InventoryRecord;

    fn state_over(store: InventoryClient) -> AppState {
        let service = InventoryService::new(
            Arc::new(store),
            Arc::new(FixedLookup::failing()),
            ServiceConfig::default(),
        );
        AppState { service: Arc::new(service) }
    }

    #[tokio::test]
    async fn test_return_ok_for_healthy() {
        // given/when
        let (status, body) = handle_healthy().await;

        // then
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }

    #[tokio::test]
    async fn test_return_ok_for_ready_when_store_running() {
        // given
        let state = state_over(spawn_inventory_store());

        // when
        let (status, body) = handle_ready(State(state)).await;

        // then
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }

    #[tokio::test]
    async fn test_return_503_for_ready_when_store_gone() {
        // given
        let (client, receiver) = create_mock_client::<InventoryRecord>(1);
        drop(receiver);
        let state = state_over(InventoryClient::new(client));

        // when
        let (status, body) = handle_ready(State(state)).await;

        // then
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body, "Not Ready");
    }

    #[tokio::test]
    async fn test_reject_wrong_verb_without_store_access() {
        // given
        let (client, mut receiver) = create_mock_client::<InventoryRecord>(1);
        let state = state_over(InventoryClient::new(client));
        let query = vec![("title".to_string(), "Chess".to_string())];

        // when
        let create = handle_create(State(state.clone()), Method::GET, Query(query.clone())).await;
        let search = handle_search(State(state.clone()), Method::POST, Query(query)).await;

        // then
        assert_eq!(create, Reply::bad_request());
        assert_eq!(search.status, StatusCode::BAD_REQUEST);
        assert_eq!(search.text(), "Error: Bad Request\n");
        drop(state);
        assert!(receiver.recv().await.is_none());
    }
}
