//! HTTP server for the inventory service.

mod config;
pub mod handlers;

pub use config::{CliArgs, ServerConfig};
pub use handlers::AppState;

use std::future::Future;

use axum::routing::{any, get};
use axum::Router;
use tokio::net::TcpListener;

use handlers::{
    handle_create, handle_delete, handle_healthy, handle_ready, handle_search, handle_update,
};

/// Build the inventory router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/search", any(handle_search))
        .route("/create", any(handle_create))
        .route("/update", any(handle_update))
        .route("/delete", any(handle_delete))
        .route("/-/healthy", get(handle_healthy))
        .route("/-/ready", get(handle_ready))
        .with_state(state)
}

/// Serve the router on an already bound listener until `shutdown` resolves.
pub async fn serve(
    listener: TcpListener,
    state: AppState,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), std::io::Error> {
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}
