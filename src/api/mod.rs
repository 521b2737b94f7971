//! REST API exposing the calculators as stateless request/response calls.
//!
//! Provides three endpoints:
//! - `POST /diesel`: generator profile in, diesel estimate out
//! - `POST /energy`: appliance list in, energy estimate out
//! - `GET /appliances`: catalog of common appliances

mod handlers;
mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};

pub use types::{EnergyRequest, ErrorResponse, ReportQuery};

/// Immutable application state shared across all request handlers.
///
/// Each request builds its own advisory selector, so no locks are needed.
pub struct AppState {
    /// Pinned advisory seed; every request with the same input then gets the same tip.
    pub seed: Option<u64>,
}

/// Builds the axum router with all API routes.
///
/// # Arguments
///
/// * `state` - Shared application state
///
/// # Returns
///
/// Configured `Router` ready to serve.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/diesel", post(handlers::post_diesel))
        .route("/energy", post(handlers::post_energy))
        .route("/appliances", get(handlers::get_appliances))
        .with_state(state)
}

/// Binds to the given address and serves the API.
///
/// # Panics
///
/// Panics if the TCP listener cannot bind to `addr`.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {addr}: {e}"));
    eprintln!("API server listening on http://{addr}");
    axum::serve(listener, app)
        .await
        .unwrap_or_else(|e| panic!("server error: {e}"));
}
