use axum::extract::State;
use axum::{routing::get, Json, Router};
use mahotsav_store::store::CollectionCounts;
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Row count of every store collection.
    pub collections: CollectionCounts,
}

/// GET /health -- returns service status and store sizes.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let collections = state.store.read().await.counts();

    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        collections,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
