//! Registered under `/events`.

use axum::routing::get;
use axum::Router;

use crate::handlers::events;
use crate::state::AppState;

/// ```text
/// GET /                list_events
/// GET /month/{month}   list_events_by_month
/// GET /{id}            get_event
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(events::list_events))
        .route("/month/{month}", get(events::list_events_by_month))
        .route("/{id}", get(events::get_event))
}
