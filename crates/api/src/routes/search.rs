use axum::routing::get;
use axum::Router;

use crate::handlers::search;
use crate::state::AppState;

/// Cross-collection search, registered as `/search`.
pub fn router() -> Router<AppState> {
    Router::new().route("/search", get(search::search))
}
