//! Registered under `/heritage-info`.

use axum::routing::get;
use axum::Router;

use crate::handlers::heritage;
use crate::state::AppState;

/// ```text
/// GET /                     list_heritage_info
/// GET /category/{category}  list_heritage_info_by_category
/// GET /{id}                 get_heritage_info
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(heritage::list_heritage_info))
        .route(
            "/category/{category}",
            get(heritage::list_heritage_info_by_category),
        )
        .route("/{id}", get(heritage::get_heritage_info))
}
