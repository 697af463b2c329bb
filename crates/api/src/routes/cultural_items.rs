//! Registered under `/cultural-items`.

use axum::routing::get;
use axum::Router;

use crate::handlers::cultural_items;
use crate::state::AppState;

/// ```text
/// GET /                     list_cultural_items
/// GET /category/{category}  list_cultural_items_by_category
/// GET /{id}                 get_cultural_item
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cultural_items::list_cultural_items))
        .route(
            "/category/{category}",
            get(cultural_items::list_cultural_items_by_category),
        )
        .route("/{id}", get(cultural_items::get_cultural_item))
}
