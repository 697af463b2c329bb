//! Registered under `/gallery-items`.

use axum::routing::get;
use axum::Router;

use crate::handlers::gallery;
use crate::state::AppState;

/// ```text
/// GET /                     list_gallery_items
/// GET /category/{category}  list_gallery_items_by_category
/// GET /{id}                 get_gallery_item
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(gallery::list_gallery_items))
        .route(
            "/category/{category}",
            get(gallery::list_gallery_items_by_category),
        )
        .route("/{id}", get(gallery::get_gallery_item))
}
