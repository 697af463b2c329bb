//! Registered under `/carousel-items`.

use axum::routing::get;
use axum::Router;

use crate::handlers::carousel;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(carousel::list_carousel_items))
        .route("/{id}", get(carousel::get_carousel_item))
}
