pub mod carousel;
pub mod cultural_items;
pub mod events;
pub mod gallery;
pub mod health;
pub mod heritage;
pub mod newsletter;
pub mod search;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /cultural-items                         list
/// /cultural-items/category/{category}     list by category ("all" = everything)
/// /cultural-items/{id}                    get
///
/// /events                                 list
/// /events/month/{month}                   list by month (case-insensitive)
/// /events/{id}                            get
///
/// /gallery-items                          list
/// /gallery-items/category/{category}      list by category
/// /gallery-items/{id}                     get
///
/// /heritage-info                          list
/// /heritage-info/category/{category}      list by category
/// /heritage-info/{id}                     get
///
/// /carousel-items                         list (ordered)
/// /carousel-items/{id}                    get
///
/// /subscribe                              newsletter signup (POST)
///
/// /search?q=                              cross-collection search
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/cultural-items", cultural_items::router())
        .nest("/events", events::router())
        .nest("/gallery-items", gallery::router())
        .nest("/heritage-info", heritage::router())
        .nest("/carousel-items", carousel::router())
        .merge(newsletter::router())
        .merge(search::router())
}
