use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use mahotsav_core::search::search as search_collections;

use crate::error::AppResult;
use crate::query::SearchParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/search?q=
///
/// Substring search over cultural items, events and gallery items. A blank
/// query returns an empty list. Collections are scanned in place under the
/// read guard; only the matching hits are built.
pub async fn search(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;
    let hits = {
        let store = state.store.read().await;
        search_collections(
            &params.q,
            store.iter_content_items(),
            store.iter_events(),
            store.iter_media_items(),
        )
    };

    tracing::debug!(query = %params.q, hits = hits.len(), "Search executed");

    Ok(Json(DataResponse { data: hits }))
}
