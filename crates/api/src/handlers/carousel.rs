use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use mahotsav_core::error::CoreError;
use mahotsav_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/carousel-items
///
/// Slides come back ascending by `order`.
pub async fn list_carousel_items(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let slides = state.store.read().await.get_carousel_items();

    Ok(Json(DataResponse { data: slides }))
}

/// GET /api/carousel-items/{id}
pub async fn get_carousel_item(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = id?;
    let slide = state
        .store
        .read()
        .await
        .get_carousel_item(id)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Carousel item",
            id,
        }))?;

    Ok(Json(DataResponse { data: slide }))
}
