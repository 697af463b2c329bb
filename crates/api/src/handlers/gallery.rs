//! Handlers for the photo gallery.

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use mahotsav_core::error::CoreError;
use mahotsav_core::filter::{paginate, CategoryFilter};
use mahotsav_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/gallery-items
pub async fn list_gallery_items(
    State(state): State<AppState>,
    params: Result<Query<PaginationParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;
    let items = state.store.read().await.get_media_items();

    Ok(Json(DataResponse {
        data: paginate(items, params.limit, params.offset),
    }))
}

/// GET /api/gallery-items/category/{category}
pub async fn list_gallery_items_by_category(
    State(state): State<AppState>,
    category: Result<Path<String>, PathRejection>,
    params: Result<Query<PaginationParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(category) = category?;
    let Query(params) = params?;
    let items = {
        let store = state.store.read().await;
        match CategoryFilter::parse(&category) {
            CategoryFilter::All => store.get_media_items(),
            CategoryFilter::Exact(category) => store.get_media_items_by_category(&category),
        }
    };

    Ok(Json(DataResponse {
        data: paginate(items, params.limit, params.offset),
    }))
}

/// GET /api/gallery-items/{id}
pub async fn get_gallery_item(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = id?;
    let item = state
        .store
        .read()
        .await
        .get_media_item(id)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Gallery item",
            id,
        }))?;

    Ok(Json(DataResponse { data: item }))
}
