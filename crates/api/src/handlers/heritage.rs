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

/// GET /api/heritage-info
pub async fn list_heritage_info(
    State(state): State<AppState>,
    params: Result<Query<PaginationParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;
    let notes = state.store.read().await.get_region_notes();

    Ok(Json(DataResponse {
        data: paginate(notes, params.limit, params.offset),
    }))
}

/// GET /api/heritage-info/category/{category}
pub async fn list_heritage_info_by_category(
    State(state): State<AppState>,
    category: Result<Path<String>, PathRejection>,
    params: Result<Query<PaginationParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(category) = category?;
    let Query(params) = params?;
    let notes = {
        let store = state.store.read().await;
        match CategoryFilter::parse(&category) {
            CategoryFilter::All => store.get_region_notes(),
            CategoryFilter::Exact(category) => store.get_region_notes_by_category(&category),
        }
    };

    Ok(Json(DataResponse {
        data: paginate(notes, params.limit, params.offset),
    }))
}

/// GET /api/heritage-info/{id}
pub async fn get_heritage_info(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = id?;
    let note = state
        .store
        .read()
        .await
        .get_region_note(id)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Heritage info",
            id,
        }))?;

    Ok(Json(DataResponse { data: note }))
}
