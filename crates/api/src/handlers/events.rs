//! Handlers for the festival programme.

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use mahotsav_core::error::CoreError;
use mahotsav_core::filter::paginate;
use mahotsav_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/events
pub async fn list_events(
    State(state): State<AppState>,
    params: Result<Query<PaginationParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;
    let events = state.store.read().await.get_events();

    Ok(Json(DataResponse {
        data: paginate(events, params.limit, params.offset),
    }))
}

/// GET /api/events/month/{month}
///
/// Month names compare case-insensitively, so `april` and `APRIL` both match
/// events stored as `April`.
pub async fn list_events_by_month(
    State(state): State<AppState>,
    month: Result<Path<String>, PathRejection>,
    params: Result<Query<PaginationParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(month) = month?;
    let Query(params) = params?;
    let events = state.store.read().await.get_events_by_month(&month);

    Ok(Json(DataResponse {
        data: paginate(events, params.limit, params.offset),
    }))
}

/// GET /api/events/{id}
pub async fn get_event(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = id?;
    let event = state
        .store
        .read()
        .await
        .get_event(id)
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Event", id }))?;

    Ok(Json(DataResponse { data: event }))
}
