//! Newsletter signup.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use mahotsav_core::error::CoreError;
use mahotsav_store::models::subscriber::{CreateSubscriber, Subscriber};
use serde::Serialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SubscribeResponse {
    pub message: &'static str,
    pub subscriber: Subscriber,
}

/// POST /api/subscribe
///
/// Returns 201 with the new subscriber, 400 for a malformed body or email and
/// 409 when the email is already subscribed.
pub async fn subscribe(
    State(state): State<AppState>,
    payload: Result<Json<CreateSubscriber>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    input.validate().map_err(|_| {
        AppError::Core(CoreError::Validation("Invalid email address".to_string()))
    })?;

    let subscriber = state.store.write().await.create_subscriber(&input.email)?;

    tracing::info!(subscriber_id = subscriber.id, "Newsletter subscriber created");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: SubscribeResponse {
                message: "Successfully subscribed to newsletter",
                subscriber,
            },
        }),
    ))
}
