use axum::routing::post;
use axum::Router;

use crate::handlers::newsletter;
use crate::state::AppState;

/// Newsletter signup, registered as `/subscribe`.
pub fn router() -> Router<AppState> {
    Router::new().route("/subscribe", post(newsletter::subscribe))
}
