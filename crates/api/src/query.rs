//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Optional pagination parameters (`?limit=&offset=`).
///
/// Omitting both returns the whole list. Values are clamped by
/// `mahotsav_core::filter::paginate`.
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Query parameters for `GET /api/search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}
