//! Rating button endpoint

use axum::Json;
use engstudy_core::rating_options;

use crate::models::RatingOption;

/// GET /api/ratings
/// The four rating buttons with their labels and delay hints
pub async fn list() -> Json<Vec<RatingOption>> {
    Json(rating_options())
}
