//! Visitor counter API endpoints.

use axum::extract::State;

use super::{success, ApiResult};
use crate::models::VisitorCount;
use crate::AppState;

/// GET /visitor-count - Current visitor count.
pub async fn get_visitor_count(State(state): State<AppState>) -> ApiResult<VisitorCount> {
    let count = state.repo.get_visitor_count().await?;
    success(VisitorCount { count })
}

/// POST /visitor-count - Record a visit.
pub async fn increment_visitor_count(State(state): State<AppState>) -> ApiResult<VisitorCount> {
    let count = state.repo.increment_visitor_count().await?;
    tracing::debug!("Visitor count is now {}", count);
    success(VisitorCount { count })
}
