//! Event API endpoints.

use axum::extract::State;

use super::extract::{Json, Path, Query};
use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{DeleteAck, Event, EventRequest, RecentQuery};
use crate::AppState;

/// GET /events - List all events.
pub async fn list_events(State(state): State<AppState>) -> ApiResult<Vec<Event>> {
    success(state.repo.list_events().await?)
}

/// GET /events/recent?limit=N - Newest events first.
pub async fn recent_events(
    State(state): State<AppState>,
    Query(query): Query<RecentQuery>,
) -> ApiResult<Vec<Event>> {
    if query.limit < 0 {
        return Err(AppError::Validation(
            "limit must not be negative".to_string(),
        ));
    }

    success(state.repo.recent_events(query.limit).await?)
}

/// POST /events - Create a new event.
pub async fn create_event(
    State(state): State<AppState>,
    Json(request): Json<EventRequest>,
) -> ApiResult<Event> {
    success(state.repo.create_event(request).await?)
}

/// PUT /events/{id} - Replace an event.
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<EventRequest>,
) -> ApiResult<Event> {
    success(state.repo.update_event(id, request).await?)
}

/// DELETE /events/{id} - Delete an event. Succeeds for unknown IDs too.
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<DeleteAck> {
    state.repo.delete_event(id).await?;
    success(DeleteAck { ok: true })
}
