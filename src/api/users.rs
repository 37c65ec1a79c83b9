//! User API endpoints: registration, login, approval and administration.

use axum::extract::State;

use super::extract::{Json, Path, Query};
use super::{success, ApiResult};
use crate::auth;
use crate::errors::AppError;
use crate::models::{
    ApproveQuery, Event, EventCount, LoginRequest, MessageResponse, RegisterRequest, User,
};
use crate::AppState;

/// POST /register - Request a new account.
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> ApiResult<MessageResponse> {
    // Validate required fields
    if request.nickname.trim().is_empty() {
        return Err(AppError::Validation("Nickname is required".to_string()));
    }
    if request.password.trim().is_empty() {
        return Err(AppError::Validation("Password is required".to_string()));
    }

    let id = state.repo.create_user(&request).await?;
    tracing::info!("Registered user {:?} (id {}), awaiting approval", request.nickname, id);

    success(MessageResponse::new("Registration request submitted"))
}

/// POST /login - Check credentials and the approval gate.
///
/// The full user record is returned, password included.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<User> {
    let user = auth::authenticate(&state.repo, &request).await?;
    success(user)
}

/// GET /users - List all users.
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Vec<User>> {
    success(state.repo.list_users().await?)
}

/// PUT /users/{id}/approve?approved=bool - Approve or revoke an account.
pub async fn approve_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<ApproveQuery>,
) -> ApiResult<MessageResponse> {
    state.repo.set_approved(id, query.approved).await?;
    tracing::info!("User {} approved={}", id, query.approved);

    success(MessageResponse::new("Approval updated"))
}

/// DELETE /users/{id} - Delete a user and the events they authored.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<MessageResponse> {
    let removed_events = state.repo.delete_user(id).await?;
    tracing::info!("Deleted user {} and {} events", id, removed_events);

    success(MessageResponse::new("User deleted"))
}

/// GET /users/{id}/events - Events authored by a user.
pub async fn list_user_events(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Vec<Event>> {
    success(state.repo.events_for_user(id).await?)
}

/// GET /users/{id}/events/count - Number of events authored by a user.
pub async fn count_user_events(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<EventCount> {
    let count = state.repo.count_events_for_user(id).await?;
    success(EventCount { count })
}
