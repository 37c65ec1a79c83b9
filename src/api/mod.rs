//! REST API module.
//!
//! Contains all API routes and handlers following the frontend contract.

mod events;
mod extract;
mod users;
mod visitors;

pub use events::*;
pub use users::*;
pub use visitors::*;

use axum::Json;

use crate::errors::AppError;

/// Handlers answer with the bare JSON body or an [`AppError`].
pub type ApiResult<T> = Result<Json<T>, AppError>;

/// Create a successful API response.
pub fn success<T>(data: T) -> ApiResult<T> {
    Ok(Json(data))
}
