//! Credential checks and the approval gate.
//!
//! Implements constant-time comparison to mitigate timing attacks.

use subtle::ConstantTimeEq;

use crate::db::Repository;
use crate::errors::AppError;
use crate::models::{LoginRequest, User};

/// Check a login attempt and return the matching user.
///
/// An unknown nickname and a wrong password produce the same error. Accounts
/// that are neither approved nor admin are refused with `Forbidden`.
pub async fn authenticate(repo: &Repository, request: &LoginRequest) -> Result<User, AppError> {
    let user = repo
        .find_user_by_nickname(&request.nickname)
        .await?
        .filter(|user| constant_time_compare(&user.password, &request.password))
        .ok_or_else(|| {
            tracing::warn!("Rejected login for {:?}: bad credentials", request.nickname);
            AppError::Unauthorized("Wrong nickname or password".to_string())
        })?;

    if !user.can_log_in() {
        tracing::info!("Rejected login for {:?}: pending approval", user.nickname);
        return Err(AppError::Forbidden("Account is pending approval".to_string()));
    }

    Ok(user)
}

/// Perform constant-time string comparison.
fn constant_time_compare(a: &str, b: &str) -> bool {
    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    // Constant-time comparison
    a_bytes.ct_eq(b_bytes).into()
}
