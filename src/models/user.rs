//! User model matching the frontend User interface.

use serde::{Deserialize, Serialize};

/// A registered calendar user.
///
/// The password is stored and returned verbatim; the frontend relies on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub nickname: String,
    pub password: String,
    pub note: String,
    pub approved: bool,
    pub is_admin: bool,
}

impl User {
    /// Whether this account passes the approval gate.
    pub fn can_log_in(&self) -> bool {
        self.approved || self.is_admin
    }
}

/// Request body for self-registration.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub nickname: String,
    pub password: String,
    #[serde(default)]
    pub note: String,
}

/// Request body for login.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub nickname: String,
    pub password: String,
}

/// Query string of `PUT /users/{id}/approve`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApproveQuery {
    pub approved: bool,
}
