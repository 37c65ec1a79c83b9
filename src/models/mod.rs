//! Data models for the calendar application.
//!
//! These models match the frontend TypeScript interfaces exactly for seamless interoperability.

mod event;
mod user;
mod visitor;

pub use event::*;
pub use user::*;
pub use visitor::*;

use serde::Serialize;

/// Plain acknowledgement returned by write endpoints without a record to echo.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
