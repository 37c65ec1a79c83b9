//! Calendar event model matching the frontend Event interface.

use serde::{Deserialize, Serialize};

/// Default page size of `GET /events/recent`.
pub const DEFAULT_RECENT_LIMIT: i64 = 10;

/// A calendar entry. `date` is an opaque string chosen by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub date: String,
    /// Nickname of the author.
    pub created_by: String,
}

/// Request body for creating or fully replacing an event.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRequest {
    pub title: String,
    pub date: String,
    pub created_by: String,
}

impl EventRequest {
    pub fn into_event(self, id: i64) -> Event {
        Event {
            id,
            title: self.title,
            date: self.date,
            created_by: self.created_by,
        }
    }
}

/// Query string of `GET /events/recent`.
#[derive(Debug, Clone, Deserialize)]
pub struct RecentQuery {
    #[serde(default = "default_recent_limit")]
    pub limit: i64,
}

fn default_recent_limit() -> i64 {
    DEFAULT_RECENT_LIMIT
}

/// Number of events authored by one user.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EventCount {
    pub count: i64,
}

/// Acknowledgement of `DELETE /events/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteAck {
    pub ok: bool,
}
