//! Visitor counter model.

use serde::Serialize;

/// Process-wide visit counter, persisted as a singleton row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VisitorCount {
    pub count: i64,
}
