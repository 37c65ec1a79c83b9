//! Database repository for CRUD operations.
//!
//! Uses prepared statements, and transactions where one request touches more than one row set.

use sqlx::{Row, SqlitePool};

use crate::errors::AppError;
use crate::models::{Event, EventRequest, RegisterRequest, User};

/// Database repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // ==================== USER OPERATIONS ====================

    /// List all users in insertion order.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        let rows = sqlx::query(
            "SELECT id, nickname, password, note, approved, isAdmin FROM users ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(user_from_row).collect())
    }

    /// Get a user by exact nickname.
    pub async fn find_user_by_nickname(&self, nickname: &str) -> Result<Option<User>, AppError> {
        let row = sqlx::query(
            "SELECT id, nickname, password, note, approved, isAdmin FROM users WHERE nickname = ?",
        )
        .bind(nickname)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(user_from_row))
    }

    /// Register a new, unapproved, non-admin user and return its ID.
    pub async fn create_user(&self, request: &RegisterRequest) -> Result<i64, AppError> {
        if self.find_user_by_nickname(&request.nickname).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "Nickname {} is already taken",
                request.nickname
            )));
        }

        // A concurrent registration can still win the race; the UNIQUE
        // constraint then surfaces as a Conflict through From<sqlx::Error>.
        let result = sqlx::query(
            "INSERT INTO users (nickname, password, note, approved, isAdmin) VALUES (?, ?, ?, 0, 0)",
        )
        .bind(&request.nickname)
        .bind(&request.password)
        .bind(&request.note)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Set the approval flag of a user.
    pub async fn set_approved(&self, id: i64, approved: bool) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE users SET approved = ? WHERE id = ?")
            .bind(approved)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("User {} not found", id)));
        }

        Ok(())
    }

    /// Delete a user together with the events they authored.
    ///
    /// Returns the number of events removed. Unknown IDs are a no-op.
    pub async fn delete_user(&self, id: i64) -> Result<u64, AppError> {
        let mut tx = self.pool.begin().await?;

        // Events reference their author by nickname, so they go first
        let events = sqlx::query(
            "DELETE FROM events WHERE createdBy = (SELECT nickname FROM users WHERE id = ?)",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(events.rows_affected())
    }

    // ==================== EVENT OPERATIONS ====================

    /// List all events in insertion order.
    pub async fn list_events(&self) -> Result<Vec<Event>, AppError> {
        let rows = sqlx::query("SELECT id, title, date, createdBy FROM events ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(event_from_row).collect())
    }

    /// The `limit` most recently created events, newest first.
    pub async fn recent_events(&self, limit: i64) -> Result<Vec<Event>, AppError> {
        let rows = sqlx::query(
            "SELECT id, title, date, createdBy FROM events ORDER BY id DESC LIMIT ?",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(event_from_row).collect())
    }

    /// Create a new event.
    pub async fn create_event(&self, request: EventRequest) -> Result<Event, AppError> {
        let result = sqlx::query("INSERT INTO events (title, date, createdBy) VALUES (?, ?, ?)")
            .bind(&request.title)
            .bind(&request.date)
            .bind(&request.created_by)
            .execute(&self.pool)
            .await?;

        Ok(request.into_event(result.last_insert_rowid()))
    }

    /// Replace title, date and author of an event.
    pub async fn update_event(&self, id: i64, request: EventRequest) -> Result<Event, AppError> {
        let result =
            sqlx::query("UPDATE events SET title = ?, date = ?, createdBy = ? WHERE id = ?")
                .bind(&request.title)
                .bind(&request.date)
                .bind(&request.created_by)
                .bind(id)
                .execute(&self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Event {} not found", id)));
        }

        Ok(request.into_event(id))
    }

    /// Delete an event. Unknown IDs are a no-op.
    pub async fn delete_event(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM events WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Events authored by the user with the given ID.
    pub async fn events_for_user(&self, user_id: i64) -> Result<Vec<Event>, AppError> {
        let rows = sqlx::query(
            r#"SELECT e.id, e.title, e.date, e.createdBy
               FROM events e JOIN users u ON e.createdBy = u.nickname
               WHERE u.id = ? ORDER BY e.id"#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(event_from_row).collect())
    }

    /// Number of events authored by the user with the given ID.
    pub async fn count_events_for_user(&self, user_id: i64) -> Result<i64, AppError> {
        let row = sqlx::query(
            r#"SELECT COUNT(*) AS count
               FROM events e JOIN users u ON e.createdBy = u.nickname
               WHERE u.id = ?"#,
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.get("count"))
    }

    // ==================== VISITOR COUNTER ====================

    /// Get the current visitor count.
    pub async fn get_visitor_count(&self) -> Result<i64, AppError> {
        let row = sqlx::query("SELECT count FROM visitor_count LIMIT 1")
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| r.get("count"))
            .ok_or_else(|| AppError::Internal("Visitor counter row is missing".to_string()))
    }

    /// Overwrite the visitor count.
    pub async fn set_visitor_count(&self, count: i64) -> Result<(), AppError> {
        sqlx::query("UPDATE visitor_count SET count = ?")
            .bind(count)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Add one visit and return the new count.
    ///
    /// The increment happens in SQL, so concurrent callers never lose updates.
    pub async fn increment_visitor_count(&self) -> Result<i64, AppError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("UPDATE visitor_count SET count = count + 1")
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::Internal(
                "Visitor counter row is missing".to_string(),
            ));
        }

        let row = sqlx::query("SELECT count FROM visitor_count LIMIT 1")
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(row.get("count"))
    }
}

// Helper functions for row conversion

fn user_from_row(row: &sqlx::sqlite::SqliteRow) -> User {
    let approved: Option<i32> = row.get("approved");
    let is_admin: Option<i32> = row.get("isAdmin");
    let note: Option<String> = row.get("note");
    User {
        id: row.get("id"),
        nickname: row.get("nickname"),
        password: row.get("password"),
        note: note.unwrap_or_default(),
        approved: approved.unwrap_or(0) != 0,
        is_admin: is_admin.unwrap_or(0) != 0,
    }
}

fn event_from_row(row: &sqlx::sqlite::SqliteRow) -> Event {
    Event {
        id: row.get("id"),
        title: row.get("title"),
        date: row.get("date"),
        created_by: row.get("createdBy"),
    }
}
