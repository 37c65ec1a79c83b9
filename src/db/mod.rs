//! Database module for SQLite persistence.
//!
//! SQLite is the source of truth for all application data.

mod repository;

pub use repository::*;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;

use crate::config::SeedAdmin;

/// Initialize the database connection pool and create the schema.
pub async fn init_database(db_path: &Path, admin: &SeedAdmin) -> Result<SqlitePool, sqlx::Error> {
    // Ensure the parent directory exists
    if let Some(parent) = db_path.parent() {
        tokio::fs::create_dir_all(parent).await.ok();
    }

    let db_url = format!("sqlite:{}?mode=rwc", db_path.display());

    let options = SqliteConnectOptions::from_str(&db_url)?
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    initialize(&pool, admin).await?;

    Ok(pool)
}

/// Create tables and seed rows if absent.
///
/// Idempotent: running it against an initialized store changes nothing.
pub async fn initialize(pool: &SqlitePool, admin: &SeedAdmin) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            nickname TEXT UNIQUE,
            password TEXT,
            note TEXT,
            approved BOOLEAN,
            isAdmin BOOLEAN
        );

        CREATE TABLE IF NOT EXISTS events (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT,
            date TEXT,
            createdBy TEXT
        );

        CREATE TABLE IF NOT EXISTS visitor_count (
            count INTEGER
        );
        "#,
    )
    .execute(pool)
    .await?;

    // visitor_count has no key, so guard the singleton insert explicitly
    sqlx::query(
        "INSERT INTO visitor_count (count) SELECT 0 WHERE NOT EXISTS (SELECT 1 FROM visitor_count)",
    )
    .execute(pool)
    .await?;

    let seeded = sqlx::query(
        "INSERT OR IGNORE INTO users (id, nickname, password, note, approved, isAdmin) VALUES (1, ?, ?, ?, 1, 1)",
    )
    .bind(&admin.nickname)
    .bind(&admin.password)
    .bind("Administrator account")
    .execute(pool)
    .await?;

    if seeded.rows_affected() > 0 {
        tracing::info!("Seeded admin account {:?}", admin.nickname);
    }

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_events_created_by ON events(createdBy)")
        .execute(pool)
        .await?;

    Ok(())
}
