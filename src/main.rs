//! Calendar Backend
//!
//! REST backend for the shared calendar: users with an approval gate, events
//! and a visitor counter, persisted in SQLite.

mod api;
mod auth;
mod config;
mod db;
mod errors;
mod models;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use db::Repository;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Calendar Backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Initialize database
    let pool = db::init_database(&config.db_path, &config.admin).await?;
    let repo = Arc::new(Repository::new(pool));

    // Create application state
    let state = AppState { repo };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    // The frontend defaults to an `/api` base URL, older builds call the root.
    Router::new()
        .merge(api_routes())
        .nest("/api", api_routes())
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// REST resources.
fn api_routes() -> Router<AppState> {
    Router::new()
        // Visitor counter
        .route(
            "/visitor-count",
            get(api::get_visitor_count).post(api::increment_visitor_count),
        )
        // Accounts
        .route("/register", post(api::register))
        .route("/login", post(api::login))
        .route("/users", get(api::list_users))
        .route("/users/{id}", delete(api::delete_user))
        .route("/users/{id}/approve", put(api::approve_user))
        .route("/users/{id}/events", get(api::list_user_events))
        .route("/users/{id}/events/count", get(api::count_user_events))
        // Events
        .route("/events", get(api::list_events).post(api::create_event))
        .route("/events/recent", get(api::recent_events))
        .route(
            "/events/{id}",
            put(api::update_event).delete(api::delete_event),
        )
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
