//! Potluck Group Backend
//!
//! REST backend for a small community group: events with RSVPs, recipe and
//! shared tech content uploads, and a read-only calendar view fed by an
//! external iCalendar feed. SQLite is the backing store.

mod api;
mod calendar;
mod config;
mod db;
mod errors;
mod models;
mod schedule;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use calendar::FeedClient;
use config::Config;
use db::Repository;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub feed: Arc<FeedClient>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Potluck Group Backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Bind address: {}", config.bind_addr);

    if config.feed_url.is_none() {
        tracing::warn!("No calendar feed configured (POTLUCK_FEED_URL). Calendar view is disabled.");
    }

    // Initialize database
    let pool = db::init_database(&config.db_path).await?;
    let repo = Arc::new(Repository::new(pool));

    // Feed client for the calendar view
    let feed = Arc::new(FeedClient::new()?);

    // Create application state
    let state = AppState {
        repo,
        feed,
        config: Arc::new(config.clone()),
    };

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

    // API routes
    let api_routes = Router::new()
        // Events
        .route("/events", get(api::list_events))
        .route("/events", post(api::create_event))
        .route("/events/{id}", get(api::get_event))
        .route("/events/{id}", delete(api::delete_event))
        // RSVPs
        .route("/rsvps", get(api::list_rsvps))
        .route("/rsvps", post(api::create_rsvp))
        .route("/rsvps/{id}", delete(api::delete_rsvp))
        // Schedule view
        .route("/schedule", get(api::get_schedule))
        // Recipes
        .route("/recipes", get(api::list_recipes))
        .route("/recipes", post(api::create_recipe))
        .route("/recipes/{id}/file", get(api::download_recipe))
        .route("/recipes/{id}", delete(api::delete_recipe))
        // Shared tech content
        .route("/shared-content", get(api::list_shared_content))
        .route("/shared-content", post(api::create_shared_content))
        .route("/shared-content/{id}/file", get(api::download_shared_content))
        .route("/shared-content/{id}", delete(api::delete_shared_content))
        // Calendar view
        .route("/calendar", get(api::get_calendar));

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
