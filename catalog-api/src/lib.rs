//! catalog-api library - music catalog HTTP service
//!
//! CRUD over artists, genres, and songs. Every handler performs one
//! database operation against the shared pool and encodes the result.

use axum::Router;
use sqlx::SqlitePool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod api;
pub mod db;
pub mod error;

pub use error::{ApiError, ApiResult};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

/// Build application router
///
/// Explicit route-to-handler binding at startup; no other global state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::artist_routes())
        .merge(api::genre_routes())
        .merge(api::song_routes())
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
