//! Genre CRUD endpoints
//!
//! Single-genre retrieval embeds the genre's songs; listing stays flat.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::db::genres::Genre;
use crate::db::songs::Song;
use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// Request payload for creating or overwriting a genre
#[derive(Debug, Deserialize)]
pub struct GenrePayload {
    pub description: String,
}

/// Single-genre response with one level of embedded songs
#[derive(Debug, Serialize)]
pub struct GenreDetail {
    pub id: i64,
    pub description: String,
    pub songs: Vec<Song>,
}

/// GET /genres/:id
pub async fn get_genre(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<GenreDetail>> {
    let genre = crate::db::genres::find_genre(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("No genre found with id {}", id)))?;

    let songs = crate::db::songs::songs_for_genre(&state.db, genre.id).await?;

    Ok(Json(GenreDetail {
        id: genre.id,
        description: genre.description,
        songs,
    }))
}

/// GET /genres
pub async fn list_genres(State(state): State<AppState>) -> ApiResult<Json<Vec<Genre>>> {
    let genres = crate::db::genres::list_genres(&state.db).await?;
    Ok(Json(genres))
}

/// POST /genres
pub async fn create_genre(
    State(state): State<AppState>,
    Json(payload): Json<GenrePayload>,
) -> ApiResult<Json<Genre>> {
    let genre = crate::db::genres::insert_genre(&state.db, &payload.description).await?;

    info!("Created genre {} ({})", genre.id, genre.description);

    Ok(Json(genre))
}

/// PUT /genres/:id
pub async fn update_genre(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<GenrePayload>,
) -> ApiResult<StatusCode> {
    crate::db::genres::update_genre(&state.db, id, &payload.description).await?;

    info!("Updated genre {}", id);

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /genres/:id
pub async fn delete_genre(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    crate::db::genres::delete_genre(&state.db, id).await?;

    info!("Deleted genre {}", id);

    Ok(StatusCode::NO_CONTENT)
}

/// Build genre routes
pub fn genre_routes() -> Router<AppState> {
    Router::new()
        .route("/genres", get(list_genres).post(create_genre))
        .route(
            "/genres/:id",
            get(get_genre).put(update_genre).delete(delete_genre),
        )
}
