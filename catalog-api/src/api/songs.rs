//! Song CRUD endpoints
//!
//! Single-song retrieval embeds the owning artist and the genre list;
//! listing stays flat with the plain artist id. Create and update resolve
//! the artist reference before writing; an unknown artist id surfaces as
//! a server error, not a 4xx.

use anyhow::anyhow;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::db::artists::Artist;
use crate::db::genres::Genre;
use crate::db::songs::Song;
use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// Request payload for creating or overwriting a song
#[derive(Debug, Deserialize)]
pub struct SongPayload {
    pub title: String,
    pub artist_id: i64,
    pub album: String,
    pub length: i64,
}

/// Single-song response with one level of embedded relations
#[derive(Debug, Serialize)]
pub struct SongDetail {
    pub id: i64,
    pub title: String,
    pub album: String,
    pub length: i64,
    pub artist_id: i64,
    pub artist: Artist,
    pub genres: Vec<Genre>,
}

/// Resolve a song's artist reference to an existing artist row
async fn resolve_artist(state: &AppState, artist_id: i64) -> Result<Artist, ApiError> {
    let artist = crate::db::artists::find_artist(&state.db, artist_id)
        .await?
        .ok_or_else(|| anyhow!("no artist row with id {}", artist_id))?;
    Ok(artist)
}

/// GET /songs/:id
pub async fn get_song(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<SongDetail>> {
    let song = crate::db::songs::find_song(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("No song found with id {}", id)))?;

    let artist = resolve_artist(&state, song.artist_id).await?;
    let genres = crate::db::genres::genres_for_song(&state.db, song.id).await?;

    Ok(Json(SongDetail {
        id: song.id,
        title: song.title,
        album: song.album,
        length: song.length,
        artist_id: song.artist_id,
        artist,
        genres,
    }))
}

/// GET /songs
pub async fn list_songs(State(state): State<AppState>) -> ApiResult<Json<Vec<Song>>> {
    let songs = crate::db::songs::list_songs(&state.db).await?;
    Ok(Json(songs))
}

/// POST /songs
pub async fn create_song(
    State(state): State<AppState>,
    Json(payload): Json<SongPayload>,
) -> ApiResult<Json<Song>> {
    let artist = resolve_artist(&state, payload.artist_id).await?;

    let song = crate::db::songs::insert_song(
        &state.db,
        &payload.title,
        &payload.album,
        payload.length,
        artist.id,
    )
    .await?;

    info!("Created song {} ({})", song.id, song.title);

    Ok(Json(song))
}

/// PUT /songs/:id
pub async fn update_song(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<SongPayload>,
) -> ApiResult<StatusCode> {
    let artist = resolve_artist(&state, payload.artist_id).await?;

    crate::db::songs::update_song(
        &state.db,
        id,
        &payload.title,
        &payload.album,
        payload.length,
        artist.id,
    )
    .await?;

    info!("Updated song {}", id);

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /songs/:id
pub async fn delete_song(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    crate::db::songs::delete_song(&state.db, id).await?;

    info!("Deleted song {}", id);

    Ok(StatusCode::NO_CONTENT)
}

/// Build song routes
pub fn song_routes() -> Router<AppState> {
    Router::new()
        .route("/songs", get(list_songs).post(create_song))
        .route(
            "/songs/:id",
            get(get_song).put(update_song).delete(delete_song),
        )
}
