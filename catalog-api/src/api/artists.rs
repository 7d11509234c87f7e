//! Artist CRUD endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::info;

use crate::db::artists::Artist;
use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// Request payload for creating or overwriting an artist
#[derive(Debug, Deserialize)]
pub struct ArtistPayload {
    pub name: String,
    pub age: i64,
    pub bio: String,
}

/// GET /artists/:id
///
/// The only operation anywhere with a graceful not-found path.
pub async fn get_artist(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Artist>> {
    let artist = crate::db::artists::find_artist(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("No artist found with id {}", id)))?;

    Ok(Json(artist))
}

/// GET /artists
pub async fn list_artists(State(state): State<AppState>) -> ApiResult<Json<Vec<Artist>>> {
    let artists = crate::db::artists::list_artists(&state.db).await?;
    Ok(Json(artists))
}

/// POST /artists
///
/// Returns the created entity with its database-assigned id.
pub async fn create_artist(
    State(state): State<AppState>,
    Json(payload): Json<ArtistPayload>,
) -> ApiResult<Json<Artist>> {
    let artist =
        crate::db::artists::insert_artist(&state.db, &payload.name, payload.age, &payload.bio)
            .await?;

    info!("Created artist {} ({})", artist.id, artist.name);

    Ok(Json(artist))
}

/// PUT /artists/:id
///
/// Full overwrite of all mutable fields; responds 204 with no body.
pub async fn update_artist(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ArtistPayload>,
) -> ApiResult<StatusCode> {
    crate::db::artists::update_artist(&state.db, id, &payload.name, payload.age, &payload.bio)
        .await?;

    info!("Updated artist {}", id);

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /artists/:id
pub async fn delete_artist(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    crate::db::artists::delete_artist(&state.db, id).await?;

    info!("Deleted artist {}", id);

    Ok(StatusCode::NO_CONTENT)
}

/// Build artist routes
pub fn artist_routes() -> Router<AppState> {
    Router::new()
        .route("/artists", get(list_artists).post(create_artist))
        .route(
            "/artists/:id",
            get(get_artist).put(update_artist).delete(delete_artist),
        )
}
