//! Song database operations

use anyhow::Result;
use serde::Serialize;
use sqlx::{Row, SqlitePool};

/// Song record. `length` is whole seconds.
#[derive(Debug, Clone, Serialize)]
pub struct Song {
    pub id: i64,
    pub title: String,
    pub album: String,
    pub length: i64,
    pub artist_id: i64,
}

fn song_from_row(row: &sqlx::sqlite::SqliteRow) -> Song {
    Song {
        id: row.get("id"),
        title: row.get("title"),
        album: row.get("album"),
        length: row.get("length"),
        artist_id: row.get("artist_id"),
    }
}

/// Load song by id
pub async fn find_song(pool: &SqlitePool, id: i64) -> Result<Option<Song>> {
    let row = sqlx::query("SELECT id, title, album, length, artist_id FROM songs WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.as_ref().map(song_from_row))
}

/// Load all songs
pub async fn list_songs(pool: &SqlitePool) -> Result<Vec<Song>> {
    let rows = sqlx::query("SELECT id, title, album, length, artist_id FROM songs ORDER BY id ASC")
        .fetch_all(pool)
        .await?;

    Ok(rows.iter().map(song_from_row).collect())
}

/// Insert a new song; the database assigns the id.
///
/// The caller resolves `artist_id` to an existing artist first; the
/// foreign key constraint backstops it here.
pub async fn insert_song(
    pool: &SqlitePool,
    title: &str,
    album: &str,
    length: i64,
    artist_id: i64,
) -> Result<Song> {
    let result =
        sqlx::query("INSERT INTO songs (title, album, length, artist_id) VALUES (?, ?, ?, ?)")
            .bind(title)
            .bind(album)
            .bind(length)
            .bind(artist_id)
            .execute(pool)
            .await?;

    Ok(Song {
        id: result.last_insert_rowid(),
        title: title.to_string(),
        album: album.to_string(),
        length,
        artist_id,
    })
}

/// Overwrite all mutable fields of a song
pub async fn update_song(
    pool: &SqlitePool,
    id: i64,
    title: &str,
    album: &str,
    length: i64,
    artist_id: i64,
) -> Result<()> {
    let result =
        sqlx::query("UPDATE songs SET title = ?, album = ?, length = ?, artist_id = ? WHERE id = ?")
            .bind(title)
            .bind(album)
            .bind(length)
            .bind(artist_id)
            .bind(id)
            .execute(pool)
            .await?;

    if result.rows_affected() == 0 {
        anyhow::bail!("no song row with id {}", id);
    }

    Ok(())
}

/// Delete a song row
pub async fn delete_song(pool: &SqlitePool, id: i64) -> Result<()> {
    let result = sqlx::query("DELETE FROM songs WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        anyhow::bail!("no song row with id {}", id);
    }

    Ok(())
}

/// Load the songs linked to a genre
pub async fn songs_for_genre(pool: &SqlitePool, genre_id: i64) -> Result<Vec<Song>> {
    let rows = sqlx::query(
        r#"
        SELECT s.id, s.title, s.album, s.length, s.artist_id
        FROM songs s
        JOIN song_genres sg ON sg.song_id = s.id
        WHERE sg.genre_id = ?
        ORDER BY s.id ASC
        "#,
    )
    .bind(genre_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(song_from_row).collect())
}

/// Link a song to a genre (idempotent)
pub async fn link_song_to_genre(pool: &SqlitePool, song_id: i64, genre_id: i64) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO song_genres (song_id, genre_id)
        VALUES (?, ?)
        ON CONFLICT(song_id, genre_id) DO NOTHING
        "#,
    )
    .bind(song_id)
    .bind(genre_id)
    .execute(pool)
    .await?;

    Ok(())
}
