//! Genre database operations

use anyhow::Result;
use serde::Serialize;
use sqlx::{Row, SqlitePool};

/// Genre record
#[derive(Debug, Clone, Serialize)]
pub struct Genre {
    pub id: i64,
    pub description: String,
}

/// Load genre by id
pub async fn find_genre(pool: &SqlitePool, id: i64) -> Result<Option<Genre>> {
    let row = sqlx::query("SELECT id, description FROM genres WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|row| Genre {
        id: row.get("id"),
        description: row.get("description"),
    }))
}

/// Load all genres
pub async fn list_genres(pool: &SqlitePool) -> Result<Vec<Genre>> {
    let rows = sqlx::query("SELECT id, description FROM genres ORDER BY id ASC")
        .fetch_all(pool)
        .await?;

    Ok(rows
        .iter()
        .map(|row| Genre {
            id: row.get("id"),
            description: row.get("description"),
        })
        .collect())
}

/// Insert a new genre; the database assigns the id
pub async fn insert_genre(pool: &SqlitePool, description: &str) -> Result<Genre> {
    let result = sqlx::query("INSERT INTO genres (description) VALUES (?)")
        .bind(description)
        .execute(pool)
        .await?;

    Ok(Genre {
        id: result.last_insert_rowid(),
        description: description.to_string(),
    })
}

/// Overwrite a genre's description
pub async fn update_genre(pool: &SqlitePool, id: i64, description: &str) -> Result<()> {
    let result = sqlx::query("UPDATE genres SET description = ? WHERE id = ?")
        .bind(description)
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        anyhow::bail!("no genre row with id {}", id);
    }

    Ok(())
}

/// Delete a genre row
pub async fn delete_genre(pool: &SqlitePool, id: i64) -> Result<()> {
    let result = sqlx::query("DELETE FROM genres WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        anyhow::bail!("no genre row with id {}", id);
    }

    Ok(())
}

/// Load the genres linked to a song, in link order
pub async fn genres_for_song(pool: &SqlitePool, song_id: i64) -> Result<Vec<Genre>> {
    let rows = sqlx::query(
        r#"
        SELECT g.id, g.description
        FROM genres g
        JOIN song_genres sg ON sg.genre_id = g.id
        WHERE sg.song_id = ?
        ORDER BY g.id ASC
        "#,
    )
    .bind(song_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .iter()
        .map(|row| Genre {
            id: row.get("id"),
            description: row.get("description"),
        })
        .collect())
}
