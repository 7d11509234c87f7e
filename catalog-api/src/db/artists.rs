//! Artist database operations

use anyhow::Result;
use serde::Serialize;
use sqlx::{Row, SqlitePool};

/// Artist record
#[derive(Debug, Clone, Serialize)]
pub struct Artist {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub bio: String,
}

/// Load artist by id
pub async fn find_artist(pool: &SqlitePool, id: i64) -> Result<Option<Artist>> {
    let row = sqlx::query("SELECT id, name, age, bio FROM artists WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|row| Artist {
        id: row.get("id"),
        name: row.get("name"),
        age: row.get("age"),
        bio: row.get("bio"),
    }))
}

/// Load all artists
pub async fn list_artists(pool: &SqlitePool) -> Result<Vec<Artist>> {
    let rows = sqlx::query("SELECT id, name, age, bio FROM artists ORDER BY id ASC")
        .fetch_all(pool)
        .await?;

    Ok(rows
        .iter()
        .map(|row| Artist {
            id: row.get("id"),
            name: row.get("name"),
            age: row.get("age"),
            bio: row.get("bio"),
        })
        .collect())
}

/// Insert a new artist; the database assigns the id
pub async fn insert_artist(pool: &SqlitePool, name: &str, age: i64, bio: &str) -> Result<Artist> {
    let result = sqlx::query("INSERT INTO artists (name, age, bio) VALUES (?, ?, ?)")
        .bind(name)
        .bind(age)
        .bind(bio)
        .execute(pool)
        .await?;

    Ok(Artist {
        id: result.last_insert_rowid(),
        name: name.to_string(),
        age,
        bio: bio.to_string(),
    })
}

/// Overwrite all mutable fields of an artist
pub async fn update_artist(
    pool: &SqlitePool,
    id: i64,
    name: &str,
    age: i64,
    bio: &str,
) -> Result<()> {
    let result = sqlx::query("UPDATE artists SET name = ?, age = ?, bio = ? WHERE id = ?")
        .bind(name)
        .bind(age)
        .bind(bio)
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        anyhow::bail!("no artist row with id {}", id);
    }

    Ok(())
}

/// Delete an artist row
pub async fn delete_artist(pool: &SqlitePool, id: i64) -> Result<()> {
    let result = sqlx::query("DELETE FROM artists WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        anyhow::bail!("no artist row with id {}", id);
    }

    Ok(())
}
