//! Ordered genre lists for venues and artists
//!
//! Genres live in `venue_genres` / `artist_genres` keyed by owner and
//! position, so the list reads back exactly as it was written.

use sqlx::SqliteConnection;

/// Replace the genre list of a venue. Run inside the caller's transaction.
pub async fn replace_for_venue(
    conn: &mut SqliteConnection,
    venue_id: i64,
    genres: &[String],
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM venue_genres WHERE venue_id = ?")
        .bind(venue_id)
        .execute(&mut *conn)
        .await?;

    for (position, genre) in genres.iter().enumerate() {
        sqlx::query("INSERT INTO venue_genres (venue_id, position, genre) VALUES (?, ?, ?)")
            .bind(venue_id)
            .bind(position as i64)
            .bind(genre)
            .execute(&mut *conn)
            .await?;
    }

    Ok(())
}

/// Replace the genre list of an artist. Run inside the caller's transaction.
pub async fn replace_for_artist(
    conn: &mut SqliteConnection,
    artist_id: i64,
    genres: &[String],
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM artist_genres WHERE artist_id = ?")
        .bind(artist_id)
        .execute(&mut *conn)
        .await?;

    for (position, genre) in genres.iter().enumerate() {
        sqlx::query("INSERT INTO artist_genres (artist_id, position, genre) VALUES (?, ?, ?)")
            .bind(artist_id)
            .bind(position as i64)
            .bind(genre)
            .execute(&mut *conn)
            .await?;
    }

    Ok(())
}

pub async fn list_for_venue(
    conn: &mut SqliteConnection,
    venue_id: i64,
) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar("SELECT genre FROM venue_genres WHERE venue_id = ? ORDER BY position")
        .bind(venue_id)
        .fetch_all(&mut *conn)
        .await
}

pub async fn list_for_artist(
    conn: &mut SqliteConnection,
    artist_id: i64,
) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar("SELECT genre FROM artist_genres WHERE artist_id = ? ORDER BY position")
        .bind(artist_id)
        .fetch_all(&mut *conn)
        .await
}
