//! Show persistence
//!
//! Listings join the venue and artist names in the same query so a page of
//! shows costs one round trip.

use chrono::{DateTime, Utc};
use sqlx::SqliteConnection;

use crate::models::{NewShow, ShowListing};

const LISTING_SELECT: &str = r#"
    SELECT s.id, s.venue_id, v.name AS venue_name, s.artist_id, a.name AS artist_name,
           s.artist_image_link, s.start_time
    FROM shows s
    JOIN venues v ON v.id = s.venue_id
    JOIN artists a ON a.id = s.artist_id
"#;

/// Insert a show, returning its id.
///
/// `artist_image_link` is the artist's link at creation time; later artist
/// edits do not touch it.
pub async fn insert(
    conn: &mut SqliteConnection,
    show: &NewShow,
    artist_image_link: Option<&str>,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO shows (artist_id, venue_id, artist_image_link, start_time)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(show.artist_id)
    .bind(show.venue_id)
    .bind(artist_image_link)
    .bind(show.start_time)
    .execute(&mut *conn)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Every show, earliest first.
pub async fn list_all(conn: &mut SqliteConnection) -> Result<Vec<ShowListing>, sqlx::Error> {
    let sql = format!("{LISTING_SELECT} ORDER BY s.start_time, s.id");
    sqlx::query_as::<_, ShowListing>(&sql)
        .fetch_all(&mut *conn)
        .await
}

/// Shows held at one venue, earliest first.
pub async fn list_for_venue(
    conn: &mut SqliteConnection,
    venue_id: i64,
) -> Result<Vec<ShowListing>, sqlx::Error> {
    let sql = format!("{LISTING_SELECT} WHERE s.venue_id = ? ORDER BY s.start_time, s.id");
    sqlx::query_as::<_, ShowListing>(&sql)
        .bind(venue_id)
        .fetch_all(&mut *conn)
        .await
}

/// Shows played by one artist, earliest first.
pub async fn list_for_artist(
    conn: &mut SqliteConnection,
    artist_id: i64,
) -> Result<Vec<ShowListing>, sqlx::Error> {
    let sql = format!("{LISTING_SELECT} WHERE s.artist_id = ? ORDER BY s.start_time, s.id");
    sqlx::query_as::<_, ShowListing>(&sql)
        .bind(artist_id)
        .fetch_all(&mut *conn)
        .await
}

/// `(venue_id, start_time)` for every show, used to count upcoming shows per venue.
pub async fn venue_start_times(
    conn: &mut SqliteConnection,
) -> Result<Vec<(i64, DateTime<Utc>)>, sqlx::Error> {
    sqlx::query_as::<_, (i64, DateTime<Utc>)>("SELECT venue_id, start_time FROM shows ORDER BY id")
        .fetch_all(&mut *conn)
        .await
}

/// `(artist_id, start_time)` for every show, used to count upcoming shows per artist.
pub async fn artist_start_times(
    conn: &mut SqliteConnection,
) -> Result<Vec<(i64, DateTime<Utc>)>, sqlx::Error> {
    sqlx::query_as::<_, (i64, DateTime<Utc>)>("SELECT artist_id, start_time FROM shows ORDER BY id")
        .fetch_all(&mut *conn)
        .await
}

pub async fn count(conn: &mut SqliteConnection) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM shows")
        .fetch_one(&mut *conn)
        .await
}
