//! Artist persistence

use sqlx::{FromRow, SqliteConnection};

use super::{genres, name_contains};
use crate::models::{Artist, ArtistFields, ArtistSummary};

#[derive(Debug, FromRow)]
struct ArtistRow {
    id: i64,
    name: String,
    city: String,
    state: String,
    phone: Option<String>,
    website: Option<String>,
    image_link: Option<String>,
    facebook_link: Option<String>,
    seeking_venue: bool,
    seeking_description: Option<String>,
}

impl ArtistRow {
    fn with_genres(self, genres: Vec<String>) -> Artist {
        Artist {
            id: self.id,
            name: self.name,
            city: self.city,
            state: self.state,
            phone: self.phone,
            website: self.website,
            image_link: self.image_link,
            facebook_link: self.facebook_link,
            genres,
            seeking_venue: self.seeking_venue,
            seeking_description: self.seeking_description,
        }
    }
}

/// Insert an artist and its genres, returning the new id.
///
/// Writes two tables; call inside a transaction.
pub async fn insert(conn: &mut SqliteConnection, fields: &ArtistFields) -> Result<i64, sqlx::Error> {
    let id = sqlx::query(
        r#"
        INSERT INTO artists (name, city, state, phone, website, image_link,
                             facebook_link, seeking_venue, seeking_description)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&fields.name)
    .bind(&fields.city)
    .bind(&fields.state)
    .bind(&fields.phone)
    .bind(&fields.website)
    .bind(&fields.image_link)
    .bind(&fields.facebook_link)
    .bind(fields.seeking_venue)
    .bind(&fields.seeking_description)
    .execute(&mut *conn)
    .await?
    .last_insert_rowid();

    genres::replace_for_artist(conn, id, &fields.genres).await?;

    Ok(id)
}

/// Overwrite every attribute of an artist. Returns `false` when no artist has `id`.
///
/// Show rows keep the image link copied when they were created.
pub async fn update(
    conn: &mut SqliteConnection,
    id: i64,
    fields: &ArtistFields,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE artists
        SET name = ?, city = ?, state = ?, phone = ?, website = ?, image_link = ?,
            facebook_link = ?, seeking_venue = ?, seeking_description = ?
        WHERE id = ?
        "#,
    )
    .bind(&fields.name)
    .bind(&fields.city)
    .bind(&fields.state)
    .bind(&fields.phone)
    .bind(&fields.website)
    .bind(&fields.image_link)
    .bind(&fields.facebook_link)
    .bind(fields.seeking_venue)
    .bind(&fields.seeking_description)
    .bind(id)
    .execute(&mut *conn)
    .await?;

    if result.rows_affected() == 0 {
        return Ok(false);
    }

    genres::replace_for_artist(conn, id, &fields.genres).await?;
    Ok(true)
}

/// Fetch one artist with its genres (two queries). `None` when absent.
pub async fn find_by_id(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<Artist>, sqlx::Error> {
    let row = sqlx::query_as::<_, ArtistRow>(
        r#"
        SELECT id, name, city, state, phone, website, image_link,
               facebook_link, seeking_venue, seeking_description
        FROM artists
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;

    match row {
        Some(row) => {
            let genres = genres::list_for_artist(conn, id).await?;
            Ok(Some(row.with_genres(genres)))
        },
        None => Ok(None),
    }
}

/// The artist's current image link, or `None` when the artist does not exist.
///
/// The outer option is existence; the inner one is the nullable column.
pub async fn find_image_link(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<Option<String>>, sqlx::Error> {
    sqlx::query_scalar("SELECT image_link FROM artists WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
}

/// All artists, in creation order.
pub async fn list(conn: &mut SqliteConnection) -> Result<Vec<ArtistSummary>, sqlx::Error> {
    sqlx::query_as::<_, ArtistSummary>("SELECT id, name FROM artists ORDER BY id")
        .fetch_all(&mut *conn)
        .await
}

/// Artists whose name contains `term`, ignoring case. An empty term matches all.
pub async fn search_by_name(
    conn: &mut SqliteConnection,
    term: &str,
) -> Result<Vec<ArtistSummary>, sqlx::Error> {
    let rows = sqlx::query_as::<_, ArtistSummary>("SELECT id, name FROM artists ORDER BY id")
        .fetch_all(&mut *conn)
        .await?;

    Ok(rows.into_iter().filter(|row| name_contains(&row.name, term)).collect())
}

pub async fn count(conn: &mut SqliteConnection) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM artists")
        .fetch_one(&mut *conn)
        .await
}
