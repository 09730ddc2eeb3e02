//! Artist profile query
//!
//! Three queries: the artist row, its genres, and its shows joined with venue
//! names.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::db;
use crate::features::shared::datetime::DateFormat;
use crate::features::shared::listing::{partition_shows, PartitionedShows};
use crate::models::Artist;

#[derive(Debug, Clone)]
pub struct GetArtistQuery {
    pub id: i64,
    pub date_format: DateFormat,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArtistProfile {
    #[serde(flatten)]
    pub artist: Artist,
    #[serde(flatten)]
    pub shows: PartitionedShows,
}

#[derive(Debug, thiserror::Error)]
pub enum GetArtistError {
    #[error("Artist with id {0} not found")]
    NotFound(i64),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool), fields(artist_id = query.id))]
pub async fn handle(
    pool: SqlitePool,
    query: GetArtistQuery,
    now: DateTime<Utc>,
) -> Result<ArtistProfile, GetArtistError> {
    let mut conn = pool.acquire().await?;

    let artist = db::artists::find_by_id(&mut conn, query.id)
        .await?
        .ok_or(GetArtistError::NotFound(query.id))?;
    let shows = db::shows::list_for_artist(&mut conn, query.id).await?;

    Ok(ArtistProfile {
        artist,
        shows: partition_shows(shows, now, query.date_format),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::{insert_show, test_pool, TestArtist, TestVenue};
    use chrono::Duration;

    #[tokio::test]
    async fn test_profile_partitions_own_shows() {
        let pool = test_pool().await;
        let venue = TestVenue::new("Park Square Live Music & Coffee").insert(&pool).await.unwrap();
        let sax = TestArtist::new("The Wild Sax Band").insert(&pool).await.unwrap();
        let other = TestArtist::new("Matt Quevedo").insert(&pool).await.unwrap();

        let now = Utc::now();
        for days in [3, 10, 17] {
            insert_show(&pool, sax, venue, now + Duration::days(days)).await.unwrap();
        }
        insert_show(&pool, other, venue, now - Duration::days(1)).await.unwrap();

        let profile = handle(
            pool,
            GetArtistQuery {
                id: sax,
                date_format: DateFormat::Medium,
            },
            now,
        )
        .await
        .unwrap();

        assert_eq!(profile.artist.name, "The Wild Sax Band");
        assert_eq!(profile.shows.past_shows_count, 0);
        assert_eq!(profile.shows.upcoming_shows_count, 3);
        assert!(profile
            .shows
            .upcoming_shows
            .iter()
            .all(|s| s.venue_name == "Park Square Live Music & Coffee" && s.artist_id == sax));
    }

    #[tokio::test]
    async fn test_missing_artist() {
        let pool = test_pool().await;
        let query = GetArtistQuery {
            id: 1,
            date_format: DateFormat::Full,
        };
        assert!(matches!(
            handle(pool, query, Utc::now()).await,
            Err(GetArtistError::NotFound(1))
        ));
    }
}
