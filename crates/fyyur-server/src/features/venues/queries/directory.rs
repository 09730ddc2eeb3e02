//! Venue directory query
//!
//! Lists every venue grouped by city. Two queries: the ordered venue scan and
//! one scan of show start times for the upcoming counts.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::db;
use crate::features::shared::listing::{group_by_city, upcoming_counts, CityGroup};

#[derive(Debug, thiserror::Error)]
pub enum VenueDirectoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool))]
pub async fn handle(
    pool: SqlitePool,
    now: DateTime<Utc>,
) -> Result<Vec<CityGroup>, VenueDirectoryError> {
    let mut conn = pool.acquire().await?;
    let venues = db::venues::list_by_city(&mut conn).await?;
    let start_times = db::shows::venue_start_times(&mut conn).await?;

    let groups = group_by_city(venues, &upcoming_counts(&start_times, now));
    tracing::debug!(areas = groups.len(), "Venue directory built");
    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::{insert_show, test_pool, TestArtist, TestVenue};
    use chrono::Duration;

    #[tokio::test]
    async fn test_directory_groups_and_counts() {
        let pool = test_pool().await;
        let hop = TestVenue::new("The Musical Hop").insert(&pool).await.unwrap();
        TestVenue::new("The Dueling Pianos Bar")
            .in_city("New York", "NY")
            .insert(&pool)
            .await
            .unwrap();
        TestVenue::new("Park Square Live Music & Coffee").insert(&pool).await.unwrap();
        let artist = TestArtist::new("Guns N Petals").insert(&pool).await.unwrap();

        let now = Utc::now();
        insert_show(&pool, artist, hop, now + Duration::days(1)).await.unwrap();
        insert_show(&pool, artist, hop, now - Duration::days(1)).await.unwrap();

        let groups = handle(pool, now).await.unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!((groups[0].city.as_str(), groups[0].state.as_str()), ("New York", "NY"));
        assert_eq!(groups[1].city, "San Francisco");
        assert_eq!(groups[1].venues.len(), 2);
        assert_eq!(groups[1].venues[0].name, "The Musical Hop");
        assert_eq!(groups[1].venues[0].num_upcoming_shows, 1);
        assert_eq!(groups[1].venues[1].num_upcoming_shows, 0);
    }

    #[tokio::test]
    async fn test_empty_directory() {
        let pool = test_pool().await;
        assert!(handle(pool, Utc::now()).await.unwrap().is_empty());
    }
}
