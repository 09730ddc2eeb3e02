//! List shows query

use sqlx::SqlitePool;

use crate::db;
use crate::features::shared::datetime::DateFormat;
use crate::features::shared::listing::ShowDisplay;

#[derive(Debug, thiserror::Error)]
pub enum ListShowsError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Every show, earliest first, as display records
#[tracing::instrument(skip(pool))]
pub async fn handle(pool: SqlitePool, format: DateFormat) -> Result<Vec<ShowDisplay>, ListShowsError> {
    let mut conn = pool.acquire().await?;
    let shows = db::shows::list_all(&mut conn).await?;

    Ok(shows
        .into_iter()
        .map(|show| ShowDisplay::from_listing(show, format))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::{insert_show, test_pool, TestArtist, TestVenue};
    use chrono::{TimeZone, Utc};

    #[tokio::test]
    async fn test_lists_display_records() {
        let pool = test_pool().await;
        let venue = TestVenue::new("The Musical Hop").insert(&pool).await.unwrap();
        let artist = TestArtist::new("Guns N Petals").insert(&pool).await.unwrap();
        insert_show(&pool, artist, venue, Utc.with_ymd_and_hms(2019, 5, 21, 21, 30, 0).unwrap())
            .await
            .unwrap();

        let shows = handle(pool, DateFormat::Full).await.unwrap();
        assert_eq!(shows.len(), 1);
        assert_eq!(shows[0].venue_name, "The Musical Hop");
        assert_eq!(shows[0].artist_name, "Guns N Petals");
        assert_eq!(shows[0].start_time, "Tuesday May, 21, 2019 at 9:30PM");
    }

    #[tokio::test]
    async fn test_empty() {
        let pool = test_pool().await;
        assert!(handle(pool, DateFormat::default()).await.unwrap().is_empty());
    }
}
