//! Test helpers and fixtures for database tests
//!
//! # Examples
//!
//! ```rust,ignore
//! use fyyur_server::features::shared::test_helpers::*;
//!
//! #[tokio::test]
//! async fn test_something() {
//!     let pool = test_pool().await;
//!     let venue_id = TestVenue::new("The Musical Hop")
//!         .in_city("San Francisco", "CA")
//!         .insert(&pool)
//!         .await
//!         .unwrap();
//!     let artist_id = TestArtist::new("Guns N Petals").insert(&pool).await.unwrap();
//!     insert_show(&pool, artist_id, venue_id, Utc::now()).await.unwrap();
//! }
//! ```

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::db::{self, DbConfig};
use crate::models::{ArtistFields, NewShow, VenueFields};

/// A migrated, private in-memory database
pub async fn test_pool() -> SqlitePool {
    let pool = db::create_pool(&DbConfig::in_memory())
        .await
        .expect("in-memory pool");
    db::run_migrations(&pool).await.expect("migrations");
    pool
}

/// Builder for creating test venues
#[derive(Debug, Clone)]
pub struct TestVenue {
    fields: VenueFields,
}

impl TestVenue {
    /// A valid venue in San Francisco, CA playing Jazz
    pub fn new(name: &str) -> Self {
        Self {
            fields: VenueFields {
                name: name.to_string(),
                city: "San Francisco".to_string(),
                state: "CA".to_string(),
                address: "1015 Folsom Street".to_string(),
                phone: None,
                website: None,
                image_link: None,
                facebook_link: None,
                genres: vec!["Jazz".to_string()],
                seeking_talent: false,
                seeking_description: None,
            },
        }
    }

    pub fn in_city(mut self, city: &str, state: &str) -> Self {
        self.fields.city = city.to_string();
        self.fields.state = state.to_string();
        self
    }

    pub fn with_genres(mut self, genres: &[&str]) -> Self {
        self.fields.genres = genres.iter().map(|g| g.to_string()).collect();
        self
    }

    /// Mark the venue as looking for talent
    pub fn seeking(mut self, description: &str) -> Self {
        self.fields.seeking_talent = true;
        self.fields.seeking_description = Some(description.to_string());
        self
    }

    pub fn fields(self) -> VenueFields {
        self.fields
    }

    /// Insert the venue, returning its id
    pub async fn insert(self, pool: &SqlitePool) -> sqlx::Result<i64> {
        let mut tx = pool.begin().await?;
        let id = db::venues::insert(&mut *tx, &self.fields).await?;
        tx.commit().await?;
        Ok(id)
    }
}

/// Builder for creating test artists
#[derive(Debug, Clone)]
pub struct TestArtist {
    fields: ArtistFields,
}

impl TestArtist {
    /// A valid artist in San Francisco, CA playing Rock n Roll
    pub fn new(name: &str) -> Self {
        Self {
            fields: ArtistFields {
                name: name.to_string(),
                city: "San Francisco".to_string(),
                state: "CA".to_string(),
                phone: None,
                website: None,
                image_link: None,
                facebook_link: None,
                genres: vec!["Rock n Roll".to_string()],
                seeking_venue: false,
                seeking_description: None,
            },
        }
    }

    pub fn with_genres(mut self, genres: &[&str]) -> Self {
        self.fields.genres = genres.iter().map(|g| g.to_string()).collect();
        self
    }

    pub fn with_image(mut self, image_link: &str) -> Self {
        self.fields.image_link = Some(image_link.to_string());
        self
    }

    /// Mark the artist as looking for venues
    pub fn seeking(mut self, description: &str) -> Self {
        self.fields.seeking_venue = true;
        self.fields.seeking_description = Some(description.to_string());
        self
    }

    pub fn fields(self) -> ArtistFields {
        self.fields
    }

    /// Insert the artist, returning its id
    pub async fn insert(self, pool: &SqlitePool) -> sqlx::Result<i64> {
        let mut tx = pool.begin().await?;
        let id = db::artists::insert(&mut *tx, &self.fields).await?;
        tx.commit().await?;
        Ok(id)
    }
}

/// Insert a show, copying the artist's current image link like the create handler does
pub async fn insert_show(
    pool: &SqlitePool,
    artist_id: i64,
    venue_id: i64,
    start_time: DateTime<Utc>,
) -> sqlx::Result<i64> {
    let mut conn = pool.acquire().await?;
    let image_link = db::artists::find_image_link(&mut *conn, artist_id)
        .await?
        .flatten();
    let show = NewShow {
        artist_id,
        venue_id,
        start_time,
    };
    db::shows::insert(&mut *conn, &show, image_link.as_deref()).await
}
