//! Venue persistence

use sqlx::{FromRow, SqliteConnection};

use super::{genres, name_contains};
use crate::models::{Venue, VenueFields, VenueSummary};

#[derive(Debug, FromRow)]
struct VenueRow {
    id: i64,
    name: String,
    city: String,
    state: String,
    address: String,
    phone: Option<String>,
    website: Option<String>,
    image_link: Option<String>,
    facebook_link: Option<String>,
    seeking_talent: bool,
    seeking_description: Option<String>,
}

impl VenueRow {
    fn with_genres(self, genres: Vec<String>) -> Venue {
        Venue {
            id: self.id,
            name: self.name,
            city: self.city,
            state: self.state,
            address: self.address,
            phone: self.phone,
            website: self.website,
            image_link: self.image_link,
            facebook_link: self.facebook_link,
            genres,
            seeking_talent: self.seeking_talent,
            seeking_description: self.seeking_description,
        }
    }
}

/// Insert a venue and its genres, returning the new id.
///
/// Writes two tables; call inside a transaction.
pub async fn insert(conn: &mut SqliteConnection, fields: &VenueFields) -> Result<i64, sqlx::Error> {
    let id = sqlx::query(
        r#"
        INSERT INTO venues (name, city, state, address, phone, website, image_link,
                            facebook_link, seeking_talent, seeking_description)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&fields.name)
    .bind(&fields.city)
    .bind(&fields.state)
    .bind(&fields.address)
    .bind(&fields.phone)
    .bind(&fields.website)
    .bind(&fields.image_link)
    .bind(&fields.facebook_link)
    .bind(fields.seeking_talent)
    .bind(&fields.seeking_description)
    .execute(&mut *conn)
    .await?
    .last_insert_rowid();

    genres::replace_for_venue(conn, id, &fields.genres).await?;

    Ok(id)
}

/// Overwrite every attribute of a venue. Returns `false` when no venue has `id`.
///
/// Writes two tables; call inside a transaction.
pub async fn update(
    conn: &mut SqliteConnection,
    id: i64,
    fields: &VenueFields,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE venues
        SET name = ?, city = ?, state = ?, address = ?, phone = ?, website = ?,
            image_link = ?, facebook_link = ?, seeking_talent = ?, seeking_description = ?
        WHERE id = ?
        "#,
    )
    .bind(&fields.name)
    .bind(&fields.city)
    .bind(&fields.state)
    .bind(&fields.address)
    .bind(&fields.phone)
    .bind(&fields.website)
    .bind(&fields.image_link)
    .bind(&fields.facebook_link)
    .bind(fields.seeking_talent)
    .bind(&fields.seeking_description)
    .bind(id)
    .execute(&mut *conn)
    .await?;

    if result.rows_affected() == 0 {
        return Ok(false);
    }

    genres::replace_for_venue(conn, id, &fields.genres).await?;
    Ok(true)
}

/// Delete a venue. Its shows and genres go with it (`ON DELETE CASCADE`).
/// Returns `false` when no venue has `id`.
pub async fn delete(conn: &mut SqliteConnection, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM venues WHERE id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Fetch one venue with its genres (two queries). `None` when absent.
pub async fn find_by_id(conn: &mut SqliteConnection, id: i64) -> Result<Option<Venue>, sqlx::Error> {
    let row = sqlx::query_as::<_, VenueRow>(
        r#"
        SELECT id, name, city, state, address, phone, website, image_link,
               facebook_link, seeking_talent, seeking_description
        FROM venues
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;

    match row {
        Some(row) => {
            let genres = genres::list_for_venue(conn, id).await?;
            Ok(Some(row.with_genres(genres)))
        },
        None => Ok(None),
    }
}

pub async fn exists(conn: &mut SqliteConnection, id: i64) -> Result<bool, sqlx::Error> {
    let found: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM venues WHERE id = ?")
        .bind(id)
        .fetch_one(&mut *conn)
        .await?;
    Ok(found > 0)
}

/// All venues ordered by city, then state, then id.
pub async fn list_by_city(conn: &mut SqliteConnection) -> Result<Vec<VenueSummary>, sqlx::Error> {
    sqlx::query_as::<_, VenueSummary>(
        "SELECT id, name, city, state FROM venues ORDER BY city, state, id",
    )
    .fetch_all(&mut *conn)
    .await
}

/// Venues whose name contains `term`, ignoring case. An empty term matches all.
pub async fn search_by_name(
    conn: &mut SqliteConnection,
    term: &str,
) -> Result<Vec<VenueSummary>, sqlx::Error> {
    let rows = sqlx::query_as::<_, VenueSummary>("SELECT id, name, city, state FROM venues ORDER BY id")
        .fetch_all(&mut *conn)
        .await?;

    Ok(rows.into_iter().filter(|row| name_contains(&row.name, term)).collect())
}

pub async fn count(conn: &mut SqliteConnection) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM venues")
        .fetch_one(&mut *conn)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::{test_pool, TestVenue};

    #[tokio::test]
    async fn test_insert_and_find_round_trips_genres() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();

        let fields = TestVenue::new("The Fillmore")
            .with_genres(&["Rock", "Jazz", "Folk, Americana"])
            .fields();
        let id = insert(&mut conn, &fields).await.unwrap();

        let venue = find_by_id(&mut conn, id).await.unwrap().unwrap();
        assert_eq!(venue.name, "The Fillmore");
        assert_eq!(venue.genres, vec!["Rock", "Jazz", "Folk, Americana"]);
        assert!(!venue.seeking_talent);
    }

    #[tokio::test]
    async fn test_find_missing_is_none() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        assert!(find_by_id(&mut conn, 42).await.unwrap().is_none());
        assert!(!exists(&mut conn, 42).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_replaces_genres() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        let id = insert(&mut conn, &TestVenue::new("Old").with_genres(&["Jazz"]).fields())
            .await
            .unwrap();

        let fields = TestVenue::new("New").with_genres(&["Blues", "Soul"]).fields();
        assert!(update(&mut conn, id, &fields).await.unwrap());

        let venue = find_by_id(&mut conn, id).await.unwrap().unwrap();
        assert_eq!(venue.name, "New");
        assert_eq!(venue.genres, vec!["Blues", "Soul"]);

        assert!(!update(&mut conn, id + 1, &fields).await.unwrap());
    }

    #[tokio::test]
    async fn test_list_by_city_orders_by_city_then_state() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        for (name, city, state) in [
            ("B", "San Francisco", "CA"),
            ("A", "New York", "NY"),
            ("C", "San Francisco", "CA"),
        ] {
            let fields = TestVenue::new(name).in_city(city, state).fields();
            insert(&mut conn, &fields).await.unwrap();
        }

        let names: Vec<String> = list_by_city(&mut conn)
            .await
            .unwrap()
            .into_iter()
            .map(|v| v.name)
            .collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn test_search_treats_wildcards_literally() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        insert(&mut conn, &TestVenue::new("100% Live").fields()).await.unwrap();
        insert(&mut conn, &TestVenue::new("1000 Live").fields()).await.unwrap();

        let hits = search_by_name(&mut conn, "100%").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "100% Live");

        assert_eq!(search_by_name(&mut conn, "").await.unwrap().len(), 2);
        assert_eq!(count(&mut conn).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_search_folds_non_ascii_capitals() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        insert(&mut conn, &TestVenue::new("ÉCOLE Jazz").fields()).await.unwrap();
        insert(&mut conn, &TestVenue::new("Café Österreich").fields()).await.unwrap();

        for (term, expected) in [
            ("ÉCOLE", "ÉCOLE Jazz"),
            ("école", "ÉCOLE Jazz"),
            ("Österreich", "Café Österreich"),
            ("CAFÉ", "Café Österreich"),
        ] {
            let hits = search_by_name(&mut conn, term).await.unwrap();
            assert_eq!(hits.len(), 1, "term {:?}", term);
            assert_eq!(hits[0].name, expected);
        }
    }

    #[tokio::test]
    async fn test_delete_reports_missing() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        let id = insert(&mut conn, &TestVenue::new("Gone").fields()).await.unwrap();

        assert!(delete(&mut conn, id).await.unwrap());
        assert!(!delete(&mut conn, id).await.unwrap());
    }
}
