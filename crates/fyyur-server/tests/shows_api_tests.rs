//! Integration tests for show endpoints

use axum::http::StatusCode;
use serde_json::json;

mod helpers;
use helpers::*;

#[tokio::test]
async fn test_create_and_list_shows() {
    let app = setup_test_app(setup_test_db().await).await;
    let venue = create_venue(&app, "The Musical Hop", "San Francisco", "CA").await;
    let artist = create_artist(&app, "Guns N Petals").await;

    let json = expect_json(
        create_show(&app, artist, venue, "2019-05-21 21:30:00").await,
        StatusCode::CREATED,
    )
    .await;
    assert_eq!(json["notice"], "Show was successfully listed!");
    assert_eq!(json["data"]["artist_id"], artist);

    let json = expect_json(get(&app, "/shows").await, StatusCode::OK).await;
    assert_eq!(
        json["data"],
        json!([{
            "venue_id": venue,
            "venue_name": "The Musical Hop",
            "artist_id": artist,
            "artist_name": "Guns N Petals",
            "artist_image_link": "https://images.example.com/artist.jpg",
            "start_time": "Tue 05, 21, 2019 9:30PM",
        }])
    );
}

#[tokio::test]
async fn test_shows_listed_earliest_first() {
    let app = setup_test_app(setup_test_db().await).await;
    let venue = create_venue(&app, "The Musical Hop", "San Francisco", "CA").await;
    let artist = create_artist(&app, "The Wild Sax Band").await;

    create_show(&app, artist, venue, "2035-04-15T20:00:00").await;
    create_show(&app, artist, venue, "2035-04-01T20:00:00").await;

    let json = expect_json(get(&app, "/shows?date_format=full").await, StatusCode::OK).await;
    assert_eq!(json["data"][0]["start_time"], "Sunday April, 1, 2035 at 8:00PM");
    assert_eq!(json["data"][1]["start_time"], "Sunday April, 15, 2035 at 8:00PM");
}

#[tokio::test]
async fn test_missing_artist_is_rejected() {
    let app = setup_test_app(setup_test_db().await).await;
    let venue = create_venue(&app, "The Musical Hop", "San Francisco", "CA").await;

    let json = expect_json(
        create_show(&app, 404, venue, "2035-04-01T20:00:00").await,
        StatusCode::BAD_REQUEST,
    )
    .await;
    assert_eq!(json["success"], false);
    assert_eq!(json["notice"], "An error occurred. Show could not be listed.");

    let json = expect_json(get(&app, "/shows").await, StatusCode::OK).await;
    assert_eq!(json["data"], json!([]));
}

#[tokio::test]
async fn test_missing_venue_is_rejected() {
    let app = setup_test_app(setup_test_db().await).await;
    let artist = create_artist(&app, "Guns N Petals").await;

    let response = create_show(&app, artist, 404, "2035-04-01T20:00:00").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_invalid_show_form() {
    let app = setup_test_app(setup_test_db().await).await;

    let json = expect_json(
        post_form(&app, "/shows/create", &[("artist_id", "one"), ("start_time", "tomorrow")]).await,
        StatusCode::UNPROCESSABLE_ENTITY,
    )
    .await;
    let details = &json["error"]["details"];
    assert!(details["artist_id"].is_array());
    assert!(details["venue_id"].is_array());
    assert!(details["start_time"].is_array());
}

#[tokio::test]
async fn test_create_form_defaults_start_time() {
    let app = setup_test_app(setup_test_db().await).await;

    let json = expect_json(get(&app, "/shows/create").await, StatusCode::OK).await;
    let start_time = json["data"]["values"]["start_time"].as_str().unwrap();
    assert_eq!(start_time.len(), "2024-01-01 00:00:00".len());
    assert_eq!(json["data"]["fields"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_image_snapshot_survives_artist_edit() {
    let app = setup_test_app(setup_test_db().await).await;
    let venue = create_venue(&app, "The Musical Hop", "San Francisco", "CA").await;
    let artist = create_artist(&app, "Guns N Petals").await;
    create_show(&app, artist, venue, "2035-04-01T20:00:00").await;

    let mut form = artist_form("Guns N Petals");
    form.retain(|(k, _)| *k != "image_link");
    form.push(("image_link", "https://images.example.com/new.jpg"));
    post_form(&app, &format!("/artists/{}/edit", artist), &form).await;

    let json = expect_json(get(&app, "/shows").await, StatusCode::OK).await;
    assert_eq!(
        json["data"][0]["artist_image_link"],
        "https://images.example.com/artist.jpg"
    );
}
