//! Test helpers for Fyyur server integration tests
//!
//! Every test gets its own in-memory database with the migrations applied,
//! and drives the full router through `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, Response, StatusCode},
    Router,
};
use fyyur_server::{api, db};
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

/// Fresh in-memory database with the schema applied
pub async fn setup_test_db() -> SqlitePool {
    let pool = db::create_pool(&db::DbConfig::in_memory())
        .await
        .expect("Failed to open in-memory database");
    db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    pool
}

pub async fn setup_test_app(pool: SqlitePool) -> Router {
    api::create_router(pool)
}

/// Percent-encode pairs as an `application/x-www-form-urlencoded` body
pub fn encode_form(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn delete(app: &Router, uri: &str) -> Response<Body> {
    send(
        app,
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

pub async fn post_form(app: &Router, uri: &str, pairs: &[(&str, &str)]) -> Response<Body> {
    send(
        app,
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(encode_form(pairs)))
            .unwrap(),
    )
    .await
}

async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Assert the status and return the JSON body
pub async fn expect_json(response: Response<Body>, status: StatusCode) -> Value {
    assert_eq!(response.status(), status);
    body_json(response).await
}

/// Form pairs for a valid venue; genres as repeated fields
pub fn venue_form<'a>(name: &'a str, city: &'a str, state: &'a str) -> Vec<(&'a str, &'a str)> {
    vec![
        ("name", name),
        ("city", city),
        ("state", state),
        ("address", "1015 Folsom Street"),
        ("phone", "123-123-1234"),
        ("genres", "Jazz"),
        ("genres", "Reggae"),
        ("seeking_talent", "Yes"),
        ("seeking_description", "We are on the lookout for a local artist."),
    ]
}

/// Form pairs for a valid artist
pub fn artist_form(name: &str) -> Vec<(&str, &str)> {
    vec![
        ("name", name),
        ("city", "San Francisco"),
        ("state", "CA"),
        ("phone", "326-123-5000"),
        ("genres", "Rock n Roll"),
        ("image_link", "https://images.example.com/artist.jpg"),
        ("seeking_venue", "No"),
    ]
}

/// Create a venue through the API and return its id
pub async fn create_venue(app: &Router, name: &str, city: &str, state: &str) -> i64 {
    let json = expect_json(
        post_form(app, "/venues/create", &venue_form(name, city, state)).await,
        StatusCode::CREATED,
    )
    .await;
    json["data"]["id"].as_i64().unwrap()
}

/// Create an artist through the API and return its id
pub async fn create_artist(app: &Router, name: &str) -> i64 {
    let json = expect_json(
        post_form(app, "/artists/create", &artist_form(name)).await,
        StatusCode::CREATED,
    )
    .await;
    json["data"]["id"].as_i64().unwrap()
}

pub async fn create_show(
    app: &Router,
    artist_id: i64,
    venue_id: i64,
    start_time: &str,
) -> Response<Body> {
    let artist_id = artist_id.to_string();
    let venue_id = venue_id.to_string();
    post_form(
        app,
        "/shows/create",
        &[
            ("artist_id", artist_id.as_str()),
            ("venue_id", venue_id.as_str()),
            ("start_time", start_time),
        ],
    )
    .await
}
