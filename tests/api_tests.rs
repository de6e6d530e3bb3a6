use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::{TimeZone, Utc};
use serde_json::{json, Value};

use watchlist_api::{
    api::{create_router, AppState},
    db::{InMemoryCatalog, InMemoryListStore, ResultCache},
    models::{Episode, Genre, Movie, TvShow},
    services::MyListService,
};

fn test_movies() -> Vec<Movie> {
    (1..=50)
        .map(|i| Movie {
            id: format!("test-movie-{}", i),
            title: format!("Test Movie {}", i),
            description: format!("Description for test movie {}", i),
            genres: vec![Genre::Action],
            release_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            director: "Test Director".to_string(),
            actors: vec!["Actor 1".to_string(), "Actor 2".to_string()],
        })
        .collect()
}

fn test_shows() -> Vec<TvShow> {
    vec![TvShow {
        id: "test-tvshow-1".to_string(),
        title: "Test TV Show 1".to_string(),
        description: "Description for test TV show 1".to_string(),
        genres: vec![Genre::Drama],
        episodes: vec![Episode {
            episode_number: 1,
            season_number: 1,
            release_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            director: "Test Director".to_string(),
            actors: vec!["Actor 1".to_string()],
        }],
    }]
}

fn create_test_server_with_catalog() -> (TestServer, Arc<InMemoryCatalog>) {
    let catalog = Arc::new(InMemoryCatalog::with_content(test_movies(), test_shows()));
    let store = Arc::new(InMemoryListStore::new());
    let cache = ResultCache::new(1000, Duration::from_secs(60));
    let service = MyListService::new(store, catalog.clone(), cache);

    let app = create_router(AppState::new(service));
    (TestServer::new(app).unwrap(), catalog)
}

fn create_test_server() -> TestServer {
    create_test_server_with_catalog().0
}

async fn add(server: &TestServer, user: &str, content: &str, kind: &str) -> StatusCode {
    server
        .post("/mylist")
        .json(&json!({
            "userId": user,
            "contentId": content,
            "contentType": kind
        }))
        .await
        .status_code()
}

async fn list(server: &TestServer, user: &str, page: u32, limit: u32) -> Value {
    let response = server
        .get("/mylist")
        .add_query_param("userId", user)
        .add_query_param("page", page)
        .add_query_param("limit", limit)
        .await;
    response.assert_status_ok();
    response.json()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_add_movie_to_list() {
    let server = create_test_server();

    let response = server
        .post("/mylist")
        .json(&json!({
            "userId": "test-user-1",
            "contentId": "test-movie-1",
            "contentType": "movie"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Item added to your list");
    assert!(body["data"]["id"].is_string());
    assert_eq!(body["data"]["userId"], "test-user-1");
    assert_eq!(body["data"]["contentId"], "test-movie-1");
    assert_eq!(body["data"]["contentType"], "movie");
    assert!(body["data"]["createdAt"].is_string());
}

#[tokio::test]
async fn test_add_tv_show_to_list() {
    let server = create_test_server();

    let response = server
        .post("/mylist")
        .json(&json!({
            "userId": "test-user-1",
            "contentId": "test-tvshow-1",
            "contentType": "tvshow"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["data"]["contentType"], "tvshow");
}

#[tokio::test]
async fn test_add_duplicate_returns_conflict() {
    let server = create_test_server();

    assert_eq!(
        add(&server, "test-user-1", "test-movie-1", "movie").await,
        StatusCode::CREATED
    );
    assert_eq!(
        add(&server, "test-user-1", "test-movie-1", "movie").await,
        StatusCode::CONFLICT
    );
}

#[tokio::test]
async fn test_add_missing_content_returns_not_found() {
    let server = create_test_server();

    assert_eq!(
        add(&server, "test-user-1", "non-existent-movie", "movie").await,
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        add(&server, "test-user-1", "non-existent-tvshow", "tvshow").await,
        StatusCode::NOT_FOUND
    );
    // Exists, but not as a show
    assert_eq!(
        add(&server, "test-user-1", "test-movie-1", "tvshow").await,
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_add_invalid_body_returns_bad_request() {
    let server = create_test_server();

    let response = server
        .post("/mylist")
        .json(&json!({ "userId": "test-user-1" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["success"], false);

    assert_eq!(
        add(&server, "test-user-1", "test-movie-1", "invalid-type").await,
        StatusCode::BAD_REQUEST
    );

    let response = server
        .post("/mylist")
        .json(&json!({
            "userId": "test-user-1",
            "contentId": "test-movie-1",
            "contentType": "movie",
            "extra": "field"
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = server
        .post("/mylist")
        .json(&json!({
            "userId": 42,
            "contentId": "test-movie-1",
            "contentType": "movie"
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_remove_from_list() {
    let server = create_test_server();
    add(&server, "test-user-1", "test-movie-1", "movie").await;

    let response = server
        .delete("/mylist")
        .json(&json!({
            "userId": "test-user-1",
            "contentId": "test-movie-1"
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Item removed from your list");
    assert!(body.get("data").is_none());

    // Removing again is not idempotent
    let response = server
        .delete("/mylist")
        .json(&json!({
            "userId": "test-user-1",
            "contentId": "test-movie-1"
        }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_remove_invalid_body_returns_bad_request() {
    let server = create_test_server();

    let response = server
        .delete("/mylist")
        .json(&json!({ "userId": "test-user-1" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_with_default_pagination() {
    let server = create_test_server();
    for i in 1..=5 {
        add(&server, "test-user-1", &format!("test-movie-{}", i), "movie").await;
    }

    let response = server
        .get("/mylist")
        .add_query_param("userId", "test-user-1")
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 5);
    assert_eq!(body["data"]["pagination"]["page"], 1);
    assert_eq!(body["data"]["pagination"]["limit"], 20);
    assert_eq!(body["data"]["pagination"]["total"], 5);
    assert_eq!(body["data"]["pagination"]["totalPages"], 1);

    let first = &body["data"]["items"][0];
    assert!(first["id"].is_string());
    assert!(first["addedAt"].is_string());
    assert_eq!(first["contentType"], "movie");
    assert!(first["content"]["title"].is_string());
    assert!(first["content"]["description"].is_string());
}

#[tokio::test]
async fn test_list_pagination() {
    let server = create_test_server();
    for i in 1..=5 {
        add(&server, "u2", &format!("test-movie-{}", i), "movie").await;
    }

    let body = list(&server, "u2", 1, 2).await;
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 2);
    assert_eq!(body["data"]["pagination"]["limit"], 2);
    assert_eq!(body["data"]["pagination"]["total"], 5);
    assert_eq!(body["data"]["pagination"]["totalPages"], 3);

    let body = list(&server, "u2", 2, 2).await;
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 2);
    assert_eq!(body["data"]["pagination"]["page"], 2);

    let body = list(&server, "u2", 3, 2).await;
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_list_is_newest_first_across_pages() {
    let server = create_test_server();
    for i in 1..=4 {
        add(&server, "u3", &format!("test-movie-{}", i), "movie").await;
    }

    let mut seen = Vec::new();
    for page in 1..=2 {
        let body = list(&server, "u3", page, 2).await;
        for item in body["data"]["items"].as_array().unwrap() {
            seen.push(item["contentId"].as_str().unwrap().to_string());
        }
    }

    assert_eq!(
        seen,
        vec!["test-movie-4", "test-movie-3", "test-movie-2", "test-movie-1"]
    );
}

#[tokio::test]
async fn test_list_empty_for_new_user() {
    let server = create_test_server();

    let body = list(&server, "test-user-2", 1, 20).await;
    assert!(body["data"]["items"].as_array().unwrap().is_empty());
    assert_eq!(body["data"]["pagination"]["total"], 0);
    assert_eq!(body["data"]["pagination"]["totalPages"], 0);
}

#[tokio::test]
async fn test_list_validates_query() {
    let server = create_test_server();

    server
        .get("/mylist")
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    server
        .get("/mylist")
        .add_query_param("userId", "test-user-1")
        .add_query_param("page", 0)
        .add_query_param("limit", -1)
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    server
        .get("/mylist")
        .add_query_param("userId", "test-user-1")
        .add_query_param("page", "two")
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    server
        .get("/mylist")
        .add_query_param("userId", "")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_cache_invalidated_on_add() {
    let server = create_test_server();
    add(&server, "test-user-1", "test-movie-2", "movie").await;

    let before = list(&server, "test-user-1", 1, 20).await;
    let initial = before["data"]["items"].as_array().unwrap().len();

    add(&server, "test-user-1", "test-movie-1", "movie").await;

    let after = list(&server, "test-user-1", 1, 20).await;
    assert_eq!(after["data"]["items"].as_array().unwrap().len(), initial + 1);
}

#[tokio::test]
async fn test_cache_invalidated_on_remove() {
    let server = create_test_server();
    add(&server, "test-user-1", "test-movie-1", "movie").await;
    add(&server, "test-user-1", "test-movie-2", "movie").await;

    // Populate two differently-shaped pages
    let before = list(&server, "test-user-1", 1, 20).await;
    list(&server, "test-user-1", 1, 1).await;
    let initial = before["data"]["items"].as_array().unwrap().len();

    server
        .delete("/mylist")
        .json(&json!({
            "userId": "test-user-1",
            "contentId": "test-movie-1"
        }))
        .await
        .assert_status_ok();

    let after = list(&server, "test-user-1", 1, 20).await;
    assert_eq!(after["data"]["items"].as_array().unwrap().len(), initial - 1);

    let small = list(&server, "test-user-1", 1, 1).await;
    assert_eq!(small["data"]["pagination"]["total"], 1);
    assert_eq!(small["data"]["items"][0]["contentId"], "test-movie-2");
}

#[tokio::test]
async fn test_listed_item_without_catalog_entry_has_null_content() {
    let (server, catalog) = create_test_server_with_catalog();
    add(&server, "test-user-1", "test-movie-7", "movie").await;
    catalog.remove("test-movie-7").await;

    let body = list(&server, "test-user-1", 1, 20).await;
    let items = body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["contentId"], "test-movie-7");
    assert!(items[0]["content"].is_null());
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let server = create_test_server();

    let response = server
        .get("/health")
        .add_header(
            axum::http::HeaderName::from_static("x-request-id"),
            axum::http::HeaderValue::from_static("trace-me-123"),
        )
        .await;

    assert_eq!(response.header("x-request-id"), "trace-me-123");
}
