//! End-to-end tests of the HTTP API against mocked upstream providers

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::{Duration, Local};
use searchdeck::config::{ProviderConfig, Settings};
use searchdeck::network::HttpClient;
use searchdeck::providers::ProviderLoader;
use searchdeck::web::{create_router, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn keyed(server: &MockServer, route: &str) -> ProviderConfig {
    ProviderConfig {
        base_url: Some(format!("{}{}", server.uri(), route)),
        api_key: Some("test-key".to_string()),
        ..Default::default()
    }
}

fn settings(server: &MockServer) -> Settings {
    let mut settings = Settings::default();
    settings.providers.serpapi = keyed(server, "/search.json");
    settings.providers.serpapi_maps = keyed(server, "/search.json");
    settings.providers.serpapi_flights = keyed(server, "/search.json");
    settings.providers.alphavantage = keyed(server, "/query");
    settings.providers.openlibrary = ProviderConfig {
        base_url: Some(server.uri()),
        ..Default::default()
    };
    settings
}

fn app(settings: Settings) -> Router {
    let client = HttpClient::with_settings(&settings.outgoing).unwrap();
    let registry = ProviderLoader::load(&settings).unwrap();
    create_router(AppState::new(settings, registry, client).unwrap())
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn web_search_is_normalized_and_paginated() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search.json"))
        .and(query_param("engine", "google"))
        .and(query_param("q", "rust"))
        .and(query_param("start", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "search_metadata": { "total_time_taken": 0.87 },
            "search_information": { "total_results": 35 },
            "organic_results": [
                { "title": "Rust", "link": "https://www.rust-lang.org/", "snippet": "Fast." },
                { "title": "Rust Book", "link": "https://doc.rust-lang.org/book/" }
            ]
        })))
        .mount(&server)
        .await;

    let (status, body) = get(app(settings(&server)), "/api/search?q=rust&page=2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["search_type"], "web");
    assert_eq!(body["results"][0]["position"], 11);
    assert_eq!(body["results"][1]["position"], 12);
    assert_eq!(body["results"][0]["snippet"], "Fast.");
    let meta = &body["search_metadata"];
    assert_eq!(meta["total_results"], 35);
    assert_eq!(meta["total_pages"], 4);
    assert_eq!(meta["current_page"], 2);
    assert_eq!(meta["has_next_page"], true);
    assert_eq!(meta["has_prev_page"], true);
    assert_eq!(meta["time_taken_displayed"], 0.87);
}

#[tokio::test]
async fn books_come_from_open_library() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search.json"))
        .and(query_param("q", "dune"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "numFound": 3,
            "docs": [{
                "key": "/works/OL893415W",
                "title": "Dune",
                "author_name": ["Frank Herbert"],
                "cover_i": 11481354
            }]
        })))
        .mount(&server)
        .await;

    let (status, body) = get(app(settings(&server)), "/api/search?q=dune&type=books").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["search_type"], "books");
    assert_eq!(body["results"][0]["book"]["authors"][0], "Frank Herbert");
    assert_eq!(body["search_metadata"]["total_pages"], 1);
}

#[tokio::test]
async fn finance_quote() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/query"))
        .and(query_param("function", "GLOBAL_QUOTE"))
        .and(query_param("symbol", "AAPL"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Global Quote": {
                "01. symbol": "AAPL",
                "05. price": "189.8400",
                "09. change": "-1.2100",
                "10. change percent": "-0.6334%"
            }
        })))
        .mount(&server)
        .await;

    let (status, body) = get(app(settings(&server)), "/api/search?q=%24aapl&type=finance").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"][0]["quote"]["symbol"], "AAPL");
    assert_eq!(body["results"][0]["quote"]["change"], -1.21);
}

#[tokio::test]
async fn flights_resolve_city_names() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search.json"))
        .and(query_param("engine", "google_flights"))
        .and(query_param("departure_id", "JFK"))
        .and(query_param("arrival_id", "LAX"))
        .and(query_param("type", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "best_flights": [{
                "flights": [{
                    "departure_airport": { "id": "JFK", "time": "2030-01-01 08:00" },
                    "arrival_airport": { "id": "LAX", "time": "2030-01-01 11:30" },
                    "duration": 390,
                    "airline": "Delta"
                }],
                "total_duration": 390,
                "price": 259
            }]
        })))
        .mount(&server)
        .await;

    let outbound = (Local::now().date_naive() + Duration::days(30)).format("%Y-%m-%d");
    let uri = format!(
        "/api/search?q=flights&type=flights&departure_id=JFK&arrival_id=Los%20Angeles&outbound_date={}&flight_type=one_way",
        outbound
    );
    let (status, body) = get(app(settings(&server)), &uri).await;

    assert_eq!(status, StatusCode::OK, "{}", body);
    assert_eq!(body["results"][0]["title"], "Delta: JFK → LAX");
    assert_eq!(body["results"][0]["flight"]["best"], true);
}

#[tokio::test]
async fn invalid_parameters_are_400() {
    let server = MockServer::start().await;
    let app = app(settings(&server));

    for uri in [
        "/api/search",
        "/api/search?q=%20%20",
        "/api/search?q=rust&type=podcasts",
        "/api/search?q=rust&page=zero",
        "/api/search?q=rust&page=11",
        "/api/search?q=coffee&type=maps&lat=95&lng=0",
        "/api/search?q=trip&type=flights&departure_id=JFK",
        "/api/search?q=a&q=b",
    ] {
        let (status, body) = get(app.clone(), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert!(body["error"].is_string(), "{}", uri);
    }

    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn upstream_errors_keep_their_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("q", "unauthorized"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "error": "Invalid API key." })),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("q", "limited"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": "Your account has run out of searches."
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("q", "broken"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let app = app(settings(&server));

    let (status, body) = get(app.clone(), "/api/search?q=unauthorized").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid API key.");

    let (status, body) = get(app.clone(), "/api/search?q=limited").await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body["error"], "Your account has run out of searches.");

    let (status, _) = get(app, "/api/search?q=broken").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn slow_provider_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "organic_results": [] }))
                .set_delay(std::time::Duration::from_millis(800)),
        )
        .mount(&server)
        .await;

    let mut settings = settings(&server);
    settings.providers.serpapi.timeout = Some(0.1);

    let (status, body) = get(app(settings), "/api/search?q=rust").await;
    assert_eq!(status, StatusCode::REQUEST_TIMEOUT);
    assert!(body["error"].as_str().unwrap().contains("timed out"));
}

#[tokio::test]
async fn missing_api_key_is_500() {
    let server = MockServer::start().await;
    let mut settings = settings(&server);
    settings.providers.serpapi.api_key = None;

    let (status, body) = get(app(settings), "/api/search?q=rust&type=news").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "serpapi API key is not configured");
}

#[tokio::test]
async fn airport_suggestions() {
    let server = MockServer::start().await;
    let (status, body) = get(app(settings(&server)), "/api/airports?q=lond&limit=3").await;

    assert_eq!(status, StatusCode::OK);
    let suggestions = body.as_array().unwrap();
    assert!(!suggestions.is_empty() && suggestions.len() <= 3);
    assert!(suggestions
        .iter()
        .all(|a| a["city"].as_str().unwrap().starts_with("London")));

    let (status, body) = get(app(settings(&server)), "/api/airports?q=lond&limit=many").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn health_and_index() {
    let server = MockServer::start().await;
    let app = app(settings(&server));

    let (status, body) = get(app.clone(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("data-category=\"flights\""));
    assert!(html.contains("/api/search"));
}
