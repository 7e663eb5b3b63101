use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use std::sync::Arc;
use tinylink_core::{ShortCode, Store};
use tinylink_gateway::model::{HealthResponse, MetricsResponse, ShortenResponse};
use tinylink_gateway::{App, AppState};
use tinylink_shortener::ShortenerService;
use tinylink_storage::InMemoryStore;
use tower::ServiceExt;

const BASE_URL: &str = "http://localhost:8080";

fn test_app() -> (Router, Arc<InMemoryStore>) {
    let store = Arc::new(InMemoryStore::new());
    let shortener = ShortenerService::with_shared_store(Arc::clone(&store));
    let state = AppState::new(Arc::new(shortener), BASE_URL);
    (App::router(state), store)
}

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

async fn body_string(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn shorten_request(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/v1/shorten")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn shorten(app: &Router, url: &str) -> ShortenResponse {
    let body = serde_json::json!({ "url": url }).to_string();
    let response = send(app, shorten_request(body)).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

#[tokio::test]
async fn shorten_valid_request() {
    let (app, _) = test_app();

    let resp = shorten(&app, "https://example.com/test").await;

    assert_eq!(resp.code, "1");
    assert_eq!(resp.short_url, format!("{BASE_URL}/{}", resp.code));
}

#[tokio::test]
async fn shorten_duplicate_url_returns_same_code() {
    let (app, _) = test_app();

    let first = shorten(&app, "https://example.com/duplicate").await;
    let second = shorten(&app, "https://example.com/duplicate").await;

    assert_eq!(first.code, second.code);
}

#[tokio::test]
async fn shorten_invalid_json() {
    let (app, _) = test_app();

    let response = send(&app, shorten_request("invalid json")).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_string(response).await, "invalid json");
}

#[tokio::test]
async fn shorten_missing_content_type() {
    let (app, _) = test_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/shorten")
        .body(Body::from(r#"{"url":"https://example.com"}"#))
        .unwrap();

    let response = send(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn shorten_invalid_url() {
    let (app, store) = test_app();

    for url in ["not-a-valid-url", "ftp://example.com", "http://", ""] {
        let body = serde_json::json!({ "url": url }).to_string();
        let response = send(&app, shorten_request(body)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{url:?}");
        assert_eq!(body_string(response).await, "invalid url");
    }

    assert!(store.is_empty());
}

#[tokio::test]
async fn shorten_rejects_other_methods() {
    let (app, _) = test_app();

    for method in [Method::GET, Method::PUT, Method::DELETE, Method::PATCH] {
        let request = Request::builder()
            .method(method.clone())
            .uri("/api/v1/shorten")
            .body(Body::empty())
            .unwrap();

        let response = send(&app, request).await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{method}");
    }
}

#[tokio::test]
async fn metrics_reports_top_three_domains() {
    let (app, store) = test_app();
    let urls = [
        "https://youtube.com/watch?v=123",
        "https://youtube.com/watch?v=456",
        "https://stackoverflow.com/questions/123",
        "https://wikipedia.org/wiki/Go",
        "https://wikipedia.org/wiki/Python",
        "https://udemy.com/course/go",
        "https://udemy.com/course/python",
        "https://udemy.com/course/javascript",
    ];
    for (i, url) in urls.iter().enumerate() {
        store.save_mapping(&ShortCode::new(format!("code{i}")), url);
    }

    let response = send(&app, get("/api/v1/metrics")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let metrics: MetricsResponse = body_json(response).await;
    let top: Vec<(&str, u64)> = metrics
        .top_domains
        .iter()
        .map(|s| (s.domain.as_str(), s.count))
        .collect();
    assert_eq!(
        top,
        [("udemy.com", 3), ("wikipedia.org", 2), ("youtube.com", 2)]
    );
}

#[tokio::test]
async fn metrics_honours_limit_query() {
    let (app, _) = test_app();
    for url in [
        "https://a.com/1",
        "https://a.com/2",
        "https://b.com/1",
        "https://c.com/1",
        "https://d.com/1",
    ] {
        shorten(&app, url).await;
    }

    let metrics: MetricsResponse = body_json(send(&app, get("/api/v1/metrics?limit=10")).await).await;
    assert_eq!(metrics.top_domains.len(), 4);

    let metrics: MetricsResponse = body_json(send(&app, get("/api/v1/metrics?limit=1")).await).await;
    assert_eq!(metrics.top_domains.len(), 1);
    assert_eq!(metrics.top_domains[0].domain, "a.com");
    assert_eq!(metrics.top_domains[0].count, 2);
}

#[tokio::test]
async fn metrics_empty_store() {
    let (app, _) = test_app();

    let response = send(&app, get("/api/v1/metrics")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let metrics: MetricsResponse = body_json(response).await;
    assert!(metrics.top_domains.is_empty());
}

#[tokio::test]
async fn metrics_rejects_other_methods() {
    let (app, _) = test_app();

    for method in [Method::POST, Method::PUT, Method::DELETE, Method::PATCH] {
        let request = Request::builder()
            .method(method.clone())
            .uri("/api/v1/metrics")
            .body(Body::empty())
            .unwrap();

        let response = send(&app, request).await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{method}");
    }
}

#[tokio::test]
async fn resolve_redirects_to_original_url() {
    let (app, _) = test_app();
    let original_url = "https://example.com/resolve";

    let resp = shorten(&app, original_url).await;
    let response = send(&app, get(&format!("/{}", resp.code))).await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()[header::LOCATION], original_url);
}

#[tokio::test]
async fn resolve_unknown_code_is_not_found() {
    let (app, _) = test_app();

    let response = send(&app, get("/nonexistent")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn root_reports_liveness() {
    let (app, _) = test_app();

    let response = send(&app, get("/")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_string(response).await,
        "URL Shortener Service Healthcheck service is running"
    );
}

#[tokio::test]
async fn health_reports_ok() {
    let (app, _) = test_app();

    let response = send(&app, get("/health")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let health: HealthResponse = body_json(response).await;
    assert_eq!(health.status, "ok");
}
