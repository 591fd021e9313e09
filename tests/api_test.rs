use std::sync::Once;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use news_aggregator::server::{create_app, AppState};
use news_aggregator::{FetchConfig, NewsAggregator, Source};
use tower::ServiceExt;

static INIT: Once = Once::new();

fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .try_init()
            .ok();
    });
}

fn app_with_sources(sources: Vec<Source>) -> axum::Router {
    let aggregator = NewsAggregator::new(sources, FetchConfig::default());
    create_app(AppState { aggregator })
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn articles_endpoint_returns_empty_array_with_no_sources() {
    init_tracing();

    let app = app_with_sources(Vec::new());
    let response = app
        .oneshot(Request::builder().uri("/api/articles").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).unwrap(),
        "s-maxage=300, stale-while-revalidate=60"
    );

    let body = body_json(response).await;
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn failing_sources_are_isolated_not_surfaced() {
    init_tracing();

    // Nothing listens on these; every fetch fails fast. The endpoint must
    // still answer 200 with an empty array.
    let sources = vec![
        Source::new("Dead A", "http://127.0.0.1:9/feed.xml"),
        Source::new("Dead B", "http://127.0.0.1:9/rss"),
    ];
    let app = app_with_sources(sources);

    let response = app
        .oneshot(Request::builder().uri("/api/articles").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn unknown_routes_are_not_served() {
    init_tracing();

    let app = app_with_sources(Vec::new());
    let response = app
        .oneshot(Request::builder().uri("/api/other").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
