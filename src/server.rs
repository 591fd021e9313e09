use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tracing::error;

use crate::aggregator::NewsAggregator;

/// CDN caching: 5 minutes fresh, 1 minute stale while revalidating. Keeps
/// load off the upstream feeds.
const CACHE_DIRECTIVE: &str = "s-maxage=300, stale-while-revalidate=60";

pub struct AppState {
    pub aggregator: NewsAggregator,
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/api/articles", get(list_articles))
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}

/// `GET /api/articles` — the whole API surface. No query parameters.
///
/// Per-source failures are already isolated inside the aggregator, so this
/// responds 200 with whatever could be assembled (possibly an empty array).
/// The error arm only fires if the pipeline itself fails.
async fn list_articles(State(state): State<Arc<AppState>>) -> Response {
    let cache = [(header::CACHE_CONTROL, CACHE_DIRECTIVE)];

    match state.aggregator.collect_articles().await {
        Ok(articles) => (StatusCode::OK, cache, Json(articles)).into_response(),
        Err(e) => {
            error!("Article pipeline failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                cache,
                Json(json!({ "error": "Failed to load articles" })),
            )
                .into_response()
        }
    }
}
