//! Route table

use std::path::Path;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::handlers::{health_check, query_handler};
use crate::state::AppState;

pub fn build(state: AppState, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Front end
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(static_dir))
        // Health
        .route("/health", get(health_check))
        // Agent API
        .route("/api/query", post(query_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use simple_agent::SimpleAgent;
    use tower::ServiceExt;

    use crate::config::ServerConfig;

    fn app() -> Router {
        build(AppState::new(SimpleAgent::new()), &ServerConfig::default().static_dir)
    }

    async fn post_query(body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/api/query")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_empty_query_is_rejected() {
        let (status, body) = post_query(r#"{"query": ""}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "No query provided");

        let (status, body) = post_query(r#"{"query": "   "}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_missing_query_is_rejected() {
        let (status, body) = post_query("{}").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "No query provided");
    }

    #[tokio::test]
    async fn test_malformed_body_is_rejected() {
        let (status, body) = post_query("not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());

        let (status, _) = post_query(r#"{"query": 42}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_query_matches_dispatcher() {
        let query = "Tell me the weather in London";
        let (status, body) = post_query(r#"{"query": "Tell me the weather in London"}"#).await;
        assert_eq!(status, StatusCode::OK);

        let direct = SimpleAgent::new().process_query(query).await;
        assert_eq!(body["final_answer"], direct.final_answer.as_str());
        assert_eq!(body["query"], query);
        assert_eq!(body["recognized_tools"], serde_json::json!(["weather"]));
        assert_eq!(
            body["responses"],
            serde_json::json!([["weather", "Cloudy, 55°F, Wind: 15 mph"]])
        );
    }

    #[tokio::test]
    async fn test_index_page() {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("/api/query"));
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["tools"], serde_json::json!(["calculator", "time", "weather"]));
    }
}
