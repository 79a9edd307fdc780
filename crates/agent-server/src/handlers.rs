//! HTTP Handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use simple_agent::AgentResponse;
use tracing::Instrument;

use crate::state::AppState;

// ============================================================================
// Request / Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub tools: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    #[serde(default)]
    pub query: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn bad_request(error: impl Into<String>) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse { error: error.into() }),
    )
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        tools: state
            .agent
            .tools()
            .names()
            .into_iter()
            .map(String::from)
            .collect(),
    })
}

/// Run one query through the keyword dispatcher
pub async fn query_handler(
    State(state): State<AppState>,
    payload: Result<Json<QueryRequest>, JsonRejection>,
) -> Result<Json<AgentResponse>, ApiError> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::warn!("Rejected query body: {}", rejection);
        bad_request(rejection.body_text())
    })?;

    let query = payload
        .query
        .filter(|q| !q.trim().is_empty())
        .ok_or_else(|| bad_request("No query provided"))?;

    let request_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!("query", %request_id);

    let response = async {
        tracing::info!(query = %query, "Processing query");
        let response = state.agent.process_query(&query).await;
        tracing::info!(tools = ?response.recognized_tools, "Query answered");
        response
    }
    .instrument(span)
    .await;

    Ok(Json(response))
}
