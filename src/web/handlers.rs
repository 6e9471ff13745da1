//! HTTP request handlers

use super::error::ApiError;
use super::state::AppState;
use crate::coordinator::{AgentResponse, ConversationContext};
use axum::extract::State;
use axum::Json;
use serde::Deserialize;

/// Request body for the document-QA endpoint
#[derive(Debug, Default, Deserialize)]
pub struct QaRequest {
    pub input: Option<String>,
}

/// Request body for the search-coordinator endpoint
#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    pub query: Option<String>,
    #[serde(default)]
    pub context: ConversationContext,
}

/// Document-QA handler: validate `input`, delegate to the QA service.
///
/// A missing body, unparseable JSON, or an absent/empty `input` all
/// short-circuit to 400 before any provider call.
pub async fn qa_agent(
    State(state): State<AppState>,
    payload: Option<Json<QaRequest>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let input = payload
        .and_then(|Json(req)| req.input)
        .filter(|s| !s.trim().is_empty())
        .ok_or(ApiError::MissingField("Input"))?;

    let result = state.qa.answer(&input).await?;
    Ok(Json(result))
}

/// Search handler: validate `query`, delegate to the coordinator
pub async fn search_agent(
    State(state): State<AppState>,
    payload: Option<Json<SearchRequest>>,
) -> Result<Json<AgentResponse>, ApiError> {
    let SearchRequest { query, context } = payload.map(|Json(req)| req).unwrap_or_default();

    let query = query
        .filter(|s| !s.trim().is_empty())
        .ok_or(ApiError::MissingField("Query"))?;

    let response = state.coordinator.coordinate(&query, &context).await?;
    Ok(Json(response))
}

/// Fallback for disallowed methods on `/api/agent`
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Health check handler
pub async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION,
        "instance": state.instance_name(),
    }))
}
