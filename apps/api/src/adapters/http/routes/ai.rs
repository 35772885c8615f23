use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::post,
};
use serde::{Deserialize, Serialize};

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
    domain::entities::analysis_type::AnalysisType,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/value-proposition", post(value_proposition))
        .route("/analyze", post(analyze))
        .route("/insights", post(insights))
}

#[derive(Debug, Deserialize)]
struct ValuePropositionRequest {
    role: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeRequest {
    content: Option<String>,
    analysis_type: Option<String>,
}

#[derive(Debug, Deserialize)]
struct InsightsRequest {
    #[serde(default)]
    data: serde_json::Value,
    context: Option<String>,
}

#[derive(Debug, Serialize)]
struct ResultResponse {
    result: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeResponse {
    result: String,
    analysis_type: &'static str,
}

/// Malformed bodies are treated like a missing required field.
fn body_or<T>(payload: Result<Json<T>, JsonRejection>, message: &str) -> AppResult<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|_| AppError::InvalidInput(message.into()))
}

async fn value_proposition(
    State(app_state): State<AppState>,
    payload: Result<Json<ValuePropositionRequest>, JsonRejection>,
) -> AppResult<Json<ResultResponse>> {
    let body = body_or(payload, "Role is required")?;
    let result = app_state
        .ai_use_cases
        .value_proposition(body.role.as_deref().unwrap_or_default())
        .await?;
    Ok(Json(ResultResponse { result }))
}

async fn analyze(
    State(app_state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> AppResult<Json<AnalyzeResponse>> {
    let body = body_or(payload, "Content is required")?;
    let analysis_type = AnalysisType::from_raw(body.analysis_type.as_deref());
    let result = app_state
        .ai_use_cases
        .analyze(body.content.as_deref().unwrap_or_default(), analysis_type)
        .await?;
    Ok(Json(AnalyzeResponse {
        result,
        analysis_type: analysis_type.as_str(),
    }))
}

async fn insights(
    State(app_state): State<AppState>,
    payload: Result<Json<InsightsRequest>, JsonRejection>,
) -> AppResult<Json<ResultResponse>> {
    let body = body_or(payload, "Data is required")?;
    let result = app_state
        .ai_use_cases
        .insights(&body.data, body.context.as_deref().unwrap_or_default())
        .await?;
    Ok(Json(ResultResponse { result }))
}
