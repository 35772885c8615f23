use axum::{Json, Router, extract::State, routing::get};
use chrono::Utc;
use scedge_types::{HealthResponse, ServicesSummary};

use crate::{adapters::http::app_state::AppState, domain::entities::service::OptionalService};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(health))
}

async fn health(State(app_state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now().timestamp_millis(),
        services: ServicesSummary {
            database: app_state.waitlist_use_cases.backend().label().to_string(),
            cloud_storage: OptionalService::CloudStorage
                .label(app_state.storage_use_cases.is_configured())
                .to_string(),
            ai: OptionalService::Ai
                .label(app_state.ai_use_cases.is_configured())
                .to_string(),
        },
    })
}
