use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use crate::{
    adapters::http::app_state::AppState,
    application::email_viewer::{render_email_table, render_error_page},
};

#[derive(Debug, Deserialize)]
struct IndexQuery {
    view: Option<String>,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}

/// API description, or the HTML email viewer with `?view=emails`.
async fn index(State(app_state): State<AppState>, Query(query): Query<IndexQuery>) -> Response {
    if query.view.as_deref() == Some("emails") {
        return match app_state.waitlist_use_cases.list_entries().await {
            Ok(entries) => Html(render_email_table(&entries)).into_response(),
            Err(err) => {
                error!(error = ?err, "Failed to load emails for viewer");
                (StatusCode::INTERNAL_SERVER_ERROR, Html(render_error_page())).into_response()
            }
        };
    }

    Json(json!({
        "message": "Scedge Waitlist API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "GET /api/waitlist": "Get all waitlist emails",
            "POST /api/waitlist": "Add a new email to waitlist",
            "DELETE /api/waitlist": "Clear all waitlist emails",
            "GET /api/health": "Health check endpoint",
            "GET /?view=emails": "View emails in browser (HTML)",
            "POST /api/upload": "Upload file to cloud storage",
            "GET /api/files/{bucket}": "List files in bucket",
            "DELETE /api/files/{bucket}/{path}": "Delete file from storage",
            "POST /api/ai/value-proposition": "Generate AI value proposition",
            "POST /api/ai/analyze": "Analyze content with AI",
            "POST /api/ai/insights": "Generate insights from data",
        },
    }))
    .into_response()
}
