use axum::{
    Form, Json, Router,
    extract::{FromRequest, Request, State},
    http::{StatusCode, header::CONTENT_TYPE},
    response::IntoResponse,
    routing::get,
};
use scedge_types::{ClearResponse, WaitlistEntry};
use serde::Deserialize;

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
    domain::entities::waitlist_email::{INVALID_EMAIL_MESSAGE, WaitlistEmail},
};

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(list_entries).post(join_waitlist).delete(clear_waitlist),
    )
}

async fn list_entries(State(app_state): State<AppState>) -> AppResult<Json<Vec<WaitlistEntry>>> {
    let entries = app_state.waitlist_use_cases.list_entries().await?;
    Ok(Json(entries))
}

async fn join_waitlist(
    State(app_state): State<AppState>,
    request: Request,
) -> AppResult<impl IntoResponse> {
    let email = parse_email(request).await?;
    let entry = app_state.waitlist_use_cases.join(email).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

async fn clear_waitlist(State(app_state): State<AppState>) -> AppResult<Json<ClearResponse>> {
    app_state.waitlist_use_cases.clear_all().await?;
    Ok(Json(ClearResponse {
        message: "All emails cleared".to_string(),
    }))
}

#[derive(Deserialize)]
struct EmailForm {
    email: Option<String>,
}

fn is_form(request: &Request) -> bool {
    request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"))
}

/// Accepts JSON or HTML form bodies. Anything else, a missing `email` string,
/// or an address that fails validation is rejected.
async fn parse_email(request: Request) -> AppResult<WaitlistEmail> {
    let raw = if is_form(&request) {
        Form::<EmailForm>::from_request(request, &())
            .await
            .ok()
            .and_then(|Form(form)| form.email)
    } else {
        Json::<serde_json::Value>::from_request(request, &())
            .await
            .ok()
            .and_then(|Json(body)| body.get("email")?.as_str().map(str::to_owned))
    };
    let raw = raw.ok_or_else(|| AppError::InvalidInput(INVALID_EMAIL_MESSAGE.into()))?;
    WaitlistEmail::parse(&raw)
}
