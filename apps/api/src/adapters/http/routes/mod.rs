pub mod ai;
pub mod health;
pub mod index;
pub mod storage;
pub mod waitlist;

use axum::Router;

use crate::adapters::http::app_state::AppState;

/// Everything served under `/api`.
pub fn router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .nest("/waitlist", waitlist::router())
        .nest("/health", health::router())
        .nest("/ai", ai::router())
        .merge(storage::router(max_upload_bytes))
}
