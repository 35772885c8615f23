use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use scedge_types::ErrorBody;

use crate::app_error::AppError;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.code();
        let (status, message, fallback) = match self {
            AppError::InvalidInput(msg) => {
                tracing::warn!(error = %msg, "Rejected request");
                (StatusCode::BAD_REQUEST, msg, None)
            }
            AppError::Conflict(msg) => {
                tracing::info!(error = %msg, "Request conflicts with stored state");
                (StatusCode::CONFLICT, msg, None)
            }
            AppError::NotConfigured { service, fallback } => {
                tracing::warn!(service = service.name(), "Optional service not configured");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    service.not_configured_message().to_string(),
                    fallback,
                )
            }
            // Backend detail stays in the log.
            err @ (AppError::Unavailable(_) | AppError::Internal(_)) => {
                tracing::error!(error = ?err, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    None,
                )
            }
        };

        let body = ErrorBody {
            error: message,
            code,
            fallback,
        };
        (status, Json(body)).into_response()
    }
}
