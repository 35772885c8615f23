use crate::app_error::AppError;

pub mod file;
pub mod supabase;

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        // Log the actual error for debugging, but don't expose details
        tracing::error!(error = %err, status = ?err.status(), "Upstream request failed");
        if err.is_decode() {
            AppError::Internal("Unexpected upstream response".into())
        } else {
            AppError::Unavailable("Upstream request failed".into())
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        tracing::error!(error = %err, kind = ?err.kind(), "Local I/O failed");
        AppError::Unavailable("Local storage I/O failed".into())
    }
}
