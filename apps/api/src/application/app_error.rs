use scedge_types::ErrorCode;
use thiserror::Error;

use crate::domain::entities::service::OptionalService;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// Backend unreachable or local I/O failed. The detail is logged, never returned.
    #[error("Backend unavailable: {0}")]
    Unavailable(String),

    #[error("{} is not configured", .service.name())]
    NotConfigured {
        service: OptionalService,
        fallback: Option<String>,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::Conflict(_) => ErrorCode::Conflict,
            AppError::Unavailable(_) => ErrorCode::Unavailable,
            AppError::NotConfigured { .. } => ErrorCode::NotConfigured,
            AppError::Internal(_) => ErrorCode::InternalError,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
