use thiserror::Error;

/// Infrastructure errors that can occur during application startup.
///
/// Display messages never include credential values; use Display (%e) in logs.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("Configuration error: {var} is invalid ({reason})")]
    ConfigInvalid { var: &'static str, reason: String },

    #[error("HTTP client initialization failed")]
    HttpClient(#[source] reqwest::Error),

    #[error("TCP bind failed")]
    TcpBind(#[source] std::io::Error),

    #[error("Server error")]
    Server(#[source] std::io::Error),
}

impl InfraError {
    pub fn invalid(var: &'static str, reason: impl std::fmt::Display) -> Self {
        InfraError::ConfigInvalid {
            var,
            reason: reason.to_string(),
        }
    }
}
