use scedge_types::ErrorCode;
use thiserror::Error;

/// SDK-specific errors.
#[derive(Debug, Error)]
pub enum SdkError {
    /// Connecting failed or the request timed out (only with `client` feature)
    #[cfg(feature = "client")]
    #[error(
        "Cannot connect to backend API. Please check that the backend is running at {base_url}"
    )]
    Network {
        base_url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The connection was made but the exchange failed, e.g. the server hung
    /// up mid-response (only with `client` feature)
    #[cfg(feature = "client")]
    #[error("Request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// API answered with a non-success status
    #[error("API error ({status}): {message}")]
    Api {
        status: u16,
        code: Option<ErrorCode>,
        message: String,
    },

    /// Response body did not have the expected shape (only with `client` feature)
    #[cfg(feature = "client")]
    #[error("Failed to decode response: {0}")]
    Decode(#[source] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SdkError {
    /// True when the backend could not be reached or did not answer in time,
    /// which usually means a wrong base URL or a stopped backend.
    pub fn is_network(&self) -> bool {
        #[cfg(feature = "client")]
        if matches!(self, SdkError::Network { .. }) {
            return true;
        }
        false
    }
}
