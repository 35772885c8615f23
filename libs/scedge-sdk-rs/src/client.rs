//! HTTP client for the waitlist API.

use std::time::Duration;

use reqwest::{Response, StatusCode};
use scedge_types::{ErrorBody, HealthResponse, WaitlistEntry};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::warn;
use url::Url;

use crate::error::SdkError;

/// Where the API listens during local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001/api";

/// Environment variable read by [`ScedgeClient::from_env`].
pub const BASE_URL_ENV: &str = "SCEDGE_API_URL";

pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Result of a signup. Both variants mean the address is on the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Created(WaitlistEntry),
    /// The server answered 409: the address was already present.
    AlreadyListed,
}

/// Client for the waitlist API.
///
/// Every call is a single request: no retries and no caching.
#[derive(Debug, Clone)]
pub struct ScedgeClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl ScedgeClient {
    /// Create a client for `base_url`.
    ///
    /// The base is normalized to end in `/api`, so both
    /// `https://api.example.com` and `https://api.example.com/api/` work.
    pub fn new(base_url: &str) -> Result<Self, SdkError> {
        Self::with_timeouts(base_url, DEFAULT_CONNECT_TIMEOUT, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Like [`ScedgeClient::new`] with explicit connect and whole-request limits.
    pub fn with_timeouts(
        base_url: &str,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> Result<Self, SdkError> {
        let base_url = normalize_base_url(base_url)?;
        if points_at_localhost(&base_url) {
            warn!(
                base_url = %base_url,
                "API base URL points at localhost; set {BASE_URL_ENV} for deployed builds"
            );
        }

        let http_client = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .build()
            .map_err(|e| SdkError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url,
            http_client,
        })
    }

    /// Create a client from `SCEDGE_API_URL`, falling back to [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Result<Self, SdkError> {
        let base_url = std::env::var(BASE_URL_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self::new(&base_url)
    }

    /// Normalized base URL, always ending in `/api`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Add `email` to the waitlist.
    ///
    /// A duplicate address is not an error: it yields
    /// [`SaveOutcome::AlreadyListed`].
    pub async fn save_email(&self, email: &str) -> Result<SaveOutcome, SdkError> {
        let response = self
            .send(
                self.http_client
                    .post(self.endpoint("waitlist"))
                    .json(&json!({ "email": email })),
            )
            .await?;

        match response.status() {
            StatusCode::CREATED => Ok(SaveOutcome::Created(decode(response).await?)),
            StatusCode::CONFLICT => Ok(SaveOutcome::AlreadyListed),
            _ => Err(api_error(response, "Failed to save email").await),
        }
    }

    /// All entries, newest first.
    pub async fn get_emails(&self) -> Result<Vec<WaitlistEntry>, SdkError> {
        let response = self
            .send(self.http_client.get(self.endpoint("waitlist")))
            .await?;
        if !response.status().is_success() {
            return Err(api_error(response, "Failed to fetch emails").await);
        }
        decode(response).await
    }

    /// Remove every entry.
    pub async fn clear_emails(&self) -> Result<(), SdkError> {
        let response = self
            .send(self.http_client.delete(self.endpoint("waitlist")))
            .await?;
        if !response.status().is_success() {
            return Err(api_error(response, "Failed to clear emails").await);
        }
        Ok(())
    }

    pub async fn health(&self) -> Result<HealthResponse, SdkError> {
        let response = self
            .send(self.http_client.get(self.endpoint("health")))
            .await?;
        if !response.status().is_success() {
            return Err(api_error(response, "Health check failed").await);
        }
        decode(response).await
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Response, SdkError> {
        request.send().await.map_err(|source| {
            if source.is_connect() || source.is_timeout() {
                SdkError::Network {
                    base_url: self.base_url.clone(),
                    source,
                }
            } else {
                SdkError::Transport(source)
            }
        })
    }
}

/// Trims trailing slashes and appends `/api` when missing.
fn normalize_base_url(raw: &str) -> Result<String, SdkError> {
    let trimmed = raw.trim().trim_end_matches('/');
    Url::parse(trimmed).map_err(|e| SdkError::Config(format!("invalid base URL {raw:?}: {e}")))?;

    if trimmed.ends_with("/api") {
        Ok(trimmed.to_string())
    } else {
        Ok(format!("{trimmed}/api"))
    }
}

fn points_at_localhost(base_url: &str) -> bool {
    Url::parse(base_url)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .is_some_and(|host| host == "localhost" || host == "127.0.0.1")
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, SdkError> {
    response.json().await.map_err(SdkError::Decode)
}

/// Uses the server's error body when it has one.
async fn api_error(response: Response, fallback: &str) -> SdkError {
    let status = response.status().as_u16();
    match response.json::<ErrorBody>().await {
        Ok(body) => SdkError::Api {
            status,
            code: Some(body.code),
            message: body.error,
        },
        Err(_) => SdkError::Api {
            status,
            code: None,
            message: fallback.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scedge_types::ErrorCode;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn entry(email: &str, timestamp: i64) -> WaitlistEntry {
        WaitlistEntry {
            id: format!("id-{timestamp}"),
            email: email.to_string(),
            timestamp,
        }
    }

    async fn client_for(server: &MockServer) -> ScedgeClient {
        ScedgeClient::new(&server.uri()).unwrap()
    }

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(
            normalize_base_url("https://api.example.com").unwrap(),
            "https://api.example.com/api"
        );
        assert_eq!(
            normalize_base_url("https://api.example.com/api/").unwrap(),
            "https://api.example.com/api"
        );
        assert_eq!(
            normalize_base_url(DEFAULT_BASE_URL).unwrap(),
            DEFAULT_BASE_URL
        );
        assert!(matches!(
            normalize_base_url("not a url"),
            Err(SdkError::Config(_))
        ));
    }

    #[test]
    fn test_points_at_localhost() {
        assert!(points_at_localhost(DEFAULT_BASE_URL));
        assert!(points_at_localhost("http://127.0.0.1:3001/api"));
        assert!(!points_at_localhost("https://api.example.com/api"));
    }

    #[tokio::test]
    async fn save_email_created() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/waitlist"))
            .and(body_json(json!({ "email": "a@x.com" })))
            .respond_with(ResponseTemplate::new(201).set_body_json(entry("a@x.com", 1)))
            .expect(1)
            .mount(&server)
            .await;

        let outcome = client_for(&server).await.save_email("a@x.com").await.unwrap();

        assert_eq!(outcome, SaveOutcome::Created(entry("a@x.com", 1)));
    }

    #[tokio::test]
    async fn save_email_conflict_is_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/waitlist"))
            .respond_with(ResponseTemplate::new(409).set_body_json(json!({
                "error": "Email already exists",
                "code": "CONFLICT"
            })))
            .mount(&server)
            .await;

        let outcome = client_for(&server).await.save_email("a@x.com").await.unwrap();

        assert_eq!(outcome, SaveOutcome::AlreadyListed);
    }

    #[tokio::test]
    async fn save_email_validation_error_is_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/waitlist"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": "Valid email is required",
                "code": "INVALID_INPUT"
            })))
            .mount(&server)
            .await;

        let err = client_for(&server).await.save_email("nope").await.unwrap_err();

        match err {
            SdkError::Api {
                status,
                code,
                message,
            } => {
                assert_eq!(status, 400);
                assert_eq!(code, Some(ErrorCode::InvalidInput));
                assert_eq!(message, "Valid email is required");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn get_emails_returns_entries_in_server_order() {
        let server = MockServer::start().await;
        let entries = vec![entry("b@x.com", 2), entry("a@x.com", 1)];
        Mock::given(method("GET"))
            .and(path("/api/waitlist"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&entries))
            .mount(&server)
            .await;

        let listed = client_for(&server).await.get_emails().await.unwrap();

        assert_eq!(listed, entries);
    }

    #[tokio::test]
    async fn get_emails_without_error_body_uses_generic_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/waitlist"))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .mount(&server)
            .await;

        let err = client_for(&server).await.get_emails().await.unwrap_err();

        assert!(matches!(
            err,
            SdkError::Api { status: 502, code: None, ref message } if message == "Failed to fetch emails"
        ));
    }

    #[tokio::test]
    async fn clear_emails_and_health() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/waitlist"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "message": "All emails cleared" })),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "ok",
                "timestamp": 5,
                "services": {
                    "database": "File storage",
                    "cloudStorage": "Not configured",
                    "ai": "Not configured"
                }
            })))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        client.clear_emails().await.unwrap();
        let health = client.health().await.unwrap();

        assert_eq!(health.status, "ok");
        assert_eq!(health.services.database, "File storage");
    }

    #[tokio::test]
    async fn unreachable_backend_is_network_error() {
        // Bind then drop to get a port nothing listens on.
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let client = ScedgeClient::new(&format!("http://127.0.0.1:{port}")).unwrap();

        let err = client.get_emails().await.unwrap_err();

        assert!(err.is_network());
        assert_eq!(
            err.to_string(),
            format!(
                "Cannot connect to backend API. Please check that the backend is running at http://127.0.0.1:{port}/api"
            )
        );
    }

    #[tokio::test]
    async fn stalled_response_times_out_as_network_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/waitlist"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([]))
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&server)
            .await;
        let client = ScedgeClient::with_timeouts(
            &server.uri(),
            DEFAULT_CONNECT_TIMEOUT,
            Duration::from_millis(100),
        )
        .unwrap();

        let err = client.get_emails().await.unwrap_err();

        assert!(err.is_network());
    }

    #[tokio::test]
    async fn dropped_connection_is_transport_error() {
        use tokio::io::AsyncReadExt;

        // Accepts the request, then hangs up without answering.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf).await;
        });
        let client = ScedgeClient::new(&format!("http://127.0.0.1:{port}")).unwrap();

        let err = client.get_emails().await.unwrap_err();

        assert!(matches!(err, SdkError::Transport(_)));
        assert!(!err.is_network());
    }
}
