use axum::http::{self, HeaderValue, header::CONTENT_TYPE, request::Parts};
use tower_http::cors::{AllowOrigin, CorsLayer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OriginDecision {
    /// Deployment previews, local development, or the configured frontend.
    Known,
    /// Anything else. Still allowed, but logged.
    Permissive,
}

pub fn classify_origin(origin: &str, frontend_url: Option<&str>) -> OriginDecision {
    let host = url::Url::parse(origin)
        .ok()
        .and_then(|url| url.host_str().map(str::to_ascii_lowercase));

    let known = frontend_url.is_some_and(|frontend| frontend.trim_end_matches('/') == origin)
        || host.as_deref().is_some_and(|host| {
            host == "vercel.app"
                || host.ends_with(".vercel.app")
                || host == "localhost"
                || host == "127.0.0.1"
        });

    if known {
        OriginDecision::Known
    } else {
        OriginDecision::Permissive
    }
}

/// Credentialed CORS that reflects every origin, logging the ones it does not recognize.
pub fn cors_layer(frontend_url: Option<String>) -> CorsLayer {
    let allow_origin = AllowOrigin::predicate(move |origin: &HeaderValue, _parts: &Parts| {
        let Ok(origin) = origin.to_str() else {
            return false;
        };
        if classify_origin(origin, frontend_url.as_deref()) == OriginDecision::Permissive {
            tracing::info!(origin, "Allowing CORS for unrecognized origin");
        }
        true
    });

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            http::Method::GET,
            http::Method::POST,
            http::Method::DELETE,
            http::Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
}
