use serde::{Deserialize, Serialize};

/// Body of `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,

    /// Server clock in milliseconds since the Unix epoch.
    pub timestamp: i64,

    pub services: ServicesSummary,
}

/// Which backing service satisfies each concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicesSummary {
    /// "Supabase" or "File storage"
    pub database: String,

    /// "Supabase Storage" or "Not configured"
    pub cloud_storage: String,

    /// "OpenAI" or "Not configured"
    pub ai: String,
}
