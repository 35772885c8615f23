use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use env_helpers::get_env_default;
use secrecy::SecretString;
use url::Url;

use crate::infra::error::InfraError;

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_DATA_FILE: &str = "waitlist-data.json";
pub const DEFAULT_SUPABASE_TABLE: &str = "waitlist";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Location of the file backend's JSON document.
    pub data_file: PathBuf,
    /// Present only when both the project URL and a key are set. Enables the
    /// hosted waitlist backend and cloud storage.
    pub supabase: Option<SupabaseConfig>,
    pub openai: Option<OpenAiConfig>,
    /// Origin allowed without a "permissive CORS" log line.
    pub frontend_url: Option<String>,
    pub max_upload_bytes: usize,
}

pub struct SupabaseConfig {
    /// Project base URL, always ending in `/`.
    pub url: Url,
    pub api_key: SecretString,
    pub table: String,
}

pub struct OpenAiConfig {
    pub api_key: SecretString,
    pub base_url: Url,
    pub model: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, InfraError> {
        let port: u16 = get_env_default("PORT", DEFAULT_PORT);
        let host: String = get_env_default("BIND_HOST", "0.0.0.0".to_string());
        let ip: IpAddr = host
            .parse()
            .map_err(|e| InfraError::invalid("BIND_HOST", e))?;

        let data_file: String = get_env_default("DATA_FILE", DEFAULT_DATA_FILE.to_string());
        let max_upload_bytes: usize = get_env_default("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES);

        let supabase = SupabaseConfig::from_parts(
            optional_env("SUPABASE_URL"),
            optional_env("SUPABASE_SERVICE_ROLE_KEY").or_else(|| optional_env("SUPABASE_ANON_KEY")),
            optional_env("SUPABASE_TABLE"),
        )?;

        let openai = OpenAiConfig::from_parts(
            optional_env("OPENAI_API_KEY"),
            optional_env("OPENAI_BASE_URL"),
            optional_env("OPENAI_MODEL"),
        )?;

        Ok(Self {
            bind_addr: SocketAddr::new(ip, port),
            data_file: PathBuf::from(data_file),
            supabase,
            openai,
            frontend_url: optional_env("FRONTEND_URL"),
            max_upload_bytes,
        })
    }
}

impl SupabaseConfig {
    /// `None` unless both the URL and a key are present.
    pub fn from_parts(
        url: Option<String>,
        api_key: Option<String>,
        table: Option<String>,
    ) -> Result<Option<Self>, InfraError> {
        let (Some(url), Some(api_key)) = (url, api_key) else {
            return Ok(None);
        };
        let mut url = Url::parse(&url).map_err(|e| InfraError::invalid("SUPABASE_URL", e))?;
        if !url.path().ends_with('/') {
            url.set_path(&format!("{}/", url.path()));
        }
        Ok(Some(Self {
            url,
            api_key: SecretString::new(api_key.into()),
            table: table.unwrap_or_else(|| DEFAULT_SUPABASE_TABLE.to_string()),
        }))
    }
}

impl OpenAiConfig {
    pub fn from_parts(
        api_key: Option<String>,
        base_url: Option<String>,
        model: Option<String>,
    ) -> Result<Option<Self>, InfraError> {
        let Some(api_key) = api_key else {
            return Ok(None);
        };
        let base_url = base_url.as_deref().unwrap_or(DEFAULT_OPENAI_BASE_URL);
        let base_url = Url::parse(base_url).map_err(|e| InfraError::invalid("OPENAI_BASE_URL", e))?;
        Ok(Some(Self {
            api_key: SecretString::new(api_key.into()),
            base_url,
            model: model.unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
        }))
    }
}

/// Unset and blank variables both read as `None`.
fn optional_env(var: &str) -> Option<String> {
    std::env::var(var)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
