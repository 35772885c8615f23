use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use scedge_types::WaitlistEntry;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{
    app_error::{AppError, AppResult},
    domain::entities::waitlist_email::WaitlistEmail,
    use_cases::waitlist::{DUPLICATE_EMAIL_MESSAGE, WaitlistRepo},
};

/// Matches every row whatever the id column's type; the REST API refuses
/// unfiltered deletes.
const MATCH_ALL_ROWS: (&str, &str) = ("id", "not.is.null");

/// Waitlist stored in a hosted Postgres table, reached through its REST API.
///
/// `create` checks for an existing row and then inserts. The two requests are
/// not atomic; a unique constraint on the `email` column is what stops two
/// concurrent signups for the same address, and its violation surfaces as
/// `Conflict`.
#[derive(Clone)]
pub struct SupabaseWaitlistRepo {
    client: Client,
    table_url: Url,
    api_key: SecretString,
}

// Row as stored in the hosted table.
#[derive(Debug, Deserialize)]
struct WaitlistRow {
    id: serde_json::Value,
    email: String,
    created_at: DateTime<Utc>,
}

impl WaitlistRow {
    fn into_entry(self) -> WaitlistEntry {
        let id = match self.id {
            serde_json::Value::String(id) => id,
            other => other.to_string(),
        };
        WaitlistEntry {
            id,
            email: self.email,
            timestamp: self.created_at.timestamp_millis(),
        }
    }
}

#[derive(Serialize)]
struct NewRow<'a> {
    email: &'a str,
}

impl SupabaseWaitlistRepo {
    pub fn new(
        client: Client,
        base_url: &Url,
        api_key: SecretString,
        table: &str,
    ) -> Result<Self, url::ParseError> {
        let table_url = base_url.join(&format!("rest/v1/{table}"))?;
        Ok(Self {
            client,
            table_url,
            api_key,
        })
    }

    fn request(&self, method: Method) -> RequestBuilder {
        let key = self.api_key.expose_secret();
        self.client
            .request(method, self.table_url.clone())
            .header("apikey", key)
            .bearer_auth(key)
    }

    async fn exists(&self, email: &WaitlistEmail) -> AppResult<bool> {
        let rows: Vec<serde_json::Value> = self
            .request(Method::GET)
            .query(&[
                ("select", "id".to_string()),
                ("email", format!("eq.{}", email.as_str())),
                ("limit", "1".to_string()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(!rows.is_empty())
    }
}

#[async_trait]
impl WaitlistRepo for SupabaseWaitlistRepo {
    async fn create(&self, email: &WaitlistEmail) -> AppResult<WaitlistEntry> {
        if self.exists(email).await? {
            return Err(AppError::Conflict(DUPLICATE_EMAIL_MESSAGE.into()));
        }

        let response = self
            .request(Method::POST)
            .header("Prefer", "return=representation")
            .json(&[NewRow {
                email: email.as_str(),
            }])
            .send()
            .await?;

        // Unique violation from a concurrent insert that passed the check.
        if response.status() == StatusCode::CONFLICT {
            return Err(AppError::Conflict(DUPLICATE_EMAIL_MESSAGE.into()));
        }

        let rows: Vec<WaitlistRow> = response.error_for_status()?.json().await?;
        rows.into_iter()
            .next()
            .map(WaitlistRow::into_entry)
            .ok_or_else(|| AppError::Internal("Insert returned no row".into()))
    }

    async fn list(&self) -> AppResult<Vec<WaitlistEntry>> {
        let rows: Vec<WaitlistRow> = self
            .request(Method::GET)
            .query(&[("select", "*"), ("order", "created_at.desc")])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(rows.into_iter().map(WaitlistRow::into_entry).collect())
    }

    async fn clear_all(&self) -> AppResult<()> {
        self.request(Method::DELETE)
            .query(&[MATCH_ALL_ROWS])
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
