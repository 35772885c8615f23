use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::json;
use url::Url;

use crate::{
    app_error::{AppError, AppResult},
    use_cases::storage::{FileStorage, StoredObject},
};

const LIST_LIMIT: u32 = 100;

/// Supabase Storage over its REST API.
#[derive(Clone)]
pub struct SupabaseStorage {
    client: Client,
    base_url: Url,
    api_key: SecretString,
}

#[derive(Serialize)]
struct ListRequest<'a> {
    prefix: &'a str,
    limit: u32,
    offset: u32,
    #[serde(rename = "sortBy")]
    sort_by: serde_json::Value,
}

impl SupabaseStorage {
    pub fn new(client: Client, base_url: Url, api_key: SecretString) -> Self {
        Self {
            client,
            base_url,
            api_key,
        }
    }

    fn endpoint(&self, segments: &[&str]) -> AppResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::Internal("Storage base URL cannot be a base".into()))?
            .pop_if_empty()
            .extend(["storage", "v1"])
            .extend(segments.iter().flat_map(|s| s.split('/')));
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let key = self.api_key.expose_secret();
        self.client
            .request(method, url)
            .header("apikey", key)
            .bearer_auth(key)
    }

    pub fn public_url(&self, bucket: &str, path: &str) -> AppResult<Url> {
        self.endpoint(&["object", "public", bucket, path])
    }
}

#[async_trait]
impl FileStorage for SupabaseStorage {
    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> AppResult<StoredObject> {
        let url = self.endpoint(&["object", bucket, path])?;
        self.request(Method::POST, url)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .header("x-upsert", "true")
            .body(bytes)
            .send()
            .await?
            .error_for_status()?;

        Ok(StoredObject {
            path: path.to_string(),
            url: self.public_url(bucket, path)?.to_string(),
        })
    }

    async fn list(&self, bucket: &str, folder: &str) -> AppResult<Vec<serde_json::Value>> {
        let url = self.endpoint(&["object", "list", bucket])?;
        let body = ListRequest {
            prefix: folder,
            limit: LIST_LIMIT,
            offset: 0,
            sort_by: json!({ "column": "name", "order": "asc" }),
        };
        let files = self
            .request(Method::POST, url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(files)
    }

    async fn delete(&self, bucket: &str, path: &str) -> AppResult<()> {
        let url = self.endpoint(&["object", bucket])?;
        self.request(Method::DELETE, url)
            .json(&json!({ "prefixes": [path] }))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
