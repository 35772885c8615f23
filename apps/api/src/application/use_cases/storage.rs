use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde::Serialize;
use tracing::{info, instrument};

use crate::{
    app_error::{AppError, AppResult},
    application::validators::is_valid_object_path,
    domain::entities::service::OptionalService,
};

pub const DEFAULT_BUCKET: &str = "uploads";

#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub path: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadReceipt {
    pub success: bool,
    pub path: String,
    pub url: String,
    pub file_name: String,
    pub size: usize,
}

/// Object storage reachable over the network.
#[async_trait]
pub trait FileStorage: Send + Sync {
    /// Stores `bytes` at `path`, replacing any existing object.
    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> AppResult<StoredObject>;
    async fn list(&self, bucket: &str, folder: &str) -> AppResult<Vec<serde_json::Value>>;
    async fn delete(&self, bucket: &str, path: &str) -> AppResult<()>;
}

#[derive(Clone)]
pub struct StorageUseCases {
    storage: Option<Arc<dyn FileStorage>>,
}

impl StorageUseCases {
    pub fn new(storage: Option<Arc<dyn FileStorage>>) -> Self {
        Self { storage }
    }

    pub fn is_configured(&self) -> bool {
        self.storage.is_some()
    }

    fn storage(&self) -> AppResult<&Arc<dyn FileStorage>> {
        self.storage.as_ref().ok_or(AppError::NotConfigured {
            service: OptionalService::CloudStorage,
            fallback: None,
        })
    }

    #[instrument(skip(self, file), fields(file_name = %file.file_name, size = file.bytes.len()))]
    pub async fn upload(
        &self,
        bucket: Option<&str>,
        folder: Option<&str>,
        file: UploadedFile,
    ) -> AppResult<UploadReceipt> {
        let storage = self.storage()?;
        let bucket = checked_bucket(bucket.unwrap_or(DEFAULT_BUCKET))?;
        let folder = checked_folder(folder.unwrap_or_default())?;

        let path = object_name(folder, &file.file_name, Utc::now().timestamp_millis());
        let size = file.bytes.len();
        let stored = storage
            .upload(bucket, &path, file.bytes, &file.content_type)
            .await?;
        info!(bucket, path = %stored.path, "File uploaded");

        Ok(UploadReceipt {
            success: true,
            path: stored.path,
            url: stored.url,
            file_name: file.file_name,
            size,
        })
    }

    #[instrument(skip(self))]
    pub async fn list_files(
        &self,
        bucket: &str,
        folder: Option<&str>,
    ) -> AppResult<Vec<serde_json::Value>> {
        let storage = self.storage()?;
        let bucket = checked_bucket(bucket)?;
        let folder = checked_folder(folder.unwrap_or_default())?;
        storage.list(bucket, folder).await
    }

    #[instrument(skip(self))]
    pub async fn delete_file(&self, bucket: &str, path: &str) -> AppResult<()> {
        let storage = self.storage()?;
        let bucket = checked_bucket(bucket)?;
        if !is_valid_object_path(path) {
            return Err(AppError::InvalidInput("Invalid file path".into()));
        }
        storage.delete(bucket, path).await
    }
}

fn checked_bucket(bucket: &str) -> AppResult<&str> {
    let bucket = bucket.trim();
    if !is_valid_object_path(bucket) || bucket.contains('/') {
        return Err(AppError::InvalidInput("Invalid bucket name".into()));
    }
    Ok(bucket)
}

fn checked_folder(folder: &str) -> AppResult<&str> {
    let folder = folder.trim().trim_end_matches('/');
    if !folder.is_empty() && !is_valid_object_path(folder) {
        return Err(AppError::InvalidInput("Invalid folder".into()));
    }
    Ok(folder)
}

/// `[folder/]<epoch-ms>-<file name>`, keeping only the last component of the
/// client-supplied name.
pub fn object_name(folder: &str, file_name: &str, now_ms: i64) -> String {
    let base = file_name
        .rsplit(['/', '\\'])
        .next()
        .filter(|name| !name.is_empty() && *name != "." && *name != "..")
        .unwrap_or("upload");
    if folder.is_empty() {
        format!("{now_ms}-{base}")
    } else {
        format!("{folder}/{now_ms}-{base}")
    }
}
