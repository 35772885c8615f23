//! In-memory mock implementation of `FileStorage`.

use async_trait::async_trait;
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::{
    app_error::AppResult,
    application::use_cases::storage::{FileStorage, StoredObject},
};

/// Objects keyed by `(bucket, path)`.
#[derive(Default)]
pub struct InMemoryFileStorage {
    pub objects: Mutex<BTreeMap<(String, String), Vec<u8>>>,
}

impl InMemoryFileStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, bucket: &str, path: &str) -> bool {
        self.objects
            .lock()
            .unwrap()
            .contains_key(&(bucket.to_string(), path.to_string()))
    }
}

#[async_trait]
impl FileStorage for InMemoryFileStorage {
    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        bytes: Vec<u8>,
        _content_type: &str,
    ) -> AppResult<StoredObject> {
        self.objects
            .lock()
            .unwrap()
            .insert((bucket.to_string(), path.to_string()), bytes);
        Ok(StoredObject {
            path: path.to_string(),
            url: format!("memory://{bucket}/{path}"),
        })
    }

    async fn list(&self, bucket: &str, folder: &str) -> AppResult<Vec<serde_json::Value>> {
        let prefix = if folder.is_empty() {
            String::new()
        } else {
            format!("{folder}/")
        };
        let objects = self.objects.lock().unwrap();
        Ok(objects
            .iter()
            .filter(|((b, path), _)| b == bucket && path.starts_with(&prefix))
            .map(|((_, path), bytes)| {
                json!({ "name": &path[prefix.len()..], "metadata": { "size": bytes.len() } })
            })
            .collect())
    }

    async fn delete(&self, bucket: &str, path: &str) -> AppResult<()> {
        self.objects
            .lock()
            .unwrap()
            .remove(&(bucket.to_string(), path.to_string()));
        Ok(())
    }
}
