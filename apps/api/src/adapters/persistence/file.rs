use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use scedge_types::WaitlistEntry;
use tokio::{fs, sync::Mutex};
use uuid::Uuid;

use crate::{
    app_error::{AppError, AppResult},
    domain::entities::waitlist_email::WaitlistEmail,
    use_cases::waitlist::{DUPLICATE_EMAIL_MESSAGE, WaitlistRepo},
};

/// Waitlist stored as one pretty-printed JSON array on local disk, newest first.
///
/// Every mutation writes the whole document to a sibling `.tmp` file and
/// renames it over the original, so readers never see a partial write. The
/// in-process lock serializes
/// read-modify-write cycles within this server; separate processes sharing
/// the file are not coordinated and the last full write wins.
pub struct FileWaitlistRepo {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileWaitlistRepo {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the document as an empty array on first access.
    async fn ensure_initialized(&self) -> AppResult<()> {
        if !fs::try_exists(&self.path).await? {
            tracing::info!(path = %self.path.display(), "Initializing waitlist data file");
            self.write_all(&[]).await?;
        }
        Ok(())
    }

    async fn read_all(&self) -> AppResult<Vec<WaitlistEntry>> {
        self.ensure_initialized().await?;
        let raw = fs::read(&self.path).await?;
        serde_json::from_slice(&raw).map_err(|err| {
            tracing::error!(path = %self.path.display(), error = %err, "Waitlist data file is corrupt");
            AppError::Unavailable("Waitlist data file is unreadable".into())
        })
    }

    async fn write_all(&self, entries: &[WaitlistEntry]) -> AppResult<()> {
        let json = serde_json::to_vec_pretty(entries)
            .map_err(|err| AppError::Internal(err.to_string()))?;
        let tmp = self.tmp_path();
        fs::write(&tmp, json).await?;
        fs::rename(&tmp, &self.path).await?;
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }
}

#[async_trait]
impl WaitlistRepo for FileWaitlistRepo {
    async fn create(&self, email: &WaitlistEmail) -> AppResult<WaitlistEntry> {
        let _guard = self.lock.lock().await;
        let mut entries = self.read_all().await?;

        if entries.iter().any(|entry| email.matches(&entry.email)) {
            return Err(AppError::Conflict(DUPLICATE_EMAIL_MESSAGE.into()));
        }

        let entry = WaitlistEntry {
            id: Uuid::new_v4().to_string(),
            email: email.as_str().to_string(),
            timestamp: Utc::now().timestamp_millis(),
        };
        entries.insert(0, entry.clone());
        self.write_all(&entries).await?;
        Ok(entry)
    }

    async fn list(&self) -> AppResult<Vec<WaitlistEntry>> {
        let _guard = self.lock.lock().await;
        self.read_all().await
    }

    async fn clear_all(&self) -> AppResult<()> {
        let _guard = self.lock.lock().await;
        self.write_all(&[]).await
    }
}
