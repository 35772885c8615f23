//! In-memory mock implementations of `WaitlistRepo`.

use async_trait::async_trait;
use std::sync::Mutex;
use uuid::Uuid;

use crate::{
    app_error::{AppError, AppResult},
    application::use_cases::waitlist::{DUPLICATE_EMAIL_MESSAGE, WaitlistRepo},
    domain::entities::waitlist_email::WaitlistEmail,
};
use scedge_types::WaitlistEntry;

/// In-memory implementation of WaitlistRepo for testing. Keeps entries
/// newest first, like both real backends.
#[derive(Default)]
pub struct InMemoryWaitlistRepo {
    pub entries: Mutex<Vec<WaitlistEntry>>,
}

impl InMemoryWaitlistRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all entries (for test assertions).
    pub fn get_all(&self) -> Vec<WaitlistEntry> {
        self.entries.lock().unwrap().clone()
    }
}

#[async_trait]
impl WaitlistRepo for InMemoryWaitlistRepo {
    async fn create(&self, email: &WaitlistEmail) -> AppResult<WaitlistEntry> {
        let mut entries = self.entries.lock().unwrap();

        if entries.iter().any(|e| email.matches(&e.email)) {
            return Err(AppError::Conflict(DUPLICATE_EMAIL_MESSAGE.into()));
        }

        // Strictly increasing so ordering assertions never tie.
        let timestamp = entries
            .first()
            .map(|newest| newest.timestamp + 1)
            .unwrap_or_else(|| chrono::Utc::now().timestamp_millis());
        let entry = WaitlistEntry {
            id: Uuid::new_v4().to_string(),
            email: email.as_str().to_string(),
            timestamp,
        };
        entries.insert(0, entry.clone());
        Ok(entry)
    }

    async fn list(&self) -> AppResult<Vec<WaitlistEntry>> {
        Ok(self.get_all())
    }

    async fn clear_all(&self) -> AppResult<()> {
        self.entries.lock().unwrap().clear();
        Ok(())
    }
}

/// Backend whose every operation fails as if the store were unreachable.
pub struct FailingWaitlistRepo;

#[async_trait]
impl WaitlistRepo for FailingWaitlistRepo {
    async fn create(&self, _email: &WaitlistEmail) -> AppResult<WaitlistEntry> {
        Err(AppError::Unavailable("disk on fire".into()))
    }

    async fn list(&self) -> AppResult<Vec<WaitlistEntry>> {
        Err(AppError::Unavailable("disk on fire".into()))
    }

    async fn clear_all(&self) -> AppResult<()> {
        Err(AppError::Unavailable("disk on fire".into()))
    }
}
