use std::sync::Arc;

use async_trait::async_trait;
use scedge_types::WaitlistEntry;
use tracing::{info, instrument};

use crate::{
    app_error::AppResult,
    domain::entities::{service::BackendKind, waitlist_email::WaitlistEmail},
};

pub const DUPLICATE_EMAIL_MESSAGE: &str = "Email already exists";

/// Storage contract every waitlist backend satisfies.
///
/// Implementations own their duplicate check: `create` fails with
/// `AppError::Conflict` when the normalized email is already present.
/// `list` returns entries newest first.
#[async_trait]
pub trait WaitlistRepo: Send + Sync {
    async fn create(&self, email: &WaitlistEmail) -> AppResult<WaitlistEntry>;
    async fn list(&self) -> AppResult<Vec<WaitlistEntry>>;
    async fn clear_all(&self) -> AppResult<()>;
}

#[derive(Clone)]
pub struct WaitlistUseCases {
    repo: Arc<dyn WaitlistRepo>,
    backend: BackendKind,
}

impl WaitlistUseCases {
    pub fn new(repo: Arc<dyn WaitlistRepo>, backend: BackendKind) -> Self {
        Self { repo, backend }
    }

    pub fn backend(&self) -> BackendKind {
        self.backend
    }

    #[instrument(skip(self, email), fields(backend = self.backend.as_str()))]
    pub async fn join(&self, email: WaitlistEmail) -> AppResult<WaitlistEntry> {
        let entry = self.repo.create(&email).await?;
        info!(entry_id = %entry.id, "Waitlist entry created");
        Ok(entry)
    }

    #[instrument(skip(self), fields(backend = self.backend.as_str()))]
    pub async fn list_entries(&self) -> AppResult<Vec<WaitlistEntry>> {
        self.repo.list().await
    }

    #[instrument(skip(self), fields(backend = self.backend.as_str()))]
    pub async fn clear_all(&self) -> AppResult<()> {
        self.repo.clear_all().await?;
        info!("Waitlist cleared");
        Ok(())
    }
}
