//! Test app state builder for HTTP-level testing.
//!
//! `TestAppStateBuilder` creates an `AppState` whose ports are in-memory
//! mocks. Optional services stay unconfigured unless a mock is supplied.

use std::path::PathBuf;
use std::sync::Arc;

use crate::{
    adapters::http::app_state::AppState,
    application::use_cases::{
        ai::{AiUseCases, TextGenerator},
        storage::{FileStorage, StorageUseCases},
        waitlist::{WaitlistRepo, WaitlistUseCases},
    },
    domain::entities::service::BackendKind,
    infra::config::{AppConfig, DEFAULT_MAX_UPLOAD_BYTES},
    test_utils::InMemoryWaitlistRepo,
};

/// Builder for creating `AppState` with in-memory mocks for testing.
///
/// # Example
///
/// ```ignore
/// let repo = Arc::new(InMemoryWaitlistRepo::new());
/// let app_state = TestAppStateBuilder::new()
///     .with_waitlist_repo(repo.clone())
///     .with_text_generator(Arc::new(StubTextGenerator::replying("hi")))
///     .build();
/// ```
pub struct TestAppStateBuilder {
    waitlist_repo: Arc<dyn WaitlistRepo>,
    backend: BackendKind,
    storage: Option<Arc<dyn FileStorage>>,
    text_generator: Option<Arc<dyn TextGenerator>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self {
            waitlist_repo: Arc::new(InMemoryWaitlistRepo::new()),
            backend: BackendKind::File,
            storage: None,
            text_generator: None,
        }
    }

    pub fn with_waitlist_repo(mut self, repo: Arc<dyn WaitlistRepo>) -> Self {
        self.waitlist_repo = repo;
        self
    }

    /// Backend reported by health; defaults to the file backend.
    pub fn with_backend(mut self, backend: BackendKind) -> Self {
        self.backend = backend;
        self
    }

    pub fn with_storage(mut self, storage: Arc<dyn FileStorage>) -> Self {
        self.storage = Some(storage);
        self
    }

    pub fn with_text_generator(mut self, generator: Arc<dyn TextGenerator>) -> Self {
        self.text_generator = Some(generator);
        self
    }

    pub fn build(self) -> AppState {
        AppState {
            config: Arc::new(test_config()),
            waitlist_use_cases: Arc::new(WaitlistUseCases::new(self.waitlist_repo, self.backend)),
            storage_use_cases: Arc::new(StorageUseCases::new(self.storage)),
            ai_use_cases: Arc::new(AiUseCases::new(self.text_generator)),
        }
    }
}

/// Configuration with no hosted services and no explicit frontend origin.
pub fn test_config() -> AppConfig {
    AppConfig {
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        data_file: PathBuf::from("test-waitlist-data.json"),
        supabase: None,
        openai: None,
        frontend_url: None,
        max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
    }
}
