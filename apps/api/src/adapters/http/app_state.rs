use std::sync::Arc;

use crate::{
    infra::config::AppConfig,
    use_cases::{ai::AiUseCases, storage::StorageUseCases, waitlist::WaitlistUseCases},
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub waitlist_use_cases: Arc<WaitlistUseCases>,
    pub storage_use_cases: Arc<StorageUseCases>,
    pub ai_use_cases: Arc<AiUseCases>,
}
