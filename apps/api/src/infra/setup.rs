use std::fs::File;
use std::sync::{Arc, Mutex};

use reqwest::Client;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    adapters::{
        ai::OpenAiTextGenerator,
        http::app_state::AppState,
        persistence::{file::FileWaitlistRepo, supabase::SupabaseWaitlistRepo},
        storage::SupabaseStorage,
    },
    domain::entities::service::{BackendKind, OptionalService},
    infra::{config::AppConfig, error::InfraError, http_client::build_client},
    use_cases::{
        ai::{AiUseCases, TextGenerator},
        storage::{FileStorage, StorageUseCases},
        waitlist::{WaitlistRepo, WaitlistUseCases},
    },
};

pub fn init_app_state() -> Result<AppState, InfraError> {
    let config = AppConfig::from_env()?;
    build_app_state(config)
}

pub fn build_app_state(config: AppConfig) -> Result<AppState, InfraError> {
    let client = build_client()?;

    let (waitlist_repo, backend) = select_waitlist_repo(&config, client.clone())?;

    let storage = config.supabase.as_ref().map(|supabase| {
        Arc::new(SupabaseStorage::new(
            client.clone(),
            supabase.url.clone(),
            supabase.api_key.clone(),
        )) as Arc<dyn FileStorage>
    });

    let generator = match &config.openai {
        Some(openai) => {
            let generator = OpenAiTextGenerator::new(
                client.clone(),
                &openai.base_url,
                openai.api_key.clone(),
                openai.model.clone(),
            )
            .map_err(|e| InfraError::invalid("OPENAI_BASE_URL", e))?;
            Some(Arc::new(generator) as Arc<dyn TextGenerator>)
        }
        None => None,
    };

    let storage_use_cases = StorageUseCases::new(storage);
    let ai_use_cases = AiUseCases::new(generator);

    info!(
        database = backend.label(),
        cloud_storage = OptionalService::CloudStorage.label(storage_use_cases.is_configured()),
        ai = OptionalService::Ai.label(ai_use_cases.is_configured()),
        "Services selected"
    );

    Ok(AppState {
        config: Arc::new(config),
        waitlist_use_cases: Arc::new(WaitlistUseCases::new(waitlist_repo, backend)),
        storage_use_cases: Arc::new(storage_use_cases),
        ai_use_cases: Arc::new(ai_use_cases),
    })
}

/// Picks the waitlist backend once for the life of the process: hosted when
/// its URL and key are configured, the local file otherwise.
pub fn select_waitlist_repo(
    config: &AppConfig,
    client: Client,
) -> Result<(Arc<dyn WaitlistRepo>, BackendKind), InfraError> {
    match &config.supabase {
        Some(supabase) => {
            let repo: Arc<dyn WaitlistRepo> = Arc::new(
                SupabaseWaitlistRepo::new(
                    client,
                    &supabase.url,
                    supabase.api_key.clone(),
                    &supabase.table,
                )
                .map_err(|e| InfraError::invalid("SUPABASE_TABLE", e))?,
            );
            info!(table = %supabase.table, "Using hosted waitlist backend");
            Ok((repo, BackendKind::Hosted))
        }
        None => {
            info!(path = %config.data_file.display(), "Using file waitlist backend");
            let repo: Arc<dyn WaitlistRepo> =
                Arc::new(FileWaitlistRepo::new(config.data_file.clone()));
            Ok((repo, BackendKind::File))
        }
    }
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "scedge_api=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .pretty();

    // File (structured JSON logs), skipped if the file cannot be created
    let json_layer = File::create("app.log").ok().map(|file| {
        fmt::layer()
            .json()
            .with_writer(Mutex::new(file))
            .with_current_span(true)
            .with_span_list(true)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();
}
