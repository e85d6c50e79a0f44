mod config;
mod db;
mod dictation;
mod errors;
mod generation;
mod leads;
mod llm_client;
mod models;
mod routes;
mod settings;
mod state;
mod workbench;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::db::create_pool;
use crate::generation::Generator;
use crate::leads::PgLeadSource;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::settings::{FileSlotStorage, SettingsStore};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Outreach API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url)?;
    let lead_source = Arc::new(PgLeadSource::new(db, &config.leads_table));
    info!("Lead source: table \"{}\"", config.leads_table);

    // Initialize LLM client
    let llm = LlmClient::new(config.openai_base_url.clone())?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);
    let generator = Generator::new(Arc::new(llm), config.openai_api_key.clone());

    // Settings persist as one JSON slot under SETTINGS_DIR
    let settings = SettingsStore::new(Arc::new(FileSlotStorage::new(
        config.settings_dir.clone(),
    )));
    info!("Settings directory: {}", config.settings_dir.display());

    let state = AppState::new(lead_source, settings, generator);

    // Initial load. A failure leaves the directory empty; clients retry via /leads/refresh.
    match state.directory.refresh(state.lead_source.as_ref()).await {
        Ok(total) => info!("Loaded {total} leads"),
        Err(e) => warn!("Initial lead load failed: {e}"),
    }

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
