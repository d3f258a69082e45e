mod config;
mod db;
mod errors;
mod llm_client;
mod routes;
mod state;
mod taxonomy;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::probe_reference_store;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::taxonomy::reconciler::AttributeReconciler;
use crate::taxonomy::reference_store::ReferenceStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting HS Attribute API v{}", env!("CARGO_PKG_VERSION"));

    // Reference store is opened per lookup; probe it once so problems show up at boot
    probe_reference_store(&config.database_path).await?;
    let store = ReferenceStore::new(&config.database_path);

    // Initialize LLM client
    let reconciler: Option<Arc<dyn AttributeReconciler>> = match &config.openai_api_key {
        Some(api_key) => {
            let llm = LlmClient::new(api_key.clone(), config.openai_base_url.clone())?;
            info!(
                "LLM client initialized (model: {}, base url: {})",
                config.openai_model, config.openai_base_url
            );
            Some(Arc::new(llm))
        }
        None => {
            warn!("OPENAI_API_KEY is not set; attribute generation requests will be refused");
            None
        }
    };

    info!("Prompt profile: {}", config.prompt_profile);

    // Build app state
    let state = AppState {
        store,
        reconciler,
        config: config.clone(),
    };

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
