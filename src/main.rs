//! SearchDeck: one search box in front of several upstream search APIs
//!
//! This is the main entry point for the application.

use anyhow::Result;
use searchdeck::{
    config,
    network::HttpClient,
    providers::ProviderLoader,
    web::{create_router, AppState},
};
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, reload, util::SubscriberInitExt};

const INFO_FILTER: &str = "searchdeck=info,tower_http=info";
const DEBUG_FILTER: &str = "searchdeck=debug,tower_http=debug";

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up API keys from a local .env file, if there is one
    dotenvy::dotenv().ok();

    // Initialize logging before anything else logs. `RUST_LOG` wins; otherwise
    // the filter is raised to debug once settings say so.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().ok();
    let from_env = env_filter.is_some();
    let (filter, filter_handle) = reload::Layer::new(
        env_filter.unwrap_or_else(|| tracing_subscriber::EnvFilter::new(INFO_FILTER)),
    );
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Load configuration
    let settings = config::load()?;

    if settings.general.debug && !from_env {
        filter_handle.reload(tracing_subscriber::EnvFilter::new(DEBUG_FILTER))?;
    }

    info!("Starting SearchDeck v{}", searchdeck::VERSION);
    info!(
        "Loaded configuration for instance: {}",
        settings.general.instance_name
    );

    // Initialize HTTP client
    let client = HttpClient::with_settings(&settings.outgoing)?;

    // Load providers
    let registry = ProviderLoader::load(&settings)?;

    // Create application state
    let state = AppState::new(settings.clone(), registry, client)?;

    // Create router
    let app = create_router(state);

    // Bind address
    let addr = SocketAddr::new(settings.server.bind_address.parse()?, settings.server.port);

    info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
