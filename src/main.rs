//! Agent Gateway: an HTTP gateway for LLM document QA and coordinated
//! search agents.
//!
//! This is the main entry point for the application.

use agent_gateway::{
    agents::AgentLoader,
    config::Settings,
    network::HttpClient,
    web::{qa_router, search_router, AppState},
};
use anyhow::Result;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    info!("Starting agent-gateway v{}", agent_gateway::VERSION);

    // Load configuration
    let settings = load_settings()?;
    info!(
        "Loaded configuration for instance: {}",
        settings.general.instance_name
    );

    // Initialize HTTP client
    let client = HttpClient::with_settings(&settings.provider)?;
    info!("HTTP client initialized");

    // Load agents
    let registry = AgentLoader::load(&settings, &client);

    let bind_address: std::net::IpAddr = settings.server.bind_address.parse()?;
    let qa_addr = SocketAddr::new(bind_address, settings.server.qa_port);
    let search_addr = SocketAddr::new(bind_address, settings.server.search_port);

    // Create application state
    let state = AppState::new(settings, registry, client);
    info!("Application state initialized");

    // The two services are independent; they share state but bind
    // separate ports.
    let qa_app = qa_router(state.clone());
    let search_app = search_router(state);

    info!("Starting QA service on http://{}", qa_addr);
    info!("Starting search service on http://{}", search_addr);

    let qa_listener = tokio::net::TcpListener::bind(qa_addr).await?;
    let search_listener = tokio::net::TcpListener::bind(search_addr).await?;

    tokio::try_join!(
        async { axum::serve(qa_listener, qa_app).await },
        async { axum::serve(search_listener, search_app).await },
    )?;

    Ok(())
}

/// Load settings from file or use defaults
fn load_settings() -> Result<Settings> {
    // Check environment variable first
    if let Ok(path) = std::env::var("AGENT_GATEWAY_SETTINGS_PATH") {
        let path = PathBuf::from(path);
        if path.exists() {
            info!("Loading settings from: {}", path.display());
            let mut settings = Settings::from_file(&path)?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    let paths = [
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
        PathBuf::from("/etc/agent-gateway/settings.yml"),
        dirs::config_dir()
            .map(|p| p.join("agent-gateway/settings.yml"))
            .unwrap_or_default(),
    ];

    for path in paths.iter() {
        if path.exists() {
            info!("Loading settings from: {}", path.display());
            let mut settings = Settings::from_file(path)?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    // Use defaults
    info!("No settings file found, using defaults");
    let mut settings = Settings::default();
    settings.merge_env();
    Ok(settings)
}
