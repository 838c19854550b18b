use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use trade_oracle::api::{run_server, AppState};
use trade_oracle::services::simulation::{spawn_interval_ticks, SimulationService};
use trade_oracle::{AppConfig, LLMClient, Oracle};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenvy::dotenv().ok();

    // Setup Logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting Trade Oracle...");

    // Load Configuration
    let config = AppConfig::load()?;
    info!(
        "Loaded Configuration: tick={}ms window={} digest={} auto_threshold={}",
        config.simulation.tick_interval_ms,
        config.simulation.window_size,
        config.counsel.digest_size,
        config.counsel.auto_trigger_threshold
    );

    if config.llm.api_key.is_none() {
        warn!("⚠️ No LLM API key configured - counsel requests will fail over to the static fallback");
    }
    if let Some(url) = &config.llm.base_url {
        info!("Using Custom OpenAI Base URL: {}", url);
    }
    info!("Using LLM Model: {}", config.llm.model);

    let llm = Arc::new(LLMClient::from_config(&config.llm));
    let oracle = Oracle::from_config(&config, llm);

    // Start the simulated feed
    let (ticks, _ticker) = spawn_interval_ticks(config.simulation.tick_interval());
    let _feed = SimulationService::new(oracle.clone()).start(ticks);

    // Start API Server
    let state = Arc::new(AppState { oracle });
    run_server(state, &config.server.bind_addr).await?;

    Ok(())
}
