// File: src/main.rs
use anyhow::Result;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use emrys_agent::config::ConfigManager;
use emrys_agent::faq::FaqRouter;
use emrys_agent::health::HealthChecker;
use emrys_agent::identity::AgentIdentity;
use emrys_agent::protocols::ProtocolRegistry;
use emrys_agent::web::rate_limit::{self, RateLimitConfig, RateLimiter};
use emrys_agent::web::{start_web_server, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging with reduced verbosity
    let env_filter = EnvFilter::from_default_env()
        .add_directive("emrys_agent=info".parse()?)
        .add_directive("tower_http=warn".parse()?)
        .add_directive("hyper=warn".parse()?);

    fmt().with_env_filter(env_filter).init();

    info!("Starting Emrys Protocol Info Agent");

    // Load configuration
    let config_path =
        std::env::var("AGENT_CONFIG").unwrap_or_else(|_| "config/agent.toml".to_string());
    let config_manager = ConfigManager::new(&config_path).await?;
    let config = config_manager.get_current_config();

    // Build the static protocol registry; alias invariants are validated here
    let registry = Arc::new(ProtocolRegistry::bundled()?);
    info!(
        "Protocol catalog loaded: {} protocols",
        registry.len()
    );

    let identity = Arc::new(AgentIdentity::from_config(&config));
    info!(
        "Agent identity: {} ({})",
        identity.name, identity.address
    );

    let faq = Arc::new(FaqRouter::new(registry.clone()));
    let health = Arc::new(HealthChecker::new(registry.clone()));

    let rate_limiter = Arc::new(RateLimiter::new(RateLimitConfig::from(&config.rate_limit)));
    rate_limit::start_cleanup_task(rate_limiter.clone());
    info!(
        "Rate limiting {}: {} requests per {}s window",
        if config.rate_limit.enabled {
            "enabled"
        } else {
            "disabled"
        },
        config.rate_limit.max_requests,
        config.rate_limit.window_seconds
    );

    let state = AppState::new(
        config.clone(),
        registry,
        faq,
        health,
        identity,
        rate_limiter,
    );

    start_web_server(state).await?;

    Ok(())
}
