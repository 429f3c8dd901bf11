// File: src/config/manager.rs
use super::Config;
use crate::errors::ConfigError;
use anyhow::Result;
use std::sync::Arc;
use tokio::fs;
use tracing::{info, warn};

pub struct ConfigManager {
    current_config: Arc<Config>,
}

impl ConfigManager {
    /// Load configuration from a TOML file, then apply environment overrides.
    /// A missing file is not an error: the agent can run entirely from
    /// defaults and environment variables, matching its deployment targets.
    pub async fn new(config_path: &str) -> Result<Self> {
        let mut config = Self::load_configuration(config_path).await?;
        apply_overrides(&mut config, |name| std::env::var(name).ok());
        Ok(Self {
            current_config: Arc::new(config),
        })
    }

    pub fn get_current_config(&self) -> Arc<Config> {
        self.current_config.clone()
    }

    async fn load_configuration(config_path: &str) -> Result<Config, ConfigError> {
        match fs::read_to_string(config_path).await {
            Ok(content) => {
                let config: Config =
                    toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                        reason: format!("{}: {}", config_path, e),
                    })?;
                info!("Configuration loaded from {}", config_path);
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!(
                    "Config file {} not found, using defaults and environment variables",
                    config_path
                );
                Ok(Config::default())
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path: config_path.to_string(),
                reason: e.to_string(),
            }),
        }
    }
}

/// Apply deployment environment overrides on top of the file configuration.
/// Takes a lookup function so tests can drive it without touching the
/// process environment.
pub fn apply_overrides<F>(config: &mut Config, get: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(name) = get("AGENT_NAME") {
        config.agent_name = name;
    }
    if let Some(seed) = get("AGENT_SEED") {
        config.agent_seed = seed;
    }
    if let Some(host) = get("AGENT_HOST") {
        config.host = host;
    }
    if let Some(port) = get("PORT") {
        match port.parse::<u16>() {
            Ok(port) => config.port = port,
            Err(_) => warn!("Ignoring unparseable PORT override: {}", port),
        }
    }
    if let Some(origins) = get("ALLOWED_ORIGINS") {
        config.allowed_origins = origins
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let config =
            tokio_test::block_on(ConfigManager::load_configuration("/nope/agent.toml")).unwrap();
        assert_eq!(config.agent_name, "emrys-defi-agent");
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("agent.toml");
        std::fs::write(&path, "port = \"oops\"").unwrap();

        let result =
            tokio_test::block_on(ConfigManager::load_configuration(path.to_str().unwrap()));
        match result {
            Err(ConfigError::ParseError { reason }) => assert!(reason.contains("port")),
            other => panic!("expected ParseError, got {:?}", other.map(|c| c.port)),
        }
    }

    #[test]
    fn overrides_without_env_leave_config_untouched() {
        let mut config = Config::default();
        let before = config.port;
        apply_overrides(&mut config, |_| None);
        assert_eq!(config.port, before);
    }
}
