// File: src/config/mod.rs
pub mod manager;
use serde::{Deserialize, Serialize};
pub use manager::ConfigManager;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_agent_name")]
    pub agent_name: String,
    #[serde(default = "default_agent_seed")]
    pub agent_seed: String,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// CORS allow-list; empty (or containing "*") means any origin.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
    #[serde(default)]
    pub rate_limit: RateLimitSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitSettings {
    #[serde(default = "default_max_requests")]
    pub max_requests: u32,
    #[serde(default = "default_window_seconds")]
    pub window_seconds: u64,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_agent_name() -> String {
    "emrys-defi-agent".to_string()
}

fn default_agent_seed() -> String {
    "emrys_protocol_info_agent_seed".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_max_requests() -> u32 {
    30
}

// 60 minute window
fn default_window_seconds() -> u64 {
    3600
}

fn default_enabled() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            agent_name: default_agent_name(),
            agent_seed: default_agent_seed(),
            host: default_host(),
            port: default_port(),
            allowed_origins: Vec::new(),
            rate_limit: RateLimitSettings::default(),
        }
    }
}

impl Default for RateLimitSettings {
    fn default() -> Self {
        Self {
            max_requests: default_max_requests(),
            window_seconds: default_window_seconds(),
            enabled: default_enabled(),
        }
    }
}
