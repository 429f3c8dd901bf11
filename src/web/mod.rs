// File: src/web/mod.rs
pub mod handlers;
pub mod rate_limit;
pub mod server;

pub use server::{create_router, start_web_server};

use std::sync::Arc;

use crate::config::Config;
use crate::faq::FaqRouter;
use crate::health::HealthChecker;
use crate::identity::AgentIdentity;
use crate::protocols::ProtocolRegistry;
use rate_limit::RateLimiter;

// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub registry: Arc<ProtocolRegistry>,
    pub faq: Arc<FaqRouter>,
    pub health: Arc<HealthChecker>,
    pub identity: Arc<AgentIdentity>,
    pub rate_limiter: Arc<RateLimiter>,
}

impl AppState {
    pub fn new(
        config: Arc<Config>,
        registry: Arc<ProtocolRegistry>,
        faq: Arc<FaqRouter>,
        health: Arc<HealthChecker>,
        identity: Arc<AgentIdentity>,
        rate_limiter: Arc<RateLimiter>,
    ) -> Self {
        Self {
            config,
            registry,
            faq,
            health,
            identity,
            rate_limiter,
        }
    }
}
