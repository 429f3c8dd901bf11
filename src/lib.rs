pub mod config;
pub mod errors;
pub mod faq;
pub mod health;
pub mod identity;
pub mod protocols;
pub mod types;
pub mod web;

// Re-export commonly used types
pub use config::{Config, ConfigManager, RateLimitSettings};
pub use errors::{CatalogError, ConfigError, ResolveError};
pub use faq::{FaqAnswer, FaqRouter};
pub use health::{Canary, HealthChecker, HealthStatus};
pub use identity::AgentIdentity;
pub use protocols::{ProtocolEntry, ProtocolRegistry};
pub use web::AppState;
