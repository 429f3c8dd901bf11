// File: src/health.rs
//! Liveness checking via canary lookups.
//!
//! The agent is healthy only if a small fixed set of canary protocol names
//! (one per supported chain family) resolves and the result contains the
//! expected text. Resolution failures are treated as unhealthy and never
//! propagate out of the checker.

use std::sync::Arc;

use serde::Serialize;
use tracing::warn;

use crate::protocols::ProtocolRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HealthStatus::Healthy => write!(f, "healthy"),
            HealthStatus::Unhealthy => write!(f, "unhealthy"),
        }
    }
}

/// A canary lookup: the query to resolve and the text its result must contain.
#[derive(Debug, Clone)]
pub struct Canary {
    pub query: String,
    pub expect: String,
}

impl Canary {
    pub fn new(query: &str, expect: &str) -> Self {
        Self {
            query: query.to_string(),
            expect: expect.to_string(),
        }
    }
}

pub struct HealthChecker {
    registry: Arc<ProtocolRegistry>,
    canaries: Vec<Canary>,
}

impl HealthChecker {
    /// Default canary set: one Solana-family protocol, one Cosmos-family
    /// protocol, and the SVM execution environment.
    pub fn new(registry: Arc<ProtocolRegistry>) -> Self {
        let canaries = vec![
            Canary::new("solend", "Solend"),
            Canary::new("osmosis", "Osmosis"),
            Canary::new("svm", "SVM"),
        ];
        Self::with_canaries(registry, canaries)
    }

    pub fn with_canaries(registry: Arc<ProtocolRegistry>, canaries: Vec<Canary>) -> Self {
        Self { registry, canaries }
    }

    /// An empty canary set is unhealthy: a liveness probe that checks
    /// nothing proves nothing.
    pub fn is_healthy(&self) -> bool {
        if self.canaries.is_empty() {
            warn!("Health check has no canaries configured");
            return false;
        }

        self.canaries.iter().all(|canary| {
            match self.registry.resolve(&canary.query) {
                Ok(entry) => {
                    let hit = entry.name.contains(&canary.expect)
                        || entry.description.contains(&canary.expect);
                    if !hit {
                        warn!(
                            "Canary '{}' resolved to {} but result lacks '{}'",
                            canary.query, entry.key, canary.expect
                        );
                    }
                    hit
                }
                Err(e) => {
                    warn!("Canary '{}' failed to resolve: {}", canary.query, e);
                    false
                }
            }
        })
    }

    pub fn status(&self) -> HealthStatus {
        if self.is_healthy() {
            HealthStatus::Healthy
        } else {
            HealthStatus::Unhealthy
        }
    }
}
