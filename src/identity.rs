// File: src/identity.rs
//! Stable agent identity derived from the configured seed.
//!
//! Callers receive the agent's address in every response so they can tell
//! which agent instance answered. The address is a deterministic function of
//! the seed: same seed, same address, across restarts and hosts.

use uuid::Uuid;

use crate::config::Config;

#[derive(Debug, Clone)]
pub struct AgentIdentity {
    pub name: String,
    pub address: String,
}

impl AgentIdentity {
    pub fn from_config(config: &Config) -> Self {
        Self {
            name: config.agent_name.clone(),
            address: derive_address(&config.agent_seed),
        }
    }
}

/// Derive a stable address from a seed string.
pub fn derive_address(seed: &str) -> String {
    let id = Uuid::new_v5(&Uuid::NAMESPACE_OID, seed.as_bytes());
    format!("agent-{}", id.simple())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_is_stable_for_a_seed() {
        let a = derive_address("emrys_protocol_info_agent_seed");
        let b = derive_address("emrys_protocol_info_agent_seed");
        assert_eq!(a, b);
        assert!(a.starts_with("agent-"));
    }

    #[test]
    fn different_seeds_give_different_addresses() {
        assert_ne!(derive_address("seed-one"), derive_address("seed-two"));
    }
}
