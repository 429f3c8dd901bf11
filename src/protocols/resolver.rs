// File: src/protocols/resolver.rs
//! Protocol name resolution against the static catalog.
//!
//! Lookup is a pure function over immutable tables: normalize, exact alias
//! match, exact key match, then an ordered substring fallback. First match
//! wins at every stage, so results are deterministic for a given table order.

use tracing::debug;

use super::{catalog, ProtocolEntry};
use crate::errors::{CatalogError, ResolveError};

pub struct ProtocolRegistry {
    entries: Vec<ProtocolEntry>,
    // normalized alias -> canonical key, validated against `entries`
    aliases: Vec<(String, &'static str)>,
}

impl ProtocolRegistry {
    /// Build a registry from explicit tables, validating the alias invariant:
    /// every alias target must exist as a canonical key.
    pub fn from_tables(
        entries: Vec<ProtocolEntry>,
        aliases: Vec<(&'static str, &'static str)>,
    ) -> Result<Self, CatalogError> {
        for entry in &entries {
            if entries.iter().filter(|e| e.key == entry.key).count() > 1 {
                return Err(CatalogError::DuplicateKey {
                    key: entry.key.to_string(),
                });
            }
        }

        let mut normalized_aliases = Vec::with_capacity(aliases.len());
        for (alias, target) in aliases {
            if !entries.iter().any(|e| e.key == target) {
                return Err(CatalogError::AliasTargetMissing {
                    alias: alias.to_string(),
                    target: target.to_string(),
                });
            }
            normalized_aliases.push((alias.trim().to_uppercase(), target));
        }

        Ok(Self {
            entries,
            aliases: normalized_aliases,
        })
    }

    /// Registry over the catalog bundled with the agent.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_tables(catalog::entries(), catalog::aliases())
    }

    /// Resolve a raw, user-supplied protocol name to a catalog entry.
    ///
    /// Matching stages, in order:
    /// 1. exact match against the alias table (normalized input)
    /// 2. exact match against canonical keys
    /// 3. substring fallback in table order: input contained in a key, or a
    ///    key contained in the input
    pub fn resolve(&self, raw: &str) -> Result<&ProtocolEntry, ResolveError> {
        let normalized = raw.trim().to_uppercase();
        if normalized.is_empty() {
            return Err(ResolveError::InvalidInput {
                reason: "protocol name is empty".to_string(),
            });
        }

        if let Some(entry) = self.lookup_normalized(&normalized) {
            return Ok(entry);
        }

        if let Some(entry) = self
            .entries
            .iter()
            .find(|e| e.key.contains(normalized.as_str()) || normalized.contains(e.key))
        {
            debug!("Substring fallback matched '{}' to {}", raw, entry.key);
            return Ok(entry);
        }

        Err(ResolveError::NotFound {
            input: raw.to_string(),
        })
    }

    /// Exact-only lookup (alias or canonical key), no substring fallback.
    /// Used by the FAQ router so arbitrary chat words cannot fuzzy-match.
    pub fn lookup_exact(&self, raw: &str) -> Option<&ProtocolEntry> {
        let normalized = raw.trim().to_uppercase();
        if normalized.is_empty() {
            return None;
        }
        self.lookup_normalized(&normalized)
    }

    fn lookup_normalized(&self, normalized: &str) -> Option<&ProtocolEntry> {
        let key = self
            .aliases
            .iter()
            .find(|(alias, _)| alias == normalized)
            .map(|(_, key)| *key);

        match key {
            Some(key) => self.entries.iter().find(|e| e.key == key),
            None => self.entries.iter().find(|e| e.key == normalized),
        }
    }

    pub fn entries(&self) -> &[ProtocolEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> ProtocolRegistry {
        ProtocolRegistry::bundled().unwrap()
    }

    #[test]
    fn every_canonical_key_resolves_to_itself() {
        let registry = registry();
        for entry in catalog::entries() {
            let resolved = registry.resolve(entry.key).unwrap();
            assert_eq!(resolved, &entry, "key {} did not round-trip", entry.key);
        }
    }

    #[test]
    fn aliases_resolve_to_their_targets() {
        let registry = registry();
        for (alias, target) in catalog::aliases() {
            let via_alias = registry.resolve(alias).unwrap();
            let via_key = registry.resolve(target).unwrap();
            assert_eq!(via_alias, via_key, "alias {} diverged from {}", alias, target);
        }
    }

    #[test]
    fn lookup_is_case_and_whitespace_insensitive() {
        let registry = registry();
        assert_eq!(registry.resolve("osmosis").unwrap().key, "OSMOSIS");
        assert_eq!(registry.resolve("  Soon svm  ").unwrap().key, "SOON_SVM");
        assert_eq!(registry.resolve("ibc protocol").unwrap().key, "IBC");
    }

    #[test]
    fn empty_input_is_invalid_not_a_panic() {
        let registry = registry();
        assert!(matches!(
            registry.resolve(""),
            Err(ResolveError::InvalidInput { .. })
        ));
        assert!(matches!(
            registry.resolve("   "),
            Err(ResolveError::InvalidInput { .. })
        ));
    }

    #[test]
    fn unknown_input_carries_the_original_text() {
        let registry = registry();
        match registry.resolve("totally-unknown-xyz") {
            Err(ResolveError::NotFound { input }) => {
                assert_eq!(input, "totally-unknown-xyz");
            }
            other => panic!("expected NotFound, got {:?}", other.map(|e| e.key)),
        }
    }

    #[test]
    fn exact_key_match_beats_substring_fallback() {
        let registry = registry();
        // SOON_SVM contains "SVM" and sits earlier in the table, but the
        // exact stage must win.
        assert_eq!(registry.resolve("SVM").unwrap().key, "SVM");
        // ZPL_UTXO_BRIDGE contains "UTXO" and sits earlier in the table.
        assert_eq!(registry.resolve("UTXO").unwrap().key, "UTXO");
    }

    #[test]
    fn substring_fallback_is_first_match_in_table_order() {
        let registry = registry();
        // "SOON" is a substring of SOON_SVM only.
        assert_eq!(registry.resolve("SOON").unwrap().key, "SOON_SVM");
        // "BRIDGE" appears only in ZPL_UTXO_BRIDGE.
        assert_eq!(registry.resolve("bridge").unwrap().key, "ZPL_UTXO_BRIDGE");
        // Key contained in the input also matches.
        assert_eq!(
            registry.resolve("the OSMOSIS appchain").unwrap().key,
            "OSMOSIS"
        );
    }

    #[test]
    fn lookup_exact_ignores_substrings() {
        let registry = registry();
        assert!(registry.lookup_exact("SOON").is_none());
        assert_eq!(registry.lookup_exact("eth").unwrap().key, "ETHEREUM");
        assert_eq!(registry.lookup_exact("WALRUS").unwrap().key, "WALRUS");
    }

    #[test]
    fn alias_pointing_at_missing_key_is_rejected() {
        let entries = vec![ProtocolEntry {
            key: "IBC",
            name: "IBC",
            description: "IBC",
        }];
        let aliases = vec![("IBC PROTOCOL", "IBC"), ("GHOST", "MISSING")];
        match ProtocolRegistry::from_tables(entries, aliases) {
            Err(CatalogError::AliasTargetMissing { alias, target }) => {
                assert_eq!(alias, "GHOST");
                assert_eq!(target, "MISSING");
            }
            other => panic!("expected AliasTargetMissing, got {:?}", other.err()),
        }
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let entries = vec![
            ProtocolEntry {
                key: "IBC",
                name: "IBC",
                description: "a",
            },
            ProtocolEntry {
                key: "IBC",
                name: "IBC again",
                description: "b",
            },
        ];
        assert!(matches!(
            ProtocolRegistry::from_tables(entries, vec![]),
            Err(CatalogError::DuplicateKey { .. })
        ));
    }
}
