// File: src/protocols/mod.rs
pub mod catalog;
pub mod resolver;

pub use resolver::ProtocolRegistry;

/// A single entry in the static protocol table.
///
/// Entries are baked into the binary and never mutated after startup; the
/// registry hands out references into the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolEntry {
    /// Canonical identifier, upper-case with underscores (e.g. `SOON_SVM`)
    pub key: &'static str,
    /// Human-readable protocol name
    pub name: &'static str,
    /// Multi-paragraph description returned to callers
    pub description: &'static str,
}
