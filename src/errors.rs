//! Custom error types for the info agent
//!
//! Provides structured error handling with context for different failure scenarios.

use std::fmt;

/// Resolver error variants
///
/// Both variants are recoverable and reported back to the caller as
/// structured values; the resolver performs no I/O and has no retryable
/// failure modes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Unknown protocol name, carries the offending input for diagnostics
    NotFound { input: String },

    /// Empty or missing protocol name / question
    InvalidInput { reason: String },
}

/// Catalog validation error variants
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Alias points at a canonical key that is not in the entry table
    AliasTargetMissing { alias: String, target: String },

    /// Two entries share the same canonical key
    DuplicateKey { key: String },
}

/// Configuration error variants
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to load configuration file
    LoadFailed { path: String, reason: String },

    /// Configuration parsing error
    ParseError { reason: String },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::NotFound { input } => {
                write!(f, "No information available for protocol '{}'", input)
            }
            ResolveError::InvalidInput { reason } => {
                write!(f, "Invalid input: {}", reason)
            }
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::AliasTargetMissing { alias, target } => {
                write!(
                    f,
                    "Alias '{}' maps to '{}' which is not in the protocol table",
                    alias, target
                )
            }
            CatalogError::DuplicateKey { key } => {
                write!(f, "Duplicate canonical key '{}'", key)
            }
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::LoadFailed { path, reason } => {
                write!(f, "Failed to load config from '{}': {}", path, reason)
            }
            ConfigError::ParseError { reason } => {
                write!(f, "Failed to parse config: {}", reason)
            }
        }
    }
}

impl std::error::Error for ResolveError {}
impl std::error::Error for CatalogError {}
impl std::error::Error for ConfigError {}
