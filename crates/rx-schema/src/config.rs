//! # Registry Configuration
//!
//! A declarative description of a registry's setup phase: which prefixes
//! to add and which types to learn. It is plain serde data, so a host can
//! read it from whatever format it already uses and hand it to
//! [`Registry::from_config`].
//!
//! ```text
//! load_core: true
//! prefixes:
//!   ex: "tag:example.com,2026:"
//! types:
//!   - uri: "tag:example.com,2026:pos"
//!     schema: { type: //int, range: { min-ex: 0 } }
//! ```
//!
//! Types are learned in declaration order; a later entry may refer to an
//! earlier one.

use std::collections::BTreeMap;

use rx_core::{SchemaError, Value};
use serde::{Deserialize, Serialize};

use crate::registry::Registry;

/// Setup-phase description of a registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
    /// Preload the sixteen core kinds.
    pub load_core: bool,
    /// Extra shorthand prefixes, name to base URI.
    pub prefixes: BTreeMap<String, String>,
    /// Types to learn, in order.
    pub types: Vec<LearnedType>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            load_core: true,
            prefixes: BTreeMap::new(),
            types: Vec::new(),
        }
    }
}

/// One learned type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LearnedType {
    /// Full URI the alias is registered under.
    pub uri: String,
    /// The schema the URI stands for.
    pub schema: Value,
}

impl Registry {
    /// Build a registry from a configuration.
    ///
    /// # Errors
    ///
    /// Returns the first `SchemaError` raised while adding a prefix or
    /// learning a type, wrapped as `SchemaError::Config` naming the entry
    /// that failed and carrying the original error as its source.
    pub fn from_config(config: &RegistryConfig) -> Result<Self, SchemaError> {
        let mut registry = if config.load_core {
            Registry::new()
        } else {
            Registry::bare()
        };

        for (name, base) in &config.prefixes {
            registry
                .add_prefix(name.as_str(), base.as_str())
                .map_err(|e| SchemaError::Config {
                    entry: format!("prefix '{name}'"),
                    source: Box::new(e),
                })?;
        }

        for learned in &config.types {
            registry
                .learn_type(learned.uri.as_str(), learned.schema.clone())
                .map_err(|e| SchemaError::Config {
                    entry: format!("type {}", learned.uri),
                    source: Box::new(e),
                })?;
        }

        tracing::debug!(
            prefixes = config.prefixes.len(),
            types = config.types.len(),
            load_core = config.load_core,
            "built registry from config"
        );
        Ok(registry)
    }
}
