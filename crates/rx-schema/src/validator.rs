//! # Validator Contract
//!
//! Every compiled schema node implements [`Validator`]; every kind that can
//! be registered implements [`TypeConstructor`]. The registry only ever
//! talks to these two traits, so user-defined kinds plug in exactly like
//! the sixteen core kinds do.
//!
//! ## Result, not exceptions
//!
//! [`Validator::validate`] returns `Result<(), ValidationError>`; the
//! boolean [`Validator::check`] is a projection of that result. Nothing
//! is caught and discarded: a combinator that tries alternatives simply
//! inspects each `Result`.

use std::fmt;

use rx_core::{Map, SchemaError, ValidationError, Value};

use crate::registry::Registry;

/// A compiled, immutable checker for one schema occurrence.
///
/// Implementations must be `Send + Sync`: once compiled, a validator tree
/// is read-only and may be shared across threads.
pub trait Validator: fmt::Debug + Send + Sync {
    /// The fully qualified URI of this node's kind.
    fn type_uri(&self) -> &str;

    /// Check `value`, returning the failure detail on rejection.
    fn validate(&self, value: &Value) -> Result<(), ValidationError>;

    /// Check `value`, reporting only whether it was accepted.
    fn check(&self, value: &Value) -> bool {
        self.validate(value).is_ok()
    }
}

/// A registrable kind: knows its own URI and how to build a node from a
/// schema map.
pub trait TypeConstructor: Send + Sync {
    /// The URI this kind is registered under.
    fn uri(&self) -> &str;

    /// Build a validator from the full schema map (including its `type`
    /// key). Nested schemas are compiled through `registry`.
    fn construct(
        &self,
        schema: &Map,
        registry: &Registry,
    ) -> Result<Box<dyn Validator>, SchemaError>;
}

/// Reject any schema key outside `allowed`. The `type` key is always
/// permitted.
///
/// Kinds that take no parameters pass an empty allow-list, which accepts
/// only an empty map or a map holding just `type`.
pub fn check_params(schema: &Map, uri: &str, allowed: &[&str]) -> Result<(), SchemaError> {
    match schema
        .keys()
        .find(|key| key.as_str() != "type" && !allowed.contains(&key.as_str()))
    {
        Some(param) => Err(SchemaError::UnknownParameter {
            param: param.clone(),
            uri: uri.to_string(),
        }),
        None => Ok(()),
    }
}
