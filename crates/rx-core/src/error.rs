//! # Error Types — Validation vs. Definition Failures
//!
//! The engine has two disjoint failure kinds, and this module keeps them as
//! two distinct types so they can never be confused at a call site.
//!
//! ## Design
//!
//! - [`ValidationError`] is produced only while checking a value. It carries
//!   a message and a slash-delimited location path that enclosing validators
//!   extend as the failure propagates outward. Its `Display` form is exactly
//!   `"<message> (<path>)"`.
//! - [`SchemaError`] is produced only while compiling a schema or mutating a
//!   registry. It is never converted into a boolean: a malformed schema is
//!   reported before any value is checked.

use thiserror::Error;

// ─── Validation ──────────────────────────────────────────────────────

/// A value failed to satisfy a compiled schema.
///
/// The path starts empty. The innermost failing validator sets it to its own
/// segment (for example `/int`) and each enclosing container either prepends
/// its segment or replaces the path outright.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message} ({path})")]
pub struct ValidationError {
    message: String,
    path: String,
}

impl ValidationError {
    /// Create a validation error at the given path.
    pub fn new(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: path.into(),
        }
    }

    /// Create a validation error whose path has not been set yet.
    pub fn without_path(message: impl Into<String>) -> Self {
        Self::new(message, String::new())
    }

    /// Human-readable description of the failure.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Location breadcrumb, e.g. `/all/int`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Prepend an enclosing segment to the existing path.
    #[must_use]
    pub fn prepend_path(mut self, segment: &str) -> Self {
        self.path.insert_str(0, segment);
        self
    }

    /// Replace the path entirely, discarding any nested detail.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }
}

// ─── Definition ──────────────────────────────────────────────────────

/// A schema or registry definition is malformed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// The schema is neither a type-name string nor a map with a string `type`.
    #[error("invalid type: {found}")]
    InvalidType {
        /// Rendering of the offending schema value.
        found: String,
    },

    /// A type name is neither a URI nor of the form `/prefix/name`.
    #[error("couldn't understand type name '{name}'")]
    BadTypeName {
        /// The type name as written.
        name: String,
    },

    /// A `/prefix/name` type name used a prefix that was never registered.
    #[error("unknown prefix '{prefix}' in type name '{name}'")]
    UnknownPrefix {
        /// The unregistered prefix.
        prefix: String,
        /// The type name as written.
        name: String,
    },

    /// No type is registered under the expanded URI.
    #[error("unknown type {uri}")]
    UnknownType {
        /// Fully expanded type URI.
        uri: String,
    },

    /// A learned (alias) type was given parameters besides `type`.
    #[error("composed type does not take check arguments: {uri}")]
    ComposedTypeArguments {
        /// URI of the learned type.
        uri: String,
    },

    /// A schema map carries a key outside its kind's allow-list.
    #[error("unknown parameter {param} for {uri}")]
    UnknownParameter {
        /// The unrecognized key.
        param: String,
        /// URI of the kind being constructed.
        uri: String,
    },

    /// A parameter the kind cannot work without is absent.
    #[error("no {param} given for {uri}")]
    MissingParameter {
        /// The required key.
        param: String,
        /// URI of the kind being constructed.
        uri: String,
    },

    /// A parameter is present but has the wrong shape or value.
    #[error("invalid {param} parameter for {uri}: {reason}")]
    InvalidParameter {
        /// The offending key.
        param: String,
        /// URI of the kind being constructed.
        uri: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A record field is declared both required and optional.
    #[error("{field} appears in both required and optional")]
    DuplicateField {
        /// The doubly-declared field name.
        field: String,
    },

    /// A type URI is already present in the registry.
    #[error("tried to register already-registered type {uri}")]
    DuplicateType {
        /// The already-registered URI.
        uri: String,
    },

    /// A URI prefix name is already present in the registry.
    #[error("the prefix '{prefix}' is already registered")]
    DuplicatePrefix {
        /// The already-registered prefix name.
        prefix: String,
    },

    /// A range specification uses a key other than the four bounds.
    #[error("illegal argument {key} to range")]
    UnknownRangeBound {
        /// The unrecognized key.
        key: String,
    },

    /// A range bound is present but unusable.
    #[error("invalid range bound {key}: {reason}")]
    InvalidRangeBound {
        /// The bound key.
        key: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A registry configuration entry could not be applied.
    #[error("registry configuration entry {entry}: {source}")]
    Config {
        /// The failing entry: `prefix '<name>'` or `type <uri>`.
        entry: String,
        /// The error raised while applying it.
        #[source]
        source: Box<SchemaError>,
    },
}
