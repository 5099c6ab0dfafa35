//! # rx-schema — Structural Schema Validation
//!
//! Compiles declarative Rx schemas (themselves generic data) into trees of
//! validators, and checks generic values against those trees.
//!
//! ## Compilation (`registry`)
//!
//! The [`Registry`] owns a URI → type table and a shorthand prefix table.
//! [`Registry::make_schema`] resolves a schema's `type`, follows learned
//! aliases, and asks the kind to build its node, which in turn compiles
//! its nested schemas through the same registry. Malformed schemas fail
//! here with a [`SchemaError`], before any value is checked.
//!
//! ## Validation (`validator`)
//!
//! Every node implements [`Validator`]. [`Validator::validate`] returns a
//! [`ValidationError`] carrying a message and a location path such as
//! `/all/int` or `/rec:'name'`; [`Validator::check`] is its boolean form.
//!
//! ## Core Kinds (`types`)
//!
//! `all`, `any`, `arr`, `bool`, `date`, `def`, `fail`, `int`, `map`, `nil`,
//! `num`, `one`, `rec`, `seq`, `str`, `time`, all under
//! `tag:codesimply.com,2008:rx/core/`.
//!
//! ## Example
//!
//! ```
//! use rx_schema::{compile, Validator, Value};
//! use serde_json::json;
//!
//! let schema = Value::from(json!({
//!     "type": "//rec",
//!     "required": {"name": "//str"},
//!     "optional": {"age": {"type": "//int", "range": {"min": 0}}}
//! }));
//! let validator = compile(&schema).unwrap();
//!
//! assert!(validator.check(&Value::from(json!({"name": "Ada", "age": 36}))));
//! let err = validator.validate(&Value::from(json!({"name": "Ada", "age": -1}))).unwrap_err();
//! assert_eq!(err.path(), "/rec:'age'");
//! ```
//!
//! ## Crate Policy
//!
//! - Depends only on `rx-core` internally.
//! - No `.unwrap()` or `.expect()` outside tests, except when building the
//!   two fixed type-name regexes in `registry`, which cannot fail.
//! - Core kind URIs are part of the schema language and never change.
//! - Error paths are a compatibility surface: records replace nested
//!   paths, every other container prepends to them.

pub mod config;
pub mod registry;
pub mod types;
pub mod validator;

pub use config::{LearnedType, RegistryConfig};
pub use registry::{compile, Registry, TypeEntry, CORE_NAMESPACE, META_NAMESPACE};
pub use types::{core_types, CoreType, CORE_TYPES};
pub use validator::{check_params, TypeConstructor, Validator};

pub use rx_core::{Map, Number, Range, SchemaError, ValidationError, Value};
