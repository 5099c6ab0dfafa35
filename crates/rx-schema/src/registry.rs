//! # Type Registry & Schema Compilation
//!
//! The [`Registry`] maps type URIs to either a [`TypeConstructor`] (a kind
//! that builds validator nodes) or a learned alias (a raw schema that the
//! URI stands for). [`Registry::make_schema`] is the compilation entry
//! point: it turns a generic schema value into a validator tree.
//!
//! ## Type Names
//!
//! A type name is either a full URI (anything matching `^\w+:`) or a
//! shorthand `/prefix/name` that is expanded through the prefix table:
//!
//! | Prefix | Expands to |
//! |---|---|
//! | `""` (so `//int`) | `tag:codesimply.com,2008:rx/core/` |
//! | `".meta"` | `tag:codesimply.com,2008:rx/meta/` |
//!
//! ## Lifecycle
//!
//! A registry is set up once (`add_prefix`, `register_type`,
//! `learn_type`, all `&mut self`) and then only read. Because every
//! mutation needs exclusive access, a registry shared behind `&` or `Arc`
//! is read-only by construction, and both the registry and the validator
//! trees it produces are `Send + Sync`. Hosts that need to set up from
//! several threads wrap the registry in a `Mutex`.
//!
//! ## Aliases
//!
//! `learn_type` compiles the alias schema eagerly, so a malformed alias is
//! rejected when learned rather than when first used. Since every type an
//! alias names must already be registered at that point, and URIs are
//! never re-registered, alias chains cannot form a cycle.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

use regex::Regex;
use rx_core::{Map, SchemaError, Value};

use crate::types::core_types;
use crate::validator::{TypeConstructor, Validator};

/// Base URI of the core kinds.
pub const CORE_NAMESPACE: &str = "tag:codesimply.com,2008:rx/core/";

/// Base URI of the meta namespace.
pub const META_NAMESPACE: &str = "tag:codesimply.com,2008:rx/meta/";

// Fixed literals: the only non-test `expect` calls in the crate.

fn uri_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\w+:").expect("static URI pattern"))
}

fn shorthand_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^/(.*?)/(.+)$").expect("static shorthand pattern"))
}

// ─── Type Entries ────────────────────────────────────────────────────

/// What a registered URI stands for.
#[derive(Clone)]
pub enum TypeEntry {
    /// A kind that constructs validator nodes.
    Builtin(Arc<dyn TypeConstructor>),
    /// A learned type: the raw, uncompiled schema it abbreviates.
    Alias(Value),
}

impl fmt::Debug for TypeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin(ctor) => f.debug_tuple("Builtin").field(&ctor.uri()).finish(),
            Self::Alias(schema) => f.debug_tuple("Alias").field(schema).finish(),
        }
    }
}

// ─── Registry ────────────────────────────────────────────────────────

/// Type table and prefix table for one validation session.
#[derive(Debug, Clone)]
pub struct Registry {
    types: HashMap<String, TypeEntry>,
    prefixes: HashMap<String, String>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Create a registry with the default prefixes and all sixteen core
    /// kinds registered.
    pub fn new() -> Self {
        let mut registry = Self::bare();
        for core in core_types() {
            registry
                .types
                .insert(core.uri().to_string(), TypeEntry::Builtin(Arc::new(*core)));
        }
        registry
    }

    /// Create a registry with the default prefixes and no types.
    pub fn bare() -> Self {
        let prefixes = HashMap::from([
            (String::new(), CORE_NAMESPACE.to_string()),
            (".meta".to_string(), META_NAMESPACE.to_string()),
        ]);
        Self {
            types: HashMap::new(),
            prefixes,
        }
    }

    /// Expand a type name to its full URI.
    ///
    /// # Errors
    ///
    /// - `SchemaError::BadTypeName` if `name` is neither a URI nor
    ///   `/prefix/name`.
    /// - `SchemaError::UnknownPrefix` if the prefix is not registered.
    pub fn expand_uri(&self, name: &str) -> Result<String, SchemaError> {
        if uri_pattern().is_match(name) {
            return Ok(name.to_string());
        }

        let caps = shorthand_pattern()
            .captures(name)
            .ok_or_else(|| SchemaError::BadTypeName {
                name: name.to_string(),
            })?;
        let prefix = &caps[1];
        let rest = &caps[2];

        let base = self
            .prefixes
            .get(prefix)
            .ok_or_else(|| SchemaError::UnknownPrefix {
                prefix: prefix.to_string(),
                name: name.to_string(),
            })?;
        Ok(format!("{base}{rest}"))
    }

    /// Register a new shorthand prefix.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::DuplicatePrefix` if `name` is already taken.
    pub fn add_prefix(
        &mut self,
        name: impl Into<String>,
        base: impl Into<String>,
    ) -> Result<(), SchemaError> {
        let name = name.into();
        if self.prefixes.contains_key(&name) {
            return Err(SchemaError::DuplicatePrefix { prefix: name });
        }
        let base = base.into();
        tracing::debug!(prefix = %name, base = %base, "added type prefix");
        self.prefixes.insert(name, base);
        Ok(())
    }

    /// Register a kind under its own URI.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::DuplicateType` if the URI is already present.
    pub fn register_type<T>(&mut self, ctor: T) -> Result<(), SchemaError>
    where
        T: TypeConstructor + 'static,
    {
        let uri = ctor.uri().to_string();
        if self.types.contains_key(&uri) {
            return Err(SchemaError::DuplicateType { uri });
        }
        tracing::debug!(uri = %uri, "registered type");
        self.types.insert(uri, TypeEntry::Builtin(Arc::new(ctor)));
        Ok(())
    }

    /// Learn `schema` as an alias under `uri`.
    ///
    /// The schema is compiled once here to prove it is well formed; the
    /// result is discarded and the raw schema is stored.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::DuplicateType` if `uri` is already present, or
    /// any error from compiling `schema`.
    pub fn learn_type(
        &mut self,
        uri: impl Into<String>,
        schema: impl Into<Value>,
    ) -> Result<(), SchemaError> {
        let uri = uri.into();
        if self.types.contains_key(&uri) {
            return Err(SchemaError::DuplicateType { uri });
        }
        let schema = schema.into();
        self.make_schema(&schema)?;
        tracing::debug!(uri = %uri, "learned type");
        self.types.insert(uri, TypeEntry::Alias(schema));
        Ok(())
    }

    /// Compile a schema into a validator tree.
    ///
    /// A bare string is shorthand for `{type: <string>}`. Otherwise the
    /// schema must be a map whose `type` is a string. Aliases take no
    /// parameters and resolve recursively; kinds receive the full schema
    /// map and compile their own nested schemas through `self`.
    ///
    /// # Errors
    ///
    /// Any `SchemaError`: malformed schema, unknown type or prefix,
    /// unknown/missing/invalid parameter.
    pub fn make_schema(&self, schema: &Value) -> Result<Box<dyn Validator>, SchemaError> {
        let shorthand;
        let map: &Map = match schema {
            Value::String(_) => {
                shorthand = Map::from([("type".to_string(), schema.clone())]);
                &shorthand
            }
            Value::Map(map) => map,
            other => {
                return Err(SchemaError::InvalidType {
                    found: other.to_string(),
                })
            }
        };

        let type_name = map
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| SchemaError::InvalidType {
                found: schema.to_string(),
            })?;

        let uri = self.expand_uri(type_name)?;
        let entry = self
            .types
            .get(&uri)
            .ok_or_else(|| SchemaError::UnknownType { uri: uri.clone() })?;

        tracing::trace!(uri = %uri, "compiling schema");

        match entry {
            TypeEntry::Alias(raw) => {
                if map.keys().any(|key| key != "type") {
                    return Err(SchemaError::ComposedTypeArguments { uri });
                }
                self.make_schema(raw)
            }
            TypeEntry::Builtin(ctor) => ctor.construct(map, self),
        }
    }

    /// Whether `uri` (already expanded) is registered.
    pub fn has_type(&self, uri: &str) -> bool {
        self.types.contains_key(uri)
    }

    /// All registered URIs, sorted.
    pub fn type_uris(&self) -> Vec<&str> {
        let mut uris: Vec<&str> = self.types.keys().map(String::as_str).collect();
        uris.sort_unstable();
        uris
    }

    /// Look up the base URI of a prefix.
    pub fn prefix(&self, name: &str) -> Option<&str> {
        self.prefixes.get(name).map(String::as_str)
    }
}

/// Compile one schema against a fresh registry preloaded with the core
/// kinds.
pub fn compile(schema: &Value) -> Result<Box<dyn Validator>, SchemaError> {
    Registry::new().make_schema(schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CoreType;
    use rx_core::ValidationError;
    use serde_json::json;

    fn v(json: serde_json::Value) -> Value {
        Value::from(json)
    }

    #[test]
    fn test_static_name_patterns_compile() {
        assert!(uri_pattern().is_match("tag:example.com,2026:x"));
        assert!(!uri_pattern().is_match("//int"));
        let caps = shorthand_pattern().captures("/ex/pos").unwrap();
        assert_eq!((&caps[1], &caps[2]), ("ex", "pos"));
        assert!(shorthand_pattern().captures("int").is_none());
    }

    #[test]
    fn test_new_registers_all_core_types() {
        let reg = Registry::new();
        assert_eq!(reg.type_uris().len(), 16);
        for core in core_types() {
            assert!(reg.has_type(core.uri()), "missing {}", core.uri());
        }
    }

    #[test]
    fn test_bare_has_prefixes_but_no_types() {
        let reg = Registry::bare();
        assert!(reg.type_uris().is_empty());
        assert_eq!(reg.prefix(""), Some(CORE_NAMESPACE));
        assert_eq!(reg.prefix(".meta"), Some(META_NAMESPACE));
        let err = reg.make_schema(&v(json!("//int"))).unwrap_err();
        assert!(matches!(err, SchemaError::UnknownType { .. }));
    }

    #[test]
    fn test_expand_uri_full_uri_unchanged() {
        let reg = Registry::new();
        assert_eq!(
            reg.expand_uri("tag:example.com,2026:thing").unwrap(),
            "tag:example.com,2026:thing"
        );
    }

    #[test]
    fn test_expand_uri_shorthand() {
        let reg = Registry::new();
        assert_eq!(
            reg.expand_uri("//int").unwrap(),
            "tag:codesimply.com,2008:rx/core/int"
        );
        assert_eq!(
            reg.expand_uri("/.meta/schema").unwrap(),
            "tag:codesimply.com,2008:rx/meta/schema"
        );
    }

    #[test]
    fn test_expand_uri_errors() {
        let reg = Registry::new();
        assert!(matches!(
            reg.expand_uri("int").unwrap_err(),
            SchemaError::BadTypeName { .. }
        ));
        assert!(matches!(
            reg.expand_uri("/nope/int").unwrap_err(),
            SchemaError::UnknownPrefix { ref prefix, .. } if prefix == "nope"
        ));
    }

    #[test]
    fn test_add_prefix() {
        let mut reg = Registry::new();
        reg.add_prefix("ex", "tag:example.com,2026:").unwrap();
        assert_eq!(reg.expand_uri("/ex/pos").unwrap(), "tag:example.com,2026:pos");
        let err = reg.add_prefix("ex", "tag:other:").unwrap_err();
        assert_eq!(err, SchemaError::DuplicatePrefix { prefix: "ex".into() });
        let err = reg.add_prefix("", "tag:other:").unwrap_err();
        assert!(matches!(err, SchemaError::DuplicatePrefix { .. }));
    }

    #[test]
    fn test_make_schema_string_shorthand_matches_map_form() {
        let reg = Registry::new();
        let a = reg.make_schema(&v(json!("//str"))).unwrap();
        let b = reg.make_schema(&v(json!({"type": "//str"}))).unwrap();
        assert_eq!(a.type_uri(), b.type_uri());
        for value in [json!("x"), json!(1)] {
            let value = v(value);
            assert_eq!(a.check(&value), b.check(&value));
        }
    }

    #[test]
    fn test_make_schema_invalid_type() {
        let reg = Registry::new();
        for bad in [json!(1), json!(null), json!([]), json!({}), json!({"type": 3})] {
            let err = reg.make_schema(&v(bad)).unwrap_err();
            assert!(matches!(err, SchemaError::InvalidType { .. }), "{err}");
        }
    }

    #[test]
    fn test_make_schema_unknown_type() {
        let err = Registry::new().make_schema(&v(json!("//float"))).unwrap_err();
        assert_eq!(
            err,
            SchemaError::UnknownType {
                uri: "tag:codesimply.com,2008:rx/core/float".into()
            }
        );
    }

    #[test]
    fn test_every_core_kind_rejects_unknown_parameter() {
        let reg = Registry::new();
        for core in core_types() {
            let err = reg
                .make_schema(&v(json!({"type": core.uri(), "bogus": true})))
                .unwrap_err();
            assert_eq!(
                err,
                SchemaError::UnknownParameter {
                    param: "bogus".into(),
                    uri: core.uri().into()
                },
                "{}",
                core.subname()
            );
        }
    }

    #[test]
    fn test_register_type_duplicate() {
        let mut reg = Registry::new();
        let err = reg.register_type(CoreType::Int).unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateType { .. }));
    }

    #[derive(Debug)]
    struct EvenType;

    impl Validator for EvenType {
        fn type_uri(&self) -> &str {
            "tag:example.com,2026:even"
        }

        fn validate(&self, value: &Value) -> Result<(), ValidationError> {
            match value.as_number() {
                Some(rx_core::Number::Int(i)) if i % 2 == 0 => Ok(()),
                _ => Err(ValidationError::new(format!("expected even got {value}"), "/even")),
            }
        }
    }

    struct EvenCtor;

    impl TypeConstructor for EvenCtor {
        fn uri(&self) -> &str {
            "tag:example.com,2026:even"
        }

        fn construct(
            &self,
            schema: &Map,
            _registry: &Registry,
        ) -> Result<Box<dyn Validator>, SchemaError> {
            crate::validator::check_params(schema, self.uri(), &[])?;
            Ok(Box::new(EvenType))
        }
    }

    #[test]
    fn test_register_custom_type() {
        let mut reg = Registry::new();
        reg.add_prefix("ex", "tag:example.com,2026:").unwrap();
        reg.register_type(EvenCtor).unwrap();

        let arr = reg
            .make_schema(&v(json!({"type": "//arr", "contents": "/ex/even"})))
            .unwrap();
        assert!(arr.check(&v(json!([2, 4]))));
        assert_eq!(arr.validate(&v(json!([2, 3]))).unwrap_err().path(), "/arr/even");
        assert!(matches!(
            reg.register_type(EvenCtor).unwrap_err(),
            SchemaError::DuplicateType { .. }
        ));
    }

    #[test]
    fn test_learn_type_behaves_like_inlined_schema() {
        let pos = json!({"type": "//int", "range": {"min-ex": 0}});
        let mut reg = Registry::new();
        reg.add_prefix("ex", "tag:example.com,2026:").unwrap();
        reg.learn_type("tag:example.com,2026:pos", v(pos.clone())).unwrap();

        let learned = reg.make_schema(&v(json!("/ex/pos"))).unwrap();
        let inlined = reg.make_schema(&v(pos)).unwrap();
        for value in [json!(1), json!(0), json!(-3), json!(2.5), json!("x")] {
            let value = v(value);
            assert_eq!(learned.validate(&value), inlined.validate(&value));
        }
    }

    #[test]
    fn test_learn_type_duplicate_uri() {
        let mut reg = Registry::new();
        reg.learn_type("tag:example.com,2026:x", v(json!("//int"))).unwrap();
        let err = reg
            .learn_type("tag:example.com,2026:x", v(json!("//str")))
            .unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateType { .. }));
        let err = reg
            .learn_type(CoreType::Str.uri(), v(json!("//int")))
            .unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateType { .. }));
    }

    #[test]
    fn test_learn_type_validates_eagerly() {
        let mut reg = Registry::new();
        let err = reg
            .learn_type("tag:example.com,2026:bad", v(json!({"type": "//int", "of": []})))
            .unwrap_err();
        assert!(matches!(err, SchemaError::UnknownParameter { .. }));
        assert!(!reg.has_type("tag:example.com,2026:bad"));
    }

    #[test]
    fn test_learn_type_cannot_reference_itself() {
        let mut reg = Registry::new();
        let err = reg
            .learn_type("tag:example.com,2026:loop", v(json!("tag:example.com,2026:loop")))
            .unwrap_err();
        assert!(matches!(err, SchemaError::UnknownType { .. }));
    }

    #[test]
    fn test_alias_chain() {
        let mut reg = Registry::new();
        reg.learn_type("tag:example.com,2026:a", v(json!("//int"))).unwrap();
        reg.learn_type("tag:example.com,2026:b", v(json!("tag:example.com,2026:a"))).unwrap();
        let b = reg.make_schema(&v(json!("tag:example.com,2026:b"))).unwrap();
        assert!(b.check(&v(json!(3))));
        assert_eq!(b.validate(&v(json!(3.5))).unwrap_err().path(), "/int");
    }

    #[test]
    fn test_alias_rejects_arguments() {
        let mut reg = Registry::new();
        reg.learn_type("tag:example.com,2026:a", v(json!("//int"))).unwrap();
        let err = reg
            .make_schema(&v(json!({"type": "tag:example.com,2026:a", "range": {"min": 0}})))
            .unwrap_err();
        assert_eq!(
            err,
            SchemaError::ComposedTypeArguments {
                uri: "tag:example.com,2026:a".into()
            }
        );
    }

    #[test]
    fn test_compile_convenience() {
        let bools = compile(&v(json!({"type": "//arr", "contents": "//bool"}))).unwrap();
        assert!(bools.check(&v(json!([true, false]))));
        assert!(compile(&v(json!("//nope"))).is_err());
    }

    #[test]
    fn test_registry_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Registry>();
        assert_send_sync::<Box<dyn Validator>>();
    }
}
