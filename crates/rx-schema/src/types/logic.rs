//! Combinator kinds: `all`, `any` and `fail`.

use rx_core::{Map, SchemaError, ValidationError, Value};

use super::{compile_schema_list, required_param, CoreType};
use crate::registry::Registry;
use crate::validator::Validator;

// ─── all ─────────────────────────────────────────────────────────────

/// Accepts a value only if every alternative accepts it.
#[derive(Debug)]
pub struct AllType {
    alts: Vec<Box<dyn Validator>>,
}

impl AllType {
    pub(crate) fn new(schema: &Map, registry: &Registry) -> Result<Self, SchemaError> {
        let of = required_param(schema, "of", CoreType::All)?;
        let alts = compile_schema_list(of, "of", CoreType::All, registry)?;
        Ok(Self { alts })
    }
}

impl Validator for AllType {
    fn type_uri(&self) -> &str {
        CoreType::All.uri()
    }

    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        for alt in &self.alts {
            alt.validate(value).map_err(|e| e.prepend_path("/all"))?;
        }
        Ok(())
    }
}

// ─── any ─────────────────────────────────────────────────────────────

/// Accepts a value if any alternative accepts it. With no `of`, accepts
/// everything.
#[derive(Debug)]
pub struct AnyType {
    alts: Option<Vec<Box<dyn Validator>>>,
}

impl AnyType {
    pub(crate) fn new(schema: &Map, registry: &Registry) -> Result<Self, SchemaError> {
        let alts = schema
            .get("of")
            .map(|of| compile_schema_list(of, "of", CoreType::Any, registry))
            .transpose()?;
        Ok(Self { alts })
    }
}

impl Validator for AnyType {
    fn type_uri(&self) -> &str {
        CoreType::Any.uri()
    }

    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        let Some(alts) = &self.alts else {
            return Ok(());
        };
        // Individual alternative failures are not reported.
        if alts.iter().any(|alt| alt.check(value)) {
            return Ok(());
        }
        Err(ValidationError::new("expected one to match", "/any"))
    }
}

// ─── fail ────────────────────────────────────────────────────────────

/// Rejects every value.
#[derive(Debug)]
pub struct FailType;

impl Validator for FailType {
    fn type_uri(&self) -> &str {
        CoreType::Fail.uri()
    }

    fn validate(&self, _value: &Value) -> Result<(), ValidationError> {
        Err(ValidationError::new("explicit fail", "/fail"))
    }

    fn check(&self, _value: &Value) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use crate::registry::Registry;
    use crate::validator::Validator;
    use rx_core::{SchemaError, Value};
    use serde_json::json;

    fn compile(schema: serde_json::Value) -> Box<dyn Validator> {
        Registry::new().make_schema(&Value::from(schema)).unwrap()
    }

    fn v(json: serde_json::Value) -> Value {
        Value::from(json)
    }

    #[test]
    fn test_all_accepts_when_every_alt_accepts() {
        let all = compile(json!({"type": "//all", "of": ["//num", "//int"]}));
        assert!(all.validate(&v(json!(3))).is_ok());
    }

    #[test]
    fn test_all_prepends_its_segment() {
        let all = compile(json!({"type": "//all", "of": ["//num", "//int"]}));
        let err = all.validate(&v(json!(3.5))).unwrap_err();
        assert_eq!(err.path(), "/all/int");
        assert!(err.message().starts_with("expected Integer"));
    }

    #[test]
    fn test_all_reports_first_failure() {
        let all = compile(json!({"type": "//all", "of": ["//str", "//int"]}));
        let err = all.validate(&v(json!(3.5))).unwrap_err();
        assert_eq!(err.path(), "/all/str");
    }

    #[test]
    fn test_all_requires_non_empty_of() {
        let reg = Registry::new();
        let err = reg
            .make_schema(&v(json!({"type": "//all", "of": []})))
            .unwrap_err();
        assert!(matches!(err, SchemaError::InvalidParameter { ref param, .. } if param == "of"));
        let err = reg.make_schema(&v(json!({"type": "//all"}))).unwrap_err();
        assert!(matches!(err, SchemaError::MissingParameter { ref param, .. } if param == "of"));
    }

    #[test]
    fn test_any_first_match_wins() {
        let any = compile(json!({"type": "//any", "of": ["//int", "//str"]}));
        assert!(any.validate(&v(json!(1))).is_ok());
        assert!(any.validate(&v(json!("x"))).is_ok());
        let err = any.validate(&v(json!(true))).unwrap_err();
        assert_eq!(err.path(), "/any");
        assert_eq!(err.message(), "expected one to match");
    }

    #[test]
    fn test_any_without_of_accepts_everything() {
        let any = compile(json!("//any"));
        for value in [json!(null), json!(1), json!("x"), json!([1]), json!({"a": 1})] {
            assert!(any.check(&v(value)));
        }
    }

    #[test]
    fn test_any_with_empty_of_is_rejected() {
        let err = Registry::new()
            .make_schema(&v(json!({"type": "//any", "of": []})))
            .unwrap_err();
        assert!(matches!(err, SchemaError::InvalidParameter { .. }));
    }

    #[test]
    fn test_fail_rejects_everything() {
        let fail = compile(json!("//fail"));
        assert!(!fail.check(&v(json!(null))));
        assert!(!fail.check(&v(json!(1))));
        let err = fail.validate(&v(json!("x"))).unwrap_err();
        assert_eq!(err.to_string(), "explicit fail (/fail)");
    }

    #[test]
    fn test_fail_as_any_alternative() {
        let any = compile(json!({"type": "//any", "of": ["//fail", "//nil"]}));
        assert!(any.check(&v(json!(null))));
        assert!(!any.check(&v(json!(0))));
    }
}
