//! Container kinds: `arr`, `map` and `seq`.
//!
//! All three prepend their own segment to a nested failure's path, so a
//! bad element two levels down reports as e.g. `/arr/seq/int`.

use rx_core::{Map, Range, SchemaError, ValidationError, Value};

use super::{compile_schema_list, range_param, required_param, CoreType};
use crate::registry::Registry;
use crate::validator::Validator;

// ─── arr ─────────────────────────────────────────────────────────────

/// A homogeneous sequence: every element matches `contents`.
#[derive(Debug)]
pub struct ArrType {
    contents: Box<dyn Validator>,
    length: Option<Range>,
}

impl ArrType {
    pub(crate) fn new(schema: &Map, registry: &Registry) -> Result<Self, SchemaError> {
        let contents = registry.make_schema(required_param(schema, "contents", CoreType::Arr)?)?;
        let length = range_param(schema, "length")?;
        Ok(Self { contents, length })
    }
}

impl Validator for ArrType {
    fn type_uri(&self) -> &str {
        CoreType::Arr.uri()
    }

    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        let Value::Seq(items) = value else {
            return Err(ValidationError::new(
                format!("expected array got {value}"),
                "/arr",
            ));
        };

        if let Some(length) = &self.length {
            if !length.check_len(items.len()) {
                return Err(ValidationError::new(
                    format!(
                        "expected array with length in range {length} got {}",
                        items.len()
                    ),
                    "/arr",
                ));
            }
        }

        for item in items {
            self.contents
                .validate(item)
                .map_err(|e| e.prepend_path("/arr"))?;
        }
        Ok(())
    }
}

// ─── map ─────────────────────────────────────────────────────────────

/// A string-keyed map whose every value matches `values`. Keys are
/// unconstrained.
#[derive(Debug)]
pub struct MapType {
    values: Box<dyn Validator>,
}

impl MapType {
    pub(crate) fn new(schema: &Map, registry: &Registry) -> Result<Self, SchemaError> {
        let values = registry.make_schema(required_param(schema, "values", CoreType::Map)?)?;
        Ok(Self { values })
    }
}

impl Validator for MapType {
    fn type_uri(&self) -> &str {
        CoreType::Map.uri()
    }

    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        let Value::Map(map) = value else {
            return Err(ValidationError::new(
                format!("expected map got {value}"),
                "/map",
            ));
        };
        for entry in map.values() {
            self.values
                .validate(entry)
                .map_err(|e| e.prepend_path("/map"))?;
        }
        Ok(())
    }
}

// ─── seq ─────────────────────────────────────────────────────────────

/// A positional sequence: element `i` matches `contents[i]`. Any elements
/// past the end of `contents` are handed, as one sub-sequence, to `tail`.
#[derive(Debug)]
pub struct SeqType {
    contents: Vec<Box<dyn Validator>>,
    tail: Option<Box<dyn Validator>>,
}

impl SeqType {
    pub(crate) fn new(schema: &Map, registry: &Registry) -> Result<Self, SchemaError> {
        let contents = compile_schema_list(
            required_param(schema, "contents", CoreType::Seq)?,
            "contents",
            CoreType::Seq,
            registry,
        )?;
        let tail = schema
            .get("tail")
            .map(|tail| registry.make_schema(tail))
            .transpose()?;
        Ok(Self { contents, tail })
    }
}

impl Validator for SeqType {
    fn type_uri(&self) -> &str {
        CoreType::Seq.uri()
    }

    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        let Value::Seq(items) = value else {
            return Err(ValidationError::new(
                format!("expected array got {value}"),
                "/seq",
            ));
        };

        let want = self.contents.len();
        if items.len() < want {
            return Err(ValidationError::new(
                format!("expected at least {want} elements got {}", items.len()),
                "/seq",
            ));
        }

        for (schema, item) in self.contents.iter().zip(items) {
            schema.validate(item).map_err(|e| e.prepend_path("/seq"))?;
        }

        if items.len() > want {
            let Some(tail) = &self.tail else {
                return Err(ValidationError::new(
                    format!("expected no more than {want} elements got {}", items.len()),
                    "/seq",
                ));
            };
            tail.validate(&Value::Seq(items[want..].to_vec()))
                .map_err(|e| e.prepend_path("/seq"))?;
        }

        Ok(())
    }
}
