//! # Records — `rec`
//!
//! A record is a string-keyed map with named fields. Each field is either
//! required or optional and carries its own schema; fields not declared
//! at all are "rest" fields, collected into a sub-map and checked against
//! the optional `rest` schema.
//!
//! ## Path Replacement
//!
//! Unlike the other containers, a record *replaces* the nested failure path
//! instead of prepending to it: a bad field reports as `/rec:'<field>'` and
//! a bad rest map reports as `/rec`, whatever the nested schema said. Error
//! consumers match on these exact strings, so the inner detail is dropped.

use std::collections::BTreeMap;

use rx_core::{Map, SchemaError, ValidationError, Value};

use super::{invalid_param, CoreType};
use crate::registry::Registry;
use crate::validator::Validator;

/// A declared record field.
#[derive(Debug)]
pub struct RecField {
    /// Whether the field must be present.
    pub required: bool,
    /// Schema the field's value must satisfy.
    pub schema: Box<dyn Validator>,
}

/// A record with declared fields and an optional schema for the rest.
#[derive(Debug)]
pub struct RecType {
    fields: BTreeMap<String, RecField>,
    rest: Option<Box<dyn Validator>>,
}

impl RecType {
    pub(crate) fn new(schema: &Map, registry: &Registry) -> Result<Self, SchemaError> {
        let mut fields = BTreeMap::new();

        for (name, field_schema) in field_map(schema, "required")? {
            fields.insert(
                name.clone(),
                RecField {
                    required: true,
                    schema: registry.make_schema(field_schema)?,
                },
            );
        }

        for (name, field_schema) in field_map(schema, "optional")? {
            if fields.contains_key(name) {
                return Err(SchemaError::DuplicateField {
                    field: name.clone(),
                });
            }
            fields.insert(
                name.clone(),
                RecField {
                    required: false,
                    schema: registry.make_schema(field_schema)?,
                },
            );
        }

        let rest = schema
            .get("rest")
            .map(|rest| registry.make_schema(rest))
            .transpose()?;

        Ok(Self { fields, rest })
    }

    /// Declared fields, by name.
    pub fn fields(&self) -> &BTreeMap<String, RecField> {
        &self.fields
    }
}

/// Read `required`/`optional`, which must be a map when present.
fn field_map<'a>(schema: &'a Map, param: &str) -> Result<&'a Map, SchemaError> {
    static EMPTY: Map = Map::new();
    match schema.get(param) {
        None => Ok(&EMPTY),
        Some(Value::Map(map)) => Ok(map),
        Some(other) => Err(invalid_param(
            param,
            CoreType::Rec,
            format!("expected a map of field schemas, got {other}"),
        )),
    }
}

fn quoted_keys<'a>(keys: impl Iterator<Item = &'a String>) -> String {
    keys.map(|k| format!("'{k}'")).collect::<Vec<_>>().join(", ")
}

impl Validator for RecType {
    fn type_uri(&self) -> &str {
        CoreType::Rec.uri()
    }

    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        let Value::Map(map) = value else {
            return Err(ValidationError::new(
                format!("expected map got {value}"),
                "/rec",
            ));
        };

        let mut rest = Map::new();
        for (key, entry) in map {
            match self.fields.get(key) {
                Some(field) => field
                    .schema
                    .validate(entry)
                    .map_err(|e| e.with_path(format!("/rec:'{key}'")))?,
                None => {
                    rest.insert(key.clone(), entry.clone());
                }
            }
        }

        if let Some(missing) = self
            .fields
            .iter()
            .find(|(name, field)| field.required && !map.contains_key(*name))
            .map(|(name, _)| name)
        {
            return Err(ValidationError::new(
                format!(
                    "expected key '{missing}' in [{}]",
                    quoted_keys(map.keys())
                ),
                "/rec",
            ));
        }

        if rest.is_empty() {
            return Ok(());
        }
        match &self.rest {
            None => Err(ValidationError::new(
                format!("unexpected keys: [{}]", quoted_keys(rest.keys())),
                "/rec",
            )),
            Some(rest_schema) => rest_schema
                .validate(&Value::Map(rest))
                .map_err(|e| e.with_path("/rec")),
        }
    }
}
