//! Scalar kinds: `bool`, `date`, `def`, `nil`, `one`, `str`, `time`.
//!
//! All but `str` take no parameters; their allow-list is empty so a schema
//! carrying anything besides `type` never reaches these constructors.

use rx_core::{Map, Range, SchemaError, ValidationError, Value};

use super::{invalid_param, range_param, CoreType};
use crate::validator::Validator;

fn expected(kind: CoreType, what: &str, value: &Value) -> ValidationError {
    ValidationError::new(format!("expected {what} got {value}"), kind.path())
}

// ─── bool ────────────────────────────────────────────────────────────

/// Accepts exactly `true` or `false`.
#[derive(Debug)]
pub struct BoolType;

impl Validator for BoolType {
    fn type_uri(&self) -> &str {
        CoreType::Bool.uri()
    }

    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        match value {
            Value::Bool(_) => Ok(()),
            other => Err(expected(CoreType::Bool, "bool", other)),
        }
    }
}

// ─── date / time ─────────────────────────────────────────────────────

/// Accepts opaque date values.
#[derive(Debug)]
pub struct DateType;

impl Validator for DateType {
    fn type_uri(&self) -> &str {
        CoreType::Date.uri()
    }

    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        match value {
            Value::Date(_) => Ok(()),
            other => Err(expected(CoreType::Date, "Date", other)),
        }
    }
}

/// Accepts opaque time values.
#[derive(Debug)]
pub struct TimeType;

impl Validator for TimeType {
    fn type_uri(&self) -> &str {
        CoreType::Time.uri()
    }

    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        match value {
            Value::Time(_) => Ok(()),
            other => Err(expected(CoreType::Time, "Time", other)),
        }
    }
}

// ─── def / nil ───────────────────────────────────────────────────────

/// Accepts anything except the null marker.
#[derive(Debug)]
pub struct DefType;

impl Validator for DefType {
    fn type_uri(&self) -> &str {
        CoreType::Def.uri()
    }

    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        if value.is_null() {
            return Err(ValidationError::new(
                "expected defined value got nil",
                CoreType::Def.path(),
            ));
        }
        Ok(())
    }
}

/// Accepts only the null marker.
#[derive(Debug)]
pub struct NilType;

impl Validator for NilType {
    fn type_uri(&self) -> &str {
        CoreType::Nil.uri()
    }

    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        match value {
            Value::Null => Ok(()),
            other => Err(expected(CoreType::Nil, "nil", other)),
        }
    }
}

// ─── one ─────────────────────────────────────────────────────────────

/// Accepts a single scalar: number, string or boolean.
#[derive(Debug)]
pub struct OneType;

impl Validator for OneType {
    fn type_uri(&self) -> &str {
        CoreType::One.uri()
    }

    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        match value {
            Value::Number(_) | Value::String(_) | Value::Bool(_) => Ok(()),
            other => Err(expected(CoreType::One, "One", other)),
        }
    }
}

// ─── str ─────────────────────────────────────────────────────────────

/// Accepts strings, optionally constrained by character count and exact
/// value.
///
/// The `regex` parameter is part of the schema vocabulary and is accepted,
/// but it is never compiled or enforced.
#[derive(Debug)]
pub struct StrType {
    value: Option<String>,
    length: Option<Range>,
}

impl StrType {
    pub(crate) fn new(schema: &Map) -> Result<Self, SchemaError> {
        let value = match schema.get("value") {
            None => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => {
                return Err(invalid_param(
                    "value",
                    CoreType::Str,
                    format!("expected a string literal, got {other}"),
                ))
            }
        };
        let length = range_param(schema, "length")?;
        Ok(Self { value, length })
    }
}

impl Validator for StrType {
    fn type_uri(&self) -> &str {
        CoreType::Str.uri()
    }

    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        let Value::String(s) = value else {
            return Err(expected(CoreType::Str, "String", value));
        };

        if let Some(length) = &self.length {
            let count = s.chars().count();
            if !length.check_len(count) {
                return Err(ValidationError::new(
                    format!("expected string with length in range {length} got {count}"),
                    CoreType::Str.path(),
                ));
            }
        }

        if let Some(want) = &self.value {
            if want != s {
                return Err(ValidationError::new(
                    format!("expected {want:?} got {value}"),
                    CoreType::Str.path(),
                ));
            }
        }

        Ok(())
    }
}
