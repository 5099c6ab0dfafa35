//! Numeric kinds: `num` and `int`.
//!
//! `int` is a refinement of `num` by composition: an [`IntType`] owns a
//! [`NumType`] configured to report under `/int`, and adds an integrality
//! predicate on top of it.

use rx_core::{Map, Number, Range, SchemaError, ValidationError, Value};

use super::{invalid_param, range_param, CoreType};
use crate::validator::Validator;

// ─── num ─────────────────────────────────────────────────────────────

/// Accepts numbers, optionally constrained by a range and an exact value.
#[derive(Debug)]
pub struct NumType {
    /// The kind this check reports as (`num`, or `int` when embedded).
    kind: CoreType,
    range: Option<Range>,
    value: Option<Number>,
}

impl NumType {
    pub(crate) fn new(schema: &Map) -> Result<Self, SchemaError> {
        Self::for_kind(schema, CoreType::Num)
    }

    fn for_kind(schema: &Map, kind: CoreType) -> Result<Self, SchemaError> {
        let value = match schema.get("value") {
            None => None,
            Some(Value::Number(n)) => Some(*n),
            Some(other) => {
                return Err(invalid_param(
                    "value",
                    kind,
                    format!("expected a numeric literal, got {other}"),
                ))
            }
        };
        let range = range_param(schema, "range")?;
        Ok(Self { kind, range, value })
    }
}

impl Validator for NumType {
    fn type_uri(&self) -> &str {
        self.kind.uri()
    }

    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        let Value::Number(n) = value else {
            return Err(ValidationError::new(
                format!("expected number got {value}"),
                self.kind.path(),
            ));
        };

        if let Some(range) = &self.range {
            if !range.check(*n) {
                return Err(ValidationError::new(
                    format!("expected number in range {range} got {value}"),
                    self.kind.path(),
                ));
            }
        }

        if let Some(want) = self.value {
            if want != *n {
                return Err(ValidationError::new(
                    format!("expected {want} got {value}"),
                    self.kind.path(),
                ));
            }
        }

        Ok(())
    }
}

// ─── int ─────────────────────────────────────────────────────────────

/// Accepts numbers with no fractional part. `4.0` is an integer.
#[derive(Debug)]
pub struct IntType {
    num: NumType,
}

impl IntType {
    pub(crate) fn new(schema: &Map) -> Result<Self, SchemaError> {
        let num = NumType::for_kind(schema, CoreType::Int)?;
        if let Some(want) = num.value {
            if !want.is_integral() {
                return Err(invalid_param(
                    "value",
                    CoreType::Int,
                    format!("{want} is not an integer"),
                ));
            }
        }
        Ok(Self { num })
    }
}

impl Validator for IntType {
    fn type_uri(&self) -> &str {
        CoreType::Int.uri()
    }

    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        self.num.validate(value)?;
        match value.as_number() {
            Some(n) if n.is_integral() => Ok(()),
            _ => Err(ValidationError::new(
                format!("expected Integer got {value}"),
                CoreType::Int.path(),
            )),
        }
    }
}
