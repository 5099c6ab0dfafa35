//! # Core Kinds
//!
//! The sixteen built-in kinds of the Rx core namespace. Each lives in a
//! submodule grouped by shape:
//!
//! - `logic`: `all`, `any`, `fail` (combinators over other schemas)
//! - `scalar`: `bool`, `date`, `def`, `nil`, `one`, `str`, `time`
//! - `num`: `num` and its integral refinement `int`
//! - `collection`: `arr`, `map`, `seq`
//! - `rec`: `rec` (records with required/optional/rest fields)
//!
//! [`CoreType`] names each kind, carries its fixed URI and its static
//! parameter allow-list, and dispatches construction. The allow-list is
//! checked once, before the kind-specific constructor runs.

mod collection;
mod logic;
mod num;
mod rec;
mod scalar;

pub use collection::{ArrType, MapType, SeqType};
pub use logic::{AllType, AnyType, FailType};
pub use num::{IntType, NumType};
pub use rec::{RecField, RecType};
pub use scalar::{BoolType, DateType, DefType, NilType, OneType, StrType, TimeType};

use rx_core::{Map, Range, SchemaError, Value};

use crate::registry::Registry;
use crate::validator::{check_params, TypeConstructor, Validator};

// ─── Core Type Table ─────────────────────────────────────────────────

/// One of the sixteen core kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoreType {
    All,
    Any,
    Arr,
    Bool,
    Date,
    Def,
    Fail,
    Int,
    Map,
    Nil,
    Num,
    One,
    Rec,
    Seq,
    Str,
    Time,
}

/// The fixed registration list: every core kind, `int` included.
pub const CORE_TYPES: [CoreType; 16] = [
    CoreType::All,
    CoreType::Any,
    CoreType::Arr,
    CoreType::Bool,
    CoreType::Date,
    CoreType::Def,
    CoreType::Fail,
    CoreType::Int,
    CoreType::Map,
    CoreType::Nil,
    CoreType::Num,
    CoreType::One,
    CoreType::Rec,
    CoreType::Seq,
    CoreType::Str,
    CoreType::Time,
];

/// The kinds a fresh registry is preloaded with.
pub fn core_types() -> &'static [CoreType] {
    &CORE_TYPES
}

impl CoreType {
    /// Short name within the core namespace, e.g. `"int"`.
    pub fn subname(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Any => "any",
            Self::Arr => "arr",
            Self::Bool => "bool",
            Self::Date => "date",
            Self::Def => "def",
            Self::Fail => "fail",
            Self::Int => "int",
            Self::Map => "map",
            Self::Nil => "nil",
            Self::Num => "num",
            Self::One => "one",
            Self::Rec => "rec",
            Self::Seq => "seq",
            Self::Str => "str",
            Self::Time => "time",
        }
    }

    /// Fully qualified URI, `tag:codesimply.com,2008:rx/core/<subname>`.
    pub fn uri(self) -> &'static str {
        match self {
            Self::All => "tag:codesimply.com,2008:rx/core/all",
            Self::Any => "tag:codesimply.com,2008:rx/core/any",
            Self::Arr => "tag:codesimply.com,2008:rx/core/arr",
            Self::Bool => "tag:codesimply.com,2008:rx/core/bool",
            Self::Date => "tag:codesimply.com,2008:rx/core/date",
            Self::Def => "tag:codesimply.com,2008:rx/core/def",
            Self::Fail => "tag:codesimply.com,2008:rx/core/fail",
            Self::Int => "tag:codesimply.com,2008:rx/core/int",
            Self::Map => "tag:codesimply.com,2008:rx/core/map",
            Self::Nil => "tag:codesimply.com,2008:rx/core/nil",
            Self::Num => "tag:codesimply.com,2008:rx/core/num",
            Self::One => "tag:codesimply.com,2008:rx/core/one",
            Self::Rec => "tag:codesimply.com,2008:rx/core/rec",
            Self::Seq => "tag:codesimply.com,2008:rx/core/seq",
            Self::Str => "tag:codesimply.com,2008:rx/core/str",
            Self::Time => "tag:codesimply.com,2008:rx/core/time",
        }
    }

    /// Path segment reported by this kind's own failures, e.g. `"/int"`.
    pub fn path(self) -> String {
        format!("/{}", self.subname())
    }

    /// Schema keys this kind accepts besides `type`.
    pub fn params(self) -> &'static [&'static str] {
        match self {
            Self::All => &["of"],
            Self::Any => &["of"],
            Self::Arr => &["contents", "length"],
            Self::Map => &["values"],
            Self::Num | Self::Int => &["range", "value"],
            Self::Rec => &["required", "optional", "rest"],
            Self::Seq => &["contents", "tail"],
            Self::Str => &["value", "length", "regex"],
            Self::Bool
            | Self::Date
            | Self::Def
            | Self::Fail
            | Self::Nil
            | Self::One
            | Self::Time => &[],
        }
    }
}

impl TypeConstructor for CoreType {
    fn uri(&self) -> &str {
        CoreType::uri(*self)
    }

    fn construct(
        &self,
        schema: &Map,
        registry: &Registry,
    ) -> Result<Box<dyn Validator>, SchemaError> {
        check_params(schema, CoreType::uri(*self), self.params())?;

        let node: Box<dyn Validator> = match self {
            Self::All => Box::new(AllType::new(schema, registry)?),
            Self::Any => Box::new(AnyType::new(schema, registry)?),
            Self::Arr => Box::new(ArrType::new(schema, registry)?),
            Self::Bool => Box::new(BoolType),
            Self::Date => Box::new(DateType),
            Self::Def => Box::new(DefType),
            Self::Fail => Box::new(FailType),
            Self::Int => Box::new(IntType::new(schema)?),
            Self::Map => Box::new(MapType::new(schema, registry)?),
            Self::Nil => Box::new(NilType),
            Self::Num => Box::new(NumType::new(schema)?),
            Self::One => Box::new(OneType),
            Self::Rec => Box::new(RecType::new(schema, registry)?),
            Self::Seq => Box::new(SeqType::new(schema, registry)?),
            Self::Str => Box::new(StrType::new(schema)?),
            Self::Time => Box::new(TimeType),
        };
        Ok(node)
    }
}

// ─── Parameter Helpers ───────────────────────────────────────────────

/// Fetch a parameter that must be present.
fn required_param<'a>(
    schema: &'a Map,
    param: &str,
    kind: CoreType,
) -> Result<&'a Value, SchemaError> {
    schema.get(param).ok_or_else(|| SchemaError::MissingParameter {
        param: param.to_string(),
        uri: kind.uri().to_string(),
    })
}

fn invalid_param(param: &str, kind: CoreType, reason: impl Into<String>) -> SchemaError {
    SchemaError::InvalidParameter {
        param: param.to_string(),
        uri: kind.uri().to_string(),
        reason: reason.into(),
    }
}

/// Interpret a parameter as a non-empty list of schemas and compile each.
fn compile_schema_list(
    value: &Value,
    param: &str,
    kind: CoreType,
    registry: &Registry,
) -> Result<Vec<Box<dyn Validator>>, SchemaError> {
    match value.as_seq() {
        Some(items) if !items.is_empty() => items
            .iter()
            .map(|item| registry.make_schema(item))
            .collect(),
        _ => Err(invalid_param(
            param,
            kind,
            format!("expected a non-empty sequence of schemas, got {value}"),
        )),
    }
}

/// Interpret an optional parameter as a range.
fn range_param(schema: &Map, param: &str) -> Result<Option<Range>, SchemaError> {
    schema.get(param).map(Range::new).transpose()
}
