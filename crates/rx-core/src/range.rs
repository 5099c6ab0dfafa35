//! # Range — Inclusive/Exclusive Numeric Bounds
//!
//! `Range` is shared by every constraint that bounds a number: the `range`
//! parameter of numeric kinds and the `length` parameter of strings and
//! arrays (where the checked number is an element or character count).
//!
//! ## Wire Format
//!
//! A range is written as a map with up to four bounds:
//!
//! | Key | Fails when |
//! |---|---|
//! | `min` | value < min |
//! | `min-ex` / `min_exclusive` | value ≤ min-ex |
//! | `max-ex` / `max_exclusive` | value ≥ max-ex |
//! | `max` | value > max |
//!
//! Each exclusive bound may be spelled either way, but not both at once.
//! Any other key is a definition error.

use std::cmp::Ordering;
use std::fmt;

use crate::error::SchemaError;
use crate::value::{Number, Value};

/// Four independently optional numeric bounds. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Range {
    min: Option<Number>,
    min_exclusive: Option<Number>,
    max: Option<Number>,
    max_exclusive: Option<Number>,
}

#[derive(Clone, Copy)]
enum Bound {
    Min,
    MinExclusive,
    Max,
    MaxExclusive,
}

impl Bound {
    fn from_key(key: &str) -> Option<Self> {
        match key {
            "min" => Some(Self::Min),
            "min-ex" | "min_exclusive" => Some(Self::MinExclusive),
            "max" => Some(Self::Max),
            "max-ex" | "max_exclusive" => Some(Self::MaxExclusive),
            _ => None,
        }
    }
}

impl Range {
    /// Build a range from its wire form.
    ///
    /// # Errors
    ///
    /// - `SchemaError::InvalidRangeBound` if `spec` is not a map, a bound is
    ///   not a number, or an exclusive bound is given under both spellings.
    /// - `SchemaError::UnknownRangeBound` for any unrecognized key.
    pub fn new(spec: &Value) -> Result<Self, SchemaError> {
        let map = spec.as_map().ok_or_else(|| SchemaError::InvalidRangeBound {
            key: "range".to_string(),
            reason: format!("expected a map of bounds, got {spec}"),
        })?;

        let mut range = Self::default();
        for (key, bound) in map {
            let which = Bound::from_key(key).ok_or_else(|| SchemaError::UnknownRangeBound {
                key: key.clone(),
            })?;
            let number = bound.as_number().ok_or_else(|| SchemaError::InvalidRangeBound {
                key: key.clone(),
                reason: format!("expected a number, got {bound}"),
            })?;
            let slot = match which {
                Bound::Min => &mut range.min,
                Bound::MinExclusive => &mut range.min_exclusive,
                Bound::Max => &mut range.max,
                Bound::MaxExclusive => &mut range.max_exclusive,
            };
            if slot.is_some() {
                return Err(SchemaError::InvalidRangeBound {
                    key: key.clone(),
                    reason: "bound given more than once".to_string(),
                });
            }
            *slot = Some(number);
        }
        Ok(range)
    }

    /// Whether `value` lies within every configured bound.
    ///
    /// Comparison is exact across integers and floats (see `Number`'s
    /// `PartialOrd`). NaN lies outside any bounded range.
    pub fn check(&self, value: impl Into<Number>) -> bool {
        let value = value.into();
        let within = |bound: Option<Number>, allowed: &[Ordering]| {
            bound.map_or(true, |b| {
                value.partial_cmp(&b).is_some_and(|ord| allowed.contains(&ord))
            })
        };
        within(self.min, &[Ordering::Greater, Ordering::Equal])
            && within(self.min_exclusive, &[Ordering::Greater])
            && within(self.max_exclusive, &[Ordering::Less])
            && within(self.max, &[Ordering::Less, Ordering::Equal])
    }

    /// Check a count (string length, element count).
    pub fn check_len(&self, len: usize) -> bool {
        self.check(Number::Int(i64::try_from(len).unwrap_or(i64::MAX)))
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bounds = [
            ("min", self.min),
            ("min-ex", self.min_exclusive),
            ("max-ex", self.max_exclusive),
            ("max", self.max),
        ];
        let parts: Vec<String> = bounds
            .iter()
            .filter_map(|(name, bound)| bound.map(|b| format!("{name}: {b}")))
            .collect();
        if parts.is_empty() {
            f.write_str("(unbounded)")
        } else {
            write!(f, "({})", parts.join(", "))
        }
    }
}
