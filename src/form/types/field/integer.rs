use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::form::types::field::common::FieldCommon;
use crate::impl_field;

/// Whole-number field with optional inclusive bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegerField {
    #[serde(flatten)]
    pub inner: FieldCommon,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<i64>,
}

impl IntegerField {
    pub const TYPE_TAG: &'static str = "IntegerField";

    #[must_use]
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            inner: FieldCommon::new(name, label),
            min_value: None,
            max_value: None,
        }
    }

    /// Sets the inclusive minimum value.
    pub fn with_min_value(mut self, min_value: i64) -> Self {
        self.min_value = Some(min_value);
        self
    }

    /// Sets the inclusive maximum value.
    pub fn with_max_value(mut self, max_value: i64) -> Self {
        self.max_value = Some(max_value);
        self
    }

    /// Checks a candidate value against the field's constraints.
    ///
    /// Booleans and strings are rejected outright; a floating-point
    /// number passes the type check only when it has no fractional part.
    pub fn validate(&self, value: Option<&JsonValue>) -> bool {
        let value = match value {
            None | Some(JsonValue::Null) => return !self.inner.required,
            Some(v) => v,
        };
        let number = match as_integer(value) {
            Some(number) => number,
            None => return false,
        };

        if let Some(min_value) = self.min_value {
            if number < min_value {
                return false;
            }
        }
        if let Some(max_value) = self.max_value {
            if number > max_value {
                return false;
            }
        }
        true
    }
}

/// Extracts an integral value from a JSON number.
///
/// `serde_json` keeps `25` and `25.0` as distinct number representations;
/// both count as integers here, while `25.5` does not.
fn as_integer(value: &JsonValue) -> Option<i64> {
    if let Some(number) = value.as_i64() {
        return Some(number);
    }
    if let Some(number) = value.as_u64() {
        return i64::try_from(number).ok();
    }
    match value.as_f64() {
        Some(number) if number.fract() == 0.0 && number.is_finite() => {
            // -(2^63) is exactly representable; 2^63 is the first value
            // past i64::MAX, so the upper bound must be strict (the cast
            // `i64::MAX as f64` rounds up to 2^63 and would let it through)
            if number >= i64::MIN as f64 && number < -(i64::MIN as f64) {
                Some(number as i64)
            } else {
                None
            }
        }
        _ => None,
    }
}

impl_field!(IntegerField);
