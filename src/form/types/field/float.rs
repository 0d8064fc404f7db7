use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::form::types::field::common::FieldCommon;
use crate::impl_field;

/// Floating-point field with optional inclusive bounds.
///
/// Integer values are accepted; `2` is a valid value for a float field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatField {
    #[serde(flatten)]
    pub inner: FieldCommon,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,
}

impl FloatField {
    pub const TYPE_TAG: &'static str = "FloatField";

    #[must_use]
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            inner: FieldCommon::new(name, label),
            min_value: None,
            max_value: None,
        }
    }

    /// Sets the inclusive minimum value.
    pub fn with_min_value(mut self, min_value: f64) -> Self {
        self.min_value = Some(min_value);
        self
    }

    /// Sets the inclusive maximum value.
    pub fn with_max_value(mut self, max_value: f64) -> Self {
        self.max_value = Some(max_value);
        self
    }

    /// Checks a candidate value against the field's constraints.
    pub fn validate(&self, value: Option<&JsonValue>) -> bool {
        let value = match value {
            None | Some(JsonValue::Null) => return !self.inner.required,
            Some(v) => v,
        };
        // as_f64 covers JSON integers as well; booleans are not numbers
        let number = match value.as_f64() {
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

impl_field!(FloatField);
