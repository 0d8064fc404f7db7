use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::form::types::field::common::FieldCommon;
use crate::impl_field;

/// Boolean field. Carries no constraints beyond the common attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BooleanField {
    #[serde(flatten)]
    pub inner: FieldCommon,
}

impl BooleanField {
    pub const TYPE_TAG: &'static str = "BooleanField";

    #[must_use]
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            inner: FieldCommon::new(name, label),
        }
    }

    /// Checks a candidate value: any JSON boolean is valid.
    pub fn validate(&self, value: Option<&JsonValue>) -> bool {
        match value {
            None | Some(JsonValue::Null) => !self.inner.required,
            Some(v) => v.is_boolean(),
        }
    }
}

impl_field!(BooleanField);
