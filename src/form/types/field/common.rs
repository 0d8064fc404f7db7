use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Common interface for all form fields.
///
/// The `Field` trait exposes accessors for the attributes shared by all
/// field implementations. Type-specific constraints and validation live
/// on the concrete structs; `FieldVariant` dispatches over them.
pub trait Field {
    /// Returns the field's unique name within its form.
    fn name(&self) -> &str;

    /// Returns the human-readable label.
    fn label(&self) -> &str;

    /// Returns the optional description shown alongside the field.
    fn description(&self) -> Option<&str>;

    /// Indicates whether a value must be present for the field to validate.
    fn required(&self) -> bool;

    /// Returns the default value used when no value has been set.
    fn default_value(&self) -> Option<&JsonValue>;

    /// Returns the raw stored value, without the default fallback.
    fn value(&self) -> Option<&JsonValue>;

    /// Stores a value verbatim. No coercion and no validation happen
    /// here; `Null` clears the stored value.
    fn set_value(&mut self, value: JsonValue);

    /// Clears the stored value, falling back to the default.
    fn clear_value(&mut self);

    /// Returns the effective value: the stored value if set, otherwise
    /// the default value.
    fn get_value(&self) -> Option<&JsonValue> {
        self.value().or_else(|| self.default_value())
    }
}

/// Attributes shared by every field variant.
///
/// The current `value` is runtime state and never part of a schema, so
/// it is skipped during serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldCommon {
    pub name: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<JsonValue>,
    #[serde(skip)]
    pub value: Option<JsonValue>,
}

impl FieldCommon {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            description: None,
            required: false,
            default_value: None,
            value: None,
        }
    }
}

#[macro_export]
macro_rules! impl_field {
    ($t:ty) => {
        impl $crate::form::types::field::Field for $t {
            fn name(&self) -> &str {
                &self.inner.name
            }

            fn label(&self) -> &str {
                &self.inner.label
            }

            fn description(&self) -> Option<&str> {
                self.inner.description.as_deref()
            }

            fn required(&self) -> bool {
                self.inner.required
            }

            fn default_value(&self) -> Option<&serde_json::Value> {
                self.inner.default_value.as_ref()
            }

            fn value(&self) -> Option<&serde_json::Value> {
                self.inner.value.as_ref()
            }

            fn set_value(&mut self, value: serde_json::Value) {
                if value.is_null() {
                    self.inner.value = None;
                } else {
                    self.inner.value = Some(value);
                }
            }

            fn clear_value(&mut self) {
                self.inner.value = None;
            }
        }

        impl $t {
            /// Sets the optional description.
            pub fn with_description(mut self, description: impl Into<String>) -> Self {
                self.inner.description = Some(description.into());
                self
            }

            /// Marks the field as required or optional.
            pub fn with_required(mut self, required: bool) -> Self {
                self.inner.required = required;
                self
            }

            /// Sets the default value used when no value has been set.
            pub fn with_default_value(mut self, default_value: serde_json::Value) -> Self {
                self.inner.default_value = Some(default_value);
                self
            }
        }
    };
}

// Re-export the macro for use in this module tree
pub use impl_field;
