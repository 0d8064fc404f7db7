use serde::{Serialize, Serializer};
use serde_json::Value as JsonValue;

use crate::error::{FormError, FormResult};
use crate::form::types::field::{BooleanField, Field, FloatField, IntegerField, TextField};

/// Enumeration over all field variants.
///
/// Serialization emits a `type` tag next to the variant's flattened
/// attributes. Construction from a definition goes through the field
/// type registry, which keeps the tag dispatch in one place, so this
/// enum deliberately does not implement `Deserialize`.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldVariant {
    /// Free-text value
    Text(TextField),
    /// Whole-number value
    Integer(IntegerField),
    /// Floating-point value
    Float(FloatField),
    /// Boolean value
    Boolean(BooleanField),
}

impl FieldVariant {
    /// Returns the wire type tag identifying the concrete variant.
    pub fn type_tag(&self) -> &'static str {
        match self {
            Self::Text(_) => TextField::TYPE_TAG,
            Self::Integer(_) => IntegerField::TYPE_TAG,
            Self::Float(_) => FloatField::TYPE_TAG,
            Self::Boolean(_) => BooleanField::TYPE_TAG,
        }
    }

    /// Checks a candidate value against the variant's constraints.
    ///
    /// Pure predicate: never errors and never touches the stored value.
    pub fn validate(&self, value: Option<&JsonValue>) -> bool {
        match self {
            Self::Text(f) => f.validate(value),
            Self::Integer(f) => f.validate(value),
            Self::Float(f) => f.validate(value),
            Self::Boolean(f) => f.validate(value),
        }
    }

    /// Validates the field's effective value (stored value falling back
    /// to the default).
    pub fn is_valid(&self) -> bool {
        self.validate(self.get_value())
    }

    /// Emits the field definition as a JSON mapping: the `type` tag plus
    /// every attribute that is set. Unset optional attributes are omitted
    /// rather than written as null, keeping schemas compact.
    pub fn to_definition(&self) -> FormResult<JsonValue> {
        serde_json::to_value(self).map_err(FormError::from)
    }
}

impl Field for FieldVariant {
    fn name(&self) -> &str {
        match self {
            Self::Text(f) => f.name(),
            Self::Integer(f) => f.name(),
            Self::Float(f) => f.name(),
            Self::Boolean(f) => f.name(),
        }
    }

    fn label(&self) -> &str {
        match self {
            Self::Text(f) => f.label(),
            Self::Integer(f) => f.label(),
            Self::Float(f) => f.label(),
            Self::Boolean(f) => f.label(),
        }
    }

    fn description(&self) -> Option<&str> {
        match self {
            Self::Text(f) => f.description(),
            Self::Integer(f) => f.description(),
            Self::Float(f) => f.description(),
            Self::Boolean(f) => f.description(),
        }
    }

    fn required(&self) -> bool {
        match self {
            Self::Text(f) => f.required(),
            Self::Integer(f) => f.required(),
            Self::Float(f) => f.required(),
            Self::Boolean(f) => f.required(),
        }
    }

    fn default_value(&self) -> Option<&JsonValue> {
        match self {
            Self::Text(f) => f.default_value(),
            Self::Integer(f) => f.default_value(),
            Self::Float(f) => f.default_value(),
            Self::Boolean(f) => f.default_value(),
        }
    }

    fn value(&self) -> Option<&JsonValue> {
        match self {
            Self::Text(f) => f.value(),
            Self::Integer(f) => f.value(),
            Self::Float(f) => f.value(),
            Self::Boolean(f) => f.value(),
        }
    }

    fn set_value(&mut self, value: JsonValue) {
        match self {
            Self::Text(f) => f.set_value(value),
            Self::Integer(f) => f.set_value(value),
            Self::Float(f) => f.set_value(value),
            Self::Boolean(f) => f.set_value(value),
        }
    }

    fn clear_value(&mut self) {
        match self {
            Self::Text(f) => f.clear_value(),
            Self::Integer(f) => f.clear_value(),
            Self::Float(f) => f.clear_value(),
            Self::Boolean(f) => f.clear_value(),
        }
    }
}

impl Serialize for FieldVariant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        #[derive(Serialize)]
        struct Helper<'a, T: Serialize> {
            r#type: &'static str,
            #[serde(flatten)]
            inner: &'a T,
        }

        match self {
            Self::Text(f) => Helper { r#type: TextField::TYPE_TAG, inner: f }.serialize(serializer),
            Self::Integer(f) => {
                Helper { r#type: IntegerField::TYPE_TAG, inner: f }.serialize(serializer)
            }
            Self::Float(f) => {
                Helper { r#type: FloatField::TYPE_TAG, inner: f }.serialize(serializer)
            }
            Self::Boolean(f) => {
                Helper { r#type: BooleanField::TYPE_TAG, inner: f }.serialize(serializer)
            }
        }
    }
}

impl From<TextField> for FieldVariant {
    fn from(field: TextField) -> Self {
        Self::Text(field)
    }
}

impl From<IntegerField> for FieldVariant {
    fn from(field: IntegerField) -> Self {
        Self::Integer(field)
    }
}

impl From<FloatField> for FieldVariant {
    fn from(field: FloatField) -> Self {
        Self::Float(field)
    }
}

impl From<BooleanField> for FieldVariant {
    fn from(field: BooleanField) -> Self {
        Self::Boolean(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn definition_carries_type_tag_and_omits_unset_constraints() {
        let field = FieldVariant::from(
            TextField::new("username", "Username")
                .with_required(true)
                .with_min_length(3),
        );

        let definition = field.to_definition().unwrap();
        assert_eq!(definition["type"], json!("TextField"));
        assert_eq!(definition["name"], json!("username"));
        assert_eq!(definition["required"], json!(true));
        assert_eq!(definition["min_length"], json!(3));
        assert!(definition.get("max_length").is_none());
        assert!(definition.get("regex").is_none());
        assert!(definition.get("description").is_none());
    }

    #[test]
    fn stored_value_never_leaks_into_definition() {
        let mut field = FieldVariant::from(IntegerField::new("age", "Age"));
        field.set_value(json!(42));

        let definition = field.to_definition().unwrap();
        assert!(definition.get("value").is_none());
    }
}
