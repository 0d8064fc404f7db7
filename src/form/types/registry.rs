//! Field type registry
//!
//! Deserialization of field definitions dispatches on the `type` tag
//! through this registry rather than through serde, so the set of
//! constructable variants lives in exactly one table.

use once_cell::sync::Lazy;
use serde_json::Value as JsonValue;
use std::collections::HashMap;

use crate::error::{FormError, FormResult};
use crate::form::types::field::{
    BooleanField, FieldVariant, FloatField, IntegerField, TextField,
};

/// Constructor building a concrete field from its JSON definition.
/// The definition still contains the `type` key; flattened deserialization
/// ignores it.
pub type FieldConstructor = fn(&JsonValue) -> FormResult<FieldVariant>;

static FIELD_REGISTRY: Lazy<HashMap<&'static str, FieldConstructor>> = Lazy::new(|| {
    let mut registry: HashMap<&'static str, FieldConstructor> = HashMap::new();
    registry.insert(TextField::TYPE_TAG, |definition| {
        Ok(FieldVariant::Text(serde_json::from_value(definition.clone())?))
    });
    registry.insert(IntegerField::TYPE_TAG, |definition| {
        Ok(FieldVariant::Integer(serde_json::from_value(definition.clone())?))
    });
    registry.insert(FloatField::TYPE_TAG, |definition| {
        Ok(FieldVariant::Float(serde_json::from_value(definition.clone())?))
    });
    registry.insert(BooleanField::TYPE_TAG, |definition| {
        Ok(FieldVariant::Boolean(serde_json::from_value(definition.clone())?))
    });
    registry
});

/// Returns the registered type tags, for diagnostics.
pub fn registered_types() -> Vec<&'static str> {
    FIELD_REGISTRY.keys().copied().collect()
}

/// Builds a field from a JSON definition by looking up its `type` tag.
pub fn from_definition(definition: &JsonValue) -> FormResult<FieldVariant> {
    let tag = definition
        .get("type")
        .and_then(JsonValue::as_str)
        .ok_or_else(|| {
            FormError::InvalidSchema("field definition is missing a `type` tag".to_string())
        })?;

    let constructor = FIELD_REGISTRY
        .get(tag)
        .ok_or_else(|| FormError::UnknownFieldType(tag.to_string()))?;

    constructor(definition)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builds_each_registered_variant() {
        let text = from_definition(&json!({
            "type": "TextField", "name": "a", "label": "A", "min_length": 2
        }))
        .unwrap();
        assert!(matches!(text, FieldVariant::Text(_)));

        let integer = from_definition(&json!({
            "type": "IntegerField", "name": "b", "label": "B", "max_value": 10
        }))
        .unwrap();
        assert!(matches!(integer, FieldVariant::Integer(_)));

        let float = from_definition(&json!({
            "type": "FloatField", "name": "c", "label": "C"
        }))
        .unwrap();
        assert!(matches!(float, FieldVariant::Float(_)));

        let boolean = from_definition(&json!({
            "type": "BooleanField", "name": "d", "label": "D", "default_value": true
        }))
        .unwrap();
        assert!(matches!(boolean, FieldVariant::Boolean(_)));
    }

    #[test]
    fn unknown_tag_is_a_distinct_error() {
        let err = from_definition(&json!({
            "type": "DateField", "name": "when", "label": "When"
        }))
        .unwrap_err();
        assert!(matches!(err, FormError::UnknownFieldType(tag) if tag == "DateField"));
    }

    #[test]
    fn missing_tag_is_rejected() {
        let err = from_definition(&json!({ "name": "x", "label": "X" })).unwrap_err();
        assert!(matches!(err, FormError::InvalidSchema(_)));
    }

    #[test]
    fn round_trips_through_definition() {
        let original = FieldVariant::from(
            TextField::new("email", "Email").with_regex("^[a-z]+@[a-z]+$"),
        );
        let definition = original.to_definition().unwrap();
        let rebuilt = from_definition(&definition).unwrap();
        assert_eq!(rebuilt, original);
    }
}
