//! Data codec: the form's current values as a plain name-to-value
//! mapping, independent of schema transport. Used for submit/prefill.

use serde_json::{Map, Value as JsonValue};

use crate::error::{FormError, FormResult};
use crate::form::core::Form;
use crate::form::types::field::Field;

impl Form {
    /// Exports the form's current values as a name-to-value mapping,
    /// one entry per field, `Null` standing in for absent values.
    ///
    /// In strict mode (`allow_invalid == false`) the export is
    /// all-or-nothing: the first field whose effective value fails
    /// validation aborts with [`FormError::Validation`] before anything
    /// is returned.
    pub fn dump_data(&self, allow_invalid: bool) -> FormResult<Map<String, JsonValue>> {
        if !allow_invalid {
            for field in self.fields() {
                if !field.is_valid() {
                    return Err(FormError::Validation(field.name().to_string()));
                }
            }
        }

        let mut data = Map::new();
        for field in self.fields() {
            let value = field.get_value().cloned().unwrap_or(JsonValue::Null);
            data.insert(field.name().to_string(), value);
        }
        Ok(data)
    }

    /// Imports values from a name-to-value mapping.
    ///
    /// Keys matching a field name set that field's value verbatim (no
    /// validation at load time). Unknown keys are ignored and fields
    /// missing from the mapping keep their current values.
    pub fn load_data(&mut self, data: &Map<String, JsonValue>) {
        for (name, value) in data {
            if let Some(field) = self.get_field_mut(name) {
                field.set_value(value.clone());
            }
        }
    }
}
