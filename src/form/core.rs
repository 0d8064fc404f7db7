use uuid::Uuid;

use crate::error::{FormError, FormResult};
use crate::form::types::field::{Field, FieldVariant};
use crate::form::types::schema::default_locale;

/// Ordered, name-unique collection of fields plus form-level metadata.
///
/// Fields are owned by the form: `add_field` takes the field by value
/// and a field belongs to exactly one form at a time. Insertion order
/// is significant and survives serialization.
#[derive(Debug, Clone, PartialEq)]
pub struct Form {
    uuid: String,
    pub title: String,
    pub description: Option<String>,
    pub locale: String,
    fields: Vec<FieldVariant>,
}

impl Form {
    /// Creates an empty form with a generated uuid and the default
    /// locale ("en").
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            uuid: Uuid::new_v4().to_string(),
            title: title.into(),
            description: None,
            locale: default_locale(),
            fields: Vec::new(),
        }
    }

    /// Sets the stable identity instead of generating one.
    pub fn with_uuid(mut self, uuid: impl Into<String>) -> Self {
        self.uuid = uuid.into();
        self
    }

    /// Sets the optional description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the locale code. Stored opaquely; the core never interprets it.
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Returns the form's stable identity.
    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    /// Returns the fields in insertion order.
    pub fn fields(&self) -> &[FieldVariant] {
        &self.fields
    }

    /// Appends a field to the form, taking ownership of it.
    ///
    /// Field names are unique within a form; a name collision is
    /// rejected with [`FormError::DuplicateName`].
    pub fn add_field(&mut self, field: impl Into<FieldVariant>) -> FormResult<()> {
        let field = field.into();
        if self.get_field(field.name()).is_some() {
            return Err(FormError::DuplicateName(field.name().to_string()));
        }
        self.fields.push(field);
        Ok(())
    }

    /// Removes the field with the given name. Absent names are ignored.
    pub fn remove_field(&mut self, name: &str) {
        if let Some(index) = self.fields.iter().position(|f| f.name() == name) {
            self.fields.remove(index);
        }
    }

    /// Looks up a field by name.
    pub fn get_field(&self, name: &str) -> Option<&FieldVariant> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// Looks up a field by name for mutation (setting values).
    pub fn get_field_mut(&mut self, name: &str) -> Option<&mut FieldVariant> {
        self.fields.iter_mut().find(|f| f.name() == name)
    }

    /// Returns true iff every field's effective value (stored value
    /// falling back to the default) satisfies that field's constraints.
    /// Never errors; this is the "is this broken?" query.
    pub fn validate(&self) -> bool {
        self.fields.iter().all(FieldVariant::is_valid)
    }
}
