//! Schema codec, structured side: converting a form definition to and
//! from the keyed [`Schema`] mapping. The binary/text transport wrapping
//! lives in [`crate::form::transport`].

use log::debug;

use crate::error::FormResult;
use crate::form::core::Form;
use crate::form::types::registry;
use crate::form::types::schema::Schema;

impl Form {
    /// Walks the fields in insertion order and assembles the value-free
    /// schema mapping for this form.
    pub fn dump_schema(&self) -> FormResult<Schema> {
        let fields = self
            .fields()
            .iter()
            .map(|field| field.to_definition())
            .collect::<FormResult<Vec<_>>>()?;

        Ok(Schema {
            uuid: self.uuid().to_string(),
            title: self.title.clone(),
            description: self.description.clone(),
            locale: self.locale.clone(),
            fields,
        })
    }

    /// Reconstructs a form from a schema mapping.
    ///
    /// Metadata is taken verbatim; each field definition is dispatched
    /// through the field type registry on its `type` tag. An unrecognized
    /// tag fails with [`crate::FormError::UnknownFieldType`], a name
    /// collision with [`crate::FormError::DuplicateName`].
    pub fn load_schema(schema: &Schema) -> FormResult<Form> {
        debug!(
            "loading schema '{}' ({}) with {} field definitions",
            schema.title,
            schema.uuid,
            schema.fields.len()
        );

        let mut form = Form::new(schema.title.clone())
            .with_uuid(schema.uuid.clone())
            .with_locale(schema.locale.clone());
        form.description = schema.description.clone();

        for definition in &schema.fields {
            let field = registry::from_definition(definition)?;
            form.add_field(field)?;
        }
        Ok(form)
    }
}
