//! Custom-field class synthesis.

use super::{ClassSynthesizer, ensure_unique_fields};
use crate::error::CodegenError;
use crate::model::{Domain, Equality, FIELDS_CLASS_NAME, OutputClass, OutputField, Projection};
use tracing::debug;
use typedfields_schema::Type;

impl ClassSynthesizer<'_> {
    /// Synthesizes the typed projection of a custom-field type.
    ///
    /// The returned class is the projection marker; its typed fields live on
    /// the nested [`FIELDS_CLASS_NAME`] record.
    ///
    /// # Errors
    /// Returns `CodegenError` if a name is invalid or two fields collide.
    pub fn custom_fields(&self, ty: &Type) -> Result<OutputClass, CodegenError> {
        let name = self.naming.class_name(Domain::CustomFields, ty)?;

        let fields = ty
            .field_definitions
            .iter()
            .map(|definition| {
                Ok(OutputField {
                    name: self.naming.field_name(Domain::CustomFields, ty, definition)?,
                    ty: self.mapper.map_field_type(&definition.field_type),
                    raw_name: definition.name.clone(),
                })
            })
            .collect::<Result<Vec<_>, CodegenError>>()?;
        ensure_unique_fields(&name, &fields)?;

        debug!(
            type_key = %ty.key,
            class = %name,
            fields = fields.len(),
            "synthesized custom fields class"
        );

        let record = OutputClass {
            name: FIELDS_CLASS_NAME.to_string(),
            equality: Equality::for_field_count(fields.len()),
            fields,
            constants: Vec::new(),
            projection: Projection::Record,
            nested: None,
        };

        Ok(OutputClass {
            name,
            fields: Vec::new(),
            equality: Equality::Marker,
            constants: Vec::new(),
            projection: Projection::CustomFields {
                type_key: ty.key.clone(),
            },
            nested: Some(Box::new(record)),
        })
    }
}
