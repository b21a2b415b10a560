//! Variant-attribute class synthesis.

use super::{ClassSynthesizer, ensure_unique_constants, ensure_unique_fields};
use crate::error::CodegenError;
use crate::model::{Domain, Equality, OutputClass, OutputConstant, OutputField, Projection};
use tracing::debug;
use typedfields_schema::ProductType;

impl ClassSynthesizer<'_> {
    /// Synthesizes the typed projection of a product type's attributes.
    ///
    /// Nested attributes only name the class of the product type they point
    /// at, so self- and mutually-referencing product types synthesize in one
    /// pass each.
    ///
    /// # Errors
    /// Returns `CodegenError` if a name is invalid, or two fields or two
    /// constants collide.
    pub fn variant_attributes(
        &self,
        product_type: &ProductType,
    ) -> Result<OutputClass, CodegenError> {
        let name = self
            .naming
            .class_name(Domain::VariantAttributes, product_type)?;

        let mut fields = Vec::with_capacity(product_type.attributes.len());
        let mut constants = Vec::with_capacity(product_type.attributes.len());

        for attribute in &product_type.attributes {
            let required = self.config.is_attribute_required(
                product_type,
                attribute,
                attribute.is_required,
            );

            fields.push(OutputField {
                name: self
                    .naming
                    .field_name(Domain::VariantAttributes, product_type, attribute)?,
                ty: self
                    .mapper
                    .map_attribute_type(&attribute.attribute_type, required)?,
                raw_name: attribute.name.clone(),
            });
            constants.push(OutputConstant {
                name: self
                    .naming
                    .constant_name(Domain::VariantAttributes, product_type, attribute)?,
                value: attribute.name.clone(),
            });
        }

        ensure_unique_fields(&name, &fields)?;
        ensure_unique_constants(&name, &constants)?;

        debug!(
            product_type_id = %product_type.id,
            class = %name,
            attributes = fields.len(),
            "synthesized variant attributes class"
        );

        Ok(OutputClass {
            name,
            equality: Equality::for_field_count(fields.len()),
            fields,
            constants,
            projection: Projection::VariantAttributes {
                product_type_id: product_type.id.clone(),
            },
            nested: None,
        })
    }
}
