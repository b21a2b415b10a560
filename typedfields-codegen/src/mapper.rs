//! Field-type mapping.
//!
//! Translates the abstract field-type taxonomy of both domains into output
//! types. Nested attribute types are mapped to the *name* of the class the
//! referenced product type generates; that class is never synthesized here,
//! which is what keeps self- and mutually-referencing product types finite.

use crate::config::Configuration;
use crate::error::CodegenError;
use crate::model::{
    ATTRIBUTE_LOCALIZED_ENUM_VALUE, ATTRIBUTE_PLAIN_ENUM_VALUE, CUSTOM_FIELD_ENUM_VALUE,
    CUSTOM_FIELD_LOCALIZED_ENUM_VALUE, Domain, LOCALIZED_STRING, OutputType, Primitive,
    TYPED_MONEY, TypeKind,
};
use crate::naming::Naming;
use crate::references::{attribute_reference, custom_field_reference};
use typedfields_schema::{AttributeType, FieldType, SchemaIr};

/// Maps field types against one schema and configuration.
#[derive(Debug, Clone, Copy)]
pub struct TypeMapper<'a> {
    ir: &'a SchemaIr,
    naming: Naming<'a>,
}

impl<'a> TypeMapper<'a> {
    /// Creates a new type mapper.
    #[must_use]
    pub const fn new(ir: &'a SchemaIr, config: &'a Configuration) -> Self {
        Self {
            ir,
            naming: Naming::new(config),
        }
    }

    /// Maps a custom-field type. Custom fields are always nullable.
    #[must_use]
    pub fn map_field_type(&self, field_type: &FieldType) -> OutputType {
        let kind = match field_type {
            FieldType::Boolean => TypeKind::Primitive(Primitive::Boolean),
            FieldType::String => TypeKind::Primitive(Primitive::String),
            FieldType::LocalizedString => TypeKind::Sdk(LOCALIZED_STRING),
            FieldType::Enum => TypeKind::Sdk(CUSTOM_FIELD_ENUM_VALUE),
            FieldType::LocalizedEnum => TypeKind::Sdk(CUSTOM_FIELD_LOCALIZED_ENUM_VALUE),
            FieldType::Number => TypeKind::Primitive(Primitive::Int),
            FieldType::Money => TypeKind::Sdk(TYPED_MONEY),
            FieldType::Date => TypeKind::Primitive(Primitive::Date),
            FieldType::Time => TypeKind::Primitive(Primitive::Time),
            FieldType::DateTime => TypeKind::Primitive(Primitive::DateTime),
            FieldType::Reference { reference_type_id } => {
                TypeKind::Sdk(custom_field_reference(*reference_type_id))
            }
            FieldType::Set { element_type } => {
                TypeKind::Set(Box::new(self.map_field_type(element_type)))
            }
            FieldType::Unknown => TypeKind::Any,
        };

        OutputType::new(kind, true)
    }

    /// Maps a product attribute type.
    ///
    /// The result is nullable unless `required` is set; set elements inherit
    /// the same flag.
    ///
    /// # Errors
    /// Returns `CodegenError::InvalidIdentifier` if a resolved nested product
    /// type cannot be named.
    pub fn map_attribute_type(
        &self,
        attribute_type: &AttributeType,
        required: bool,
    ) -> Result<OutputType, CodegenError> {
        let kind = match attribute_type {
            AttributeType::Boolean => TypeKind::Primitive(Primitive::Boolean),
            AttributeType::Text => TypeKind::Primitive(Primitive::String),
            AttributeType::LocalizableText => TypeKind::Sdk(LOCALIZED_STRING),
            AttributeType::Enum => TypeKind::Sdk(ATTRIBUTE_PLAIN_ENUM_VALUE),
            AttributeType::LocalizedEnum => TypeKind::Sdk(ATTRIBUTE_LOCALIZED_ENUM_VALUE),
            AttributeType::Number => TypeKind::Primitive(Primitive::Double),
            AttributeType::Money => TypeKind::Sdk(TYPED_MONEY),
            AttributeType::Date => TypeKind::Primitive(Primitive::Date),
            AttributeType::Time => TypeKind::Primitive(Primitive::Time),
            AttributeType::DateTime => TypeKind::Primitive(Primitive::DateTime),
            AttributeType::Reference { reference_type_id } => {
                TypeKind::Sdk(attribute_reference(*reference_type_id))
            }
            AttributeType::Set { element_type } => {
                TypeKind::Set(Box::new(self.map_attribute_type(element_type, required)?))
            }
            AttributeType::Nested { type_reference } => self.nested_kind(&type_reference.id)?,
            AttributeType::Unknown => TypeKind::Any,
        };

        Ok(OutputType::new(kind, !required))
    }

    /// Resolves a nested product type reference to its class name.
    fn nested_kind(&self, product_type_id: &str) -> Result<TypeKind, CodegenError> {
        match self.ir.product_type(product_type_id) {
            Some(product_type) => Ok(TypeKind::Class(
                self.naming
                    .class_name(Domain::VariantAttributes, product_type)?,
            )),
            None => Ok(TypeKind::AttributeList),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{REFERENCE, SdkType};
    use typedfields_schema::{CustomFieldReferenceTypeId, ProductType, ReferenceTypeId};

    fn nullable(kind: TypeKind) -> OutputType {
        OutputType::new(kind, true)
    }

    fn required(kind: TypeKind) -> OutputType {
        OutputType::new(kind, false)
    }

    #[test]
    fn test_custom_field_primitives() {
        let ir = SchemaIr::default();
        let config = Configuration::default();
        let mapper = TypeMapper::new(&ir, &config);

        let cases = [
            (FieldType::Boolean, TypeKind::Primitive(Primitive::Boolean)),
            (FieldType::String, TypeKind::Primitive(Primitive::String)),
            (FieldType::LocalizedString, TypeKind::Sdk(LOCALIZED_STRING)),
            (FieldType::Enum, TypeKind::Sdk(CUSTOM_FIELD_ENUM_VALUE)),
            (
                FieldType::LocalizedEnum,
                TypeKind::Sdk(CUSTOM_FIELD_LOCALIZED_ENUM_VALUE),
            ),
            (FieldType::Number, TypeKind::Primitive(Primitive::Int)),
            (FieldType::Money, TypeKind::Sdk(TYPED_MONEY)),
            (FieldType::Date, TypeKind::Primitive(Primitive::Date)),
            (FieldType::Time, TypeKind::Primitive(Primitive::Time)),
            (FieldType::DateTime, TypeKind::Primitive(Primitive::DateTime)),
            (FieldType::Unknown, TypeKind::Any),
        ];

        for (field_type, expected) in cases {
            assert_eq!(mapper.map_field_type(&field_type), nullable(expected));
        }
    }

    #[test]
    fn test_attribute_primitives_respect_required() {
        let ir = SchemaIr::default();
        let config = Configuration::default();
        let mapper = TypeMapper::new(&ir, &config);

        let cases = [
            (AttributeType::Boolean, TypeKind::Primitive(Primitive::Boolean)),
            (AttributeType::Text, TypeKind::Primitive(Primitive::String)),
            (AttributeType::LocalizableText, TypeKind::Sdk(LOCALIZED_STRING)),
            (AttributeType::Enum, TypeKind::Sdk(ATTRIBUTE_PLAIN_ENUM_VALUE)),
            (
                AttributeType::LocalizedEnum,
                TypeKind::Sdk(ATTRIBUTE_LOCALIZED_ENUM_VALUE),
            ),
            (AttributeType::Number, TypeKind::Primitive(Primitive::Double)),
            (AttributeType::Money, TypeKind::Sdk(TYPED_MONEY)),
            (AttributeType::Date, TypeKind::Primitive(Primitive::Date)),
            (AttributeType::Time, TypeKind::Primitive(Primitive::Time)),
            (AttributeType::DateTime, TypeKind::Primitive(Primitive::DateTime)),
            (AttributeType::Unknown, TypeKind::Any),
        ];

        for (attribute_type, expected) in cases {
            assert_eq!(
                mapper
                    .map_attribute_type(&attribute_type, false)
                    .expect("map"),
                nullable(expected.clone())
            );
            assert_eq!(
                mapper
                    .map_attribute_type(&attribute_type, true)
                    .expect("map"),
                required(expected)
            );
        }
    }

    #[test]
    fn test_number_asymmetry() {
        let ir = SchemaIr::default();
        let config = Configuration::default();
        let mapper = TypeMapper::new(&ir, &config);

        assert_eq!(
            mapper.map_field_type(&FieldType::Number).kind,
            TypeKind::Primitive(Primitive::Int)
        );
        assert_eq!(
            mapper
                .map_attribute_type(&AttributeType::Number, true)
                .expect("map")
                .kind,
            TypeKind::Primitive(Primitive::Double)
        );
    }

    #[test]
    fn test_references() {
        let ir = SchemaIr::default();
        let config = Configuration::default();
        let mapper = TypeMapper::new(&ir, &config);

        let mapped = mapper.map_field_type(&FieldType::Reference {
            reference_type_id: CustomFieldReferenceTypeId::Zone,
        });
        assert_eq!(mapped, nullable(TypeKind::Sdk(SdkType::new("zone", "ZoneReference"))));

        let mapped = mapper
            .map_attribute_type(
                &AttributeType::Reference {
                    reference_type_id: ReferenceTypeId::Unknown,
                },
                true,
            )
            .expect("map");
        assert_eq!(mapped, required(TypeKind::Sdk(REFERENCE)));
        assert!(mapped.is_fallback());
    }

    #[test]
    fn test_sets_of_sets() {
        let ir = SchemaIr::default();
        let config = Configuration::default();
        let mapper = TypeMapper::new(&ir, &config);

        let mapped = mapper.map_field_type(&FieldType::set_of(FieldType::set_of(FieldType::Date)));
        let expected = nullable(TypeKind::Set(Box::new(nullable(TypeKind::Set(Box::new(
            nullable(TypeKind::Primitive(Primitive::Date)),
        ))))));
        assert_eq!(mapped, expected);

        let mapped = mapper
            .map_attribute_type(&AttributeType::set_of(AttributeType::Text), true)
            .expect("map");
        let expected = required(TypeKind::Set(Box::new(required(TypeKind::Primitive(
            Primitive::String,
        )))));
        assert_eq!(mapped, expected);
    }

    #[test]
    fn test_nested_resolves_to_class_name() {
        let ir = SchemaIr::new(
            Vec::new(),
            vec![
                ProductType::new("pt-1", "Bundle")
                    .with_attribute("parts", AttributeType::nested("pt-1"), false),
            ],
        );
        let config = Configuration::default();
        let mapper = TypeMapper::new(&ir, &config);

        let mapped = mapper
            .map_attribute_type(&AttributeType::nested("pt-1"), false)
            .expect("map");
        assert_eq!(
            mapped,
            nullable(TypeKind::Class("TypedBundleVariantAttributes".into()))
        );
    }

    #[test]
    fn test_nested_uses_class_override() {
        let ir = SchemaIr::new(
            Vec::new(),
            vec![ProductType::new("pt-1", "Bundle").with_key("bundle")],
        );
        let config = Configuration::default().with_product_type_class("bundle", "Kit");
        let mapper = TypeMapper::new(&ir, &config);

        let mapped = mapper
            .map_attribute_type(&AttributeType::set_of(AttributeType::nested("pt-1")), true)
            .expect("map");
        assert_eq!(
            mapped,
            required(TypeKind::Set(Box::new(required(TypeKind::Class("Kit".into())))))
        );
    }

    #[test]
    fn test_dangling_nested_degrades() {
        let ir = SchemaIr::default();
        let config = Configuration::default();
        let mapper = TypeMapper::new(&ir, &config);

        let mapped = mapper
            .map_attribute_type(&AttributeType::nested("missing"), false)
            .expect("map");
        assert_eq!(mapped, nullable(TypeKind::AttributeList));
        assert!(mapped.is_fallback());
    }
}
