//! Naming policy.
//!
//! Maps schema entities and their fields to output identifiers. Every
//! mapping consults the configured overrides first and falls back to the
//! default derivation on a miss.

use crate::config::{Configuration, EntityOverrides};
use crate::error::CodegenError;
use crate::model::Domain;
use crate::rust::is_keyword;
use typedfields_schema::ir::{to_pascal_case, to_upper_snake_case};
use typedfields_schema::{SchemaEntity, SchemaField};

/// Naming policy bound to one configuration.
#[derive(Debug, Clone, Copy)]
pub struct Naming<'a> {
    config: &'a Configuration,
}

impl<'a> Naming<'a> {
    /// Creates a naming policy over the given configuration.
    #[must_use]
    pub const fn new(config: &'a Configuration) -> Self {
        Self { config }
    }

    /// Returns the class name generated for an entity.
    ///
    /// # Errors
    /// Returns `CodegenError::InvalidIdentifier` if no valid name results.
    pub fn class_name<E: SchemaEntity>(
        &self,
        domain: Domain,
        entity: &E,
    ) -> Result<String, CodegenError> {
        if let Some(name) = self
            .overrides(domain, entity)
            .and_then(|o| o.class_name.as_deref())
        {
            return checked_class(name.to_string(), entity);
        }

        let stem = to_pascal_case(entity.class_seed());
        if stem.is_empty() {
            return Err(CodegenError::invalid_identifier(
                "class name",
                entity.class_seed(),
                entity.key(),
            ));
        }

        let name = match domain {
            Domain::CustomFields => format!("Typed{stem}Fields"),
            Domain::VariantAttributes => format!("Typed{stem}VariantAttributes"),
        };
        checked_class(name, entity)
    }

    /// Returns the output field name for a field of an entity.
    ///
    /// The default keeps the raw name's case; characters that cannot appear
    /// in an identifier become `_`.
    ///
    /// # Errors
    /// Returns `CodegenError::InvalidIdentifier` if no valid name results.
    pub fn field_name<E: SchemaEntity>(
        &self,
        domain: Domain,
        entity: &E,
        field: &E::Field,
    ) -> Result<String, CodegenError> {
        let name = self
            .overrides(domain, entity)
            .and_then(|o| o.fields.get(field.name()))
            .cloned()
            .unwrap_or_else(|| sanitize(field.name()));
        checked("field name", name, entity)
    }

    /// Returns the constant name holding a field's raw name.
    ///
    /// # Errors
    /// Returns `CodegenError::InvalidIdentifier` if no valid name results.
    pub fn constant_name<E: SchemaEntity>(
        &self,
        domain: Domain,
        entity: &E,
        field: &E::Field,
    ) -> Result<String, CodegenError> {
        let field_name = self.field_name(domain, entity, field)?;
        checked("constant name", to_upper_snake_case(&field_name), entity)
    }

    fn overrides<E: SchemaEntity>(
        &self,
        domain: Domain,
        entity: &E,
    ) -> Option<&'a EntityOverrides> {
        match domain {
            Domain::CustomFields => self.config.custom_type_overrides(entity),
            Domain::VariantAttributes => self.config.product_type_overrides(entity),
        }
    }
}

/// Returns true if the name is a plain ASCII identifier.
#[must_use]
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        Some('_') if name.len() > 1 => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Replaces characters that cannot appear in an identifier.
fn sanitize(raw: &str) -> String {
    let mut name: String = raw
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert(0, '_');
    }
    name
}

fn checked<E: SchemaEntity>(
    what: &'static str,
    name: String,
    entity: &E,
) -> Result<String, CodegenError> {
    if is_identifier(&name) {
        Ok(name)
    } else {
        Err(CodegenError::invalid_identifier(what, name, entity.key()))
    }
}

/// Class names become type names verbatim, so keywords are rejected.
fn checked_class<E: SchemaEntity>(name: String, entity: &E) -> Result<String, CodegenError> {
    if is_keyword(&name) {
        return Err(CodegenError::invalid_identifier("class name", name, entity.key()));
    }
    checked("class name", name, entity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use typedfields_schema::{AttributeType, FieldType, ProductType, Type};

    #[test]
    fn test_default_class_names() {
        let config = Configuration::default();
        let naming = Naming::new(&config);

        let ty = Type::new("t-1", "color");
        assert_eq!(
            naming.class_name(Domain::CustomFields, &ty).expect("name"),
            "TypedColorFields"
        );

        let product_type = ProductType::new("pt-1", "T-Shirt");
        assert_eq!(
            naming
                .class_name(Domain::VariantAttributes, &product_type)
                .expect("name"),
            "TypedTShirtVariantAttributes"
        );
    }

    #[test]
    fn test_class_name_override() {
        let config = Configuration::default().with_product_type_class("shoe", "Footwear");
        let naming = Naming::new(&config);
        let product_type = ProductType::new("pt-1", "Shoe").with_key("shoe");

        assert_eq!(
            naming
                .class_name(Domain::VariantAttributes, &product_type)
                .expect("name"),
            "Footwear"
        );
    }

    #[test]
    fn test_keyword_class_name_override_rejected() {
        let ty = Type::new("t-1", "color");
        for keyword in ["type", "match", "crate", "Self"] {
            let config = Configuration::default().with_custom_type_class("color", keyword);
            let naming = Naming::new(&config);

            let result = naming.class_name(Domain::CustomFields, &ty);
            assert!(
                matches!(
                    result,
                    Err(CodegenError::InvalidIdentifier {
                        what: "class name",
                        ..
                    })
                ),
                "{keyword} accepted"
            );
        }

        let config = Configuration::default().with_custom_type_class("color", "Match");
        let naming = Naming::new(&config);
        assert_eq!(
            naming.class_name(Domain::CustomFields, &ty).expect("name"),
            "Match"
        );
    }

    #[test]
    fn test_class_name_unusable_seed() {
        let config = Configuration::default();
        let naming = Naming::new(&config);
        let ty = Type::new("t-1", "---");

        let result = naming.class_name(Domain::CustomFields, &ty);
        assert!(matches!(
            result,
            Err(CodegenError::InvalidIdentifier {
                what: "class name",
                ..
            })
        ));
    }

    #[test]
    fn test_field_name_default_preserves_case() {
        let config = Configuration::default();
        let naming = Naming::new(&config);
        let ty = Type::new("t-1", "color").with_field("colorName", FieldType::Enum);

        let name = naming
            .field_name(Domain::CustomFields, &ty, &ty.field_definitions[0])
            .expect("name");
        assert_eq!(name, "colorName");
    }

    #[test]
    fn test_field_name_sanitized() {
        let config = Configuration::default();
        let naming = Naming::new(&config);
        let ty = Type::new("t-1", "color")
            .with_field("color-code", FieldType::String)
            .with_field("3d", FieldType::Boolean);

        let first = naming
            .field_name(Domain::CustomFields, &ty, &ty.field_definitions[0])
            .expect("name");
        let second = naming
            .field_name(Domain::CustomFields, &ty, &ty.field_definitions[1])
            .expect("name");
        assert_eq!(first, "color_code");
        assert_eq!(second, "_3d");
    }

    #[test]
    fn test_field_name_override() {
        let config = Configuration::default().with_custom_field_name("x", "foo", "bar");
        let naming = Naming::new(&config);
        let ty = Type::new("t-1", "x").with_field("foo", FieldType::String);

        let name = naming
            .field_name(Domain::CustomFields, &ty, &ty.field_definitions[0])
            .expect("name");
        assert_eq!(name, "bar");
    }

    #[test]
    fn test_override_is_domain_scoped() {
        let config = Configuration::default().with_attribute_name("x", "foo", "bar");
        let naming = Naming::new(&config);
        let ty = Type::new("t-1", "x").with_field("foo", FieldType::String);

        let name = naming
            .field_name(Domain::CustomFields, &ty, &ty.field_definitions[0])
            .expect("name");
        assert_eq!(name, "foo");
    }

    #[test]
    fn test_invalid_override_rejected() {
        let config = Configuration::default().with_custom_field_name("x", "foo", "not valid");
        let naming = Naming::new(&config);
        let ty = Type::new("t-1", "x").with_field("foo", FieldType::String);

        let result = naming.field_name(Domain::CustomFields, &ty, &ty.field_definitions[0]);
        assert!(matches!(result, Err(CodegenError::InvalidIdentifier { .. })));
    }

    #[test]
    fn test_constant_name() {
        let config = Configuration::default();
        let naming = Naming::new(&config);
        let product_type = ProductType::new("pt-1", "Shoe").with_attribute(
            "shippingMethodId",
            AttributeType::Text,
            false,
        );

        let name = naming
            .constant_name(
                Domain::VariantAttributes,
                &product_type,
                &product_type.attributes[0],
            )
            .expect("name");
        assert_eq!(name, "SHIPPING_METHOD_ID");
    }

    #[test]
    fn test_constant_name_follows_override() {
        let config = Configuration::default().with_attribute_name("Shoe", "sz", "shoeSize");
        let naming = Naming::new(&config);
        let product_type =
            ProductType::new("pt-1", "Shoe").with_attribute("sz", AttributeType::Number, true);

        let name = naming
            .constant_name(
                Domain::VariantAttributes,
                &product_type,
                &product_type.attributes[0],
            )
            .expect("name");
        assert_eq!(name, "SHOE_SIZE");
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("colorName"));
        assert!(is_identifier("_3d"));
        assert!(is_identifier("TypedColorFields"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("_"));
        assert!(!is_identifier("3d"));
        assert!(!is_identifier("a-b"));
    }
}
