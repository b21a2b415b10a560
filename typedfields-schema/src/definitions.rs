//! Schema entity definitions.
//!
//! This module contains the two entity kinds a generation run consumes:
//! custom-field types ([`Type`]) and product types ([`ProductType`]), along
//! with their field and attribute definitions.

use crate::types::{AttributeType, FieldType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Localized text keyed by locale tag.
pub type LocalizedString = BTreeMap<String, String>;

/// Common view over the two schema entity kinds.
///
/// Naming and configuration lookups go through this trait so they treat
/// types and product types the same way.
pub trait SchemaEntity {
    /// Field or attribute definition type.
    type Field: SchemaField;

    /// Human-readable entity kind, used in error messages.
    const KIND: &'static str;

    /// Stable identifier.
    fn id(&self) -> &str;

    /// Key used for configuration override lookup.
    fn key(&self) -> &str;

    /// Text the default class name is derived from.
    fn class_seed(&self) -> &str;

    /// Field definitions in declaration order.
    fn fields(&self) -> &[Self::Field];
}

/// Common view over field and attribute definitions.
pub trait SchemaField {
    /// Raw schema name of the field.
    fn name(&self) -> &str;
}

/// Custom-field type definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Type {
    /// Type id.
    pub id: String,
    /// User-defined key.
    pub key: String,
    /// Localized display name.
    #[serde(default)]
    pub name: LocalizedString,
    /// Resource kinds the type can extend.
    #[serde(default)]
    pub resource_type_ids: Vec<String>,
    /// Field definitions in declaration order.
    #[serde(default)]
    pub field_definitions: Vec<FieldDefinition>,
}

impl Type {
    /// Creates a new type with no fields.
    #[must_use]
    pub fn new(id: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            key: key.into(),
            name: LocalizedString::new(),
            resource_type_ids: Vec::new(),
            field_definitions: Vec::new(),
        }
    }

    /// Adds a field definition.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, field_type: FieldType) -> Self {
        self.field_definitions
            .push(FieldDefinition::new(name, field_type));
        self
    }
}

impl SchemaEntity for Type {
    type Field = FieldDefinition;

    const KIND: &'static str = "type";

    fn id(&self) -> &str {
        &self.id
    }

    fn key(&self) -> &str {
        &self.key
    }

    fn class_seed(&self) -> &str {
        &self.key
    }

    fn fields(&self) -> &[FieldDefinition] {
        &self.field_definitions
    }
}

/// Custom field definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Raw field name.
    pub name: String,
    /// Field type.
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Whether the schema requires the field.
    ///
    /// Custom fields are always projected as optional; the flag is kept for
    /// completeness only.
    #[serde(default)]
    pub required: bool,
    /// Localized label.
    #[serde(default)]
    pub label: LocalizedString,
}

impl FieldDefinition {
    /// Creates a new optional field definition.
    #[must_use]
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            required: false,
            label: LocalizedString::new(),
        }
    }
}

impl SchemaField for FieldDefinition {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Product type definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductType {
    /// Product type id.
    pub id: String,
    /// Optional user-defined key.
    #[serde(default)]
    pub key: Option<String>,
    /// Display name.
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: String,
    /// Attribute definitions in declaration order.
    #[serde(default)]
    pub attributes: Vec<AttributeDefinition>,
}

impl ProductType {
    /// Creates a new product type with no attributes.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            key: None,
            name: name.into(),
            description: String::new(),
            attributes: Vec::new(),
        }
    }

    /// Sets the key.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Adds an attribute definition.
    #[must_use]
    pub fn with_attribute(
        mut self,
        name: impl Into<String>,
        attribute_type: AttributeType,
        is_required: bool,
    ) -> Self {
        self.attributes.push(AttributeDefinition::new(
            name,
            attribute_type,
            is_required,
        ));
        self
    }
}

impl SchemaEntity for ProductType {
    type Field = AttributeDefinition;

    const KIND: &'static str = "product type";

    fn id(&self) -> &str {
        &self.id
    }

    fn key(&self) -> &str {
        self.key.as_deref().unwrap_or(&self.name)
    }

    fn class_seed(&self) -> &str {
        &self.name
    }

    fn fields(&self) -> &[AttributeDefinition] {
        &self.attributes
    }
}

/// Product attribute definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeDefinition {
    /// Raw attribute name.
    pub name: String,
    /// Attribute type.
    #[serde(rename = "type")]
    pub attribute_type: AttributeType,
    /// Whether the schema requires the attribute.
    #[serde(default)]
    pub is_required: bool,
    /// Localized label.
    #[serde(default)]
    pub label: LocalizedString,
}

impl AttributeDefinition {
    /// Creates a new attribute definition.
    #[must_use]
    pub fn new(name: impl Into<String>, attribute_type: AttributeType, is_required: bool) -> Self {
        Self {
            name: name.into(),
            attribute_type,
            is_required,
            label: LocalizedString::new(),
        }
    }
}

impl SchemaField for AttributeDefinition {
    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ReferenceTypeId;

    #[test]
    fn test_type_from_json() {
        let json = r#"{
            "id": "t-1",
            "key": "color",
            "name": {"en": "Color"},
            "resourceTypeIds": ["order"],
            "fieldDefinitions": [
                {"name": "colorName", "type": {"name": "Enum", "values": []},
                 "required": false, "label": {"en": "Color name"}, "inputHint": "SingleLine"}
            ]
        }"#;

        let ty: Type = serde_json::from_str(json).expect("Failed to parse");
        assert_eq!(ty.key(), "color");
        assert_eq!(ty.class_seed(), "color");
        assert_eq!(ty.fields().len(), 1);
        assert_eq!(ty.fields()[0].name(), "colorName");
        assert_eq!(ty.fields()[0].field_type, FieldType::Enum);
    }

    #[test]
    fn test_product_type_key_falls_back_to_name() {
        let product_type = ProductType::new("pt-1", "T-Shirt");
        assert_eq!(product_type.key(), "T-Shirt");

        let product_type = product_type.with_key("tshirt");
        assert_eq!(product_type.key(), "tshirt");
        assert_eq!(product_type.class_seed(), "T-Shirt");
    }

    #[test]
    fn test_product_type_from_json() {
        let json = r#"{
            "id": "pt-1",
            "version": 3,
            "name": "Shoe",
            "description": "Footwear",
            "attributes": [
                {"name": "size", "type": {"name": "number"}, "isRequired": true,
                 "attributeConstraint": "None", "isSearchable": true},
                {"name": "brand", "type": {"name": "reference", "referenceTypeId": "channel"}}
            ]
        }"#;

        let product_type: ProductType = serde_json::from_str(json).expect("Failed to parse");
        assert_eq!(product_type.key, None);
        assert_eq!(product_type.attributes.len(), 2);
        assert!(product_type.attributes[0].is_required);
        assert!(!product_type.attributes[1].is_required);
        assert_eq!(
            product_type.attributes[1].attribute_type,
            AttributeType::Reference {
                reference_type_id: ReferenceTypeId::Channel
            }
        );
    }

    #[test]
    fn test_field_order_preserved() {
        let ty = Type::new("t-1", "order-extras")
            .with_field("zeta", FieldType::String)
            .with_field("alpha", FieldType::Boolean)
            .with_field("mid", FieldType::Number);

        let names: Vec<_> = ty.fields().iter().map(SchemaField::name).collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
    }
}
