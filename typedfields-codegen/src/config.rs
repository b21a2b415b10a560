//! Generation configuration.
//!
//! Configuration is passed explicitly to every naming, mapping and synthesis
//! call. It can be built in code or loaded from a TOML file:
//!
//! ```toml
//! package_name = "shop.generated"
//!
//! [custom_types.color.fields]
//! colorName = "shade"
//!
//! [product_types.tshirt]
//! class_name = "ShirtAttributes"
//!
//! [product_types.tshirt.required]
//! size = true
//! ```
//!
//! Overrides are keyed by entity key or id. When both are present for one
//! entity, the key entry wins outright and the id entry is not consulted.
//! Unknown keys are rejected.

use crate::error::CodegenError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use typedfields_schema::{SchemaEntity, SchemaField};

/// Default package name.
pub const DEFAULT_PACKAGE_NAME: &str = "generated";

/// Default module path SDK types are imported from.
pub const DEFAULT_SDK_CRATE: &str = "commercetools";

/// Generation configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Configuration {
    /// Dotted package path the generated files live under.
    pub package_name: String,
    /// Module path the rendered code imports SDK types from.
    pub sdk_crate: String,
    /// Overrides for custom-field types, by type key or id.
    pub custom_types: BTreeMap<String, EntityOverrides>,
    /// Overrides for product types, by product type key or id.
    pub product_types: BTreeMap<String, EntityOverrides>,
}

/// Per-entity overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EntityOverrides {
    /// Replacement class name.
    pub class_name: Option<String>,
    /// Output field name by raw field name.
    pub fields: BTreeMap<String, String>,
    /// Required flag by raw attribute name. Only used for product types.
    pub required: BTreeMap<String, bool>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            package_name: DEFAULT_PACKAGE_NAME.to_string(),
            sdk_crate: DEFAULT_SDK_CRATE.to_string(),
            custom_types: BTreeMap::new(),
            product_types: BTreeMap::new(),
        }
    }
}

impl Configuration {
    /// Creates a default configuration for the given package.
    #[must_use]
    pub fn new(package_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            ..Self::default()
        }
    }

    /// Parses a configuration from TOML.
    ///
    /// # Errors
    /// Returns `CodegenError::Config` if the TOML is invalid.
    pub fn from_toml_str(content: &str) -> Result<Self, CodegenError> {
        toml::from_str(content).map_err(|e| CodegenError::config(e.to_string()))
    }

    /// Loads a configuration file.
    ///
    /// # Errors
    /// Returns `CodegenError` if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, CodegenError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Returns the package path segments.
    #[must_use]
    pub fn package_segments(&self) -> Vec<&str> {
        self.package_name
            .split(['.', ':'])
            .filter(|segment| !segment.is_empty())
            .collect()
    }

    /// Overrides a field name for a custom-field type.
    #[must_use]
    pub fn with_custom_field_name(
        mut self,
        type_key: impl Into<String>,
        field: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        self.custom_types
            .entry(type_key.into())
            .or_default()
            .fields
            .insert(field.into(), name.into());
        self
    }

    /// Overrides an attribute name for a product type.
    #[must_use]
    pub fn with_attribute_name(
        mut self,
        product_type_key: impl Into<String>,
        attribute: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        self.product_types
            .entry(product_type_key.into())
            .or_default()
            .fields
            .insert(attribute.into(), name.into());
        self
    }

    /// Overrides the required flag of a product type attribute.
    #[must_use]
    pub fn with_attribute_required(
        mut self,
        product_type_key: impl Into<String>,
        attribute: impl Into<String>,
        required: bool,
    ) -> Self {
        self.product_types
            .entry(product_type_key.into())
            .or_default()
            .required
            .insert(attribute.into(), required);
        self
    }

    /// Overrides the class name of a custom-field type.
    #[must_use]
    pub fn with_custom_type_class(
        mut self,
        type_key: impl Into<String>,
        class_name: impl Into<String>,
    ) -> Self {
        self.custom_types.entry(type_key.into()).or_default().class_name =
            Some(class_name.into());
        self
    }

    /// Overrides the class name of a product type.
    #[must_use]
    pub fn with_product_type_class(
        mut self,
        product_type_key: impl Into<String>,
        class_name: impl Into<String>,
    ) -> Self {
        self.product_types
            .entry(product_type_key.into())
            .or_default()
            .class_name = Some(class_name.into());
        self
    }

    /// Returns the overrides for a custom-field type.
    #[must_use]
    pub fn custom_type_overrides<E: SchemaEntity>(&self, entity: &E) -> Option<&EntityOverrides> {
        lookup(&self.custom_types, entity)
    }

    /// Returns the overrides for a product type.
    #[must_use]
    pub fn product_type_overrides<E: SchemaEntity>(&self, entity: &E) -> Option<&EntityOverrides> {
        lookup(&self.product_types, entity)
    }

    /// Resolves whether a product type attribute is required.
    ///
    /// A configured flag wins over the schema's own.
    #[must_use]
    pub fn is_attribute_required<E: SchemaEntity>(
        &self,
        entity: &E,
        attribute: &E::Field,
        schema_required: bool,
    ) -> bool {
        self.product_type_overrides(entity)
            .and_then(|overrides| overrides.required.get(attribute.name()))
            .copied()
            .unwrap_or(schema_required)
    }
}

/// Finds overrides by entity key, then by id.
///
/// Entries are not merged: an entry under the key hides any under the id.
fn lookup<'a, E: SchemaEntity>(
    map: &'a BTreeMap<String, EntityOverrides>,
    entity: &E,
) -> Option<&'a EntityOverrides> {
    map.get(entity.key()).or_else(|| map.get(entity.id()))
}
