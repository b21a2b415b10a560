//! Intermediate representation for code generation.
//!
//! This module provides the whole-schema index every generation run works
//! against. Nested attribute types are resolved by product type id across the
//! entire collection, so the index must be built before any entity is
//! generated.

use crate::definitions::{ProductType, Type};
use crate::parser::SchemaSnapshot;
use std::collections::HashMap;

/// Intermediate representation of a schema for code generation.
#[derive(Debug, Clone, Default)]
pub struct SchemaIr {
    types: Vec<Type>,
    product_types: Vec<ProductType>,
    /// Product type lookup by id; positions into `product_types`.
    product_type_index: HashMap<String, usize>,
}

impl SchemaIr {
    /// Creates an intermediate representation from the two collections.
    #[must_use]
    pub fn new(types: Vec<Type>, product_types: Vec<ProductType>) -> Self {
        let mut product_type_index = HashMap::with_capacity(product_types.len());
        for (idx, product_type) in product_types.iter().enumerate() {
            // First definition wins for duplicated ids; validation reports them.
            product_type_index
                .entry(product_type.id.clone())
                .or_insert(idx);
        }

        Self {
            types,
            product_types,
            product_type_index,
        }
    }

    /// Creates an intermediate representation from a parsed snapshot.
    #[must_use]
    pub fn from_snapshot(snapshot: SchemaSnapshot) -> Self {
        Self::new(snapshot.types, snapshot.product_types)
    }

    /// Returns the custom-field types in input order.
    #[must_use]
    pub fn types(&self) -> &[Type] {
        &self.types
    }

    /// Returns the product types in input order.
    #[must_use]
    pub fn product_types(&self) -> &[ProductType] {
        &self.product_types
    }

    /// Looks up a product type by id.
    #[must_use]
    pub fn product_type(&self, id: &str) -> Option<&ProductType> {
        self.product_type_index
            .get(id)
            .and_then(|&idx| self.product_types.get(idx))
    }
}

/// Converts a string to snake_case.
#[must_use]
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() && i > 0 && !result.ends_with('_') {
            result.push('_');
        }
        result.push(c.to_ascii_lowercase());
    }
    result
}

/// Converts a string to UPPER_SNAKE_CASE.
#[must_use]
pub fn to_upper_snake_case(s: &str) -> String {
    to_snake_case(s).to_ascii_uppercase()
}

/// Converts a string to PascalCase.
///
/// Every character that is not ASCII alphanumeric separates words and is
/// dropped.
#[must_use]
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = true;

    for c in s.chars() {
        if !c.is_ascii_alphanumeric() {
            capitalize_next = true;
        } else if capitalize_next {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    result
}
