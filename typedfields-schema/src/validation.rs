//! Schema validation utilities.
//!
//! This module checks structural consistency of a schema before generation.
//! Dangling nested product-type references are not reported here;
//! generation degrades them instead of failing.

use crate::definitions::{SchemaEntity, SchemaField};
use crate::error::SchemaError;
use crate::ir::SchemaIr;
use std::collections::HashSet;

/// Validates an indexed schema for correctness.
///
/// # Arguments
/// * `ir` - The schema to validate
///
/// # Returns
/// Ok(()) if valid, or SchemaError describing the first issue found.
///
/// # Errors
/// Returns `SchemaError` if validation fails.
pub fn validate_schema(ir: &SchemaIr) -> Result<(), SchemaError> {
    validate_entities(ir.types(), true)?;
    validate_entities(ir.product_types(), false)?;
    Ok(())
}

/// Validates one entity collection.
fn validate_entities<E: SchemaEntity>(
    entities: &[E],
    unique_keys: bool,
) -> Result<(), SchemaError> {
    let mut seen_ids = HashSet::new();
    let mut seen_keys = HashSet::new();

    for entity in entities {
        if entity.id().is_empty() {
            return Err(SchemaError::empty(E::KIND, entity.key(), "id"));
        }

        if entity.key().is_empty() {
            return Err(SchemaError::empty(E::KIND, entity.id(), "key"));
        }

        if !seen_ids.insert(entity.id()) {
            return Err(SchemaError::duplicate_entity(E::KIND, entity.id()));
        }

        if unique_keys && !seen_keys.insert(entity.key()) {
            return Err(SchemaError::duplicate_entity(E::KIND, entity.key()));
        }

        validate_fields(entity)?;
    }

    Ok(())
}

/// Validates the field names within one entity.
fn validate_fields<E: SchemaEntity>(entity: &E) -> Result<(), SchemaError> {
    let mut seen_names = HashSet::new();

    for field in entity.fields() {
        if field.name().is_empty() {
            return Err(SchemaError::empty(E::KIND, entity.key(), "field name"));
        }

        if !seen_names.insert(field.name()) {
            return Err(SchemaError::duplicate_field(
                E::KIND,
                entity.key(),
                field.name(),
            ));
        }
    }

    Ok(())
}
