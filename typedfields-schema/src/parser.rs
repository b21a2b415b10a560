//! Schema snapshot loader.
//!
//! This module parses JSON schema snapshots into the schema model. A snapshot
//! holds both entity collections:
//!
//! ```json
//! { "types": [...], "productTypes": [...] }
//! ```
//!
//! Each section may be a plain array or a paged query response
//! (`{"results": [...]}`) exactly as returned by the remote API.

use crate::definitions::{ProductType, Type};
use crate::error::ParseError;
use serde::Deserialize;
use std::path::Path;

/// Both entity collections of one schema.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaSnapshot {
    /// Custom-field types, in input order.
    pub types: Vec<Type>,
    /// Product types, in input order.
    pub product_types: Vec<ProductType>,
}

impl SchemaSnapshot {
    /// Creates a snapshot from the two collections.
    #[must_use]
    pub fn new(types: Vec<Type>, product_types: Vec<ProductType>) -> Self {
        Self {
            types,
            product_types,
        }
    }

    /// Returns true if neither collection has entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty() && self.product_types.is_empty()
    }
}

/// A collection as it appears on the wire.
#[derive(Deserialize)]
#[serde(untagged)]
enum Section<T> {
    Plain(Vec<T>),
    Paged { results: Vec<T> },
}

impl<T> Section<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            Self::Plain(items) => items,
            Self::Paged { results } => results,
        }
    }
}

impl<T> Default for Section<T> {
    fn default() -> Self {
        Self::Plain(Vec::new())
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSnapshot {
    #[serde(default)]
    types: Section<Type>,
    #[serde(default)]
    product_types: Section<ProductType>,
}

/// Parses a schema snapshot from a JSON string.
///
/// # Arguments
/// * `json` - Snapshot content
///
/// # Returns
/// Parsed snapshot or parse error.
///
/// # Errors
/// Returns `ParseError` if the JSON is malformed or is not a snapshot object.
pub fn parse_snapshot(json: &str) -> Result<SchemaSnapshot, ParseError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    if !value.is_object() {
        return Err(ParseError::invalid_structure(
            "schema snapshot must be a JSON object",
        ));
    }

    let raw: RawSnapshot = serde_json::from_value(value)?;
    Ok(SchemaSnapshot::new(
        raw.types.into_vec(),
        raw.product_types.into_vec(),
    ))
}

/// Parses a schema snapshot from a file.
///
/// # Errors
/// Returns `ParseError` if the file cannot be read or parsed.
pub fn parse_snapshot_file(path: &Path) -> Result<SchemaSnapshot, ParseError> {
    let json = std::fs::read_to_string(path)?;
    parse_snapshot(&json)
}

/// Parses a single collection of custom-field types.
///
/// # Errors
/// Returns `ParseError` if the JSON is malformed.
pub fn parse_types(json: &str) -> Result<Vec<Type>, ParseError> {
    let section: Section<Type> = serde_json::from_str(json)?;
    Ok(section.into_vec())
}

/// Parses a single collection of product types.
///
/// # Errors
/// Returns `ParseError` if the JSON is malformed.
pub fn parse_product_types(json: &str) -> Result<Vec<ProductType>, ParseError> {
    let section: Section<ProductType> = serde_json::from_str(json)?;
    Ok(section.into_vec())
}
