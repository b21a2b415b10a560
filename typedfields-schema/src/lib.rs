//! # typedfields Schema
//!
//! Schema model for custom-field types and product types.
//!
//! This crate provides:
//! - The field-type taxonomy of both schema domains
//! - Reference-kind enumerations
//! - Schema entity definitions (types and product types)
//! - JSON snapshot loading
//! - Schema validation
//! - A whole-schema index for code generation

pub mod definitions;
pub mod error;
pub mod ir;
pub mod parser;
pub mod types;
pub mod validation;

pub use definitions::{
    AttributeDefinition, FieldDefinition, LocalizedString, ProductType, SchemaEntity,
    SchemaField, Type,
};
pub use error::{ParseError, SchemaError};
pub use ir::SchemaIr;
pub use parser::{
    SchemaSnapshot, parse_product_types, parse_snapshot, parse_snapshot_file, parse_types,
};
pub use types::{AttributeType, CustomFieldReferenceTypeId, FieldType, ReferenceTypeId};
pub use validation::validate_schema;
