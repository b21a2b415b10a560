//! # typedfields Codegen
//!
//! Typed projections of commercetools custom fields and product variant
//! attributes.
//!
//! This crate provides:
//! - A naming policy with per-entity overrides
//! - Field-type and reference-kind mapping
//! - Class synthesis and file assembly into a language-agnostic model
//! - Rust source rendering of that model
//! - Build script integration

pub mod assembler;
pub mod classes;
pub mod config;
pub mod error;
pub mod generator;
pub mod mapper;
pub mod model;
pub mod naming;
pub mod references;
pub mod rust;

pub use assembler::FileAssembler;
pub use classes::ClassSynthesizer;
pub use config::{Configuration, EntityOverrides};
pub use error::CodegenError;
pub use generator::{GeneratedFile, Generator};
pub use mapper::TypeMapper;
pub use model::{
    Domain, Equality, OutputClass, OutputConstant, OutputField, OutputType, OutputUnit,
    Primitive, Projection, SdkType, TypeKind,
};
pub use naming::Naming;
pub use references::{attribute_reference, custom_field_reference};
pub use rust::RustRenderer;

use typedfields_schema::{SchemaIr, parse_snapshot, parse_snapshot_file, validate_schema};

/// Generates Rust code from a JSON schema snapshot.
///
/// # Arguments
/// * `json` - Snapshot holding `types` and `productTypes`
/// * `config` - Generation configuration
///
/// # Returns
/// One generated file per non-empty domain.
///
/// # Errors
/// Returns `CodegenError` if parsing, validation, or generation fails.
pub fn generate_from_json(
    json: &str,
    config: &Configuration,
) -> Result<Vec<GeneratedFile>, CodegenError> {
    let ir = SchemaIr::from_snapshot(parse_snapshot(json)?);
    validate_schema(&ir)?;
    Generator::new(&ir, config).generate()
}

/// Generates Rust code from a JSON schema snapshot file.
///
/// # Arguments
/// * `path` - Path to the snapshot file
/// * `config` - Generation configuration
///
/// # Returns
/// One generated file per non-empty domain.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, validation, or generation
/// fails.
pub fn generate_from_file(
    path: &std::path::Path,
    config: &Configuration,
) -> Result<Vec<GeneratedFile>, CodegenError> {
    let ir = SchemaIr::from_snapshot(parse_snapshot_file(path)?);
    validate_schema(&ir)?;
    Generator::new(&ir, config).generate()
}
