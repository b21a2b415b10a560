//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```ignore
//! use typedfields::prelude::*;
//! ```

// Schema types
pub use typedfields_schema::{
    AttributeType, FieldType, ParseError, ProductType, SchemaEntity, SchemaError, SchemaIr,
    SchemaSnapshot, Type, parse_snapshot, parse_snapshot_file, validate_schema,
};

// Generation
pub use typedfields_codegen::{
    CodegenError, Configuration, GeneratedFile, Generator, RustRenderer, generate_from_file,
    generate_from_json,
};

// Output model
pub use typedfields_codegen::{
    Domain, OutputClass, OutputField, OutputType, OutputUnit, Projection, TypeKind,
};
