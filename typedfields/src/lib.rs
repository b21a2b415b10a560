//! # typedfields
//!
//! Typed projections of commercetools custom fields and product variant
//! attributes.
//!
//! The commercetools API returns custom fields and variant attributes as
//! untyped name/value maps. typedfields reads the project's custom-field
//! types and product types and generates serde structs for them, so
//! application code works with checked fields instead of string lookups.
//!
//! ## Features
//!
//! - **Schema snapshots** - Load types and product types from JSON, as plain
//!   arrays or paged query responses
//! - **Cycle-safe nesting** - Self- and mutually-referencing product types
//!   generate finite structs
//! - **Configurable naming** - Override class and field names, and attribute
//!   required flags, per entity
//! - **Build script friendly** - Generate into `OUT_DIR` from `build.rs`
//!
//! ## Quick Start
//!
//! ```ignore
//! use typedfields::prelude::*;
//!
//! let config = Configuration::load(Path::new("typedfields.toml"))?;
//! for file in generate_from_file(Path::new("schema.json"), &config)? {
//!     file.write_to(Path::new(&std::env::var("OUT_DIR")?))?;
//! }
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Schema model, snapshot loading and validation
//! - [`codegen`] - Naming, type mapping, class synthesis and Rust rendering

pub mod prelude;

/// Schema model, snapshot loading and validation.
pub mod schema {
    pub use typedfields_schema::*;
}

/// Code generation from schema snapshots.
pub mod codegen {
    pub use typedfields_codegen::*;
}

// Re-export commonly used items at the crate root
pub use typedfields_codegen::{
    CodegenError, Configuration, GeneratedFile, Generator, generate_from_file,
    generate_from_json,
};
pub use typedfields_schema::{SchemaIr, parse_snapshot, validate_schema};
