//! Generation driver.
//!
//! Runs the file assembler for each domain, reports degraded fields and
//! renders every non-empty unit to a Rust source file.

use crate::assembler::FileAssembler;
use crate::config::Configuration;
use crate::error::CodegenError;
use crate::model::{Domain, OutputUnit};
use crate::rust::RustRenderer;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use typedfields_schema::SchemaIr;

/// A rendered source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Path relative to the output directory.
    pub path: PathBuf,
    /// File contents.
    pub contents: String,
}

impl GeneratedFile {
    /// Writes the file below `out_dir`, creating directories as needed.
    ///
    /// # Errors
    /// Returns `CodegenError::Io` if a directory or the file cannot be
    /// written.
    pub fn write_to(&self, out_dir: &Path) -> Result<PathBuf, CodegenError> {
        let target = out_dir.join(&self.path);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&target, &self.contents)?;
        info!(path = %target.display(), bytes = self.contents.len(), "wrote generated file");
        Ok(target)
    }
}

/// Main code generator.
pub struct Generator<'a> {
    ir: &'a SchemaIr,
    config: &'a Configuration,
}

impl<'a> Generator<'a> {
    /// Creates a new generator for the given schema.
    #[must_use]
    pub fn new(ir: &'a SchemaIr, config: &'a Configuration) -> Self {
        Self { ir, config }
    }

    /// Assembles the custom-fields unit.
    ///
    /// # Errors
    /// Returns `CodegenError` if the schema has no custom-field types or a
    /// class cannot be synthesized.
    pub fn custom_fields_unit(&self) -> Result<OutputUnit, CodegenError> {
        let unit = self.assembler().custom_fields(self.ir.types())?;
        report_fallbacks(&unit);
        Ok(unit)
    }

    /// Assembles the variant-attributes unit.
    ///
    /// # Errors
    /// Returns `CodegenError` if the schema has no product types or a class
    /// cannot be synthesized.
    pub fn variant_attributes_unit(&self) -> Result<OutputUnit, CodegenError> {
        let unit = self
            .assembler()
            .variant_attributes(self.ir.product_types())?;
        report_fallbacks(&unit);
        Ok(unit)
    }

    /// Generates one file per non-empty domain.
    ///
    /// # Errors
    /// Returns the first `CodegenError` of any domain; no files are returned
    /// in that case.
    pub fn generate(&self) -> Result<Vec<GeneratedFile>, CodegenError> {
        let mut units = Vec::with_capacity(2);

        if self.ir.types().is_empty() {
            info!(domain = Domain::CustomFields.as_str(), "no definitions, skipping");
        } else {
            units.push(self.custom_fields_unit()?);
        }
        if self.ir.product_types().is_empty() {
            info!(domain = Domain::VariantAttributes.as_str(), "no definitions, skipping");
        } else {
            units.push(self.variant_attributes_unit()?);
        }

        let renderer = RustRenderer::new(self.config);
        units
            .iter()
            .map(|unit| {
                Ok(GeneratedFile {
                    path: unit_path(unit),
                    contents: renderer.render(unit)?,
                })
            })
            .collect()
    }

    fn assembler(&self) -> FileAssembler<'a> {
        FileAssembler::new(self.ir, self.config)
    }
}

/// Returns the relative path of the file a unit renders to.
fn unit_path(unit: &OutputUnit) -> PathBuf {
    let mut path: PathBuf = unit.package.iter().collect();
    path.push(format!("{}.rs", unit.module));
    path
}

fn report_fallbacks(unit: &OutputUnit) {
    for (class, field) in unit.fallback_fields() {
        warn!(
            domain = unit.domain.as_str(),
            class = %class.name,
            field = %field.raw_name,
            "field degraded to a generic type"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use typedfields_schema::{AttributeType, FieldType, ProductType, Type};

    fn schema() -> SchemaIr {
        SchemaIr::new(
            vec![Type::new("t-1", "color").with_field("colorName", FieldType::Enum)],
            vec![
                ProductType::new("pt-1", "Shoe")
                    .with_attribute("size", AttributeType::Number, true)
                    .with_attribute("related", AttributeType::nested("pt-1"), false),
            ],
        )
    }

    #[test]
    fn test_generate_both_domains() {
        let ir = schema();
        let config = Configuration::new("shop.generated");
        let files = Generator::new(&ir, &config).generate().expect("generate");

        let paths: Vec<_> = files.iter().map(|f| f.path.clone()).collect();
        assert_eq!(
            paths,
            [
                PathBuf::from("shop/generated/custom_fields.rs"),
                PathBuf::from("shop/generated/product_variant_attributes.rs"),
            ]
        );
        assert!(files[0].contents.contains("pub struct TypedColorFields {"));
        assert!(files[1].contents.contains("pub related: Option<Box<TypedShoeVariantAttributes>>,"));
    }

    #[test]
    fn test_empty_domain_is_skipped() {
        let ir = SchemaIr::new(
            vec![Type::new("t-1", "color").with_field("colorName", FieldType::Enum)],
            Vec::new(),
        );
        let config = Configuration::default();
        let files = Generator::new(&ir, &config).generate().expect("generate");

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, PathBuf::from("generated/custom_fields.rs"));
    }

    #[test]
    fn test_empty_unit_is_an_error() {
        let ir = SchemaIr::default();
        let config = Configuration::default();
        let generator = Generator::new(&ir, &config);

        assert!(matches!(
            generator.custom_fields_unit(),
            Err(CodegenError::EmptyCollection { .. })
        ));
        assert!(generator.generate().expect("generate").is_empty());
    }

    #[test]
    fn test_generation_is_deterministic() {
        let ir = schema();
        let config = Configuration::default();
        let generator = Generator::new(&ir, &config);

        assert_eq!(
            generator.variant_attributes_unit().expect("unit"),
            generator.variant_attributes_unit().expect("unit")
        );
        assert_eq!(
            generator.generate().expect("generate"),
            generator.generate().expect("generate")
        );
    }

    #[test]
    fn test_failure_produces_no_files() {
        let ir = SchemaIr::new(
            vec![
                Type::new("t-1", "color")
                    .with_field("a-b", FieldType::String)
                    .with_field("a_b", FieldType::String),
            ],
            Vec::new(),
        );
        let config = Configuration::default();

        let result = Generator::new(&ir, &config).generate();
        assert!(matches!(result, Err(CodegenError::DuplicateField { .. })));
    }

    #[test]
    fn test_write_to_creates_directories() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let file = GeneratedFile {
            path: PathBuf::from("a/b/custom_fields.rs"),
            contents: "// empty\n".into(),
        };

        let written = file.write_to(dir.path()).expect("write");
        assert_eq!(written, dir.path().join("a/b/custom_fields.rs"));
        assert_eq!(
            std::fs::read_to_string(written).expect("read"),
            "// empty\n"
        );
    }
}
