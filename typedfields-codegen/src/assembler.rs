//! File assembly.
//!
//! Collects the classes synthesized for one entity collection into an
//! [`OutputUnit`]. Entities are processed in input order and the first
//! failure aborts the whole unit.

use crate::classes::ClassSynthesizer;
use crate::config::Configuration;
use crate::error::CodegenError;
use crate::model::{Domain, OutputClass, OutputUnit};
use std::collections::HashMap;
use tracing::info;
use typedfields_schema::{ProductType, SchemaEntity, SchemaIr, Type};

/// Assembles output units from entity collections.
#[derive(Debug, Clone, Copy)]
pub struct FileAssembler<'a> {
    config: &'a Configuration,
    synthesizer: ClassSynthesizer<'a>,
}

impl<'a> FileAssembler<'a> {
    /// Creates a new file assembler.
    #[must_use]
    pub const fn new(ir: &'a SchemaIr, config: &'a Configuration) -> Self {
        Self {
            config,
            synthesizer: ClassSynthesizer::new(ir, config),
        }
    }

    /// Assembles the custom-fields unit.
    ///
    /// # Errors
    /// Returns `CodegenError::EmptyCollection` for an empty collection, or
    /// the first synthesis error.
    pub fn custom_fields(&self, types: &[Type]) -> Result<OutputUnit, CodegenError> {
        self.assemble(Domain::CustomFields, types, |ty| {
            self.synthesizer.custom_fields(ty)
        })
    }

    /// Assembles the variant-attributes unit.
    ///
    /// # Errors
    /// Returns `CodegenError::EmptyCollection` for an empty collection, or
    /// the first synthesis error.
    pub fn variant_attributes(
        &self,
        product_types: &[ProductType],
    ) -> Result<OutputUnit, CodegenError> {
        self.assemble(Domain::VariantAttributes, product_types, |product_type| {
            self.synthesizer.variant_attributes(product_type)
        })
    }

    fn assemble<E, F>(
        &self,
        domain: Domain,
        entities: &[E],
        synthesize: F,
    ) -> Result<OutputUnit, CodegenError>
    where
        E: SchemaEntity,
        F: Fn(&E) -> Result<OutputClass, CodegenError>,
    {
        if entities.is_empty() {
            return Err(CodegenError::EmptyCollection {
                domain: domain.as_str(),
            });
        }

        let mut owners: HashMap<String, &str> = HashMap::with_capacity(entities.len());
        let mut classes = Vec::with_capacity(entities.len());

        for entity in entities {
            let class = synthesize(entity)?;
            if let Some(first) = owners.insert(class.name.clone(), entity.key()) {
                return Err(CodegenError::DuplicateClass {
                    name: class.name,
                    first: first.to_string(),
                    second: entity.key().to_string(),
                });
            }
            classes.push(class);
        }

        info!(
            domain = domain.as_str(),
            classes = classes.len(),
            "assembled output unit"
        );

        Ok(OutputUnit {
            domain,
            package: self
                .config
                .package_segments()
                .into_iter()
                .map(str::to_string)
                .collect(),
            module: domain.module().to_string(),
            classes,
        })
    }
}
