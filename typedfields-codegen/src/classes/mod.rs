//! Class synthesis.
//!
//! One output class per schema entity. Custom-field types produce an outer
//! projection class wrapping a nested `Fields` record; product types produce
//! a flat class with a constant table of raw attribute names.

pub mod attributes;
pub mod custom_fields;

use crate::config::Configuration;
use crate::error::CodegenError;
use crate::mapper::TypeMapper;
use crate::model::{OutputConstant, OutputField};
use crate::naming::Naming;
use std::collections::HashMap;
use typedfields_schema::SchemaIr;

/// Synthesizes output classes for schema entities.
#[derive(Debug, Clone, Copy)]
pub struct ClassSynthesizer<'a> {
    config: &'a Configuration,
    naming: Naming<'a>,
    mapper: TypeMapper<'a>,
}

impl<'a> ClassSynthesizer<'a> {
    /// Creates a new class synthesizer.
    #[must_use]
    pub const fn new(ir: &'a SchemaIr, config: &'a Configuration) -> Self {
        Self {
            config,
            naming: Naming::new(config),
            mapper: TypeMapper::new(ir, config),
        }
    }
}

/// Fails if two fields of a class share an output name.
fn ensure_unique_fields(class: &str, fields: &[OutputField]) -> Result<(), CodegenError> {
    let mut seen: HashMap<&str, &str> = HashMap::with_capacity(fields.len());
    for field in fields {
        if let Some(first) = seen.insert(&field.name, &field.raw_name) {
            return Err(CodegenError::DuplicateField {
                class: class.to_string(),
                name: field.name.clone(),
                first: first.to_string(),
                second: field.raw_name.clone(),
            });
        }
    }
    Ok(())
}

/// Fails if two constants of a class share a name.
fn ensure_unique_constants(class: &str, constants: &[OutputConstant]) -> Result<(), CodegenError> {
    let mut seen: HashMap<&str, &str> = HashMap::with_capacity(constants.len());
    for constant in constants {
        if let Some(first) = seen.insert(&constant.name, &constant.value) {
            return Err(CodegenError::DuplicateConstant {
                class: class.to_string(),
                name: constant.name.clone(),
                first: first.to_string(),
                second: constant.value.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OutputType, Primitive, TypeKind};

    fn field(name: &str, raw_name: &str) -> OutputField {
        OutputField {
            name: name.into(),
            ty: OutputType::new(TypeKind::Primitive(Primitive::String), true),
            raw_name: raw_name.into(),
        }
    }

    #[test]
    fn test_unique_fields_pass() {
        let fields = [field("a", "a"), field("b", "b")];
        assert!(ensure_unique_fields("Foo", &fields).is_ok());
    }

    #[test]
    fn test_duplicate_fields_reported() {
        let fields = [field("a_b", "a-b"), field("a_b", "a.b")];
        let err = ensure_unique_fields("Foo", &fields).expect_err("should collide");

        match err {
            CodegenError::DuplicateField {
                class,
                name,
                first,
                second,
            } => {
                assert_eq!(class, "Foo");
                assert_eq!(name, "a_b");
                assert_eq!(first, "a-b");
                assert_eq!(second, "a.b");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_duplicate_constants_reported() {
        let constants = [
            OutputConstant {
                name: "SIZE".into(),
                value: "size".into(),
            },
            OutputConstant {
                name: "SIZE".into(),
                value: "Size".into(),
            },
        ];
        let result = ensure_unique_constants("Foo", &constants);
        assert!(matches!(result, Err(CodegenError::DuplicateConstant { .. })));
    }
}
