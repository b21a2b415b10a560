//! Rust type rendering.

use crate::model::{ATTRIBUTE, OutputType, Primitive, SdkType, TypeKind};
use std::collections::BTreeSet;

/// Renders output types as Rust type expressions and records the imports
/// they need.
#[derive(Debug)]
pub struct TypeRenderer<'a> {
    sdk_crate: &'a str,
    imports: BTreeSet<String>,
}

impl<'a> TypeRenderer<'a> {
    /// Creates a type renderer importing SDK types from `sdk_crate`.
    #[must_use]
    pub fn new(sdk_crate: &'a str) -> Self {
        Self {
            sdk_crate,
            imports: BTreeSet::new(),
        }
    }

    /// Renders the type of a struct field.
    ///
    /// Nullable types become `Option`; a class held directly is boxed so
    /// that self-referencing structs have a finite size.
    pub fn field_type(&mut self, ty: &OutputType) -> String {
        let inner = self.kind(&ty.kind, true);
        if ty.nullable {
            format!("Option<{inner}>")
        } else {
            inner
        }
    }

    /// Imports an SDK type and returns the name to refer to it by.
    pub fn sdk(&mut self, sdk: SdkType) -> &'static str {
        self.imports
            .insert(format!("{}::{}::{}", self.sdk_crate, sdk.module, sdk.name));
        sdk.name
    }

    /// Records an arbitrary import path.
    pub fn import(&mut self, path: &str) {
        self.imports.insert(path.to_string());
    }

    /// Consumes the renderer and returns the sorted import paths.
    #[must_use]
    pub fn into_imports(self) -> BTreeSet<String> {
        self.imports
    }

    /// Renders a set element. Elements of a JSON array are never absent, so
    /// the element's nullability is not rendered.
    fn element_type(&mut self, ty: &OutputType) -> String {
        self.kind(&ty.kind, false)
    }

    fn kind(&mut self, kind: &TypeKind, box_class: bool) -> String {
        match kind {
            TypeKind::Primitive(primitive) => self.primitive(*primitive).to_string(),
            TypeKind::Sdk(sdk) => self.sdk(*sdk).to_string(),
            TypeKind::Set(element) => format!("Vec<{}>", self.element_type(element)),
            TypeKind::Class(name) if box_class => format!("Box<{name}>"),
            TypeKind::Class(name) => name.clone(),
            TypeKind::AttributeList => format!("Vec<{}>", self.sdk(ATTRIBUTE)),
            TypeKind::Any => {
                self.import("serde_json::Value");
                "Value".to_string()
            }
        }
    }

    fn primitive(&mut self, primitive: Primitive) -> &'static str {
        match primitive {
            Primitive::Boolean => "bool",
            Primitive::String => "String",
            Primitive::Int => "i32",
            Primitive::Double => "f64",
            Primitive::Date => {
                self.import("chrono::NaiveDate");
                "NaiveDate"
            }
            Primitive::Time => {
                self.import("chrono::NaiveTime");
                "NaiveTime"
            }
            Primitive::DateTime => {
                self.import("chrono::DateTime");
                self.import("chrono::Utc");
                "DateTime<Utc>"
            }
        }
    }
}
