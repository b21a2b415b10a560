//! Rust code generation modules.
//!
//! Renders output units as Rust source: serde structs for every class, the
//! projection traits they implement and, for variant attributes, an enum
//! over every generated class.

pub mod classes;
pub mod types;

pub use types::TypeRenderer;

use crate::config::Configuration;
use crate::error::CodegenError;
use crate::model::{Domain, OutputUnit};
use typedfields_schema::ir::to_snake_case;

/// Keywords that can be used as raw identifiers.
const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized",
    "use", "virtual", "where", "while", "yield",
];

/// Keywords that cannot be raw identifiers.
const RESERVED: &[&str] = &["crate", "self", "super", "Self"];

/// Renders output units as Rust source files.
#[derive(Debug, Clone, Copy)]
pub struct RustRenderer<'a> {
    config: &'a Configuration,
}

impl<'a> RustRenderer<'a> {
    /// Creates a new renderer.
    #[must_use]
    pub const fn new(config: &'a Configuration) -> Self {
        Self { config }
    }

    /// Renders one unit as the contents of a Rust source file.
    ///
    /// # Errors
    /// Returns `CodegenError` if two generated items collide.
    pub fn render(&self, unit: &OutputUnit) -> Result<String, CodegenError> {
        let mut types = TypeRenderer::new(&self.config.sdk_crate);
        let body = match unit.domain {
            Domain::CustomFields => classes::render_custom_fields(&unit.classes, &mut types)?,
            Domain::VariantAttributes => {
                classes::render_variant_attributes(&unit.classes, &mut types)?
            }
        };

        let mut output = String::new();
        output.push_str("// Code generated by typedfields. DO NOT EDIT.\n");
        output.push_str(&format!(
            "// Typed {} projections for package `{}`.\n\n",
            unit.domain.as_str(),
            unit.package.join(".")
        ));

        output.push_str("use serde::{Deserialize, Serialize};\n");
        for path in types.into_imports() {
            output.push_str(&format!("use {path};\n"));
        }
        output.push('\n');
        output.push_str(&body);

        Ok(output)
    }
}

/// Returns true if the name is a Rust keyword.
#[must_use]
pub fn is_keyword(name: &str) -> bool {
    KEYWORDS.contains(&name) || RESERVED.contains(&name)
}

/// Returns the Rust identifier for an output field name.
#[must_use]
pub fn rust_ident(name: &str) -> String {
    let snake = to_snake_case(name);
    if RESERVED.contains(&snake.as_str()) {
        format!("{snake}_")
    } else if KEYWORDS.contains(&snake.as_str()) {
        format!("r#{snake}")
    } else {
        snake
    }
}
