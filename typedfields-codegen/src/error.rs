//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema loading error.
    #[error("schema parse error: {0}")]
    Parse(#[from] typedfields_schema::ParseError),

    /// Schema validation error.
    #[error("schema error: {0}")]
    Schema(#[from] typedfields_schema::SchemaError),

    /// Configuration error.
    #[error("configuration error: {message}")]
    Config {
        /// Error message.
        message: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An entity collection handed to the assembler was empty.
    #[error("no {domain} definitions to generate")]
    EmptyCollection {
        /// Domain name.
        domain: &'static str,
    },

    /// A name could not be turned into a valid identifier.
    #[error("invalid {what} '{identifier}' derived for '{entity}'")]
    InvalidIdentifier {
        /// What the identifier names (class, field, constant).
        what: &'static str,
        /// The offending identifier.
        identifier: String,
        /// Owning entity key.
        entity: String,
    },

    /// Two fields of one class resolve to the same output name.
    #[error("fields '{first}' and '{second}' of '{class}' both map to '{name}'")]
    DuplicateField {
        /// Class name.
        class: String,
        /// Colliding output name.
        name: String,
        /// Raw name of the first field.
        first: String,
        /// Raw name of the second field.
        second: String,
    },

    /// Two constants of one class resolve to the same name.
    #[error("attributes '{first}' and '{second}' of '{class}' both map to constant '{name}'")]
    DuplicateConstant {
        /// Class name.
        class: String,
        /// Colliding constant name.
        name: String,
        /// Raw name of the first attribute.
        first: String,
        /// Raw name of the second attribute.
        second: String,
    },

    /// Two entities of one unit resolve to the same class name.
    #[error("'{first}' and '{second}' both generate class '{name}'")]
    DuplicateClass {
        /// Colliding class name.
        name: String,
        /// Key of the first entity.
        first: String,
        /// Key of the second entity.
        second: String,
    },

    /// Code generation error.
    #[error("generation error: {message}")]
    Generation {
        /// Error message.
        message: String,
    },
}

impl CodegenError {
    /// Creates a generation error with the given message.
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    /// Creates a configuration error with the given message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates an invalid identifier error.
    pub fn invalid_identifier(
        what: &'static str,
        identifier: impl Into<String>,
        entity: impl Into<String>,
    ) -> Self {
        Self::InvalidIdentifier {
            what,
            identifier: identifier.into(),
            entity: entity.into(),
        }
    }
}
