//! Error types for schema loading and validation.

use thiserror::Error;

/// Error type for schema loading operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON decoding error.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid snapshot structure.
    #[error("invalid schema structure: {message}")]
    InvalidStructure {
        /// Error message.
        message: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error type for schema validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Two entities of the same kind share an identifier.
    #[error("duplicate {kind} '{id}'")]
    DuplicateEntity {
        /// Kind of entity (type, product type).
        kind: &'static str,
        /// The duplicated identifier.
        id: String,
    },

    /// Two fields of one entity share a raw name.
    #[error("duplicate field '{field}' in {kind} '{entity}'")]
    DuplicateField {
        /// Kind of entity.
        kind: &'static str,
        /// Owning entity key.
        entity: String,
        /// Raw field name.
        field: String,
    },

    /// A required identifier is empty.
    #[error("empty {what} in {kind} '{entity}'")]
    EmptyName {
        /// Kind of entity.
        kind: &'static str,
        /// Owning entity (id or key, whichever is known).
        entity: String,
        /// What was empty (id, key, name, field name).
        what: &'static str,
    },
}

impl ParseError {
    /// Creates an invalid structure error.
    pub fn invalid_structure(message: impl Into<String>) -> Self {
        Self::InvalidStructure {
            message: message.into(),
        }
    }
}

impl SchemaError {
    /// Creates a duplicate entity error.
    pub fn duplicate_entity(kind: &'static str, id: impl Into<String>) -> Self {
        Self::DuplicateEntity { kind, id: id.into() }
    }

    /// Creates a duplicate field error.
    pub fn duplicate_field(
        kind: &'static str,
        entity: impl Into<String>,
        field: impl Into<String>,
    ) -> Self {
        Self::DuplicateField {
            kind,
            entity: entity.into(),
            field: field.into(),
        }
    }

    /// Creates an empty name error.
    pub fn empty(kind: &'static str, entity: impl Into<String>, what: &'static str) -> Self {
        Self::EmptyName {
            kind,
            entity: entity.into(),
            what,
        }
    }
}
