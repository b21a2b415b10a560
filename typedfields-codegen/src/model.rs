//! Language-agnostic output model.
//!
//! The synthesizers describe every generated class with these types; the
//! renderer turns them into source text.

use std::fmt;

/// Schema domain a unit or class belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    /// Custom fields attached to resources by a type.
    CustomFields,
    /// Attributes attached to product variants by a product type.
    VariantAttributes,
}

impl Domain {
    /// Returns the human-readable domain name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CustomFields => "custom field type",
            Self::VariantAttributes => "product type",
        }
    }

    /// Returns the output module name for the domain.
    #[must_use]
    pub const fn module(&self) -> &'static str {
        match self {
            Self::CustomFields => "custom_fields",
            Self::VariantAttributes => "product_variant_attributes",
        }
    }
}

/// Fixed output primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    /// Boolean.
    Boolean,
    /// String.
    String,
    /// 32-bit signed integer.
    Int,
    /// 64-bit floating point.
    Double,
    /// Calendar date.
    Date,
    /// Time of day.
    Time,
    /// Date and time with zone.
    DateTime,
}

/// A type provided by the remote API's client library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SdkType {
    /// Module within the client library.
    pub module: &'static str,
    /// Type name.
    pub name: &'static str,
}

impl SdkType {
    /// Creates a new SDK type descriptor.
    #[must_use]
    pub const fn new(module: &'static str, name: &'static str) -> Self {
        Self { module, name }
    }
}

impl fmt::Display for SdkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.module, self.name)
    }
}

/// Localized text container.
pub const LOCALIZED_STRING: SdkType = SdkType::new("common", "LocalizedString");
/// Typed money container.
pub const TYPED_MONEY: SdkType = SdkType::new("common", "TypedMoney");
/// Generic reference fallback.
pub const REFERENCE: SdkType = SdkType::new("common", "Reference");
/// Plain enum value of a custom field.
pub const CUSTOM_FIELD_ENUM_VALUE: SdkType = SdkType::new("types", "CustomFieldEnumValue");
/// Localized enum value of a custom field.
pub const CUSTOM_FIELD_LOCALIZED_ENUM_VALUE: SdkType =
    SdkType::new("types", "CustomFieldLocalizedEnumValue");
/// Plain enum value of an attribute.
pub const ATTRIBUTE_PLAIN_ENUM_VALUE: SdkType =
    SdkType::new("product_type", "AttributePlainEnumValue");
/// Localized enum value of an attribute.
pub const ATTRIBUTE_LOCALIZED_ENUM_VALUE: SdkType =
    SdkType::new("product_type", "AttributeLocalizedEnumValue");
/// Untyped product attribute.
pub const ATTRIBUTE: SdkType = SdkType::new("product", "Attribute");
/// Raw custom-fields carrier.
pub const CUSTOM_FIELDS: SdkType = SdkType::new("types", "CustomFields");
/// Reference to a custom-field type.
pub const TYPE_REFERENCE: SdkType = SdkType::new("types", "TypeReference");

/// Shape of an output type, before nullability.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// Fixed primitive.
    Primitive(Primitive),
    /// Client library type.
    Sdk(SdkType),
    /// Set of another type.
    Set(Box<OutputType>),
    /// Another generated class, by name.
    Class(String),
    /// List of untyped attributes, for unresolvable nested types.
    AttributeList,
    /// Any value, for unrecognised field types.
    Any,
}

/// Concrete output type with nullability.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OutputType {
    /// Type shape.
    pub kind: TypeKind,
    /// Whether the value may be absent.
    pub nullable: bool,
}

impl OutputType {
    /// Creates an output type.
    #[must_use]
    pub const fn new(kind: TypeKind, nullable: bool) -> Self {
        Self { kind, nullable }
    }

    /// Returns true if this type, or any set element within it, is one of
    /// the degraded fallbacks.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        match &self.kind {
            TypeKind::Sdk(sdk) => *sdk == REFERENCE,
            TypeKind::AttributeList | TypeKind::Any => true,
            TypeKind::Set(element) => element.is_fallback(),
            TypeKind::Primitive(_) | TypeKind::Class(_) => false,
        }
    }
}

/// One field of a generated class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputField {
    /// Output field name.
    pub name: String,
    /// Output type.
    pub ty: OutputType,
    /// Raw schema name.
    pub raw_name: String,
}

/// One entry of a constant table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConstant {
    /// Constant name.
    pub name: String,
    /// Raw schema name the constant holds.
    pub value: String,
}

/// Equality semantics of a generated class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Equality {
    /// Structural equality, hash and string representation from the fields.
    Structural,
    /// Plain marker type without generated equality.
    Marker,
}

impl Equality {
    /// Returns the equality variant for a field count.
    #[must_use]
    pub const fn for_field_count(count: usize) -> Self {
        if count == 0 { Self::Marker } else { Self::Structural }
    }
}

/// Capability every generated variant-attributes class satisfies.
pub const TYPED_VARIANT_ATTRIBUTES: &str = "TypedVariantAttributes";

/// Capability every generated custom-fields class satisfies.
pub const TYPED_CUSTOM_FIELDS: &str = "TypedCustomFields";

/// Name of the record nested in a custom-fields class.
pub const FIELDS_CLASS_NAME: &str = "Fields";

/// Which raw carrier a class is the typed projection of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Projection {
    /// Projection of a custom-fields carrier of the given type.
    CustomFields {
        /// Key of the type.
        type_key: String,
    },
    /// Projection of a variant attribute list of the given product type.
    VariantAttributes {
        /// Id of the product type.
        product_type_id: String,
    },
    /// Nested record with no carrier of its own.
    Record,
}

impl Projection {
    /// Returns the capability interface the class satisfies, if any.
    #[must_use]
    pub const fn capability(&self) -> Option<&'static str> {
        match self {
            Self::CustomFields { .. } => Some(TYPED_CUSTOM_FIELDS),
            Self::VariantAttributes { .. } => Some(TYPED_VARIANT_ATTRIBUTES),
            Self::Record => None,
        }
    }
}

/// A generated class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputClass {
    /// Class name.
    pub name: String,
    /// Fields in declaration order; also the constructor parameters.
    pub fields: Vec<OutputField>,
    /// Equality semantics.
    pub equality: Equality,
    /// Field-name constants (product attributes only).
    pub constants: Vec<OutputConstant>,
    /// Projection marker.
    pub projection: Projection,
    /// Nested class, if any.
    pub nested: Option<Box<OutputClass>>,
}

impl OutputClass {
    /// Returns the constructor parameters as (name, type) pairs.
    pub fn constructor(&self) -> impl Iterator<Item = (&str, &OutputType)> {
        self.fields.iter().map(|f| (f.name.as_str(), &f.ty))
    }

    /// Returns the class holding the typed fields: the nested record for
    /// custom-fields classes, the class itself otherwise.
    #[must_use]
    pub fn typed_fields(&self) -> &Self {
        self.nested.as_deref().unwrap_or(self)
    }
}

/// All classes generated for one entity collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputUnit {
    /// Schema domain.
    pub domain: Domain,
    /// Package path segments.
    pub package: Vec<String>,
    /// Module name within the package.
    pub module: String,
    /// Classes in input order.
    pub classes: Vec<OutputClass>,
}

impl OutputUnit {
    /// Iterates every field of every class whose type is a fallback.
    pub fn fallback_fields(&self) -> impl Iterator<Item = (&OutputClass, &OutputField)> {
        self.classes.iter().flat_map(|class| {
            class
                .typed_fields()
                .fields
                .iter()
                .filter(|field| field.ty.is_fallback())
                .map(move |field| (class, field))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nullable(kind: TypeKind) -> OutputType {
        OutputType::new(kind, true)
    }

    #[test]
    fn test_is_fallback() {
        assert!(nullable(TypeKind::Any).is_fallback());
        assert!(nullable(TypeKind::AttributeList).is_fallback());
        assert!(nullable(TypeKind::Sdk(REFERENCE)).is_fallback());
        assert!(!nullable(TypeKind::Sdk(LOCALIZED_STRING)).is_fallback());
        assert!(!nullable(TypeKind::Class("TypedShoeVariantAttributes".into())).is_fallback());

        let set_of_any = nullable(TypeKind::Set(Box::new(nullable(TypeKind::Any))));
        assert!(set_of_any.is_fallback());
        let set_of_bool = nullable(TypeKind::Set(Box::new(nullable(TypeKind::Primitive(
            Primitive::Boolean,
        )))));
        assert!(!set_of_bool.is_fallback());
    }

    #[test]
    fn test_equality_for_field_count() {
        assert_eq!(Equality::for_field_count(0), Equality::Marker);
        assert_eq!(Equality::for_field_count(3), Equality::Structural);
    }

    #[test]
    fn test_projection_capability() {
        let projection = Projection::VariantAttributes {
            product_type_id: "pt-1".into(),
        };
        assert_eq!(projection.capability(), Some("TypedVariantAttributes"));
        assert_eq!(Projection::Record.capability(), None);
    }

    #[test]
    fn test_sdk_type_display() {
        assert_eq!(CUSTOM_FIELD_ENUM_VALUE.to_string(), "types::CustomFieldEnumValue");
    }
}
