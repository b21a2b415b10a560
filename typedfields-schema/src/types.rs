//! Field type definitions.
//!
//! This module contains the abstract field-type taxonomy of both schema
//! domains (custom fields and product variant attributes) together with the
//! reference-kind enumerations each domain defines independently.

use serde::{Deserialize, Serialize};

/// Type of a custom field.
///
/// Deserialized from the `{"name": "<Kind>", ...}` shape. Tags the generator
/// does not know about decode to [`FieldType::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name")]
pub enum FieldType {
    /// Boolean value.
    Boolean,
    /// Plain string.
    String,
    /// Localized string.
    LocalizedString,
    /// Plain enum value.
    Enum,
    /// Localized enum value.
    LocalizedEnum,
    /// Integer number.
    Number,
    /// Money amount.
    Money,
    /// Calendar date.
    Date,
    /// Time of day.
    Time,
    /// Date and time.
    DateTime,
    /// Reference to another resource.
    Reference {
        /// Kind of the referenced resource.
        #[serde(rename = "referenceTypeId")]
        reference_type_id: CustomFieldReferenceTypeId,
    },
    /// Set of values of one element type.
    Set {
        /// Element type.
        #[serde(rename = "elementType")]
        element_type: Box<FieldType>,
    },
    /// Any type tag not covered above.
    #[serde(other)]
    Unknown,
}

impl FieldType {
    /// Creates a set type over the given element type.
    #[must_use]
    pub fn set_of(element_type: Self) -> Self {
        Self::Set {
            element_type: Box::new(element_type),
        }
    }
}

/// Type of a product variant attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "lowercase")]
pub enum AttributeType {
    /// Boolean value.
    Boolean,
    /// Plain text.
    Text,
    /// Localizable text.
    #[serde(rename = "ltext")]
    LocalizableText,
    /// Plain enum value.
    Enum,
    /// Localized enum value.
    #[serde(rename = "lenum")]
    LocalizedEnum,
    /// Decimal number.
    Number,
    /// Money amount.
    Money,
    /// Calendar date.
    Date,
    /// Time of day.
    Time,
    /// Date and time.
    #[serde(rename = "datetime")]
    DateTime,
    /// Reference to another resource.
    Reference {
        /// Kind of the referenced resource.
        #[serde(rename = "referenceTypeId")]
        reference_type_id: ReferenceTypeId,
    },
    /// Set of values of one element type.
    Set {
        /// Element type.
        #[serde(rename = "elementType")]
        element_type: Box<AttributeType>,
    },
    /// Attribute set governed by another product type.
    Nested {
        /// Reference to the governing product type.
        #[serde(rename = "typeReference")]
        type_reference: ProductTypeReference,
    },
    /// Any type tag not covered above.
    #[serde(other)]
    Unknown,
}

impl AttributeType {
    /// Creates a set type over the given element type.
    #[must_use]
    pub fn set_of(element_type: Self) -> Self {
        Self::Set {
            element_type: Box::new(element_type),
        }
    }

    /// Creates a nested type governed by the product type with the given id.
    #[must_use]
    pub fn nested(product_type_id: impl Into<String>) -> Self {
        Self::Nested {
            type_reference: ProductTypeReference {
                id: product_type_id.into(),
            },
        }
    }
}

/// Reference to a product type by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductTypeReference {
    /// Product type id.
    pub id: String,
}

/// Resource kinds a custom field may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CustomFieldReferenceTypeId {
    /// Cart.
    Cart,
    /// Category.
    Category,
    /// Channel.
    Channel,
    /// Customer.
    Customer,
    /// Custom object.
    KeyValueDocument,
    /// Order.
    Order,
    /// Product.
    Product,
    /// Product type.
    ProductType,
    /// Review.
    Review,
    /// Shipping method.
    ShippingMethod,
    /// State.
    State,
    /// Zone.
    Zone,
    /// Any kind not listed above.
    #[serde(other)]
    Unknown,
}

impl CustomFieldReferenceTypeId {
    /// All known reference kinds, in declaration order.
    pub const ALL: [Self; 12] = [
        Self::Cart,
        Self::Category,
        Self::Channel,
        Self::Customer,
        Self::KeyValueDocument,
        Self::Order,
        Self::Product,
        Self::ProductType,
        Self::Review,
        Self::ShippingMethod,
        Self::State,
        Self::Zone,
    ];

    /// Returns the wire name of the reference kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cart => "cart",
            Self::Category => "category",
            Self::Channel => "channel",
            Self::Customer => "customer",
            Self::KeyValueDocument => "key-value-document",
            Self::Order => "order",
            Self::Product => "product",
            Self::ProductType => "product-type",
            Self::Review => "review",
            Self::ShippingMethod => "shipping-method",
            Self::State => "state",
            Self::Zone => "zone",
            Self::Unknown => "unknown",
        }
    }
}

/// Resource kinds a product attribute may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReferenceTypeId {
    /// Cart.
    Cart,
    /// Cart discount.
    CartDiscount,
    /// Category.
    Category,
    /// Channel.
    Channel,
    /// Customer.
    Customer,
    /// Customer group.
    CustomerGroup,
    /// Discount code.
    DiscountCode,
    /// Inventory entry.
    InventoryEntry,
    /// Custom object.
    KeyValueDocument,
    /// Order.
    Order,
    /// Order edit.
    OrderEdit,
    /// Payment.
    Payment,
    /// Product.
    Product,
    /// Product discount.
    ProductDiscount,
    /// Product selection.
    ProductSelection,
    /// Product type.
    ProductType,
    /// Review.
    Review,
    /// Shipping method.
    ShippingMethod,
    /// Shopping list.
    ShoppingList,
    /// State.
    State,
    /// Store.
    Store,
    /// Tax category.
    TaxCategory,
    /// Custom type.
    Type,
    /// Zone.
    Zone,
    /// Any kind not listed above.
    #[serde(other)]
    Unknown,
}

impl ReferenceTypeId {
    /// All known reference kinds, in declaration order.
    pub const ALL: [Self; 24] = [
        Self::Cart,
        Self::CartDiscount,
        Self::Category,
        Self::Channel,
        Self::Customer,
        Self::CustomerGroup,
        Self::DiscountCode,
        Self::InventoryEntry,
        Self::KeyValueDocument,
        Self::Order,
        Self::OrderEdit,
        Self::Payment,
        Self::Product,
        Self::ProductDiscount,
        Self::ProductSelection,
        Self::ProductType,
        Self::Review,
        Self::ShippingMethod,
        Self::ShoppingList,
        Self::State,
        Self::Store,
        Self::TaxCategory,
        Self::Type,
        Self::Zone,
    ];

    /// Returns the wire name of the reference kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cart => "cart",
            Self::CartDiscount => "cart-discount",
            Self::Category => "category",
            Self::Channel => "channel",
            Self::Customer => "customer",
            Self::CustomerGroup => "customer-group",
            Self::DiscountCode => "discount-code",
            Self::InventoryEntry => "inventory-entry",
            Self::KeyValueDocument => "key-value-document",
            Self::Order => "order",
            Self::OrderEdit => "order-edit",
            Self::Payment => "payment",
            Self::Product => "product",
            Self::ProductDiscount => "product-discount",
            Self::ProductSelection => "product-selection",
            Self::ProductType => "product-type",
            Self::Review => "review",
            Self::ShippingMethod => "shipping-method",
            Self::ShoppingList => "shopping-list",
            Self::State => "state",
            Self::Store => "store",
            Self::TaxCategory => "tax-category",
            Self::Type => "type",
            Self::Zone => "zone",
            Self::Unknown => "unknown",
        }
    }
}
