//! Reference-kind mapping.
//!
//! Each schema domain defines its own reference-kind enumeration, so each has
//! its own table. Both tables are total: kinds without a dedicated reference
//! type map to the generic [`REFERENCE`].

use crate::model::{REFERENCE, SdkType};
use typedfields_schema::{CustomFieldReferenceTypeId, ReferenceTypeId};

/// Maps a custom-field reference kind to its output reference type.
#[must_use]
pub const fn custom_field_reference(kind: CustomFieldReferenceTypeId) -> SdkType {
    use CustomFieldReferenceTypeId as Kind;

    match kind {
        Kind::Cart => SdkType::new("cart", "CartReference"),
        Kind::Category => SdkType::new("category", "CategoryReference"),
        Kind::Channel => SdkType::new("channel", "ChannelReference"),
        Kind::Customer => SdkType::new("customer", "CustomerReference"),
        Kind::KeyValueDocument => SdkType::new("custom_object", "CustomObjectReference"),
        Kind::Order => SdkType::new("order", "OrderReference"),
        Kind::Product => SdkType::new("product", "ProductReference"),
        Kind::ProductType => SdkType::new("product_type", "ProductTypeReference"),
        Kind::Review => SdkType::new("review", "ReviewReference"),
        Kind::ShippingMethod => SdkType::new("shipping_method", "ShippingMethodReference"),
        Kind::State => SdkType::new("state", "StateReference"),
        Kind::Zone => SdkType::new("zone", "ZoneReference"),
        Kind::Unknown => REFERENCE,
    }
}

/// Maps a product-attribute reference kind to its output reference type.
#[must_use]
pub const fn attribute_reference(kind: ReferenceTypeId) -> SdkType {
    use ReferenceTypeId as Kind;

    match kind {
        Kind::Cart => SdkType::new("cart", "CartReference"),
        Kind::CartDiscount => SdkType::new("cart_discount", "CartDiscountReference"),
        Kind::Category => SdkType::new("category", "CategoryReference"),
        Kind::Channel => SdkType::new("channel", "ChannelReference"),
        Kind::Customer => SdkType::new("customer", "CustomerReference"),
        Kind::CustomerGroup => SdkType::new("customer_group", "CustomerGroupReference"),
        Kind::DiscountCode => SdkType::new("discount_code", "DiscountCodeReference"),
        Kind::InventoryEntry => SdkType::new("inventory", "InventoryEntryReference"),
        Kind::KeyValueDocument => SdkType::new("custom_object", "CustomObjectReference"),
        Kind::Order => SdkType::new("order", "OrderReference"),
        Kind::OrderEdit => SdkType::new("order_edit", "OrderEditReference"),
        Kind::Payment => SdkType::new("payment", "PaymentReference"),
        Kind::Product => SdkType::new("product", "ProductReference"),
        Kind::ProductDiscount => SdkType::new("product_discount", "ProductDiscountReference"),
        Kind::ProductSelection => {
            SdkType::new("product_selection", "ProductSelectionReference")
        }
        Kind::ProductType => SdkType::new("product_type", "ProductTypeReference"),
        Kind::Review => SdkType::new("review", "ReviewReference"),
        Kind::ShippingMethod => SdkType::new("shipping_method", "ShippingMethodReference"),
        Kind::ShoppingList => SdkType::new("shopping_list", "ShoppingListReference"),
        Kind::State => SdkType::new("state", "StateReference"),
        Kind::Store => SdkType::new("store", "StoreReference"),
        Kind::TaxCategory => SdkType::new("tax_category", "TaxCategoryReference"),
        Kind::Type => SdkType::new("types", "TypeReference"),
        Kind::Zone => SdkType::new("zone", "ZoneReference"),
        Kind::Unknown => REFERENCE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_custom_field_references_are_dedicated() {
        let mapped: HashSet<_> = CustomFieldReferenceTypeId::ALL
            .into_iter()
            .map(custom_field_reference)
            .collect();

        assert_eq!(mapped.len(), CustomFieldReferenceTypeId::ALL.len());
        assert!(!mapped.contains(&REFERENCE));
    }

    #[test]
    fn test_attribute_references_are_dedicated() {
        let mapped: HashSet<_> = ReferenceTypeId::ALL
            .into_iter()
            .map(attribute_reference)
            .collect();

        assert_eq!(mapped.len(), ReferenceTypeId::ALL.len());
        assert!(!mapped.contains(&REFERENCE));
    }

    #[test]
    fn test_unknown_falls_back_to_generic_reference() {
        assert_eq!(
            custom_field_reference(CustomFieldReferenceTypeId::Unknown),
            REFERENCE
        );
        assert_eq!(attribute_reference(ReferenceTypeId::Unknown), REFERENCE);
    }

    #[test]
    fn test_shared_kinds_agree() {
        assert_eq!(
            custom_field_reference(CustomFieldReferenceTypeId::KeyValueDocument),
            attribute_reference(ReferenceTypeId::KeyValueDocument)
        );
        assert_eq!(
            custom_field_reference(CustomFieldReferenceTypeId::Cart).name,
            "CartReference"
        );
        assert_eq!(
            attribute_reference(ReferenceTypeId::TaxCategory).name,
            "TaxCategoryReference"
        );
    }
}
